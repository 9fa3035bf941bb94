use std::fmt;

use clap::ValueEnum;

use crate::difficulty::{
    CLASSIC_PROFILES, Difficulty, DifficultyProfile, ENHANCED_PROFILES, MODERN_PROFILES,
};
use crate::grid::Grid;
use crate::theme::Theme;

/// Which of the three games to run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Variant {
    /// Endless play, restarts as soon as the snake dies
    Classic,
    /// Menu with difficulty, colour themes and high scores
    Enhanced,
    /// Sidebar HUD, pause, six difficulties with lethal walls on the hard end
    Modern,
}

/// Fixed parameters of a variant.
#[derive(Debug)]
pub struct VariantRules {
    pub title: &'static str,
    pub window_width: i32,
    pub window_height: i32,
    pub cell_size: i32,
    /// HUD column left of the board, in pixels.
    pub sidebar_width: i32,
    pub grid: Grid,
    /// Points per food before the difficulty multiplier.
    pub base_score: u32,
    pub profiles: &'static [DifficultyProfile],
    pub default_difficulty: Difficulty,
    pub themes: &'static [Theme],
    pub has_menu: bool,
    pub pausable: bool,
    pub keeps_high_scores: bool,
}

static CLASSIC: VariantRules = VariantRules {
    title: "Snake Game",
    window_width: 800,
    window_height: 600,
    cell_size: 20,
    sidebar_width: 0,
    grid: Grid::for_window(800, 600, 0, 20),
    base_score: 1,
    profiles: CLASSIC_PROFILES,
    default_difficulty: Difficulty::Medium,
    themes: &[Theme::Classic],
    has_menu: false,
    pausable: false,
    keeps_high_scores: false,
};

static ENHANCED: VariantRules = VariantRules {
    title: "Enhanced Snake Game",
    window_width: 800,
    window_height: 600,
    cell_size: 20,
    sidebar_width: 0,
    grid: Grid::for_window(800, 600, 0, 20),
    base_score: 1,
    profiles: ENHANCED_PROFILES,
    default_difficulty: Difficulty::Medium,
    themes: &[Theme::Classic, Theme::Ocean, Theme::Forest],
    has_menu: true,
    pausable: false,
    keeps_high_scores: true,
};

static MODERN: VariantRules = VariantRules {
    title: "Modern Snake",
    window_width: 1024,
    window_height: 768,
    cell_size: 25,
    sidebar_width: 200,
    grid: Grid::for_window(1024, 768, 200, 25),
    base_score: 10,
    profiles: MODERN_PROFILES,
    default_difficulty: Difficulty::Medium,
    themes: &[Theme::Modern],
    has_menu: true,
    pausable: true,
    keeps_high_scores: true,
};

impl Variant {
    pub fn rules(self) -> &'static VariantRules {
        match self {
            Variant::Classic => &CLASSIC,
            Variant::Enhanced => &ENHANCED,
            Variant::Modern => &MODERN,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rules().title)
    }
}

impl VariantRules {
    pub fn difficulties(&self) -> impl Iterator<Item = Difficulty> + '_ {
        self.profiles.iter().map(|p| p.difficulty)
    }

    pub fn difficulty_names(&self) -> Vec<&'static str> {
        self.profiles.iter().map(|p| p.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::profile_for;

    #[test]
    fn test_grids_match_windows() {
        assert_eq!(Variant::Classic.rules().grid, Grid::new(40, 30));
        assert_eq!(Variant::Enhanced.rules().grid, Grid::new(40, 30));
        assert_eq!(Variant::Modern.rules().grid, Grid::new(32, 30));
    }

    #[test]
    fn test_default_difficulty_is_in_table() {
        for variant in [Variant::Classic, Variant::Enhanced, Variant::Modern] {
            let rules = variant.rules();
            assert!(profile_for(rules.profiles, rules.default_difficulty).is_some());
            assert!(!rules.themes.is_empty());
        }
    }

    #[test]
    fn test_difficulty_names() {
        assert_eq!(Variant::Enhanced.rules().difficulty_names(), ["Easy", "Medium", "Hard"]);
        assert_eq!(Variant::Modern.rules().difficulty_names().len(), 6);
    }
}
