use std::fmt;
use std::time::Duration;

use clap::ValueEnum;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum Difficulty {
    Beginner,
    Easy,
    Medium,
    Hard,
    Expert,
    Master,
}

impl Difficulty {
    /// Display name, also the key in the high-score file.
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
            Difficulty::Master => "Master",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DifficultyProfile {
    pub difficulty: Difficulty,
    /// Snake moves per second.
    pub tick_rate: u32,
    pub score_multiplier: f32,
    pub growth_per_food: u32,
    pub walls_are_lethal: bool,
    pub description: &'static str,
}

impl DifficultyProfile {
    const fn new(
        difficulty: Difficulty,
        tick_rate: u32,
        score_multiplier: f32,
        growth_per_food: u32,
        walls_are_lethal: bool,
        description: &'static str,
    ) -> Self {
        Self {
            difficulty,
            tick_rate,
            score_multiplier,
            growth_per_food,
            walls_are_lethal,
            description,
        }
    }

    pub fn name(&self) -> &'static str {
        self.difficulty.name()
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate.max(1) as f64)
    }

    /// Points for one piece of food, truncated like the scoreboard shows it.
    pub fn score_delta(&self, base_value: u32) -> u32 {
        (base_value as f32 * self.score_multiplier).floor() as u32
    }
}

pub const CLASSIC_PROFILES: &[DifficultyProfile] = &[DifficultyProfile::new(
    Difficulty::Medium,
    15,
    1.0,
    1,
    false,
    "The classic experience",
)];

pub const ENHANCED_PROFILES: &[DifficultyProfile] = &[
    DifficultyProfile::new(Difficulty::Easy, 10, 1.0, 1, false, "A gentle challenge"),
    DifficultyProfile::new(Difficulty::Medium, 15, 1.0, 1, false, "The classic experience"),
    DifficultyProfile::new(Difficulty::Hard, 20, 1.0, 1, false, "For skilled players"),
];

pub const MODERN_PROFILES: &[DifficultyProfile] = &[
    DifficultyProfile::new(Difficulty::Beginner, 6, 1.0, 1, false, "Perfect for beginners!"),
    DifficultyProfile::new(Difficulty::Easy, 8, 1.2, 1, false, "A gentle challenge"),
    DifficultyProfile::new(Difficulty::Medium, 12, 1.5, 1, false, "The classic experience"),
    DifficultyProfile::new(Difficulty::Hard, 16, 2.0, 2, true, "For skilled players"),
    DifficultyProfile::new(Difficulty::Expert, 20, 2.5, 2, true, "A true challenge"),
    DifficultyProfile::new(Difficulty::Master, 25, 3.0, 3, true, "Only for the best!"),
];

pub fn profile_for(
    profiles: &'static [DifficultyProfile],
    difficulty: Difficulty,
) -> Option<&'static DifficultyProfile> {
    profiles.iter().find(|p| p.difficulty == difficulty)
}

/// Item after `current`, wrapping to the first. Falls back to the first item
/// when `current` is not in the list. Panics on an empty list.
pub fn cycle<T: Copy + PartialEq>(items: &[T], current: T) -> T {
    let next = items
        .iter()
        .position(|item| *item == current)
        .map_or(0, |index| (index + 1) % items.len());
    items[next]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        let order: Vec<Difficulty> = MODERN_PROFILES.iter().map(|p| p.difficulty).collect();
        assert_eq!(cycle(&order, Difficulty::Beginner), Difficulty::Easy);
        assert_eq!(cycle(&order, Difficulty::Master), Difficulty::Beginner);

        let mut current = Difficulty::Medium;
        for _ in 0..order.len() {
            current = cycle(&order, current);
        }
        assert_eq!(current, Difficulty::Medium);
    }

    #[test]
    fn test_cycle_unknown_picks_first() {
        let order = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
        assert_eq!(cycle(&order, Difficulty::Master), Difficulty::Easy);
    }

    #[test]
    fn test_score_delta() {
        let easy = profile_for(MODERN_PROFILES, Difficulty::Easy).unwrap();
        assert_eq!(easy.score_delta(10), 12);
        assert_eq!(easy.score_delta(1), 1);
        let expert = profile_for(MODERN_PROFILES, Difficulty::Expert).unwrap();
        assert_eq!(expert.score_delta(10), 25);
        let medium = profile_for(ENHANCED_PROFILES, Difficulty::Medium).unwrap();
        assert_eq!(medium.score_delta(1), 1);
    }

    #[test]
    fn test_modern_walls_turn_lethal_from_hard() {
        for profile in MODERN_PROFILES {
            assert_eq!(profile.walls_are_lethal, profile.difficulty >= Difficulty::Hard);
        }
    }

    #[test]
    fn test_tick_interval() {
        let profile = profile_for(CLASSIC_PROFILES, Difficulty::Medium).unwrap();
        assert_eq!(profile.tick_interval(), Duration::from_secs_f64(1.0 / 15.0));
        assert!(profile_for(CLASSIC_PROFILES, Difficulty::Hard).is_none());
    }
}
