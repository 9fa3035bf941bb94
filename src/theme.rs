use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

// Source palettes
const BLACK: Rgb = Rgb(0, 0, 0);
const WHITE: Rgb = Rgb(255, 255, 255);
const RED: Rgb = Rgb(255, 0, 0);
const GREEN: Rgb = Rgb(0, 255, 0);
const BLUE: Rgb = Rgb(0, 0, 255);
const YELLOW: Rgb = Rgb(255, 255, 0);
const PURPLE: Rgb = Rgb(128, 0, 128);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub snake: Rgb,
    pub food: Rgb,
    pub background: Rgb,
    pub grid: Rgb,
    pub panel: Rgb,
    pub text: Rgb,
    /// Highlights: hints, selected buttons, difficulty label.
    pub accent: Rgb,
    /// Secondary highlight: descriptions, key hints.
    pub highlight: Rgb,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Theme {
    Classic,
    Ocean,
    Forest,
    Modern,
}

impl Theme {
    pub fn name(self) -> &'static str {
        match self {
            Theme::Classic => "Classic",
            Theme::Ocean => "Ocean",
            Theme::Forest => "Forest",
            Theme::Modern => "Modern",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Classic => Palette {
                snake: GREEN,
                food: RED,
                background: BLACK,
                grid: Rgb(30, 30, 30),
                panel: BLUE,
                text: WHITE,
                accent: GREEN,
                highlight: PURPLE,
            },
            Theme::Ocean => Palette {
                snake: BLUE,
                food: YELLOW,
                background: Rgb(0, 100, 200),
                grid: Rgb(0, 80, 170),
                panel: BLUE,
                text: WHITE,
                accent: GREEN,
                highlight: PURPLE,
            },
            Theme::Forest => Palette {
                snake: Rgb(34, 139, 34),
                food: Rgb(139, 69, 19),
                background: Rgb(0, 100, 0),
                grid: Rgb(0, 80, 0),
                panel: BLUE,
                text: WHITE,
                accent: GREEN,
                highlight: PURPLE,
            },
            Theme::Modern => Palette {
                snake: Rgb(138, 201, 38),
                food: Rgb(255, 89, 94),
                background: Rgb(18, 18, 18),
                grid: Rgb(30, 30, 30),
                panel: Rgb(35, 35, 35),
                text: Rgb(240, 240, 240),
                accent: Rgb(75, 139, 190),
                highlight: Rgb(255, 186, 8),
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_keep_snake_visible() {
        for theme in [Theme::Classic, Theme::Ocean, Theme::Forest, Theme::Modern] {
            let palette = theme.palette();
            assert_ne!(palette.snake, palette.background, "{theme}");
            assert_ne!(palette.food, palette.background, "{theme}");
        }
    }
}
