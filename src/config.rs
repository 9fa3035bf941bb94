use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::difficulty::Difficulty;
use crate::high_scores::DEFAULT_HIGH_SCORES_PATH;
use crate::sound::DEFAULT_SOUNDS_DIR;
use crate::variant::Variant;

#[derive(Parser, Debug, Clone)]
#[command(name = "snake_arcade")]
#[command(version, about = "Snake with classic, enhanced and modern variants")]
pub struct Cli {
    /// Which game to play
    #[arg(long, value_enum, default_value = "modern")]
    pub variant: Variant,

    /// Difficulty selected when the game opens
    #[arg(long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// High-score file
    #[arg(long, default_value = DEFAULT_HIGH_SCORES_PATH)]
    pub scores: PathBuf,

    /// Directory holding eat.wav and crash.wav
    #[arg(long, default_value = DEFAULT_SOUNDS_DIR)]
    pub sounds: PathBuf,

    /// Sound effect volume between 0 and 1
    #[arg(long, default_value_t = 1.0)]
    pub volume: f32,

    #[arg(long, default_value = "snake_arcade.log")]
    pub log_file: PathBuf,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Cli {
    pub fn volume(&self) -> f32 {
        self.volume.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["snake_arcade"]).unwrap();
        assert_eq!(cli.variant, Variant::Modern);
        assert_eq!(cli.difficulty, None);
        assert_eq!(cli.scores, PathBuf::from("high_scores.json"));
        assert_eq!(cli.sounds, PathBuf::from("sounds"));
        assert_eq!(cli.volume(), 1.0);
        assert_eq!(LevelFilter::from(cli.log_level), LevelFilter::Info);
    }

    #[test]
    fn test_variant_and_difficulty() {
        let cli = Cli::try_parse_from([
            "snake_arcade",
            "--variant",
            "enhanced",
            "--difficulty",
            "hard",
            "--volume",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.variant, Variant::Enhanced);
        assert_eq!(cli.difficulty, Some(Difficulty::Hard));
        assert_eq!(cli.volume(), 1.0);
    }

    #[test]
    fn test_rejects_unknown_variant() {
        assert!(Cli::try_parse_from(["snake_arcade", "--variant", "retro"]).is_err());
    }
}
