pub mod app;
pub mod clock;
pub mod config;
pub mod difficulty;
pub mod food;
pub mod game;
pub mod grid;
pub mod high_scores;
pub mod input;
pub mod logger;
pub mod snake;
pub mod sound;
pub mod theme;
pub mod variant;
