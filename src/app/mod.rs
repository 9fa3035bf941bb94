//! Window, main loop and everything that touches macroquad.

mod audio;
mod controls;
mod render;

use log::{error, info};
use macroquad::prelude::*;

use crate::clock::TickClock;
use crate::config::Cli;
use crate::game::{Game, Screen, TickOutcome};
use crate::high_scores::HighScoreStore;
use crate::input::InputQueue;
use crate::sound::SoundEffect;
use crate::variant::Variant;

use audio::SoundBank;
use render::Backdrop;

const BACKDROP_PARTICLES: usize = 50;

pub fn window_conf(variant: Variant) -> Conf {
    let rules = variant.rules();
    Conf {
        window_title: rules.title.to_owned(),
        window_width: rules.window_width,
        window_height: rules.window_height,
        high_dpi: true,
        ..Default::default()
    }
}

pub async fn run(cli: Cli) {
    let mut rng = ::rand::rng();
    let store = HighScoreStore::new(cli.scores.clone());
    let mut game = Game::new(cli.variant, Some(store), &mut rng);
    if let Some(difficulty) = cli.difficulty {
        if !game.select_difficulty(difficulty) {
            error!("{} has no {} difficulty, keeping {}", cli.variant, difficulty, game.difficulty());
        }
    }

    let sounds = SoundBank::load(&cli.sounds, cli.volume()).await;
    let mut backdrop = Backdrop::new(BACKDROP_PARTICLES, &mut rng);
    let mut queue = InputQueue::new();

    let mut last_frame = get_time();
    let mut clock = TickClock::new(last_frame);

    loop {
        let now = get_time();
        let dt = (now - last_frame).max(0.0) as f32;
        last_frame = now;

        if is_key_pressed(KeyCode::Q) {
            info!("Quit requested");
            break;
        }

        let was_playing = game.screen() == Screen::Playing;
        controls::poll(&game, &mut queue);
        game.handle_input(&mut queue, &mut rng);

        if game.screen() == Screen::Playing {
            if !was_playing {
                clock.reset(now);
            }
            let interval = game.profile().tick_interval().as_secs_f64();
            for _ in 0..clock.due(now, interval) {
                match game.tick(&mut rng) {
                    Ok(TickOutcome::Ate { .. }) => sounds.play(SoundEffect::Eat),
                    Ok(TickOutcome::Died { .. }) => sounds.play(SoundEffect::Crash),
                    Ok(_) => {}
                    Err(err) => {
                        sounds.play(SoundEffect::Crash);
                        error!("Failed to save high scores: {err}");
                    }
                }
                if game.screen() != Screen::Playing {
                    break;
                }
            }
        }

        render::draw(&game, &mut backdrop, dt);
        next_frame().await;
    }
}
