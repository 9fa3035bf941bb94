use std::path::Path;

use log::{info, warn};
use macroquad::audio::{PlaySoundParams, Sound, load_sound, play_sound};

use crate::sound::SoundEffect;

/// Sound effects loaded from disk. Missing files stay silent.
pub struct SoundBank {
    eat: Option<Sound>,
    crash: Option<Sound>,
    volume: f32,
}

impl SoundBank {
    pub async fn load(dir: &Path, volume: f32) -> Self {
        Self {
            eat: load_effect(dir, SoundEffect::Eat).await,
            crash: load_effect(dir, SoundEffect::Crash).await,
            volume: volume.clamp(0.0, 1.0),
        }
    }

    pub fn play(&self, effect: SoundEffect) {
        let sound = match effect {
            SoundEffect::Eat => &self.eat,
            SoundEffect::Crash => &self.crash,
        };
        if let Some(sound) = sound {
            play_sound(
                sound,
                PlaySoundParams {
                    looped: false,
                    volume: self.volume,
                },
            );
        }
    }
}

async fn load_effect(dir: &Path, effect: SoundEffect) -> Option<Sound> {
    let path = dir.join(effect.file_name());
    if !path.exists() {
        info!("{} not found, {:?} sound disabled", path.display(), effect);
        return None;
    }
    let Some(path_str) = path.to_str() else {
        warn!("Sound path {} is not valid UTF-8", path.display());
        return None;
    };

    match load_sound(path_str).await {
        Ok(sound) => {
            info!("Loaded {}", path.display());
            Some(sound)
        }
        Err(err) => {
            warn!("Failed to load {}: {:?}", path.display(), err);
            None
        }
    }
}
