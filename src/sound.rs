use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

pub const SAMPLE_RATE: u32 = 44_100;
pub const DEFAULT_SOUNDS_DIR: &str = "sounds";

const WAV_HEADER_LEN: usize = 44;

#[derive(Debug, Error)]
#[error("failed to write {path}: {source}")]
pub struct SoundError {
    path: PathBuf,
    #[source]
    source: std::io::Error,
}

/// A sine tone burst.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_seconds: f32,
    /// 0.0..=1.0 of full scale.
    pub volume: f32,
}

impl Tone {
    pub fn sample_count(&self) -> u32 {
        (self.duration_seconds * SAMPLE_RATE as f32) as u32
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Eat,
    Crash,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 2] = [SoundEffect::Eat, SoundEffect::Crash];

    pub fn file_name(self) -> &'static str {
        match self {
            SoundEffect::Eat => "eat.wav",
            SoundEffect::Crash => "crash.wav",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            // short and high
            SoundEffect::Eat => Tone {
                frequency_hz: 880.0,
                duration_seconds: 0.1,
                volume: 0.3,
            },
            // long and low
            SoundEffect::Crash => Tone {
                frequency_hz: 220.0,
                duration_seconds: 0.3,
                volume: 0.4,
            },
        }
    }
}

/// RIFF/WAVE file, PCM16 mono at [`SAMPLE_RATE`].
pub fn encode_wav(tone: Tone) -> Vec<u8> {
    const CHANNELS: u16 = 1;
    const BITS_PER_SAMPLE: u16 = 16;
    const PCM_FORMAT: u16 = 1;
    const FMT_CHUNK_LEN: u32 = 16;

    let samples = tone.sample_count();
    let frame_len = CHANNELS * BITS_PER_SAMPLE / 8;
    let payload_len = samples * u32::from(frame_len);
    let mut wav = Vec::with_capacity(WAV_HEADER_LEN + payload_len as usize);

    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(WAV_HEADER_LEN as u32 - 8 + payload_len).to_le_bytes());
    wav.extend_from_slice(b"WAVEfmt ");
    wav.extend_from_slice(&FMT_CHUNK_LEN.to_le_bytes());
    for field in [PCM_FORMAT, CHANNELS] {
        wav.extend_from_slice(&field.to_le_bytes());
    }
    wav.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    wav.extend_from_slice(&(SAMPLE_RATE * u32::from(frame_len)).to_le_bytes());
    for field in [frame_len, BITS_PER_SAMPLE] {
        wav.extend_from_slice(&field.to_le_bytes());
    }
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&payload_len.to_le_bytes());

    let peak = tone.volume.clamp(0.0, 1.0) * f32::from(i16::MAX);
    let step = std::f32::consts::TAU * tone.frequency_hz / SAMPLE_RATE as f32;
    wav.extend((0..samples).flat_map(|n| ((peak * (step * n as f32).sin()) as i16).to_le_bytes()));
    wav
}

/// Writes every [`SoundEffect`] into `dir`, creating it if needed.
pub fn write_effects(dir: &Path) -> Result<Vec<PathBuf>, SoundError> {
    fs::create_dir_all(dir).map_err(|source| SoundError {
        path: dir.to_path_buf(),
        source,
    })?;

    SoundEffect::ALL
        .iter()
        .map(|effect| {
            let path = dir.join(effect.file_name());
            fs::write(&path, encode_wav(effect.tone())).map_err(|source| SoundError {
                path: path.clone(),
                source,
            })?;
            info!("Wrote {}", path.display());
            Ok(path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u32_at(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    fn u16_at(bytes: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes(bytes[offset..offset + 2].try_into().unwrap())
    }

    #[test]
    fn test_header() {
        let wav = encode_wav(SoundEffect::Eat.tone());
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(u16_at(&wav, 20), 1);
        assert_eq!(u16_at(&wav, 22), 1);
        assert_eq!(u32_at(&wav, 24), SAMPLE_RATE);
        assert_eq!(u32_at(&wav, 28), SAMPLE_RATE * 2);
        assert_eq!(u16_at(&wav, 32), 2);
        assert_eq!(u16_at(&wav, 34), 16);
        assert_eq!(&wav[36..40], b"data");
        assert_eq!(u32_at(&wav, 4) as usize, wav.len() - 8);
        assert_eq!(u32_at(&wav, 40) as usize, wav.len() - WAV_HEADER_LEN);
    }

    #[test]
    fn test_sample_count() {
        let tone = SoundEffect::Crash.tone();
        let wav = encode_wav(tone);
        let expected = (0.3f32 * SAMPLE_RATE as f32) as usize;
        assert_eq!(tone.sample_count() as usize, expected);
        assert_eq!(wav.len(), WAV_HEADER_LEN + expected * 2);
    }

    #[test]
    fn test_samples_respect_volume() {
        let tone = Tone {
            frequency_hz: 440.0,
            duration_seconds: 0.05,
            volume: 0.5,
        };
        let wav = encode_wav(tone);
        let samples: Vec<i16> = wav[WAV_HEADER_LEN..]
            .chunks_exact(2)
            .map(|b| i16::from_le_bytes([b[0], b[1]]))
            .collect();
        assert_eq!(samples[0], 0);
        let peak = samples.iter().map(|s| s.unsigned_abs()).max().unwrap();
        assert!(peak <= 16_384);
        assert!(peak > 16_000);
    }

    #[test]
    fn test_write_effects() {
        let dir = std::env::temp_dir().join(format!("snake_arcade_sounds_{}", std::process::id()));
        let paths = write_effects(&dir).unwrap();
        assert_eq!(paths, [dir.join("eat.wav"), dir.join("crash.wav")]);
        let eat = fs::read(&paths[0]).unwrap();
        assert_eq!(eat, encode_wav(SoundEffect::Eat.tone()));
        fs::remove_dir_all(&dir).unwrap();
    }
}
