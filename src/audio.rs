//! Audio collaborator interface
//!
//! Cues are fire-and-forget: sound is strictly cosmetic and a playback
//! failure must never interrupt the simulation, so errors are logged at
//! debug level and dropped.

use std::fmt;

/// Sound cues, keyed by event name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Ball hits a wall, paddle or block.
    Hit,
    /// A point was scored.
    Score,
    /// Match or level won.
    Win,
    /// Coin collected.
    Coin,
    /// Player touched an enemy or fell out.
    Hurt,
}

impl SoundCue {
    pub fn name(self) -> &'static str {
        match self {
            SoundCue::Hit => "hit",
            SoundCue::Score => "score",
            SoundCue::Win => "win",
            SoundCue::Coin => "coin",
            SoundCue::Hurt => "hurt",
        }
    }
}

/// Playback failure reported by a sink. Carried only so [`play_cue`] can
/// log it; nothing upstream reacts to it.
#[derive(Debug)]
pub struct PlaybackError(pub String);

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for PlaybackError {}

/// Something that can emit a tone for a cue (oscillator, sample player...).
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue) -> Result<(), PlaybackError>;
}

/// Best-effort playback: failures are swallowed.
pub fn play_cue(sink: &mut dyn AudioSink, cue: SoundCue) {
    if let Err(e) = sink.play(cue) {
        log::debug!("audio cue '{}' failed: {e}", cue.name());
    }
}

/// Sink that plays nothing; used headless and when sound is off.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) -> Result<(), PlaybackError> {
        Ok(())
    }
}
