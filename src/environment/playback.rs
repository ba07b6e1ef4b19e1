//! Audio/video control for an environment session.
//!
//! The media elements themselves are external; [`MediaElement`] is the slice
//! of their behavior a session needs. Starting playback can fail (autoplay
//! policies, missing files). Failures are logged and otherwise ignored.

use thiserror::Error;

use super::Environment;

/// Ambient gain multiplier while the body-scan narration plays.
pub const BODY_SCAN_DUCK_RATIO: f32 = 0.3;

/// Volume a session starts at when nothing else is configured.
pub const DEFAULT_VOLUME: u8 = 80;

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("playback was blocked: {0}")]
    Blocked(String),

    #[error("media source unavailable: {0}")]
    Unavailable(String),
}

/// A playable audio or video element.
pub trait MediaElement {
    /// Set output volume as a fraction from 0.0 to 1.0.
    fn set_volume(&mut self, fraction: f32);
    fn set_looping(&mut self, looping: bool);
    fn set_muted(&mut self, muted: bool);
    fn play(&mut self) -> Result<(), PlaybackError>;
    fn pause(&mut self);
    /// Seek back to the start.
    fn rewind(&mut self);
}

/// User-facing volume level, 0 to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Volume(u8);

impl Volume {
    /// Levels above 100 are clamped.
    pub fn new(level: u8) -> Self {
        Self(level.min(100))
    }

    pub fn level(&self) -> u8 {
        self.0
    }

    pub fn fraction(&self) -> f32 {
        f32::from(self.0) / 100.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}

/// The ambient track's volume, with ducking under the body scan.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AmbientMix {
    pub level: Volume,
    pub ducked: bool,
}

impl AmbientMix {
    pub fn new(level: Volume) -> Self {
        Self {
            level,
            ducked: false,
        }
    }

    /// Effective gain applied to the ambient element.
    pub fn gain(&self) -> f32 {
        if self.ducked {
            self.level.fraction() * BODY_SCAN_DUCK_RATIO
        } else {
            self.level.fraction()
        }
    }
}

/// Drives the media elements of one environment session.
pub struct SessionPlayer<M: MediaElement> {
    environment: &'static Environment,
    ambient: M,
    video: Option<M>,
    body_scan: Option<M>,
    mix: AmbientMix,
}

impl<M: MediaElement> SessionPlayer<M> {
    /// `video` is ignored for environments without a video source.
    pub fn new(environment: &'static Environment, ambient: M, video: Option<M>, level: Volume) -> Self {
        Self {
            environment,
            ambient,
            video: video.filter(|_| environment.video.is_some()),
            body_scan: None,
            mix: AmbientMix::new(level),
        }
    }

    pub fn environment(&self) -> &'static Environment {
        self.environment
    }

    pub fn mix(&self) -> AmbientMix {
        self.mix
    }

    pub fn ambient(&self) -> &M {
        &self.ambient
    }

    pub fn video(&self) -> Option<&M> {
        self.video.as_ref()
    }

    pub fn body_scan(&self) -> Option<&M> {
        self.body_scan.as_ref()
    }

    /// Start the looping ambient track and the muted background video.
    pub fn start(&mut self) {
        self.ambient.set_volume(self.mix.gain());
        self.ambient.set_looping(true);
        start_or_log(&mut self.ambient, self.environment.audio);

        if let Some(video) = self.video.as_mut() {
            video.set_looping(true);
            video.set_muted(true);
            start_or_log(video, self.environment.video.unwrap_or_default());
        }
    }

    pub fn set_volume(&mut self, level: Volume) {
        self.mix.level = level;
        self.ambient.set_volume(self.mix.gain());
    }

    /// Play the body-scan narration, ducking the ambient track until it ends.
    ///
    /// If the narration cannot start, the ambient volume is left untouched.
    pub fn start_body_scan(&mut self, mut track: M) {
        if let Err(e) = track.play() {
            tracing::warn!("Body scan failed to start: {}", e);
            return;
        }
        self.mix.ducked = true;
        self.ambient.set_volume(self.mix.gain());
        self.body_scan = Some(track);
    }

    /// Restore the ambient volume once the narration has finished.
    pub fn body_scan_ended(&mut self) {
        self.body_scan = None;
        self.mix.ducked = false;
        self.ambient.set_volume(self.mix.gain());
    }

    /// Pause and rewind everything.
    pub fn stop(&mut self) {
        let elements = std::iter::once(&mut self.ambient)
            .chain(self.video.as_mut())
            .chain(self.body_scan.as_mut());
        for element in elements {
            element.pause();
            element.rewind();
        }
        self.body_scan = None;
        self.mix.ducked = false;
    }
}

fn start_or_log<M: MediaElement>(element: &mut M, source: &str) {
    if let Err(e) = element.play() {
        tracing::warn!("Playback of {} failed to start: {}", source, e);
    }
}
