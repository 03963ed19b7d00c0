//! Cooperative playback timer.
//!
//! The timer never owns a thread. The UI loop calls [`Playback::poll`] with
//! the current time on every update; tests call [`Playback::tick`] directly.

use std::time::{Duration, Instant};

use log::info;

use crate::error::{EditorError, EditorResult};
use crate::project::Project;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    /// `next_step` is `None` when a step is due right away
    Playing { next_step: Option<Instant> },
}

#[derive(Debug, Clone)]
pub struct Playback {
    state: PlaybackState,
    fps: u32,
}

impl Playback {
    pub fn new(fps: u32) -> Self {
        Self {
            state: PlaybackState::Stopped,
            fps: fps.max(1),
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing { .. })
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Reject zero; an in-flight wait keeps its deadline and the new rate
    /// applies from the next scheduled step.
    pub fn set_fps(&mut self, fps: u32) -> EditorResult {
        if fps == 0 {
            return Err(EditorError::InvalidFps(fps.to_string()));
        }
        self.fps = fps;
        info!("Playback rate set to {} fps", fps);
        Ok(())
    }

    /// Delay between two steps, in whole milliseconds.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps))
    }

    /// Start playing. Returns `false` if already playing.
    pub fn play(&mut self) -> bool {
        if self.is_playing() {
            return false;
        }
        self.state = PlaybackState::Playing { next_step: None };
        info!("Playback started at {} fps", self.fps);
        true
    }

    pub fn stop(&mut self) {
        if self.is_playing() {
            info!("Playback stopped");
        }
        self.state = PlaybackState::Stopped;
    }

    /// Perform one step right now if playing.
    pub fn tick(&mut self, project: &mut Project) -> bool {
        if !self.is_playing() {
            return false;
        }
        project.advance();
        true
    }

    /// Step if the scheduled time has come and schedule the following step.
    ///
    /// Returns whether a step happened and, while playing, how long until the
    /// next one is due.
    pub fn poll(&mut self, now: Instant, project: &mut Project) -> (bool, Option<Duration>) {
        let PlaybackState::Playing { next_step } = self.state else {
            return (false, None);
        };

        match next_step {
            Some(deadline) if now < deadline => (false, Some(deadline - now)),
            _ => {
                self.tick(project);
                let interval = self.interval();
                self.state = PlaybackState::Playing {
                    next_step: Some(now + interval),
                };
                (true, Some(interval))
            }
        }
    }
}
