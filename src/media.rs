//! Media transports the quiz screen can drive.
//!
//! The session only records whether the learner wants a clip playing; a
//! transport does the actual playing and reports back when a clip ends.

use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

const DEFAULT_CLIP_LENGTH: Duration = Duration::from_secs(5);

pub trait MediaTransport {
    /// Start or resume `source`. Switching sources starts from zero.
    fn play(&mut self, source: &str);
    fn pause(&mut self);
    /// Stop playback and seek back to the start.
    fn rewind(&mut self);
    /// True exactly once when the active clip reaches its end.
    fn poll_ended(&mut self) -> bool;
}

/// Plays nothing, but keeps time as if a clip of fixed length were running.
#[derive(Debug)]
pub struct SilentTransport {
    clip_length: Duration,
    source: Option<String>,
    position: Duration,
    resumed_at: Option<Instant>,
}

impl SilentTransport {
    pub fn new(clip_length: Duration) -> Self {
        Self {
            clip_length,
            source: None,
            position: Duration::ZERO,
            resumed_at: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.resumed_at.is_some()
    }

    pub fn position(&self) -> Duration {
        let running = self
            .resumed_at
            .map(|at| at.elapsed())
            .unwrap_or_default();
        (self.position + running).min(self.clip_length)
    }
}

impl Default for SilentTransport {
    fn default() -> Self {
        Self::new(DEFAULT_CLIP_LENGTH)
    }
}

impl MediaTransport for SilentTransport {
    fn play(&mut self, source: &str) {
        if self.source.as_deref() != Some(source) {
            self.source = Some(source.to_string());
            self.position = Duration::ZERO;
        }
        if self.resumed_at.is_none() {
            self.resumed_at = Some(Instant::now());
        }
    }

    fn pause(&mut self) {
        self.position = self.position();
        self.resumed_at = None;
    }

    fn rewind(&mut self) {
        self.position = Duration::ZERO;
        self.resumed_at = None;
    }

    fn poll_ended(&mut self) -> bool {
        if self.is_playing() && self.position() >= self.clip_length {
            self.rewind();
            return true;
        }
        false
    }
}

/// Hands clips to an external player program such as `mpv --no-video`.
///
/// Processes cannot be paused portably, so pausing stops the player and the
/// next `play` starts the clip over.
pub struct CommandTransport {
    program: String,
    args: Vec<String>,
    child: Option<Child>,
}

impl CommandTransport {
    /// `command` is split on whitespace; the clip path is appended last.
    pub fn new(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
            child: None,
        })
    }

    pub fn is_running(&self) -> bool {
        self.child.is_some()
    }

    fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl MediaTransport for CommandTransport {
    fn play(&mut self, source: &str) {
        self.stop();

        let spawned = Command::new(&self.program)
            .args(&self.args)
            .arg(source)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(child) => {
                log::debug!("{} playing {}", self.program, source);
                self.child = Some(child);
            }
            Err(err) => log::warn!("failed to start {}: {}", self.program, err),
        }
    }

    fn pause(&mut self) {
        self.stop();
    }

    fn rewind(&mut self) {
        self.stop();
    }

    fn poll_ended(&mut self) -> bool {
        let Some(child) = self.child.as_mut() else {
            return false;
        };
        match child.try_wait() {
            Ok(Some(_)) => {
                self.child = None;
                true
            }
            Ok(None) => false,
            Err(err) => {
                log::warn!("lost track of {}: {}", self.program, err);
                self.child = None;
                true
            }
        }
    }
}

impl Drop for CommandTransport {
    fn drop(&mut self) {
        self.stop();
    }
}
