use std::time::Duration;

use async_trait::async_trait;

use crate::audio::{error::PlaybackError, traits::AudioOutput};

/// In-memory output device that records the calls made to it.
#[derive(Debug)]
pub struct FakeOutput {
    pub loaded: Option<String>,
    pub loads: Vec<String>,
    pub starts: usize,
    pub paused: bool,
    pub finished: bool,
    pub position: Duration,
    pub duration: Option<Duration>,
    pub volume: f32,
    pub fail_load: bool,
    pub block_start: bool,
}

impl Default for FakeOutput {
    fn default() -> Self {
        Self {
            loaded: None,
            loads: Vec::new(),
            starts: 0,
            paused: false,
            finished: false,
            position: Duration::ZERO,
            duration: Some(Duration::from_secs(120)),
            volume: 1.0,
            fail_load: false,
            block_start: false,
        }
    }
}

#[async_trait(?Send)]
impl AudioOutput for FakeOutput {
    fn loaded_source(&self) -> Option<&str> {
        self.loaded.as_deref()
    }

    async fn load(&mut self, url: &str) -> Result<(), PlaybackError> {
        if self.fail_load {
            return Err(PlaybackError::MediaUnavailable(format!("404 for {url}")));
        }
        self.loads.push(url.to_string());
        self.loaded = Some(url.to_string());
        self.finished = false;
        self.position = Duration::ZERO;
        Ok(())
    }

    fn start(&mut self) -> Result<(), PlaybackError> {
        if self.block_start {
            return Err(PlaybackError::OutputBlocked("no output device".into()));
        }
        if self.finished {
            self.finished = false;
            self.position = Duration::ZERO;
        }
        self.starts += 1;
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn stop(&mut self) {
        self.loaded = None;
        self.paused = false;
        self.position = Duration::ZERO;
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn seek(&mut self, position: Duration) -> Result<(), PlaybackError> {
        self.position = position;
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }
}
