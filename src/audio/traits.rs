use std::time::Duration;

use async_trait::async_trait;

use crate::audio::error::PlaybackError;

/// The single audio device the playback controller drives.
///
/// Implementations are owned by one task and never shared, so futures need
/// not be `Send`.
#[async_trait(?Send)]
pub trait AudioOutput {
    /// Locator of the media currently loaded, if any.
    fn loaded_source(&self) -> Option<&str>;

    /// Fetches and prepares `url`, replacing whatever was loaded.
    async fn load(&mut self, url: &str) -> Result<(), PlaybackError>;

    /// Starts transport on the loaded media. A source that already played to
    /// the end starts over from the beginning.
    fn start(&mut self) -> Result<(), PlaybackError>;

    fn pause(&mut self);

    /// Halts transport and unloads the media.
    fn stop(&mut self);

    /// True once the loaded media has played to its end.
    fn is_finished(&self) -> bool;

    fn position(&self) -> Duration;

    fn duration(&self) -> Option<Duration>;

    fn seek(&mut self, position: Duration) -> Result<(), PlaybackError>;

    fn set_volume(&mut self, volume: f32);
}
