use crate::{
    audio::{error::PlaybackError, progress::Progress},
    catalog::Song,
};

/// Notifications published by the audio system.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    TrackLoading { index: usize, song: Song },
    TrackStarted { index: usize, song: Song },
    Paused,
    Resumed,
    TrackEnded,
    Stopped,
    Progress(Progress),
    VolumeChanged(u8),
    CatalogSynced { current: Option<usize> },
    PlaybackFailed(PlaybackError),
}
