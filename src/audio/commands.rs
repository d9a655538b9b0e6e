use std::time::Duration;

use crate::catalog::Snapshot;

#[derive(Debug, Clone)]
pub enum AudioCommand {
    SyncCatalog(Snapshot),
    Play(usize),
    Toggle,
    Next,
    Previous,
    Seek(Duration),
    SeekForward,
    SeekBackward,
    VolumeUp,
    VolumeDown,
    Stop,
}
