use crate::catalog::Song;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum PlaybackState {
    #[default]
    Idle,
    Loading(Song),
    Playing(Song),
    Paused(Song),
}

impl PlaybackState {
    pub fn song(&self) -> Option<&Song> {
        match self {
            Self::Idle => None,
            Self::Loading(s) | Self::Playing(s) | Self::Paused(s) => Some(s),
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing(_))
    }
}
