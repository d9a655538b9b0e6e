use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlaybackError {
    #[error("No song at position {0}")]
    NoTrack(usize),

    /// The output device refused to start. Retrying later may succeed.
    #[error("Audio output blocked: {0}")]
    OutputBlocked(String),

    #[error("Media unavailable: {0}")]
    MediaUnavailable(String),

    #[error("Seek failed: {0}")]
    Seek(String),
}

impl PlaybackError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NoTrack(_) => "No song data found!",
            Self::OutputBlocked(_) => {
                "Audio output is not available. Press space to start playback once it is."
            }
            Self::MediaUnavailable(_) => {
                "Could not play audio. The audio file may be unavailable."
            }
            Self::Seek(_) => "Could not seek in this track.",
        }
    }
}
