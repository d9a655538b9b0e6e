use crate::{
    catalog::{Section, SongId},
    http::SongUpload,
};

#[derive(Debug, Clone)]
pub enum AppMessage {
    // User Input
    Quit,
    TogglePlayPause,
    NextTrack,
    PreviousTrack,
    VolumeUp,
    VolumeDown,
    SeekForward,
    SeekBackward,

    // Navigation
    SelectSection(Section),
    NextSection,
    PreviousSection,
    SelectNext,
    SelectPrevious,
    PlaySelected,
    Refresh,

    // Dialogs
    OpenAdminPrompt,
    OpenRatePrompt,
    OpenDeletePrompt,
    OpenUploadPrompt,
    ClosePrompt,

    // Catalog Actions
    Unlock(String),
    LikeSelected,
    Rate(SongId, String),
    Delete(SongId),
    Upload(SongUpload),
}
