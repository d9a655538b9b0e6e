use crate::{catalog::Section, ui::message::AppMessage};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Char('q'), _) => Some(AppMessage::Quit),
            (KeyCode::Char(' '), _) => Some(AppMessage::TogglePlayPause),
            (KeyCode::Char('n'), _) => Some(AppMessage::NextTrack),
            (KeyCode::Char('p'), _) => Some(AppMessage::PreviousTrack),
            (KeyCode::Char('+'), _) | (KeyCode::Char('='), _) => Some(AppMessage::VolumeUp),
            (KeyCode::Char('-'), _) => Some(AppMessage::VolumeDown),
            (KeyCode::Char('H'), _) => Some(AppMessage::SeekBackward),
            (KeyCode::Char('L'), _) => Some(AppMessage::SeekForward),
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => Some(AppMessage::SelectNext),
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => Some(AppMessage::SelectPrevious),
            (KeyCode::Enter, _) => Some(AppMessage::PlaySelected),
            (KeyCode::Tab, _) => Some(AppMessage::NextSection),
            (KeyCode::BackTab, _) => Some(AppMessage::PreviousSection),
            (KeyCode::Char('1'), _) => Some(AppMessage::SelectSection(Section::All)),
            (KeyCode::Char('2'), _) => Some(AppMessage::SelectSection(Section::Liked)),
            (KeyCode::Char('3'), _) => Some(AppMessage::SelectSection(Section::Rated)),
            (KeyCode::Char('R'), _) => Some(AppMessage::Refresh),
            (KeyCode::Char('a'), _) => Some(AppMessage::OpenAdminPrompt),
            (KeyCode::Char('l'), _) => Some(AppMessage::LikeSelected),
            (KeyCode::Char('r'), _) => Some(AppMessage::OpenRatePrompt),
            (KeyCode::Char('d'), _) => Some(AppMessage::OpenDeletePrompt),
            (KeyCode::Char('u'), _) => Some(AppMessage::OpenUploadPrompt),
            _ => None,
        }
    }
}
