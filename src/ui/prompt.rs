use std::path::PathBuf;

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::{catalog::SongId, http::SongUpload, ui::message::AppMessage};

#[derive(Debug, Clone, Default)]
pub struct TextField {
    pub label: &'static str,
    pub value: String,
    pub masked: bool,
}

impl TextField {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            ..Self::default()
        }
    }

    fn masked(label: &'static str) -> Self {
        Self {
            label,
            masked: true,
            ..Self::default()
        }
    }

    fn edit(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.value.push(c),
            KeyCode::Backspace => {
                self.value.pop();
            }
            _ => {}
        }
    }

    pub fn display(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

/// Modal dialogs standing in front of the song list.
#[derive(Debug, Clone)]
pub enum Prompt {
    Passcode(TextField),
    Rating {
        id: SongId,
        title: String,
        field: TextField,
    },
    ConfirmDelete {
        id: SongId,
        title: String,
    },
    Upload {
        fields: [TextField; 3],
        focus: usize,
    },
}

pub enum PromptOutcome {
    Pending,
    Cancel,
    Submit(AppMessage),
}

impl Prompt {
    pub fn passcode() -> Self {
        Self::Passcode(TextField::masked("Passcode"))
    }

    pub fn rating(id: SongId, title: impl Into<String>) -> Self {
        Self::Rating {
            id,
            title: title.into(),
            field: TextField::new("Stars (1-6)"),
        }
    }

    pub fn confirm_delete(id: SongId, title: impl Into<String>) -> Self {
        Self::ConfirmDelete {
            id,
            title: title.into(),
        }
    }

    pub fn upload() -> Self {
        Self::Upload {
            fields: [
                TextField::new("Title"),
                TextField::new("Artist"),
                TextField::new("File"),
            ],
            focus: 0,
        }
    }

    pub fn title(&self) -> String {
        match self {
            Self::Passcode(_) => "Admin Mode".to_string(),
            Self::Rating { title, .. } => format!("Rate \"{title}\""),
            Self::ConfirmDelete { title, .. } => format!("Delete \"{title}\"?"),
            Self::Upload { .. } => "Upload Song".to_string(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PromptOutcome {
        if key.code == KeyCode::Esc {
            return PromptOutcome::Cancel;
        }

        match self {
            Self::Passcode(field) => match key.code {
                KeyCode::Enter => PromptOutcome::Submit(AppMessage::Unlock(field.value.clone())),
                code => {
                    field.edit(code);
                    PromptOutcome::Pending
                }
            },
            Self::Rating { id, field, .. } => match key.code {
                KeyCode::Enter if field.value.is_empty() => PromptOutcome::Cancel,
                KeyCode::Enter => PromptOutcome::Submit(AppMessage::Rate(*id, field.value.clone())),
                code => {
                    field.edit(code);
                    PromptOutcome::Pending
                }
            },
            Self::ConfirmDelete { id, .. } => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    PromptOutcome::Submit(AppMessage::Delete(*id))
                }
                KeyCode::Char('n') | KeyCode::Char('N') => PromptOutcome::Cancel,
                _ => PromptOutcome::Pending,
            },
            Self::Upload { fields, focus } => match key.code {
                KeyCode::Tab | KeyCode::Down => {
                    *focus = (*focus + 1) % fields.len();
                    PromptOutcome::Pending
                }
                KeyCode::BackTab | KeyCode::Up => {
                    *focus = (*focus + fields.len() - 1) % fields.len();
                    PromptOutcome::Pending
                }
                KeyCode::Enter if *focus + 1 < fields.len() => {
                    *focus += 1;
                    PromptOutcome::Pending
                }
                KeyCode::Enter if fields[2].value.trim().is_empty() => PromptOutcome::Pending,
                KeyCode::Enter => PromptOutcome::Submit(AppMessage::Upload(SongUpload {
                    title: fields[0].value.clone(),
                    artist: fields[1].value.clone(),
                    file: PathBuf::from(fields[2].value.trim()),
                })),
                code => {
                    fields[*focus].edit(code);
                    PromptOutcome::Pending
                }
            },
        }
    }
}
