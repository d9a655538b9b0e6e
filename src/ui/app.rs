use flume::Receiver;
use ratatui::{Frame, widgets::ListState};
use tracing::{error, info};

use crate::{
    actions::{ActionError, ActionGateway},
    audio::{commands::AudioCommand, progress::Progress, system::AudioSystem},
    catalog::{CatalogStore, Section, Song, SongId},
    config::Config,
    event::events::Event,
    http::ApiService,
    session::Session,
};

use super::{
    handler::EventHandler, layout::AppLayout, message::AppMessage, prompt::Prompt, tui,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Status {
    pub text: String,
    pub kind: StatusKind,
}

pub struct App {
    pub event_rx: Receiver<Event>,
    pub api: ApiService,
    pub gateway: ActionGateway,
    pub audio_system: AudioSystem,
    pub catalog: CatalogStore,
    pub session: Session,
    pub now_playing: Option<Song>,
    pub loading: bool,
    pub progress: Progress,
    pub volume: u8,
    pub list_state: ListState,
    pub prompt: Option<Prompt>,
    pub status: Option<Status>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();
        let api = ApiService::new(&config.api_base, config.http_timeout)?;
        let audio_system = AudioSystem::spawn(api.clone(), config.audio.clone(), event_tx)?;

        info!(api = api.base(), "app_started");

        Ok(Self {
            event_rx,
            gateway: ActionGateway::new(api.clone()),
            api,
            audio_system,
            catalog: CatalogStore::new(),
            session: Session::new(config.admin_passcode),
            now_playing: None,
            loading: false,
            progress: Progress::default(),
            volume: config.audio.volume.min(100),
            list_state: ListState::default(),
            prompt: None,
            status: None,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        self.update(AppMessage::Refresh).await;
        while !self.should_quit {
            tui.draw(|f| self.ui(f))?;
            EventHandler::handle_events(self, &mut tui).await?;
        }

        tui.exit()?;
        Ok(())
    }

    fn ui(&mut self, frame: &mut Frame) {
        let area = frame.area();
        AppLayout::new(self).render(frame, area);
    }

    /// Songs of the current section, in catalog order.
    pub fn visible_songs(&self) -> Vec<&Song> {
        self.catalog.filter(self.session.current_section())
    }

    pub fn selected_song(&self) -> Option<&Song> {
        let selected = self.list_state.selected()?;
        self.visible_songs().get(selected).copied()
    }

    pub async fn update(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::TogglePlayPause => self.audio_system.send(AudioCommand::Toggle),
            AppMessage::NextTrack => self.audio_system.send(AudioCommand::Next),
            AppMessage::PreviousTrack => self.audio_system.send(AudioCommand::Previous),
            AppMessage::VolumeUp => self.audio_system.send(AudioCommand::VolumeUp),
            AppMessage::VolumeDown => self.audio_system.send(AudioCommand::VolumeDown),
            AppMessage::SeekForward => self.audio_system.send(AudioCommand::SeekForward),
            AppMessage::SeekBackward => self.audio_system.send(AudioCommand::SeekBackward),

            AppMessage::SelectSection(section) => self.select_section(section),
            AppMessage::NextSection => self.select_section(self.session.current_section().next()),
            AppMessage::PreviousSection => {
                self.select_section(self.session.current_section().previous())
            }
            AppMessage::SelectNext => self.move_selection(1),
            AppMessage::SelectPrevious => self.move_selection(-1),
            AppMessage::PlaySelected => self.play_selected(),
            AppMessage::Refresh => {
                let count = self.catalog.refresh(&self.api).await;
                self.after_refresh();
                self.info(format!("Loaded {count} songs"));
            }

            AppMessage::OpenAdminPrompt => {
                if self.session.is_admin() {
                    self.info("Admin mode is already active");
                } else {
                    self.prompt = Some(Prompt::passcode());
                }
            }
            AppMessage::OpenRatePrompt => {
                if let Some((id, title)) = self.gated_selection("rate") {
                    self.prompt = Some(Prompt::rating(id, title));
                }
            }
            AppMessage::OpenDeletePrompt => {
                if let Some((id, title)) = self.gated_selection("delete") {
                    self.prompt = Some(Prompt::confirm_delete(id, title));
                }
            }
            AppMessage::OpenUploadPrompt => match self.session.require_admin("upload") {
                Ok(()) => self.prompt = Some(Prompt::upload()),
                Err(e) => self.error(e.to_string()),
            },
            AppMessage::ClosePrompt => self.prompt = None,

            AppMessage::Unlock(candidate) => {
                self.prompt = None;
                if self.session.attempt_unlock(&candidate) {
                    self.success("🔓 Admin mode activated");
                } else {
                    self.error("❌ Wrong passcode!");
                }
            }
            AppMessage::LikeSelected => {
                let Some(id) = self.selected_song().map(|s| s.id) else {
                    return;
                };
                let result = self
                    .gateway
                    .like(&self.session, &mut self.catalog, id)
                    .await;
                self.after_action("liking", result.map(|_| "Song liked!".to_string()));
            }
            AppMessage::Rate(id, input) => {
                self.prompt = None;
                let result = self
                    .gateway
                    .rate(&self.session, &mut self.catalog, id, &input)
                    .await;
                self.after_action(
                    "rating",
                    result.map(|rating| format!("Rated {} stars", rating.value())),
                );
            }
            AppMessage::Delete(id) => {
                self.prompt = None;
                let result = self
                    .gateway
                    .delete(&self.session, &mut self.catalog, id, true)
                    .await;
                self.after_action(
                    "deleting",
                    result.map(|_| "Song deleted successfully!".to_string()),
                );
            }
            AppMessage::Upload(upload) => {
                let result = self
                    .gateway
                    .upload(&self.session, &mut self.catalog, upload)
                    .await;
                // Validation errors keep the form open for correction.
                if !matches!(result, Err(ActionError::InvalidUpload(_))) {
                    self.prompt = None;
                }
                self.after_action(
                    "uploading",
                    result.map(|_| "Song uploaded successfully!".to_string()),
                );
            }
        }
    }

    /// Folds a notification from the audio system into the view.
    pub fn handle_audio_event(&mut self, event: Event) {
        self.session.observe(&event);

        match event {
            Event::TrackLoading { song, .. } => {
                self.loading = true;
                self.progress = Progress::default();
                self.now_playing = Some(song);
            }
            Event::TrackStarted { song, .. } => {
                self.loading = false;
                self.now_playing = Some(song);
            }
            Event::Stopped => {
                self.loading = false;
                self.now_playing = None;
                self.progress = Progress::default();
            }
            Event::Progress(progress) => self.progress = progress,
            Event::VolumeChanged(volume) => self.volume = volume,
            Event::PlaybackFailed(e) => {
                self.loading = false;
                self.error(e.user_message());
            }
            Event::Paused | Event::Resumed | Event::TrackEnded | Event::CatalogSynced { .. } => {}
        }
    }

    fn select_section(&mut self, section: Section) {
        self.session.set_section(section);
        let empty = self.visible_songs().is_empty();
        self.list_state.select(if empty { None } else { Some(0) });
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.visible_songs().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len as isize) as usize;
        self.list_state.select(Some(next));
    }

    fn play_selected(&mut self) {
        let Some(id) = self.selected_song().map(|s| s.id) else {
            return;
        };
        // The list shows a filtered view, so playback is addressed by the
        // song's position in the full catalog.
        match self.catalog.index_of(id) {
            Some(index) => self.audio_system.send(AudioCommand::Play(index)),
            None => self.error("Song is no longer in the catalog"),
        }
    }

    fn gated_selection(&mut self, action: &'static str) -> Option<(SongId, String)> {
        if let Err(e) = self.session.require_admin(action) {
            self.error(e.to_string());
            return None;
        }
        self.selected_song().map(|s| (s.id, s.title.clone()))
    }

    fn after_action(&mut self, verb: &str, result: Result<String, ActionError>) {
        match result {
            Ok(message) => {
                self.after_refresh();
                self.success(message);
            }
            Err(e @ ActionError::Api(_)) => {
                error!(verb, error = %e, "action_failed");
                self.error(format!("Error {verb} song: {e}"));
            }
            Err(e) => self.error(e.to_string()),
        }
    }

    /// Publishes the fresh snapshot to the audio system and keeps the list
    /// selection inside the current section.
    fn after_refresh(&mut self) {
        self.audio_system
            .send(AudioCommand::SyncCatalog(self.catalog.snapshot()));

        let len = self.visible_songs().len();
        let selected = match self.list_state.selected() {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };
        self.list_state.select(selected);
    }

    fn info(&mut self, text: impl Into<String>) {
        self.set_status(text, StatusKind::Info);
    }

    fn success(&mut self, text: impl Into<String>) {
        self.set_status(text, StatusKind::Success);
    }

    fn error(&mut self, text: impl Into<String>) {
        self.set_status(text, StatusKind::Error);
    }

    fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(Status {
            text: text.into(),
            kind,
        });
    }
}
