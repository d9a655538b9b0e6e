use std::{sync::Arc, time::Duration};

use flume::Sender;
use tracing::{debug, info, warn};

use crate::{
    audio::{
        commands::AudioCommand, config::AudioConfig, error::PlaybackError, progress::Progress,
        state::PlaybackState, traits::AudioOutput,
    },
    catalog::{Snapshot, Song},
    event::events::Event,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Next playback index over a catalog of `len` songs, wrapping at both ends.
///
/// Without a current index, forward starts at the first song and backward at
/// the last one. Returns `None` for an empty catalog.
pub fn next_index(current: Option<usize>, len: usize, direction: Direction) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let next = match (current, direction) {
        (Some(i), Direction::Forward) => (i % len + 1) % len,
        (Some(i), Direction::Backward) => (i % len + len - 1) % len,
        (None, Direction::Forward) => 0,
        (None, Direction::Backward) => len - 1,
    };
    Some(next)
}

pub struct PlaybackController<O: AudioOutput> {
    output: O,
    event_tx: Sender<Event>,
    catalog: Snapshot,
    current_index: Option<usize>,
    state: PlaybackState,
    volume: u8,
    volume_step: u8,
    seek_step: Duration,
}

impl<O: AudioOutput> PlaybackController<O> {
    pub fn new(mut output: O, config: &AudioConfig, event_tx: Sender<Event>) -> Self {
        let volume = config.volume.min(100);
        output.set_volume(volume as f32 / 100.0);

        Self {
            output,
            event_tx,
            catalog: Arc::new(Vec::new()),
            current_index: None,
            state: PlaybackState::Idle,
            volume,
            volume_step: config.volume_step,
            seek_step: Duration::from_secs(config.seek_step_secs),
        }
    }

    pub async fn handle_command(&mut self, cmd: AudioCommand) {
        // Failures are already published as events.
        let _ = match cmd {
            AudioCommand::SyncCatalog(snapshot) => {
                self.sync_catalog(snapshot);
                Ok(())
            }
            AudioCommand::Play(index) => self.play(index).await,
            AudioCommand::Toggle => self.toggle(),
            AudioCommand::Next => self.advance(Direction::Forward).await.map(|_| ()),
            AudioCommand::Previous => self.advance(Direction::Backward).await.map(|_| ()),
            AudioCommand::Seek(pos) => self.seek(pos),
            AudioCommand::SeekForward => self.seek_by(Direction::Forward),
            AudioCommand::SeekBackward => self.seek_by(Direction::Backward),
            AudioCommand::VolumeUp => {
                self.set_volume(self.volume.saturating_add(self.volume_step));
                Ok(())
            }
            AudioCommand::VolumeDown => {
                self.set_volume(self.volume.saturating_sub(self.volume_step));
                Ok(())
            }
            AudioCommand::Stop => {
                self.stop();
                Ok(())
            }
        };
    }

    /// Adopts a new catalog snapshot and re-resolves the current index by the
    /// loaded song's id, since positions shift when songs come and go.
    pub fn sync_catalog(&mut self, snapshot: Snapshot) {
        self.catalog = snapshot;
        self.current_index = match self.state.song() {
            Some(song) => {
                let id = song.id;
                self.catalog.iter().position(|s| s.id == id)
            }
            None => self.current_index.filter(|&i| i < self.catalog.len()),
        };
        debug!(len = self.catalog.len(), current = ?self.current_index, "catalog_synced");
        self.emit(Event::CatalogSynced {
            current: self.current_index,
        });
    }

    pub async fn play(&mut self, index: usize) -> Result<(), PlaybackError> {
        let Some(song) = self.catalog.get(index).cloned() else {
            warn!(index, len = self.catalog.len(), "play_no_track");
            return Err(self.fail(PlaybackError::NoTrack(index)));
        };

        self.current_index = Some(index);

        if self.output.loaded_source() != Some(song.audio_url.as_str()) {
            info!(id = song.id, url = song.audio_url.as_str(), "track_loading");
            self.state = PlaybackState::Loading(song.clone());
            self.emit(Event::TrackLoading {
                index,
                song: song.clone(),
            });

            if let Err(e) = self.output.load(&song.audio_url).await {
                warn!(id = song.id, error = %e, "track_load_failed");
                self.state = PlaybackState::Idle;
                return Err(self.fail(e));
            }
        }

        self.start_transport(index, song)
    }

    fn start_transport(&mut self, index: usize, song: Song) -> Result<(), PlaybackError> {
        match self.output.start() {
            Ok(()) => {
                info!(id = song.id, index, "track_started");
                self.state = PlaybackState::Playing(song.clone());
                self.emit(Event::TrackStarted { index, song });
                Ok(())
            }
            Err(e) => {
                warn!(id = song.id, error = %e, "transport_start_failed");
                self.state = PlaybackState::Paused(song);
                Err(self.fail(e))
            }
        }
    }

    /// Flips between playing and paused. Does nothing without a loaded track.
    pub fn toggle(&mut self) -> Result<(), PlaybackError> {
        match self.state.clone() {
            PlaybackState::Idle | PlaybackState::Loading(_) => Ok(()),
            PlaybackState::Playing(song) => {
                self.output.pause();
                self.state = PlaybackState::Paused(song);
                self.emit(Event::Paused);
                Ok(())
            }
            PlaybackState::Paused(song) => match self.output.start() {
                Ok(()) => {
                    self.state = PlaybackState::Playing(song);
                    self.emit(Event::Resumed);
                    Ok(())
                }
                Err(e) => Err(self.fail(e)),
            },
        }
    }

    /// Plays the neighbouring song of the full catalog. Returns the index that
    /// was requested, or `None` when the catalog is empty.
    pub async fn advance(&mut self, direction: Direction) -> Result<Option<usize>, PlaybackError> {
        let Some(next) = next_index(self.current_index, self.catalog.len(), direction) else {
            return Ok(None);
        };
        self.play(next).await.map(|()| Some(next))
    }

    /// Monitor step: publishes progress and chains into the next song once the
    /// current one has played to its end.
    pub async fn on_tick(&mut self) {
        if !self.state.is_playing() {
            return;
        }

        if !self.output.is_finished() {
            self.emit(Event::Progress(self.progress()));
            return;
        }

        if let PlaybackState::Playing(song) = std::mem::take(&mut self.state) {
            info!(id = song.id, "track_ended");
            self.state = PlaybackState::Paused(song);
        }
        self.emit(Event::TrackEnded);

        if self.catalog.is_empty() {
            self.stop();
            return;
        }
        let _ = self.advance(Direction::Forward).await;
    }

    pub fn progress(&self) -> Progress {
        if self.state.song().is_none() {
            return Progress::default();
        }
        Progress::new(self.output.position(), self.output.duration())
    }

    pub fn seek(&mut self, position: Duration) -> Result<(), PlaybackError> {
        if !matches!(
            self.state,
            PlaybackState::Playing(_) | PlaybackState::Paused(_)
        ) {
            return Ok(());
        }
        let position = match self.output.duration() {
            Some(total) => position.min(total),
            None => position,
        };
        self.output.seek(position).map_err(|e| self.fail(e))?;
        self.emit(Event::Progress(self.progress()));
        Ok(())
    }

    pub fn seek_by(&mut self, direction: Direction) -> Result<(), PlaybackError> {
        let current = self.output.position();
        let target = match direction {
            Direction::Forward => current.saturating_add(self.seek_step),
            Direction::Backward => current.saturating_sub(self.seek_step),
        };
        self.seek(target)
    }

    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(100);
        self.output.set_volume(self.volume as f32 / 100.0);
        self.emit(Event::VolumeChanged(self.volume));
    }

    pub fn stop(&mut self) {
        self.output.stop();
        self.state = PlaybackState::Idle;
        self.current_index = None;
        self.emit(Event::Stopped);
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    fn fail(&self, error: PlaybackError) -> PlaybackError {
        self.emit(Event::PlaybackFailed(error.clone()));
        error
    }

    fn emit(&self, event: Event) {
        let _ = self.event_tx.send(event);
    }
}
