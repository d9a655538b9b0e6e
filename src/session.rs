use tracing::{info, warn};

use crate::{
    actions::ActionError, audio::error::PlaybackError, catalog::Section, event::events::Event,
};

/// Per-run UI session: current section, the admin gate and the last observed
/// playback position.
///
/// The admin gate is a client-side convenience only. The passcode ships with
/// the client and the check runs locally, so it grants no real authorization;
/// the backend accepts mutations from anyone.
#[derive(Debug, Clone)]
pub struct Session {
    passcode: String,
    current_section: Section,
    admin_mode: bool,
    current_song_index: Option<usize>,
    is_playing: bool,
}

impl Session {
    pub fn new(passcode: impl Into<String>) -> Self {
        Self {
            passcode: passcode.into(),
            current_section: Section::default(),
            admin_mode: false,
            current_song_index: None,
            is_playing: false,
        }
    }

    /// Turns admin mode on when `candidate` matches. There is no way back.
    pub fn attempt_unlock(&mut self, candidate: &str) -> bool {
        if candidate == self.passcode {
            self.admin_mode = true;
            info!("admin_mode_unlocked");
            true
        } else {
            warn!("admin_unlock_rejected");
            false
        }
    }

    pub fn set_section(&mut self, section: Section) {
        self.current_section = section;
    }

    pub fn require_admin(&self, action: &'static str) -> Result<(), ActionError> {
        if self.admin_mode {
            Ok(())
        } else {
            Err(ActionError::Denied(action))
        }
    }

    /// Folds a playback notification into the session's view of the player.
    pub fn observe(&mut self, event: &Event) {
        match event {
            Event::TrackLoading { index, .. } => {
                self.current_song_index = Some(*index);
                self.is_playing = false;
            }
            Event::TrackStarted { index, .. } => {
                self.current_song_index = Some(*index);
                self.is_playing = true;
            }
            Event::Resumed => self.is_playing = true,
            Event::Paused | Event::TrackEnded => self.is_playing = false,
            Event::Stopped => {
                self.current_song_index = None;
                self.is_playing = false;
            }
            Event::CatalogSynced { current } => self.current_song_index = *current,
            Event::PlaybackFailed(e) if !matches!(e, PlaybackError::NoTrack(_)) => {
                self.is_playing = false;
            }
            Event::PlaybackFailed(_) | Event::Progress(_) | Event::VolumeChanged(_) => {}
        }
    }

    pub fn current_section(&self) -> Section {
        self.current_section
    }

    pub fn is_admin(&self) -> bool {
        self.admin_mode
    }

    pub fn current_song_index(&self) -> Option<usize> {
        self.current_song_index
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::song;

    #[test]
    fn unlock_with_correct_passcode() {
        let mut session = Session::new("EUSTASS6");
        assert!(!session.is_admin());

        assert!(session.attempt_unlock("EUSTASS6"));
        assert!(session.is_admin());
        assert!(session.require_admin("like").is_ok());
    }

    #[test]
    fn wrong_passcode_keeps_gate_closed() {
        let mut session = Session::new("EUSTASS6");
        for candidate in ["", "eustass6", "EUSTASS6 ", "hunter2"] {
            assert!(!session.attempt_unlock(candidate));
            assert!(!session.is_admin());
        }
        assert!(matches!(
            session.require_admin("delete"),
            Err(ActionError::Denied("delete"))
        ));
    }

    #[test]
    fn admin_mode_survives_later_failures() {
        let mut session = Session::new("pw");
        session.attempt_unlock("pw");
        session.attempt_unlock("nope");
        assert!(session.is_admin());
    }

    #[test]
    fn set_section_is_idempotent() {
        let mut session = Session::new("pw");
        session.set_section(Section::Liked);
        session.set_section(Section::Liked);
        assert_eq!(session.current_section(), Section::Liked);
    }

    #[test]
    fn playing_flag_follows_transport_events() {
        let mut session = Session::new("pw");

        session.observe(&Event::TrackLoading {
            index: 2,
            song: song(3, 0, 0),
        });
        assert_eq!(session.current_song_index(), Some(2));
        assert!(!session.is_playing());

        session.observe(&Event::TrackStarted {
            index: 2,
            song: song(3, 0, 0),
        });
        assert!(session.is_playing());

        session.observe(&Event::PlaybackFailed(PlaybackError::NoTrack(9)));
        assert!(session.is_playing());

        session.observe(&Event::Paused);
        assert!(!session.is_playing());

        session.observe(&Event::CatalogSynced { current: Some(0) });
        assert_eq!(session.current_song_index(), Some(0));

        session.observe(&Event::Stopped);
        assert_eq!(session.current_song_index(), None);
    }
}
