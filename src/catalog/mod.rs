mod model;

pub use self::model::{Rating, Section, Song, SongId};

use std::sync::Arc;

use tracing::{error, info};

use crate::http::ApiService;

pub type Snapshot = Arc<Vec<Song>>;

/// In-memory copy of the backend catalog.
///
/// The list is held as an immutable snapshot that is swapped in one step on
/// every refresh, so readers never see a half-updated catalog.
#[derive(Debug, Default, Clone)]
pub struct CatalogStore {
    songs: Snapshot,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_songs(songs: Vec<Song>) -> Self {
        Self {
            songs: Arc::new(songs),
        }
    }

    /// Replaces the catalog with the backend's current list.
    ///
    /// A failed fetch leaves the store empty rather than stale. Never fails.
    pub async fn refresh(&mut self, api: &ApiService) -> usize {
        match api.fetch_songs().await {
            Ok(songs) => {
                info!(count = songs.len(), "catalog_refreshed");
                self.replace(songs);
            }
            Err(e) => {
                error!(error = %e, "catalog_refresh_failed");
                self.replace(Vec::new());
            }
        }
        self.songs.len()
    }

    pub fn replace(&mut self, songs: Vec<Song>) {
        self.songs = Arc::new(songs);
    }

    pub fn filter(&self, section: Section) -> Vec<&Song> {
        self.songs.iter().filter(|s| section.contains(s)).collect()
    }

    pub fn index_of(&self, id: SongId) -> Option<usize> {
        self.songs.iter().position(|s| s.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.songs.clone()
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn song(id: SongId, likes: u64, rating: u8) -> Song {
    Song {
        id,
        title: format!("Song {id}"),
        artist: format!("Artist {id}"),
        audio_url: format!("http://localhost:5000/uploads/{id}.mp3"),
        rating,
        likes,
    }
}
