mod error;

pub use self::error::ActionError;

use std::path::Path;

use tracing::info;

use crate::{
    catalog::{CatalogStore, Rating, Song, SongId},
    http::{ApiService, SongUpload},
    session::Session,
};

/// Extensions the backend accepts for uploads.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["mp3", "wav", "ogg", "m4a"];

/// Mutating requests against the backend.
///
/// Every action checks the admin gate first and validates its input before
/// any request goes out. A successful request is always followed by a
/// catalog refresh, started only after the request has completed.
#[derive(Clone)]
pub struct ActionGateway {
    api: ApiService,
}

impl ActionGateway {
    pub fn new(api: ApiService) -> Self {
        Self { api }
    }

    pub async fn like(
        &self,
        session: &Session,
        store: &mut CatalogStore,
        id: SongId,
    ) -> Result<(), ActionError> {
        session.require_admin("like")?;
        self.api.like_song(id).await?;
        info!(id, "song_liked");
        store.refresh(&self.api).await;
        Ok(())
    }

    pub async fn rate(
        &self,
        session: &Session,
        store: &mut CatalogStore,
        id: SongId,
        input: &str,
    ) -> Result<Rating, ActionError> {
        session.require_admin("rate")?;
        let rating =
            Rating::parse(input).ok_or_else(|| ActionError::InvalidRating(input.to_string()))?;
        self.api.rate_song(id, rating).await?;
        info!(id, rating = rating.value(), "song_rated");
        store.refresh(&self.api).await;
        Ok(rating)
    }

    /// Deletes a song. `confirmed` must carry the user's explicit consent.
    pub async fn delete(
        &self,
        session: &Session,
        store: &mut CatalogStore,
        id: SongId,
        confirmed: bool,
    ) -> Result<(), ActionError> {
        session.require_admin("delete")?;
        if !confirmed {
            return Err(ActionError::NotConfirmed);
        }
        self.api.delete_song(id).await?;
        info!(id, "song_deleted");
        store.refresh(&self.api).await;
        Ok(())
    }

    pub async fn upload(
        &self,
        session: &Session,
        store: &mut CatalogStore,
        upload: SongUpload,
    ) -> Result<Song, ActionError> {
        session.require_admin("upload")?;
        let upload = validate_upload(upload).await?;
        let song = self.api.upload_song(&upload).await?;
        store.refresh(&self.api).await;
        Ok(song)
    }
}

async fn validate_upload(upload: SongUpload) -> Result<SongUpload, ActionError> {
    let title = upload.title.trim();
    let artist = upload.artist.trim();
    if title.is_empty() || artist.is_empty() {
        return Err(ActionError::InvalidUpload(
            "Title and artist required".into(),
        ));
    }

    if !has_allowed_extension(&upload.file) {
        return Err(ActionError::InvalidUpload(format!(
            "Invalid audio file (expected one of: {})",
            ALLOWED_EXTENSIONS.join(", ")
        )));
    }

    match tokio::fs::metadata(&upload.file).await {
        Ok(meta) if meta.is_file() => {}
        _ => {
            return Err(ActionError::InvalidUpload(format!(
                "Audio file not found: {}",
                upload.file.display()
            )));
        }
    }

    Ok(SongUpload {
        title: title.to_string(),
        artist: artist.to_string(),
        file: upload.file,
    })
}

fn has_allowed_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| ALLOWED_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
}
