mod error;

pub use self::error::ApiError;

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::{
    Client, Response, Url,
    multipart::{Form, Part},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use crate::catalog::{Rating, Song, SongId};

/// Fields of the upload form, validated by the caller.
#[derive(Debug, Clone)]
pub struct SongUpload {
    pub title: String,
    pub artist: String,
    pub file: PathBuf,
}

#[derive(Deserialize)]
struct ErrorPayload {
    error: String,
}

#[derive(Clone)]
pub struct ApiService {
    client: Client,
    base: String,
}

impl ApiService {
    pub fn new(base: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base = base.trim_end_matches('/');
        let url = Url::parse(base).map_err(|e| ApiError::InvalidBase(format!("{base}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBase(format!(
                "{base}: scheme must be http or https"
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("songdeck/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base: base.to_string(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }

    pub async fn fetch_songs(&self) -> Result<Vec<Song>, ApiError> {
        let response = self.client.get(self.endpoint("songs")).send().await?;
        let response = check(response).await?;
        response
            .json::<Vec<Song>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn like_song(&self, id: SongId) -> Result<(), ApiError> {
        debug!(id, "api_like");
        let response = self
            .client
            .post(self.endpoint(&format!("songs/{id}/like")))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    pub async fn rate_song(&self, id: SongId, rating: Rating) -> Result<(), ApiError> {
        debug!(id, rating = rating.value(), "api_rate");
        let response = self
            .client
            .post(self.endpoint(&format!("songs/{id}/rate")))
            .json(&json!({ "rating": rating }))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    pub async fn delete_song(&self, id: SongId) -> Result<(), ApiError> {
        debug!(id, "api_delete");
        let response = self
            .client
            .delete(self.endpoint(&format!("songs/{id}")))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    pub async fn upload_song(&self, upload: &SongUpload) -> Result<Song, ApiError> {
        let contents = tokio::fs::read(&upload.file)
            .await
            .map_err(|source| ApiError::File {
                path: upload.file.display().to_string(),
                source,
            })?;
        let size = contents.len();

        let part = Part::bytes(contents)
            .file_name(file_name(&upload.file))
            .mime_str(mime_type_for_file(&upload.file))?;
        let form = Form::new()
            .text("title", upload.title.clone())
            .text("artist", upload.artist.clone())
            .part("audioFile", part);

        let response = self
            .client
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await?;
        let response = check(response).await?;

        // The backend may answer 200 with an `{error}` body.
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        if let Some(message) = body.get("error").and_then(|e| e.as_str()) {
            return Err(ApiError::Rejected(message.to_string()));
        }
        let song: Song =
            serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;

        info!(id = song.id, size, title = song.title.as_str(), "api_uploaded");
        Ok(song)
    }

    /// Downloads a media resource in full.
    pub async fn fetch_media(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.client.get(url).send().await?;
        let response = check(response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorPayload>(&text)
        .map(|p| p.error)
        .unwrap_or(text);

    Err(ApiError::Server {
        status: status.as_u16(),
        message,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("track")
        .to_string()
}

fn mime_type_for_file(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("ogg") => "audio/ogg",
        Some("m4a") => "audio/mp4",
        _ => "application/octet-stream",
    }
}
