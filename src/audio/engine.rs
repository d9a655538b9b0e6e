use std::{io::Cursor, sync::Arc, time::Duration};

use async_trait::async_trait;
use rodio::{Decoder, OutputStream, Sink, Source};
use tracing::{debug, info};

use crate::{
    audio::{
        error::PlaybackError,
        traits::AudioOutput,
        util::{extension_hint, open_output},
    },
    http::ApiService,
};

struct LoadedMedia {
    url: String,
    data: Arc<[u8]>,
    duration: Option<Duration>,
}

/// rodio-backed output. The device is opened on first use so a missing or
/// busy device surfaces as a retryable transport error instead of a crash.
pub struct PlaybackEngine {
    api: ApiService,
    device: Option<(OutputStream, Sink)>,
    media: Option<LoadedMedia>,
    volume: f32,
}

impl PlaybackEngine {
    pub fn new(api: ApiService) -> Self {
        Self {
            api,
            device: None,
            media: None,
            volume: 1.0,
        }
    }

    fn sink(&mut self) -> Result<&Sink, PlaybackError> {
        if self.device.is_none() {
            let (stream, sink) = open_output()?;
            sink.set_volume(self.volume);
            info!("audio_output_opened");
            self.device = Some((stream, sink));
        }
        match &self.device {
            Some((_, sink)) => Ok(sink),
            None => Err(PlaybackError::OutputBlocked("output not open".into())),
        }
    }

    fn decode(media: &LoadedMedia) -> Result<Decoder<Cursor<Arc<[u8]>>>, PlaybackError> {
        let mut builder = Decoder::builder()
            .with_data(Cursor::new(media.data.clone()))
            .with_byte_len(media.data.len() as u64)
            .with_seekable(true)
            .with_gapless(true);
        if let Some(hint) = extension_hint(&media.url) {
            builder = builder.with_hint(&hint);
        }
        builder
            .build()
            .map_err(|e| PlaybackError::MediaUnavailable(e.to_string()))
    }
}

#[async_trait(?Send)]
impl AudioOutput for PlaybackEngine {
    fn loaded_source(&self) -> Option<&str> {
        self.media.as_ref().map(|m| m.url.as_str())
    }

    async fn load(&mut self, url: &str) -> Result<(), PlaybackError> {
        if let Some((_, sink)) = &self.device {
            sink.clear();
        }
        self.media = None;

        let data: Arc<[u8]> = self
            .api
            .fetch_media(url)
            .await
            .map_err(|e| PlaybackError::MediaUnavailable(e.to_string()))?
            .into();

        let mut media = LoadedMedia {
            url: url.to_string(),
            data,
            duration: None,
        };
        // Probe once so decode errors surface here rather than at start.
        media.duration = Self::decode(&media)?.total_duration();

        debug!(
            url,
            bytes = media.data.len(),
            duration_ms = media.duration.map(|d| d.as_millis() as u64),
            "media_loaded"
        );
        self.media = Some(media);
        Ok(())
    }

    fn start(&mut self) -> Result<(), PlaybackError> {
        let decoder = match &self.media {
            Some(media) => Self::decode(media)?,
            None => {
                return Err(PlaybackError::MediaUnavailable("nothing loaded".into()));
            }
        };

        let sink = self.sink()?;
        if sink.empty() {
            sink.append(decoder);
        }
        sink.play();
        Ok(())
    }

    fn pause(&mut self) {
        if let Some((_, sink)) = &self.device {
            sink.pause();
        }
    }

    fn stop(&mut self) {
        if let Some((_, sink)) = &self.device {
            sink.clear();
        }
        self.media = None;
    }

    fn is_finished(&self) -> bool {
        match &self.device {
            Some((_, sink)) => self.media.is_some() && sink.empty(),
            None => false,
        }
    }

    fn position(&self) -> Duration {
        match &self.device {
            Some((_, sink)) => sink.get_pos(),
            None => Duration::ZERO,
        }
    }

    fn duration(&self) -> Option<Duration> {
        self.media.as_ref().and_then(|m| m.duration)
    }

    fn seek(&mut self, position: Duration) -> Result<(), PlaybackError> {
        match &self.device {
            Some((_, sink)) => sink
                .try_seek(position)
                .map_err(|e| PlaybackError::Seek(e.to_string())),
            None => Ok(()),
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some((_, sink)) = &self.device {
            sink.set_volume(volume);
        }
    }
}
