use rodio::{OutputStream, OutputStreamBuilder, Sink, cpal::BufferSize};

use crate::audio::error::PlaybackError;

/// Opens the default output device and connects a fresh sink to it.
pub fn open_output() -> Result<(OutputStream, Sink), PlaybackError> {
    let mut stream = OutputStreamBuilder::from_default_device()
        .map_err(|e| PlaybackError::OutputBlocked(e.to_string()))?
        .with_buffer_size(BufferSize::Fixed(4096))
        .open_stream_or_fallback()
        .map_err(|e| PlaybackError::OutputBlocked(e.to_string()))?;
    stream.log_on_drop(false);

    let sink = Sink::connect_new(stream.mixer());
    Ok((stream, sink))
}

/// Container hint for the decoder, taken from the locator's file extension.
pub fn extension_hint(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let name = path.rsplit('/').next()?;
    let (_, ext) = name.rsplit_once('.')?;
    (!ext.is_empty()).then(|| ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_hint_reads_last_path_segment() {
        assert_eq!(
            extension_hint("http://localhost:5000/uploads/1-song.MP3").as_deref(),
            Some("mp3")
        );
        assert_eq!(
            extension_hint("http://host/a.ogg?token=x.y").as_deref(),
            Some("ogg")
        );
        assert_eq!(extension_hint("http://host.example/uploads/noext"), None);
    }
}
