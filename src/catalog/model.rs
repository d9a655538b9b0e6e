use std::fmt;

use serde::{Deserialize, Serialize};

pub type SongId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub artist: String,
    #[serde(rename = "audioUrl")]
    pub audio_url: String,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub likes: u64,
}

impl Song {
    pub fn is_liked(&self) -> bool {
        self.likes > 0
    }

    pub fn is_rated(&self) -> bool {
        self.rating > 0
    }
}

/// One of the predefined views over the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    All,
    Liked,
    Rated,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::All, Section::Liked, Section::Rated];

    pub fn contains(self, song: &Song) -> bool {
        match self {
            Section::All => true,
            Section::Liked => song.is_liked(),
            Section::Rated => song.is_rated(),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::All => "All Songs",
            Section::Liked => "Liked Songs",
            Section::Rated => "Rated Songs",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            Section::All => "No songs yet. Upload some music!",
            Section::Liked => "No liked songs yet",
            Section::Rated => "No rated songs yet",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Section::All => 0,
            Section::Liked => 1,
            Section::Rated => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A star rating accepted by the backend. The scale runs to six stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(value: i64) -> Option<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    /// Parses free-form user input. Only whole numbers on the scale are accepted.
    pub fn parse(input: &str) -> Option<Self> {
        input.trim().parse::<i64>().ok().and_then(Self::new)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn song_deserializes_backend_payload() {
        let json = r#"{
            "id": 3,
            "title": "Intro",
            "artist": "Band",
            "filename": "3-intro.mp3",
            "audioUrl": "http://localhost:5000/uploads/3-intro.mp3",
            "likes": 2,
            "rating": 4
        }"#;

        let song: Song = serde_json::from_str(json).unwrap();
        assert_eq!(song.id, 3);
        assert_eq!(song.audio_url, "http://localhost:5000/uploads/3-intro.mp3");
        assert_eq!(song.likes, 2);
        assert_eq!(song.rating, 4);
    }

    #[test]
    fn missing_counters_default_to_zero() {
        let json = r#"{"id": 1, "title": "t", "artist": "a", "audioUrl": "u"}"#;
        let song: Song = serde_json::from_str(json).unwrap();
        assert!(!song.is_liked());
        assert!(!song.is_rated());
    }

    #[test]
    fn rating_accepts_one_through_six() {
        for value in 1..=6 {
            assert_eq!(Rating::new(value).map(Rating::value), Some(value as u8));
        }
    }

    #[test]
    fn rating_rejects_out_of_range_and_garbage() {
        assert!(Rating::parse("0").is_none());
        assert!(Rating::parse("7").is_none());
        assert!(Rating::parse("-1").is_none());
        assert!(Rating::parse("five").is_none());
        assert!(Rating::parse("").is_none());
        assert!(Rating::parse("2.5").is_none());
        assert_eq!(Rating::parse(" 6 ").map(Rating::value), Some(6));
    }

    #[test]
    fn rating_serializes_as_bare_number() {
        let body = serde_json::json!({ "rating": Rating::new(5).unwrap() });
        assert_eq!(body.to_string(), r#"{"rating":5}"#);
    }

    #[test]
    fn section_cycle_wraps() {
        assert_eq!(Section::Rated.next(), Section::All);
        assert_eq!(Section::All.previous(), Section::Rated);
    }
}
