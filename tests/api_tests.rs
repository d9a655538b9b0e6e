//! HTTP client and catalog store against a mock backend.

use std::time::Duration;

use serde_json::json;
use songdeck::{
    catalog::{CatalogStore, Rating, Section},
    http::{ApiError, ApiService},
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api(server: &MockServer) -> ApiService {
    ApiService::new(&format!("{}/api", server.uri()), Duration::from_secs(5)).unwrap()
}

fn songs_payload() -> serde_json::Value {
    json!([
        { "id": 1, "title": "First", "artist": "A", "audioUrl": "http://localhost:5000/uploads/1.mp3", "rating": 0, "likes": 0 },
        { "id": 2, "title": "Second", "artist": "B", "audioUrl": "http://localhost:5000/uploads/2.mp3", "rating": 5, "likes": 3 }
    ])
}

// =============================================================================
// Client Creation
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let api = ApiService::new("http://localhost:5000/api/", Duration::from_secs(1)).unwrap();
        assert_eq!(api.base(), "http://localhost:5000/api");
    }

    #[test]
    fn test_invalid_base_rejected() {
        for base in ["", "localhost:5000", "ftp://example.com/api"] {
            match ApiService::new(base, Duration::from_secs(1)) {
                Err(ApiError::InvalidBase(_)) => {}
                Err(e) => panic!("Expected InvalidBase for {base:?}, got {e}"),
                Ok(_) => panic!("Expected {base:?} to be rejected"),
            }
        }
    }
}

// =============================================================================
// Requests
// =============================================================================

mod requests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_songs_decodes_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/songs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(songs_payload()))
            .expect(1)
            .mount(&server)
            .await;

        let songs = api(&server).fetch_songs().await.unwrap();

        assert_eq!(songs.len(), 2);
        assert_eq!(songs[1].title, "Second");
        assert_eq!(songs[1].audio_url, "http://localhost:5000/uploads/2.mp3");
        assert_eq!(songs[1].rating, 5);
        assert_eq!(songs[1].likes, 3);
    }

    #[tokio::test]
    async fn test_missing_counters_default_to_zero() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/songs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 7, "title": "Bare", "artist": "C", "audioUrl": "/uploads/7.mp3" }
            ])))
            .mount(&server)
            .await;

        let songs = api(&server).fetch_songs().await.unwrap();
        assert_eq!(songs[0].rating, 0);
        assert_eq!(songs[0].likes, 0);
    }

    #[tokio::test]
    async fn test_rate_sends_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/songs/2/rate"))
            .and(body_json(json!({ "rating": 4 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
            .expect(1)
            .mount(&server)
            .await;

        let rating = Rating::new(4).unwrap();
        api(&server).rate_song(2, rating).await.unwrap();
    }

    #[tokio::test]
    async fn test_server_error_message_is_taken_from_payload() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/songs/9"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({ "error": "Song not found" })),
            )
            .mount(&server)
            .await;

        match api(&server).delete_song(9).await {
            Err(ApiError::Server { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "Song not found");
            }
            other => panic!("Expected Server error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_plain_text_error_body_is_kept() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/songs/1/like"))
            .respond_with(ResponseTemplate::new(500).set_body_string("database is locked"))
            .mount(&server)
            .await;

        match api(&server).like_song(1).await {
            Err(ApiError::Server { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "database is locked");
            }
            other => panic!("Expected Server error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_media_returns_bytes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/uploads/1.mp3"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8, 2, 3, 4]))
            .mount(&server)
            .await;

        let url = format!("{}/uploads/1.mp3", server.uri());
        let bytes = api(&server).fetch_media(&url).await.unwrap();
        assert_eq!(bytes, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_fetch_media_missing_file() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/uploads/gone.mp3"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let url = format!("{}/uploads/gone.mp3", server.uri());
        let result = api(&server).fetch_media(&url).await;
        assert!(matches!(result, Err(ApiError::Server { status: 404, .. })));
    }
}

// =============================================================================
// Catalog Store
// =============================================================================

mod catalog_store {
    use super::*;

    #[tokio::test]
    async fn test_refresh_replaces_catalog() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/songs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(songs_payload()))
            .mount(&server)
            .await;

        let mut store = CatalogStore::new();
        let count = store.refresh(&api(&server)).await;

        assert_eq!(count, 2);
        let ids = |section| {
            store
                .filter(section)
                .iter()
                .map(|s| s.id)
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(Section::All), vec![1, 2]);
        assert_eq!(ids(Section::Liked), vec![2]);
        assert_eq!(ids(Section::Rated), vec![2]);
    }

    #[tokio::test]
    async fn test_refresh_server_error_empties_catalog() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/songs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(songs_payload()))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/songs"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let api = api(&server);
        let mut store = CatalogStore::new();
        assert_eq!(store.refresh(&api).await, 2);
        assert_eq!(store.refresh(&api).await, 0);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_unreachable_backend_empties_catalog() {
        // Nothing listens on the discard port.
        let api = ApiService::new("http://127.0.0.1:9/api", Duration::from_secs(1)).unwrap();
        let mut store = CatalogStore::new();

        assert_eq!(store.refresh(&api).await, 0);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_bad_payload_empties_catalog() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/songs"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let mut store = CatalogStore::new();
        assert_eq!(store.refresh(&api(&server)).await, 0);
    }
}
