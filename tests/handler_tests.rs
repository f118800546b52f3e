mod common;

use chrono::{TimeZone, Utc};
use fixture_site::handler::{Response, handler};
use fixture_site::{Config, PipelineError};

use common::write_sample_db;

fn sample_config(dir: &std::path::Path) -> Config {
    let database = dir.join("fixtures.db");
    write_sample_db(&database);
    Config {
        days_ahead: 7,
        database: Some(database),
        league_map: None,
        output_dir: dir.join("public"),
        timezone: Some("Asia/Hong_Kong".to_string()),
    }
}

#[tokio::test]
async fn generates_api_and_pages_from_sample_database() {
    let dir = tempfile::tempdir().unwrap();
    let config = sample_config(dir.path());
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();

    let response = handler(config.clone(), now).await.unwrap();

    assert_eq!(response.fixtures, 5);
    assert_eq!(response.competitions, 4);
    assert_eq!(response.dates, 5);
    assert_eq!(response.files.len(), 11);
    for file in &response.files {
        assert!(file.exists(), "missing {}", file.display());
    }

    let public = config.output_dir;
    let stats: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(public.join("api/stats.json")).unwrap()).unwrap();
    assert_eq!(stats["total_fixtures"], serde_json::json!(5));
    assert_eq!(stats["generated_at"], serde_json::json!("2024-03-01T16:00:00+08:00"));

    let index = std::fs::read_to_string(public.join("index.html")).unwrap();
    assert!(index.contains("2024-03-01 16:00:00"));
    assert!(index.contains("leagues/Bundesliga.html"));
    assert!(public.join("leagues/Ligue_1.html").exists());
}

#[tokio::test]
async fn league_map_narrows_the_site() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = sample_config(dir.path());
    config.league_map = Some(
        std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("league_map.json"),
    );
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();

    let response = handler(config, now).await.unwrap();

    // 78 is not in the map, so only 39, 61 and 140 remain.
    assert_eq!(response.fixtures, 4);
    assert_eq!(response.competitions, 3);
}

#[tokio::test]
async fn missing_database_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        database: Some(dir.path().join("absent.db")),
        output_dir: dir.path().join("public"),
        ..Config::default()
    };

    let err = handler(config, Utc::now()).await.unwrap_err();
    assert!(matches!(err, PipelineError::DataSourceUnavailable(_)), "{err}");
    assert!(!dir.path().join("public").exists());
}

#[test]
fn response_round_trips_through_json() {
    let response = Response {
        message: "Generated 0 fixtures".to_string(),
        fixtures: 0,
        competitions: 0,
        dates: 0,
        files: vec![],
    };
    let value = serde_json::to_value(&response).unwrap();
    let back: Response = serde_json::from_value(value).unwrap();
    assert_eq!(back.message, response.message);
    assert!(back.files.is_empty());
}
