#![allow(dead_code)]

use std::path::Path;

use chrono::NaiveDate;
use fixture_site::model::{RawFixtureRow, RawId, RawPayload};
use rusqlite::Connection;

pub const SCHEMA: &str = include_str!("../schema.sql");
pub const SAMPLE_FIXTURES: &str = include_str!("../sample_fixtures.sql");

/// The day the sample data is built around.
pub fn sample_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

pub fn sample_connection() -> Connection {
    let conn = Connection::open_in_memory().expect("in-memory db");
    conn.execute_batch(SCHEMA).expect("schema");
    conn.execute_batch(SAMPLE_FIXTURES).expect("sample data");
    conn
}

pub fn write_sample_db(path: &Path) {
    let conn = Connection::open(path).expect("create db file");
    conn.execute_batch(SCHEMA).expect("schema");
    conn.execute_batch(SAMPLE_FIXTURES).expect("sample data");
}

/// A row with English and localized names filled in.
pub fn row(id: i64, league: Option<RawId>, event_date: Option<&str>) -> RawFixtureRow {
    RawFixtureRow {
        id,
        api_id: Some(id + 1000),
        event_date: event_date.map(str::to_string),
        status_short: Some("NS".to_string()),
        league_api_id: league,
        league_name_tc: Some("英超".to_string()),
        league_name_en: Some("Premier League".to_string()),
        league_country: Some("England".to_string()),
        home_team_name_tc: Some("阿仙奴".to_string()),
        home_team_name_en: Some("Arsenal".to_string()),
        home_team_country: Some("England".to_string()),
        away_team_name_tc: Some("車路士".to_string()),
        away_team_name_en: Some("Chelsea".to_string()),
        away_team_country: Some("England".to_string()),
        raw_data: RawPayload::default(),
        ..Default::default()
    }
}

/// A row for competition `league` named `name` (both localized and English).
pub fn competition_row(id: i64, league: i64, name: &str, event_date: &str) -> RawFixtureRow {
    RawFixtureRow {
        league_name_tc: Some(name.to_string()),
        league_name_en: Some(name.to_string()),
        league_country: Some(format!("{name} country")),
        ..row(id, Some(RawId::Int(league)), Some(event_date))
    }
}
