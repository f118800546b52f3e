mod common;

use fixture_site::PipelineError;
use fixture_site::gateway::{FixtureGateway, locate_database};
use fixture_site::model::RawId;

use common::{sample_connection, sample_today, write_sample_db};

#[test]
fn fetches_upcoming_window_in_event_order() {
    let gateway = FixtureGateway::from_connection(sample_connection());
    let rows = gateway.fetch_window(sample_today(), 7).expect("query");

    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    // 6 is past the window, 7 before it, 8 finished, 9 postponed.
    assert_eq!(ids, vec![1, 2, 3, 4, 11, 10, 5]);
}

#[test]
fn last_day_of_window_is_inclusive() {
    let gateway = FixtureGateway::from_connection(sample_connection());
    let rows = gateway.fetch_window(sample_today(), 7).expect("query");
    assert!(rows.iter().any(|r| r.id == 5), "2024-03-08 fixture should be in a 7 day window");

    let rows = gateway.fetch_window(sample_today(), 6).expect("query");
    assert!(!rows.iter().any(|r| r.id == 5));
}

#[test]
fn zero_days_ahead_selects_today_only() {
    let gateway = FixtureGateway::from_connection(sample_connection());
    let rows = gateway.fetch_window(sample_today(), 0).expect("query");
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn joins_competition_and_team_columns() {
    let gateway = FixtureGateway::from_connection(sample_connection());
    let rows = gateway.fetch_window(sample_today(), 7).expect("query");

    let first = &rows[0];
    assert_eq!(first.league_api_id, Some(RawId::Int(39)));
    assert_eq!(first.league_name_tc.as_deref(), Some("英超"));
    assert_eq!(first.home_team_name_en.as_deref(), Some("Arsenal"));
    assert_eq!(first.away_team_name_tc.as_deref(), Some("車路士"));
    assert_eq!(first.venue_city.as_deref(), Some("London"));
    assert_eq!(first.event_timestamp, Some(1709305200));

    let text_id = rows.iter().find(|r| r.id == 4).unwrap();
    assert_eq!(text_id.league_api_id, Some(RawId::Text("140".to_string())));
    assert_eq!(text_id.goals_home, Some(1));
    assert_eq!(text_id.raw_data.as_str(), Some("not json"));
}

#[test]
fn unmatched_joins_yield_nulls() {
    let gateway = FixtureGateway::from_connection(sample_connection());
    let rows = gateway.fetch_window(sample_today(), 7).expect("query");

    let no_league = rows.iter().find(|r| r.id == 10).expect("row kept without league");
    assert_eq!(no_league.league_api_id, None);
    assert_eq!(no_league.league_name_en, None);

    let no_home = rows.iter().find(|r| r.id == 11).expect("row kept without home team");
    assert_eq!(no_home.home_team_name_tc, None);
    assert_eq!(no_home.home_team_name_en, None);
    assert_eq!(no_home.away_team_name_en.as_deref(), Some("Chelsea"));
}

#[test]
fn opens_database_file_read_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("fixtures.db");
    write_sample_db(&path);

    let gateway = FixtureGateway::open(&path).expect("open");
    let rows = gateway.fetch_window(sample_today(), 7).expect("query");
    assert_eq!(rows.len(), 7);
}

#[test]
fn missing_database_is_unavailable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.db");

    let err = FixtureGateway::open(&missing).unwrap_err();
    assert!(matches!(err, PipelineError::DataSourceUnavailable(_)), "{err}");

    let err = FixtureGateway::locate(&[missing.clone(), dir.path().join("also-missing.db")]).unwrap_err();
    match err {
        PipelineError::DataSourceUnavailable(msg) => assert!(msg.contains("nope.db"), "{msg}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_database_file_is_unavailable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("fixtures.db");
    std::fs::write(&path, "this is not sqlite, just some text that is long enough to look like a header").unwrap();

    let err = FixtureGateway::open(&path).unwrap_err();
    assert!(matches!(err, PipelineError::DataSourceUnavailable(_)), "{err}");
}

#[test]
fn locate_picks_first_existing_candidate() {
    let dir = tempfile::tempdir().expect("tempdir");
    let first = dir.path().join("a.db");
    let second = dir.path().join("b.db");
    write_sample_db(&second);

    let found = locate_database(&[first, second.clone()]).expect("found");
    assert_eq!(found, second);
}

#[test]
fn loosely_typed_columns_do_not_fail_the_batch() {
    let conn = sample_connection();
    conn.execute_batch(
        "UPDATE fixtures SET season = '2023/24' WHERE id = 2;
         UPDATE fixtures SET raw_data = X'7B226964223A317D' WHERE id = 1;
         UPDATE fixtures SET goals_home = 1.0, venue_name = 42 WHERE id = 4;",
    )
    .unwrap();
    let gateway = FixtureGateway::from_connection(conn);

    let rows = gateway.fetch_window(sample_today(), 7).expect("query");
    assert_eq!(rows.len(), 7);

    let by_id = |id: i64| rows.iter().find(|r| r.id == id).unwrap();
    assert_eq!(by_id(2).season, None);
    assert_eq!(by_id(2).api_id, Some(1002));
    assert_eq!(by_id(1).raw_data.as_str(), Some("{\"id\":1}"));
    assert_eq!(by_id(4).goals_home, Some(1));
    assert_eq!(by_id(4).venue_name.as_deref(), Some("42"));
}

#[test]
fn huge_window_is_capped_instead_of_overflowing() {
    let gateway = FixtureGateway::from_connection(sample_connection());
    let rows = gateway.fetch_window(sample_today(), u32::MAX).expect("query");
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 11, 10, 5, 6]);
}
