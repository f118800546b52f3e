mod common;

use chrono_tz::Tz;
use fixture_site::grouping::{group_by_competition, group_by_date};
use fixture_site::model::{RawId, RawPayload};
use fixture_site::normalizer::normalize;
use fixture_site::serialize::{Stats, to_json_safe, write_api, write_json};
use fixture_site::{AllowList, PipelineError, SiteZone};
use serde_json::json;

use common::{competition_row, row};

const UTC: SiteZone = SiteZone::Named(Tz::UTC);
const GENERATED_AT: &str = "2024-03-01T08:00:00+00:00";

#[test]
fn json_payload_is_decoded_into_nested_value() {
    let mut r = row(1, Some(RawId::Int(39)), Some("2024-03-01T15:00:00Z"));
    r.raw_data = RawPayload::new(r#"{"fixture":{"id":1001,"referee":null},"goals":[1,2]}"#);
    let fixtures = normalize(&[r], &AllowList::builtin(), &UTC);

    let doc = to_json_safe(&fixtures).unwrap();
    assert_eq!(
        doc[0]["raw_data"],
        json!({"fixture": {"id": 1001, "referee": null}, "goals": [1, 2]})
    );
}

#[test]
fn non_json_payload_passes_through_as_text() {
    let mut r = row(1, Some(RawId::Int(39)), Some("2024-03-01T15:00:00Z"));
    r.raw_data = RawPayload::new("{not json");
    let fixtures = normalize(&[r], &AllowList::builtin(), &UTC);

    let doc = to_json_safe(&fixtures).unwrap();
    assert_eq!(doc[0]["raw_data"], json!("{not json"));
}

#[test]
fn other_fields_are_copied_verbatim() {
    let mut r = row(9, Some(RawId::Text("39".into())), Some("bad"));
    r.venue_name = Some("Emirates Stadium".into());
    r.goals_home = Some(2);
    let fixtures = normalize(&[r], &AllowList::builtin(), &UTC);

    let doc = to_json_safe(&fixtures).unwrap();
    let f = &doc[0];
    assert_eq!(f["id"], json!(9));
    assert_eq!(f["league_api_id"], json!("39"));
    assert_eq!(f["competition_id"], json!(39));
    assert_eq!(f["venue_name"], json!("Emirates Stadium"));
    assert_eq!(f["goals_home"], json!(2));
    assert_eq!(f["goals_away"], json!(null));
    assert_eq!(f["league_name_tc"], json!("英超"));
    assert_eq!(f["league_display_name"], json!("英超"));
    assert_eq!(f["event_date"], json!("bad"));
    assert_eq!(f["event_date_formatted"], json!("bad"));
    assert_eq!(f["event_time_formatted"], json!("00:00"));
    assert_eq!(f["event_datetime_degraded"], json!(true));
}

#[test]
fn clean_timestamps_are_not_flagged() {
    let r = row(1, Some(RawId::Int(39)), Some("2024-03-01T15:00:00Z"));
    let fixtures = normalize(&[r], &AllowList::builtin(), &UTC);
    let doc = to_json_safe(&fixtures).unwrap();
    assert!(doc[0].get("event_datetime_degraded").is_none());
    assert_eq!(doc[0]["event_datetime_local"], json!("2024-03-01 15:00"));
}

#[test]
fn writes_unescaped_utf8_with_two_space_indent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("doc.json");
    write_json(&path, &json!({"name": "英超"})).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "{\n  \"name\": \"英超\"\n}");
}

#[test]
fn writes_api_documents() {
    let rows = vec![
        competition_row(1, 140, "西甲", "2024-03-02T20:00:00Z"),
        competition_row(2, 39, "英超", "2024-03-01T15:00:00Z"),
        competition_row(3, 39, "英超", "2024-03-02T12:00:00Z"),
    ];
    let fixtures = normalize(&rows, &AllowList::builtin(), &UTC);
    let competitions = group_by_competition(&fixtures);
    let dates = group_by_date(&fixtures);

    let dir = tempfile::tempdir().unwrap();
    let files = write_api(dir.path(), &fixtures, &competitions, &dates, GENERATED_AT).unwrap();

    let read = |p: &std::path::Path| -> serde_json::Value {
        serde_json::from_str(&std::fs::read_to_string(p).unwrap()).unwrap()
    };

    let all = read(&files.fixtures);
    assert_eq!(all["status"], json!("success"));
    assert_eq!(all["count"], json!(3));
    assert_eq!(all["generated_at"], json!(GENERATED_AT));
    assert_eq!(all["data"].as_array().unwrap().len(), 3);

    let leagues = read(&files.leagues);
    assert_eq!(leagues["count"], json!(2));
    assert_eq!(leagues["data"]["39"]["name"], json!("英超"));
    assert_eq!(leagues["data"]["39"]["fixtures"].as_array().unwrap().len(), 2);
    // Object keys follow display-name order, not id order.
    let text = std::fs::read_to_string(&files.leagues).unwrap();
    assert!(text.find("\"39\"").unwrap() < text.find("\"140\"").unwrap());

    let dates_doc = read(&files.dates);
    assert_eq!(dates_doc["count"], json!(2));
    assert_eq!(dates_doc["data"]["2024-03-02"].as_array().unwrap().len(), 2);

    let stats = read(&files.stats);
    assert_eq!(stats["total_fixtures"], json!(3));
    assert_eq!(stats["total_leagues"], json!(2));
    assert_eq!(stats["total_dates"], json!(2));
    assert_eq!(
        stats["leagues"],
        json!([
            {"id": 39, "name": "英超", "count": 2},
            {"id": 140, "name": "西甲", "count": 1}
        ])
    );
}

#[test]
fn stats_follow_competition_order() {
    let rows = vec![
        competition_row(1, 78, "Bundesliga", "2024-03-02T20:00:00Z"),
        competition_row(2, 61, "Ligue 1", "2024-03-01T15:00:00Z"),
    ];
    let fixtures = normalize(&rows, &AllowList::builtin(), &UTC);
    let stats = Stats::new(
        &fixtures,
        &group_by_competition(&fixtures),
        &group_by_date(&fixtures),
        GENERATED_AT,
    );
    let names: Vec<&str> = stats.leagues.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Bundesliga", "Ligue 1"]);
}

#[test]
fn unwritable_target_is_an_output_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("api");
    std::fs::write(&blocker, "a file where a directory should be").unwrap();

    let err = write_api(dir.path(), &[], &Default::default(), &Default::default(), GENERATED_AT).unwrap_err();
    assert!(matches!(err, PipelineError::OutputWrite { .. }), "{err}");
}
