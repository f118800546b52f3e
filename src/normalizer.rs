use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::{debug, info};

use crate::allow_list::AllowList;
use crate::config::SiteZone;
use crate::model::{EventTiming, NormalizedFixture, RawFixtureRow};

pub const UNKNOWN_COMPETITION: &str = "未知聯賽";
pub const UNKNOWN_HOME_TEAM: &str = "未知主隊";
pub const UNKNOWN_AWAY_TEAM: &str = "未知客隊";
pub const UNKNOWN_TIME: &str = "00:00";

/// Outcome of reading a scheduling timestamp. A bad timestamp is carried as
/// `Degraded` rather than failing the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleParse<'a> {
    Parsed(DateTime<Utc>),
    Degraded(&'a str),
}

impl<'a> ScheduleParse<'a> {
    /// Accepts RFC 3339 (`Z` or numeric offset) and naive ISO-8601 forms.
    /// Naive values are taken as UTC.
    pub fn parse(raw: &'a str) -> Self {
        let s = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return ScheduleParse::Parsed(dt.with_timezone(&Utc));
        }
        for pattern in [
            "%Y-%m-%dT%H:%M:%S%.f",
            "%Y-%m-%d %H:%M:%S%.f",
            "%Y-%m-%dT%H:%M",
            "%Y-%m-%d %H:%M",
        ] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, pattern) {
                return ScheduleParse::Parsed(naive.and_utc());
            }
        }
        if let Some(midnight) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
        {
            return ScheduleParse::Parsed(midnight.and_utc());
        }
        ScheduleParse::Degraded(raw)
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, ScheduleParse::Degraded(_))
    }

    pub fn timing(&self, zone: &SiteZone) -> EventTiming {
        match self {
            ScheduleParse::Parsed(dt) => EventTiming {
                event_date_formatted: dt.format("%Y-%m-%d").to_string(),
                event_time_formatted: dt.format("%H:%M").to_string(),
                event_datetime_local: zone.format_local(*dt),
                event_datetime_degraded: false,
            },
            ScheduleParse::Degraded(raw) => EventTiming {
                event_date_formatted: raw.to_string(),
                event_time_formatted: UNKNOWN_TIME.to_string(),
                event_datetime_local: raw.to_string(),
                event_datetime_degraded: true,
            },
        }
    }
}

fn non_empty(name: Option<&str>) -> Option<&str> {
    name.filter(|n| !n.is_empty())
}

/// First non-empty candidate, else `placeholder`.
fn resolve_name(candidates: &[Option<&str>], placeholder: &str) -> String {
    candidates
        .iter()
        .find_map(|c| non_empty(*c))
        .unwrap_or(placeholder)
        .to_string()
}

/// Normalize one row, or `None` when its competition is out of scope.
pub fn normalize_row(row: &RawFixtureRow, allow_list: &AllowList, zone: &SiteZone) -> Option<NormalizedFixture> {
    let competition_id = row.league_api_id.as_ref()?.as_i64()?;
    if !allow_list.contains(competition_id) {
        return None;
    }

    let league_display_name = resolve_name(
        &[
            row.league_name_tc.as_deref(),
            allow_list.display_name(competition_id),
            row.league_name_en.as_deref(),
        ],
        UNKNOWN_COMPETITION,
    );
    let home_team_display_name = resolve_name(
        &[row.home_team_name_tc.as_deref(), row.home_team_name_en.as_deref()],
        UNKNOWN_HOME_TEAM,
    );
    let away_team_display_name = resolve_name(
        &[row.away_team_name_tc.as_deref(), row.away_team_name_en.as_deref()],
        UNKNOWN_AWAY_TEAM,
    );

    let timing = row.event_date.as_deref().map(|raw| {
        let parsed = ScheduleParse::parse(raw);
        if parsed.is_degraded() {
            debug!(fixture_id = row.id, event_date = raw, "Unparseable event_date; using fallback fields");
        }
        parsed.timing(zone)
    });

    Some(NormalizedFixture {
        row: row.clone(),
        competition_id,
        league_display_name,
        home_team_display_name,
        away_team_display_name,
        timing,
    })
}

/// Keep the rows whose competition is allow-listed, resolving display names
/// and formatting the event time. Output order follows input order.
pub fn normalize(rows: &[RawFixtureRow], allow_list: &AllowList, zone: &SiteZone) -> Vec<NormalizedFixture> {
    let fixtures: Vec<NormalizedFixture> = rows
        .iter()
        .filter_map(|row| normalize_row(row, allow_list, zone))
        .collect();

    let degraded = fixtures
        .iter()
        .filter(|f| f.timing.as_ref().is_some_and(|t| t.event_datetime_degraded))
        .count();
    info!(seen = rows.len(), retained = fixtures.len(), degraded, "Normalized fixtures");
    log_distribution(&fixtures);

    fixtures
}

fn log_distribution(fixtures: &[NormalizedFixture]) {
    let mut order: Vec<i64> = Vec::new();
    let mut counts: HashMap<i64, (&str, usize)> = HashMap::new();
    for f in fixtures {
        counts
            .entry(f.competition_id)
            .or_insert_with(|| {
                order.push(f.competition_id);
                (f.league_display_name.as_str(), 0)
            })
            .1 += 1;
    }
    debug!(competitions = order.len(), "Fixture distribution");
    for id in order.iter().take(10) {
        if let Some((name, count)) = counts.get(id) {
            debug!(competition_id = id, name = *name, count, "Competition fixtures");
        }
    }
}
