use serde::Serialize;

use crate::model::payload::RawPayload;

/// A competition id as stored. SQLite columns are dynamically typed, so the
/// joined `league_api_id` may come back as an integer, a real or text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawId {
    Int(i64),
    Real(f64),
    Text(String),
}

impl RawId {
    /// Interpret the stored value as a signed integer id.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            RawId::Int(id) => Some(*id),
            RawId::Real(f) if f.is_finite() && f.fract() == 0.0 => Some(*f as i64),
            RawId::Real(_) => None,
            RawId::Text(s) => s.trim().parse::<i64>().ok(),
        }
    }
}

impl From<i64> for RawId {
    fn from(id: i64) -> Self {
        RawId::Int(id)
    }
}

impl From<&str> for RawId {
    fn from(id: &str) -> Self {
        RawId::Text(id.to_string())
    }
}

/// One row of the fixture query: the fixture joined with its competition and
/// both teams. Joined columns are null when the foreign key has no match.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawFixtureRow {
    pub id: i64,
    pub api_id: Option<i64>,
    pub league_id: Option<i64>,
    pub home_team_id: Option<i64>,
    pub away_team_id: Option<i64>,
    pub event_date: Option<String>,
    pub event_timestamp: Option<i64>,
    pub status_short: Option<String>,
    pub status_long: Option<String>,
    pub goals_home: Option<i64>,
    pub goals_away: Option<i64>,
    pub venue_name: Option<String>,
    pub venue_city: Option<String>,
    pub referee: Option<String>,
    pub round: Option<String>,
    pub season: Option<i64>,
    pub raw_data: RawPayload,

    pub league_api_id: Option<RawId>,
    pub league_name_tc: Option<String>,
    pub league_name_en: Option<String>,
    pub league_country: Option<String>,

    pub home_team_name_tc: Option<String>,
    pub home_team_name_en: Option<String>,
    pub home_team_country: Option<String>,

    pub away_team_name_tc: Option<String>,
    pub away_team_name_en: Option<String>,
    pub away_team_country: Option<String>,
}

/// Display fields derived from `event_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventTiming {
    pub event_date_formatted: String,
    pub event_time_formatted: String,
    pub event_datetime_local: String,
    /// Set when `event_date` could not be parsed and the fields above carry
    /// fallback values.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub event_datetime_degraded: bool,
}

/// A fixture inside the allow-list, with resolved names and formatted times.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedFixture {
    #[serde(flatten)]
    pub row: RawFixtureRow,
    pub competition_id: i64,
    pub league_display_name: String,
    pub home_team_display_name: String,
    pub away_team_display_name: String,
    #[serde(flatten)]
    pub timing: Option<EventTiming>,
}

impl NormalizedFixture {
    pub fn event_date_formatted(&self) -> Option<&str> {
        self.timing.as_ref().map(|t| t.event_date_formatted.as_str())
    }

    pub fn event_time_formatted(&self) -> Option<&str> {
        self.timing.as_ref().map(|t| t.event_time_formatted.as_str())
    }

    pub fn league_country(&self) -> &str {
        self.row.league_country.as_deref().unwrap_or("")
    }
}
