use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate, Utc};
use rusqlite::types::Value;
use rusqlite::{Connection, OpenFlags, Row, params_from_iter};
use tracing::{info, info_span, instrument, warn};

use crate::error::PipelineError;
use crate::model::{FixtureStatus, RawFixtureRow, RawId, RawPayload};

const FIXTURE_QUERY: &str = "
SELECT
    f.id,
    f.api_id,
    f.league_id,
    f.home_team_id,
    f.away_team_id,
    f.event_date,
    f.event_timestamp,
    f.status_short,
    f.status_long,
    f.goals_home,
    f.goals_away,
    f.venue_name,
    f.venue_city,
    f.referee,
    f.round,
    f.season,
    f.raw_data,
    l.api_id AS league_api_id,
    l.name_tc AS league_name_tc,
    l.name_en AS league_name_en,
    l.country AS league_country,
    ht.name_tc AS home_team_name_tc,
    ht.name_en AS home_team_name_en,
    ht.country AS home_team_country,
    at.name_tc AS away_team_name_tc,
    at.name_en AS away_team_name_en,
    at.country AS away_team_country
FROM fixtures f
LEFT JOIN leagues l ON f.league_id = l.id
LEFT JOIN teams ht ON f.home_team_id = ht.id
LEFT JOIN teams at ON f.away_team_id = at.id
WHERE substr(f.event_date, 1, 10) >= ?1
  AND substr(f.event_date, 1, 10) <= ?2
  AND f.status_short IN ({statuses})
ORDER BY f.event_date, f.event_timestamp";

/// Read-only access to the fixtures database.
pub struct FixtureGateway {
    conn: Connection,
}

impl std::fmt::Debug for FixtureGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixtureGateway")
            .field("path", &self.conn.path())
            .finish()
    }
}

/// First existing path among `candidates`.
pub fn locate_database(candidates: &[PathBuf]) -> Result<PathBuf, PipelineError> {
    candidates
        .iter()
        .find(|path| path.is_file())
        .cloned()
        .ok_or_else(|| {
            let searched = candidates
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            PipelineError::DataSourceUnavailable(format!("no fixtures database found (searched: {searched})"))
        })
}

impl FixtureGateway {
    /// Open the first database found among `candidates`.
    pub fn locate(candidates: &[PathBuf]) -> Result<Self, PipelineError> {
        let path = locate_database(candidates)?;
        info!(path = %path.display(), "Found fixtures database");
        Self::open(&path)
    }

    pub fn open(path: &Path) -> Result<Self, PipelineError> {
        let unavailable = |e: rusqlite::Error| {
            PipelineError::DataSourceUnavailable(format!("{}: {e}", path.display()))
        };
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(unavailable)?;
        // The first statement is where SQLite notices a file that is not a database.
        conn.execute_batch("PRAGMA query_only=ON; PRAGMA temp_store=MEMORY;")
            .map_err(unavailable)?;
        conn.query_row("SELECT count(*) FROM sqlite_master", [], |_| Ok(()))
            .map_err(unavailable)?;
        Ok(FixtureGateway { conn })
    }

    /// Wrap an already open connection.
    pub fn from_connection(conn: Connection) -> Self {
        FixtureGateway { conn }
    }

    /// Upcoming fixtures from today (UTC) through `days_ahead` days later.
    pub fn fetch(&self, days_ahead: u32) -> Result<Vec<RawFixtureRow>, PipelineError> {
        self.fetch_window(Utc::now().date_naive(), days_ahead)
    }

    /// Fixtures whose event date lies in `[today, today + days_ahead]` and
    /// whose status is not terminal, ordered by event date then timestamp.
    #[instrument(level = "info", skip(self))]
    pub fn fetch_window(&self, today: NaiveDate, days_ahead: u32) -> Result<Vec<RawFixtureRow>, PipelineError> {
        let end_date = window_end(today, days_ahead);
        info!(from = %today, to = %end_date, "Querying fixtures");

        let statuses = (0..FixtureStatus::UPCOMING.len())
            .map(|i| format!("?{}", i + 3))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = FIXTURE_QUERY.replace("{statuses}", &statuses);

        let mut params: Vec<Value> = vec![
            Value::Text(today.format("%Y-%m-%d").to_string()),
            Value::Text(end_date.format("%Y-%m-%d").to_string()),
        ];
        params.extend(
            FixtureStatus::UPCOMING
                .iter()
                .map(|s| Value::Text(s.code().to_string())),
        );

        let rows = {
            let _span = info_span!("fixture_query", window_days = days_ahead).entered();
            let mut stmt = self.conn.prepare(&sql)?;
            let mapped = stmt.query_map(params_from_iter(params), read_row)?;
            mapped.collect::<Result<Vec<_>, _>>()?
        };

        info!(count = rows.len(), "Fetched fixtures");
        Ok(rows)
    }
}

/// `today + days_ahead`, capped at the last date with a four digit year so
/// the bound still compares correctly against stored `YYYY-MM-DD` text.
fn window_end(today: NaiveDate, days_ahead: u32) -> NaiveDate {
    let last = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap_or(NaiveDate::MAX);
    today
        .checked_add_days(Days::new(u64::from(days_ahead)))
        .map_or(last, |end| end.min(last))
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<RawFixtureRow> {
    let id: i64 = row.get("id")?;
    let int = |name: &str| int_column(row, name, id);
    let text = |name: &str| text_column(row, name);
    Ok(RawFixtureRow {
        id,
        api_id: int("api_id")?,
        league_id: int("league_id")?,
        home_team_id: int("home_team_id")?,
        away_team_id: int("away_team_id")?,
        event_date: text("event_date")?,
        event_timestamp: int("event_timestamp")?,
        status_short: text("status_short")?,
        status_long: text("status_long")?,
        goals_home: int("goals_home")?,
        goals_away: int("goals_away")?,
        venue_name: text("venue_name")?,
        venue_city: text("venue_city")?,
        referee: text("referee")?,
        round: text("round")?,
        season: int("season")?,
        raw_data: RawPayload::from(text("raw_data")?),
        league_api_id: raw_id(row.get("league_api_id")?),
        league_name_tc: text("league_name_tc")?,
        league_name_en: text("league_name_en")?,
        league_country: text("league_country")?,
        home_team_name_tc: text("home_team_name_tc")?,
        home_team_name_en: text("home_team_name_en")?,
        home_team_country: text("home_team_country")?,
        away_team_name_tc: text("away_team_name_tc")?,
        away_team_name_en: text("away_team_name_en")?,
        away_team_country: text("away_team_country")?,
    })
}

/// Integer column that tolerates whatever SQLite actually stored. Values that
/// do not read as an integer become null for this row only.
fn int_column(row: &Row<'_>, name: &str, fixture_id: i64) -> rusqlite::Result<Option<i64>> {
    let value: Value = row.get(name)?;
    if matches!(value, Value::Null) {
        return Ok(None);
    }
    let stored = format!("{value:?}");
    let coerced = raw_id(value).and_then(|id| id.as_i64());
    if coerced.is_none() {
        warn!(fixture_id, column = name, stored = %stored, "Non-integer value; reading as null");
    }
    Ok(coerced)
}

fn text_column(row: &Row<'_>, name: &str) -> rusqlite::Result<Option<String>> {
    Ok(match row.get::<_, Value>(name)? {
        Value::Null => None,
        Value::Text(s) => Some(s),
        Value::Integer(i) => Some(i.to_string()),
        Value::Real(f) => Some(f.to_string()),
        Value::Blob(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
    })
}

fn raw_id(value: Value) -> Option<RawId> {
    match value {
        Value::Integer(i) => Some(RawId::Int(i)),
        Value::Real(f) => Some(RawId::Real(f)),
        Value::Text(s) => Some(RawId::Text(s)),
        Value::Null | Value::Blob(_) => None,
    }
}
