use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, SecondsFormat, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::allow_list::AllowListSource;
use crate::error::ConfigError;

pub const DEFAULT_DAYS_AHEAD: u32 = 7;
pub const DEFAULT_OUTPUT_DIR: &str = "public";

/// Where to look for the fixtures database when none is configured.
pub const DATABASE_CANDIDATES: [&str; 2] = ["api_football_sync/fixtures.db", "fixtures.db"];
pub const LEAGUE_MAP_CANDIDATE: &str = "api_football_sync/league_map.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub days_ahead: u32,
    pub database: Option<PathBuf>,
    pub league_map: Option<PathBuf>,
    pub output_dir: PathBuf,
    /// IANA zone used for `event_datetime_local`; the process zone when unset.
    pub timezone: Option<String>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

impl Default for Config {
    fn default() -> Self {
        Config {
            days_ahead: DEFAULT_DAYS_AHEAD,
            database: None,
            league_map: None,
            output_dir: default_output_dir(),
            timezone: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from `DAYS_AHEAD`, `FIXTURES_DB`, `LEAGUE_MAP`, `OUTPUT_DIR` and
    /// `SITE_TIMEZONE`. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let days_ahead = match get("DAYS_AHEAD") {
            Some(raw) => raw.parse::<u32>().map_err(|_| ConfigError::DaysAhead(raw))?,
            None => DEFAULT_DAYS_AHEAD,
        };

        let config = Config {
            days_ahead,
            database: get("FIXTURES_DB").map(PathBuf::from),
            league_map: get("LEAGUE_MAP").map(PathBuf::from),
            output_dir: get("OUTPUT_DIR").map(PathBuf::from).unwrap_or_else(default_output_dir),
            timezone: get("SITE_TIMEZONE"),
        };
        config.zone()?;
        Ok(config)
    }

    pub fn zone(&self) -> Result<SiteZone, ConfigError> {
        match self.timezone.as_deref() {
            None => Ok(SiteZone::System),
            Some(name) => name
                .parse::<Tz>()
                .map(SiteZone::Named)
                .map_err(|_| ConfigError::Timezone(name.to_string())),
        }
    }

    /// The configured database, or every fallback location in search order.
    pub fn database_candidates(&self) -> Vec<PathBuf> {
        match &self.database {
            Some(path) => vec![path.clone()],
            None => DATABASE_CANDIDATES.iter().map(PathBuf::from).collect(),
        }
    }

    pub fn allow_list_source(&self) -> AllowListSource {
        let league_map = self.league_map.clone().or_else(|| {
            let candidate = Path::new(LEAGUE_MAP_CANDIDATE);
            if candidate.exists() {
                Some(candidate.to_path_buf())
            } else {
                warn!(candidate = LEAGUE_MAP_CANDIDATE, "No league map configured or found; using builtin competition ids");
                None
            }
        });
        AllowListSource::select(league_map)
    }
}

/// Time zone for local display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteZone {
    System,
    Named(Tz),
}

impl SiteZone {
    /// `YYYY-MM-DD HH:MM` in this zone.
    pub fn format_local(&self, dt: DateTime<Utc>) -> String {
        const FORMAT: &str = "%Y-%m-%d %H:%M";
        match self {
            SiteZone::System => dt.with_timezone(&Local).format(FORMAT).to_string(),
            SiteZone::Named(tz) => dt.with_timezone(tz).format(FORMAT).to_string(),
        }
    }

    /// ISO-8601 timestamp for `generated_at` fields.
    pub fn format_iso(&self, dt: DateTime<Utc>) -> String {
        match self {
            SiteZone::System => dt.with_timezone(&Local).to_rfc3339_opts(SecondsFormat::Secs, false),
            SiteZone::Named(tz) => dt.with_timezone(tz).to_rfc3339_opts(SecondsFormat::Secs, false),
        }
    }

    /// `YYYY-MM-DD HH:MM:SS`, shown in page footers.
    pub fn format_display(&self, dt: DateTime<Utc>) -> String {
        const FORMAT: &str = "%Y-%m-%d %H:%M:%S";
        match self {
            SiteZone::System => dt.with_timezone(&Local).format(FORMAT).to_string(),
            SiteZone::Named(tz) => dt.with_timezone(tz).format(FORMAT).to_string(),
        }
    }
}
