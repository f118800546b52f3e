use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::PipelineError;
use crate::model::{CompetitionGroups, DateGroups, NormalizedFixture};

/// Fixtures as a JSON array. `raw_data` holding JSON text becomes a nested
/// value; any other text is kept as a string.
pub fn to_json_safe(fixtures: &[NormalizedFixture]) -> Result<serde_json::Value, PipelineError> {
    serde_json::to_value(fixtures).map_err(|source| PipelineError::Serialize {
        what: "fixtures",
        source,
    })
}

/// `{status, count, generated_at, data}` wrapper shared by the API documents.
#[derive(Debug, Serialize)]
pub struct Envelope<'a, T: Serialize> {
    pub status: &'static str,
    pub count: usize,
    pub generated_at: &'a str,
    pub data: &'a T,
}

impl<'a, T: Serialize> Envelope<'a, T> {
    pub fn success(count: usize, generated_at: &'a str, data: &'a T) -> Self {
        Envelope {
            status: "success",
            count,
            generated_at,
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompetitionCount {
    pub id: i64,
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub status: &'static str,
    pub generated_at: String,
    pub total_fixtures: usize,
    pub total_leagues: usize,
    pub total_dates: usize,
    pub leagues: Vec<CompetitionCount>,
}

impl Stats {
    pub fn new(
        fixtures: &[NormalizedFixture],
        competitions: &CompetitionGroups,
        dates: &DateGroups,
        generated_at: &str,
    ) -> Self {
        Stats {
            status: "success",
            generated_at: generated_at.to_string(),
            total_fixtures: fixtures.len(),
            total_leagues: competitions.len(),
            total_dates: dates.len(),
            leagues: competitions
                .iter()
                .map(|g| CompetitionCount {
                    id: g.id,
                    name: g.name.clone(),
                    count: g.fixtures.len(),
                })
                .collect(),
        }
    }
}

/// Write `value` as UTF-8 JSON, two-space indented, non-ASCII kept literal.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PipelineError::write(parent, e))?;
    }
    let file = File::create(path).map_err(|e| PipelineError::write(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|e| {
        if e.is_io() {
            PipelineError::write(path, e.into())
        } else {
            PipelineError::Serialize { what: "document", source: e }
        }
    })?;
    writer.flush().map_err(|e| PipelineError::write(path, e))?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFiles {
    pub fixtures: PathBuf,
    pub leagues: PathBuf,
    pub dates: PathBuf,
    pub stats: PathBuf,
}

impl ApiFiles {
    pub fn all(&self) -> [&Path; 4] {
        [&self.fixtures, &self.leagues, &self.dates, &self.stats]
    }
}

/// Write `api/fixtures.json`, `api/leagues.json`, `api/dates.json` and
/// `api/stats.json` under `output_dir`. Stops at the first failure; files
/// already written stay on disk.
pub fn write_api(
    output_dir: &Path,
    fixtures: &[NormalizedFixture],
    competitions: &CompetitionGroups,
    dates: &DateGroups,
    generated_at: &str,
) -> Result<ApiFiles, PipelineError> {
    let api_dir = output_dir.join("api");
    let files = ApiFiles {
        fixtures: api_dir.join("fixtures.json"),
        leagues: api_dir.join("leagues.json"),
        dates: api_dir.join("dates.json"),
        stats: api_dir.join("stats.json"),
    };

    let data = to_json_safe(fixtures)?;
    write_json(&files.fixtures, &Envelope::success(fixtures.len(), generated_at, &data))?;
    write_json(&files.leagues, &Envelope::success(competitions.len(), generated_at, competitions))?;
    write_json(&files.dates, &Envelope::success(dates.len(), generated_at, dates))?;
    write_json(&files.stats, &Stats::new(fixtures, competitions, dates, generated_at))?;

    info!(dir = %api_dir.display(), "Wrote JSON API");
    Ok(files)
}
