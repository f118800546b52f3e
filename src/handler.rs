use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::config::Config;
use crate::error::PipelineError;
use crate::gateway::FixtureGateway;
use crate::grouping::{group_by_competition, group_by_date};
use crate::model::NormalizedFixture;
use crate::normalizer::normalize;
use crate::serialize::write_api;
use crate::site::{PageContext, write_site};

/// Summary of one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
    pub fixtures: usize,
    pub competitions: usize,
    pub dates: usize,
    pub files: Vec<PathBuf>,
}

/// Run the whole pipeline once: allow-list, query, normalization, both
/// groupings, then the JSON API and the static pages.
#[instrument(skip(config), fields(days_ahead = config.days_ahead, output = %config.output_dir.display()))]
pub async fn handler(config: Config, now: DateTime<Utc>) -> Result<Response, PipelineError> {
    let zone = config.zone()?;
    let source = config.allow_list_source();
    let candidates = config.database_candidates();
    let days_ahead = config.days_ahead;
    let today = now.date_naive();

    // SQLite and file I/O block; run them on the blocking pool.
    let fixtures = tokio::task::spawn_blocking(move || -> Result<Vec<NormalizedFixture>, PipelineError> {
        let allow_list = source.load();
        let gateway = FixtureGateway::locate(&candidates)?;
        let rows = gateway.fetch_window(today, days_ahead)?;
        Ok(normalize(&rows, &allow_list, &zone))
    })
    .await??;
    let fixtures = Arc::new(fixtures);

    // The groupings only read the shared fixtures, so they can run side by side.
    let by_competition = {
        let fixtures = Arc::clone(&fixtures);
        tokio::task::spawn_blocking(move || group_by_competition(&fixtures))
    };
    let by_date = {
        let fixtures = Arc::clone(&fixtures);
        tokio::task::spawn_blocking(move || group_by_date(&fixtures))
    };
    let (competitions, dates) = tokio::try_join!(by_competition, by_date)?;
    info!(competitions = competitions.len(), dates = dates.len(), "Grouped fixtures");

    let output_dir = config.output_dir.clone();
    let generated_iso = zone.format_iso(now);
    let generated_display = zone.format_display(now);
    let written = tokio::task::spawn_blocking(move || -> Result<Response, PipelineError> {
        let api = write_api(&output_dir, &fixtures, &competitions, &dates, &generated_iso)?;
        let ctx = PageContext {
            generated_at: &generated_display,
            days_ahead,
        };
        let site = write_site(&output_dir, &fixtures, &competitions, &dates, &ctx)?;

        let mut files: Vec<PathBuf> = api.all().iter().map(|p| p.to_path_buf()).collect();
        files.push(site.index);
        files.extend(site.league_pages.into_iter().map(|(_, path)| path));
        files.push(site.css);
        files.push(site.js);

        let message = format!(
            "Generated {} fixtures across {} competitions and {} dates into {} ({} files).",
            fixtures.len(),
            competitions.len(),
            dates.len(),
            output_dir.display(),
            files.len(),
        );
        Ok(Response {
            message,
            fixtures: fixtures.len(),
            competitions: competitions.len(),
            dates: dates.len(),
            files,
        })
    });
    let response = written.await??;

    info!(message = %response.message, "Site generated");
    Ok(response)
}
