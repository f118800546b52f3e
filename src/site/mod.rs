//! Static HTML pages and assets built from the grouped fixtures.

pub mod assets;

use std::collections::HashSet;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::error::PipelineError;
use crate::model::{CompetitionGroup, CompetitionGroups, DateGroups, FixtureStatus, NormalizedFixture};

pub const SITE_TITLE: &str = "足球賽事數據中心";
pub const SITE_SUBTITLE: &str = "實時更新的足球賽事信息（繁體中文）";
const TO_BE_DECIDED: &str = "待定";

const LEAGUE_ICONS: [(&str, &str); 10] = [
    ("英超", "premier-league"),
    ("西甲", "la-liga"),
    ("德甲", "bundesliga"),
    ("意甲", "serie-a"),
    ("法甲", "ligue-1"),
    ("歐冠", "champions-league"),
    ("歐霸", "europa-league"),
    ("歐協", "europa-conference"),
    ("亞冠", "afc-champions"),
    ("中超", "csl"),
];

/// Values shared by every page of one build.
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    pub generated_at: &'a str,
    pub days_ahead: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteFiles {
    pub index: PathBuf,
    pub league_pages: Vec<(i64, PathBuf)>,
    pub css: PathBuf,
    pub js: PathBuf,
}

impl SiteFiles {
    pub fn count(&self) -> usize {
        3 + self.league_pages.len()
    }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// `2024-03-01` becomes `03月01日`. Other text is returned as is.
pub fn format_date(date: &str) -> String {
    if date.is_empty() {
        return TO_BE_DECIDED.to_string();
    }
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%m月%d日").to_string(),
        Err(_) => date.to_string(),
    }
}

pub fn format_time(time: &str) -> String {
    if time.is_empty() {
        TO_BE_DECIDED.to_string()
    } else {
        time.to_string()
    }
}

/// CSS class for a competition badge, matched on well-known name fragments.
pub fn league_icon(league_name: &str) -> &'static str {
    LEAGUE_ICONS
        .iter()
        .find(|(fragment, _)| league_name.contains(fragment))
        .map(|(_, icon)| *icon)
        .unwrap_or("default-league")
}

/// File stem for a competition page: alphanumerics, space, `-` and `_` are
/// kept, then space and `-` become `_`.
pub fn safe_file_name(name: &str, competition_id: i64) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let stem = kept.trim().replace([' ', '-'], "_");
    if stem.is_empty() {
        format!("league_{competition_id}")
    } else {
        stem
    }
}

fn page_head(out: &mut String, title: &str, asset_prefix: &str) {
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"zh-Hant\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<link rel=\"stylesheet\" href=\"{asset_prefix}css/style.css\">\n</head>\n<body>\n",
        title = escape_html(title),
    );
}

fn page_foot(out: &mut String, ctx: &PageContext<'_>, asset_prefix: &str) {
    let _ = write!(
        out,
        "<footer><div class=\"container\"><p>生成時間: {}</p><p>{}</p></div></footer>\n\
         <script src=\"{asset_prefix}js/main.js\"></script>\n</body>\n</html>\n",
        escape_html(ctx.generated_at),
        SITE_TITLE,
    );
}

fn fixture_card(out: &mut String, f: &NormalizedFixture) {
    let date = f.event_date_formatted().unwrap_or("");
    let time = f.event_time_formatted().unwrap_or("");
    let live = f
        .row
        .status_short
        .as_deref()
        .and_then(FixtureStatus::from_code)
        .is_some_and(|s| s.is_live());
    let status = if live { "live" } else { "upcoming" };

    let _ = write!(
        out,
        "<div class=\"fixture-card {status}\" data-fixture-id=\"{id}\" data-date=\"{date}\" data-time=\"{time}\" \
         data-status=\"{status}\" data-league-id=\"{league_id}\" data-league=\"{league}\" \
         data-home-team=\"{home}\" data-away-team=\"{away}\">\n\
         <div class=\"fixture-header\"><span class=\"league-badge {icon}\">{league}</span>\
         <span class=\"fixture-time\">{date_label} {time_label}</span></div>\n\
         <div class=\"fixture-teams\">\
         <div class=\"team\"><div class=\"team-name\">{home}</div><div class=\"team-country\">{home_country}</div></div>\
         <div class=\"vs\">VS</div>\
         <div class=\"team\"><div class=\"team-name\">{away}</div><div class=\"team-country\">{away_country}</div></div>\
         </div>\n",
        id = f.row.id,
        date = escape_html(date),
        time = escape_html(time),
        league_id = f.competition_id,
        league = escape_html(&f.league_display_name),
        home = escape_html(&f.home_team_display_name),
        away = escape_html(&f.away_team_display_name),
        icon = league_icon(&f.league_display_name),
        date_label = escape_html(&format_date(date)),
        time_label = escape_html(&format_time(time)),
        home_country = escape_html(f.row.home_team_country.as_deref().unwrap_or("")),
        away_country = escape_html(f.row.away_team_country.as_deref().unwrap_or("")),
    );

    out.push_str("<div class=\"fixture-details\">");
    let details = [
        ("場地", f.row.venue_name.as_deref()),
        ("城市", f.row.venue_city.as_deref()),
        ("輪次", f.row.round.as_deref()),
        ("裁判", f.row.referee.as_deref()),
    ];
    for (label, value) in details {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            let _ = write!(out, "<div class=\"detail-item\">{label}: {}</div>", escape_html(value));
        }
    }
    out.push_str("</div>\n</div>\n");
}

/// Render `index.html`: totals, navigation, and every fixture grouped by date.
pub fn render_index(
    fixtures: &[NormalizedFixture],
    competitions: &CompetitionGroups,
    dates: &DateGroups,
    league_pages: &[(i64, String)],
    ctx: &PageContext<'_>,
) -> String {
    let mut out = String::with_capacity(4096 + fixtures.len() * 1024);
    page_head(&mut out, SITE_TITLE, "");

    let _ = write!(
        out,
        "<header><div class=\"container\"><h1>{SITE_TITLE}</h1><p class=\"subtitle\">{SITE_SUBTITLE}</p></div></header>\n\
         <main class=\"container\">\n<div class=\"stats-container\">\
         <div class=\"stat-card\"><h3>{}</h3><p>場賽事</p></div>\
         <div class=\"stat-card\"><h3>{}</h3><p>個聯賽</p></div>\
         <div class=\"stat-card\"><h3>{}</h3><p>未來天數</p></div></div>\n",
        fixtures.len(),
        competitions.len(),
        ctx.days_ahead,
    );

    out.push_str(
        "<div class=\"filters\"><input id=\"search-input\" type=\"search\" placeholder=\"搜尋球隊或聯賽\">\
         <button class=\"filter-btn active\" data-filter=\"all\">全部</button>\
         <button class=\"filter-btn\" data-filter=\"today\">今天</button>\
         <button class=\"filter-btn\" data-filter=\"tomorrow\">明天</button>\
         <button class=\"filter-btn\" data-filter=\"live\">進行中</button></div>\n",
    );

    out.push_str("<nav class=\"date-nav\"><ul class=\"date-list\">");
    for (date, day) in dates.iter() {
        let _ = write!(
            out,
            "<li class=\"date-item\" data-date=\"{}\">{} ({})</li>",
            escape_html(date),
            escape_html(&format_date(date)),
            day.len(),
        );
    }
    out.push_str("</ul></nav>\n");

    out.push_str("<nav class=\"league-nav\"><ul class=\"league-list\">");
    for group in competitions.iter() {
        let href = league_pages
            .iter()
            .find(|(id, _)| *id == group.id)
            .map(|(_, stem)| format!("leagues/{stem}.html"))
            .unwrap_or_default();
        let _ = write!(
            out,
            "<li class=\"league-item\" data-league-id=\"{}\"><a href=\"{}\">{} ({})</a></li>",
            group.id,
            escape_html(&href),
            escape_html(&group.name),
            group.fixtures.len(),
        );
    }
    out.push_str("</ul></nav>\n");

    for (date, day) in dates.iter() {
        let _ = write!(
            out,
            "<section class=\"date-section\" data-date=\"{}\"><h2>{}</h2>\n<div class=\"fixtures-container\">\n",
            escape_html(date),
            escape_html(&format_date(date)),
        );
        for f in day {
            fixture_card(&mut out, f);
        }
        out.push_str("</div>\n</section>\n");
    }

    out.push_str("</main>\n");
    page_foot(&mut out, ctx, "");
    out
}

/// Render one competition page, placed under `leagues/`.
pub fn render_league(group: &CompetitionGroup, ctx: &PageContext<'_>) -> String {
    let mut out = String::with_capacity(2048 + group.fixtures.len() * 1024);
    page_head(&mut out, &format!("{} - 賽事列表", group.name), "../");
    let _ = write!(
        out,
        "<header><div class=\"container\"><h1>{}</h1><p class=\"subtitle\">{} · {} 場賽事</p>\
         <p><a href=\"../index.html\">返回首頁</a></p></div></header>\n\
         <main class=\"container\">\n<div class=\"fixtures-container\">\n",
        escape_html(&group.name),
        escape_html(&group.country),
        group.fixtures.len(),
    );
    for f in &group.fixtures {
        fixture_card(&mut out, f);
    }
    out.push_str("</div>\n</main>\n");
    page_foot(&mut out, ctx, "../");
    out
}

/// Unique page stems per competition, in competition order.
pub fn league_page_names(competitions: &CompetitionGroups) -> Vec<(i64, String)> {
    let mut used: HashSet<String> = HashSet::new();
    competitions
        .iter()
        .map(|group| {
            let base = safe_file_name(&group.name, group.id);
            let mut stem = base.clone();
            let mut attempt = 1;
            while !used.insert(stem.clone()) {
                stem = match attempt {
                    1 => format!("{base}_{}", group.id),
                    n => format!("{base}_{}_{n}", group.id),
                };
                attempt += 1;
            }
            (group.id, stem)
        })
        .collect()
}

fn write_text(path: &Path, contents: &str) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PipelineError::write(parent, e))?;
    }
    std::fs::write(path, contents).map_err(|e| PipelineError::write(path, e))
}

/// Write the index, one page per competition, and the CSS/JS assets.
pub fn write_site(
    output_dir: &Path,
    fixtures: &[NormalizedFixture],
    competitions: &CompetitionGroups,
    dates: &DateGroups,
    ctx: &PageContext<'_>,
) -> Result<SiteFiles, PipelineError> {
    let names = league_page_names(competitions);

    let index = output_dir.join("index.html");
    write_text(&index, &render_index(fixtures, competitions, dates, &names, ctx))?;

    let leagues_dir = output_dir.join("leagues");
    let mut league_pages = Vec::with_capacity(names.len());
    for (group, (id, stem)) in competitions.iter().zip(&names) {
        let path = leagues_dir.join(format!("{stem}.html"));
        write_text(&path, &render_league(group, ctx))?;
        league_pages.push((*id, path));
    }

    let css = output_dir.join("css").join("style.css");
    write_text(&css, assets::STYLE_CSS)?;
    let js = output_dir.join("js").join("main.js");
    write_text(&js, assets::MAIN_JS)?;

    info!(dir = %output_dir.display(), league_pages = league_pages.len(), "Wrote static pages");
    Ok(SiteFiles {
        index,
        league_pages,
        css,
        js,
    })
}
