use std::collections::{BTreeMap, HashMap};

use crate::model::{CompetitionGroup, CompetitionGroups, DateGroups, NormalizedFixture};

pub const UNKNOWN_DATE: &str = "未知日期";

/// Group fixtures by competition id. The first fixture seen for a competition
/// supplies the group's name and country; groups are ordered by name.
pub fn group_by_competition(fixtures: &[NormalizedFixture]) -> CompetitionGroups {
    let mut groups: Vec<CompetitionGroup> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();

    for fixture in fixtures {
        let slot = *index.entry(fixture.competition_id).or_insert_with(|| {
            groups.push(CompetitionGroup {
                id: fixture.competition_id,
                name: fixture.league_display_name.clone(),
                country: fixture.league_country().to_string(),
                fixtures: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].fixtures.push(fixture.clone());
    }

    // Stable, so equal names keep first-seen order.
    groups.sort_by(|a, b| a.name.cmp(&b.name));
    CompetitionGroups(groups)
}

/// Group fixtures by `event_date_formatted`, falling back to `未知日期` for
/// fixtures without one. Keys iterate in ascending string order.
pub fn group_by_date(fixtures: &[NormalizedFixture]) -> DateGroups {
    let mut dates: BTreeMap<String, Vec<NormalizedFixture>> = BTreeMap::new();
    for fixture in fixtures {
        let key = fixture.event_date_formatted().unwrap_or(UNKNOWN_DATE);
        dates.entry(key.to_string()).or_default().push(fixture.clone());
    }
    DateGroups(dates)
}
