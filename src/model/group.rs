use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::model::fixture::NormalizedFixture;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitionGroup {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub fixtures: Vec<NormalizedFixture>,
}

/// Competitions ordered by display name. Serializes as a JSON object keyed by
/// competition id, in that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompetitionGroups(pub Vec<CompetitionGroup>);

impl CompetitionGroups {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompetitionGroup> {
        self.0.iter()
    }

    pub fn get(&self, id: i64) -> Option<&CompetitionGroup> {
        self.0.iter().find(|g| g.id == id)
    }

    pub fn total_fixtures(&self) -> usize {
        self.0.iter().map(|g| g.fixtures.len()).sum()
    }
}

impl Serialize for CompetitionGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for group in &self.0 {
            map.serialize_entry(&group.id, group)?;
        }
        map.end()
    }
}

/// Fixtures keyed by `YYYY-MM-DD`; string order is chronological.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DateGroups(pub BTreeMap<String, Vec<NormalizedFixture>>);

impl DateGroups {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::collections::btree_map::Iter<'_, String, Vec<NormalizedFixture>> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn get(&self, date: &str) -> Option<&Vec<NormalizedFixture>> {
        self.0.get(date)
    }

    pub fn total_fixtures(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}
