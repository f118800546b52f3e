use std::collections::{BTreeMap, HashMap, HashSet};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::error::AllowListError;

/// Competition ids used when no league map can be loaded.
pub const BUILTIN_COMPETITION_IDS: RangeInclusive<i64> = 39..=500;

/// Where the in-scope competitions come from. Chosen once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowListSource {
    /// JSON object mapping competition id to its localized display name.
    ExternalSource(PathBuf),
    BuiltinTable,
}

/// The set of competitions in scope for a run, with optional localized names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    ids: HashSet<i64>,
    names: Option<HashMap<i64, String>>,
}

impl AllowListSource {
    pub fn select(league_map: Option<PathBuf>) -> Self {
        match league_map {
            Some(path) => AllowListSource::ExternalSource(path),
            None => AllowListSource::BuiltinTable,
        }
    }

    /// Load the allow-list. Any problem with the external map is logged and
    /// replaced by the builtin table, so this never fails.
    #[instrument(level = "info")]
    pub fn load(&self) -> AllowList {
        let list = match self {
            AllowListSource::ExternalSource(path) => match AllowList::from_file(path) {
                Ok(list) => {
                    info!(path = %path.display(), count = list.len(), "Loaded league map");
                    list
                }
                Err(e) => {
                    warn!(error = %e, "Cannot use league map; falling back to builtin competition ids");
                    AllowList::builtin()
                }
            },
            AllowListSource::BuiltinTable => AllowList::builtin(),
        };
        info!(count = list.len(), named = list.has_names(), "Competition allow-list ready");
        list
    }
}

impl AllowList {
    pub fn builtin() -> Self {
        AllowList {
            ids: BUILTIN_COMPETITION_IDS.collect(),
            names: None,
        }
    }

    pub fn from_ids(ids: impl IntoIterator<Item = i64>) -> Self {
        AllowList {
            ids: ids.into_iter().collect(),
            names: None,
        }
    }

    pub fn from_names(names: HashMap<i64, String>) -> Self {
        AllowList {
            ids: names.keys().copied().collect(),
            names: Some(names),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, AllowListError> {
        let body = std::fs::read_to_string(path).map_err(|source| AllowListError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&body, path)
    }

    /// Parse a league map such as `{"39": "英超", "140": "西甲"}`.
    pub fn from_json(body: &str, origin: &Path) -> Result<Self, AllowListError> {
        let raw: BTreeMap<String, String> =
            serde_json::from_str(body).map_err(|source| AllowListError::Malformed {
                path: origin.to_path_buf(),
                source,
            })?;
        if raw.is_empty() {
            return Err(AllowListError::Empty(origin.to_path_buf()));
        }

        let mut names = HashMap::with_capacity(raw.len());
        for (key, name) in raw {
            let id = key
                .trim()
                .parse::<i64>()
                .map_err(|_| AllowListError::InvalidId(key.clone()))?;
            names.insert(id, name);
        }
        Ok(Self::from_names(names))
    }

    pub fn contains(&self, competition_id: i64) -> bool {
        self.ids.contains(&competition_id)
    }

    /// Localized display name from the league map, if one was loaded.
    pub fn display_name(&self, competition_id: i64) -> Option<&str> {
        self.names
            .as_ref()
            .and_then(|names| names.get(&competition_id))
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    pub fn has_names(&self) -> bool {
        self.names.is_some()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
