use serde::{Deserialize, Serialize};

/// Short status codes of fixtures that have not reached a terminal state.
/// Finished (`FT`, `AET`, `PEN`), postponed (`PST`) and cancelled (`CANC`)
/// fixtures are never selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixtureStatus {
    #[serde(rename = "NS")]
    NotStarted,
    #[serde(rename = "1H")]
    FirstHalf,
    #[serde(rename = "HT")]
    HalfTime,
    #[serde(rename = "2H")]
    SecondHalf,
    #[serde(rename = "ET")]
    ExtraTime,
    #[serde(rename = "BT")]
    BreakTime,
    #[serde(rename = "P")]
    Penalties,
    #[serde(rename = "SUSP")]
    Suspended,
    #[serde(rename = "INT")]
    Interrupted,
    #[serde(rename = "ABD")]
    Abandoned,
    #[serde(rename = "AWD")]
    Awarded,
    #[serde(rename = "WO")]
    Walkover,
}

impl FixtureStatus {
    pub const UPCOMING: [FixtureStatus; 12] = [
        FixtureStatus::NotStarted,
        FixtureStatus::FirstHalf,
        FixtureStatus::HalfTime,
        FixtureStatus::SecondHalf,
        FixtureStatus::ExtraTime,
        FixtureStatus::BreakTime,
        FixtureStatus::Penalties,
        FixtureStatus::Suspended,
        FixtureStatus::Interrupted,
        FixtureStatus::Abandoned,
        FixtureStatus::Awarded,
        FixtureStatus::Walkover,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            FixtureStatus::NotStarted => "NS",
            FixtureStatus::FirstHalf => "1H",
            FixtureStatus::HalfTime => "HT",
            FixtureStatus::SecondHalf => "2H",
            FixtureStatus::ExtraTime => "ET",
            FixtureStatus::BreakTime => "BT",
            FixtureStatus::Penalties => "P",
            FixtureStatus::Suspended => "SUSP",
            FixtureStatus::Interrupted => "INT",
            FixtureStatus::Abandoned => "ABD",
            FixtureStatus::Awarded => "AWD",
            FixtureStatus::Walkover => "WO",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::UPCOMING.into_iter().find(|s| s.code() == code)
    }

    /// In-play statuses, used by the site to mark live cards.
    pub fn is_live(&self) -> bool {
        matches!(
            self,
            FixtureStatus::FirstHalf
                | FixtureStatus::HalfTime
                | FixtureStatus::SecondHalf
                | FixtureStatus::ExtraTime
                | FixtureStatus::BreakTime
                | FixtureStatus::Penalties
        )
    }
}
