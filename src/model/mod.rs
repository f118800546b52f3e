pub mod fixture;
pub mod group;
pub mod payload;
pub mod status;

pub use fixture::{EventTiming, NormalizedFixture, RawFixtureRow, RawId};
pub use group::{CompetitionGroup, CompetitionGroups, DateGroups};
pub use payload::RawPayload;
pub use status::FixtureStatus;
