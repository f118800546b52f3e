pub mod allow_list;
pub mod config;
pub mod error;
pub mod gateway;
pub mod grouping;
pub mod handler;
pub mod model;
pub mod normalizer;
pub mod serialize;
pub mod site;

pub use allow_list::{AllowList, AllowListSource};
pub use config::{Config, SiteZone};
pub use error::PipelineError;
