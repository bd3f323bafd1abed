//! Domain Entities
//!
//! - `Catalogue` - every known application (the persisted state)
//! - `Application` - one mobile app and its versions
//! - `VersionRecord` - one observed release
//! - `DeploymentEvent` - a marker ready for submission

mod application;
mod catalogue;
mod deployment;
mod version_record;

pub use application::Application;
pub use catalogue::Catalogue;
pub use deployment::{DeploymentEvent, DeploymentType};
pub use version_record::VersionRecord;
