//! Mark Module
//!
//! Orchestrates one discovery-and-marking run.
//!
//! ## Structure
//!
//! - `options` - Run settings (`MarkOptions`)
//! - `result` - Run summary (`MarkReport`)
//! - `use_case` - Core use case logic (`MarkDeploymentsUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use mobile_deploy_marker::application::mark::{MarkDeploymentsUseCase, MarkOptions};
//!
//! let use_case = MarkDeploymentsUseCase::new(queries, markers, repository, SystemClock);
//! let report = use_case.execute(&MarkOptions::from_config(&config))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::MarkOptions;
pub use result::{MarkFailure, MarkReport};
pub use use_case::MarkDeploymentsUseCase;
