//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `MarkDeploymentsUseCase` - Orchestrates a run (load, discover, diff, mark, save)

pub mod mark;

pub use mark::{MarkDeploymentsUseCase, MarkFailure, MarkOptions, MarkReport};
