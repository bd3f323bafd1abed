//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the use case with infrastructure dependencies
//! - Output formatting (JSON summary)
//!
//! ## Structure
//!
//! - `cli` - Flags and their mapping onto the configuration layer
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output rendering

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::Cli;
pub use factory::create_mark_use_case;
pub use output::{render_report, OutputFormat};
