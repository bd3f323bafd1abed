//! Domain Layer
//!
//! The core of the tool: what an application and a version are, how new
//! versions are found, and what a deployment marker looks like.
//!
//! ## Structure
//!
//! - `entities/` - Catalogue, Application, VersionRecord, DeploymentEvent
//! - `value_objects/` - EntityGuid, EpochMillis, SinceClause, CustomAttributes, Region
//! - `services/` - Discovery, Differ, MarkerBuilder
//! - `ports/` - Interfaces implemented by the infrastructure layer
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - backends and files are reached only through ports
//! 2. **Deterministic** - all maps are ordered, so runs log and save in a stable order

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
