//! Domain Services
//!
//! Business logic that operates on domain entities. Discovery talks to the
//! backend only through the `QueryGateway` port; the others are pure.

mod differ;
mod discovery;
mod marker_builder;

pub use differ::Differ;
pub use discovery::{
    apps_query, versions_query, DecodeError, DiscoveredVersions, Discovery, DiscoveryError,
};
pub use marker_builder::{
    MarkerBuilder, PreparedMarker, MARKER_DESCRIPTION, MARKER_GROUP_ID, MARKER_USER,
};
