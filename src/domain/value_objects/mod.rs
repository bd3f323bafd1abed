//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod custom_attributes;
mod entity_guid;
mod epoch_millis;
mod region;
mod since_clause;

pub use custom_attributes::{CustomAttributes, CustomAttributesError};
pub use entity_guid::EntityGuid;
pub use epoch_millis::{EpochMillis, NormalizedTimestamp};
pub use region::Region;
pub use since_clause::{EmptySinceClause, SinceClause};
