//! Ingestion-boundary parsers for event records
//!
//! # Error Handling Strategy
//!
//! The backend has served events in several shapes over time (`id` vs `_id`,
//! `title` vs `name`, nested category objects, envelope objects around the
//! array). Everything is converted here into the single [`crate::models::Record`]
//! shape so later stages never see wire ambiguity.
//!
//! - **Missing text fields**: left empty; the record is still searchable by
//!   its other fields.
//! - **Missing id**: the record is skipped with a warning, since history and
//!   selection are keyed by id.
//! - **Unparsable body**: returned as an error to the data source, which
//!   reports it as a fetch failure.
//! - **Mojibake**: text that was mis-decoded upstream is repaired when the
//!   repair is unambiguous.

pub mod deserializers;
pub mod records;
pub mod text;

pub use records::{adapt_record, parse_records};
pub use text::repair_mojibake;
