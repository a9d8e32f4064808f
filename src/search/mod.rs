//! Query-side search logic: text folding and substring matching

pub mod matcher;
pub mod normalize;

pub use matcher::{DEFAULT_RESULT_LIMIT, count_matches, search};
pub use normalize::{normalize, normalize_opt};
