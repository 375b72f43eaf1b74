//! In-memory substring index over contact names
//!
//! Every contiguous substring of every contact's normalized name maps to the set
//! of contact IDs whose name contains it. Building costs O(L²) keys per name of
//! length L, which keeps "contains" search a single map lookup.

pub mod substring;

pub use substring::{SubstringIndex, normalize};
