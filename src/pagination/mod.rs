//! Pagination module
//!
//! Turns a paginated upstream resource into a single lazy sequence of records.
//!
//! # Overview
//!
//! A [`PagedCollection`] resolves the total count, then requests pages one by
//! one as the consumer advances. Each iteration pass re-resolves the count;
//! a standalone [`PagedCollection::count`] call is cached on the instance.

mod collection;
mod types;

pub use collection::PagedCollection;
pub use types::PassState;
