//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation
//! follows the "New Type" pattern: [`NewLink`] carries the fields callers
//! provide, [`Link`] is the persisted record.

pub mod link;

pub use link::{Link, NewLink};
