//! Validation source strategies.
//!
//! Only the filesystem strategy exists (`fs` module) behind the concrete
//! `validate_tree()` API. A source trait may appear when a second strategy
//! demands it. Until then the design stays concrete to avoid speculative
//! abstraction.

pub mod fs;
