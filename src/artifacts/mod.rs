//! Repository data structures
//!
//! - `objects`: the storable object types (blob, commit) and their ids

pub mod objects;
