//! Core repository components
//!
//! This module contains the fundamental building blocks of a repository:
//!
//! - `database`: content-addressed object database for blobs and commits
//! - `index`: staging area mapping paths to content ids
//! - `repository`: high-level repository operations and coordination
//! - `workspace`: working directory file system operations

pub mod database;
pub mod index;
pub mod repository;
pub mod workspace;
