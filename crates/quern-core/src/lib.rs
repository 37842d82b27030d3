//! Quern Core Library
//!
//! Similarity and retrieval engine for the quern note assistant: tokenizing
//! and shingling note text, detecting exact/alias title duplicates through a
//! rebuildable index, scoring near-duplicate content, and ranking notes by
//! keyword relevance.

pub mod config;
pub mod error;
pub mod format;
pub mod index;
pub mod logging;
pub mod note;
pub mod similarity;
pub mod store;
pub mod text;
