//! Core library components.
//!
//! This module contains the reusable transform logic: the marker grammar,
//! the line classifier, the two inverse transforms, the input loaders, and
//! the atomic writer.

pub mod classify;
pub mod config;
pub mod keymat;
pub mod markers;
pub mod redact;
pub mod restore;
pub mod secrets;
pub mod types;
pub mod writer;
