//! Advent puzzle solutions with automatic registration
//!
//! This crate contains actual puzzle solutions organized by year.
//! Each solution uses the `AutoRegisterPuzzle` derive macro for automatic
//! plugin registration with the harness.

pub mod years;
