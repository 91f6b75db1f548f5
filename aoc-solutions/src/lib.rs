//! Advent of Code puzzle solutions with automatic registration
//!
//! This crate contains actual puzzle solutions organized by year.
//! Each solution uses the `AutoRegisterSolver` derive macro, so linking the
//! crate is enough for `RegistryBuilder::register_all_plugins` to find it.

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
