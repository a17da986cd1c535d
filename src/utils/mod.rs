//! Utility functions for time arithmetic and request parsing.
//!
//! This module provides helper functions used across the application:
//!
//! - [`time_grid`] - Time ranges, overlap checks, and slot partitioning
//! - [`datefmt`] - Date and time parsing for API inputs

pub mod datefmt;
pub mod time_grid;
