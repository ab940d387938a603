//! Maze generation and analysis on a fixed rectangular grid.
//!
//! Five randomized generators carve spanning trees over the grid's cells; the
//! analysis routines answer traversal, cycle and path queries over the result,
//! and the editor changes single edges without ever closing a cycle.

pub mod analysis;
pub mod config;
pub mod editor;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod rng;
