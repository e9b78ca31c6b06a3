//! Command-line front end for the share average calculator.
//!
//! The core library does all the arithmetic; this crate only collects
//! lots, triggers calculation, and prints the results and chart data.

pub mod cmd;
pub mod logging;
pub mod render;
