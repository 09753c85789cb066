//! Presentation
//!
//! Renders pricing and payoff results as:
//! - CSV files (overwritten on every run)
//! - ASCII bar charts
//! - Plain text tables
//! - An SVG payoff diagram

pub mod ascii;
pub mod csv_export;
pub mod plot;
pub mod table;

pub use ascii::*;
pub use csv_export::*;
pub use plot::*;
pub use table::*;
