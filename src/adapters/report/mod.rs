//! Report rendering.

pub mod csv_sheet;

pub use csv_sheet::grade_sheet_csv;
