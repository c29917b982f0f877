// ============================================================
// CSV DOMAIN LAYER
// ============================================================
// Value objects for parsed tabular input
// No I/O, no async

mod csv_row;

pub use csv_row::{CsvField, CsvRow, CsvTable};
