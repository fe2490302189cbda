pub mod subsample;

pub use subsample::{ScanReport, run_clear, run_draw, run_dump, run_scan};
