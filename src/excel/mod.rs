//! Workbook I/O around the extraction core: calamine on the way in,
//! rust_xlsxwriter on the way out.

pub mod reader;
pub mod report;

pub use reader::read_statement;
pub use report::write_report;
