//! File exports of a normalized game list: JSON, CSV and XLSX.

pub mod document;
pub mod table;
pub mod workbook;

pub use document::{load_json, save_json, ExportDocument, ExportInfo};
pub use table::{save_csv, GameRow};
pub use workbook::{build_workbook, save_workbook};
