//! Report export

mod excel;
mod text;

pub use excel::export_to_excel;
pub use text::{default_report_file_name, read_text_report, write_text_report};
