//! Derived report artifacts, independent of the account file

pub mod csv;

pub use csv::{export_monthly_report, report_file_name, write_monthly_report, REPORT_HEADER};
