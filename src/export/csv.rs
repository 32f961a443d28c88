//! Monthly CSV report
//!
//! Writes the expenses matching a month/year to a deterministically named
//! file, overwriting any existing file of the same name. The core writer is
//! generic over `io::Write` so it can be exercised in memory.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Datelike;

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{format_date, Expense};

/// The exact header line of every report
pub const REPORT_HEADER: &str = "Date,Category,Amount";

/// `monthly_report_<username>_<m>_<y>.csv`, no zero padding
pub fn report_file_name(username: &str, month: u32, year: i32) -> String {
    format!("monthly_report_{}_{}_{}.csv", username, month, year)
}

/// Write header plus one row per expense with a matching month and year,
/// preserving the original expense ordering. Returns the row count.
///
/// Category text is written raw; the account file format cannot represent
/// embedded commas either.
pub fn write_monthly_report<W: Write>(
    writer: &mut W,
    expenses: &[Expense],
    month: u32,
    year: i32,
) -> SpendlogResult<usize> {
    writeln!(writer, "{}", REPORT_HEADER)
        .map_err(|e| SpendlogError::Export(e.to_string()))?;

    let mut rows = 0;
    for expense in expenses {
        if expense.date.month() == month && expense.date.year() == year {
            writeln!(
                writer,
                "{},{},{}",
                format_date(expense.date),
                expense.category,
                expense.amount
            )
            .map_err(|e| SpendlogError::Export(e.to_string()))?;
            rows += 1;
        }
    }

    Ok(rows)
}

/// Write the report file into `out_dir` and return its path
pub fn export_monthly_report(
    out_dir: &Path,
    username: &str,
    expenses: &[Expense],
    month: u32,
    year: i32,
) -> SpendlogResult<PathBuf> {
    let path = out_dir.join(report_file_name(username, month, year));

    let file = File::create(&path).map_err(|e| {
        SpendlogError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    write_monthly_report(&mut writer, expenses, month, year)?;
    writer
        .flush()
        .map_err(|e| SpendlogError::Export(e.to_string()))?;

    Ok(path)
}
