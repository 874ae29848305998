use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::amortization::AmortizationResult;
use crate::decimal::MINOR_UNIT_DP;
use crate::errors::{LoanError, Result};

pub const CSV_HEADERS: [&str; 6] = [
    "Month",
    "EMI Paid",
    "Principal Paid",
    "Interest Paid",
    "Remaining Principal",
    "Total Interest",
];

pub const DEFAULT_CSV_FILE_NAME: &str = "amortization_schedule.csv";

/// write the schedule as csv, one row per month with plain minor-unit numbers
pub fn write_csv<W: Write>(result: &AmortizationResult, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(CSV_HEADERS)?;
    for record in &result.schedule {
        wtr.write_record([
            record.month.to_string(),
            record.emi_paid.to_fixed(MINOR_UNIT_DP),
            record.principal_paid.to_fixed(MINOR_UNIT_DP),
            record.interest_paid.to_fixed(MINOR_UNIT_DP),
            record.remaining_principal.to_fixed(MINOR_UNIT_DP),
            record.cumulative_interest.to_fixed(MINOR_UNIT_DP),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn to_csv_string(result: &AmortizationResult) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(result, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| LoanError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

pub fn write_csv_file(result: &AmortizationResult, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_csv(result, file)?;
    log::info!("wrote {} rows to {}", result.schedule.len(), path.as_ref().display());
    Ok(())
}
