//! CSV export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use svr_model::NormalizedDataset;

use crate::ensure_parent_dir;
use crate::error::{OutputError, Result};

/// Column names of the CSV output, in order.
pub const CSV_HEADER: [&str; 3] = ["dependent_label", "independent_label", "independent_value"];

/// Write the dataset's rows as CSV to any writer.
///
/// The header line is always written, so an empty dataset yields a
/// header-only file.
pub fn write_csv_to<W: Write>(writer: W, dataset: &NormalizedDataset) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(CSV_HEADER)?;
    for row in dataset.rows() {
        out.write_record([
            &row.dependent_label,
            &row.independent_label,
            &row.independent_value,
        ])?;
    }
    out.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write the dataset to a CSV file, creating parent directories.
pub fn write_csv(path: &Path, dataset: &NormalizedDataset) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|source| OutputError::File {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv_to(BufWriter::new(file), dataset)?;
    tracing::debug!(path = %path.display(), rows = dataset.row_count(), "wrote CSV");
    Ok(())
}
