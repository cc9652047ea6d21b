//! Loads delimited text files into in-memory datasets.
//!
//! The file name becomes the dataset name and the first row supplies the
//! column names. Loading many files is per-file fault tolerant: a file
//! that cannot be read is reported and excluded, and the remaining files
//! still load.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use encoding_rs::Encoding;
use log::{debug, error};

use crate::{
    data::{self, Cell},
    dataset::{Column, Dataset},
    io_utils,
};

/// Reads one delimited file into a `Dataset`.
pub fn load_dataset(
    path: &Path,
    delimiter: Option<u8>,
    encoding: &'static Encoding,
) -> Result<Dataset> {
    let delimiter = io_utils::resolve_input_delimiter(path, delimiter);
    let mut reader = io_utils::open_csv_reader_from_path(path, delimiter, true)?;
    let headers = io_utils::reader_headers(&mut reader, encoding)
        .with_context(|| format!("Reading headers from {path:?}"))?;

    let mut cells: Vec<Vec<Cell>> = vec![Vec::new(); headers.len()];
    for (row_idx, record) in reader.byte_records().enumerate() {
        let record = record.with_context(|| format!("Reading row {} in {path:?}", row_idx + 2))?;
        let decoded = io_utils::decode_record(&record, encoding)?;
        for (idx, raw) in decoded.iter().enumerate().take(headers.len()) {
            cells[idx].push(data::parse_cell(raw));
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, cells)| Column { name, cells })
        .collect();
    let dataset = Dataset::new(dataset_name(path), columns)
        .with_context(|| format!("Assembling dataset from {path:?}"))?;
    debug!(
        "Loaded '{}' ({} row(s) x {} column(s))",
        dataset.name(),
        dataset.row_count(),
        dataset.column_count()
    );
    Ok(dataset)
}

/// Loads every input, keeping file order. A file that fails to load is
/// logged and skipped so one bad source never aborts the rest of the run.
pub fn load_all(
    paths: &[PathBuf],
    delimiter: Option<u8>,
    encoding_label: Option<&str>,
) -> Result<Vec<Dataset>> {
    let encoding = io_utils::resolve_encoding(encoding_label)?;
    let mut datasets: Vec<Dataset> = Vec::with_capacity(paths.len());
    for path in paths {
        match load_dataset(path, delimiter, encoding) {
            Ok(mut dataset) => {
                if datasets.iter().any(|d| d.name() == dataset.name()) {
                    // Same file name from two directories: fall back to the
                    // full path so series labels stay distinct.
                    dataset.set_name(path.display().to_string());
                }
                datasets.push(dataset);
            }
            Err(err) => error!("Skipping {path:?}: {err:#}"),
        }
    }
    Ok(datasets)
}

fn dataset_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
