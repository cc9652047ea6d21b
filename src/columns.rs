//! Shared-column discovery across a set of inputs.

use anyhow::Result;
use log::info;

use crate::{align, cli::ColumnsArgs, loader, table};

pub fn execute(args: &ColumnsArgs) -> Result<()> {
    let datasets = loader::load_all(&args.inputs, args.delimiter, args.input_encoding.as_deref())?;
    let shared = align::common_columns(&datasets);
    if shared.is_empty() {
        info!(
            "No columns are shared by all {} dataset(s); check for overlapping header names",
            datasets.len()
        );
        return Ok(());
    }

    let rows: Vec<Vec<String>> = shared
        .iter()
        .enumerate()
        .map(|(idx, name)| vec![(idx + 1).to_string(), name.clone()])
        .collect();
    table::print_table(&["#".to_string(), "column".to_string()], &rows);
    info!(
        "{} column(s) shared across {} dataset(s)",
        shared.len(),
        datasets.len()
    );
    Ok(())
}
