use anyhow::Result;
use log::info;

use crate::{cli::PreviewArgs, io_utils, loader, table};

pub fn execute(args: &PreviewArgs) -> Result<()> {
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let dataset = loader::load_dataset(&args.input, args.delimiter, encoding)?;

    let headers: Vec<String> = dataset.column_names().map(str::to_string).collect();
    let shown = dataset.row_count().min(args.rows);
    let mut rows = Vec::with_capacity(shown);
    for row_idx in 0..shown {
        rows.push(
            dataset
                .columns()
                .iter()
                .map(|column| {
                    column.cells[row_idx]
                        .as_ref()
                        .map(|value| value.as_display())
                        .unwrap_or_default()
                })
                .collect(),
        );
    }

    table::print_table(&headers, &rows);
    info!(
        "Displayed {} of {} row(s) x {} column(s) from '{}'",
        shown,
        dataset.row_count(),
        dataset.column_count(),
        dataset.name()
    );
    Ok(())
}
