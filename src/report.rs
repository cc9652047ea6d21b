//! Conversion reporting: coerce the selected columns and summarize how
//! each dataset survived, per column and as a wide table of means.

use anyhow::Result;
use itertools::Itertools;
use log::{info, warn};

use crate::{aggregate, align, cli, cli::ReportArgs, coerce, loader, table};

pub fn execute(args: &ReportArgs) -> Result<()> {
    let datasets = loader::load_all(&args.inputs, args.delimiter, args.input_encoding.as_deref())?;
    let selected = cli::split_columns(&args.columns);
    let columns = if selected.is_empty() {
        align::common_columns(&datasets)
    } else {
        selected
    };
    if columns.is_empty() {
        info!(
            "No columns are shared by all {} dataset(s); nothing to report",
            datasets.len()
        );
        return Ok(());
    }

    let mut detail_rows = Vec::new();
    let mut mean_rows = Vec::with_capacity(datasets.len());
    for dataset in &datasets {
        let (coerced, warnings) = coerce::coerce_columns(dataset, &columns);
        for warning in &warnings {
            warn!("{warning}");
        }
        let mut means = vec![coerced.name().to_string()];
        for column in &columns {
            match aggregate::aggregate_column(&coerced, column) {
                Ok(aggregate) => {
                    detail_rows.push(vec![
                        coerced.name().to_string(),
                        column.clone(),
                        aggregate.valid.to_string(),
                        aggregate.total.to_string(),
                        format_mean(aggregate.mean),
                    ]);
                    means.push(format_mean(aggregate.mean));
                }
                Err(_) => means.push(String::new()),
            }
        }
        mean_rows.push(means);
    }

    let detail_headers = ["dataset", "column", "valid", "total", "mean"]
        .iter()
        .map(|h| h.to_string())
        .collect::<Vec<_>>();
    table::print_table(&detail_headers, &detail_rows);

    println!();
    let mean_headers = std::iter::once("dataset".to_string())
        .chain(columns.iter().map(|c| format!("{c}_mean")))
        .collect_vec();
    table::print_table(&mean_headers, &mean_rows);

    info!(
        "Reported {} column(s) across {} dataset(s)",
        columns.len(),
        datasets.len()
    );
    Ok(())
}

fn format_mean(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
