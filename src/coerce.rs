use std::fmt;

use crate::{
    data::{Cell, Value},
    dataset::{Column, Dataset},
};

/// Non-fatal outcome reported while coercing one target column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoercionWarning {
    MissingColumn { dataset: String, column: String },
    UnparsedCells {
        dataset: String,
        column: String,
        failed: usize,
    },
}

impl fmt::Display for CoercionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoercionWarning::MissingColumn { dataset, column } => write!(
                f,
                "Column '{column}' is not present in '{dataset}' and was left out"
            ),
            CoercionWarning::UnparsedCells {
                dataset,
                column,
                failed,
            } => write!(
                f,
                "{failed} cell(s) in '{column}' of '{dataset}' could not be read as numbers and became missing"
            ),
        }
    }
}

/// Returns a copy of `dataset` in which each target column's cells are
/// replaced by their numeric interpretation. Cells that cannot be read as
/// numbers become missing; a target column absent from the dataset is
/// reported and left out rather than fabricated. The source dataset is
/// untouched so the original upload stays inspectable.
pub fn coerce_columns(dataset: &Dataset, targets: &[String]) -> (Dataset, Vec<CoercionWarning>) {
    let mut warnings = Vec::new();
    let mut columns: Vec<Column> = dataset.columns().to_vec();

    for target in targets {
        let Some(idx) = dataset.column_index(target) else {
            warnings.push(CoercionWarning::MissingColumn {
                dataset: dataset.name().to_string(),
                column: target.clone(),
            });
            continue;
        };
        let (cells, failed) = coerce_cells(&columns[idx].cells);
        if failed > 0 {
            warnings.push(CoercionWarning::UnparsedCells {
                dataset: dataset.name().to_string(),
                column: target.clone(),
                failed,
            });
        }
        columns[idx].cells = cells;
    }

    let coerced = Dataset::new(dataset.name(), columns)
        .expect("coercion preserves column names and lengths");
    (coerced, warnings)
}

fn coerce_cells(cells: &[Cell]) -> (Vec<Cell>, usize) {
    let mut failed = 0usize;
    let converted = cells
        .iter()
        .map(|cell| match cell {
            Some(value) => match value.to_number() {
                Some(n) => Some(Value::Number(n)),
                None => {
                    failed += 1;
                    None
                }
            },
            None => None,
        })
        .collect();
    (converted, failed)
}
