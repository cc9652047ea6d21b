use crate::{
    data::{Cell, Value},
    dataset::{Dataset, DatasetError},
};

/// Mean plus the counts behind it, for one column of one dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnAggregate {
    pub mean: f64,
    pub valid: usize,
    pub total: usize,
}

impl ColumnAggregate {
    pub fn invalid(&self) -> usize {
        self.total - self.valid
    }
}

/// Arithmetic mean over the valid (present, numeric) cells of a column.
/// A column with no valid values aggregates to 0 so downstream radial
/// values are always plottable.
pub fn aggregate_cells(cells: &[Cell]) -> ColumnAggregate {
    let mut sum = 0.0f64;
    let mut valid = 0usize;
    for cell in cells {
        if let Some(Value::Number(n)) = cell {
            sum += *n;
            valid += 1;
        }
    }
    let mean = if valid > 0 { sum / valid as f64 } else { 0.0 };
    ColumnAggregate {
        mean,
        valid,
        total: cells.len(),
    }
}

/// Aggregates a named column; the lookup miss is a typed error so callers
/// decide whether an absent column is fatal.
pub fn aggregate_column(dataset: &Dataset, column: &str) -> Result<ColumnAggregate, DatasetError> {
    Ok(aggregate_cells(&dataset.column(column)?.cells))
}
