use std::collections::HashMap;

use thiserror::Error;

use crate::data::Cell;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DatasetError {
    #[error("column '{0}' not found")]
    ColumnNotFound(String),
    #[error("duplicate column name '{0}'")]
    DuplicateColumn(String),
    #[error("column '{name}' holds {actual} row(s) but the dataset holds {expected}")]
    RaggedColumn {
        name: String,
        expected: usize,
        actual: usize,
    },
}

/// A named, ordered sequence of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

/// One loaded tabular source: a display name plus columns in file order.
///
/// Lookups go through a name -> position map so a miss surfaces as
/// `DatasetError::ColumnNotFound` instead of an uncontrolled fault.
/// Datasets are not mutated after construction; coercion builds a new one.
#[derive(Debug, Clone)]
pub struct Dataset {
    name: String,
    columns: Vec<Column>,
    positions: HashMap<String, usize>,
}

impl Dataset {
    /// Builds a dataset, enforcing equal column lengths and unique names.
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Result<Self, DatasetError> {
        let expected = columns.first().map_or(0, |c| c.cells.len());
        let mut positions = HashMap::with_capacity(columns.len());
        for (idx, column) in columns.iter().enumerate() {
            if column.cells.len() != expected {
                return Err(DatasetError::RaggedColumn {
                    name: column.name.clone(),
                    expected,
                    actual: column.cells.len(),
                });
            }
            if positions.insert(column.name.clone(), idx).is_some() {
                return Err(DatasetError::DuplicateColumn(column.name.clone()));
            }
        }
        Ok(Self {
            name: name.into(),
            columns,
            positions,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    pub fn column(&self, name: &str) -> Result<&Column, DatasetError> {
        self.column_index(name)
            .map(|idx| &self.columns[idx])
            .ok_or_else(|| DatasetError::ColumnNotFound(name.to_string()))
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Value;

    fn column(name: &str, cells: Vec<Cell>) -> Column {
        Column {
            name: name.to_string(),
            cells,
        }
    }

    #[test]
    fn lookup_misses_are_typed() {
        let dataset = Dataset::new("d", vec![column("x", vec![Some(Value::Number(1.0))])])
            .expect("dataset");
        assert!(dataset.column("x").is_ok());
        assert_eq!(
            dataset.column("y"),
            Err(DatasetError::ColumnNotFound("y".to_string()))
        );
    }

    #[test]
    fn ragged_columns_are_rejected() {
        let err = Dataset::new(
            "d",
            vec![
                column("x", vec![Some(Value::Number(1.0)), None]),
                column("y", vec![None]),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err,
            DatasetError::RaggedColumn {
                name: "y".to_string(),
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn duplicate_column_names_are_rejected() {
        let err = Dataset::new(
            "d",
            vec![column("x", Vec::new()), column("x", Vec::new())],
        )
        .unwrap_err();
        assert_eq!(err, DatasetError::DuplicateColumn("x".to_string()));
    }

    #[test]
    fn shape_of_empty_dataset_is_zero() {
        let dataset = Dataset::new("d", Vec::new()).expect("dataset");
        assert_eq!(dataset.row_count(), 0);
        assert_eq!(dataset.column_count(), 0);
        assert!(dataset.is_empty());
    }
}
