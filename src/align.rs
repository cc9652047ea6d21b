use std::collections::HashSet;

use itertools::Itertools;

use crate::dataset::Dataset;

/// Column names present in every dataset, sorted ascending so displays and
/// default selections stay stable run over run.
///
/// Zero datasets yield an empty list; a single dataset yields all of its
/// column names. Matching is exact and case-sensitive.
pub fn common_columns(datasets: &[Dataset]) -> Vec<String> {
    let Some((first, rest)) = datasets.split_first() else {
        return Vec::new();
    };
    let mut shared: HashSet<&str> = first.column_names().collect();
    for dataset in rest {
        let names: HashSet<&str> = dataset.column_names().collect();
        shared.retain(|name| names.contains(name));
    }
    shared.into_iter().map(str::to_string).sorted().collect()
}
