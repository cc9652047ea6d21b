use std::{fs::File, io::Write, path::Path};

use anyhow::{Context, Result, anyhow};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{aggregate, align, cli::ChartArgs, coerce, dataset::Dataset, io_utils, loader};

/// Display colors cycled across series in dataset input order, wrapping
/// when there are more datasets than palette entries.
pub const SERIES_PALETTE: &[&str] = &[
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD", "#98D8C8", "#F7DC6F",
];

/// Headroom applied above the largest aggregated value so polygons do not
/// touch the outer ring.
const RADIAL_HEADROOM: f64 = 1.1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub axis: String,
    pub value: f64,
}

/// One dataset rendered as a closed polygon over the selected axes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub color: String,
    pub points: Vec<ChartPoint>,
}

/// The artifact handed to the plotting layer: all series plus the shared
/// radial-axis range `[0, radial_max]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSpec {
    pub series: Vec<ChartSeries>,
    pub radial_max: f64,
}

/// Assembles the radar-chart dataset from coerced inputs.
///
/// Each series carries one (axis, value) pair per selected column in caller
/// order, with the first pair repeated at the end to close the polygon. An
/// axis absent from a particular dataset charts as 0, so partial overlap
/// still renders. Zero datasets yield an empty spec with radial max 0.
pub fn build_chart_spec(datasets: &[Dataset], axes: &[String]) -> ChartSpec {
    let mut series = Vec::with_capacity(datasets.len());
    let mut max_value = 0.0f64;

    for (position, dataset) in datasets.iter().enumerate() {
        let mut points = Vec::with_capacity(axes.len() + 1);
        for axis in axes {
            let value = aggregate::aggregate_column(dataset, axis)
                .map(|aggregate| aggregate.mean)
                .unwrap_or(0.0);
            max_value = max_value.max(value);
            points.push(ChartPoint {
                axis: axis.clone(),
                value,
            });
        }
        if let Some(first) = points.first().cloned() {
            points.push(first);
        }
        series.push(ChartSeries {
            name: dataset.name().to_string(),
            color: SERIES_PALETTE[position % SERIES_PALETTE.len()].to_string(),
            points,
        });
    }

    ChartSpec {
        series,
        radial_max: max_value * RADIAL_HEADROOM,
    }
}

pub fn execute(args: &ChartArgs) -> Result<()> {
    let axes = crate::cli::split_columns(&args.columns);
    if axes.is_empty() {
        return Err(anyhow!(
            "Select at least one column with -C/--columns to build a chart"
        ));
    }

    let datasets = loader::load_all(&args.inputs, args.delimiter, args.input_encoding.as_deref())?;
    if datasets.is_empty() {
        warn!("No dataset could be loaded; emitting an empty chart spec");
    }
    let shared = align::common_columns(&datasets);
    for axis in &axes {
        if !datasets.is_empty() && !shared.contains(axis) {
            warn!("Column '{axis}' is not shared by every dataset; series without it chart as 0");
        }
    }

    let mut coerced = Vec::with_capacity(datasets.len());
    for dataset in &datasets {
        let (converted, warnings) = coerce::coerce_columns(dataset, &axes);
        for warning in &warnings {
            warn!("{warning}");
        }
        coerced.push(converted);
    }

    let spec = build_chart_spec(&coerced, &axes);
    write_spec(&spec, args.output.as_deref())?;
    let destination = match args.output.as_deref() {
        Some(path) if !io_utils::is_dash(path) => path.display().to_string(),
        _ => "stdout".to_string(),
    };
    info!(
        "Chart spec with {} series over {} axis(es) written to {destination}",
        spec.series.len(),
        axes.len()
    );
    Ok(())
}

fn write_spec(spec: &ChartSpec, output: Option<&Path>) -> Result<()> {
    let rendered = serde_json::to_string_pretty(spec).context("Serializing chart spec")?;
    match output {
        Some(path) if !io_utils::is_dash(path) => {
            let mut file =
                File::create(path).with_context(|| format!("Creating output file {path:?}"))?;
            file.write_all(rendered.as_bytes())
                .and_then(|()| file.write_all(b"\n"))
                .with_context(|| format!("Writing chart spec to {path:?}"))?;
        }
        _ => println!("{rendered}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{data::Value, dataset::Column};

    fn dataset(name: &str, columns: &[(&str, &[f64])]) -> Dataset {
        let columns = columns
            .iter()
            .map(|(name, values)| Column {
                name: name.to_string(),
                cells: values.iter().map(|v| Some(Value::Number(*v))).collect(),
            })
            .collect();
        Dataset::new(name, columns).expect("dataset")
    }

    #[test]
    fn polygons_are_closed() {
        let d = dataset("d", &[("X", &[1.0]), ("Y", &[2.0])]);
        let axes = vec!["X".to_string(), "Y".to_string()];
        let spec = build_chart_spec(&[d], &axes);

        assert_eq!(spec.series.len(), 1);
        let points = &spec.series[0].points;
        assert_eq!(points.len(), axes.len() + 1);
        assert_eq!(points.first(), points.last());
    }

    #[test]
    fn radial_max_leaves_headroom_over_the_largest_mean() {
        let d1 = dataset("d1", &[("X", &[1.0]), ("Y", &[2.0])]);
        let d2 = dataset("d2", &[("X", &[3.0]), ("Y", &[4.0])]);
        let axes = vec!["X".to_string(), "Y".to_string()];
        let spec = build_chart_spec(&[d1, d2], &axes);

        assert!((spec.radial_max - 4.4).abs() < 1e-12);
        let first = &spec.series[0].points;
        assert_eq!(first[0], ChartPoint { axis: "X".to_string(), value: 1.0 });
        assert_eq!(first[1], ChartPoint { axis: "Y".to_string(), value: 2.0 });
        assert_eq!(first[2], ChartPoint { axis: "X".to_string(), value: 1.0 });
    }

    #[test]
    fn colors_cycle_through_the_palette() {
        let datasets: Vec<Dataset> = (0..SERIES_PALETTE.len() + 2)
            .map(|i| dataset(&format!("d{i}"), &[("X", &[1.0])]))
            .collect();
        let spec = build_chart_spec(&datasets, &["X".to_string()]);

        assert_eq!(spec.series[0].color, SERIES_PALETTE[0]);
        assert_eq!(
            spec.series[SERIES_PALETTE.len()].color,
            spec.series[0].color
        );
        assert_eq!(
            spec.series[SERIES_PALETTE.len() + 1].color,
            spec.series[1].color
        );
    }

    #[test]
    fn absent_axis_charts_as_zero() {
        let d = dataset("d", &[("X", &[5.0])]);
        let axes = vec!["X".to_string(), "Z".to_string()];
        let spec = build_chart_spec(&[d], &axes);

        assert_eq!(spec.series[0].points[1].value, 0.0);
        assert!((spec.radial_max - 5.5).abs() < 1e-12);
    }

    #[test]
    fn zero_datasets_yield_an_empty_spec() {
        let spec = build_chart_spec(&[], &[]);
        assert!(spec.series.is_empty());
        assert_eq!(spec.radial_max, 0.0);
    }

    #[test]
    fn all_zero_values_keep_the_bound_finite() {
        let d = dataset("d", &[("X", &[])]);
        let spec = build_chart_spec(&[d], &["X".to_string()]);
        assert_eq!(spec.radial_max, 0.0);
        assert_eq!(spec.series[0].points[0].value, 0.0);
    }

    #[test]
    fn spec_round_trips_through_json() {
        let d = dataset("d", &[("X", &[1.5])]);
        let spec = build_chart_spec(&[d], &["X".to_string()]);
        let rendered = serde_json::to_string(&spec).expect("serialize");
        let parsed: ChartSpec = serde_json::from_str(&rendered).expect("parse");
        assert_eq!(parsed, spec);
    }
}
