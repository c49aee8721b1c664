// ADHOC-EVAL: Plotting of Ad-Hoc WiFi Saturation Measurements under High Contention
// Copyright (C) 2024-2025 The adhoc-eval developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//! Rendering of the measurement series into static line-chart figures.

use std::{error::Error, path::Path};

use itertools::{Itertools, MinMaxResult};
use plotters::{coord::Shift, prelude::*};

use crate::records::Metric;

/// Rendered size of a single figure, in pixels.
const FIGURE_SIZE: (u32, u32) = (640, 480);
/// Rendered size of the combined overview figure, in pixels.
const OVERVIEW_SIZE: (u32, u32) = (640, 1080);
/// Relative margin added around the data on auto-scaled axes.
const AXIS_MARGIN: f64 = 0.05;
const LINE_WIDTH: u32 = 2;
const MARKER_SIZE: i32 = 3;

/// Marker and line color of a metric.
fn line_color(metric: Metric) -> RGBColor {
    match metric {
        Metric::Throughput => BLUE,
        Metric::Delay => RED,
        Metric::PacketLoss => GREEN,
    }
}

/// Axis range spanning all `values` with a margin on both ends. Degenerate
/// inputs (empty or constant series) widen to a unit interval so the chart
/// can still be built.
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    match values.minmax() {
        MinMaxResult::NoElements => (0.0, 1.0),
        MinMaxResult::OneElement(x) => (x - 0.5, x + 0.5),
        MinMaxResult::MinMax(min, max) if min == max => (min - 0.5, max + 0.5),
        MinMaxResult::MinMax(min, max) => {
            let margin = (max - min) * AXIS_MARGIN;
            (min - margin, max + margin)
        }
    }
}

/// Renders the connected-marker line chart for a single metric to `out_path`.
pub fn render_metric(
    metric: Metric,
    points: &[(u32, f64)],
    out_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(out_path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    draw_metric(&root, metric, points)?;

    root.present()?;
    Ok(())
}

/// Renders all loaded series stacked into a single overview figure.
pub fn render_overview(
    series: &[(Metric, Vec<(u32, f64)>)],
    out_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(out_path, OVERVIEW_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let areas = root.split_evenly((series.len(), 1));
    for ((metric, points), area) in series.iter().zip(areas.iter()) {
        draw_metric(area, *metric, points)?;
    }

    root.present()?;
    Ok(())
}

fn draw_metric(
    area: &DrawingArea<BitMapBackend, Shift>,
    metric: Metric,
    points: &[(u32, f64)],
) -> Result<(), Box<dyn Error>> {
    let color = line_color(metric);
    let (x_min, x_max) = padded_range(points.iter().map(|(x, _)| *x as f64));
    let (y_min, y_max) = metric
        .y_clamp()
        .unwrap_or_else(|| padded_range(points.iter().map(|(_, y)| *y)));

    let mut chart = ChartBuilder::on(area)
        .caption(metric.title(), ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Number of Nodes")
        .y_desc(metric.y_label())
        .draw()?;

    chart.draw_series(LineSeries::new(
        points.iter().map(|(x, y)| (*x as f64, *y)),
        color.stroke_width(LINE_WIDTH),
    ))?;
    chart.draw_series(
        points
            .iter()
            .map(|(x, y)| Circle::new((*x as f64, *y), MARKER_SIZE, color.filled())),
    )?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::util::PathBufExt;

    #[test]
    fn padded_range_spread() {
        assert_eq!(padded_range([0.0, 10.0].into_iter()), (-0.5, 10.5));
    }

    #[test]
    fn padded_range_constant() {
        assert_eq!(padded_range([2.0, 2.0, 2.0].into_iter()), (1.5, 2.5));
    }

    #[test]
    fn padded_range_empty() {
        assert_eq!(padded_range(std::iter::empty()), (0.0, 1.0));
    }

    #[test]
    fn render_empty_series() {
        // an empty data section still produces a figure with axes
        let output = std::env::temp_dir().then("adhoc-eval-empty.png");
        render_metric(Metric::Delay, &[], &output).expect("rendering should pass without errors");
        assert!(output.exists());
    }
}
