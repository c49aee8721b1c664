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
use std::{
    fmt, fs,
    path::{Path, PathBuf},
    process,
};

use clap::{Parser, ValueEnum};
use serde::Serialize;
use strum::IntoEnumIterator;

use adhoc_eval::{
    prelude::*,
    util::{self, PathBufExt},
};

/// File the combined overview figure is written to.
pub const OVERVIEW_FIGURE: &str = "adhoc-wifi-high-contention-performance.png";

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Overwrite the input path for data.
    #[arg(short, long, default_value = "./")]
    data_path: String,
    /// Overwrite the output path for plots.
    #[arg(short, long, default_value = "./")]
    output_path: String,
    /// Type of plot to generate.
    #[arg(short, long, value_enum, default_value_t = Plot::All)]
    plot_type: Plot,
}

#[derive(ValueEnum, Clone, Debug, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
enum Plot {
    /// Produces the three per-metric figures.
    #[default]
    All,
    /// Shows the average throughput against the number of nodes.
    Throughput,
    /// Shows the average one-way delay against the number of nodes.
    Delay,
    /// Shows the average packet loss ratio against the number of nodes.
    PacketLoss,
    /// Combines all three metrics into a single stacked figure.
    Overview,
}

impl fmt::Display for Plot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Plot::All => write!(f, "all"),
            Plot::Throughput => write!(f, "throughput"),
            Plot::Delay => write!(f, "delay"),
            Plot::PacketLoss => write!(f, "packet-loss"),
            Plot::Overview => write!(f, "overview"),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    util::init_logging();

    // parse plot parameters
    let args = Args::parse();
    let plot_dir = PathBuf::from(args.output_path);
    fs::create_dir_all(&plot_dir)?;

    // ensure that the data folder exists
    let data_path = PathBuf::from(args.data_path);
    if !data_path.exists() {
        log::error!("Could not read data in {data_path:?}!");
        process::exit(1)
    }

    match args.plot_type {
        Plot::All => {
            for metric in Metric::iter() {
                plot_metric(metric, &data_path, &plot_dir)?;
            }
        }
        Plot::Throughput => plot_metric(Metric::Throughput, &data_path, &plot_dir)?,
        Plot::Delay => plot_metric(Metric::Delay, &data_path, &plot_dir)?,
        Plot::PacketLoss => plot_metric(Metric::PacketLoss, &data_path, &plot_dir)?,
        Plot::Overview => plot_overview(&data_path, &plot_dir)?,
    }

    Ok(())
}

/// Creates the figure for a single metric from the CSV found in `data_path`.
fn plot_metric(
    metric: Metric,
    data_path: &Path,
    plot_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let points = metric.load_series(data_path)?;

    let output = plot_dir.then(metric.figure_filename());
    log::debug!("Plotting {metric} to {output:?}");
    render_metric(metric, &points, &output)
}

/// Creates a single figure stacking all three metrics over the same x-axis.
fn plot_overview(data_path: &Path, plot_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let series = Metric::iter()
        .map(|metric| Ok((metric, metric.load_series(data_path)?)))
        .collect::<Result<Vec<_>, RecordError>>()?;

    let output = plot_dir.then(OVERVIEW_FIGURE);
    log::debug!("Plotting {output:?}");
    render_overview(&series, &output)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::env;

    #[test]
    fn generate_figures() {
        let data_path = Path::new("./src/test/data/");
        let plot_dir = env::temp_dir().then("adhoc-eval-figures");
        fs::create_dir_all(&plot_dir).unwrap();

        for metric in Metric::iter() {
            plot_metric(metric, data_path, &plot_dir)
                .expect("Plotting should pass without errors.");
            let figure = plot_dir.as_path().then(metric.figure_filename());
            assert!(figure.exists());
            assert!(fs::metadata(&figure).unwrap().len() > 0);
        }

        plot_overview(data_path, &plot_dir).expect("Plotting should pass without errors.");
        assert!(plot_dir.as_path().then(OVERVIEW_FIGURE).exists());
    }

    #[test]
    fn reference_series_complete() {
        // one data point per evaluated node count, in file order
        for metric in Metric::iter() {
            let series = metric.load_series("./src/test/data/").unwrap();
            assert_eq!(series.len(), 6);
            assert_eq!(series.first().unwrap().0, 2);
            assert_eq!(series.last().unwrap().0, 12);
        }
    }
}
