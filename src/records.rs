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
//! Module defining record data types to (de-)serialize the measurement CSVs
//! written by the testbed runs.
use std::{fs, io, path::Path};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::util::PathBufExt;

/// Error thrown when a measurement series cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, strum::Display, strum::EnumIter,
)]
/// Metrics averaged over all flows of a run, collected per node count.
pub enum Metric {
    Throughput,
    Delay,
    PacketLoss,
}

impl Metric {
    /// File the testbed wrote this metric's per-node-count averages to.
    pub fn csv_filename(&self) -> &'static str {
        match self {
            Metric::Throughput => "throughput-vs-nodes-high-contention.csv",
            Metric::Delay => "delay-vs-nodes-high-contention.csv",
            Metric::PacketLoss => "packetloss-vs-nodes-high-contention.csv",
        }
    }

    /// File the rendered figure is written to.
    pub fn figure_filename(&self) -> &'static str {
        match self {
            Metric::Throughput => "fig1.png",
            Metric::Delay => "fig2.png",
            Metric::PacketLoss => "fig3.png",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Metric::Throughput => "Average Throughput vs Number of Nodes (High Contention)",
            Metric::Delay => "Average Delay vs Number of Nodes (High Contention)",
            Metric::PacketLoss => "Average Packet Loss Ratio vs Number of Nodes (High Contention)",
        }
    }

    pub fn y_label(&self) -> &'static str {
        match self {
            Metric::Throughput => "Average Throughput (Kbps)",
            Metric::Delay => "Average Delay (ms)",
            Metric::PacketLoss => "Average Packet Loss Ratio",
        }
    }

    /// Fixed y-range for metrics that are bounded by definition. The loss
    /// ratio is always shown on the full `[0, 1]` scale.
    pub fn y_clamp(&self) -> Option<(f64, f64)> {
        match self {
            Metric::PacketLoss => Some((0.0, 1.0)),
            _ => None,
        }
    }

    /// Loads this metric's `(nodes, value)` series from its CSV in `data_dir`,
    /// in file order.
    pub fn load_series(&self, data_dir: impl AsRef<Path>) -> Result<Vec<(u32, f64)>, RecordError> {
        let path = data_dir.as_ref().then(self.csv_filename());
        log::info!("Loading: {path:?}");
        let file = fs::File::open(&path)?;
        match self {
            Metric::Throughput => load_points::<ThroughputRecord, _>(file),
            Metric::Delay => load_points::<DelayRecord, _>(file),
            Metric::PacketLoss => load_points::<PacketLossRecord, _>(file),
        }
    }
}

/// Access to the chart coordinates shared by all record types.
pub trait SeriesPoint {
    fn nodes(&self) -> u32;
    fn value(&self) -> f64;
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
/// Average throughput over all received flows of a run with a fixed number of nodes.
pub struct ThroughputRecord {
    #[serde(rename = "Nodes")]
    pub nodes: u32,
    #[serde(rename = "AvgThroughput(Kbps)")]
    pub avg_throughput_kbps: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
/// Average one-way delay over all received flows of a run with a fixed number of nodes.
pub struct DelayRecord {
    #[serde(rename = "Nodes")]
    pub nodes: u32,
    #[serde(rename = "AvgDelay(ms)")]
    pub avg_delay_ms: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
/// Average packet loss ratio over all transmitting flows of a run with a fixed
/// number of nodes. A run without any received flow is recorded as ratio 1.
pub struct PacketLossRecord {
    #[serde(rename = "Nodes")]
    pub nodes: u32,
    #[serde(rename = "AvgPacketLossRatio")]
    pub avg_packet_loss_ratio: f64,
}

impl SeriesPoint for ThroughputRecord {
    fn nodes(&self) -> u32 {
        self.nodes
    }
    fn value(&self) -> f64 {
        self.avg_throughput_kbps
    }
}

impl SeriesPoint for DelayRecord {
    fn nodes(&self) -> u32 {
        self.nodes
    }
    fn value(&self) -> f64 {
        self.avg_delay_ms
    }
}

impl SeriesPoint for PacketLossRecord {
    fn nodes(&self) -> u32 {
        self.nodes
    }
    fn value(&self) -> f64 {
        self.avg_packet_loss_ratio
    }
}

fn load_points<R, Rd>(reader: Rd) -> Result<Vec<(u32, f64)>, RecordError>
where
    R: DeserializeOwned + SeriesPoint,
    Rd: io::Read,
{
    let mut csv = csv::Reader::from_reader(reader);
    csv.deserialize()
        .map(|record| {
            let record: R = record?;
            Ok((record.nodes(), record.value()))
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn deserialize_throughput_record() {
        let ser = "Nodes,AvgThroughput(Kbps)\n2,1923.46\n";
        let mut csv = csv::Reader::from_reader(ser.as_bytes());
        let de: ThroughputRecord = csv.deserialize().next().unwrap().unwrap();
        assert_eq!(
            de,
            ThroughputRecord {
                nodes: 2,
                avg_throughput_kbps: 1923.46,
            }
        );
    }

    #[test]
    fn serialize_loss_record() {
        let x = PacketLossRecord {
            nodes: 12,
            avg_packet_loss_ratio: 0.681934,
        };

        let mut csv = csv::Writer::from_writer(vec![]);
        csv.serialize(&x).unwrap();
        csv.flush().unwrap();
        let ser = String::from_utf8(csv.into_inner().unwrap()).unwrap();
        assert_eq!(ser, "Nodes,AvgPacketLossRatio\n12,0.681934\n".to_string());

        let mut csv = csv::Reader::from_reader(ser.as_bytes());
        let de: PacketLossRecord = csv.deserialize().next().unwrap().unwrap();
        assert_eq!(de, x);
    }

    #[test]
    fn empty_data_section() {
        // a header-only file yields an empty series, not an error
        let ser = "Nodes,AvgDelay(ms)\n";
        let points = load_points::<DelayRecord, _>(ser.as_bytes()).unwrap();
        assert!(points.is_empty());
    }
}
