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
//! Library for plotting the per-node-count averages collected by the ad-hoc
//! WiFi high-contention experiments.

pub mod charts;
pub mod records;
pub mod util;

pub mod prelude {
    pub use super::{
        charts::{render_metric, render_overview},
        records::{DelayRecord, Metric, PacketLossRecord, RecordError, ThroughputRecord},
    };
}
