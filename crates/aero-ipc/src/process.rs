//! Simulated process metadata carried in kernel ticks.

use serde::{Deserialize, Serialize};

/// Scheduler state of a simulated process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessStatus {
    Running,
    Waiting,
    Terminated,
}

/// One entry in the simulated process table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Process {
    pub pid: u32,
    pub name: String,
    /// CPU share in percent
    pub cpu: f64,
    /// Memory usage in MB
    pub mem: f64,
    /// Disk throughput in MB/s
    pub disk: f64,
    /// Network throughput in KB/s
    pub net: f64,
    pub status: ProcessStatus,
}
