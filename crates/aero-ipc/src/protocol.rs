//! Kernel tick channel envelopes.
//!
//! The kernel worker and the main thread talk exclusively through
//! these tagged messages. Everything arriving at the boundary is
//! validated before it is trusted; malformed or version-mismatched
//! envelopes are logged and dropped, never surfaced as errors.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::process::Process;

/// Wire protocol version carried in every tick payload.
pub const PROTOCOL_VERSION: u32 = 1;

/// Metrics snapshot attached to a kernel tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickPayload {
    pub protocol_version: u32,
    pub processes: Vec<Process>,
    pub cpu_usage: f64,
    pub mem_usage: f64,
    pub disk_usage: f64,
    pub net_usage: f64,
    pub network_latency_ms: f64,
}

/// Messages the kernel worker sends to the main thread.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum KernelEvent {
    /// Periodic metrics replacement; fire-and-forget state swap.
    #[serde(rename = "TICK")]
    Tick(TickPayload),
}

/// Commands the main thread sends to the kernel worker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum KernelCommand {
    #[serde(rename = "KILL_PROCESS")]
    KillProcess { pid: u32 },

    #[serde(rename = "SPAWN_PROCESS")]
    SpawnProcess { name: String },
}

impl KernelEvent {
    /// Build a tick envelope stamped with the current protocol version.
    pub fn tick(
        processes: Vec<Process>,
        cpu_usage: f64,
        mem_usage: f64,
        disk_usage: f64,
        net_usage: f64,
        network_latency_ms: f64,
    ) -> Self {
        Self::Tick(TickPayload {
            protocol_version: PROTOCOL_VERSION,
            processes,
            cpu_usage,
            mem_usage,
            disk_usage,
            net_usage,
            network_latency_ms,
        })
    }

    /// Serialize to the JSON wire form.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl KernelCommand {
    /// Serialize to the JSON wire form.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Decode an inbound event, returning `None` for anything that does
/// not validate. Dropped envelopes are logged at `warn`.
pub fn decode_event(raw: &str) -> Option<KernelEvent> {
    let event: KernelEvent = match serde_json::from_str(raw) {
        Ok(event) => event,
        Err(err) => {
            warn!(%err, "dropping malformed kernel event");
            return None;
        }
    };

    let KernelEvent::Tick(payload) = &event;
    if payload.protocol_version != PROTOCOL_VERSION {
        warn!(
            got = payload.protocol_version,
            expected = PROTOCOL_VERSION,
            "dropping kernel event with unexpected protocol version"
        );
        return None;
    }

    Some(event)
}

/// Decode an inbound command, returning `None` for anything that does
/// not validate.
pub fn decode_command(raw: &str) -> Option<KernelCommand> {
    match serde_json::from_str(raw) {
        Ok(command) => Some(command),
        Err(err) => {
            warn!(%err, "dropping malformed kernel command");
            None
        }
    }
}
