//! Aero OS Kernel Tick Channel
//!
//! Protocol definitions for the message channel between the simulated
//! kernel worker and the main thread:
//!
//! - **Protocol**: versioned `TICK` event and process-control commands
//! - **Process**: the simulated process table entries ticks carry
//!
//! The core never blocks on this channel. Inbound ticks are validated
//! at the boundary and treated as fire-and-forget state replacement;
//! anything that fails validation is dropped silently (with a log
//! line), never propagated as an error.

pub mod process;
pub mod protocol;

// Re-export main types
pub use process::{Process, ProcessStatus};
pub use protocol::{
    decode_command, decode_event, KernelCommand, KernelEvent, TickPayload, PROTOCOL_VERSION,
};
