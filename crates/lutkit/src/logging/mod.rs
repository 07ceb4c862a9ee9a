//! Logging setup.
//!
//! The library itself only talks to the `log` facade. Hosts that want output
//! without wiring their own backend can call [`init_logging`] once at startup.

mod init;

pub use init::{init_logging, LoggingConfig};
