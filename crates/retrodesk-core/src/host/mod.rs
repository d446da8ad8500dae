//! Open-window bookkeeping: maps open signals to window instances.

pub mod errors;
pub mod registry;
pub mod types;

pub use errors::HostError;
pub use registry::WindowHost;
pub use types::{InstanceId, OpenWindow};
