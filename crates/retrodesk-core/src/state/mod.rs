//! Command dispatch for the desktop.
//!
//! [`Desktop`] is the single owner of all desktop state. Interfaces drive it
//! through [`Store::dispatch`] and read it back through
//! [`Desktop::snapshot`].

pub mod dispatch;
pub mod errors;
pub mod events;
pub mod snapshot;
pub mod store;
pub mod types;

pub use dispatch::Desktop;
pub use errors::DispatchError;
pub use events::Event;
pub use snapshot::{DesktopSnapshot, WindowSnapshot};
pub use store::Store;
pub use types::{Command, PressTarget};
