use super::events::Event;
use super::types::Command;

/// Trait for dispatching desktop commands.
///
/// # Semantics
///
/// - **Ordering**: Commands execute in the order received, synchronously.
/// - **Error handling**: Commands that name an unknown window or widget fail
///   with the implementation's error type and leave state untouched.
/// - **Events**: On success, dispatch returns the events describing what
///   changed, in the order they happened. Interactions the window state
///   ignores (dragging a maximized window, moving with no drag in progress)
///   succeed with an empty vector.
pub trait Store {
    type Error;
    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, Self::Error>;
}
