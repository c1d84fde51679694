//! Application module
//!
//! - Actions: what can happen
//! - State: what is true right now
//! - Reducer: pure `(State, Action) -> State`
//! - Effects: backend work implied by a transition
//! - Event: terminal input polling

pub mod actions;
pub mod effects;
pub mod event;
pub mod reducer;
pub mod state;

pub use actions::{Action, FilterKind};
pub use effects::{effects, Effect};
pub use reducer::reduce;
pub use state::{AppState, DropdownState, Focus, Toast, UiConfig};
