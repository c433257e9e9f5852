//! SkyCast terminal dashboard
//!
//! Built on tui-dispatch's effect loop:
//! 1. Event (keyboard) -> Component.handle_event() -> Actions
//! 2. Actions dispatched to the EffectStore
//! 3. Reducer updates state and returns effects
//! 4. Effects are turned into keyed tasks by the TaskManager
//! 5. Task results come back as `*Did*` actions; re-render if state changed

pub mod action;
pub mod app;
pub mod components;
pub mod effect;
pub mod logging;
pub mod reducer;
pub mod state;
