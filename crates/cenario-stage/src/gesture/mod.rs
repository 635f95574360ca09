//! Pointer/touch gesture handling.
//!
//! The platform-agnostic event model lives in `event`; `target` unifies the
//! two transformable targets (item, background) behind one trait; `session`
//! holds the pure state machine that turns events into transform updates.
//! Wiring events to hit testing and target lookup happens in
//! [`stage::Stage`](crate::stage::Stage).

mod event;
mod session;
mod target;

pub use event::{GestureEvent, Phase};
pub use session::{GestureMode, GestureSession, GestureTarget};
pub use target::{Transformable, BACKGROUND_SCALE_FLOOR, ITEM_SCALE_FLOOR};
