//! Cenário stage crate.
//!
//! Domain layer of the scene composer: the speech/thought bubble renderer,
//! the scene-item model, and the pointer-gesture state machine, all tied
//! together by the [`stage::Stage`] controller.
//!
//! The windowing chrome (toolbars, forms, file pickers) and the final
//! flatten/export step live outside this crate; they talk to it through
//! [`item::ItemStore`], [`bubble::BubbleRenderer`], and
//! [`stage::Stage::handle_event`].

pub mod background;
pub mod bubble;
pub mod gesture;
pub mod item;
pub mod stage;
