//! Chat widget module.
//!
//! The widget owns the conversation (history and draft) through
//! [`ChatState`] and draws it with [`ChatWidget`].

mod state;
mod widget;

pub use state::ChatState;
pub use widget::ChatWidget;
