//! UI module for the flychat TUI.

pub mod layout;
pub mod root;
pub mod theme;

pub use root::RootView;
