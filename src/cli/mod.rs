//! CLI layer
//!
//! This module contains the interactive menu loop,
//! bridging terminal input with the service layer.

pub mod menu;

pub use menu::MenuSession;
