//! Reusable TUI components
//!
//! - `keybindings` - Step-aware key registry, nav bar items and help content
//! - `help_overlay` - Centered help window

pub mod help_overlay;
pub mod keybindings;
