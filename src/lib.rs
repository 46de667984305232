//! termdeck: present the generative-AI workshop deck in the terminal.

pub mod clock;
mod content;
pub mod markup;
pub mod nav;
pub mod outline;
pub mod tui;
pub mod types;
