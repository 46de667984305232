//! TUI module for the interactive presenter.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (App, ViewState, Action, Transition)
//! - `update`: pure state transitions
//! - `view`: pure rendering and hit testing
//! - `theme`: colors, styles, and decoration tables
//! - `run`: the only effectful layer (terminal, threads, browser opener)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
