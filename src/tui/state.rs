//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire TUI state space. The transition function
//! and rendering layer both program against them.
//!
//! Design principle: `ViewState` carries only the mutable interaction state
//! (cursor position, open overlay). The deck itself is immutable shared
//! data and lives in [`App`]. Everything visual is derived at render time.

use crossterm::event::{KeyEvent, MouseEvent};

use crate::nav::DeckCursor;
use crate::types::Deck;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Two producers feed a single mpsc channel:
/// - a key reader thread sends `Key`, `Mouse`, and `Resize` variants
/// - a ticker thread sends `Tick` once per second for the clock
///
/// The event loop dispatches: input events go through `map_key`/`hit_test`
/// into `update`; `Tick` refreshes the clock string; `Resize` just redraws.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// A terminal mouse event (click navigation).
    Mouse(MouseEvent),
    /// One-second clock tick.
    Tick,
    /// Terminal was resized; re-render on the new geometry.
    Resize,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
///
/// Owns the immutable deck, the mutable view state, and the clock readout.
#[derive(Debug)]
pub struct App {
    /// The fixed slide sequence. Never mutated after construction.
    pub deck: Deck,

    /// Cursor and overlay, the only state user input can change.
    pub view: ViewState,

    /// Formatted clock string, refreshed on every tick.
    pub clock: String,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

/// The mutable interaction state: where we are and what floats on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    /// Position in the deck.
    pub cursor: DeckCursor,
    /// Open modal, if any. Belongs to the current slide: navigating away
    /// closes it.
    pub overlay: Option<Overlay>,
}

/// A modal floating over the current slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Embedded lab panel: index into the current slide's `labs`.
    Lab { lab: usize },
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key and mouse events.
///
/// The effects layer maps inputs to Actions; the transition function
/// decides what each Action means given the current view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Advance to the next slide (wraps past the last).
    NextSlide,
    /// Step back to the previous slide (wraps before the first).
    PrevSlide,
    /// Jump to the first slide.
    FirstSlide,
    /// Jump to the last slide.
    LastSlide,
    /// Jump to a slide by zero-based index (indicator dots, number keys).
    GoToSlide(usize),
    /// Open the current slide's lab at the given index.
    OpenLab(usize),
    /// Hand the open lab's URL to the system browser.
    OpenInBrowser,
    /// Close the open overlay.
    CloseOverlay,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// The update function returns this; the effects boundary inspects it to
/// decide what to store and which side effects to execute. Pure code
/// describes WHAT should happen, effectful code decides HOW.
#[derive(Debug, PartialEq, Eq)]
pub enum Transition {
    /// Adopt this view state (may be unchanged).
    View(ViewState),
    /// Quit the application.
    Quit,
    /// Execute a side effect; the view state is untouched.
    Effect(Effect),
}

/// Side effect requested by a pure transition.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    /// Open an external URL in the system browser.
    OpenBrowser { url: String },
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// An App at the first slide of `deck`, no overlay, clock unset.
    ///
    /// The run loop initializes the clock on mount, before the first draw.
    pub fn new(deck: Deck) -> Self {
        let view = ViewState::opening(&deck);
        App {
            deck,
            view,
            clock: String::new(),
            should_quit: false,
        }
    }

    /// An App starting at a specific zero-based slide index.
    ///
    /// Out-of-range indices are rejected by the cursor and leave the app
    /// on the first slide.
    pub fn starting_at(deck: Deck, index: usize) -> Self {
        let mut app = App::new(deck);
        app.view.cursor.go_to(index);
        app
    }
}

impl ViewState {
    /// View at the first slide with nothing overlaid.
    pub fn opening(deck: &Deck) -> Self {
        ViewState {
            cursor: deck.cursor(),
            overlay: None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_new_starts_on_first_slide() {
        let app = App::new(Deck::builtin());
        assert_eq!(app.view.cursor.index(), 0);
        assert_eq!(app.view.overlay, None);
        assert!(app.clock.is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn app_starting_at_honors_valid_indices() {
        let app = App::starting_at(Deck::builtin(), 6);
        assert_eq!(app.view.cursor.index(), 6);
    }

    #[test]
    fn app_starting_at_rejects_out_of_range() {
        let app = App::starting_at(Deck::builtin(), 99);
        assert_eq!(app.view.cursor.index(), 0);
    }

    #[test]
    fn action_equality_for_matching() {
        // Actions need Eq for the transition function to pattern-match
        assert_eq!(Action::NextSlide, Action::NextSlide);
        assert_ne!(Action::NextSlide, Action::PrevSlide);
        assert_eq!(Action::GoToSlide(3), Action::GoToSlide(3));
        assert_ne!(Action::GoToSlide(3), Action::GoToSlide(4));
        assert_ne!(Action::OpenLab(0), Action::OpenLab(1));
    }

    #[test]
    fn transition_variants_are_distinguishable() {
        let deck = Deck::builtin();
        let t1 = Transition::View(ViewState::opening(&deck));
        let t2 = Transition::Quit;
        let t3 = Transition::Effect(Effect::OpenBrowser {
            url: "https://example.com".to_string(),
        });

        assert_ne!(t1, t2);
        assert_ne!(t2, t3);
    }

    #[test]
    fn overlay_marks_which_lab_is_open() {
        assert_eq!(Overlay::Lab { lab: 0 }, Overlay::Lab { lab: 0 });
        assert_ne!(Overlay::Lab { lab: 0 }, Overlay::Lab { lab: 1 });
    }
}
