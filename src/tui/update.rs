//! Pure state transitions: (ViewState, Action) → Transition.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Every transition is total: actions that make no sense in the current
//! state return the view unchanged (no-op).

use crate::types::Deck;

use super::state::{Action, Effect, Overlay, Transition, ViewState};

/// Pure state transition function.
///
/// Given the current view, an action, and a read-only view of the deck,
/// produces the next transition. The effects boundary interprets the
/// result.
pub fn update(view: ViewState, action: &Action, deck: &Deck) -> Transition {
    match view.overlay {
        Some(overlay) => update_overlay(view, overlay, action, deck),
        None => update_slide(view, action, deck),
    }
}

// ============================================================================
// PER-STATE HANDLERS
// ============================================================================

/// No overlay: navigation and lab opening.
fn update_slide(view: ViewState, action: &Action, deck: &Deck) -> Transition {
    let mut next = view;
    match action {
        Action::NextSlide => {
            next.cursor.next();
            Transition::View(next)
        }
        Action::PrevSlide => {
            next.cursor.previous();
            Transition::View(next)
        }
        Action::FirstSlide => {
            next.cursor.first();
            Transition::View(next)
        }
        Action::LastSlide => {
            next.cursor.last();
            Transition::View(next)
        }
        // Rejected jumps leave the cursor where it was.
        Action::GoToSlide(index) => {
            next.cursor.go_to(*index);
            Transition::View(next)
        }
        Action::OpenLab(lab) => {
            if *lab < deck.slide(view.cursor.index()).labs.len() {
                next.overlay = Some(Overlay::Lab { lab: *lab });
            }
            Transition::View(next)
        }
        Action::Quit => Transition::Quit,
        Action::OpenInBrowser | Action::CloseOverlay => noop(view),
    }
}

/// Overlay open: close it, launch its URL, or navigate away.
///
/// The modal belongs to the slide that opened it, so any navigation
/// dismisses it before moving.
fn update_overlay(view: ViewState, overlay: Overlay, action: &Action, deck: &Deck) -> Transition {
    match action {
        Action::CloseOverlay => {
            let mut next = view;
            next.overlay = None;
            Transition::View(next)
        }
        Action::OpenInBrowser => {
            let Overlay::Lab { lab } = overlay;
            let slide = deck.slide(view.cursor.index());
            match slide.labs.get(lab) {
                Some(lab) => Transition::Effect(Effect::OpenBrowser {
                    url: lab.url.clone(),
                }),
                None => noop(view),
            }
        }
        Action::NextSlide
        | Action::PrevSlide
        | Action::FirstSlide
        | Action::LastSlide
        | Action::GoToSlide(_) => {
            let mut next = view;
            next.overlay = None;
            update_slide(next, action, deck)
        }
        // The modal covers the lab buttons; opening another is meaningless.
        Action::OpenLab(_) => noop(view),
        Action::Quit => Transition::Quit,
    }
}

fn noop(view: ViewState) -> Transition {
    Transition::View(view)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> Deck {
        Deck::builtin()
    }

    /// View with the cursor on `index`, no overlay.
    fn at(deck: &Deck, index: usize) -> ViewState {
        let mut view = ViewState::opening(deck);
        assert!(view.cursor.go_to(index), "test index {index} must be valid");
        view
    }

    /// View with the cursor on `index` and lab `lab` open.
    fn with_lab(deck: &Deck, index: usize, lab: usize) -> ViewState {
        let mut view = at(deck, index);
        view.overlay = Some(Overlay::Lab { lab });
        view
    }

    /// Apply an action expected to produce a view transition.
    fn apply(view: ViewState, action: Action, deck: &Deck) -> ViewState {
        match update(view, &action, deck) {
            Transition::View(next) => next,
            other => panic!("expected view transition, got {other:?}"),
        }
    }

    // --- navigation ---

    #[test]
    fn next_advances_one_slide() {
        let deck = deck();
        let view = apply(ViewState::opening(&deck), Action::NextSlide, &deck);
        assert_eq!(view.cursor.index(), 1);
    }

    #[test]
    fn fourteen_nexts_reach_the_last_slide_then_wrap() {
        let deck = deck();
        let mut view = ViewState::opening(&deck);
        for _ in 0..14 {
            view = apply(view, Action::NextSlide, &deck);
        }
        assert_eq!(view.cursor.index(), 14);
        view = apply(view, Action::NextSlide, &deck);
        assert_eq!(view.cursor.index(), 0);
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let deck = deck();
        let view = apply(ViewState::opening(&deck), Action::PrevSlide, &deck);
        assert_eq!(view.cursor.index(), 14);
    }

    #[test]
    fn next_then_previous_round_trips_from_every_slide() {
        let deck = deck();
        for start in 0..deck.len() {
            let mut view = at(&deck, start);
            view = apply(view, Action::NextSlide, &deck);
            view = apply(view, Action::PrevSlide, &deck);
            assert_eq!(view.cursor.index(), start, "round trip from {start}");
        }
    }

    #[test]
    fn indicator_button_four_jumps_to_index_three() {
        let deck = deck();
        for start in [0, 7, 14] {
            let view = apply(at(&deck, start), Action::GoToSlide(3), &deck);
            assert_eq!(view.cursor.index(), 3, "from {start}");
        }
    }

    #[test]
    fn go_to_out_of_range_is_rejected() {
        let deck = deck();
        let view = apply(at(&deck, 5), Action::GoToSlide(99), &deck);
        assert_eq!(view.cursor.index(), 5);
    }

    #[test]
    fn first_and_last_jump_to_the_edges() {
        let deck = deck();
        let view = apply(at(&deck, 8), Action::LastSlide, &deck);
        assert_eq!(view.cursor.index(), 14);
        let view = apply(view, Action::FirstSlide, &deck);
        assert_eq!(view.cursor.index(), 0);
    }

    // --- lab overlay ---

    #[test]
    fn open_lab_on_a_lab_slide() {
        let deck = deck();
        // Slide 4 (index 3) carries the system-prompt lab.
        let view = apply(at(&deck, 3), Action::OpenLab(0), &deck);
        assert_eq!(view.overlay, Some(Overlay::Lab { lab: 0 }));
        assert_eq!(view.cursor.index(), 3);
    }

    #[test]
    fn open_lab_without_labs_is_a_noop() {
        let deck = deck();
        let view = apply(at(&deck, 0), Action::OpenLab(0), &deck);
        assert_eq!(view.overlay, None);
    }

    #[test]
    fn second_lab_exists_only_on_the_rag_slide() {
        let deck = deck();
        // Slide 7 (index 6) has two labs; slide 4 (index 3) only one.
        let view = apply(at(&deck, 6), Action::OpenLab(1), &deck);
        assert_eq!(view.overlay, Some(Overlay::Lab { lab: 1 }));

        let view = apply(at(&deck, 3), Action::OpenLab(1), &deck);
        assert_eq!(view.overlay, None);
    }

    #[test]
    fn close_overlay_returns_to_the_slide() {
        let deck = deck();
        let view = apply(with_lab(&deck, 3, 0), Action::CloseOverlay, &deck);
        assert_eq!(view.overlay, None);
        assert_eq!(view.cursor.index(), 3);
    }

    #[test]
    fn enter_in_overlay_requests_the_lab_url() {
        let deck = deck();
        let transition = update(with_lab(&deck, 3, 0), &Action::OpenInBrowser, &deck);
        assert_eq!(
            transition,
            Transition::Effect(Effect::OpenBrowser {
                url: "https://dify.andres-wong.com/chatbot/ZM9Cfgj2LLfuIi6Q".to_string(),
            })
        );
    }

    #[test]
    fn each_lab_launches_its_own_url() {
        let deck = deck();
        let transition = update(with_lab(&deck, 6, 1), &Action::OpenInBrowser, &deck);
        assert_eq!(
            transition,
            Transition::Effect(Effect::OpenBrowser {
                url: "https://dify.andres-wong.com/chatbot/NYC8PDsL2o463U9j".to_string(),
            })
        );
    }

    #[test]
    fn navigating_away_closes_the_overlay() {
        let deck = deck();
        let view = apply(with_lab(&deck, 3, 0), Action::NextSlide, &deck);
        assert_eq!(view.cursor.index(), 4);
        assert_eq!(view.overlay, None);
    }

    #[test]
    fn jumping_while_overlay_open_closes_it() {
        let deck = deck();
        let view = apply(with_lab(&deck, 6, 0), Action::GoToSlide(0), &deck);
        assert_eq!(view.cursor.index(), 0);
        assert_eq!(view.overlay, None);
    }

    #[test]
    fn open_in_browser_without_overlay_is_a_noop() {
        let deck = deck();
        let view = apply(at(&deck, 3), Action::OpenInBrowser, &deck);
        assert_eq!(view, at(&deck, 3));
    }

    #[test]
    fn opening_another_lab_behind_the_modal_is_a_noop() {
        let deck = deck();
        let before = with_lab(&deck, 6, 0);
        let view = apply(before, Action::OpenLab(1), &deck);
        assert_eq!(view, before);
    }

    // --- quit ---

    #[test]
    fn quit_works_with_and_without_overlay() {
        let deck = deck();
        assert_eq!(update(at(&deck, 5), &Action::Quit, &deck), Transition::Quit);
        assert_eq!(
            update(with_lab(&deck, 3, 0), &Action::Quit, &deck),
            Transition::Quit
        );
    }

    // --- totality ---

    #[test]
    fn every_action_keeps_the_index_in_range() {
        let deck = deck();
        let actions = [
            Action::NextSlide,
            Action::PrevSlide,
            Action::FirstSlide,
            Action::LastSlide,
            Action::GoToSlide(0),
            Action::GoToSlide(14),
            Action::GoToSlide(usize::MAX),
            Action::OpenLab(0),
            Action::OpenLab(5),
            Action::OpenInBrowser,
            Action::CloseOverlay,
        ];
        for start in 0..deck.len() {
            for action in &actions {
                for view in [at(&deck, start), with_lab(&deck, start, 0)] {
                    if let Transition::View(next) = update(view, action, &deck) {
                        assert!(next.cursor.index() < deck.len(), "{action:?} from {start}");
                    }
                }
            }
        }
    }
}
