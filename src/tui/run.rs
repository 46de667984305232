//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal: all intelligence lives in the pure layers.
//!
//! Architecture: two producer threads feed a single mpsc channel.
//! - Key reader thread: forwards crossterm key, mouse, and resize events
//! - Ticker thread: sends a tick once a second to refresh the clock
//! The event loop consumes from the channel, dispatching to pure handlers.
//! Dropping the receiver on exit stops both producers at their next send.

use std::io;
use std::process::Command;
use std::sync::mpsc;
use std::thread;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use crate::clock;

use super::state::{Action, App, AppEvent, Effect, Transition};
use super::update::update;
use super::view::{hit_test, render};

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Navigation
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => Some(Action::PrevSlide),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') | KeyCode::PageDown => {
            Some(Action::NextSlide)
        }
        KeyCode::Home => Some(Action::FirstSlide),
        KeyCode::End => Some(Action::LastSlide),

        // Direct jumps: 1-9 hit the first nine slides, 0 the tenth
        KeyCode::Char(c @ '1'..='9') => Some(Action::GoToSlide(c as usize - '1' as usize)),
        KeyCode::Char('0') => Some(Action::GoToSlide(9)),

        // Labs
        KeyCode::Char('o') => Some(Action::OpenLab(0)),
        KeyCode::Char('O') => Some(Action::OpenLab(1)),
        KeyCode::Enter => Some(Action::OpenInBrowser),
        KeyCode::Esc => Some(Action::CloseOverlay),

        KeyCode::Char('q') => Some(Action::Quit),

        _ => None,
    }
}

/// Map a mouse event to an action via the view's hit zones.
fn map_mouse(mouse: MouseEvent, area: Rect, slide_count: usize) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            hit_test(mouse.column, mouse.row, area, slide_count)
        }
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode. Mouse capture is enabled for the
/// chevron and indicator-dot click targets.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    io::stdout().execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards them to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let app_event = match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(Event::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue, // focus, paste, etc.
                Err(_) => break,
            };
            if tx.send(app_event).is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

/// Spawn a thread that ticks once a second for the wall clock.
fn spawn_ticker(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            thread::sleep(clock::TICK_INTERVAL);
            if tx.send(AppEvent::Tick).is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI event loop until the user quits.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// spawns the producer threads, and consumes events until a Quit
/// transition flips the quit flag.
pub fn run(mut app: App) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    app.clock = clock::now_string();

    let (tx, rx) = mpsc::channel::<AppEvent>();

    // Spawn producer threads
    spawn_key_reader(tx.clone());
    spawn_ticker(tx);

    loop {
        // Render
        terminal.draw(|frame| render(&app, frame))?;

        // Check quit flag
        if app.should_quit {
            break;
        }

        // Block on next event from any producer
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // all senders dropped
        };

        let action = match event {
            AppEvent::Key(key) => map_key(key),
            AppEvent::Mouse(mouse) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                map_mouse(mouse, area, app.deck.len())
            }
            AppEvent::Tick => {
                app.clock = clock::now_string();
                None
            }
            AppEvent::Resize => None, // the next draw picks up the new size
        };

        if let Some(action) = action {
            match update(app.view, &action, &app.deck) {
                Transition::View(view) => app.view = view,
                Transition::Quit => app.should_quit = true,
                Transition::Effect(effect) => handle_effect(effect),
            }
        }
    }

    // The receiver drops here; both producers exit on their next send.
    restore_terminal()?;
    Ok(())
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Handle a side effect requested by a pure transition.
fn handle_effect(effect: Effect) {
    match effect {
        Effect::OpenBrowser { url } => {
            let opener = if cfg!(target_os = "macos") {
                "open"
            } else {
                "xdg-open"
            };
            // A presentation must survive a missing opener; report and move on.
            if let Err(e) = Command::new(opener).arg(&url).spawn() {
                eprintln!("could not open {url}: {e}");
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
