use crate::config::Config;
use crate::host::Element;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Runs the demo app until the user quits.
///
/// The view tree is rebuilt only when something invalidated it; key events
/// are resolved against the tree that is currently on screen.
pub fn run(config: Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(config);
    let events = EventHandler::new(tick_rate)?;
    let mut tree = Element::Empty;

    loop {
        if app.redraw().take() {
            tree = app.view();
            terminal.draw(|frame| draw(frame, &app, &tree))?;
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => app.on_key(&tree, key),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "terminal resized");
                app.redraw().invalidate();
            }
            Ok(AppEvent::Tick) | Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                tracing::warn!("terminal event reader stopped");
                break;
            }
        }
    }

    drop(guard);
    tracing::info!("terminal restored");
    Ok(())
}
