use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::time::Duration;

/// Drive `app` until it asks to quit.
///
/// `build` receives the event sender so the store's completion callback can
/// post [`AppEvent::ConsentRecorded`] back into the loop.
pub fn run<F>(tick_rate: Duration, build: F) -> io::Result<App>
where
    F: FnOnce(Sender<AppEvent>) -> App,
{
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let mut app = build(events.sender());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            // Redraw only; drives the entrance transition.
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(cols, rows)) => tracing::debug!(cols, rows, "Terminal resized"),
            Ok(AppEvent::ConsentRecorded) => app.on_consent_recorded(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(app)
}
