use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;

/// Runs the game until the player quits.
pub fn run(config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal(config.ui.mouse)?;
    let poll_interval = config.ui.tick_rate();
    let mut app = App::new(config);
    let events = EventHandler::new(poll_interval);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!(order = ?app.game().order(), mouse = config.ui.mouse, "game started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(poll_interval) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Error(err)) => {
                tracing::error!(error = %err, "terminal input failed");
                return Err(err);
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!(moves = app.game().history().len() - 1, "game closed");
    drop(guard);
    Ok(())
}
