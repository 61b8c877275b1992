use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event as CEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tokio::sync::mpsc;

use cadencia::config::{get_config, initialize_config};
use cadencia::key_handlers::handle_key;
use cadencia::{logging, ui, App, AppState};

enum Event {
    Input(CEvent),
    Tick,
}

#[tokio::main]
async fn main() -> Result<()> {
    initialize_config()?;
    let _logger = logging::init()?;
    log::info!("cadencia starting");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new();
    let res = run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("cadencia shutting down");
    res
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);
    let tick_rate = Duration::from_millis(get_config().tick_ms);

    // Input reader: forwards terminal events and emits a tick on a fixed
    // cadence so animations and the reply queue advance without input.
    tokio::spawn(async move {
        let mut last_tick = Instant::now();
        loop {
            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(ev) = event::read() {
                    if tx.send(Event::Input(ev)).await.is_err() {
                        return;
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.send(Event::Tick).await.is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        match rx.recv().await {
            Some(Event::Input(CEvent::Key(key))) => {
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key);
                }
            }
            Some(Event::Input(_)) => {}
            Some(Event::Tick) => app.on_tick(Instant::now()),
            None => break,
        }

        if app.state == AppState::Quit {
            break;
        }
    }

    Ok(())
}
