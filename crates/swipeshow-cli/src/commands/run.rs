use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::mpsc;
use tracing::info;

use swipeshow_core::{
    slider::SwipeDirection, AppConfig, ItemSource, LibrarySource, PlaceholderSource, SourceKind,
};
use swipeshow_tui::{
    app::{FetchRequest, Mode},
    event::{AppEvent, EventHandler, FetchResult, LoadResult},
    input::{handle_key_event, handle_mouse_event, Action},
    keymap::Keymap,
    load_theme,
    loader::{spawn_fetch, spawn_load},
    widgets::{PopupWidget, SliderWidget, StatusBarWidget},
    App,
};

pub async fn run(config: AppConfig) -> Result<()> {
    let config = Arc::new(config);
    match config.source.kind {
        SourceKind::Placeholders => {
            let source = PlaceholderSource::new(
                config.source.placeholder_prefix.clone(),
                config.source.placeholder_count,
            );
            run_slider(Arc::new(source), config).await
        }
        SourceKind::Library => {
            let source = LibrarySource::new(config.source.library_dir(), config.source.recursive);
            run_slider(Arc::new(source), config).await
        }
    }
}

/// Channels the background loaders report through
struct Channels<T> {
    load_tx: mpsc::UnboundedSender<LoadResult<T>>,
    fetch_tx: mpsc::UnboundedSender<FetchResult>,
}

async fn run_slider<S: ItemSource>(source: Arc<S>, config: Arc<AppConfig>) -> Result<()> {
    info!("Starting slider with {} ({})", source.describe(), config.slider.effect);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Swipeshow"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, source, config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn main_loop<B: Backend, S: ItemSource>(
    terminal: &mut Terminal<B>,
    source: Arc<S>,
    config: Arc<AppConfig>,
) -> Result<()> {
    let keymap = Keymap::from_config(&config.keymap);
    let theme = load_theme(&config.ui.theme);
    let mut app = App::new(source.clone(), config.clone(), theme);

    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);

    let (load_tx, mut load_rx) = mpsc::unbounded_channel::<LoadResult<S::Item>>();
    let (fetch_tx, mut fetch_rx) = mpsc::unbounded_channel::<FetchResult>();
    let channels = Channels { load_tx, fetch_tx };

    // Initial load
    app.is_loading = true;
    spawn_load(source.clone(), channels.load_tx.clone());

    // Checked at the end of each iteration to pick the next poll rate
    let mut needs_fast_update = false;

    loop {
        // Process any completed loads (non-blocking)
        while let Ok(result) = load_rx.try_recv() {
            let request = app.apply_load(result.load);
            start_fetch(&app, request, &channels);
        }

        while let Ok(result) = fetch_rx.try_recv() {
            app.apply_fetch(result.generation, result.image, Instant::now());
        }

        // Advance animations and fire a due removal
        let request = app.tick(Instant::now());
        start_fetch(&app, request, &channels);

        terminal.draw(|frame| {
            let size = frame.area();
            let readout_height = if config.ui.show_readout { 1 } else { 0 };

            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(readout_height),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(size);

            // Drag deltas and the dismiss threshold are in cells of this area
            app.slider
                .set_viewport(layout[1].width as f64, layout[1].height as f64);

            SliderWidget::render(frame, layout[1], &app, &keymap);
            if config.ui.show_readout {
                StatusBarWidget::render_readout(frame, layout[0], &app);
            }
            StatusBarWidget::render(frame, layout[2], &app, &keymap);

            if app.mode == Mode::Help {
                PopupWidget::render_help(frame, &keymap, &app.theme);
            }
        })?;

        // Handle events (faster polling while animating or dragging)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            let action = match event {
                AppEvent::Key(key) => handle_key_event(key, app.mode, &keymap),
                AppEvent::Mouse(mouse) => handle_mouse_event(mouse, app.mode),
                AppEvent::Resize(_, _) | AppEvent::Tick => Action::None,
            };
            handle_action(&mut app, action, &channels);
        }

        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            break;
        }
    }

    info!("Slider closed with {} items left", app.slider.len());
    Ok(())
}

fn handle_action<S: ItemSource>(app: &mut App<S>, action: Action, channels: &Channels<S::Item>) {
    let now = Instant::now();
    let request = match action {
        Action::Quit => {
            app.should_quit = true;
            None
        }
        Action::Reset => {
            if app.is_loading {
                app.set_status("Already loading...");
            } else {
                app.is_loading = true;
                app.set_status(format!("Reloading {}...", app.source.describe()));
                spawn_load(app.source.clone(), channels.load_tx.clone());
            }
            None
        }
        Action::SwipeUp => {
            let events = app.slider.swipe(SwipeDirection::Up, now);
            app.apply_events(&events)
        }
        Action::SwipeDown => {
            let events = app.slider.swipe(SwipeDirection::Down, now);
            app.apply_events(&events)
        }
        Action::Next => app.browse(true, now),
        Action::Prev => app.browse(false, now),
        Action::OpenExternal => {
            app.open_external();
            None
        }
        Action::ToggleHelp => {
            app.toggle_help();
            None
        }
        Action::ExitMode => {
            app.mode = Mode::Normal;
            None
        }
        Action::DragStart(row) => app.start_drag(row, now),
        Action::Drag(row) => app.drag_to(row, now),
        Action::DragEnd(row) => app.end_drag(row, now),
        Action::None => None,
    };
    start_fetch(app, request, channels);
}

fn start_fetch<S: ItemSource>(
    app: &App<S>,
    request: Option<FetchRequest<S::Item>>,
    channels: &Channels<S::Item>,
) {
    if let Some(request) = request {
        spawn_fetch(app.source.clone(), request, channels.fetch_tx.clone());
    }
}
