//! KeiX - keyboard switch tester and typing speed trainer
//!
//! Physical key state comes from the device listener; terminal key events
//! drive navigation and the typing exercise.

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableFocusChange, EnableFocusChange, Event, KeyCode as CtKeyCode,
        KeyEventKind as CtKeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::Style,
    symbols::border,
    widgets::{Block, Borders},
    Terminal,
};
use std::fs::{self, File};
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};

use keix::{
    config::Config,
    keyboard::{KeyEvent, KeyboardListener},
    ui::{
        App, AppState, AppView, HelpPanel, KeyboardVisual, StatusBar, TabBar, TesterStats,
        ThemeColors, TypingPanel, KEYBOARD_HEIGHT,
    },
};

/// Send log output to a file so it doesn't scribble over the TUI
fn init_logging() -> Result<()> {
    let dir = dirs::cache_dir()
        .context("no cache directory")?
        .join("keix");
    fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
    let file = File::create(dir.join("keix.log")).context("creating log file")?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

fn main() -> Result<()> {
    if let Err(e) = init_logging() {
        eprintln!("logging disabled: {:#}", e);
    }

    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let flag = Arc::clone(&interrupted);
        ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
            .context("installing signal handler")?;
    }

    let config = Config::load_or_default();
    let mut app = App::new(config);
    info!("starting with passage corpus of {}", app.session.corpus().len());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, &interrupted);

    // Cleanup terminal, even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableFocusChange, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result?;

    println!("\nKeiX session complete.");
    println!("Keys tested: {}", app.key_state.tested.len());
    if let Some(wpm) = app.session.final_wpm() {
        println!("Last typing result: {} WPM", wpm);
    }
    println!("Session duration: {}", app.elapsed_formatted());

    Ok(())
}

fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    interrupted: &AtomicBool,
) -> Result<()> {
    let (event_tx, event_rx) = mpsc::channel::<KeyEvent>();
    let mut listener = KeyboardListener::new(event_tx);
    let colors = ThemeColors::from_theme(app.config.ui.theme);
    let tick_rate = app.config.refresh_interval();

    loop {
        listener.poll();
        while let Ok(key_event) = event_rx.try_recv() {
            app.process_event(&key_event);
        }

        terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Tab bar
                    Constraint::Min(8),    // Main content
                    Constraint::Length(1), // Status bar
                ])
                .split(frame.area());

            let tab_names: Vec<&str> = AppView::all().iter().map(|v| v.name()).collect();
            frame.render_widget(TabBar::new(&tab_names, app.view.index(), colors), chunks[0]);

            match app.view {
                AppView::Tester => {
                    let parts = Layout::default()
                        .direction(Direction::Vertical)
                        .constraints([
                            Constraint::Length(KEYBOARD_HEIGHT + 2),
                            Constraint::Length(1),
                            Constraint::Min(0),
                        ])
                        .split(chunks[1]);
                    let kb_block = Block::default()
                        .title(" ⌨ Keyboard ")
                        .borders(Borders::ALL)
                        .border_set(border::ROUNDED)
                        .border_style(Style::default().fg(colors.dim));
                    let kb_inner = kb_block.inner(parts[0]);
                    frame.render_widget(kb_block, parts[0]);
                    frame.render_widget(KeyboardVisual::new(&app.key_state, colors), kb_inner);
                    frame.render_widget(TesterStats::new(&app.key_state, colors), parts[1]);
                }
                AppView::Typing => {
                    frame.render_widget(TypingPanel::new(&app.session, colors), chunks[1]);
                }
                AppView::Help => frame.render_widget(HelpPanel, chunks[1]),
            }

            let elapsed = app.elapsed_formatted();
            let status = StatusBar::new(app.view.name(), &elapsed, app.total_events)
                .message(app.get_status());
            frame.render_widget(status, chunks[2]);
        })?;

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::FocusLost => app.focus_lost(),
                Event::FocusGained => app.focus_gained(),
                Event::Key(key) if key.kind == CtKeyEventKind::Press => {
                    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                    match key.code {
                        CtKeyCode::Char('q') | CtKeyCode::Char('c') if ctrl => app.quit(),
                        CtKeyCode::Char('r') if ctrl => match app.view {
                            AppView::Typing => app.restart_typing(),
                            _ => app.reset_keys(),
                        },
                        CtKeyCode::Char('x') if ctrl => app.release_all_keys(),
                        CtKeyCode::BackTab => app.prev_view(),
                        CtKeyCode::Tab => app.next_view(),
                        CtKeyCode::F(1) => app.set_view(AppView::Help),
                        CtKeyCode::Enter
                            if app.view == AppView::Typing && app.session.is_finished() =>
                        {
                            app.restart_typing()
                        }
                        CtKeyCode::Backspace => app.backspace(),
                        CtKeyCode::Char(c) if !ctrl => app.type_char(c),
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        if app.take_resync() {
            listener.resync();
        }

        if interrupted.load(Ordering::SeqCst) {
            app.quit();
        }

        if app.state == AppState::Quitting {
            return Ok(());
        }
    }
}
