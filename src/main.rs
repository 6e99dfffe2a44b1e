use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
        MouseButton, MouseEventKind, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style, terminal, ExecutableCommand,
};
use log::{info, warn};

use alien_invasion::display::{self, Viewport};
use alien_invasion::input::KeyTracker;
use alien_invasion::session::{Flow, Session, Signal};
use alien_invasion::settings::Settings;

/// Alien Invasion: shoot down the fleet before it reaches the ground.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// INI file overriding the default game settings.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file. The terminal is taken over by the game, so
    /// without it logs only make sense with stderr redirected.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Simulation ticks per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let default_filter = if log_file.is_some() { "info" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn game_loop<W: Write>(
    out: &mut W,
    session: &mut Session,
    rx: &mpsc::Receiver<Event>,
    frame_time: Duration,
) -> Result<()> {
    let mut keys = KeyTracker::new();
    let mut frame: u64 = 0;
    let (cols, rows) = terminal::size().context("cannot read terminal size")?;
    let mut view = Viewport::new(
        cols,
        rows,
        session.settings.screen_width,
        session.settings.screen_height,
    );

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        let mut signals = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(key) => signals.extend(keys.record(&key, frame)),
                Event::Mouse(mouse) => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        if let Some((x, y)) = view.to_world(mouse.column, mouse.row) {
                            signals.push(Signal::Click { x, y });
                        }
                    }
                }
                Event::Resize(cols, rows) => {
                    view.cols = cols;
                    view.rows = rows;
                }
                _ => {}
            }
        }
        signals.extend(keys.poll(frame));

        for signal in signals {
            if session.handle(signal) == Flow::Quit {
                info!("quit requested");
                return Ok(());
            }
        }

        let snapshot = session.tick();
        display::render(out, &snapshot, &view).context("render failed")?;

        if let Some(pause) = session.take_pause() {
            thread::sleep(pause);
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let settings = match &cli.config {
        Some(path) => Settings::load_from_file(path)
            .with_context(|| format!("bad config {}", path.display()))?,
        None => Settings::new(),
    };
    let mut session = Session::new(settings).context("invalid settings")?;
    let frame_time = Duration::from_secs(1) / cli.fps.max(1);

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("cannot enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Release/repeat events where the terminal supports them; the key
    // tracker copes without.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    if !keyboard_enhanced {
        warn!("terminal has no key release events, falling back to hold timing");
    }

    // Blocking reads live on their own thread so the frame loop never waits
    // on input.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = game_loop(&mut out, &mut session, &rx, frame_time);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(style::ResetColor);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("exiting, high score {}", session.stats.high_score);
    result
}
