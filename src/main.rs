use anyhow::{Context, bail};
use crossterm::{
    cursor::{Hide, Show as ShowCursor},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use skyburst::constants::{DEFAULT_FPS, DEFAULT_SCALE};
use skyburst::input::Pointer;
use skyburst::{FrameScheduler, Presenter, Settings, Show};
use std::env;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

struct Options {
    config: Option<PathBuf>,
    bg_color: (u8, u8, u8),
    scale: f32,
    fps: u32,
    log_file: Option<PathBuf>,
    auto_launch: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            config: None,
            bg_color: (0, 0, 0),
            scale: DEFAULT_SCALE,
            fps: DEFAULT_FPS,
            log_file: None,
            auto_launch: false,
        }
    }
}

fn print_usage() {
    eprintln!("skyburst - click to launch fireworks over a drifting starfield");
    eprintln!();
    eprintln!("Usage: skyburst [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE      Load settings from a TOML file");
    eprintln!("  --bg-color RRGGBB  Set background color as hex (e.g., --bg-color 1a1b26)");
    eprintln!("  --scale N          Logical units per pixel (default {DEFAULT_SCALE})");
    eprintln!("  --fps N            Target frame rate (default {DEFAULT_FPS})");
    eprintln!("  --log FILE         Write logs to FILE (filter with RUST_LOG)");
    eprintln!("  --auto             Launch rockets on their own");
    eprintln!();
    eprintln!("Controls:");
    eprintln!("  click / drag   launch rockets");
    eprintln!("  t s c          toggle trails, starfield, constellations");
    eprintln!("  a b            toggle auto launch, rockets vs. direct bursts");
    eprintln!("  + -            more / fewer particles per burst");
    eprintln!("  r              reset settings");
    eprintln!();
    eprintln!("Press 'q', ESC, or Ctrl+C to exit");
}

fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

/// `Ok(None)` means help was printed and the program should exit.
fn parse_args(args: &[String]) -> anyhow::Result<Option<Options>> {
    let mut options = Options::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .with_context(|| format!("{flag} requires a value"))
        };
        match arg.as_str() {
            "--config" => options.config = Some(PathBuf::from(value("--config")?)),
            "--log" => options.log_file = Some(PathBuf::from(value("--log")?)),
            "--bg-color" => {
                let hex = value("--bg-color")?;
                options.bg_color = parse_hex_color(&hex).with_context(|| {
                    format!("invalid hex color: {hex} (expected RRGGBB, e.g. 1a1b26)")
                })?;
            }
            "--scale" => {
                let scale: f32 = value("--scale")?.parse().context("--scale expects a number")?;
                if scale.is_nan() || scale <= 0.0 {
                    bail!("--scale must be positive");
                }
                options.scale = scale;
            }
            "--fps" => options.fps = value("--fps")?.parse().context("--fps expects an integer")?,
            "--auto" => options.auto_launch = true,
            "help" | "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            other => bail!("unknown option: {other}"),
        }
    }
    Ok(Some(options))
}

fn init_logging(path: Option<&PathBuf>) -> anyhow::Result<()> {
    // stderr belongs to the alternate screen, so logs only go to a file
    let Some(path) = path else {
        return Ok(());
    };
    let file = std::fs::File::create(path)
        .with_context(|| format!("could not create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('q')
        || key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn apply_key(settings: &mut Settings, defaults: &Settings, code: KeyCode) {
    match code {
        KeyCode::Char('r') => *settings = defaults.clone(),
        KeyCode::Char('t') => settings.trail_effect = !settings.trail_effect,
        KeyCode::Char('s') => settings.starfield = !settings.starfield,
        KeyCode::Char('c') => settings.show_constellations = !settings.show_constellations,
        KeyCode::Char('a') => settings.auto_launch = !settings.auto_launch,
        KeyCode::Char('b') => settings.launch_rockets = !settings.launch_rockets,
        KeyCode::Char('+') | KeyCode::Char('=') => settings.adjust_particle_count(10),
        KeyCode::Char('-') | KeyCode::Char('_') => settings.adjust_particle_count(-10),
        _ => return,
    }
    log::debug!("settings now {settings:?}");
}

fn run<W: Write>(out: &mut W, options: &Options, defaults: Settings) -> anyhow::Result<()> {
    let mut settings = defaults.clone();
    let mut show = Show::new(options.scale);
    let mut pointer = Pointer::new(options.scale);
    let mut presenter = Presenter::new(options.bg_color);

    let (cols, rows) = terminal::size()?;
    show.resize(cols as usize, rows as usize * 2);

    let mut scheduler = FrameScheduler::new(options.fps, Instant::now());
    while scheduler.is_running() {
        let timeout = scheduler.time_until_next(Instant::now()).unwrap_or_default();
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_quit(&key) => scheduler.cancel(),
                Event::Key(key) => apply_key(&mut settings, &defaults, key.code),
                Event::Mouse(mouse) => {
                    if let Some((x, y)) = pointer.handle(&mouse, Instant::now()) {
                        show.request_spawn(x, y);
                    }
                }
                Event::Resize(cols, rows) => {
                    show.resize(cols as usize, rows as usize * 2);
                    execute!(out, Clear(ClearType::All))?;
                }
                _ => {}
            }
        }

        if let Some(elapsed) = scheduler.poll(Instant::now()) {
            if show.frame(&settings, elapsed) {
                if let Some(surface) = show.surface() {
                    presenter.present(surface, out)?;
                }
            }
        }
    }
    Ok(())
}

/// Raw mode plus the alternate screen, undone on drop whichever way `main` exits.
struct TerminalSession;

impl TerminalSession {
    fn enter<W: Write>(out: &mut W) -> anyhow::Result<Self> {
        terminal::enable_raw_mode()?;
        // built before the screen switch so a failure below still restores raw mode
        let session = Self;
        execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All), EnableMouseCapture)?;
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(stdout(), ShowCursor, LeaveAlternateScreen, DisableMouseCapture);
        let _ = terminal::disable_raw_mode();
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => return Ok(()),
        Err(err) => {
            eprintln!("{err:#}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };
    init_logging(options.log_file.as_ref())?;

    let mut defaults = match &options.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    defaults.auto_launch |= options.auto_launch;

    let mut out = BufWriter::with_capacity(1024 * 64, stdout());
    let session = TerminalSession::enter(&mut out)?;

    let result = run(&mut out, &options, defaults);

    // flush whatever is still buffered before leaving the alternate screen
    let flushed = out.flush();
    drop(session);
    result?;
    flushed?;
    Ok(())
}
