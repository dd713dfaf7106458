//! Cellplot - plot delimited text data in the terminal.

use anyhow::{Context, Result};
use cellplot::app::{App, Theme};
use cellplot::data::DataReader;
use cellplot::{ui, ChartKind, Labels, Marker, Plot, PlotConfig, SeriesSet};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MarkerArg {
    /// One glyph per cell
    Dot,
    /// 2x4 braille dots per cell
    Braille,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

#[derive(Parser, Debug)]
#[command(name = "cellplot")]
#[command(about = "Plot columns of numbers in the terminal", long_about = None)]
struct Args {
    /// Data file with one series per column; `-` or nothing reads stdin
    file: Option<PathBuf>,

    /// Scatter plot of the first column (x) against the second (y)
    #[arg(long)]
    scatter: bool,

    /// Marker resolution
    #[arg(long, value_enum, default_value = "braille")]
    marker: MarkerArg,

    /// Cell columns between consecutive samples
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    scale: u16,

    /// Hide axes and tick labels
    #[arg(long)]
    no_axes: bool,

    /// Comma-separated X tick labels
    #[arg(long, value_delimiter = ',')]
    labels: Vec<String>,

    /// Plot title (defaults to the file name)
    #[arg(long)]
    title: Option<String>,

    /// Color theme
    #[arg(long, value_enum, default_value = "dark")]
    theme: ThemeArg,

    /// Render once at WIDTHxHEIGHT to stdout instead of opening the viewer
    #[arg(long, value_name = "WIDTHxHEIGHT", value_parser = parse_size)]
    print: Option<(u16, u16)>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn parse_size(s: &str) -> std::result::Result<(u16, u16), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
    let w = w.trim().parse().map_err(|e| format!("bad width '{}': {}", w, e))?;
    let h = h.trim().parse().map_err(|e| format!("bad height '{}': {}", h, e))?;
    Ok((w, h))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Cellplot");
    }

    let file = args.file.clone().filter(|p| p.as_os_str() != "-");
    let data = match load(file.as_ref()) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    let config = PlotConfig {
        kind: if args.scatter {
            ChartKind::Scatter
        } else {
            ChartKind::Line
        },
        marker: match args.marker {
            MarkerArg::Dot => Marker::Dot,
            MarkerArg::Braille => Marker::Braille,
        },
        horizontal_scale: args.scale,
        show_axes: !args.no_axes,
        ..PlotConfig::default()
    };
    let plot = Plot::new(config).data(data).labels(Labels::new(args.labels.clone()));
    let theme = match args.theme {
        ThemeArg::Dark => Theme::GruvboxDark,
        ThemeArg::Light => Theme::GruvboxLight,
    };
    let title = args.title.clone().unwrap_or_else(|| {
        file.as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "stdin".to_string())
    });
    let mut app = App::new(plot, file, title, theme);

    if let Some((width, height)) = args.print {
        match ui::render_to_text(&mut app.plot, width, height) {
            Ok(text) => print!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(2);
            }
        }
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Cellplot exited");
    }

    Ok(())
}

fn load(file: Option<&PathBuf>) -> Result<SeriesSet> {
    match file {
        Some(path) => DataReader::read_file(path)
            .with_context(|| format!("Could not load {}", path.display())),
        None => DataReader::read_from(io::stdin().lock()).context("Could not read stdin"),
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q'))
                    | (KeyModifiers::NONE, KeyCode::Esc)
                    | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),

                    // Plot settings
                    (KeyModifiers::NONE, KeyCode::Char('s')) => app.toggle_kind(),
                    (KeyModifiers::NONE, KeyCode::Char('m')) => app.toggle_marker(),
                    (KeyModifiers::NONE, KeyCode::Char('a')) => app.toggle_axes(),
                    (KeyModifiers::NONE, KeyCode::Char('+'))
                    | (KeyModifiers::NONE, KeyCode::Char('='))
                    | (KeyModifiers::SHIFT, KeyCode::Char('+')) => app.increase_scale(),
                    (KeyModifiers::NONE, KeyCode::Char('-')) => app.decrease_scale(),

                    // Data
                    (KeyModifiers::NONE, KeyCode::Char('b')) => app.reset_bounds(),
                    (KeyModifiers::NONE, KeyCode::Char('r')) => app.reload(),

                    // Theme
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),

                    _ => {}
                }
            }
        }
    }
}
