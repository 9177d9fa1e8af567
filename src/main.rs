use anyhow::Context;
use crossterm::{
    event::{Event, read},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::path::Path;
use wilx_nano::cli;
use wilx_nano::command::Effect;
use wilx_nano::config::{NanoConfig, Settings};
use wilx_nano::editor::Editor;
use wilx_nano::input::{KeyDriver, KeyResult};
use wilx_nano::save_log::FileSaveLog;
use wilx_nano::ui::TuiRenderer;

/// Application entry point: resolve settings from the command line and the
/// config file, open the target file, run the editor in the alternate screen
/// and restore the terminal on exit, even when the event loop fails.
fn main() -> anyhow::Result<()> {
    let cli_args = cli::parse_args();
    let config = NanoConfig::load(cli_args.config.as_deref()).context("loading configuration")?;
    let settings = Settings::resolve(&cli_args, &config);

    init_logging(settings.log_file.as_deref())?;

    let mut editor = Editor::open(&settings.file)
        .with_context(|| format!("opening {}", settings.file.display()))?
        .with_undo_capacity(settings.undo_limit);
    if let Some(history_file) = &settings.history_file {
        editor = editor.with_save_log(FileSaveLog::new(history_file));
    }

    // Enable raw mode and enter alternate screen
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;

    let result = run(&mut editor, &settings);

    // Leave alternate screen and disable raw mode
    crossterm::execute!(stdout, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

fn run(editor: &mut Editor, settings: &Settings) -> anyhow::Result<()> {
    let mut renderer = TuiRenderer::new(settings.line_numbers)?;
    let mut driver = KeyDriver::new();

    let (width, height) = crossterm::terminal::size()?;
    let (rows, cols) = renderer.text_area_size(width, height);
    editor.resize(rows, cols);

    let mut needs_redraw = true;
    loop {
        if needs_redraw {
            renderer.draw(&editor.view(), driver.prompt_line().as_deref())?;
            needs_redraw = false;
        }

        // The only blocking point: wait for the next terminal event
        match read()? {
            Event::Key(key_event) => match driver.process_key(key_event) {
                KeyResult::Command(cmd) => {
                    let effect = editor.execute_command(cmd);
                    if effect == Effect::Quit {
                        break;
                    }
                    needs_redraw = effect.needs_redraw();
                }
                KeyResult::Pending => needs_redraw = true,
                KeyResult::Ignored => {}
            },
            Event::Resize(width, height) => {
                let (rows, cols) = renderer.text_area_size(width, height);
                editor.resize(rows, cols);
                needs_redraw = true;
            }
            _ => {}
        }
    }
    Ok(())
}

/// Log to `log_file` when one is configured. The terminal belongs to the
/// editor, so without a file logging stays off unless RUST_LOG asks for it.
fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            builder
                .filter_level(LevelFilter::Info)
                .target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(LevelFilter::Off);
        }
    }
    // RUST_LOG overrides the default level
    builder.parse_default_env();
    builder.try_init()?;
    Ok(())
}
