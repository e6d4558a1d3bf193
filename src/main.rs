use aac_mappings::error::Result;
use aac_mappings::{Activation, NavigationMappings};
use log::{error, info};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const USAGE: &str = "usage: aac_board <mappings-file>";

fn main() -> ExitCode {
    colog::default_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let Some(path) = std::env::args().nth(1) else {
        error!("{USAGE}");
        return ExitCode::FAILURE;
    };
    let mut board = match NavigationMappings::load(&path) {
        Ok(board) => board,
        Err(err) => {
            error!("{path}: {err}");
            return ExitCode::FAILURE;
        }
    };
    info!("{path}: {} categories", board.home().len());

    let mut out = io::stdout().lock();
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!("stdin: {err}");
                return ExitCode::FAILURE;
            }
        };
        match run_command(&mut board, line.trim(), &mut out) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => error!("{err}"),
        }
    }
    ExitCode::SUCCESS
}

/// Runs one line of input. Returns `false` when the session should end.
///
/// A bare key taps that tile; `:home`, `:keys`, `:add <key> <text>`,
/// `:save <file>` and `:quit` drive the board.
fn run_command(board: &mut NavigationMappings, command: &str, out: &mut impl Write) -> Result<bool> {
    match command.split_once(' ').unwrap_or((command, "")) {
        ("", _) => {}
        (":quit", _) => return Ok(false),
        (":home", _) => board.reset(),
        (":keys", _) => writeln!(out, "{}", board.visible_keys()?.join(" "))?,
        (":add", rest) => {
            let (key, text) = rest.split_once(' ').unwrap_or((rest, ""));
            board.add(key, text)?;
        }
        (":save", file) => {
            board.write_to_file(file)?;
            info!("saved {file}");
        }
        (key, _) => match board.activate(key)? {
            Activation::EnteredCategory { caption } => writeln!(out, "open: {caption}")?,
            Activation::Speak { text } => writeln!(out, "speak: {text}")?,
        },
    }
    Ok(true)
}
