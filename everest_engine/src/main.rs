#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Everest **
//! Terminal host for the Mt. Everest climbing adventure.

use everest_engine::loader::help::load_help_commands;
use everest_engine::loader::load_world_from_path;
use everest_engine::style::GameStyle;
use everest_engine::{EVEREST_VERSION, EverestGame, OutputLine};

use anyhow::{Context, Result};
use log::{info, warn};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use textwrap::{fill, termwidth};

use std::env;
use std::path::PathBuf;

/// Environment variable naming an alternate world TOML file.
const WORLD_ENV: &str = "EVEREST_WORLD";

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: Everest v{EVEREST_VERSION}, loading world...");
    let mut game = build_game()?;
    info!("Everest world loaded successfully.");

    // clear the screen
    print!("\x1B[2J\x1B[H");
    render(&game.start());

    let mut editor = DefaultEditor::new().context("while starting line editor")?;
    let prompt = "\n>> ".prompt_style().to_string();
    loop {
        let line = match editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("while reading input"),
        };
        if let Err(e) = editor.add_history_entry(line.as_str()) {
            warn!("could not record history: {e}");
        }
        if matches!(line.trim().to_lowercase().as_str(), "quit" | "exit") {
            break;
        }

        let turn = game.handle_input(&line);
        render(&turn.lines);

        if turn.terminated {
            match editor.readline(&"\nClimb again? [y/N] ".prompt_style().to_string()) {
                Ok(answer) if answer.trim().eq_ignore_ascii_case("y") => {
                    game.reset();
                    render(&game.start());
                },
                _ => break,
            }
        }
    }
    println!("\nFarewell, climber.");
    Ok(())
}

/// Stock world, or the world file named by `EVEREST_WORLD`.
fn build_game() -> Result<EverestGame> {
    match env::var_os(WORLD_ENV).map(PathBuf::from) {
        Some(path) => {
            info!("loading world from '{}'", path.display());
            let world = load_world_from_path(&path)?;
            Ok(EverestGame::from_world(world, load_help_commands()?))
        },
        None => EverestGame::new(),
    }
}

/// Print each line wrapped to the terminal width, styled by its tag.
fn render(lines: &[OutputLine]) {
    let width = termwidth();
    println!();
    for line in lines {
        let wrapped = fill(&line.text, width);
        println!("{}", everest_engine::style::paint(line.style, &wrapped));
    }
}
