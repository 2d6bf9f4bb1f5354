// Copyright (C) 2026 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//
use std::error::Error;
use std::io::BufRead;
use std::path::PathBuf;
use std::thread;

use clap::{crate_version, Parser, Subcommand};
use tracing::info;

use stripshow::config::Config;
use stripshow::pattern::Pattern;
use stripshow::playsync::CancelHandle;
use stripshow::sequencer::Sequencer;
use stripshow::strip::terminal::TerminalStrip;

#[derive(Parser)]
#[clap(
    author = "Michael Wilson",
    version = crate_version!(),
    about = "An animation engine for addressable RGB pixel strips."
)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lists the built-in patterns.
    Patterns {},
    /// Plays a pattern on a terminal-rendered strip until input arrives on
    /// stdin (press Enter to stop).
    Run {
        /// The path to a YAML config file.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// The name of the pattern to play. Overrides the config file.
        #[arg(short, long)]
        pattern: Option<String>,
        /// The number of pixels on the strip. Overrides the config file.
        #[arg(long)]
        pixels: Option<usize>,
    },
}

/// Spawns a thread that cancels the run as soon as anything arrives on
/// stdin, mirroring the serial-input break the strip firmware used.
fn watch_stdin(cancel: CancelHandle) {
    thread::spawn(move || {
        let mut line = String::new();
        // Any input, or stdin closing, stops the show.
        let _ = std::io::stdin().lock().read_line(&mut line);
        info!("Input received, stopping");
        cancel.cancel();
    });
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Patterns {} => {
            println!("Patterns:");
            for name in Pattern::NAMES {
                println!("  {}", name);
            }
        }
        Commands::Run {
            config,
            pattern,
            pixels,
        } => {
            let config = match config {
                Some(path) => Config::load(&path)?,
                None => Config::default(),
            };
            let pixels = pixels.unwrap_or_else(|| config.pixels());
            let name = pattern.unwrap_or_else(|| config.pattern().to_string());

            let mut pattern = Pattern::by_name(&name, pixels)?;
            let mut strip = TerminalStrip::new(pixels);
            let cancel = CancelHandle::new();
            watch_stdin(cancel.clone());

            let startup_delay = config.startup_delay()?;
            if !startup_delay.is_zero() {
                info!("Waiting {:?} before starting", startup_delay);
                spin_sleep::sleep(startup_delay);
            }

            info!("Playing pattern '{}' on {} pixels", name, pixels);
            Sequencer::new(&mut strip).run(&mut pattern, &cancel);
            println!();
        }
    }

    Ok(())
}
