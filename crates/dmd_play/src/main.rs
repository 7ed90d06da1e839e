#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use std::{
    fs,
    io::{Write, stdout},
    path::PathBuf,
    thread,
    time::Duration,
};

use clap::{Parser, Subcommand};
use dmd_engine::{ClockAsset, load_document, save_document, suggested_save_name};
use dmd_engine_edit::{EditState, PlaybackAction};

mod render;

#[derive(Parser)]
#[command(version, about = "Plays Run-DMD animation files in the terminal.")]
pub struct Cli {
    #[arg(help = "Don't composite the built-in clock asset into the frames.", long, default_value_t = false)]
    no_clock: bool,

    #[arg(help = "Animation file to play/show.", required = true)]
    path: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    #[command(about = "Plays the animation (default)")]
    Play,

    #[command(about = "Show a specific frame of the animation")]
    ShowFrame { frame: usize },

    #[command(about = "Renumber the frames and write a '-new' copy next to the original")]
    SaveCopy,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let _logger = flexi_logger::Logger::try_with_env_or_str("warn")?.start()?;
    log::info!("Starting DMD Play {}", env!("CARGO_PKG_VERSION"));

    let Some(path) = args.path.clone() else {
        return Ok(());
    };
    let text = fs::read_to_string(&path)?;
    let document = load_document(&text)?;

    let clock = if args.no_clock { None } else { Some(ClockAsset::builtin()) };
    let mut out = stdout();

    match args.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let mut state = EditState::from_document(document)?;
            let (_generation, schedule) = state.begin_playback();

            // clear screen, hide the caret for the run
            out.write_all(b"\x1b[2J\x1b[?25l")?;
            out.flush()?;
            let mut elapsed = 0u64;
            for step in &schedule.steps {
                if step.at_ms > elapsed {
                    thread::sleep(Duration::from_millis(step.at_ms - elapsed));
                    elapsed = step.at_ms;
                }
                match step.action {
                    PlaybackAction::ShowFrame(frame_idx) => {
                        render::render_frame(&mut out, state.document(), frame_idx, clock)?;
                    }
                    PlaybackAction::ClockWipe { row_offset } => {
                        render::render_clock_wipe(&mut out, ClockAsset::builtin(), row_offset)?;
                    }
                }
            }
            out.write_all(b"\x1b[?25h")?;
            out.flush()?;
        }
        Commands::ShowFrame { frame } => {
            render::render_frame(&mut out, &document, frame, clock)?;
        }
        Commands::SaveCopy => {
            let mut document = document;
            let saved = save_document(&mut document)?;
            let file_name = path.file_name().map_or_else(|| "animation.json".to_string(), |n| n.to_string_lossy().to_string());
            let target = path.with_file_name(suggested_save_name(&file_name));
            fs::write(&target, saved)?;
            println!("wrote {}", target.display());
        }
    }

    Ok(())
}
