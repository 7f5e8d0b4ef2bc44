#![deny(unsafe_code)]
//! CLI binary for the wave-engine superposition system.
//!
//! Subcommands:
//! - `render` — compute animation frames and stream them to a textual sink
//! - `list` — print available preset scenes

mod error;
mod sink;

use clap::{Parser, Subcommand, ValueEnum};
use error::CliError;
use sink::{CsvSink, JsonLinesSink};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use wave_engine_core::{presets, Animator, FrameSink, Scene, WaveConfig};

#[derive(Parser)]
#[command(name = "wave-engine", about = "1D sine wave superposition CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// Output format for rendered frames.
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// One serialized frame object per line.
    Jsonl,
    /// frame,time,x,wave_1..wave_n,resultant rows.
    Csv,
}

#[derive(Subcommand)]
enum Command {
    /// Compute frames for a scene and stream them to a sink.
    Render {
        /// Preset scene name (see `list`).
        #[arg(long, conflicts_with_all = ["scene", "waves"])]
        preset: Option<String>,

        /// Path to a scene JSON file.
        #[arg(long, conflicts_with = "waves")]
        scene: Option<PathBuf>,

        /// Inline wave list as a JSON array.
        #[arg(long)]
        waves: Option<String>,

        /// Override the scene's frame count.
        #[arg(long)]
        frames: Option<usize>,

        /// Render a single frame index instead of the whole loop.
        #[arg(long)]
        frame: Option<usize>,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = Format::Jsonl)]
        format: Format,

        /// Output file path (stdout when omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List available preset scenes.
    List,
}

fn load_scene(
    preset: Option<String>,
    scene: Option<PathBuf>,
    waves: Option<String>,
) -> Result<Scene, CliError> {
    match (preset, scene, waves) {
        (Some(name), None, None) => Ok(presets::from_name(&name)?),
        (None, Some(path), None) => {
            let json = fs::read_to_string(&path)
                .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
            Ok(Scene::from_json(&json)?)
        }
        (None, None, Some(json)) => {
            let waves: Vec<WaveConfig> = serde_json::from_str(&json)
                .map_err(|e| CliError::Input(format!("invalid --waves JSON: {e}")))?;
            Ok(Scene::new(waves))
        }
        _ => Err(CliError::Input(
            "exactly one of --preset, --scene, or --waves is required".into(),
        )),
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let names = presets::list_names();
            if cli.json {
                let info = serde_json::json!({ "presets": names });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Presets:");
                for name in names {
                    println!("  {name}");
                }
            }
        }
        Command::Render {
            preset,
            scene,
            waves,
            frames,
            frame,
            format,
            output,
        } => {
            let mut scene = load_scene(preset, scene, waves)?;
            if let Some(frames) = frames {
                scene.frames = frames;
            }
            let animator = Animator::from_scene(&scene)?;

            let writer: Box<dyn Write> = match &output {
                Some(path) => Box::new(
                    fs::File::create(path)
                        .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?,
                ),
                None => Box::new(io::stdout().lock()),
            };
            let mut sink: Box<dyn FrameSink> = match format {
                Format::Jsonl => Box::new(JsonLinesSink::new(writer)),
                Format::Csv => Box::new(CsvSink::new(writer, animator.grid().positions())),
            };

            match frame {
                Some(index) => sink.accept(&animator.run_frame(index))?,
                None => animator.play(sink.as_mut())?,
            }

            if let Some(path) = &output {
                let rendered = frame.map_or(animator.frame_count(), |_| 1);
                eprintln!(
                    "rendered {rendered} frame(s) ({} waves, {} samples) -> {}",
                    animator.waves().len(),
                    animator.grid().len(),
                    path.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
