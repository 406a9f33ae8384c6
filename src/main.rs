use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use vectorpad::config::Config;
use vectorpad::images::FsImageStore;
use vectorpad::input::CanvasController;
use vectorpad::session::load_document;
use vectorpad::shell;

#[derive(Parser, Debug)]
#[command(name = "vectorpad")]
#[command(version, about = "Vector drawing documents: inspect, export, create")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a summary of a drawing document
    Info {
        /// Document file (.json, optionally gzip-compressed)
        file: PathBuf,
    },

    /// Render a drawing document to a PNG image
    Export {
        /// Document file to render
        file: PathBuf,

        /// Output PNG path (defaults to export_%Y-%m-%d_%H%M%S.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Canvas width in pixels (defaults to the configured export width)
        #[arg(long)]
        width: Option<u32>,

        /// Canvas height in pixels (defaults to the configured export height)
        #[arg(long)]
        height: Option<u32>,
    },

    /// Create a new, empty drawing document
    New {
        /// Path for the new document
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Command::Info { file } => {
            let document = load_document(&file)?;
            let mut controller = CanvasController::new(config.tool_settings());
            let report = controller.deserialize(&document, &FsImageStore);

            let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
            for (_, object) in controller.drawing.iter() {
                *counts.entry(object.kind()).or_insert(0) += 1;
            }

            println!("{}", file.display());
            println!("  objects: {}", controller.drawing.len());
            for (kind, count) in counts {
                println!("    {kind}: {count}");
            }
            if !report.skipped.is_empty() {
                println!("  skipped records: {}", report.skipped.len());
                for err in &report.skipped {
                    println!("    {err}");
                }
            }
            if !report.image_errors.is_empty() {
                println!("  image errors: {}", report.image_errors.len());
                for err in &report.image_errors {
                    println!("    {err}");
                }
            }
        }

        Command::Export {
            file,
            output,
            width,
            height,
        } => {
            let document = load_document(&file)?;
            let mut controller = CanvasController::new(config.tool_settings());
            controller.background = config.export_background();
            let report = controller.deserialize(&document, &FsImageStore);
            if !report.is_clean() {
                log::warn!(
                    "{} records skipped, {} image errors; exporting the rest",
                    report.skipped.len(),
                    report.image_errors.len()
                );
            }

            let output = output.unwrap_or_else(default_export_path);
            let width = width.unwrap_or(config.export.width);
            let height = height.unwrap_or(config.export.height);
            shell::export_png(&controller, &output, width, height, &FsImageStore)?;
            println!("wrote {}", output.display());
        }

        Command::New { file } => {
            let controller = CanvasController::new(config.tool_settings());
            shell::save_drawing(&controller, &file, config.compression_mode())?;
            println!("created {}", file.display());
        }
    }

    Ok(())
}

/// Timestamped fallback name for `export` when `--output` is omitted.
fn default_export_path() -> PathBuf {
    let now = chrono::Local::now();
    PathBuf::from(format!("{}.png", now.format("export_%Y-%m-%d_%H%M%S")))
}
