use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use tilesnap::designer::{LayoutStore, Renderer, SvgRenderer, TileSession};
use tilesnap::{init_logging, interaction_config, load_script, open_store, replay, Config};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "tilesnap", version, long_version = LONG_VERSION)]
#[command(about = "Drag polygon tiles and snap them edge to edge")]
struct Cli {
    /// Config file (.toml or .json); defaults to the platform config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON pointer script against the stored layout
    Replay {
        script: PathBuf,
        /// Write the final frame as SVG
        #[arg(long)]
        svg: Option<PathBuf>,
        /// Leave the stored layout untouched
        #[arg(long)]
        no_save: bool,
    },
    /// Render the stored layout to SVG
    Render {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 1024)]
        width: u32,
        #[arg(long, default_value_t = 900)]
        height: u32,
    },
    /// List the stored shapes
    List,
    /// Remove the stored layout
    Clear,
}

fn write_svg(
    session: &mut TileSession,
    path: &Path,
    width: u32,
    height: u32,
) -> anyhow::Result<()> {
    let mut renderer = SvgRenderer::new(width, height);
    if !session.paint(&mut renderer) {
        renderer.render(&session.controller().render_frame());
    }
    std::fs::write(path, renderer.document())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let config =
        Config::load_or_default(cli.config.as_deref()).context("Failed to load config")?;
    let interaction = interaction_config(&config.interaction);
    let mut store = open_store(&config.storage)?;

    match cli.command {
        Command::Replay {
            script,
            svg,
            no_save,
        } => {
            let events = load_script(&script)?;
            let mut session = TileSession::open(interaction, Box::new(store))?;
            session.set_persist(!no_save);

            let summary = replay(&mut session, &events)?;
            println!(
                "{} events, {} drags, {} snaps, {} added, {} removed, {} live shapes",
                summary.events,
                summary.drags,
                summary.snaps,
                summary.added,
                summary.removed,
                session.controller().shapes().len()
            );

            if let Some(path) = svg {
                write_svg(&mut session, &path, 1024, 900)?;
            }
        }
        Command::Render { out, width, height } => {
            let mut session = TileSession::open(interaction, Box::new(store))?;
            write_svg(&mut session, &out, width, height)?;
        }
        Command::List => {
            let shapes = store.load().context("Failed to load layout")?;
            for shape in &shapes {
                println!(
                    "{}\t{}\t{:.2}\t{:.2}\t{:.4}",
                    shape.id(),
                    shape.kind(),
                    shape.position().x,
                    shape.position().y,
                    shape.rotation()
                );
            }
            println!("{} shapes in {}", shapes.len(), store.path().display());
        }
        Command::Clear => {
            store.clear().context("Failed to clear layout")?;
            println!("Cleared {}", store.path().display());
        }
    }

    Ok(())
}
