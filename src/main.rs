use anyhow::{Context, Result};
use clap::Parser;
use fretboard::cli::{parse_tuning, Cli};
use fretboard::{config, render};
use log::debug;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let engine = config::load_engine(cli.notes.as_deref(), cli.patterns.as_deref())?;

    if cli.list {
        print!("{}", render::render_library(&engine));
        return Ok(());
    }

    let query = cli.query()?;
    let tuning = parse_tuning(&cli.tuning).context("Invalid tuning")?;
    debug!("Tuning {} with {} frets", tuning, cli.frets);

    let diagram = engine
        .diagram(query.root, query.category, query.name, &tuning, cli.frets)
        .with_context(|| {
            format!(
                "Could not build {} {} {}",
                query.root, query.name, query.category
            )
        })?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&diagram)?);
    } else {
        print!("{}", render::render(&diagram));
    }

    Ok(())
}
