use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use scaffolder::cli::{Cli, Command};
use scaffolder::config::Config;
use scaffolder::emitter::{self, EmitOptions};
use scaffolder::templates::{self, TemplateLoader};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("scaffolder starting");

    let loader = TemplateLoader::with_override_dir(config.template_dir.clone());

    match cli.command {
        Command::List => {
            for template in templates::catalog() {
                println!(
                    "{}  {}  {}",
                    template.name.cyan(),
                    template.relative_path.dimmed(),
                    template.description
                );
            }
        }
        Command::Cat { name } => {
            let content = loader.load(&name)?;
            print!("{}", content);
        }
        Command::Emit { name, dest, parents } => {
            let content = loader.load(&name)?;
            let emitted = emitter::emit(&content, &dest, &EmitOptions { create_parents: parents })?;
            println!("{} Wrote {} bytes to {}", "✓".green(), emitted.bytes, emitted.path.display());
        }
        Command::Scaffold { root } => {
            let root = root.unwrap_or_else(|| config.output_root.clone());
            let written = emitter::scaffold(&loader, &root)?;
            for file in &written {
                println!("{} {}", "✓".green(), file.path.display());
            }
            println!("{} files written under {}", written.len(), root.display().to_string().cyan());
        }
    }

    Ok(())
}
