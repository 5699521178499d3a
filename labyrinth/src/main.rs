//! `labyrinth` command-line front end.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use labyrinth::config::{self, Config};
use labyrinth::{Style, logging, pipeline, render};
use labyrinth_core::Maze;

#[derive(Parser)]
#[command(name = "labyrinth", version, about = "Generate, encode and solve grid mazes")]
struct Cli {
    /// Configuration file.
    #[arg(long, global = true, default_value = config::DEFAULT_PATH)]
    config: PathBuf,

    /// Print without ANSI colours.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a maze with the configured generator.
    Generate {
        #[command(flatten)]
        size: Size,
        #[arg(long)]
        seed: Option<u64>,
        /// Write the binary encoding to this file.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Solve a maze with the configured strategy.
    Solve(Source),
    /// Solve one maze with every strategy.
    Compare(Source),
    /// Run many generate-then-solve pipelines on the worker pool.
    Bench {
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[command(flatten)]
        size: Size,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show or edit the configuration file.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args)]
struct Size {
    #[arg(long, default_value_t = 21)]
    rows: usize,
    #[arg(long, default_value_t = 21)]
    columns: usize,
}

/// A maze read from a file, or freshly generated.
#[derive(Args)]
struct Source {
    /// Read the maze encoding from this file instead of generating one.
    #[arg(long, conflicts_with = "seed")]
    input: Option<PathBuf>,
    #[command(flatten)]
    size: Size,
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum ConfigCommand {
    Show,
    SetGenerator { name: String },
    SetSearcher { name: String },
    SetThreads { size: usize },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let cli = Cli::parse();
    let style = if cli.plain { Style::Plain } else { Style::Color };
    let mut cfg = Config::load(&cli.config)?;
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Generate { size, seed, out } => {
            let maze = pipeline::generate(&cfg, size.rows, size.columns, seed)?;
            render::print_maze(&mut stdout, &maze, None, style)?;
            if let Some(path) = out {
                let mut file = BufWriter::new(File::create(&path)?);
                maze.write_to(&mut file)?;
                file.flush()?;
                log::info!("wrote {} bytes to {}", maze.to_bytes().len(), path.display());
            }
        }
        Command::Solve(source) => {
            let maze = load_or_generate(&cfg, &source)?;
            let report = pipeline::solve(&cfg, &maze)?;
            render::print_maze(&mut stdout, &maze, Some(report.solution.path()), style)?;
            if report.solution.is_empty() {
                println!("{}: no path from start to goal", report.strategy);
            } else {
                println!("{report}");
            }
        }
        Command::Compare(source) => {
            let maze = load_or_generate(&cfg, &source)?;
            render::print_maze(&mut stdout, &maze, None, style)?;
            for report in pipeline::compare(&maze)? {
                println!("{report}");
            }
        }
        Command::Bench { count, size, seed } => {
            let reports = pipeline::bench(&cfg, count, size.rows, size.columns, seed)?;
            let solved = reports.iter().filter(|r| !r.solution.is_empty()).count();
            let evaluated: usize = reports.iter().map(|r| r.nodes_evaluated).sum();
            println!(
                "{count} pipelines with {} / {}: {solved} solved, {evaluated} nodes evaluated",
                cfg.generator, cfg.searcher
            );
        }
        Command::Config(cmd) => match cmd {
            ConfigCommand::Show => print!("{}", toml::to_string_pretty(&cfg)?),
            ConfigCommand::SetGenerator { name } => update(&mut cfg, &cli.config, |c| c.set_generator(&name))?,
            ConfigCommand::SetSearcher { name } => update(&mut cfg, &cli.config, |c| c.set_searcher(&name))?,
            ConfigCommand::SetThreads { size } => {
                update(&mut cfg, &cli.config, |c| c.set_thread_pool_size(size))?
            }
        },
    }
    Ok(())
}

fn load_or_generate(cfg: &Config, source: &Source) -> Result<Maze, Box<dyn std::error::Error>> {
    match &source.input {
        Some(path) => Ok(Maze::read_from(BufReader::new(File::open(path)?))?),
        None => Ok(pipeline::generate(
            cfg,
            source.size.rows,
            source.size.columns,
            source.seed,
        )?),
    }
}

fn update(
    cfg: &mut Config,
    path: &Path,
    edit: impl FnOnce(&mut Config) -> Result<(), config::ConfigError>,
) -> Result<(), config::ConfigError> {
    edit(cfg)?;
    cfg.save(path)
}
