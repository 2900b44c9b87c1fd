use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mode_dag_rs::api::layout_file;
use mode_dag_rs::generator::{GeneratorConfig, RandomDag};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Row placement for multi-mode directed acyclic graphs",
    long_about = None
)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lay out a graph description and write the row of every node.
    Layout {
        /// Graph description: one `src<TAB>srcClass-tag-trgClass<TAB>trg` link per line.
        #[arg(value_name = "INFILE")]
        infile: PathBuf,

        /// Row file to write.
        #[arg(value_name = "OUTFILE")]
        outfile: PathBuf,
    },
    /// Write a random multi-mode DAG in the graph description format.
    Generate {
        /// Number of node classes.
        #[arg(long, default_value_t = GeneratorConfig::default().modes)]
        modes: u32,

        /// Number of nodes to draw from.
        #[arg(long, default_value_t = GeneratorConfig::default().nodes)]
        nodes: u32,

        /// Number of distinct links.
        #[arg(long, default_value_t = GeneratorConfig::default().links)]
        links: usize,

        /// Tag written between the classes of each link.
        #[arg(long, default_value_t = GeneratorConfig::default().tag)]
        tag: String,

        /// Random seed.
        #[arg(long, default_value_t = GeneratorConfig::default().seed)]
        seed: u64,

        /// Graph description file to write.
        #[arg(value_name = "OUTFILE")]
        outfile: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("MODE_DAG_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "mode_dag_rs=debug,info"
        } else {
            "mode_dag_rs=info,warn"
        })
    });

    let format = env::var("MODE_DAG_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Layout { infile, outfile } => {
            let placement = layout_file(&infile, &outfile).with_context(|| {
                format!(
                    "failed to lay out {} into {}",
                    infile.display(),
                    outfile.display()
                )
            })?;
            info!(rows = placement.len(), "done");
        }
        Commands::Generate {
            modes,
            nodes,
            links,
            tag,
            seed,
            outfile,
        } => {
            let config = GeneratorConfig {
                modes,
                nodes,
                links,
                tag,
                seed,
            };
            let dag = RandomDag::generate(&config).context("failed to generate graph")?;
            fs::write(&outfile, dag.to_string())
                .with_context(|| format!("failed to write {}", outfile.display()))?;
            info!(links = dag.link_count(), path = %outfile.display(), "wrote random graph");
        }
    }

    Ok(())
}
