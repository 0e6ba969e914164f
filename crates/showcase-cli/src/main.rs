use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use showcase::{FencePolicy, Renderer};
use showcase_catalog::{
    categories, filter_by_category, load_projects, unavailable_notice, DocumentKind, ALL,
};

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "showcase")]
#[command(about = "Render README and note markdown into showcase HTML")]
struct Cli {
    /// TOML config file with [render] and [catalog] tables
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log what the renderer is doing
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a markdown document (file or stdin) to HTML
    Render {
        /// Input markdown file; reads stdin when omitted
        input: Option<PathBuf>,

        /// Output file; writes stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Leave a code fence open at end of input instead of closing it
        #[arg(long)]
        leave_fence_open: bool,

        /// Print the "not available" notice for this document kind when the
        /// input cannot be read
        #[arg(long, value_enum)]
        fallback: Option<Fallback>,
    },

    /// Turn a saved repository listing (JSON) into project cards
    Projects {
        /// Repository listing as returned by the hosting API
        listing: PathBuf,

        /// Only print projects of this category
        #[arg(long, conflicts_with = "list_categories")]
        category: Option<String>,

        /// Print the available categories instead of the projects
        #[arg(long)]
        list_categories: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Fallback {
    Readme,
    Note,
}

impl From<Fallback> for DocumentKind {
    fn from(fallback: Fallback) -> Self {
        match fallback {
            Fallback::Readme => DocumentKind::Readme,
            Fallback::Note => DocumentKind::Note,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::default(),
    };

    match cli.command {
        Command::Render {
            input,
            output,
            leave_fence_open,
            fallback,
        } => {
            let mut options = config.render;
            if leave_fence_open {
                options.unterminated_fence = FencePolicy::LeaveOpen;
            }
            let renderer = Renderer::with_options(options);

            let html = match (read_input(input.as_deref()), fallback) {
                (Ok(bytes), _) => renderer.render_bytes(&bytes)?,
                (Err(e), Some(kind)) => {
                    log::warn!("{:#}; printing fallback notice", e);
                    unavailable_notice(kind.into())
                }
                (Err(e), None) => return Err(e),
            };

            write_output(output.as_deref(), &html)
        }

        Command::Projects {
            listing,
            category,
            list_categories,
        } => {
            let json = fs::read_to_string(&listing)
                .with_context(|| format!("Error reading {}", listing.display()))?;
            let projects = load_projects(&json, &config.catalog)
                .with_context(|| format!("Error parsing {}", listing.display()))?;

            let out = if list_categories {
                serde_json::to_string_pretty(&categories(&projects))?
            } else {
                let selected = filter_by_category(&projects, category.as_deref().unwrap_or(ALL));
                serde_json::to_string_pretty(&selected)?
            };
            write_output(None, &out)
        }
    }
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn read_input(input: Option<&Path>) -> Result<Vec<u8>> {
    match input {
        Some(path) => fs::read(path).with_context(|| format!("Error reading {}", path.display())),
        None => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .context("Error reading stdin")?;
            Ok(bytes)
        }
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Error writing {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", content).context("Error writing stdout")
        }
    }
}
