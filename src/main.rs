//! gridstate: table state engine with a command-line front end
//!
//! Loads a JSON array of rows and prints a sorted, filtered, paginated view.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gridstate::cli::{self, OutputFormat, ViewOptions};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gridstate")]
#[command(version, about = "Sort, filter and paginate tabular JSON data", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Second page of people older than 30, oldest first
    gridstate view people.json --filter age:greaterThan:30 --sort age:desc --page 2

    # Multi-column sort, JSON output
    gridstate view people.json --sort team --sort name:desc -o json

    # Write an example config file
    gridstate init-config --write")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "GRIDSTATE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `view` subcommand
#[derive(Parser)]
struct ViewArgs {
    /// JSON file holding an array of row objects
    rows: PathBuf,

    /// Sort key `column[:asc|desc]`; repeat for multi-column sorts
    #[arg(short, long = "sort")]
    sorts: Vec<String>,

    /// Column filter `column:operator:value` or `column:value`
    #[arg(short, long = "filter")]
    filters: Vec<String>,

    /// Case-insensitive search across all fields
    #[arg(long)]
    search: Option<String>,

    /// Page to show, clamped to the available pages
    #[arg(short, long)]
    page: Option<usize>,

    /// Rows per page
    #[arg(long)]
    page_size: Option<usize>,

    /// Comma-separated column ids to show (default: every field)
    #[arg(long, value_delimiter = ',')]
    columns: Option<Vec<String>>,

    /// Keep earlier sort keys when adding a new one
    #[arg(long)]
    multi_sort: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a view of a rows file
    View(ViewArgs),

    /// Print the JSON Schema for the configuration file
    Schema {
        /// Write the schema to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print an example configuration file
    InitConfig {
        /// Create .gridstate.yaml in the current directory instead of printing
        #[arg(long)]
        write: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::View(args) => cli::run_view(ViewOptions {
            rows_path: args.rows,
            config_path: cli.config,
            sorts: args.sorts,
            filters: args.filters,
            search: args.search,
            page: args.page,
            page_size: args.page_size,
            columns: args.columns,
            multi_sort: args.multi_sort,
            output: args.output,
        }),

        Commands::Schema { output } => {
            let schema = gridstate::config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::InitConfig { write } => {
            let content = gridstate::config::generate_example_config();
            if !write {
                print!("{content}");
                return Ok(());
            }
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".gridstate.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            std::fs::write(&target, content)
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
            Ok(())
        }
    }
}
