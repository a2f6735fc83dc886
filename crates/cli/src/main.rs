use anyhow::Result;
use clap::{Parser, Subcommand};
use matcher_core::catalog::{self, CatalogShape};
use matcher_core::config;
use matcher_core::config::AppConfig;
use matcher_core::pipeline;
use std::path::Path;

mod render;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Match {
            inputs,
            classification,
            guesses,
            input_file,
            json,
            csv,
        } => run_match(cfg, classification, inputs, input_file, guesses, json, csv).await,
        Commands::Catalogs { json } => run_catalogs(cfg, json),
    }
}

#[derive(Parser)]
#[command(name = "sector-match")]
#[command(about = "Match free-text sector names to LCA classifications", long_about = None)]
struct Cli {
    /// Path to config TOML
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match inputs against a reference classification
    Match {
        /// Words to match
        inputs: Vec<String>,
        /// Reference classification (see `catalogs` for the supported set)
        #[arg(short = 'C', long)]
        classification: String,
        /// Guesses to report per input; defaults to the configured value
        #[arg(short, long)]
        guesses: Option<usize>,
        /// Read additional inputs from a file, one per line
        #[arg(long)]
        input_file: Option<String>,
        /// Output JSON
        #[arg(long)]
        json: bool,
        /// Output CSV
        #[arg(long)]
        csv: bool,
    },
    /// List supported classifications
    Catalogs {
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
}

async fn run_match(
    cfg: AppConfig,
    classification: String,
    mut inputs: Vec<String>,
    input_file: Option<String>,
    guesses: Option<usize>,
    json: bool,
    csv: bool,
) -> Result<()> {
    if let Some(path) = input_file {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("read input file {}: {}", path, e))?;
        inputs.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from),
        );
    }
    if inputs.is_empty() {
        anyhow::bail!("no inputs given; pass words as arguments or via --input-file");
    }

    let top_n = guesses.unwrap_or(cfg.matching.guesses);
    let registry = pipeline::build_registry(&cfg);
    let (table, summary) =
        pipeline::run_matching(&cfg, &registry, &classification, &inputs, top_n).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else if csv {
        print!("{}", render::csv(&table));
    } else {
        print!("{}", render::table(&table));
        println!(
            "{}: {} inputs against {} reference entries, {} guesses each",
            summary.classification, summary.inputs, summary.references, summary.guesses
        );
    }
    Ok(())
}

fn run_catalogs(cfg: AppConfig, json: bool) -> Result<()> {
    let data_dir = Path::new(&cfg.catalogs.data_dir);
    let mut vals = Vec::new();
    for name in catalog::names() {
        match catalog::load(data_dir, name) {
            Ok(cat) => {
                let shape = match cat.shape() {
                    CatalogShape::Coded => "coded",
                    CatalogShape::Plain => "plain",
                };
                vals.push(serde_json::json!({
                    "name": name,
                    "shape": shape,
                    "entries": cat.len(),
                }));
            }
            Err(err) => {
                vals.push(serde_json::json!({
                    "name": name,
                    "error": err.to_string(),
                }));
            }
        }
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&vals)?);
    } else {
        for v in &vals {
            println!("{}", serde_json::to_string(v)?);
        }
    }
    Ok(())
}
