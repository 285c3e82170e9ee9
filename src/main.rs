use clap::{Parser, Subcommand};
use tracing::{error, info};

use blotter::apis::socrata::SocrataClient;
use blotter::constants::{CRIME_DATASET, DATA_HOST, DEFAULT_HEAD_ROWS, DEFAULT_LIMIT};
use blotter::logging;
use blotter::pipeline::Pipeline;
use blotter::summary;

#[derive(Parser)]
#[command(name = "blotter")]
#[command(about = "Montgomery County crime incident fetch-and-clean pipeline")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a bounded batch of incidents and clean it
    Run {
        /// Open-data portal host to read from
        #[arg(long, default_value = DATA_HOST)]
        host: String,
        /// Dataset identifier on the portal
        #[arg(long, default_value = CRIME_DATASET)]
        dataset: String,
        /// Maximum number of rows to request
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
        /// Cleaned rows to display after the run
        #[arg(long, default_value_t = DEFAULT_HEAD_ROWS)]
        head: usize,
    },
    /// List the selected columns and their cleaned types
    Columns,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            host,
            dataset,
            limit,
            head,
        } => {
            let source = SocrataClient::new(host, dataset);
            match Pipeline::run(&source, limit).await {
                Ok(run) => {
                    info!("run finished");
                    summary::print_summary(&run.summary);
                    summary::print_head(&run.table, head);
                }
                Err(err) => {
                    error!("run failed: {err}");
                    println!("❌ Run failed: {err}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Columns => {
            summary::print_columns();
        }
    }
    Ok(())
}
