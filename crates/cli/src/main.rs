//! # cli
//!
//! Command-line front end for the job market insights service. Talks to the
//! same `JobService` the HTTP server uses, without the HTTP hop.

use clap::{Parser, Subcommand};
use service::{AppConfig, JobService};

use analytics::forecast::{ModelKind, PredictionRequest};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "jobs")]
#[command(about = "Job market insights CLI", long_about = None)]
struct Cli {
    /// Emit raw JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show per-category salary trends
    Trends,

    /// Show market-wide statistics
    Statistics,

    /// Forecast salaries for future years
    Predict {
        /// Historical years, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        years: Vec<f64>,

        /// Historical salaries, comma separated, same length as years
        #[arg(long, value_delimiter = ',', required = true)]
        salaries: Vec<f64>,

        /// Years to forecast, comma separated
        #[arg(long = "future-years", value_delimiter = ',', required = true)]
        future_years: Vec<f64>,

        /// Model to run (linear, polynomial, decision_tree)
        #[arg(short, long)]
        model: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Keep stdout clean for command output; diagnostics go through RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(message) = run(cli).await {
        eprintln!("error: {message}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let mut config = AppConfig::from_env();

    if let Commands::Predict {
        model: Some(ref model),
        ..
    } = cli.command
    {
        config.model_type = model.parse::<ModelKind>().map_err(|e| e.to_string())?;
    }

    let service = JobService::from_config(&config);

    match cli.command {
        Commands::Trends => {
            let trends = service.get_job_trends().await.map_err(|e| e.to_string())?;

            if cli.json {
                println!("{}", to_json(&trends)?);
                return Ok(());
            }

            println!(
                "{:<18} {:>12} {:>12} {:>12} {:>12} {:>10} {:>6}",
                "Category", "Average", "Median", "Min", "Max", "StdDev", "Jobs"
            );
            for (category, stats) in &trends {
                println!(
                    "{:<18} {:>12.0} {:>12.0} {:>12.0} {:>12.0} {:>10.0} {:>6}",
                    category,
                    stats.average_salary,
                    stats.median_salary,
                    stats.min_salary,
                    stats.max_salary,
                    stats.std_deviation,
                    stats.job_count
                );
            }
        }

        Commands::Statistics => {
            let stats = service.get_statistics().await.map_err(|e| e.to_string())?;

            if cli.json {
                println!("{}", to_json(&stats)?);
                return Ok(());
            }

            println!("Total jobs:       {}", stats.total_jobs);
            println!(
                "Categories:       {} ({})",
                stats.total_categories,
                stats.categories.join(", ")
            );
            println!("Average salary:   {:.0}", stats.overall_average_salary);
            println!("Median salary:    {:.0}", stats.overall_median_salary);
            println!(
                "Salary range:     {:.0} - {:.0}",
                stats.salary_range.min, stats.salary_range.max
            );
        }

        Commands::Predict {
            years,
            salaries,
            future_years,
            ..
        } => {
            let request = PredictionRequest {
                years,
                salaries,
                future_years: future_years.clone(),
            };
            let forecast = service
                .predict_job_trends(&request)
                .map_err(|e| e.to_string())?;

            if cli.json {
                println!("{}", to_json(&forecast)?);
                return Ok(());
            }

            println!("Model:      {}", forecast.model_type);
            println!("Confidence: {:.4}", forecast.confidence_score);
            for (year, prediction) in future_years.iter().zip(&forecast.predictions) {
                println!("{:>6.0}: {:.0}", year, prediction);
            }
        }
    }

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("failed to serialize output: {e}"))
}
