use clap::Parser;
use std::path::PathBuf;

use sensu_aggregate_check::{pipeline, ApiClient, Config, Result, Thresholds, Verdict};

/// The Sensu Go Event Aggregates Check plugin
#[derive(Parser, Debug)]
#[command(name = "sensu-aggregate-check", version)]
struct Cli {
    /// Sensu Go Event Check Labels to filter by (e.g. 'aggregate=foo')
    #[arg(short = 'l', long)]
    check_labels: String,

    /// Sensu Go Event Entity Labels to filter by (e.g. 'aggregate=foo,app=bar')
    #[arg(short = 'e', long, default_value = "")]
    entity_labels: String,

    /// Comma-delimited list of Sensu Go Namespaces to query for Events (e.g. 'us-east-1,us-west-2')
    #[arg(short = 'n', long, default_value = "default")]
    namespaces: String,

    /// Sensu Go Backend API Protocol (e.g. 'https')
    #[arg(long, default_value = "http")]
    api_proto: String,

    /// Sensu Go Backend API Host (e.g. 'sensu-backend.example.com')
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    api_host: String,

    /// Sensu Go Backend API Port (e.g. 4242)
    #[arg(short = 'p', long, default_value_t = 8080)]
    api_port: u16,

    /// Sensu Go Backend API User
    #[arg(short = 'u', long, default_value = "admin")]
    api_user: String,

    /// Sensu Go Backend API Password
    #[arg(short = 'P', long, default_value = "P@ssw0rd!")]
    api_pass: String,

    /// Path to CA certificate
    #[arg(long)]
    ca_path: Option<PathBuf>,

    /// Warning threshold - % of Events in warning state
    #[arg(short = 'w', long, default_value_t = 0)]
    warn_percent: usize,

    /// Critical threshold - % of Events in critical state
    #[arg(short = 'c', long, default_value_t = 0)]
    crit_percent: usize,

    /// Warning threshold - count of Events in warning state
    #[arg(short = 'W', long, default_value_t = 0)]
    warn_count: usize,

    /// Critical threshold - count of Events in critical state
    #[arg(short = 'C', long, default_value_t = 0)]
    crit_count: usize,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            check_labels: self.check_labels,
            entity_labels: self.entity_labels,
            namespaces: self
                .namespaces
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            api_proto: self.api_proto,
            api_host: self.api_host,
            api_port: self.api_port,
            api_user: self.api_user,
            api_pass: self.api_pass,
            ca_path: self.ca_path,
            thresholds: Thresholds {
                warn_percent: self.warn_percent,
                crit_percent: self.crit_percent,
                warn_count: self.warn_count,
                crit_count: self.crit_count,
            },
        }
    }
}

#[tokio::main]
async fn main() {
    init_tracing();
    let config = Cli::parse().into_config();

    let verdict = match run_check(&config).await {
        Ok(verdict) => verdict,
        Err(err) => Verdict::Unknown(err.to_string()),
    };

    println!("{verdict}");
    std::process::exit(verdict.exit_code());
}

async fn run_check(config: &Config) -> Result<Verdict> {
    let client = ApiClient::new(config)?;
    let (counters, verdict) = pipeline::run(&client, config).await?;

    println!("Counters: {counters}");
    if counters.total > 0 {
        println!("Percent OK: {}", counters.percent_ok());
    }

    Ok(verdict)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
