use std::path::PathBuf;

use clap::{Parser, Subcommand};
use common::sample::Sample;
use eyre::Result;
use tracing::error;
use tracing_subscriber::{
    EnvFilter,
    fmt::{layer, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

mod bench;

const MODULES: &[&str] = &["common", "sysbench"];

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long)]
    log: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prepare and run the configured benchmarks, printing samples as json lines
    Bench {
        #[arg(short, long, default_value = "config.yaml")]
        config_file: PathBuf,
        /// Assume the data is already loaded
        #[arg(long, default_value_t = false)]
        skip_prepare: bool,
    },
    /// Parse captured sysbench output into samples
    Parse {
        /// File holding the stdout of a sysbench run
        #[arg(short, long)]
        file: PathBuf,
        /// Prefix for metric names and metadata keys
        #[arg(short, long, default_value = "")]
        prefix: String,
    },
    /// Print generated benchmark commands
    Print {
        #[arg(short, long, default_value = "config.yaml")]
        config_file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let log_level = std::env::var("RUST_LOG").unwrap_or("warn".to_owned());
    let args = Cli::parse();
    let file_appender = tracing_appender::rolling::never(".", "log.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let mut env_filter = EnvFilter::new(format!("sysbench_runner={log_level}"));

    for log in &args.log {
        env_filter = env_filter.add_directive(log.parse()?);
    }

    for module in MODULES {
        if !args.log.iter().any(|x| x.starts_with(module)) {
            env_filter = env_filter.add_directive(format!("{module}={log_level}").parse()?);
        }
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            layer()
                .with_timer(ChronoLocal::new("%v %k:%M:%S %z".to_owned()))
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(layer().with_writer(non_blocking))
        .init();

    match args.command {
        Commands::Bench {
            config_file,
            skip_prepare,
        } => match bench::run_benchmark(&config_file, skip_prepare).await {
            Ok(samples) => print_samples(&samples)?,
            Err(err) => {
                error!("{err:#?}");
                return Err(err);
            }
        },
        Commands::Parse { file, prefix } => {
            print_samples(&bench::parse_file(&file, &prefix).await?)?
        }
        Commands::Print { config_file } => {
            let config = bench::load_config(&config_file).await?;
            for (name, cmd) in bench::commands(&config)? {
                println!("[{name}/{}] {}", cmd.stage, cmd.command);
            }
        }
    };

    Ok(())
}

fn print_samples(samples: &[Sample]) -> Result<()> {
    for sample in samples {
        println!("{}", serde_json::to_string(sample)?);
    }
    Ok(())
}
