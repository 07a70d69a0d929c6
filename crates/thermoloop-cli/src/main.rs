use clap::{Parser, Subcommand};
use thermoloop_core::DEFAULT_TARGET_TEMPERATURE;
use thermoloop_simulator::SimulatorConfig;

#[derive(Parser)]
#[command(
    name = "thermoloop",
    about = "Closed-loop temperature control playground — datastore, control authority, and sensor simulator",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the append-only reading history service
    Datastore {
        /// Port to listen on
        #[arg(long, env = "THERMOLOOP_DATASTORE_PORT", default_value = "5001")]
        port: u16,
    },

    /// Run the setpoint authority and state aggregator
    Control {
        /// Port to listen on
        #[arg(long, env = "THERMOLOOP_CONTROL_PORT", default_value = "5002")]
        port: u16,

        /// Base URL of the datastore service
        #[arg(
            long,
            env = "THERMOLOOP_DATASTORE_URL",
            default_value = "http://127.0.0.1:5001"
        )]
        datastore_url: String,

        /// Target temperature at startup, °C
        #[arg(long, default_value_t = DEFAULT_TARGET_TEMPERATURE)]
        target: f64,
    },

    /// Run the simulated sensor loop
    Simulate {
        /// Base URL of the control authority
        #[arg(
            long,
            env = "THERMOLOOP_CONTROL_URL",
            default_value = "http://127.0.0.1:5002"
        )]
        control_url: String,

        /// Base URL of the datastore service
        #[arg(
            long,
            env = "THERMOLOOP_DATASTORE_URL",
            default_value = "http://127.0.0.1:5001"
        )]
        datastore_url: String,

        /// Seconds between cycles
        #[arg(long, env = "THERMOLOOP_INTERVAL_SECS", default_value = "5")]
        interval_secs: u64,

        /// Simulated room temperature at startup, °C
        #[arg(long, default_value = "20.0")]
        initial: f64,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Datastore { port } => thermoloop_datastore::serve(port).await,
        Commands::Control {
            port,
            datastore_url,
            target,
        } => thermoloop_control::serve(port, datastore_url, target).await,
        Commands::Simulate {
            control_url,
            datastore_url,
            interval_secs,
            initial,
        } => thermoloop_simulator::run(SimulatorConfig {
            control_url,
            datastore_url,
            interval_secs,
            initial_temperature: initial,
        })
        .await
        .map_err(anyhow::Error::from),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
