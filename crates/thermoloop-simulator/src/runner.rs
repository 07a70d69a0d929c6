//! The simulator's control cycle.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::client::{ControlClient, ReadingSink};
use crate::error::Result;
use crate::walk;

// ─── SimulatorConfig ──────────────────────────────────────────────────────

/// Configuration for a simulator run.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Base URL of the control authority.
    pub control_url: String,
    /// Base URL of the datastore.
    pub datastore_url: String,
    /// Seconds between cycles.
    pub interval_secs: u64,
    /// Temperature the simulated room starts at, °C.
    pub initial_temperature: f64,
}

// ─── Public API ───────────────────────────────────────────────────────────

/// Run simulation cycles until the process is interrupted.
///
/// Each cycle is strictly ordered: read setpoint, walk the temperature,
/// report it, sleep. Transport failures are logged and retried on the next
/// cycle at normal cadence; any other cycle error doubles the sleep first
/// to avoid a hot loop against a broken peer. Ctrl-C ends the loop cleanly.
pub async fn run(config: SimulatorConfig) -> Result<()> {
    let mut simulator = Simulator::new(config);

    info!(
        "simulator started at {:.1}°C, one cycle every {:?}",
        simulator.current, simulator.interval
    );

    loop {
        let sleep = match simulator.cycle().await {
            Ok(()) => simulator.interval,
            Err(e) => {
                warn!("cycle failed: {e}; backing off");
                simulator.interval * 2
            }
        };

        tokio::select! {
            _ = tokio::time::sleep(sleep) => {}
            _ = tokio::signal::ctrl_c() => {
                info!("interrupt received, simulator stopped");
                return Ok(());
            }
        }
    }
}

// ─── Simulator ────────────────────────────────────────────────────────────

struct Simulator {
    control: ControlClient,
    sink: ReadingSink,
    interval: Duration,
    current: f64,
    rng: StdRng,
}

impl Simulator {
    fn new(config: SimulatorConfig) -> Self {
        let http = reqwest::Client::new();
        Self {
            control: ControlClient::new(http.clone(), config.control_url),
            sink: ReadingSink::new(http, config.datastore_url),
            interval: Duration::from_secs(config.interval_secs),
            current: config.initial_temperature,
            rng: StdRng::from_entropy(),
        }
    }

    /// One cycle: read the setpoint, walk the temperature, report it.
    ///
    /// An unreachable control authority degrades the cycle to undirected
    /// drift; a failed send is logged and the walked value is kept for the
    /// next cycle either way.
    async fn cycle(&mut self) -> Result<()> {
        let target = match self.control.fetch_setpoint().await {
            Ok(t) => Some(t),
            Err(e) if e.is_transient() => {
                warn!("could not read setpoint: {e}");
                None
            }
            Err(e) => return Err(e),
        };

        self.current = walk::step(self.current, target, &mut self.rng);

        match self.sink.push(self.current).await {
            Ok(()) => match target {
                Some(t) => info!("sent reading {:.2}°C (target {t:.1}°C)", self.current),
                None => info!("sent reading {:.2}°C (target unknown)", self.current),
            },
            Err(e) if e.is_transient() => warn!("could not send reading: {e}"),
            Err(e) => return Err(e),
        }

        Ok(())
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────
