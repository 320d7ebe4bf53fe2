//! disha-beacon fake source
//!
//! Hardware-free pose source for exercising navigation clients without
//! the host application running. Traces a circular path with a little
//! position noise and streams location records to the configured
//! destination until interrupted.

use disha_beacon::config::BeaconConfig;
use disha_beacon::error::{Error, Result};
use disha_beacon::provider::OrbitPoseProvider;
use disha_beacon::sampler::{FrameOutcome, Sampler};
use disha_beacon::streaming::UdpSession;
use disha_beacon::types::Vector3;
use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Radius of the synthetic path in world units
const ORBIT_RADIUS: f32 = 25.0;

/// Radians advanced per sample
const ORBIT_STEP: f32 = 0.05;

/// Gaussian position noise, standard deviation in world units
const ORBIT_JITTER: f32 = 0.1;

/// Parse config path from command line arguments.
///
/// Supports:
/// - `disha-beacon <path>` (positional)
/// - `disha-beacon --config <path>` (flag-based)
/// - `disha-beacon -c <path>` (short flag)
///
/// Returns `None` when no path was given; the compiled-in defaults
/// apply then.
fn parse_config_path() -> Option<String> {
    let args: Vec<String> = env::args().collect();

    // Look for --config or -c flag
    for i in 1..args.len() {
        if (args[i] == "--config" || args[i] == "-c") && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }

    // Fall back to first positional argument (if it doesn't start with -)
    if args.len() > 1 && !args[1].starts_with('-') {
        return Some(args[1].clone());
    }

    None
}

fn main() -> Result<()> {
    let config_path = parse_config_path();
    let config = match &config_path {
        Some(path) => BeaconConfig::from_file(path)?,
        None => BeaconConfig::reference_defaults(),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    log::info!("disha-beacon fake source starting");
    match &config_path {
        Some(path) => log::info!("Using config: {}", path),
        None => log::info!("No config file given, using reference defaults"),
    }

    let destination = config.network.destination_addr()?;
    let period = Duration::from_millis(config.sampling.period_ms);

    let provider = OrbitPoseProvider::new(Vector3::zero(), ORBIT_RADIUS, ORBIT_STEP, 0)
        .with_jitter(ORBIT_JITTER);
    let mut sampler = Sampler::new(provider, UdpSession::new(), destination);

    // Set up shutdown signal handler
    let running = Arc::new(AtomicBool::new(true));
    let r = Arc::clone(&running);
    ctrlc::set_handler(move || {
        log::info!("Received shutdown signal");
        r.store(false, Ordering::Relaxed);
    })
    .map_err(|e| Error::Other(format!("Error setting Ctrl-C handler: {}", e)))?;

    sampler.on_enter();
    log::info!(
        "Sampling every {} ms. Press Ctrl-C to stop.",
        config.sampling.period_ms
    );

    let mut frames: u64 = 0;
    let mut delivered: u64 = 0;
    while running.load(Ordering::Relaxed) {
        if sampler.on_update() == FrameOutcome::Sent {
            delivered += 1;
        }
        frames += 1;
        if frames % 120 == 0 {
            log::debug!("{} frames sampled, {} records delivered", frames, delivered);
        }
        thread::sleep(period);
    }

    sampler.on_exit();
    log::info!(
        "disha-beacon stopped ({} frames, {} delivered)",
        frames,
        delivered
    );
    Ok(())
}
