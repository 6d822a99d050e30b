//! Pure-strategy Nash equilibria of the discrete Hotelling election game.
//!
//! N candidates each pick one of M positions on a line. Voters are spread
//! along the line (uniformly or under a truncated normal) and back the nearest
//! occupied position, splitting evenly on ties.
//!
//! # Module Structure
//!
//! - `density` — Voter mass per position (uniform or truncated normal)
//! - `lineup` — Assignment/Occupancy pair owned by a single trial or cell
//! - `payoff` — Frontier (gap-splitting) and Proximity (nearest-position) rules
//! - `iterative` — Randomized best-response dynamics over many trials
//! - `matrix` — Exhaustive payoff tensor and simultaneous best responses
//! - `config` — Validated run parameters
//! - `solve` — Entry points tying the above together
//! - `cli` — Command-line front end (`server` feature)
#![allow(dead_code)]

#[cfg(feature = "server")]
pub mod cli;
pub mod config;
pub mod density;
pub mod error;
pub mod iterative;
pub mod lineup;
pub mod matrix;
pub mod payoff;
pub mod solve;

pub use config::*;
pub use density::*;
pub use error::*;
pub use iterative::*;
pub use lineup::*;
pub use matrix::*;
pub use payoff::*;
pub use solve::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Index of a candidate location on the line, in `[0, M)`.
pub type Position = usize;
/// Index of a candidate, in `[0, N)`.
pub type Player = usize;
/// Voter mass attached to a position.
pub type Weight = f64;
/// Votes collected by a player under some assignment.
pub type Utility = f64;

// ============================================================================
// VOTER DENSITY
// ============================================================================
/// Voter mass per position when none is given.
pub const POINTS_PER_POSITION: Weight = 10.0;
/// The normal profile is truncated to [-NORMAL_BOUND, +NORMAL_BOUND].
pub const NORMAL_BOUND: f64 = 2.0;
/// Per-position mass for the exhaustive method under a uniform profile.
pub const EXHAUSTIVE_UNIFORM_WEIGHT: Weight = 1.0;
/// Scale of the normal profile for the exhaustive method.
pub const EXHAUSTIVE_NORMAL_POINTS: Weight = 1.0;

// ============================================================================
// EXHAUSTIVE SEARCH
// ============================================================================
/// Most payoffs (M^N cells times N players) a tensor may hold; 1 GiB of f64.
pub const MAX_TENSOR_ENTRIES: usize = 1 << 27;

// ============================================================================
// PAYOFF COMPARISON
// Equilibrium detection compares payoffs for exact equality, so every payoff
// is snapped to a fixed decimal grid before it is compared or stored.
// ============================================================================
/// Decimal digits kept on every payoff.
pub const PAYOFF_DECIMALS: i32 = 5;

/// Snap a value onto the `PAYOFF_DECIMALS` grid.
pub fn round(x: f64) -> f64 {
    let scale = 10f64.powi(PAYOFF_DECIMALS);
    (x * scale).round() / scale
}

// ============================================================================
// BEST-RESPONSE DYNAMICS
// ============================================================================
/// A trial is abandoned once it has evaluated more than M * this many players.
pub const EVALUATION_CAP_PER_POSITION: usize = 100;
/// Length of a randomized round is N * this many player visits.
pub const MULTISET_VISITS_PER_PLAYER: usize = 10;
/// Trials per iterative run when none is given.
pub const DEFAULT_TRIALS: usize = 1000;
/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 0;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
