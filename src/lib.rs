//! Empirical discrete distributions.
//!
//! Observations go in, distributions come out. A [`Histogram`] counts how
//! often each value was seen; a [`Pmf`] maps each value to a probability
//! mass and supports in-place mutation, renormalization, and the
//! length-biased sampling correction (see [`bias`] and [`unbias`]).
//!
//! ## Core Types
//!
//! - [`Histogram`] — Immutable value → count mapping
//! - [`Pmf`] — Mutable value → probability mass mapping
//! - [`Real`] — Hashable, totally ordered float key
//! - [`Support`] — Bound on distribution keys, with explicit numeric applicability
//! - [`Density`] — Read-only view shared by both distributions
//!
//! ## Normalization
//!
//! Mutators ([`Pmf::incr`], [`Pmf::mult`]) never renormalize. Callers that
//! need a valid distribution must call [`Pmf::normalize`] afterwards, which
//! fails loudly on a zero-total distribution instead of dividing by zero.
mod bias;
mod density;
mod error;
mod histogram;
mod pmf;
mod real;
mod support;
mod tally;

pub use bias::*;
pub use density::*;
pub use error::*;
pub use histogram::*;
pub use pmf::*;
pub use real::*;
pub use support::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Occurrence counts in a histogram. Real-valued so weighted counts fit.
pub type Frequency = f64;
/// Probability masses, normalized or not.
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a random instance.
    fn random() -> Self;
}

// ============================================================================
// CONSTANTS
// ============================================================================
/// Absolute tolerance for comparing normalized totals.
pub const TOLERANCE: Probability = 1e-9;
/// Number of distinct values in an arbitrary distribution.
pub const ARBITRARY_SUPPORT: usize = 16;
/// Number of observations drawn for an arbitrary distribution.
pub const ARBITRARY_SAMPLES: usize = 256;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at INFO.
/// Location, target and thread decorations are turned off.
#[cfg(feature = "logging")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
