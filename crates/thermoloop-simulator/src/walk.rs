//! The bounded random walk that drives the simulated temperature.

use rand::Rng;

/// Directed step bounds when a setpoint is known, °C per cycle.
const STEP_MIN: f64 = 0.1;
const STEP_MAX: f64 = 0.4;
/// Additive sensor noise applied after the directed step.
const NOISE: f64 = 0.1;
/// Undirected drift bound when no setpoint is available.
const DRIFT: f64 = 0.2;

/// Advance the simulated temperature by one control cycle.
///
/// Moves toward `target` by a random step in `[0.1, 0.4]` plus sensor
/// noise in `[-0.1, 0.1]`; with no target the value drifts undirected in
/// `[-0.2, 0.2]`. The step is deliberately not capped by the remaining
/// distance, so the value oscillates around the setpoint instead of
/// settling exactly. The wobble is the simulated sensor-plus-room noise,
/// not an error to correct.
pub fn step(current: f64, target: Option<f64>, rng: &mut impl Rng) -> f64 {
    let Some(target) = target else {
        return current + rng.gen_range(-DRIFT..=DRIFT);
    };

    let mut next = current;
    if current < target {
        next += rng.gen_range(STEP_MIN..=STEP_MAX);
    } else if current > target {
        next -= rng.gen_range(STEP_MIN..=STEP_MAX);
    }
    next + rng.gen_range(-NOISE..=NOISE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
