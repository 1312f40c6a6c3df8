//! The simulated-annealing optimization loop.
//!
//! Runs a fixed number of sweeps over the circuit. Each sweep visits every
//! component once in circuit order, proposes a small random displacement,
//! and accepts it if it improves the energy or, with Metropolis probability
//! `exp(-delta / temperature)`, even if it worsens it. The temperature is
//! multiplied by the cooling factor once per sweep, never per move. The best
//! layout seen so far is tracked independently of the random walk and only
//! ever improves.

use crate::energy::{Energy, EnergyModel};
use crate::error::PlaceError;
use crate::layout::{Layout, LayoutResult};
use lodestone_common::Vec2;
use lodestone_diagnostics::{Diagnostic, DiagnosticSink};
use lodestone_graph::Circuit;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

/// Tuning parameters for one annealing run.
#[derive(Debug, Clone)]
pub struct AnnealOptions {
    /// Number of sweeps; the only stopping mechanism.
    pub iterations: usize,
    /// Starting temperature, must be positive and finite.
    pub initial_temperature: f64,
    /// Per-sweep temperature multiplier, in `(0, 1]`.
    pub cooling: f64,
    /// Snapshot the best layout into the history every this many sweeps.
    pub snapshot_period: usize,
    /// Seed for the random generator; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for AnnealOptions {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            initial_temperature: 1_000.0,
            cooling: 0.99,
            snapshot_period: 100,
            seed: None,
        }
    }
}

impl AnnealOptions {
    fn validate(&self) -> Result<(), PlaceError> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(PlaceError::InvalidOption(format!(
                "initial temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if !self.cooling.is_finite() || self.cooling <= 0.0 || self.cooling > 1.0 {
            return Err(PlaceError::InvalidOption(format!(
                "cooling factor must be in (0, 1], got {}",
                self.cooling
            )));
        }
        if self.snapshot_period == 0 {
            return Err(PlaceError::InvalidOption(
                "snapshot period must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Optimizes a placement for the circuit.
///
/// Returns the best layout found over `options.iterations` sweeps together
/// with its energy and the snapshot history. Deterministic for a fixed
/// circuit, options, and seed.
pub fn anneal(
    circuit: &Circuit,
    options: &AnnealOptions,
    sink: &DiagnosticSink,
) -> Result<LayoutResult, PlaceError> {
    options.validate()?;
    let model = EnergyModel::new(circuit, sink)?;

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut current = initial_layout(&model, &mut rng);
    let mut current_energy = model.energy(&current);
    let mut best = current.clone();
    let mut best_energy = current_energy;
    warn_if_degenerate(sink, "initial", current_energy);

    let mut history = BTreeMap::new();
    history.insert(0, best.clone());

    let mut temperature = options.initial_temperature;
    for sweep in 0..options.iterations {
        for slot in 0..model.component_count() {
            let step = Vec2::new(unit_step(&mut rng), unit_step(&mut rng));
            let previous = current.positions[slot];
            current.positions[slot] = previous + step;
            let candidate = model.energy(&current);

            let accept = candidate.is_better_than(current_energy)
                || rng.gen::<f64>() < (-candidate.delta_from(current_energy) / temperature).exp();
            if accept {
                current_energy = candidate;
                if candidate.is_better_than(best_energy) {
                    best = current.clone();
                    best_energy = candidate;
                }
            } else {
                current.positions[slot] = previous;
            }
        }

        temperature *= options.cooling;
        if (sweep + 1) % options.snapshot_period == 0 {
            history.insert(sweep + 1, best.clone());
            sink.emit(Diagnostic::note(format!(
                "iteration {}: best energy {}",
                sweep + 1,
                best_energy
            )));
        }
    }

    warn_if_degenerate(sink, "final", best_energy);
    Ok(LayoutResult {
        best,
        best_energy,
        history,
    })
}

/// Places each component at an independent uniform random position in the
/// square `[-2·msl, 2·msl]²`, `msl` being the square root of the total
/// component area. No overlap avoidance; the overlap stage of the energy
/// model sorts that out.
fn initial_layout(model: &EnergyModel, rng: &mut StdRng) -> Layout {
    let span = 2.0 * (model.total_area() as f64).sqrt();
    let positions = (0..model.component_count())
        .map(|_| {
            if span > 0.0 {
                Vec2::new(
                    rng.gen_range(-span..=span).round() as i32,
                    rng.gen_range(-span..=span).round() as i32,
                )
            } else {
                Vec2::ZERO
            }
        })
        .collect();
    Layout::new(positions)
}

/// One displacement component in `{-1, 0, 1}`, the round of uniform ±1.
fn unit_step(rng: &mut StdRng) -> i32 {
    rng.gen_range(-1.0f64..=1.0).round() as i32
}

fn warn_if_degenerate(sink: &DiagnosticSink, which: &str, energy: Energy) {
    if energy.value == 0.0 {
        sink.emit(Diagnostic::warning(format!(
            "{which} energy is zero; the circuit has nothing to optimize"
        )));
    }
}
