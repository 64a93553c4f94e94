// simulation/history.rs
// Append-only time-series storage for the simulation. Four aligned
// series, one entry per frame, owned by the Simulation and handed to
// the rendering collaborator as a shared reference only.

use crate::config;

use super::physics::PhysicsSample;

/// Aligned {t, B, Φ, ε} series in insertion (= time) order. Grows
/// without bound for the lifetime of the simulation, which is accepted
/// for bounded demo durations.
#[derive(Debug, Clone, Default)]
pub struct History {
    time: Vec<f64>,
    field: Vec<f64>,
    flux: Vec<f64>,
    emf: Vec<f64>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one sample to all four series in lockstep.
    pub fn push(&mut self, sample: &PhysicsSample) {
        self.time.push(sample.time);
        self.field.push(sample.field);
        self.flux.push(sample.flux);
        self.emf.push(sample.emf);
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn field(&self) -> &[f64] {
        &self.field
    }

    pub fn flux(&self) -> &[f64] {
        &self.flux
    }

    pub fn emf(&self) -> &[f64] {
        &self.emf
    }

    /// Latest recorded time, 0 for an empty history.
    pub fn time_max(&self) -> f64 {
        self.time.last().copied().unwrap_or(0.0)
    }
}

/// Running min/max of a series scaled by the axis margin, or `None`
/// when the series is too flat to justify a rescale: fewer than two
/// distinct values, or a spread at or below `AXIS_MIN_SPREAD`.
pub fn scaled_bounds(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    if values.iter().all(|v| *v == first) {
        return None;
    }
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if hi - lo <= config::AXIS_MIN_SPREAD {
        return None;
    }
    Some((lo * config::AXIS_MARGIN, hi * config::AXIS_MARGIN))
}
