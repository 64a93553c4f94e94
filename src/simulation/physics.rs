// simulation/physics.rs
// Closed-form Faraday's-law physics: field, flux and induced EMF as
// pure functions of configuration and simulated time.

use crate::config;
use crate::error::SimError;

/// Simulated time for a frame index. Depends only on the index, never
/// on wall-clock render timing.
pub fn simulated_time(frame: u64) -> f64 {
    frame as f64 * config::DT
}

/// Immutable coil/field configuration with derived quantities computed
/// once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopConfig {
    turns: u32,
    radius: f64,
    peak_field: f64,
    frequency: f64,
    area: f64,
    omega: f64,
}

/// One instant of the simulation: {t, B, Φ, ε}.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsSample {
    /// Simulated time in seconds.
    pub time: f64,
    /// Magnetic field in tesla.
    pub field: f64,
    /// Magnetic flux through the loop in weber.
    pub flux: f64,
    /// Induced EMF in volts.
    pub emf: f64,
}

impl LoopConfig {
    /// Validate and derive. All four parameters must be positive; the
    /// CLI/GUI layer is expected to reject bad input before it gets
    /// here, so this is a fail-fast backstop.
    pub fn new(turns: u32, radius: f64, peak_field: f64, frequency: f64) -> Result<Self, SimError> {
        if turns == 0 {
            return Err(SimError::InvalidConfiguration(
                "turns must be positive".into(),
            ));
        }
        if !(radius > 0.0) {
            return Err(SimError::InvalidConfiguration(
                "radius must be positive".into(),
            ));
        }
        if !(peak_field > 0.0) {
            return Err(SimError::InvalidConfiguration(
                "peak field must be positive".into(),
            ));
        }
        if !(frequency > 0.0) {
            return Err(SimError::InvalidConfiguration(
                "frequency must be positive".into(),
            ));
        }
        Ok(Self {
            turns,
            radius,
            peak_field,
            frequency,
            area: std::f64::consts::PI * radius * radius,
            omega: std::f64::consts::TAU * frequency,
        })
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn peak_field(&self) -> f64 {
        self.peak_field
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Loop area A = πr².
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Angular frequency ω = 2πf.
    pub fn omega(&self) -> f64 {
        self.omega
    }

    /// B(t) = B_max · cos(ωt).
    pub fn field_at(&self, time: f64) -> f64 {
        self.peak_field * (self.omega * time).cos()
    }

    /// Φ = B · A (uniform perpendicular field proxy).
    pub fn flux_of(&self, field: f64) -> f64 {
        field * self.area
    }

    /// ε = −N · dΦ/dt, with dB/dt taken analytically. Never a finite
    /// difference of stored samples.
    pub fn emf_at(&self, time: f64) -> f64 {
        let db_dt = -self.peak_field * self.omega * (self.omega * time).sin();
        let dphi_dt = self.area * db_dt;
        -(self.turns as f64) * dphi_dt
    }

    /// Theoretical EMF amplitude N·A·B_max·ω.
    pub fn peak_emf(&self) -> f64 {
        self.turns as f64 * self.area * self.peak_field * self.omega
    }

    /// |ε| relative to the theoretical amplitude, clamped to [0, 1].
    /// Drives the loop-tint mapping only; not a physical quantity.
    pub fn emf_normalized_intensity(&self, emf: f64) -> f64 {
        (emf.abs() / self.peak_emf()).clamp(0.0, 1.0)
    }

    /// |B| / B_max in [0, 1]; gates field-vector and flux-line
    /// visibility.
    pub fn field_intensity(&self, field: f64) -> f64 {
        (field.abs() / self.peak_field).clamp(0.0, 1.0)
    }

    /// Evaluate the full sample at t = frame · Δt.
    pub fn sample(&self, frame: u64) -> PhysicsSample {
        let time = simulated_time(frame);
        let field = self.field_at(time);
        PhysicsSample {
            time,
            field,
            flux: self.flux_of(field),
            emf: self.emf_at(time),
        }
    }
}
