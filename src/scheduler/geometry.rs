// scheduler/geometry.rs
// Field-vector, flux-ring and camera payloads handed to the external
// renderer when their cadence fires.

use ultraviolet::Vec3;

use crate::config;
use crate::simulation::physics::LoopConfig;

/// One field arrow: origin in the loop plane, arrow along ±z scaled by
/// the field strength.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldVector {
    pub origin: Vec3,
    pub arrow: Vec3,
}

/// A circle of flux-line points in the loop plane.
#[derive(Debug, Clone, PartialEq)]
pub struct FluxRing {
    pub radius: f32,
    pub points: Vec<Vec3>,
}

/// Geometry rebuilt wholesale on each field redraw. The `generation`
/// id replaces the previous batch; the renderer drops everything
/// stamped with an older generation instead of scanning for tagged
/// artists.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldGeometry {
    pub generation: u64,
    /// Field direction: true when B points along +z.
    pub points_up: bool,
    pub vectors_visible: bool,
    pub rings_visible: bool,
    pub vectors: Vec<FieldVector>,
    pub rings: Vec<FluxRing>,
}

/// 3D view orientation, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub azimuth: f64,
    pub elevation: f64,
}

/// Camera pose for a simulated time: a slow sinusoidal swing around
/// the base azimuth at constant elevation.
pub fn camera_pose(time: f64) -> CameraPose {
    CameraPose {
        azimuth: config::CAMERA_BASE_AZIMUTH_DEG
            + config::CAMERA_AZIMUTH_SWING_DEG * (config::CAMERA_SWING_RATE * time).sin(),
        elevation: config::CAMERA_ELEVATION_DEG,
    }
}

/// Build the field-vector and flux-ring batch for the current field
/// value. Vectors live on a square grid in the loop plane with arrows
/// perpendicular to it; both categories are emitted empty when the
/// normalized intensity sits below their visibility threshold.
pub fn field_geometry(config: &LoopConfig, field: f64, generation: u64) -> FieldGeometry {
    let intensity = config.field_intensity(field);
    let vectors_visible = intensity > config::FIELD_VECTOR_THRESHOLD;
    let rings_visible = intensity > config::FLUX_LINE_THRESHOLD;

    let mut vectors = Vec::new();
    if vectors_visible {
        let n = config::FIELD_GRID_POINTS;
        let extent = config::FIELD_GRID_EXTENT;
        let step = 2.0 * extent / (n - 1) as f32;
        let arrow = Vec3::new(0.0, 0.0, (field * config::FIELD_ARROW_SCALE) as f32);
        vectors.reserve(n * n);
        for ix in 0..n {
            for iy in 0..n {
                let origin = Vec3::new(-extent + ix as f32 * step, -extent + iy as f32 * step, 0.0);
                vectors.push(FieldVector { origin, arrow });
            }
        }
    }

    let mut rings = Vec::new();
    if rings_visible {
        for &radius in &config::FLUX_RING_RADII {
            let segments = config::FLUX_RING_SEGMENTS;
            let mut points = Vec::with_capacity(segments);
            for i in 0..segments {
                let theta = std::f32::consts::TAU * i as f32 / segments as f32;
                points.push(Vec3::new(radius * theta.cos(), radius * theta.sin(), 0.0));
            }
            rings.push(FluxRing { radius, points });
        }
    }

    FieldGeometry {
        generation,
        points_up: field >= 0.0,
        vectors_visible,
        rings_visible,
        vectors,
        rings,
    }
}
