// Centralized configuration for the induction simulation and its
// rendering cadence policy.

// ====================
// Clocks
// ====================
/// Simulated time advanced per frame, in seconds. Simulated time is a
/// pure function of the frame index: t = frame * DT.
pub const DT: f64 = 0.05;
/// Nominal wall-clock interval between frames, in milliseconds. This is
/// deliberately decoupled from `DT`; the render tick never feeds back
/// into the physics.
pub const FRAME_INTERVAL_MS: u64 = 40;

// ====================
// Default coil parameters
// ====================
pub const DEFAULT_TURNS: u32 = 1;
/// Loop radius in meters.
pub const DEFAULT_RADIUS_M: f64 = 1.0;
/// Peak magnetic field in tesla.
pub const DEFAULT_PEAK_FIELD_T: f64 = 2.0;
/// Field oscillation frequency in hertz.
pub const DEFAULT_FREQUENCY_HZ: f64 = 0.5;
/// Demo run duration in seconds.
pub const DEFAULT_DURATION_S: f64 = 10.0;

// ====================
// Render cadences (frame-modulo intervals)
// ====================
/// Field-vector geometry is rebuilt every N frames.
pub const FIELD_REDRAW_INTERVAL: u64 = 2;
/// Camera azimuth is recomputed every N frames.
pub const CAMERA_ROTATE_INTERVAL: u64 = 5;
/// Axis bounds are recomputed every N frames.
pub const AXIS_RESCALE_INTERVAL: u64 = 10;
/// Text overlay is refreshed every N frames.
pub const TEXT_REFRESH_INTERVAL: u64 = 3;
/// Axis rescaling additionally requires more than this many history
/// samples before it fires at all.
pub const AXIS_RESCALE_MIN_SAMPLES: usize = 10;

// ====================
// Axis rescaling
// ====================
/// Margin factor applied to the running min/max of a series.
pub const AXIS_MARGIN: f64 = 1.1;
/// Minimum min/max spread for a rescale; flatter series keep their
/// previous bounds.
pub const AXIS_MIN_SPREAD: f64 = 1e-3;

// ====================
// Field-vector / flux-line geometry
// ====================
/// Normalized field intensity below which field vectors are hidden.
pub const FIELD_VECTOR_THRESHOLD: f64 = 0.05;
/// Normalized field intensity below which flux lines are hidden.
pub const FLUX_LINE_THRESHOLD: f64 = 0.10;
/// Half-extent of the square sample grid for field vectors, in meters.
pub const FIELD_GRID_EXTENT: f32 = 1.2;
/// Sample points per grid axis.
pub const FIELD_GRID_POINTS: usize = 4;
/// Arrow length per tesla along the field axis.
pub const FIELD_ARROW_SCALE: f64 = 0.4;
/// Radii of the concentric flux rings, in meters.
pub const FLUX_RING_RADII: [f32; 2] = [0.5, 0.8];
/// Points sampled per flux ring.
pub const FLUX_RING_SEGMENTS: usize = 12;

// ====================
// Camera
// ====================
pub const CAMERA_BASE_AZIMUTH_DEG: f64 = 45.0;
pub const CAMERA_AZIMUTH_SWING_DEG: f64 = 15.0;
/// Rate of the azimuth swing in radians per simulated second.
pub const CAMERA_SWING_RATE: f64 = 0.3;
pub const CAMERA_ELEVATION_DEG: f64 = 20.0;
