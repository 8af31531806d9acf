// Physical Constants
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;       // Mean spherical Earth radius
pub const STANDARD_GRAVITY: f64 = 9.81;            // m/s²
pub const KMH_PER_MPS: f64 = 3.6;

// Coordinate Bounds (degrees)
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

// Path Scanning
pub const CURVE_WINDOW: usize = 3;                 // Points per curvature estimate

// Friction Coefficients (mu)
pub const DRY_SURFACE: &str = "dry";
pub const WET_SURFACE: &str = "wet";
pub const ICY_SURFACE: &str = "icy";
pub const DRY_FRICTION: f64 = 0.7;
pub const WET_FRICTION: f64 = 0.4;
pub const ICY_FRICTION: f64 = 0.1;

// Alerting
pub const DEFAULT_SPEECH_RATE: u32 = 170;          // Words per minute
pub const DEFAULT_ROUTE_NAME: &str = "default";

// Demonstration curve: a sharp turn taken at 60 km/h in the wet
pub const DEMO_CURVE: [(f64, f64); 3] = [
    (12.9716, 77.5946),
    (12.9717, 77.5947),
    (12.9718, 77.5946),
];
pub const DEMO_SURFACE: &str = WET_SURFACE;
pub const DEMO_SPEED_KMH: f64 = 60.0;
