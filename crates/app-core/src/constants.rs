use std::time::Duration;

// Shared scene/interaction tuning constants used by both web and native frontends.

// Globe geometry
pub const GLOBE_RADIUS: f32 = 2.0; // sphere radius in world units
pub const GLOBE_LAT_SEGMENTS: u32 = 64;
pub const GLOBE_LON_SEGMENTS: u32 = 64;
pub const MARKER_ALTITUDE: f32 = 2.02; // markers sit just above the surface

// Equirectangular texture calibration: the land layout used by the globe
// shader has its prime meridian at 90 degrees east of the mesh seam, so
// projected longitudes are shifted by this amount before spherical mapping.
pub const TEXTURE_LON_OFFSET_DEG: f32 = 90.0;

// Continuous spin, radians per second (frame-rate independent)
pub const SPIN_RATE_RAD_PER_SEC: f32 = 0.03;

// Marker presentation
pub const MARKER_OPACITY_IDLE: f32 = 0.95;
pub const MARKER_OPACITY_HOVER: f32 = 1.0;
pub const MARKER_PICK_RADIUS: f32 = 0.45; // ray-sphere radius around a marker

// Camera (matches the fixed rig: eye starts at z=5, 45 degree fov)
pub const CAMERA_DISTANCE: f32 = 5.0;
pub const CAMERA_FOV_Y_RAD: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_Z_NEAR: f32 = 0.1;
pub const CAMERA_Z_FAR: f32 = 100.0;
pub const MIN_CAMERA_DISTANCE: f32 = 3.0;
pub const MAX_CAMERA_DISTANCE: f32 = 8.0;
pub const ORBIT_SENSITIVITY: f32 = 0.005; // radians per pixel dragged
pub const ZOOM_WHEEL_RATE: f32 = 0.0015; // exponential zoom per wheel delta unit
pub const CLICK_DRAG_THRESHOLD_PX: f32 = 5.0; // below this a press counts as a click

// Audio player
pub const DEFAULT_VOLUME: f32 = 0.7;
pub const PLAYER_BAR_COUNT: usize = 20;
pub const PLAYER_FFT_SIZE: u32 = 64;
pub const PLAYER_BAR_FLOOR: f32 = 0.05; // bars never collapse below 5% height

// UI timing
pub const SLIDE_LOCK: Duration = Duration::from_millis(300);
pub const GUIDE_MESSAGE_TIMEOUT: Duration = Duration::from_secs(10);
