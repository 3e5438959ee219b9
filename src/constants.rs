/// Decorative-effect and carousel tuning constants.
///
/// These constants express intended behavior and keep magic numbers out of
/// the wiring code.
// Perspective depth applied together with the manual drag rotation
pub const PERSPECTIVE_PX: f32 = 1000.0;

// Fireworks configuration
pub const FIREWORKS_OPACITY: f64 = 0.5;
pub const FIREWORKS_ACCELERATION: f64 = 1.05;
pub const FIREWORKS_FRICTION: f64 = 0.97;
pub const FIREWORKS_GRAVITY: f64 = 1.5;
pub const FIREWORKS_PARTICLES: f64 = 75.0;
pub const FIREWORKS_EXPLOSION: f64 = 8.0;

// Fireworks pointer-interaction block: the effect ignores the pointer so it
// never competes with the carousel gestures
pub const FIREWORKS_MOUSE_CLICK: bool = false;
pub const FIREWORKS_MOUSE_MOVE: bool = false;
pub const FIREWORKS_MOUSE_MAX: f64 = 1.0;
