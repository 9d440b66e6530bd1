//! Sizes, distances and rates for the sun, earth and moon system.
//!
//! Units are scene units; rates are radians per tick, so perceived speed
//! follows the display refresh rate.

// ── Orbits ───────────────────────────────────────────────────────────

/// Earth's distance from the sun.
pub const DISTANCE: f32 = 89.0;
/// Moon's distance from the earth.
pub const MOON_DISTANCE: f32 = DISTANCE - 41.0;

pub const EARTH_SPIN: f32 = 0.002;
pub const MOON_SPIN: f32 = 0.001;

// ── Bodies ───────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 30.0;
pub const EARTH_RADIUS: f32 = 20.0;
pub const MOON_RADIUS: f32 = 10.0;
pub const BODY_SEGMENTS: u32 = 100;

// ── Orbit rings ──────────────────────────────────────────────────────

pub const RING_SEGMENTS: u32 = 100;
/// Rotation about X applied to both rings (radians, authored value).
pub const RING_TILT: f32 = 300.0;
/// Band width of each ring.
pub const RING_WIDTH: f32 = 1.0;
pub const RING_COLOR: u32 = 0xffffff;

// ── Stars ────────────────────────────────────────────────────────────

pub const STAR_COUNT: usize = 200;
pub const STAR_RADIUS: f32 = 0.25;
pub const STAR_SEGMENTS: u32 = 24;
pub const STAR_COLOR: u32 = 0xffffff;
/// Edge length of the cube stars are scattered in (centred on the origin).
pub const STAR_SPREAD: f32 = 400.0;

/// The three bodies that answer to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    Sun,
    Earth,
    Moon,
}

impl Body {
    pub fn label(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Earth => "Earth",
            Body::Moon => "Moon",
        }
    }

    pub fn fact(self) -> &'static str {
        match self {
            Body::Sun => "Big AF",
            Body::Earth => "Big",
            Body::Moon => "Meh",
        }
    }

    pub fn radius(self) -> f32 {
        match self {
            Body::Sun => SUN_RADIUS,
            Body::Earth => EARTH_RADIUS,
            Body::Moon => MOON_RADIUS,
        }
    }

    pub fn texture_path(self) -> &'static str {
        match self {
            Body::Sun => "img/sun.jpg",
            Body::Earth => "img/earth.jpg",
            Body::Moon => "img/moon.jpg",
        }
    }

    /// Text shown in the caption element, e.g. "Earth: Big".
    pub fn caption(self) -> String {
        format!("{}: {}", self.label(), self.fact())
    }
}
