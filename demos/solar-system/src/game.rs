//! Solar System: earth circles the sun, the moon circles the earth, and
//! hovering a body shows a one-line fact about it.
//!
//! Orbits are driven incrementally: every tick each body is reset to its
//! parent's origin, turned a little about its own Y axis, then pushed out
//! along its (turned) local X axis.

use glam::Vec3;
use orrery_engine::{Cursor, EngineContext, Game, GameConfig, Hit, InputEvent};

use crate::bodies::{DISTANCE, EARTH_SPIN, MOON_DISTANCE, MOON_SPIN};
use crate::scene::{self, SolarScene};

pub struct SolarSystem {
    scene: Option<SolarScene>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self { scene: None }
    }

    /// Cursor and caption for the hits under the pointer (nearest first).
    /// A miss, or a hit on anything but a body, leaves the caption as it was.
    fn apply_hits(&self, ctx: &mut EngineContext, hits: &[Hit]) {
        ctx.ui.set_cursor(Cursor::Default);

        let nearest = match hits.first() {
            Some(h) => h,
            None => return,
        };
        ctx.ui.set_cursor(Cursor::Pointer);

        if let Some(body) = self.scene.as_ref().and_then(|s| s.body_of(nearest.node)) {
            ctx.ui.set_caption(body.caption());
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            camera_position: Vec3::new(0.0, 80.0, 150.0),
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        match scene::build(ctx) {
            Ok(s) => {
                log::info!("solar system: 3 bodies, {} stars", s.stars.len());
                self.scene = Some(s);
            }
            Err(err) => log::error!("could not build the solar system: {}", err),
        }
    }

    fn update(&mut self, ctx: &mut EngineContext) {
        let s = match &self.scene {
            Some(s) => s,
            None => return,
        };

        let mut earth_pos = Vec3::ZERO;
        if let Some(t) = ctx.scene.transform_mut(s.earth) {
            t.position = Vec3::ZERO;
            t.rotate_y(EARTH_SPIN);
            t.translate_x(DISTANCE);
            earth_pos = t.position;
        }

        if let Some(t) = ctx.scene.transform_mut(s.moon) {
            t.position = Vec3::ZERO;
            t.rotate_y(MOON_SPIN);
            t.translate_x(MOON_DISTANCE);
        }

        // The moon's ring sits in the root frame; keep it centred on the earth.
        if let Some(t) = ctx.scene.transform_mut(s.moon_ring) {
            t.position.x = earth_pos.x;
            t.position.z = earth_pos.z;
        }
    }

    fn on_input(&mut self, ctx: &mut EngineContext, event: &InputEvent) {
        if let InputEvent::PointerMove { x, y } = *event {
            let hits = ctx.pick(x, y);
            self.apply_hits(ctx, &hits);
        }
    }
}
