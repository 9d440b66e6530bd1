use glam::Vec3;
use crate::api::ui::UiState;
use crate::assets::textures::TextureRegistry;
use crate::components::mesh::MeshColor;
use crate::controls::orbit::OrbitControls;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::input::event::InputEvent;
use crate::input::pointer::Viewport;
use crate::picking::ray::{Hit, Raycaster};
use crate::renderer::camera::PerspectiveCamera;

/// Configuration for the engine, provided by the app.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Vertical field of view in degrees (default: 75).
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    /// Initial eye position.
    pub camera_position: Vec3,
    /// Point the camera looks at and orbits around.
    pub camera_target: Vec3,
    /// Ambient light color (default: white).
    pub ambient: MeshColor,
    /// Maximum number of mesh instances per frame (default: 512).
    pub max_instances: usize,
    /// Ease orbit motion out over several frames.
    pub enable_damping: bool,
    /// Fraction of pending orbit motion applied per frame (default: 0.05).
    pub damping_factor: f32,
    /// DOM id of the caption element.
    pub caption_element: String,
    /// Seed for the scene's random number generator.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fov_deg: 75.0,
            near: 0.1,
            far: 1000.0,
            camera_position: Vec3::new(0.0, 0.0, 100.0),
            camera_target: Vec3::ZERO,
            ambient: MeshColor::WHITE,
            max_instances: 512,
            enable_damping: true,
            damping_factor: 0.05,
            caption_element: "current".to_string(),
            seed: 42,
        }
    }
}

/// The core contract every app must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Build the scene and request textures.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Per-frame update, before controls and rendering.
    fn update(&mut self, ctx: &mut EngineContext);

    /// React to an input event. Orbit controls have already seen it.
    fn on_input(&mut self, _ctx: &mut EngineContext, _event: &InputEvent) {}
}

/// Mutable access to engine state, passed to every `Game` hook.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub controls: OrbitControls,
    pub viewport: Viewport,
    pub textures: TextureRegistry,
    pub ui: UiState,
    pub rng: Rng,
    pub raycaster: Raycaster,
    pub ambient: MeshColor,
}

impl EngineContext {
    pub fn new(config: &GameConfig, viewport: Viewport) -> Self {
        let mut camera =
            PerspectiveCamera::new(config.fov_deg, viewport.aspect(), config.near, config.far)
                .with_position(config.camera_position);
        camera.look_at(config.camera_target);

        let controls = OrbitControls::new(config.camera_target)
            .with_damping(config.enable_damping, config.damping_factor);

        Self {
            scene: Scene::new(),
            camera,
            controls,
            viewport,
            textures: TextureRegistry::new(),
            ui: UiState::new(),
            rng: Rng::new(config.seed),
            raycaster: Raycaster::new(),
            ambient: config.ambient,
        }
    }

    /// New viewport size: the camera aspect follows it.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.camera.set_aspect(self.viewport.aspect());
        log::debug!("viewport resized to {}x{}", width, height);
    }

    /// Everything under the pointer at pixel (x, y), nearest first.
    pub fn pick(&mut self, x: f32, y: f32) -> Vec<Hit> {
        self.scene.propagate();
        let ndc = self.viewport.to_ndc(x, y);
        let ray = self.camera.ray_through(ndc);
        self.raycaster.intersect_scene(&ray, &self.scene)
    }

    /// Route an event to the orbit controls and the viewport.
    pub fn handle_controls(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { x, y, button } => self.controls.pointer_down(x, y, button),
            InputEvent::PointerMove { x, y } => self.controls.pointer_move(x, y, &self.viewport),
            InputEvent::PointerUp { .. } => self.controls.pointer_up(),
            InputEvent::Wheel { delta_y } => self.controls.wheel(delta_y),
            InputEvent::Resize { width, height } => self.resize(width, height),
        }
    }
}
