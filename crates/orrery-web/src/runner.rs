use orrery_engine::{
    build_render_buffer, EngineContext, EngineError, FrameData, Game, GameConfig, InputEvent,
    PackedFrameRenderer, ProtocolLayout, RenderBuffer, Renderer, Rng, TextureId, UiSurface,
    Viewport,
};

/// Generic app runner that wires up the engine loop.
///
/// Each concrete app creates a `thread_local!` AppRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct AppRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    render_buffer: RenderBuffer,
    renderer: PackedFrameRenderer,
    surface: Box<dyn UiSurface>,
    config: GameConfig,
    initialized: bool,
}

impl<G: Game> AppRunner<G> {
    /// `width`/`height` are the surface size in CSS pixels.
    pub fn new(
        game: G,
        surface: Box<dyn UiSurface>,
        width: f32,
        height: f32,
        pixel_ratio: f32,
    ) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);
        let viewport = Viewport::new(width, height);

        Self {
            game,
            ctx: EngineContext::new(&config, viewport),
            render_buffer: RenderBuffer::new(),
            renderer: PackedFrameRenderer::new(layout, width as u32, height as u32, pixel_ratio),
            surface,
            config,
            initialized: false,
        }
    }

    /// Replace the configured seed. Only has an effect before `init`.
    pub fn reseed(&mut self, seed: u64) {
        self.ctx.rng = Rng::new(seed);
    }

    /// Build the scene. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.ctx.scene.propagate();
        self.initialized = true;
        log::info!(
            "scene ready: {} nodes, {} textures requested, {} renderer",
            self.ctx.scene.len(),
            self.ctx.textures.len(),
            self.renderer.backend()
        );
    }

    /// Dispatch one input event right away: controls first, then the app.
    pub fn push_input(&mut self, event: InputEvent) {
        if !self.initialized {
            return;
        }
        self.ctx.handle_controls(&event);
        if let InputEvent::Resize { width, height } = event {
            self.renderer.resize(width as u32, height as u32);
        }
        self.game.on_input(&mut self.ctx, &event);
        self.ctx.ui.flush(self.surface.as_mut());
    }

    /// Run one frame: update, orbit controls, world matrices, pack, draw.
    pub fn tick(&mut self) {
        if !self.initialized {
            return;
        }

        self.game.update(&mut self.ctx);
        self.ctx.controls.update(&mut self.ctx.camera);
        self.ctx.scene.propagate();

        build_render_buffer(&self.ctx.scene, &self.ctx.textures, &mut self.render_buffer);

        let ambient = self.ctx.ambient;
        self.renderer.draw(&FrameData {
            camera: self.ctx.camera.uniform(),
            instances: self.render_buffer.as_slice(),
            ambient: [ambient.r, ambient.g, ambient.b],
        });

        self.ctx.ui.flush(self.surface.as_mut());
    }

    /// Host reports a texture fetch result.
    pub fn texture_loaded(&mut self, id: u32, ok: bool) -> Result<(), EngineError> {
        self.ctx.textures.resolve(TextureId(id), ok).map(|_| ())
    }

    /// JSON array of textures the host still has to fetch.
    pub fn texture_requests(&self) -> String {
        match self.ctx.textures.pending_json() {
            Ok(json) => json,
            Err(err) => {
                log::error!("could not encode texture requests: {}", err);
                "[]".to_string()
            }
        }
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // ---- Frame buffer accessors for host reads ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.renderer.buffer_ptr()
    }

    pub fn frame_len(&self) -> u32 {
        self.renderer.buffer_len() as u32
    }

    pub fn frame(&self) -> &[f32] {
        self.renderer.buffer()
    }

    pub fn instance_count(&self) -> u32 {
        self.renderer.instance_count()
    }

    pub fn max_instances(&self) -> u32 {
        self.renderer.layout().max_instances as u32
    }

    pub fn surface_width(&self) -> u32 {
        self.renderer.size().0
    }

    pub fn surface_height(&self) -> u32 {
        self.renderer.size().1
    }
}
