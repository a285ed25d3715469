use orrery::{
    build_render_buffer, AssetManifest, CameraUniform, EngineContext, FrameStats, Game,
    GameConfig, InputEvent, InputQueue, ProtocolLayout, RenderBuffer, HEADER_FLOATS,
};

/// Generic runner that wires up the per-frame loop.
///
/// Each concrete scene creates a `thread_local!` GameRunner and exports
/// free functions via `#[wasm_bindgen]`, because wasm-bindgen cannot
/// export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
    header: [f32; HEADER_FLOATS],
    camera: CameraUniform,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);
        let ctx = EngineContext::from_config(&config);
        let camera = ctx.camera.uniform();

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            layout,
            config,
            initialized: false,
            header: [0.0; HEADER_FLOATS],
            camera,
        }
    }

    /// Initialize the scene. Call once after construction.
    pub fn init(&mut self) {
        self.ctx.clock.reset();
        self.game.init(&mut self.ctx);
        self.ctx.orbit_paths.rebuild();
        self.initialized = true;
        self.publish();
        log::info!(
            "runner: {} entities, {} orbiting, {} stars",
            self.ctx.scene.len(),
            self.ctx.orbits.len(),
            self.ctx.starfield.len()
        );
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Merge a texture manifest sent by the host.
    pub fn load_manifest(&mut self, json: &str) {
        match AssetManifest::from_json(json) {
            Ok(manifest) => {
                self.ctx.textures.merge(&manifest);
                log::info!("runner: manifest loaded ({} textures)", self.ctx.textures.len());
            }
            Err(e) => log::error!("runner: bad manifest: {}", e),
        }
    }

    /// Current texture table as JSON, in index order.
    pub fn texture_manifest_json(&self) -> String {
        match self.ctx.textures.to_manifest().to_json() {
            Ok(json) => json,
            Err(e) => {
                log::error!("runner: could not serialize manifest: {}", e);
                String::from("{\"textures\":[]}")
            }
        }
    }

    /// Jump the session clock forward to `seconds`.
    pub fn seek(&mut self, seconds: f64) {
        self.ctx.clock.seek(seconds);
    }

    /// Run one frame: camera input, game hook, orbit step, output buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clock.advance(dt);

        // Input handlers run to completion, in arrival order, before animation.
        for event in self.input.iter() {
            self.ctx.apply_camera_input(event);
        }

        self.game.update(&mut self.ctx, &self.input);
        self.input.drain();

        self.ctx.step_orbits();

        self.publish();
    }

    /// Rebuild every host-visible buffer from the context.
    fn publish(&mut self) {
        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
        if self.ctx.orbit_paths.refresh() {
            log::debug!("runner: orbit rings rebuilt ({} vertices)", self.ctx.orbit_paths.vertex_count());
        }
        self.camera = self.ctx.camera.uniform();

        let stats = FrameStats {
            frame: self.ctx.clock.frame(),
            instance_count: self.render_buffer.instances.len(),
            star_count: self.ctx.starfield.len(),
            orbit_vertex_count: self.ctx.orbit_paths.vertices().len(),
            elapsed: self.ctx.clock.elapsed(),
            fov: self.ctx.camera.fov,
            aspect: self.ctx.camera.aspect,
            projection_generation: self.ctx.camera.projection_generation(),
        };
        self.layout.write_header(&stats, &mut self.header);
    }

    // ---- Pointer accessors for host reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera as *const CameraUniform as *const f32
    }

    pub fn camera_floats(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(&self.camera))
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn stars_ptr(&self) -> *const f32 {
        self.ctx.starfield.as_ptr()
    }

    pub fn star_count(&self) -> u32 {
        self.ctx.starfield.len().min(self.layout.max_stars) as u32
    }

    pub fn orbit_vertices_ptr(&self) -> *const f32 {
        self.ctx.orbit_paths.vertices_ptr()
    }

    pub fn orbit_vertex_count(&self) -> u32 {
        self.ctx.orbit_paths.vertex_count()
    }

    pub fn orbit_strip_lengths(&self) -> &[u32] {
        self.ctx.orbit_paths.strip_lengths()
    }

    pub fn elapsed(&self) -> f64 {
        self.ctx.clock.elapsed()
    }

    pub fn fov(&self) -> f32 {
        self.ctx.camera.fov
    }

    pub fn projection_generation(&self) -> u32 {
        self.ctx.camera.projection_generation()
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_stars(&self) -> u32 {
        self.layout.max_stars as u32
    }

    pub fn max_orbit_vertices(&self) -> u32 {
        self.layout.max_orbit_vertices as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    pub fn viewport_width(&self) -> f32 {
        self.config.viewport_width
    }

    pub fn viewport_height(&self) -> f32 {
        self.config.viewport_height
    }

    /// Engine state, for scenes and tests that need to inspect it.
    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    /// Mutable engine state between frames (e.g. toggling an orbit ring).
    pub fn context_mut(&mut self) -> &mut EngineContext {
        &mut self.ctx
    }
}
