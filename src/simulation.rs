//! Window host: builder and winit event loop driving a [`ParticleField`].
//!
//! ```ignore
//! use neural_field::Simulation;
//!
//! Simulation::new()
//!     .with_node_count(120)
//!     .with_seed(7)
//!     .run()?;
//! ```
//!
//! Controls: Space pauses, R respawns the field, Escape quits. A left click
//! drops a ripple under the cursor.

use std::sync::Arc;

use glam::Vec2;
use rand::{rngs::SmallRng, SeedableRng};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::canvas::DrawList;
use crate::error::SimulationError;
use crate::field::{FieldConfig, ParticleField, DEFAULT_NODE_COUNT};
use crate::gpu::GpuState;
use crate::input::{Input, KeyCode, MouseButton};
use crate::page::{QuoteRotator, Rect, RippleSet, Typewriter, DEFAULT_PHRASES, DEFAULT_QUOTES};
use crate::rules::Kinematics;
use crate::spawn::SpawnConfig;
use crate::time::Time;
use crate::visuals::VisualConfig;

/// Side of the square a click ripple is spawned from, in pixels.
const RIPPLE_BUTTON_SIZE: f32 = 96.0;

/// A neural-network background builder.
///
/// Use method chaining to configure, then call `.run()` to start.
pub struct Simulation {
    node_count: usize,
    seed: Option<u64>,
    config: FieldConfig,
    title: String,
    window_size: (u32, u32),
    phrases: Vec<String>,
    quotes: Vec<String>,
}

impl Simulation {
    /// Create a simulation with default settings.
    pub fn new() -> Self {
        Self {
            node_count: DEFAULT_NODE_COUNT,
            seed: None,
            config: FieldConfig::default(),
            title: "Neural Field".to_string(),
            window_size: (1280, 720),
            phrases: DEFAULT_PHRASES.iter().map(|s| s.to_string()).collect(),
            quotes: DEFAULT_QUOTES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Set the number of nodes.
    pub fn with_node_count(mut self, count: usize) -> Self {
        self.node_count = count;
        self
    }

    /// Seed the random source so every run spawns the same field.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_spawn(mut self, spawn: SpawnConfig) -> Self {
        self.config.spawn = spawn;
        self
    }

    pub fn with_kinematics(mut self, kinematics: Kinematics) -> Self {
        self.config.kinematics = kinematics;
        self
    }

    pub fn with_visuals(mut self, visuals: VisualConfig) -> Self {
        self.config.visuals = visuals;
        self
    }

    /// Title prefix; the typewriter text is appended after it.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Initial window size in logical pixels.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    pub fn with_typewriter_phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phrases = phrases.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_quotes<I, S>(mut self, quotes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.quotes = quotes.into_iter().map(Into::into).collect();
        self
    }

    /// Run the background. This blocks until the window is closed.
    pub fn run(self) -> Result<(), SimulationError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    settings: Simulation,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    field: Option<ParticleField>,
    rng: SmallRng,
    input: Input,
    time: Time,
    draw_list: DrawList,
    ripples: RippleSet,
    typewriter: Typewriter,
    quotes: QuoteRotator,
    error: Option<SimulationError>,
}

impl App {
    fn new(settings: Simulation) -> Self {
        let rng = match settings.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let typewriter = Typewriter::new(settings.phrases.iter().cloned());
        let quotes = QuoteRotator::new(settings.quotes.iter().cloned());

        Self {
            settings,
            window: None,
            gpu_state: None,
            field: None,
            rng,
            input: Input::new(),
            time: Time::new(),
            draw_list: DrawList::new(),
            ripples: RippleSet::new(),
            typewriter,
            quotes,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: SimulationError) {
        self.error = Some(error);
        event_loop.exit();
    }

    fn title(&self) -> String {
        let text = self.typewriter.text();
        if text.is_empty() {
            self.settings.title.clone()
        } else {
            format!("{} | {}", self.settings.title, text)
        }
    }

    /// Drop a ripple at `click`. Ignored while paused, since the frozen clock
    /// would never let it expire.
    fn spawn_ripple(&mut self, click: Vec2, now: std::time::Duration) -> bool {
        if self.time.is_paused() {
            return false;
        }
        self.ripples
            .spawn(Rect::centered(click, RIPPLE_BUTTON_SIZE), click, now);
        true
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if self.time.update() {
            log::debug!(
                "{:.1} fps, frame {} ({:?})",
                self.time.fps(),
                self.time.frame(),
                self.time.delta()
            );
        }

        if self.input.key_pressed(KeyCode::Escape) {
            event_loop.exit();
            return;
        }
        if self.input.key_pressed(KeyCode::Space) {
            self.time.toggle_pause();
            log::info!("{}", if self.time.is_paused() { "paused" } else { "resumed" });
        }

        let now = self.time.elapsed();
        let pointer = self.input.pointer();

        if let Some(field) = &mut self.field {
            if self.input.key_pressed(KeyCode::R) {
                field.rebuild(self.settings.node_count, &mut self.rng);
                log::info!(
                    "respawned {} nodes, {} connections",
                    field.nodes().len(),
                    field.connections().len()
                );
            }
            if self.time.is_paused() {
                field.render(&mut self.draw_list);
            } else {
                field.frame(pointer, &mut self.draw_list);
            }
        }

        if self.input.mouse_pressed(MouseButton::Left) {
            if let Some(click) = pointer {
                self.spawn_ripple(click, now);
            }
        }
        self.ripples.prune(now);
        let ripple_color = self.settings.config.visuals.connection_color;
        self.ripples.paint(&mut self.draw_list, ripple_color, now);

        if self.typewriter.update(now) {
            let title = self.title();
            if let Some(window) = &self.window {
                window.set_title(&title);
            }
        }
        if let Some(quote) = self.quotes.update(now, &mut self.rng) {
            log::info!("quote: {}", quote);
        }

        if let Some(gpu_state) = &mut self.gpu_state {
            match gpu_state.render(&self.draw_list) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => gpu_state.reconfigure(),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("GPU out of memory");
                    event_loop.exit();
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        self.input.end_frame();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.settings.window_size;
        let window_attrs = Window::default_attributes()
            .with_title(self.title())
            .with_inner_size(winit::dpi::LogicalSize::new(width, height));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, e.into()),
        };

        let gpu_state = match pollster::block_on(GpuState::new(
            window.clone(),
            &self.settings.config.visuals,
        )) {
            Ok(state) => state,
            Err(e) => return self.fail(event_loop, e.into()),
        };

        let size = window.inner_size();
        let field = ParticleField::with_config(
            size.width as f32,
            size.height as f32,
            self.settings.node_count,
            self.settings.config.clone(),
            &mut self.rng,
        );
        log::info!(
            "field initialized: {} nodes, {} connections",
            field.nodes().len(),
            field.connections().len()
        );

        self.field = Some(field);
        self.gpu_state = Some(gpu_state);
        self.time = Time::new();
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.input.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                log::debug!("resized to {}x{}", physical_size.width, physical_size.height);
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
                if let Some(field) = &mut self.field {
                    field.resize(physical_size.width as f32, physical_size.height as f32);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let sim = Simulation::new();
        assert_eq!(sim.node_count, 80);
        assert_eq!(sim.seed, None);
        assert_eq!(sim.phrases.len(), DEFAULT_PHRASES.len());
        assert_eq!(sim.quotes.len(), DEFAULT_QUOTES.len());
    }

    #[test]
    fn test_builder_overrides() {
        let sim = Simulation::new()
            .with_node_count(12)
            .with_seed(3)
            .with_title("Demo")
            .with_window_size(640, 480)
            .with_typewriter_phrases(["a", "b"])
            .with_quotes(Vec::<String>::new());
        assert_eq!(sim.node_count, 12);
        assert_eq!(sim.seed, Some(3));
        assert_eq!(sim.title, "Demo");
        assert_eq!(sim.window_size, (640, 480));
        assert_eq!(sim.phrases, vec!["a".to_string(), "b".to_string()]);
        assert!(sim.quotes.is_empty());
    }

    #[test]
    fn test_no_ripples_while_paused() {
        let mut app = App::new(Simulation::new().with_seed(1));
        let click = Vec2::new(50.0, 50.0);
        let now = std::time::Duration::from_millis(100);

        assert!(app.spawn_ripple(click, now));
        assert_eq!(app.ripples.len(), 1);

        app.time.toggle_pause();
        assert!(!app.spawn_ripple(click, now));
        assert_eq!(app.ripples.len(), 1);

        app.time.toggle_pause();
        assert!(app.spawn_ripple(click, now));
        assert_eq!(app.ripples.len(), 2);
    }

    #[test]
    fn test_title_follows_typewriter() {
        let mut app = App::new(Simulation::new().with_title("Demo").with_typewriter_phrases(["hi"]));
        assert_eq!(app.title(), "Demo");
        app.typewriter.update(std::time::Duration::from_millis(1000));
        assert_eq!(app.title(), "Demo | h");
    }
}
