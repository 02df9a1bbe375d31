#![allow(dead_code)]

mod app;
mod components;
mod constants;
mod content;
mod input;
mod scroll;
mod stage;
mod systems;
mod tween;
mod ui;

use std::path::Path;
use std::time::Instant;

use constants::*;
use content::PageContent;
use glam::Vec2;
use hecs::World;
use scroll::ScrollState;
use stage::{Stage, StageLayout};
use systems::{Carousel, CarouselConfig, HeroIntro, HeroScrub, PlatformsReveal};
use tracing::{debug, info, warn};
use tween::Tweener;

use glutin::prelude::*;
use glutin::surface::WindowSurface;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use egui_glow::EguiGlow;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Opt-in frame profiling: SCROLLDECK_PROFILE=1 starts a puffin server
    let profiler = if std::env::var_os("SCROLLDECK_PROFILE").is_some() {
        match puffin_http::Server::new("127.0.0.1:8585") {
            Ok(server) => {
                puffin::set_scopes_on(true);
                info!("puffin profiler listening on 127.0.0.1:8585");
                Some(server)
            }
            Err(e) => {
                warn!("failed to start puffin server: {e}");
                None
            }
        }
    } else {
        None
    };

    let event_loop = EventLoop::new()?;
    let mut app = App::new(profiler);
    event_loop.run_app(&mut app)?;
    Ok(())
}

struct App {
    state: Option<AppState>,
    _profiler: Option<puffin_http::Server>,
}

struct AppState {
    // Window and GL
    window: Window,
    gl_surface: glutin::surface::Surface<WindowSurface>,
    gl_context: glutin::context::PossiblyCurrentContext,
    gl: std::sync::Arc<glow::Context>,
    egui_glow: EguiGlow,

    // Page state
    content: PageContent,
    world: World,
    stage: Stage,
    layout: StageLayout,

    // Animation state
    scroll: ScrollState,
    tweener: Tweener,
    carousel: Option<Carousel>,
    hero_intro: HeroIntro,
    hero_scrub: HeroScrub,
    platforms: PlatformsReveal,

    // Input state
    input: input::InputState,

    // Timing
    last_frame_time: Instant,
}

impl App {
    fn new(profiler: Option<puffin_http::Server>) -> Self {
        Self {
            state: None,
            _profiler: profiler,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let app::WindowContext {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
        } = app::create_window(event_loop);

        let size = window.inner_size();
        let viewport = Vec2::new(size.width as f32, size.height as f32);

        let content = PageContent::load(Path::new("assets/content.json"))
            .expect("Failed to load page content");
        info!(cards = content.cards.len(), "page content loaded");

        let config = CarouselConfig::default();
        let layout = StageLayout::new(viewport, config.pin_distance_vh);

        let mut world = World::new();
        let stage = Stage::build(&mut world, &content, viewport);

        let mut scroll = ScrollState::new();
        scroll.set_max(layout.max_scroll());

        let carousel = Carousel::new(&mut world, &stage.cards, layout.features_pin, config);
        if carousel.is_none() {
            warn!("no feature cards in manifest; carousel disabled");
        }
        let hero_intro = HeroIntro::new(&stage);
        let hero_scrub = HeroScrub::new(&stage, &layout);
        let platforms = PlatformsReveal::new(&stage);
        let input = input::InputState::new(viewport);

        self.state = Some(AppState {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
            content,
            world,
            stage,
            layout,
            scroll,
            tweener: Tweener::new(),
            carousel,
            hero_intro,
            hero_scrub,
            platforms,
            input,
            last_frame_time: Instant::now(),
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let state = match &mut self.state {
            Some(s) => s,
            None => return,
        };

        // Let egui handle the event first
        let egui_consumed = state.egui_glow.on_window_event(&state.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                state.teardown();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                app::resize_surface(&state.gl_surface, &state.gl_context, size.width, size.height);
                state.handle_resize(size.width as f32, size.height as f32);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if !egui_consumed.consumed
                    && event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    state.teardown();
                    event_loop.exit();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                state.input.pointer_pos = Vec2::new(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                if !egui_consumed.consumed {
                    state.scroll.add_wheel(input::wheel_delta_px(delta));
                }
            }
            WindowEvent::RedrawRequested => {
                state.update_and_render();
                state.window.request_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}

impl AppState {
    fn update_and_render(&mut self) {
        if puffin::are_scopes_on() {
            puffin::GlobalProfiler::lock().new_frame();
        }

        let current_time = Instant::now();
        let raw_dt = (current_time - self.last_frame_time).as_secs_f32();
        self.last_frame_time = current_time;

        // Cap dt to prevent animation snapping after long frames
        let dt = raw_dt.min(MAX_ANIMATION_DT);

        // Scrub the applied scroll toward the wheel target
        let scroll_pos = self.scroll.update(dt);

        // Clock-driven animations
        self.hero_intro.update(&mut self.world, dt);

        // Scroll-driven animations. The carousel recomputes its card index
        // and dispatches heading animations before this frame ends; events
        // are processed one at a time, so dispatches never overlap.
        self.hero_scrub.update(&mut self.world, scroll_pos);
        if let Some(carousel) = &mut self.carousel {
            carousel.update(&mut self.world, &mut self.tweener, scroll_pos);
        }
        self.platforms
            .update(&mut self.world, &self.layout, scroll_pos, dt);

        // Pointer-driven orb, fed the pointer position explicitly
        systems::follow_pointer(
            &mut self.world,
            self.stage.follow_orb,
            self.input.pointer_pos,
            dt,
        );

        // Apply in-flight heading tweens
        self.tweener.update(&mut self.world, dt);

        // Run UI and react to nav clicks
        let actions = self.run_ui();
        if let Some(section) = actions.scroll_to {
            self.scroll
                .glide_to(self.layout.section_top(section), NAV_GLIDE_DURATION);
        }

        // Render
        unsafe {
            use glow::HasContext;
            self.gl.clear_color(10.0 / 255.0, 12.0 / 255.0, 24.0 / 255.0, 1.0);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }

        self.egui_glow.paint(&self.window);

        self.gl_surface.swap_buffers(&self.gl_context).unwrap();
    }

    fn run_ui(&mut self) -> ui::UiActions {
        let mut actions = ui::UiActions::default();

        let world = &self.world;
        let stage = &self.stage;
        let content = &self.content;
        let layout = &self.layout;
        let scroll = self.scroll.applied();

        self.egui_glow.run(&self.window, |ctx| {
            ui::draw_nav(ctx, content, &mut actions);
            ui::draw_page(ctx, world, stage, content, layout, scroll);
        });

        actions
    }

    /// One-shot re-normalization on resize: new geometry, re-clamped
    /// scroll, re-seated hidden headings. Initialization does not re-run
    /// and revealed elements keep their state.
    fn handle_resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let viewport = Vec2::new(width, height);
        let pin_distance_vh = CAROUSEL_PIN_DISTANCE_VH;
        self.layout = StageLayout::new(viewport, pin_distance_vh);
        self.scroll.set_max(self.layout.max_scroll());
        self.hero_scrub.relayout(&self.layout);
        if let Some(carousel) = &mut self.carousel {
            carousel.set_pin(self.layout.features_pin);
            carousel.resize(&mut self.world, width);
        }
        debug!(width, height, "viewport resized");
    }

    /// Release scroll bindings and pending animation callbacks
    fn teardown(&mut self) {
        if let Some(carousel) = &mut self.carousel {
            carousel.teardown(&self.world, &mut self.tweener);
        }
        self.carousel = None;
        debug!("released carousel pin and pending tweens");
    }
}
