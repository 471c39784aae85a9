//! Main application: window, render loop and input routing.

use hueday_core::storage::{MemoryStore, create_default_store};
use hueday_core::{FaviconPainter, KeyValueStore, Session, TelemetryConfig, create_telemetry};
use kurbo::Size;
use std::sync::Arc;
use vello::util::RenderSurface;
use vello::wgpu::PresentMode;
use vello::{AaConfig, RenderParams, RendererOptions, Scene};
use winit::application::ApplicationHandler;
#[cfg(not(target_arch = "wasm32"))]
use winit::dpi::LogicalSize;
use winit::event::{ElementState, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::background::{Fade, paint_background, to_peniko};
use crate::platform;
use crate::shortcuts::ShortcutRegistry;
use crate::ui::{ColorView, UiAction, render_ui};

#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Background cross-fade between colors.
    pub fade: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Hueday".to_string(),
            width: 1280,
            height: 800,
            fade: Duration::from_millis(500),
        }
    }
}

/// Runtime state for the application.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // Rendering
    vello_renderer: vello::Renderer,
    scene: Scene,
    /// Texture blitter for RGBA->surface format conversion (needed for WebGPU/WASM)
    texture_blitter: vello::wgpu::util::TextureBlitter,

    // egui
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,

    // State
    session: Session,
    fade: Fade,
}

impl AppState {
    /// Run a UI or keyboard action against the session.
    fn apply(&mut self, action: UiAction) {
        apply_action(&mut self.session, &mut self.fade, action, Instant::now());
        self.window.request_redraw();
    }

    fn color_view(&self) -> ColorView {
        let current = self.session.current();
        ColorView {
            name: current.name.clone(),
            hex: current.hex,
            text_color: self.session.text_color(),
            copied: self.session.is_copied(),
        }
    }
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    render_cx: Option<vello::util::RenderContext>,
    /// Window waiting for async surface creation (WASM only)
    pending_window: Option<Arc<Window>>,
    /// Flag to indicate async init is in progress
    #[cfg(target_arch = "wasm32")]
    init_in_progress: std::cell::Cell<bool>,
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            render_cx: None,
            pending_window: None,
            #[cfg(target_arch = "wasm32")]
            init_in_progress: std::cell::Cell::new(false),
        }
    }

    /// Run the application.
    pub async fn run() {
        let event_loop = EventLoop::new().expect("Failed to create event loop");
        event_loop.set_control_flow(ControlFlow::Wait);
        let app = App::new();

        #[cfg(target_arch = "wasm32")]
        {
            use winit::platform::web::EventLoopExtWebSys;
            event_loop.spawn_app(app);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let mut app = app;
            event_loop.run_app(&mut app).expect("Event loop error");
        }
    }

    /// Finish initialization after surface is created.
    fn finish_init(&mut self, window: Arc<Window>, surface: RenderSurface<'static>) {
        let render_cx = self.render_cx.as_ref().expect("RenderContext not initialized");
        let device = &render_cx.devices[surface.dev_id].device;

        let vello_renderer = vello::Renderer::new(device, RendererOptions::default())
            .expect("Failed to create Vello renderer");

        // Vello renders to Rgba8Unorm for its compute shaders, while the
        // WebGPU surface is typically Bgra8Unorm.
        let texture_blitter = vello::wgpu::util::TextureBlitter::new(device, surface.config.format);

        // Initialize egui
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            device,
            surface.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        let session = build_session(window.clone());
        let fade = Fade::new(session.current().hex, self.config.fade);

        log::info!("Hueday initialized - {}x{}", surface.config.width, surface.config.height);

        self.state = Some(AppState {
            window: window.clone(),
            surface,
            vello_renderer,
            scene: Scene::new(),
            texture_blitter,
            egui_ctx,
            egui_state,
            egui_renderer,
            session,
            fade,
        });

        self.pending_window = None;

        // Request initial redraw
        window.request_redraw();
    }

    /// Draw one frame and schedule the next one if anything is changing.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(state) = &mut self.state else {
            return;
        };

        // Run egui and collect the action it produced
        let view = state.color_view();
        let egui_input = state.egui_state.take_egui_input(&state.window);
        let mut deferred_action: Option<UiAction> = None;
        let egui_output = state.egui_ctx.run(egui_input, |ctx| {
            if let Some(action) = render_ui(ctx, &view) {
                deferred_action = Some(action);
            }
        });
        state.egui_state.handle_platform_output(&state.window, egui_output.platform_output);
        let egui_primitives = state
            .egui_ctx
            .tessellate(egui_output.shapes, egui_output.pixels_per_point);

        // Before any early return below, so a dropped frame keeps the action
        if let Some(action) = deferred_action {
            state.apply(action);
        }

        let now = Instant::now();
        let width = state.surface.config.width;
        let height = state.surface.config.height;
        let background = state.fade.color_at(now);
        paint_background(
            &mut state.scene,
            Size::new(width as f64, height as f64),
            background,
        );

        // Render
        let Some(render_cx) = self.render_cx.as_ref() else {
            return;
        };

        let device_handle = &render_cx.devices[state.surface.dev_id];
        let device = &device_handle.device;
        let queue = &device_handle.queue;

        let surface_texture = match state.surface.surface.get_current_texture() {
            Ok(t) => t,
            Err(e) => {
                log::warn!("Failed to get surface texture: {:?}", e);
                return;
            }
        };

        let params = RenderParams {
            base_color: to_peniko(background),
            width,
            height,
            antialiasing_method: AaConfig::Area,
        };

        // Vello needs a StorageBinding target, which WebGPU only allows for
        // Rgba8Unorm; the result is blitted onto the surface afterwards.
        let render_texture = device.create_texture(&vello::wgpu::TextureDescriptor {
            label: Some("vello render texture"),
            size: vello::wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: vello::wgpu::TextureDimension::D2,
            format: vello::wgpu::TextureFormat::Rgba8Unorm,
            usage: vello::wgpu::TextureUsages::STORAGE_BINDING
                | vello::wgpu::TextureUsages::COPY_SRC
                | vello::wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });

        let render_texture_view =
            render_texture.create_view(&vello::wgpu::TextureViewDescriptor::default());

        if let Err(e) = state.vello_renderer.render_to_texture(
            device,
            queue,
            &state.scene,
            &render_texture_view,
            &params,
        ) {
            log::error!("Failed to render: {:?}", e);
            return;
        }

        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());

        {
            let mut blit_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("blit encoder"),
                });
            state
                .texture_blitter
                .copy(device, &mut blit_encoder, &render_texture_view, &surface_view);
            queue.submit(std::iter::once(blit_encoder.finish()));
        }

        // Update egui textures
        for (id, image_delta) in &egui_output.textures_delta.set {
            state.egui_renderer.update_texture(device, queue, *id, image_delta);
        }

        // Render egui on top
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: egui_output.pixels_per_point,
        };

        {
            let mut egui_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("egui encoder"),
                });

            state.egui_renderer.update_buffers(
                device,
                queue,
                &mut egui_encoder,
                &egui_primitives,
                &screen_descriptor,
            );

            let render_pass = egui_encoder.begin_render_pass(&vello::wgpu::RenderPassDescriptor {
                label: Some("egui render pass"),
                color_attachments: &[Some(vello::wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: vello::wgpu::Operations {
                        load: vello::wgpu::LoadOp::Load,
                        store: vello::wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // egui-wgpu wants a 'static render pass
            let mut render_pass = render_pass.forget_lifetime();
            state
                .egui_renderer
                .render(&mut render_pass, &egui_primitives, &screen_descriptor);
            drop(render_pass);

            queue.submit(std::iter::once(egui_encoder.finish()));
        }

        for id in &egui_output.textures_delta.free {
            state.egui_renderer.free_texture(id);
        }
        surface_texture.present();

        // Keep drawing while the fade runs or egui asks for it; otherwise
        // sleep until the copy acknowledgment expires.
        let egui_wants_repaint = egui_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|v| v.repaint_delay.is_zero());
        if state.fade.is_animating(Instant::now()) || egui_wants_repaint {
            event_loop.set_control_flow(ControlFlow::Wait);
            state.window.request_redraw();
        } else if let Some(remaining) = state.session.copy_ack_remaining() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + remaining));
        } else {
            event_loop.set_control_flow(ControlFlow::Wait);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Update the session for `action` and point the fade at its current color.
fn apply_action(session: &mut Session, fade: &mut Fade, action: UiAction, now: Instant) {
    log::debug!("Action: {:?}", action);
    match action {
        UiAction::Advance => {
            session.advance();
        }
        UiAction::Retreat => {
            session.retreat();
        }
        UiAction::Copy => session.copy(),
    }

    let current = session.current().hex;
    if current != fade.target() {
        fade.retarget(current, now);
    }
}

/// Wire the session to the platform's storage, telemetry, clipboard and
/// favicon.
fn build_session(window: Arc<Window>) -> Session {
    let store: Box<dyn KeyValueStore> = match create_default_store() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("Persistent storage unavailable, using memory: {}", e);
            Box::new(MemoryStore::new())
        }
    };

    #[cfg(not(target_arch = "wasm32"))]
    let mut painter = platform::WindowIconPainter::new(window);
    #[cfg(target_arch = "wasm32")]
    let mut painter = {
        let _ = window;
        platform::DomFaviconPainter
    };

    Session::builder()
        .store(store)
        .telemetry(create_telemetry(TelemetryConfig::from_env()))
        .clipboard(platform::create_clipboard())
        .on_current_changed(move |entry, _| painter.paint(&entry.hex))
        .start()
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() || self.pending_window.is_some() {
            return;
        }

        log::info!("Creating window...");

        #[cfg(not(target_arch = "wasm32"))]
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        // On WASM, attach canvas to DOM and use full viewport
        #[cfg(target_arch = "wasm32")]
        let window_attrs = {
            use wasm_bindgen::JsCast;
            use winit::platform::web::WindowAttributesExtWebSys;

            let web_window = web_sys::window().expect("No window");
            let document = web_window.document().expect("No document");

            let viewport_width = web_window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(self.config.width as f64);
            let viewport_height = web_window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(self.config.height as f64);

            if let Some(loading) = document.get_element_by_id("loading") {
                loading.remove();
            }

            let canvas = document
                .get_element_by_id("hueday-canvas")
                .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
                .or_else(|| {
                    let body = document.body()?;
                    let canvas = document.create_element("canvas").ok()?;
                    canvas.set_id("hueday-canvas");
                    body.append_child(&canvas).ok()?;
                    canvas.dyn_into::<web_sys::HtmlCanvasElement>().ok()
                })
                .expect("Failed to create canvas");

            // Physical pixels for sharp rendering
            let dpr = web_window.device_pixel_ratio();
            canvas.set_width((viewport_width * dpr) as u32);
            canvas.set_height((viewport_height * dpr) as u32);
            let style = canvas.style();
            let _ = style.set_property("width", "100%");
            let _ = style.set_property("height", "100%");
            let _ = style.set_property("display", "block");
            let _ = style.set_property("position", "fixed");
            let _ = style.set_property("top", "0");
            let _ = style.set_property("left", "0");

            Window::default_attributes()
                .with_title(&self.config.title)
                .with_canvas(Some(canvas))
        };

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("Failed to create window"),
        );

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };

        log::info!("Surface size: {}x{}", width, height);

        // On native, block on async surface creation
        #[cfg(not(target_arch = "wasm32"))]
        {
            let render_cx = self
                .render_cx
                .get_or_insert_with(vello::util::RenderContext::new);

            let surface = pollster::block_on(render_cx.create_surface(
                window.clone(),
                width,
                height,
                PresentMode::AutoVsync,
            ))
            .expect("Failed to create surface");

            // The surface borrows the window, which the App keeps alive in AppState.
            let surface: RenderSurface<'static> = unsafe { std::mem::transmute(surface) };
            self.finish_init(window, surface);
        }

        // On WASM, store window for later async initialization
        #[cfg(target_arch = "wasm32")]
        {
            self.pending_window = Some(window);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // On WASM, handle async initialization
        #[cfg(target_arch = "wasm32")]
        if self.state.is_none() {
            if let Some(window) = self.pending_window.clone() {
                if !self.init_in_progress.get() {
                    self.init_in_progress.set(true);

                    let size = window.inner_size();
                    let width = size.width.max(1);
                    let height = size.height.max(1);

                    let self_ptr = self as *mut Self;
                    let window_clone = window.clone();

                    wasm_bindgen_futures::spawn_local(async move {
                        let mut render_cx = vello::util::RenderContext::new();

                        let present_mode = PresentMode::AutoVsync;
                        match render_cx
                            .create_surface(window_clone.clone(), width, height, present_mode)
                            .await
                        {
                            Ok(surface) => {
                                let surface: RenderSurface<'static> =
                                    unsafe { std::mem::transmute(surface) };

                                // SAFETY: WASM is single-threaded and the event
                                // loop keeps the App alive.
                                let app = unsafe { &mut *self_ptr };
                                app.render_cx = Some(render_cx);
                                app.finish_init(window_clone, surface);
                            }
                            Err(e) => {
                                log::error!("Failed to create surface: {:?}", e);
                                let app = unsafe { &mut *self_ptr };
                                app.init_in_progress.set(false);
                            }
                        }
                    });
                }

                window.request_redraw();
            }
            return;
        }

        let Some(state) = &mut self.state else {
            return;
        };

        // Let egui process the event first
        let egui_response = state.egui_state.on_window_event(&state.window, &event);
        if egui_response.repaint {
            state.window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }

                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }

                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if egui_response.consumed || state.egui_ctx.wants_keyboard_input() {
                    return;
                }
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                if let Some(action) = ShortcutRegistry::action_for_key(&event.logical_key) {
                    state.apply(action);
                }
            }

            _ => {}
        }
    }

    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        // Copy acknowledgment deadline reached
        if let StartCause::ResumeTimeReached { .. } = cause {
            if let Some(state) = &self.state {
                state.window.request_redraw();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hueday_core::{ColorSource, SessionBuilder};

    fn session() -> Session {
        SessionBuilder::new().source(ColorSource::seeded(7)).start()
    }

    #[test]
    fn test_advance_retargets_fade() {
        let mut session = session();
        let mut fade = Fade::new(session.current().hex, Duration::from_millis(500));
        let now = Instant::now();

        apply_action(&mut session, &mut fade, UiAction::Advance, now);

        assert_eq!(session.index(), 1);
        assert_eq!(fade.target(), session.current().hex);
        assert!(fade.is_animating(now));
    }

    #[test]
    fn test_retreat_returns_fade_to_previous_color() {
        let mut session = session();
        let first = session.current().hex;
        let mut fade = Fade::new(first, Duration::from_millis(500));
        let now = Instant::now();

        apply_action(&mut session, &mut fade, UiAction::Advance, now);
        apply_action(&mut session, &mut fade, UiAction::Retreat, now);

        assert_eq!(session.index(), 0);
        assert_eq!(fade.target(), first);
    }

    #[test]
    fn test_copy_keeps_fade_settled() {
        let mut session = session();
        let mut fade = Fade::new(session.current().hex, Duration::from_millis(500));
        let now = Instant::now();

        apply_action(&mut session, &mut fade, UiAction::Copy, now);

        assert!(session.is_copied());
        assert!(!fade.is_animating(now));
    }
}
