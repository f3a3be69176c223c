use std::rc::Rc;
use std::time::Instant;

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::ModifiersState;
use winit::window::{CursorIcon, Window};

use clockdeck::commands::Cmd;
use clockdeck::config::AppConfig;
use clockdeck::messages::{LayoutMsg, Msg, UiMsg};
use clockdeck::model::AppModel;
use clockdeck::tick::{TickSample, TickScheduler};
use clockdeck::update::update;
use clockdeck::view::{hit_test_ui, press_messages, HitTarget, Renderer};

use super::input::handle_key;

const WINDOW_TITLE: &str = "Clock Deck";

pub struct App {
    model: AppModel,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    scheduler: TickScheduler,
    modifiers: ModifiersState,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let scheduler = TickScheduler::new(config.tick_interval_ms, Instant::now());
        let mut model = AppModel::new(config);
        // Prime the clocks so the first frame isn't blank
        update(&mut model, Msg::tick(TickSample::now()));

        Self {
            model,
            renderer: None,
            window: None,
            context: None,
            scheduler,
            modifiers: ModifiersState::empty(),
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        // The window is created at the size the layout wants, so the first
        // resize event is our own echo.
        let side = self
            .model
            .relayout()
            .unwrap_or(self.model.window.size.0.max(self.model.window.min_size));

        let window_attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(side, side))
            .with_min_inner_size(PhysicalSize::new(
                self.model.window.min_size,
                self.model.window.min_size,
            ));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create softbuffer context: {}", e))?;

        let renderer = Renderer::new(
            Rc::clone(&window),
            &context,
            self.model.config.font_path.as_deref(),
        )?;

        let size = window.inner_size();
        tracing::info!(width = size.width, height = size.height, "Window created");

        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);

        // Not every platform reports the initial size as an event
        if let Some(cmd) = update(&mut self.model, Msg::resize(size.width, size.height)) {
            self.process_cmd(event_loop, cmd);
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&self.model)?;
        }
        Ok(())
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => {
                update(&mut self.model, Msg::resize(size.width, size.height))
            }
            WindowEvent::ModifiersChanged(mods) => {
                self.modifiers = mods.state();
                None
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return None;
                }
                handle_key(
                    &mut self.model,
                    event.logical_key.clone(),
                    self.modifiers.control_key(),
                    self.modifiers.super_key(),
                )
            }
            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = (position.x as f32, position.y as f32);
                self.update_cursor_icon(x, y);
                update(&mut self.model, Msg::Ui(UiMsg::PointerMoved { x, y }))
            }
            WindowEvent::CursorLeft { .. } => {
                if self.model.drag.is_some() {
                    update(&mut self.model, Msg::Layout(LayoutMsg::CancelDrag))
                } else {
                    None
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let (x, y) = self.model.ui.pointer;
                let target = hit_test_ui(&self.model, x, y);
                tracing::trace!(?target, x, y, "Left press");

                let mut cmds = Vec::new();
                for msg in press_messages(target, Instant::now()) {
                    if let Some(cmd) = update(&mut self.model, msg) {
                        cmds.push(cmd);
                    }
                }
                match cmds.len() {
                    0 => None,
                    1 => cmds.pop(),
                    _ => Some(Cmd::batch(cmds)),
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => {
                if self.model.drag.is_none() {
                    return None;
                }
                let (x, y) = self.model.ui.pointer;
                update(&mut self.model, Msg::Layout(LayoutMsg::EndDrag { x, y }))
            }
            _ => None,
        }
    }

    fn update_cursor_icon(&self, x: f32, y: f32) {
        let Some(window) = &self.window else {
            return;
        };
        let icon = if self.model.drag.is_some() {
            CursorIcon::Grabbing
        } else {
            match hit_test_ui(&self.model, x, y) {
                HitTarget::PanelHeader(_) => CursorIcon::Grab,
                HitTarget::Toolbar(_) | HitTarget::PanelControl(..) => CursorIcon::Pointer,
                _ => CursorIcon::Default,
            }
        };
        window.set_cursor(icon);
    }

    fn process_cmd(&mut self, event_loop: &ActiveEventLoop, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            Cmd::ResizeWindow { size } => {
                let Some(window) = self.window.clone() else {
                    return;
                };
                tracing::debug!(size, "Requesting window size");
                // Some platforms apply the size synchronously and return it
                // instead of sending a Resized event.
                if let Some(applied) = window.request_inner_size(PhysicalSize::new(size, size)) {
                    if let Some(cmd) =
                        update(&mut self.model, Msg::resize(applied.width, applied.height))
                    {
                        self.process_cmd(event_loop, cmd);
                    }
                }
                window.request_redraw();
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(event_loop, cmd);
                }
            }
            Cmd::Quit => event_loop.exit(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("Failed to create window: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = &self.window else {
            return;
        };
        if window_id != window.id() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render error: {:#}", e);
                }
            }
            event => {
                if let Some(cmd) = self.handle_event(&event) {
                    self.process_cmd(event_loop, cmd);
                }
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if self.scheduler.poll(now) {
            if let Some(cmd) = update(&mut self.model, Msg::tick(TickSample::now())) {
                self.process_cmd(event_loop, cmd);
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.scheduler.next_due()));
    }
}
