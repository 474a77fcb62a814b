//! The winit application: event loop wiring, command execution, redraw
//! scheduling

use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::ModifiersState;
use winit::window::{CursorIcon, Window};

use crate::commands::Cmd;
use crate::geometry::Vec2;
use crate::messages::{AppMsg, Msg, ThemeMsg};
use crate::model::AppModel;
use crate::update::update;
use crate::view::Renderer;

use super::input::handle_key;
use super::mouse::{self, ClickTracker};

pub struct App {
    model: AppModel,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    modifiers: ModifiersState,
    mouse_position: Option<Vec2>,
    click_tracker: ClickTracker,
    clipboard: Option<arboard::Clipboard>,
    last_tick: Instant,
    should_quit: bool,
}

impl App {
    pub fn new(window_width: u32, window_height: u32, args: &crate::cli::CliArgs) -> Self {
        let mut model = AppModel::new(window_width, window_height);

        if args.fresh {
            model.config = Default::default();
            model.workbench = Default::default();
            model.ui.explorer.visible = true;
            model.terminal.open = false;
        }

        if let Ok(Some(doc)) = args.startup_doc() {
            model.workbench.open(doc);
        }

        if let Some(theme_id) = &args.theme {
            // Session-only override; deliberately not persisted
            let _ = update(&mut model, Msg::Theme(ThemeMsg::Preview(theme_id.clone())));
        }

        Self {
            model,
            renderer: None,
            window: None,
            context: None,
            modifiers: ModifiersState::empty(),
            mouse_position: None,
            click_tracker: ClickTracker::default(),
            clipboard: None,
            last_tick: Instant::now(),
            should_quit: false,
        }
    }

    fn init_renderer(&mut self, window: Rc<Window>, context: &Context<Rc<Window>>) -> Result<()> {
        let renderer = Renderer::new(window, context)?;
        self.model
            .set_font_metrics(renderer.char_width(), renderer.line_height());
        self.renderer = Some(renderer);
        Ok(())
    }

    /// Reflect the hover target in the pointer shape
    fn update_cursor_icon(&self, pos: Vec2) {
        let Some(window) = &self.window else { return };

        if self.model.ui.is_dragging {
            window.set_cursor(CursorIcon::Grabbing);
            return;
        }

        let chrome = crate::layout::compute_chrome(&self.model);
        use crate::geometry::ResizeDir;
        use crate::view::HitTarget;
        let icon = match crate::view::hit_test_ui(&self.model, &chrome, pos) {
            Some(HitTarget::WindowResize { dir, .. }) => match dir {
                ResizeDir::N | ResizeDir::S => CursorIcon::NsResize,
                ResizeDir::E | ResizeDir::W => CursorIcon::EwResize,
                ResizeDir::Ne | ResizeDir::Sw => CursorIcon::NeswResize,
                ResizeDir::Nw | ResizeDir::Se => CursorIcon::NwseResize,
            },
            Some(HitTarget::Tab { .. }) | Some(HitTarget::WindowTitle { .. }) => {
                CursorIcon::Default
            }
            Some(HitTarget::Terminal) => CursorIcon::Text,
            Some(HitTarget::ExplorerDoc { .. }) | Some(HitTarget::ExplorerSection { .. }) => {
                CursorIcon::Pointer
            }
            _ => CursorIcon::Default,
        };
        window.set_cursor(icon);
    }

    /// Execute a side-effect command returned from an update
    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None | Cmd::Redraw => {}
            Cmd::CopyToClipboard(text) => {
                if self.clipboard.is_none() {
                    match arboard::Clipboard::new() {
                        Ok(cb) => self.clipboard = Some(cb),
                        Err(e) => {
                            tracing::warn!("Clipboard unavailable: {}", e);
                            return;
                        }
                    }
                }
                if let Some(cb) = &mut self.clipboard {
                    if let Err(e) = cb.set_text(text) {
                        tracing::warn!("Clipboard write failed: {}", e);
                    }
                }
            }
            Cmd::OpenUrl(url) => {
                if let Err(e) = open::that_detached(&url) {
                    tracing::warn!("Failed to open {}: {}", url, e);
                }
            }
            Cmd::SaveConfig => {
                if let Err(e) = self.model.config.save() {
                    tracing::warn!("Config save failed: {}", e);
                }
            }
            Cmd::Quit => {
                self.should_quit = true;
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.resize(size.width, size.height) {
                        tracing::error!("Surface resize failed: {}", e);
                    }
                }
                update(
                    &mut self.model,
                    Msg::App(AppMsg::Resize(size.width, size.height)),
                )
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
                    self.modifiers.control_key() || self.modifiers.super_key(),
                    self.modifiers.shift_key(),
                )
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render error: {}", e);
                }
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                let pos = Vec2::new(position.x as f32, position.y as f32);
                self.mouse_position = Some(pos);
                self.update_cursor_icon(pos);
                mouse::handle_move(&mut self.model, pos)
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => {
                let pos = self.mouse_position?;
                mouse::handle_press(&mut self.model, *button, pos, &mut self.click_tracker)
            }
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => {
                let pos = self.mouse_position?;
                mouse::handle_left_release(&mut self.model, pos)
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let pos = self.mouse_position?;
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => (*y * 3.0) as i32,
                    MouseScrollDelta::PixelDelta(p) => {
                        (p.y / self.model.line_height as f64) as i32
                    }
                };
                if lines != 0 {
                    mouse::handle_wheel(&mut self.model, pos, lines)
                } else {
                    None
                }
            }
            WindowEvent::Focused(false) => {
                // Losing OS focus mid-drag discards the session
                self.click_tracker.reset();
                update(&mut self.model, Msg::Drag(crate::messages::DragMsg::Cancel))
            }
            _ => None,
        }
    }

    fn render(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&self.model)?;
        }
        Ok(())
    }

    /// Periodic housekeeping: prune expired toasts
    fn tick(&mut self) -> Option<Cmd> {
        update(&mut self.model, Msg::Ui(crate::messages::UiMsg::PruneToasts))
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = Window::default_attributes()
                .with_title("folio — astrid v. klyver")
                .with_inner_size(LogicalSize::new(1280, 800));

            let window = match event_loop.create_window(window_attributes) {
                Ok(w) => Rc::new(w),
                Err(e) => {
                    tracing::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };
            let context = match Context::new(Rc::clone(&window)) {
                Ok(c) => c,
                Err(e) => {
                    tracing::error!("Failed to create softbuffer context: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let size = window.inner_size();
            self.model.window_size = (size.width, size.height);

            if let Err(e) = self.init_renderer(Rc::clone(&window), &context) {
                tracing::error!("Failed to initialize renderer: {}", e);
                event_loop.exit();
                return;
            }
            self.window = Some(window);
            self.context = Some(context);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let should_exit = matches!(event, WindowEvent::CloseRequested);
        let should_redraw = if let Some(window) = &self.window {
            if window_id == window.id() && !should_exit {
                if let Some(cmd) = self.handle_event(&event) {
                    let needs_redraw = cmd.needs_redraw();
                    self.process_cmd(cmd);
                    needs_redraw
                } else {
                    false
                }
            } else {
                false
            }
        } else {
            false
        };

        if should_exit || self.should_quit {
            // Flush settings on the way out
            self.model.config.last_doc = Some(self.model.workbench.active.to_string());
            if let Err(e) = self.model.config.save() {
                tracing::warn!("Config save on exit failed: {}", e);
            }
            event_loop.exit();
        } else if should_redraw {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::wait_duration(Duration::from_millis(250)));

        let now = Instant::now();
        if now.duration_since(self.last_tick) > Duration::from_millis(500) {
            self.last_tick = now;
            if let Some(cmd) = self.tick() {
                if cmd.needs_redraw() {
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
                self.process_cmd(cmd);
            }
        }
    }
}
