//! Interactive viewer loop

use std::sync::Arc;
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::Key,
    window::WindowBuilder,
};

use solidview_core::{Error, Result};

use crate::camera::Camera;
use crate::renderer::{mesh_vertices, MeshRenderer, RenderConfig};
use crate::world::World;

/// Distance flown per key press.
const FLY_STEP: f32 = 0.5;
/// Radians orbited per pixel of mouse drag.
const ORBIT_SPEED: f32 = 0.01;

/// Interactive viewer over a loaded [`World`].
pub struct Viewer {
    world: World,
    camera: Camera,
    home: Camera,
    wireframe: bool,
    last_mouse_pos: Option<PhysicalPosition<f64>>,
    mouse_pressed: bool,
}

impl Viewer {
    /// Set up the viewer with the camera the scene description asks for.
    pub fn new(world: World) -> Self {
        let window = &world.scene.window;
        let aspect_ratio = window.width as f32 / window.height.max(1) as f32;
        let camera = Camera::from_config(&world.scene.camera, aspect_ratio);

        Self {
            home: camera.clone(),
            world,
            camera,
            wireframe: false,
            last_mouse_pos: None,
            mouse_pressed: false,
        }
    }

    /// Open the window and run the event loop until the user closes it.
    pub fn run(mut self) -> Result<()> {
        let event_loop = EventLoop::new()
            .map_err(|e| Error::Gpu(format!("Failed to create event loop: {}", e)))?;
        let window = Arc::new(
            WindowBuilder::new()
                .with_title("solidview")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.world.scene.window.width,
                    self.world.scene.window.height,
                ))
                .build(&event_loop)
                .map_err(|e| Error::Gpu(format!("Failed to create window: {}", e)))?,
        );

        let mut renderer =
            pollster::block_on(MeshRenderer::new(window.clone(), RenderConfig::default()))?;
        renderer.upload_mesh(&mesh_vertices(&self.world.vertices));
        if !renderer.supports_wireframe() {
            tracing::warn!("adapter has no line polygon mode, wireframe toggle disabled");
        }

        let size = window.inner_size();
        self.camera.aspect_ratio = size.width as f32 / size.height.max(1) as f32;

        tracing::info!(
            "viewing {} triangles, keys: w/a/s/d fly, p wireframe, r reset",
            self.world.triangle_count()
        );

        event_loop
            .run(move |event, target| {
                target.set_control_flow(ControlFlow::Poll);

                if let Event::WindowEvent { event, .. } = event {
                    match event {
                        WindowEvent::CloseRequested => target.exit(),
                        WindowEvent::Resized(new_size) => {
                            renderer.resize(new_size);
                            let aspect = new_size.width as f32 / new_size.height.max(1) as f32;
                            self.camera.aspect_ratio = aspect;
                            self.home.aspect_ratio = aspect;
                        }
                        WindowEvent::MouseInput { state, button, .. } => {
                            if button == MouseButton::Left {
                                self.mouse_pressed = state == ElementState::Pressed;
                            }
                        }
                        WindowEvent::CursorMoved { position, .. } => {
                            if let (Some(last), true) = (self.last_mouse_pos, self.mouse_pressed) {
                                let dx = (position.x - last.x) as f32;
                                let dy = (position.y - last.y) as f32;
                                self.camera.orbit(dx * ORBIT_SPEED, dy * ORBIT_SPEED);
                            }
                            self.last_mouse_pos = Some(position);
                        }
                        WindowEvent::MouseWheel { delta, .. } => {
                            let scroll = match delta {
                                winit::event::MouseScrollDelta::LineDelta(_, y) => y,
                                winit::event::MouseScrollDelta::PixelDelta(pos) => {
                                    pos.y as f32 / 100.0
                                }
                            };
                            self.camera.zoom(scroll * 0.1);
                        }
                        WindowEvent::KeyboardInput { event, .. } => {
                            if event.state == ElementState::Pressed {
                                if let Key::Character(c) = &event.logical_key {
                                    self.handle_key(c.as_str());
                                }
                            }
                        }
                        WindowEvent::RedrawRequested => {
                            renderer.update_camera(
                                self.camera.view_matrix(),
                                self.camera.projection_matrix(),
                                self.camera.position.coords,
                            );
                            if let Err(e) = renderer.render(self.wireframe) {
                                tracing::error!("render error: {}", e);
                            }
                            window.request_redraw();
                        }
                        _ => {}
                    }
                }
            })
            .map_err(|e| Error::Gpu(format!("Event loop error: {}", e)))
    }

    fn handle_key(&mut self, key: &str) {
        match key {
            "w" | "W" => self.camera.move_forward(FLY_STEP),
            "s" | "S" => self.camera.move_forward(-FLY_STEP),
            "a" | "A" => self.camera.strafe(-FLY_STEP),
            "d" | "D" => self.camera.strafe(FLY_STEP),
            "p" | "P" => self.wireframe = !self.wireframe,
            "r" | "R" => self.camera = self.home.clone(),
            _ => {}
        }
    }
}
