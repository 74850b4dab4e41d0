//! The scene: every tracked image plus the gesture state acting on them.
//!
//! Pointer and wheel input mutate the scene immediately (the host delivers
//! them between frames). Device motion and resizes are queued with
//! [`Scene::push_event`] and drained at the start of [`Scene::step`] so a
//! frame always sees a consistent tilt/viewport.

use crate::config::{MotionConfig, MotionMode};
use crate::constants::CORNER_RADIUS;
use crate::error::{FloatyError, Result};
use crate::gesture::{MotionSample, ShakeDetector};
use crate::image::TrackedImage;
use crate::layout;
use crate::motion;
use crate::palette::{ColorCycle, ColorDrag};
use crate::viewport::Viewport;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneEvent {
    DeviceMotion(MotionSample),
    Resize(Viewport),
}

/// What a pointer-down landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    Image(usize),
    Background,
}

/// Side effects of a frame the host has to mirror outside the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub background: Option<&'static str>,
    pub tilt_control: Option<bool>,
    pub resized: bool,
}

/// Everything the renderer needs to draw one image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCommand {
    pub asset: usize,
    pub center: Vec2,
    pub size: Vec2,
    pub rotation: f32,
    pub corner_radius: f32,
}

#[derive(Clone, Copy, Debug)]
struct ImageDrag {
    index: usize,
    grab_offset: Vec2,
    last_pointer: Vec2,
    started_at_ms: f64,
}

pub struct Scene {
    images: Vec<TrackedImage>,
    config: MotionConfig,
    viewport: Viewport,
    palette: ColorCycle,
    drag: Option<ImageDrag>,
    color_drag: Option<ColorDrag>,
    shake: ShakeDetector,
    gyro: Vec2,
    tilt_control: bool,
    events: VecDeque<SceneEvent>,
}

impl Scene {
    pub fn new(config: MotionConfig, viewport: Viewport) -> Self {
        Self {
            images: Vec::new(),
            config,
            viewport,
            palette: ColorCycle::default(),
            drag: None,
            color_drag: None,
            shake: ShakeDetector::default(),
            gyro: Vec2::ZERO,
            tilt_control: false,
            events: VecDeque::new(),
        }
    }

    pub fn mode(&self) -> MotionMode {
        self.config.mode
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn images(&self) -> &[TrackedImage] {
        &self.images
    }

    pub fn image(&self, index: usize) -> Result<&TrackedImage> {
        self.images
            .get(index)
            .ok_or(FloatyError::ImageIndexOutOfRange {
                index,
                len: self.images.len(),
            })
    }

    pub fn image_mut(&mut self, index: usize) -> Result<&mut TrackedImage> {
        let len = self.images.len();
        self.images
            .get_mut(index)
            .ok_or(FloatyError::ImageIndexOutOfRange { index, len })
    }

    pub fn background(&self) -> &'static str {
        self.palette.current()
    }

    pub fn palette_index(&self) -> usize {
        self.palette.index()
    }

    pub fn tilt_control_active(&self) -> bool {
        self.tilt_control
    }

    pub fn dragged_index(&self) -> Option<usize> {
        self.drag.map(|d| d.index)
    }

    /// Place a new image for `asset` and append it on top of the stack.
    pub fn spawn_image<R: Rng + ?Sized>(&mut self, asset: usize, rng: &mut R) -> usize {
        let image = layout::spawn(rng, asset, &self.config, self.viewport);
        self.push_image(image)
    }

    pub fn push_image(&mut self, mut image: TrackedImage) -> usize {
        if self.tilt_control {
            image.snapshot_anchor();
        }
        self.images.push(image);
        self.images.len() - 1
    }

    /// Topmost image under `point`; later entries draw on top and win.
    pub fn pick(&self, point: Vec2) -> Option<usize> {
        self.images.iter().rposition(|img| img.contains(point))
    }

    /// Start a drag or a color drag. A drag still held by another pointer is
    /// dropped in place first, so only one image is ever out of physics.
    pub fn pointer_down(&mut self, point: Vec2, now_ms: f64) -> PointerTarget {
        if let Some(previous) = self.drag.take() {
            self.release(previous.index, Vec2::ZERO);
        }
        match self.pick(point) {
            Some(index) => {
                let image = &mut self.images[index];
                image.is_dragged = true;
                self.drag = Some(ImageDrag {
                    index,
                    grab_offset: point - image.position,
                    last_pointer: point,
                    started_at_ms: now_ms,
                });
                self.color_drag = None;
                log::debug!("[scene] grab image {} at ({:.1},{:.1})", index, point.x, point.y);
                PointerTarget::Image(index)
            }
            None => {
                self.color_drag = Some(ColorDrag::new(point.y));
                PointerTarget::Background
            }
        }
    }

    /// Follow the pointer. Returns the new background color when a color drag
    /// crosses the sensitivity threshold.
    pub fn pointer_move(&mut self, point: Vec2) -> Option<&'static str> {
        if let Some(drag) = self.drag.as_mut() {
            drag.last_pointer = point;
            let target = point - drag.grab_offset;
            self.images[drag.index].position = target;
            return None;
        }
        let direction = self
            .color_drag
            .as_mut()?
            .update(point.y, self.config.color_drag_sensitivity)?;
        Some(self.step_palette(direction))
    }

    pub fn pointer_up(&mut self, point: Vec2, now_ms: f64) {
        self.color_drag = None;
        let Some(drag) = self.drag.take() else {
            return;
        };
        let duration = now_ms - drag.started_at_ms;
        let velocity = motion::throw_velocity(
            drag.last_pointer,
            point,
            duration,
            self.config.momentum_divisor,
            self.config.momentum_cap,
            self.config.throw_scale,
        );
        self.release(drag.index, velocity);
        log::debug!(
            "[scene] release image {} v=({:.2},{:.2})",
            drag.index,
            velocity.x,
            velocity.y
        );
    }

    /// Pointer lost (e.g. touch cancelled): drop without a throw.
    pub fn pointer_cancel(&mut self) {
        self.color_drag = None;
        if let Some(drag) = self.drag.take() {
            self.release(drag.index, Vec2::ZERO);
        }
    }

    fn release(&mut self, index: usize, velocity: Vec2) {
        let mode = self.config.mode;
        let offset = self.tilt_offset();
        let image = &mut self.images[index];
        image.is_dragged = false;
        match mode {
            MotionMode::Momentum => image.velocity = velocity,
            MotionMode::Bobbing => {
                // Re-seat the bob centre so the image keeps bobbing where dropped.
                image.bob.base_y = image.position.y - image.bob.offset();
                if let (Some(anchor), Some(off)) = (image.tilt_anchor.as_mut(), offset) {
                    anchor.x = image.position.x - off.x;
                    anchor.base_y = image.bob.base_y - off.y;
                    anchor.y = anchor.base_y;
                }
            }
        }
    }

    /// Scroll wheel: positive `delta_y` moves forward through the palette.
    pub fn wheel(&mut self, delta_y: f32) -> &'static str {
        self.step_palette(if delta_y > 0.0 { 1.0 } else { -1.0 })
    }

    pub fn step_palette(&mut self, direction: f32) -> &'static str {
        let color = self.palette.step(direction);
        log::debug!("[scene] background {} ({})", self.palette.index(), color);
        color
    }

    /// Switch tilt control. Turning it on snapshots every image's base
    /// position; turning it off restores those snapshots exactly. Ignored in
    /// momentum mode.
    pub fn set_tilt_control(&mut self, enabled: bool) {
        if self.config.mode != MotionMode::Bobbing || enabled == self.tilt_control {
            return;
        }
        self.tilt_control = enabled;
        for image in &mut self.images {
            if enabled {
                image.snapshot_anchor();
            } else {
                image.restore_anchor();
            }
        }
        log::info!("[scene] tilt control {}", if enabled { "on" } else { "off" });
    }

    pub fn push_event(&mut self, event: SceneEvent) {
        self.events.push_back(event);
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    fn tilt_offset(&self) -> Option<Vec2> {
        self.tilt_control
            .then(|| Vec2::new(self.gyro.x, -self.gyro.y) * self.config.tilt_offset_scale)
    }

    fn apply_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        for image in &mut self.images {
            image.position = viewport.clamp_position(image.position, image.size);
            let base_hi = viewport.height - image.size.y;
            image.bob.base_y = image.bob.base_y.min(base_hi).max(image.size.y);
            if let Some(anchor) = image.tilt_anchor.as_mut() {
                let clamped = viewport.clamp_position(Vec2::new(anchor.x, anchor.y), image.size);
                anchor.x = clamped.x;
                anchor.y = clamped.y;
                anchor.base_y = anchor.base_y.min(base_hi).max(image.size.y);
            }
        }
        log::info!(
            "[scene] viewport {}x{}",
            viewport.width as u32,
            viewport.height as u32
        );
    }

    fn apply_motion(&mut self, sample: MotionSample, report: &mut FrameReport) {
        let shaken = self.shake.observe(
            sample,
            self.config.shake_threshold,
            self.config.shake_cooldown_ms,
        );
        self.gyro = sample.acceleration.truncate();
        if !shaken {
            return;
        }
        match self.config.mode {
            MotionMode::Momentum => report.background = Some(self.step_palette(1.0)),
            MotionMode::Bobbing => {
                let enabled = !self.tilt_control;
                self.set_tilt_control(enabled);
                report.tilt_control = Some(enabled);
            }
        }
    }

    /// Advance one frame: drain queued events, then move every image.
    pub fn step(&mut self) -> FrameReport {
        let mut report = FrameReport::default();
        let pending: SmallVec<[SceneEvent; 8]> = self.events.drain(..).collect();
        for event in pending {
            match event {
                SceneEvent::Resize(viewport) => {
                    self.apply_resize(viewport);
                    report.resized = true;
                }
                SceneEvent::DeviceMotion(sample) => self.apply_motion(sample, &mut report),
            }
        }

        let viewport = self.viewport;
        match self.config.mode {
            MotionMode::Momentum => {
                let friction = self.config.friction;
                for image in &mut self.images {
                    motion::step_momentum(image, viewport, friction);
                }
            }
            MotionMode::Bobbing => {
                let offset = self.tilt_offset();
                for image in &mut self.images {
                    motion::step_bobbing(image, viewport, offset);
                }
            }
        }
        report
    }

    /// Draw list in stacking order (first entry is drawn first, at the bottom).
    pub fn draw_commands(&self) -> impl Iterator<Item = DrawCommand> + '_ {
        self.images.iter().map(|img| DrawCommand {
            asset: img.asset,
            center: img.center(),
            size: img.size,
            rotation: img.tilt,
            corner_radius: CORNER_RADIUS,
        })
    }
}
