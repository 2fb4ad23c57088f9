//! Player input normalization
//!
//! Two mutually exclusive sources, picked once per session:
//! - Joystick: a single tracked pointer dragged around a fixed center,
//!   sampled every frame as a direction with radial magnitude <= 1.
//! - Keyboard: each key-down is a discrete one-shot step, applied
//!   immediately rather than integrated per frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Active input source for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMode {
    Joystick,
    Keyboard,
}

impl InputMode {
    /// Pick a mode from the device class: coarse pointers get the joystick
    pub fn detect(coarse_pointer: bool) -> Self {
        if coarse_pointer {
            InputMode::Joystick
        } else {
            InputMode::Keyboard
        }
    }

    /// Whether the on-screen joystick should be visible
    pub fn shows_joystick(&self) -> bool {
        matches!(self, InputMode::Joystick)
    }
}

/// Virtual joystick driven by pointer events
#[derive(Debug, Clone)]
pub struct Joystick {
    max_radius: f32,
    active_pointer: Option<i32>,
    center: Vec2,
    output: Vec2,
}

impl Joystick {
    pub fn new(max_radius: f32) -> Self {
        Self {
            max_radius: max_radius.max(f32::EPSILON),
            active_pointer: None,
            center: Vec2::ZERO,
            output: Vec2::ZERO,
        }
    }

    /// Begin tracking `pointer_id` unless another pointer is already active.
    /// `center` is the joystick base center at the moment of the press.
    pub fn pointer_down(&mut self, pointer_id: i32, at: Vec2, center: Vec2) -> bool {
        if self.active_pointer.is_some() {
            return false;
        }
        self.active_pointer = Some(pointer_id);
        self.center = center;
        self.pointer_move(pointer_id, at);
        true
    }

    /// Update the output from a drag; other pointers are ignored
    pub fn pointer_move(&mut self, pointer_id: i32, at: Vec2) {
        if self.active_pointer != Some(pointer_id) {
            return;
        }
        let offset = (at - self.center).clamp_length_max(self.max_radius);
        self.output = offset / self.max_radius;
    }

    /// Release the active pointer and recenter
    pub fn pointer_up(&mut self, pointer_id: i32) -> bool {
        if self.active_pointer != Some(pointer_id) {
            return false;
        }
        self.active_pointer = None;
        self.output = Vec2::ZERO;
        true
    }

    /// Cancellation behaves exactly like release
    pub fn pointer_cancel(&mut self, pointer_id: i32) -> bool {
        self.pointer_up(pointer_id)
    }

    /// Current normalized direction
    pub fn output(&self) -> Vec2 {
        self.output
    }

    pub fn active_pointer(&self) -> Option<i32> {
        self.active_pointer
    }

    /// Stick displacement from the base center, for drawing the knob
    pub fn knob_offset(&self) -> Vec2 {
        self.output * self.max_radius
    }
}

/// Map a key to a unit step. Letter keys are case-insensitive.
pub fn key_step(key: &str) -> Option<Vec2> {
    match key {
        "ArrowLeft" => return Some(Vec2::NEG_X),
        "ArrowRight" => return Some(Vec2::X),
        "ArrowUp" => return Some(Vec2::NEG_Y),
        "ArrowDown" => return Some(Vec2::Y),
        _ => {}
    }
    match key.to_ascii_lowercase().as_str() {
        "a" => Some(Vec2::NEG_X),
        "d" => Some(Vec2::X),
        "w" => Some(Vec2::NEG_Y),
        "s" => Some(Vec2::Y),
        _ => None,
    }
}
