//! Pointer input handling
//!
//! Tracks pointer buttons and motion and turns them into viewer deltas. The
//! windowing layer (DOM, winit, whatever hosts the canvas) forwards raw
//! events here; once per frame the accumulated state is drained with
//! [`InputState::take_deltas`].

/// Pointer buttons the viewer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left button / single touch: rotate the molecule
    Primary,
    /// Right button: pan the camera
    Secondary,
}

/// Viewer movement delta
#[derive(Debug, Clone, PartialEq)]
pub enum InputDelta {
    /// Rotate the selected molecule (radians)
    RotateMolecule { x: f32, y: f32 },
    /// Translate the camera in view space (pixels)
    PanCamera { x: f32, y: f32 },
    /// Zoom step (positive = toward the molecule)
    Zoom(f32),
    /// Reset rotation and camera to the home view
    ResetView,
}

/// Pointer button indices
const PRIMARY: usize = 0;
const SECONDARY: usize = 1;

/// Input state for viewer control
#[derive(Debug, Clone)]
pub struct InputState {
    /// Button states (primary, secondary)
    buttons: [bool; 2],
    /// Current pointer position (pixels), `None` before the first motion event
    pointer_pos: Option<(f32, f32)>,
    /// Accumulated pointer delta since last drain
    pointer_delta: (f32, f32),
    /// Accumulated scroll delta since last drain
    scroll_delta: f32,
    /// Pending view reset from a double click
    reset_pending: bool,
    /// Rotation sensitivity (radians per pixel)
    pub rotate_sensitivity: f32,
    /// Zoom sensitivity (distance per scroll unit)
    pub zoom_sensitivity: f32,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            buttons: [false; 2],
            pointer_pos: None,
            pointer_delta: (0.0, 0.0),
            scroll_delta: 0.0,
            reset_pending: false,
            rotate_sensitivity: 0.01,
            zoom_sensitivity: 1.0,
        }
    }
}

impl InputState {
    /// Create a new input state with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a pointer button event
    pub fn handle_button(&mut self, button: PointerButton, pressed: bool) {
        // Reset delta when starting a new drag so passive motion between
        // drags is not applied
        if pressed {
            self.pointer_delta = (0.0, 0.0);
        }
        match button {
            PointerButton::Primary => self.buttons[PRIMARY] = pressed,
            PointerButton::Secondary => self.buttons[SECONDARY] = pressed,
        }
    }

    /// Handle pointer movement
    pub fn handle_motion(&mut self, position: (f32, f32)) {
        if let Some(prev) = self.pointer_pos {
            self.pointer_delta.0 += position.0 - prev.0;
            self.pointer_delta.1 += position.1 - prev.1;
        }
        self.pointer_pos = Some(position);
    }

    /// Handle scroll wheel input
    pub fn handle_scroll(&mut self, delta: f32) {
        self.scroll_delta += delta;
    }

    /// Handle a double click (view reset)
    pub fn handle_double_click(&mut self) {
        self.reset_pending = true;
    }

    /// Check if the primary button is pressed
    pub fn primary_pressed(&self) -> bool {
        self.buttons[PRIMARY]
    }

    /// Check if the secondary button is pressed
    pub fn secondary_pressed(&self) -> bool {
        self.buttons[SECONDARY]
    }

    /// Check if a drag is in progress
    pub fn dragging(&self) -> bool {
        self.buttons.iter().any(|&b| b)
    }

    /// Get the current pointer position, if any motion has been seen
    pub fn pointer_position(&self) -> Option<(f32, f32)> {
        self.pointer_pos
    }

    /// Drain accumulated input into viewer deltas
    ///
    /// Call once per frame. The mapping:
    /// - Primary drag:   rotate the molecule
    /// - Secondary drag: pan the camera
    /// - Scroll:         zoom
    /// - Double click:   reset the view
    pub fn take_deltas(&mut self) -> Vec<InputDelta> {
        let mut deltas = Vec::new();
        let (dx, dy) = self.pointer_delta;

        if self.reset_pending {
            deltas.push(InputDelta::ResetView);
        }

        if self.scroll_delta.abs() > 0.001 {
            deltas.push(InputDelta::Zoom(self.scroll_delta * self.zoom_sensitivity));
        }

        if dx.abs() > 0.001 || dy.abs() > 0.001 {
            if self.buttons[PRIMARY] {
                deltas.push(InputDelta::RotateMolecule {
                    x: dy * self.rotate_sensitivity,
                    y: dx * self.rotate_sensitivity,
                });
            } else if self.buttons[SECONDARY] {
                deltas.push(InputDelta::PanCamera { x: -dx, y: dy });
            }
        }

        self.pointer_delta = (0.0, 0.0);
        self.scroll_delta = 0.0;
        self.reset_pending = false;
        deltas
    }

    /// Reset all state
    pub fn reset(&mut self) {
        self.buttons = [false; 2];
        self.pointer_delta = (0.0, 0.0);
        self.scroll_delta = 0.0;
        self.reset_pending = false;
    }
}
