use crate::constants::BACKGROUND_PALETTE;

/// Cursor into the background palette; wraps in both directions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorCycle {
    index: usize,
}

impl ColorCycle {
    pub fn new(index: usize) -> Self {
        Self {
            index: index % BACKGROUND_PALETTE.len(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static str {
        BACKGROUND_PALETTE[self.index]
    }

    /// Positive `direction` moves forward, anything else moves back one.
    pub fn step(&mut self, direction: f32) -> &'static str {
        let len = BACKGROUND_PALETTE.len();
        self.index = if direction > 0.0 {
            (self.index + 1) % len
        } else {
            (self.index + len - 1) % len
        };
        self.current()
    }
}

/// Vertical drag that steps the palette every `sensitivity` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorDrag {
    last_y: f32,
}

impl ColorDrag {
    pub fn new(y: f32) -> Self {
        Self { last_y: y }
    }

    /// Returns the step direction once the pointer has travelled far enough,
    /// re-arming from the current position.
    pub fn update(&mut self, y: f32, sensitivity: f32) -> Option<f32> {
        let delta = y - self.last_y;
        if delta.abs() > sensitivity {
            self.last_y = y;
            Some(delta.signum())
        } else {
            None
        }
    }
}
