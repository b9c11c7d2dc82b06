//! The rectangular region vehicles may occupy.

/// An immutable rectangular bound. Admits every coordinate in the inclusive
/// range `[0, width] × [0, height]`, so a zero-sized zone still admits the
/// single position `(0, 0)`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LandingZone {
    width: u64,
    height: u64,
}

impl LandingZone {
    pub const fn new(width: u64, height: u64) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u64 {
        self.width
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    /// Checks `x` against the width and `y` against the height.
    pub fn contains(&self, x: u64, y: u64) -> bool {
        x <= self.width && y <= self.height
    }
}
