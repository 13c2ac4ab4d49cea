// color.rs - RGB colors, the cell palette and linear blending

/// 8-bit RGB triple as handed to the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Blend from `self` toward `to`. `progress` is clamped to 0.0..=1.0 and
    /// every channel is truncated toward zero.
    pub fn lerp(self, to: Rgb, progress: f32) -> Rgb {
        let t = progress.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
        Rgb(channel(self.0, to.0), channel(self.1, to.1), channel(self.2, to.2))
    }
}

/// Colors for every visual state a cell can be in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub dying : Rgb,
    pub birth : Rgb,
    pub alive : Rgb,
    pub dead  : Rgb,
    pub click : Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            dying : Rgb(242, 82, 46),
            birth : Rgb(66, 39, 242),
            alive : Rgb(242, 184, 75),
            dead  : Rgb(13, 13, 13),
            click : Rgb(0, 255, 0),
        }
    }
}

impl Palette {
    /// Color for a committed state and the state staged for the next generation.
    /// Transitions take priority over the steady colors.
    pub fn color_for(&self, alive: bool, next_alive: Option<bool>) -> Rgb {
        match (alive, next_alive) {
            (true, Some(false)) => self.dying,
            (false, Some(true)) => self.birth,
            (true, _)           => self.alive,
            _                   => self.dead,
        }
    }
}
