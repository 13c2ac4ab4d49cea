// cell.rs - One board square: committed life state plus its color animation

use crate::color::{Palette, Rgb};
use crate::surface::{PixelRect, Surface};

/// Frames a color transition takes
pub const ANIMATION_DURATION: u32 = 3;

/// Visual state of a cell, independent of its life state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    Idle,
    Animating { ticks_left: u32, from: Rgb, to: Rgb },
}

#[derive(Debug, Clone)]
pub struct Cell {
    alive      : bool,
    next_alive : Option<bool>,
    position   : (usize, usize),
    rect       : PixelRect,
    color      : Rgb,        // Last color painted, or about to be
    animation  : Animation,
}

impl Cell {
    pub fn new(row: usize, col: usize, square_side: f32, alive: bool, palette: &Palette) -> Self {
        Self {
            alive,
            next_alive: None,
            position: (row, col),
            rect: PixelRect::for_cell(row, col, square_side),
            color: palette.color_for(alive, None),
            animation: Animation::Idle,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn next_alive(&self) -> Option<bool> {
        self.next_alive
    }

    pub fn position(&self) -> (usize, usize) {
        self.position
    }

    pub fn rect(&self) -> PixelRect {
        self.rect
    }

    pub fn animation(&self) -> Animation {
        self.animation
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.animation, Animation::Animating { .. })
    }

    pub fn current_color(&self) -> Rgb {
        self.color
    }

    /// Where the running animation ends, or the current color when idle
    pub fn target_color(&self) -> Rgb {
        match self.animation {
            Animation::Animating { to, .. } => to,
            Animation::Idle => self.color,
        }
    }

    /// Stage the state computed for the next generation and start fading
    /// toward its transition color.
    ///
    /// Both endpoints are derived from the state the cell is heading to before
    /// this call: the pending value if one is still uncommitted, otherwise the
    /// committed one. A running animation keeps its remaining ticks and is
    /// retargeted.
    pub fn set_next_state(&mut self, pending: bool, palette: &Palette) {
        let baseline = self.next_alive.unwrap_or(self.alive);
        let from = palette.color_for(baseline, None);
        let to = palette.color_for(baseline, Some(pending));

        let ticks_left = match self.animation {
            Animation::Animating { ticks_left, .. } => ticks_left,
            Animation::Idle => ANIMATION_DURATION,
        };

        self.next_alive = Some(pending);
        self.color = from;
        self.animation = Animation::Animating { ticks_left, from, to };
    }

    /// Make the staged state the committed one
    pub fn commit(&mut self) {
        if let Some(next) = self.next_alive.take() {
            self.alive = next;
        }
    }

    /// Paint the cell, advancing its animation by one frame if one is running
    pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        if let Animation::Animating { ticks_left, from, to } = self.animation {
            // First frame paints `from`; `to` is reached on the next flat draw
            let elapsed = ANIMATION_DURATION.saturating_sub(ticks_left);
            let progress = elapsed as f32 / ANIMATION_DURATION as f32;
            surface.draw_rectangle(from.lerp(to, progress), self.rect);

            let ticks_left = ticks_left.saturating_sub(1);
            self.animation = if ticks_left == 0 {
                self.color = to;
                Animation::Idle
            } else {
                self.color = from.lerp(to, progress);
                Animation::Animating { ticks_left, from, to }
            };
            return;
        }
        surface.draw_rectangle(self.color, self.rect);
    }

    /// Force the cell alive, flash the click color and paint it straight away
    pub fn on_click<S: Surface + ?Sized>(&mut self, palette: &Palette, surface: &mut S) {
        self.alive = true;
        self.next_alive = None;
        self.color = palette.click;
        self.animation = Animation::Animating {
            ticks_left: ANIMATION_DURATION,
            from: palette.click,
            to: palette.color_for(true, None),
        };
        surface.draw_rectangle(self.color, self.rect);
    }
}
