// surface.rs - Drawing boundary between cells and whatever puts pixels on screen

use crate::color::Rgb;

/// Axis-aligned rectangle in pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x      : f32,
    pub y      : f32,
    pub width  : f32,
    pub height : f32,
}

impl PixelRect {
    /// Square covering grid position (row, col)
    pub fn for_cell(row: usize, col: usize, square_side: f32) -> Self {
        Self {
            x: col as f32 * square_side,
            y: row as f32 * square_side,
            width: square_side,
            height: square_side,
        }
    }
}

/// Anything a cell can paint itself onto
pub trait Surface {
    fn draw_rectangle(&mut self, color: Rgb, rect: PixelRect);
}

/// Retained surface holding the last color painted on every grid square.
///
/// egui repaints the whole window each frame, so the window shell keeps one of
/// these and replays it instead of relying on pixels surviving between frames.
#[derive(Debug, Clone)]
pub struct Canvas {
    grid_size   : usize,
    square_side : f32,
    squares     : Vec<Rgb>,
    draw_calls  : usize,
}

impl Canvas {
    pub fn new(grid_size: usize, square_side: f32, background: Rgb) -> Self {
        Self {
            grid_size,
            square_side,
            squares: vec![background; grid_size * grid_size],
            draw_calls: 0,
        }
    }

    pub fn color_at(&self, row: usize, col: usize) -> Option<Rgb> {
        if row < self.grid_size && col < self.grid_size {
            Some(self.squares[row * self.grid_size + col])
        } else {
            None
        }
    }

    /// Total rectangles drawn since construction
    pub fn draw_calls(&self) -> usize {
        self.draw_calls
    }

    /// Every square with its pixel rectangle, row by row
    pub fn squares(&self) -> impl Iterator<Item = (PixelRect, Rgb)> + '_ {
        let side = self.square_side;
        let size = self.grid_size;
        self.squares
            .iter()
            .enumerate()
            .map(move |(index, &color)| (PixelRect::for_cell(index / size, index % size, side), color))
    }
}

impl Surface for Canvas {
    fn draw_rectangle(&mut self, color: Rgb, rect: PixelRect) {
        self.draw_calls += 1;
        // Snap the rectangle origin back onto the grid it was laid out from
        let col = (rect.x / self.square_side).round();
        let row = (rect.y / self.square_side).round();
        if row < 0.0 || col < 0.0 {
            return;
        }
        let (row, col) = (row as usize, col as usize);
        if row < self.grid_size && col < self.grid_size {
            self.squares[row * self.grid_size + col] = color;
        }
    }
}
