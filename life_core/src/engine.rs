// engine.rs - Owns the board, paces generations and routes clicks

use std::sync::Arc;

use log::{debug, info, warn};
use rand::Rng;
use tokio::runtime::Runtime;

use crate::cell::Cell;
use crate::clock::GenerationClock;
use crate::color::Palette;
use crate::config::BoardConfig;
use crate::error::{LifeError, LifeResult};
use crate::rule;
use crate::surface::Surface;

/// Conway's Game of Life board with animated cells
pub struct GridEngine {
    cells       : Vec<Cell>,         // Row-major, grid_size * grid_size
    grid_size   : usize,
    square_side : f32,
    width       : f32,
    height      : f32,
    palette     : Palette,
    play        : bool,
    generation  : u64,
    runtime     : Runtime,           // Drives the row coroutines
}

impl GridEngine {
    /// Board where every cell independently starts alive with the configured
    /// probability, drawn from `rng`.
    pub fn new<R: Rng + ?Sized>(config: &BoardConfig, rng: &mut R) -> LifeResult<Self> {
        config.validate()?;
        let probability = config.alive_probability;
        Self::build(config, |_, _| rng.gen_bool(probability))
    }

    /// Board seeded from rows of '#' (alive) and '.' (dead)
    pub fn from_rows(config: &BoardConfig, rows: &[&str]) -> LifeResult<Self> {
        let size = config.grid_size;
        if rows.len() != size {
            return Err(LifeError::InvalidPattern {
                row: rows.len(),
                size,
                reason: format!("expected {} rows, got {}", size, rows.len()),
            });
        }

        let mut states = Vec::with_capacity(size * size);
        for (row_index, row) in rows.iter().enumerate() {
            let row_bytes = row.as_bytes();
            if row_bytes.len() != size {
                return Err(LifeError::InvalidPattern {
                    row: row_index,
                    size,
                    reason: format!("expected {} columns, got {}", size, row_bytes.len()),
                });
            }
            for &byte in row_bytes {
                states.push(match byte {
                    b'#' => true,
                    b'.' => false,
                    other => {
                        return Err(LifeError::InvalidPattern {
                            row: row_index,
                            size,
                            reason: format!("unexpected character {:?}", other as char),
                        });
                    }
                });
            }
        }

        Self::build(config, |row, col| states[row * size + col])
    }

    fn build(config: &BoardConfig, mut initial: impl FnMut(usize, usize) -> bool) -> LifeResult<Self> {
        let square_side = config.validate()?;
        let size = config.grid_size;

        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                cells.push(Cell::new(row, col, square_side, initial(row, col), &config.palette));
            }
        }

        let runtime = tokio::runtime::Builder::new_current_thread().build()?;

        let engine = Self {
            cells,
            grid_size: size,
            square_side,
            width: config.width,
            height: config.height,
            palette: config.palette,
            play: true,
            generation: 0,
            runtime,
        };
        info!(
            "Board ready: {}x{} cells of {:.2}px, {} alive",
            size,
            size,
            square_side,
            engine.population()
        );
        Ok(engine)
    }

    /// Advance one frame. Runs a generation when the clock fires, then paints
    /// every cell. Returns whether a generation ran.
    pub fn render_frame<S: Surface + ?Sized>(
        &mut self,
        clock: &mut GenerationClock,
        surface: &mut S,
    ) -> LifeResult<bool> {
        let evaluate = clock.tick();
        if evaluate {
            self.stage_generation()?;
        }

        for cell in &mut self.cells {
            cell.draw(surface);
            if evaluate {
                cell.commit();
            }
        }

        if evaluate {
            self.generation += 1;
            debug!("Generation {}: {} alive", self.generation, self.population());
        }
        Ok(evaluate)
    }

    /// Stage the rule result for every cell before any of them commits
    fn stage_generation(&mut self) -> LifeResult<()> {
        let snapshot: Arc<[bool]> = self.cells.iter().map(Cell::is_alive).collect();
        let next = rule::evaluate_generation(&self.runtime, snapshot, self.grid_size)?;

        for (cell, pending) in self.cells.iter_mut().zip(next) {
            cell.set_next_state(pending, &self.palette);
        }
        Ok(())
    }

    /// Force the cell under pixel (x, y) alive and hold off the next
    /// generation for a full clock cycle.
    pub fn handle_click<S: Surface + ?Sized>(
        &mut self,
        clock: &mut GenerationClock,
        x: f32,
        y: f32,
        surface: &mut S,
    ) {
        match self.cell_index_at(x, y) {
            Some(index) => {
                self.cells[index].on_click(&self.palette, surface);
                clock.reset();
            }
            None => warn!("Ignoring click outside the board at ({:.1}, {:.1})", x, y),
        }
    }

    fn cell_index_at(&self, x: f32, y: f32) -> Option<usize> {
        let col = (x / self.square_side).floor();
        let row = (y / self.square_side).floor();
        let size = self.grid_size as f32;
        if !(0.0..size).contains(&col) || !(0.0..size).contains(&row) {
            return None;
        }
        Some(row as usize * self.grid_size + col as usize)
    }

    pub fn stop(&mut self) {
        self.play = false;
    }

    pub fn is_playing(&self) -> bool {
        self.play
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn square_side(&self) -> f32 {
        self.square_side
    }

    /// Board size in pixels as (width, height)
    pub fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.grid_size && col < self.grid_size {
            Some(&self.cells[row * self.grid_size + col])
        } else {
            None
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some_and(Cell::is_alive)
    }

    /// Completed generations since construction
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Committed live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// New colors apply from each cell's next transition
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ANIMATION_COUNTDOWN;
    use crate::color::Rgb;
    use crate::surface::Canvas;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn states(engine: &GridEngine) -> Vec<bool> {
        engine.cells().iter().map(Cell::is_alive).collect()
    }

    fn expected(rows: &[&str]) -> Vec<bool> {
        rows.iter().flat_map(|row| row.chars().map(|c| c == '#')).collect()
    }

    fn canvas_for(engine: &GridEngine) -> Canvas {
        Canvas::new(engine.grid_size(), engine.square_side(), Rgb(0, 0, 0))
    }

    #[test]
    fn same_seed_builds_the_same_board() {
        let config = BoardConfig::square(20, 10.0);
        let a = GridEngine::new(&config, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = GridEngine::new(&config, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(states(&a), states(&b));
        assert!(a.is_playing());
        assert_eq!(a.generation(), 0);
    }

    #[test]
    fn probability_bounds_fill_or_empty_the_board() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty = BoardConfig { alive_probability: 0.0, ..BoardConfig::square(10, 10.0) };
        let full = BoardConfig { alive_probability: 1.0, ..BoardConfig::square(10, 10.0) };

        assert_eq!(GridEngine::new(&empty, &mut rng).unwrap().population(), 0);
        assert_eq!(GridEngine::new(&full, &mut rng).unwrap().population(), 100);
    }

    #[test]
    fn rejects_malformed_rows() {
        let config = BoardConfig::square(3, 10.0);
        assert!(matches!(
            GridEngine::from_rows(&config, &["...", "..."]),
            Err(LifeError::InvalidPattern { .. })
        ));
        assert!(matches!(
            GridEngine::from_rows(&config, &["...", "....", "..."]),
            Err(LifeError::InvalidPattern { row: 1, .. })
        ));
        assert!(matches!(
            GridEngine::from_rows(&config, &["...", ".x.", "..."]),
            Err(LifeError::InvalidPattern { row: 1, .. })
        ));
    }

    #[test]
    fn blinker_generation_is_atomic() {
        let config = BoardConfig::square(3, 10.0);
        let mut engine = GridEngine::from_rows(&config, &[
            ".#.",
            ".#.",
            ".#.",
        ]).unwrap();
        let mut clock = GenerationClock::default();
        let mut surface = canvas_for(&engine);

        let mut generations = 0;
        for _ in 0..=ANIMATION_COUNTDOWN {
            if engine.render_frame(&mut clock, &mut surface).unwrap() {
                generations += 1;
            }
        }

        assert_eq!(generations, 1);
        assert_eq!(engine.generation(), 1);
        assert_eq!(states(&engine), expected(&[
            "...",
            "###",
            "...",
        ]));
        assert!(engine.cells().iter().all(|cell| cell.next_alive().is_none()));
    }

    #[test]
    fn countdown_gates_rule_evaluation() {
        let config = BoardConfig::square(3, 10.0);
        let rows = [".#.", ".#.", ".#."];
        let mut engine = GridEngine::from_rows(&config, &rows).unwrap();
        let mut clock = GenerationClock::default();
        let mut surface = canvas_for(&engine);

        for _ in 0..ANIMATION_COUNTDOWN {
            assert!(!engine.render_frame(&mut clock, &mut surface).unwrap());
            assert_eq!(states(&engine), expected(&rows));
        }
        assert!(engine.render_frame(&mut clock, &mut surface).unwrap());
        assert_ne!(states(&engine), expected(&rows));

        // Every frame paints every cell
        assert_eq!(surface.draw_calls(), 9 * (ANIMATION_COUNTDOWN as usize + 1));
    }

    #[test]
    fn click_maps_pixels_to_cells() {
        let config = BoardConfig::square(4, 10.0);
        let mut engine = GridEngine::from_rows(&config, &["....", "....", "....", "...."]).unwrap();
        let mut clock = GenerationClock::default();
        let mut surface = canvas_for(&engine);

        engine.handle_click(&mut clock, 25.0, 9.9, &mut surface);
        assert!(engine.is_alive(0, 2));
        assert_eq!(engine.population(), 1);
        assert_eq!(surface.color_at(0, 2), Some(engine.palette().click));
    }

    #[test]
    fn click_rewinds_the_clock() {
        let config = BoardConfig::square(4, 10.0);
        let mut engine = GridEngine::from_rows(&config, &["....", "....", "....", "...."]).unwrap();
        let mut clock = GenerationClock::default();
        let mut surface = canvas_for(&engine);

        for _ in 0..ANIMATION_COUNTDOWN {
            engine.render_frame(&mut clock, &mut surface).unwrap();
        }
        assert_eq!(clock.remaining(), 0);

        engine.handle_click(&mut clock, 5.0, 5.0, &mut surface);
        assert_eq!(clock.remaining(), ANIMATION_COUNTDOWN);
    }

    #[test]
    fn clicks_off_the_board_are_ignored() {
        let config = BoardConfig::square(4, 10.0);
        let mut engine = GridEngine::from_rows(&config, &["....", "....", "....", "...."]).unwrap();
        let mut clock = GenerationClock::default();
        let mut surface = canvas_for(&engine);
        clock.tick();

        engine.handle_click(&mut clock, -1.0, 5.0, &mut surface);
        engine.handle_click(&mut clock, 5.0, 40.0, &mut surface);
        assert_eq!(engine.population(), 0);
        assert_eq!(surface.draw_calls(), 0);
        assert_eq!(clock.remaining(), ANIMATION_COUNTDOWN - 1);
    }

    #[test]
    fn stop_ends_play() {
        let mut engine = GridEngine::from_rows(&BoardConfig::square(1, 10.0), &["."]).unwrap();
        engine.stop();
        assert!(!engine.is_playing());
    }
}
