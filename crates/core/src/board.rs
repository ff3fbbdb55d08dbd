//! Board module - manages the game grid
//!
//! The board is a `width x height` grid (13x20 by default) where each cell can be empty or
//! filled with a piece kind. Uses a flat vector allocated once per session; nothing on the
//! tick path allocates.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! Rows with negative y lie above the visible board; they are never stored.

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{cell_value, Cell, PieceKind, MAX_BOARD_DIM, MIN_BOARD_DIM};

/// Row indices removed by a single [`Board::clear_full_rows`] pass.
///
/// A whole board can clear at once, so capacity is the largest supported height.
pub type ClearedRows = ArrayVec<usize, { MAX_BOARD_DIM as usize }>;

/// The game board using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// Dimensions are fixed for the board's lifetime. Callers validate them through
    /// [`crate::GameConfig`]; values outside [`MIN_BOARD_DIM`]..=[`MAX_BOARD_DIM`] are clamped.
    pub fn new(width: u8, height: u8) -> Self {
        let width = width.clamp(MIN_BOARD_DIM, MAX_BOARD_DIM);
        let height = height.clamp(MIN_BOARD_DIM, MAX_BOARD_DIM);
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Numeric cell value at (x, y): 0 for empty, `kind + 1` for filled.
    /// Returns None if out of bounds
    pub fn value(&self, x: i8, y: i8) -> Option<u8> {
        self.get(x, y).map(cell_value)
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8
    }

    /// Check whether `shape` placed with its top-left at (x, y) collides.
    ///
    /// A filled cell collides when its column is outside `[0, width)`, its row is at or
    /// below the floor, or its row is on the board and the cell there is occupied.
    /// Rows above the board (negative y) never collide with board contents.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        let (width, height) = (i16::from(self.width), i16::from(self.height));
        shape.minos.iter().any(|&(dx, dy)| {
            let (px, py) = offset(x, y, dx, dy);
            if px < 0 || px >= width || py >= height {
                return true;
            }
            // Both coordinates are on the board here, so they fit in i8.
            py >= 0 && self.is_occupied(px as i8, py as i8)
        })
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        let width = self.width as usize;
        let start = y * width;
        self.cells[start..start + width].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows and return the row indices that were cleared (bottom to top).
    ///
    /// Scans from the floor upward. A full row is dropped, everything above it shifts down
    /// one row, and an empty row appears at the top; the same index is then examined again
    /// because a new row now occupies it. The row count never changes and non-full rows
    /// keep their relative order.
    ///
    /// Indices are reported as they were seen during the scan, i.e. against the board as it
    /// looked at that moment.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = self.width as usize;

        let mut y = self.height as usize;
        while y > 0 {
            let row = y - 1;
            if !self.is_row_full(row) {
                y -= 1;
                continue;
            }

            // Shift all rows above down by one (copy_within handles overlap)
            self.cells.copy_within(0..row * width, width);
            self.cells[..width].fill(None);
            // Capacity covers every row of the tallest board.
            let _ = cleared_rows.try_push(row);
        }

        cleared_rows
    }

    /// Write the filled cells of `shape` at (x, y) as `kind`.
    ///
    /// Cells outside the board are skipped. Returns `true` when every filled cell was on
    /// the board, `false` when at least one was above it (the in-bounds cells are written
    /// regardless).
    pub fn lock_piece(&mut self, shape: &Shape, x: i8, y: i8, kind: PieceKind) -> bool {
        let mut fully_visible = true;
        for &(dx, dy) in shape.minos.iter() {
            let (px, py) = offset(x, y, dx, dy);
            if py < 0 {
                fully_visible = false;
            }
            if let (Ok(px), Ok(py)) = (i8::try_from(px), i8::try_from(py)) {
                self.set(px, py, Some(kind));
            }
        }
        fully_visible
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows top to bottom as cell slices
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width as usize)
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Write the board as numeric cell values, row-major, into `out` (reusing its allocation).
    pub fn write_values(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(self.cells.iter().map(|&c| cell_value(c)));
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

/// Board coordinate of a mino, widened so that no placement can overflow
#[inline(always)]
fn offset(x: i8, y: i8, dx: i8, dy: i8) -> (i16, i16) {
    (i16::from(x) + i16::from(dx), i16::from(y) + i16::from(dy))
}
