// grid.rs - Toroidal grid engine for Conway's Game of Life

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::error::{LifeError, Result};
use crate::patterns::Pattern;

pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLUMNS: usize = 16;
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(256);
/// Largest board, in cells, that `new`, `reinitialize` and `resize` accept.
pub const MAX_CELLS: usize = 1 << 24;

/// The one lock every engine operation goes through, from the command loop
/// and the auto-stepper alike.
pub type SharedEngine = Arc<Mutex<GridEngine>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub column: usize,
    pub visible: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Self { row: 0, column: 0, visible: true }
    }
}

/// Double-buffered cell matrix plus the editing cursor and step interval.
///
/// `cells` is only ever read during [`GridEngine::step`]; the next
/// generation is written into `scratch` and the two are swapped afterwards,
/// so no cell sees a neighbour from the generation being computed.
#[derive(Debug, Clone)]
pub struct GridEngine {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
    scratch: Vec<bool>,
    cursor: Cursor,
    interval: Duration,
    generation: u64,
}

impl GridEngine {
    /// All-dead grid of the given size. Both dimensions must be at least 1.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        let len = check_size(rows, columns)?;
        Ok(Self {
            rows,
            columns,
            cells: vec![false; len],
            scratch: vec![false; len],
            cursor: Cursor::default(),
            interval: DEFAULT_INTERVAL,
            generation: 0,
        })
    }

    pub fn into_shared(self) -> SharedEngine {
        Arc::new(Mutex::new(self))
    }

    /// Replaces the board with an all-dead one of the given size, keeping
    /// cursor visibility and the interval.
    pub fn reinitialize(&mut self, rows: usize, columns: usize) -> Result<()> {
        let len = check_size(rows, columns)?;
        self.rows = rows;
        self.columns = columns;
        self.cells = vec![false; len];
        self.scratch = vec![false; len];
        self.generation = 0;
        self.clamp_cursor();
        Ok(())
    }

    /// Grows or shrinks the board, never below 1x1 and never past
    /// [`MAX_CELLS`]. The overlapping top-left region is carried over verbatim.
    pub fn resize(&mut self, row_delta: isize, column_delta: isize) {
        let rows = self.rows.saturating_add_signed(row_delta).max(1);
        let columns = self.columns.saturating_add_signed(column_delta).max(1);
        let len = match check_size(rows, columns) {
            Ok(len) => len,
            Err(e) => {
                tracing::debug!(error = %e, "resize ignored");
                return;
            }
        };

        let mut cells = vec![false; len];
        let kept_rows = rows.min(self.rows);
        let kept_columns = columns.min(self.columns);
        for row in 0..kept_rows {
            let old = &self.cells[row * self.columns..row * self.columns + kept_columns];
            cells[row * columns..row * columns + kept_columns].copy_from_slice(old);
        }

        self.rows = rows;
        self.columns = columns;
        self.cells = cells;
        self.scratch = vec![false; len];
        self.clamp_cursor();
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.max(Duration::from_millis(1));
    }

    /// Halves the interval unless that would round to zero milliseconds.
    pub fn speed_up(&mut self) -> bool {
        let half = self.interval.as_millis() / 2;
        if half == 0 {
            return false;
        }
        self.interval = Duration::from_millis(half as u64);
        true
    }

    /// Doubles the interval unless that would overflow.
    pub fn slow_down(&mut self) -> bool {
        match self.interval.checked_mul(2) {
            Some(doubled) => {
                self.interval = doubled;
                true
            }
            None => false,
        }
    }

    /// Generations stepped since start or the last clear.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Cell state with toroidal wrap-around; any integer coordinates are valid.
    pub fn cell(&self, row: isize, column: isize) -> bool {
        self.cells[self.wrap(row, column)]
    }

    /// Live cells among the 8 toroidal neighbours, excluding the cell itself.
    pub fn neighbor_count(&self, row: isize, column: isize) -> u8 {
        let mut count = 0;
        for row_offset in -1..=1 {
            for column_offset in -1..=1 {
                if row_offset == 0 && column_offset == 0 {
                    continue;
                }
                if self.cell(row + row_offset, column + column_offset) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advances one generation.
    pub fn step(&mut self) {
        for row in 0..self.rows {
            for column in 0..self.columns {
                let index = row * self.columns + column;
                let alive = self.cells[index];
                let neighbors = self.neighbor_count(row as isize, column as isize);

                self.scratch[index] = match (alive, neighbors) {
                    (true, 2) | (true, 3) => true, // Survival
                    (false, 3) => true,            // Birth
                    _ => false,                    // Death or stays dead
                };
            }
        }

        std::mem::swap(&mut self.cells, &mut self.scratch);
        self.generation += 1;
    }

    pub fn toggle_cell(&mut self, row: isize, column: isize) {
        let index = self.wrap(row, column);
        self.cells[index] = !self.cells[index];
    }

    pub fn set_cell(&mut self, row: isize, column: isize, alive: bool) {
        let index = self.wrap(row, column);
        self.cells[index] = alive;
    }

    pub fn toggle_at_cursor(&mut self) {
        let Cursor { row, column, .. } = self.cursor;
        self.toggle_cell(row as isize, column as isize);
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.generation = 0;
    }

    /// Overwrites one row from a text pattern: anything other than a space or
    /// `.` is alive, cells past the end of the pattern are dead and characters
    /// past the last column are ignored. Rows outside the board are skipped.
    pub fn set_row(&mut self, row: usize, pattern: &str) {
        if row >= self.rows {
            return;
        }
        let mut chars = pattern.chars();
        let start = row * self.columns;
        for cell in &mut self.cells[start..start + self.columns] {
            *cell = matches!(chars.next(), Some(c) if c != ' ' && c != '.');
        }
    }

    /// Brings a named pattern to life with its origin at (`row`, `column`),
    /// wrapping around the edges.
    pub fn stamp(&mut self, pattern: &Pattern, row: usize, column: usize) {
        for &(row_offset, column_offset) in pattern.cells {
            self.set_cell(row as isize + row_offset, column as isize + column_offset, true);
        }
    }

    pub fn move_cursor(&mut self, row_delta: isize, column_delta: isize) {
        let row = (self.cursor.row as isize + row_delta).rem_euclid(self.rows as isize);
        let column = (self.cursor.column as isize + column_delta).rem_euclid(self.columns as isize);
        self.cursor.row = row as usize;
        self.cursor.column = column as usize;
    }

    pub fn toggle_cursor_visibility(&mut self) {
        self.cursor.visible = !self.cursor.visible;
    }

    /// One row of the current generation, for rendering.
    pub fn row(&self, row: usize) -> &[bool] {
        &self.cells[row * self.columns..(row + 1) * self.columns]
    }

    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.rows.hash(&mut hasher);
        self.columns.hash(&mut hasher);
        self.cells.hash(&mut hasher);
        hasher.finish()
    }

    fn wrap(&self, row: isize, column: isize) -> usize {
        let row = row.rem_euclid(self.rows as isize) as usize;
        let column = column.rem_euclid(self.columns as isize) as usize;
        row * self.columns + column
    }

    fn clamp_cursor(&mut self) {
        self.cursor.row = self.cursor.row.min(self.rows - 1);
        self.cursor.column = self.cursor.column.min(self.columns - 1);
    }
}

impl Default for GridEngine {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            cells: vec![false; DEFAULT_ROWS * DEFAULT_COLUMNS],
            scratch: vec![false; DEFAULT_ROWS * DEFAULT_COLUMNS],
            cursor: Cursor::default(),
            interval: DEFAULT_INTERVAL,
            generation: 0,
        }
    }
}

/// Cell count of a `rows` x `columns` board, if it is a board we allow.
fn check_size(rows: usize, columns: usize) -> Result<usize> {
    match rows.checked_mul(columns) {
        Some(len) if rows >= 1 && columns >= 1 && len <= MAX_CELLS => Ok(len),
        _ => Err(LifeError::InvalidSize {
            rows: rows.try_into().unwrap_or(i64::MAX),
            columns: columns.try_into().unwrap_or(i64::MAX),
        }),
    }
}
