use crate::{GridError, Result};

/// Dense `width x height` field of cells together with the buffer
/// that the next generation is written into.
///
/// Cells are stored row by row: cell `(x, y)` lives at `x + y * width`.
#[derive(Clone, Debug)]
pub struct Grid {
    cells_curr: Vec<bool>,
    cells_next: Vec<bool>,
    width: usize,
    height: usize,
    alive_count: usize,
    dead_count: usize,
}

impl Grid {
    /// Probability of a cell being alive after [`Grid::seed_random`].
    pub const RANDOM_FILL_RATE: f64 = 0.5;

    /// Creates a field filled with dead cells.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension {
                width: width as i64,
                height: height as i64,
                reason: "width and height must be positive",
            });
        }
        // both buffers have to fit into one address space
        let size = width
            .checked_mul(height)
            .filter(|&size| size <= isize::MAX as usize / 2)
            .ok_or(GridError::InvalidDimension {
                width: i64::try_from(width).unwrap_or(i64::MAX),
                height: i64::try_from(height).unwrap_or(i64::MAX),
                reason: "grid is too large",
            })?;
        Ok(Self {
            cells_curr: vec![false; size],
            cells_next: vec![false; size],
            width,
            height,
            alive_count: 0,
            dead_count: size,
        })
    }

    /// Same as [`Grid::new`], but for unvalidated user input.
    pub fn from_input(width: i64, height: i64) -> Result<Self> {
        match (usize::try_from(width), usize::try_from(height)) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 => Self::new(w, h),
            _ => Err(GridError::InvalidDimension {
                width,
                height,
                reason: "width and height must be positive",
            }),
        }
    }

    /// Creates a field from row-major states; `states.len()` must equal `width * height`.
    pub fn from_cells(width: usize, height: usize, states: &[bool]) -> Result<Self> {
        let mut grid = Self::new(width, height)?;
        if states.len() != width * height {
            return Err(GridError::InvalidDimension {
                width: width as i64,
                height: height as i64,
                reason: "number of states does not match the dimensions",
            });
        }
        grid.cells_curr.copy_from_slice(states);
        grid.recount();
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)` of the field
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn total(&self) -> usize {
        self.width * self.height
    }

    pub fn alive_count(&self) -> usize {
        self.alive_count
    }

    pub fn dead_count(&self) -> usize {
        self.dead_count
    }

    /// Current generation, row by row.
    pub fn cells(&self) -> &[bool] {
        &self.cells_curr
    }

    /// `x < width` and `y < height` are required.
    pub fn get_cell(&self, x: usize, y: usize) -> bool {
        self.cells_curr[x + y * self.width]
    }

    /// `x < width` and `y < height` are required.
    pub fn set_cell(&mut self, x: usize, y: usize, state: bool) {
        let cell = &mut self.cells_curr[x + y * self.width];
        if *cell != state {
            *cell = state;
            if state {
                self.alive_count += 1;
                self.dead_count -= 1;
            } else {
                self.alive_count -= 1;
                self.dead_count += 1;
            }
        }
    }

    /// Every cell becomes alive independently with probability [`Grid::RANDOM_FILL_RATE`].
    pub fn seed_random(&mut self) {
        self.seed_random_with(None);
    }

    /// Fills the field with random cells
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn seed_random_with(&mut self, seed: Option<u64>) {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        for cell in self.cells_curr.iter_mut() {
            *cell = rng.gen_bool(Self::RANDOM_FILL_RATE);
        }
        self.recount();
    }

    /// Three live cells in a horizontal line as close to the center as possible.
    ///
    /// Fails without touching the field if the line does not fit.
    pub fn seed_three_cell(&mut self) -> Result<()> {
        if self.width < 3 {
            return Err(GridError::InvalidDimension {
                width: self.width as i64,
                height: self.height as i64,
                reason: "the three-cell seed needs at least 3 columns",
            });
        }
        // floor rounding puts even-sized centers to the left/top
        let cx = (self.width - 1) / 2;
        let cy = (self.height - 1) / 2;
        // cx == 0 only for width < 3, so the left cell stays in range
        self.cells_curr.fill(false);
        for x in cx - 1..=cx + 1 {
            self.cells_curr[x + cy * self.width] = true;
        }
        self.recount();
        Ok(())
    }

    /// Splits the field into the current generation (read) and the next one (write).
    pub(crate) fn buffers_mut(&mut self) -> (&[bool], &mut [bool]) {
        (&self.cells_curr, &mut self.cells_next)
    }

    /// Makes the next generation current and tallies it.
    pub(crate) fn swap_buffers(&mut self) {
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
        self.recount();
    }

    fn recount(&mut self) {
        self.alive_count = self.cells_curr.iter().filter(|&&c| c).count();
        self.dead_count = self.cells_curr.len() - self.alive_count;
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells_curr.chunks_exact(self.width) {
            for &cell in row {
                write!(f, "{}", if cell { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
