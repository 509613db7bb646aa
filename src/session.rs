use crate::{advance_generation, BoundaryPolicy, Grid, NiceInt, Result};
use log::{debug, info, trace, warn};

/// How a freshly created grid is populated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seeding {
    Random,
    ThreeCell,
}

/// Snapshot of the counters shown under the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    pub generation: u64,
    pub alive: usize,
    pub dead: usize,
}

impl Stats {
    pub fn total(&self) -> usize {
        self.alive + self.dead
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Generation: {} Live Cells: {} Dead Cells: {} Total Cells: {}",
            NiceInt::from(self.generation),
            NiceInt::from_usize(self.alive),
            NiceInt::from_usize(self.dead),
            NiceInt::from_usize(self.total()),
        )
    }
}

/// State owned by the driver: one grid, one boundary policy and the run flag.
#[derive(Default)]
pub struct Session {
    grid: Option<Grid>,
    policy: BoundaryPolicy,
    generation: u64,
    is_running: bool,
    seed: Option<u64>, // Fixed seed for random population (`None` draws from entropy).
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session whose random populations are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Populating is locked while the simulation runs.
    pub fn can_reseed(&self) -> bool {
        !self.is_running
    }

    pub fn stats(&self) -> Option<Stats> {
        self.grid.as_ref().map(|grid| Stats {
            generation: self.generation,
            alive: grid.alive_count(),
            dead: grid.dead_count(),
        })
    }

    /// Replaces the grid with a fresh `width x height` one.
    ///
    /// Halts a running simulation first. On error nothing changes.
    pub fn populate(&mut self, width: i64, height: i64, seeding: Seeding) -> Result<()> {
        let grid = self.build_grid(width, height, seeding).map_err(|err| {
            warn!("populate rejected: {}", err);
            err
        })?;
        if self.is_running {
            info!("halting the run before repopulating");
            self.is_running = false;
        }
        info!(
            "new {}x{} grid ({:?}), {} alive",
            width,
            height,
            seeding,
            grid.alive_count()
        );
        self.grid = Some(grid);
        self.generation = 0;
        Ok(())
    }

    fn build_grid(&self, width: i64, height: i64, seeding: Seeding) -> Result<Grid> {
        let mut grid = Grid::from_input(width, height)?;
        match seeding {
            Seeding::Random => grid.seed_random_with(self.seed),
            Seeding::ThreeCell => grid.seed_three_cell()?,
        }
        Ok(grid)
    }

    /// Takes effect on the next transition.
    pub fn set_policy(&mut self, policy: BoundaryPolicy) {
        if self.policy != policy {
            info!("boundary policy: {}", policy);
            self.policy = policy;
        }
    }

    /// Starts running from generation 0.
    pub fn start(&mut self) {
        if self.grid.is_none() {
            warn!("start ignored: no grid");
            return;
        }
        info!("simulation started");
        self.generation = 0;
        self.is_running = true;
    }

    /// Pauses a running simulation or resumes a paused one.
    pub fn toggle_pause(&mut self) {
        if self.grid.is_none() {
            warn!("pause ignored: no grid");
            return;
        }
        self.is_running = !self.is_running;
        info!(
            "simulation {} at generation {}",
            if self.is_running { "resumed" } else { "paused" },
            self.generation
        );
    }

    /// Stops the run and advances exactly one generation.
    ///
    /// Returns `false` if there is no grid yet.
    pub fn step(&mut self) -> bool {
        self.is_running = false;
        self.advance()
    }

    /// One frame of the run loop: advances only while running.
    pub fn tick(&mut self) -> bool {
        if !self.is_running {
            return false;
        }
        trace!("tick at generation {}", self.generation);
        self.advance()
    }

    fn advance(&mut self) -> bool {
        let Some(grid) = self.grid.as_mut() else {
            return false;
        };
        advance_generation(grid, self.policy);
        self.generation += 1;
        debug!(
            "generation {}: {} alive, {} dead",
            self.generation,
            grid.alive_count(),
            grid.dead_count()
        );
        true
    }
}
