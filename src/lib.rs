mod engine;
mod error;
mod grid;
mod gui;
mod session;
mod utils;

pub use engine::{advance_generation, neighbor_sum, neighbor_value, next_state};
pub use error::{GridError, Result};
pub use grid::Grid;
pub use gui::{App, Config};
pub use session::{Seeding, Session, Stats};
pub use utils::{BoundaryPolicy, NiceInt};
