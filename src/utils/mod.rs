mod boundary;
mod format_int;

pub use boundary::BoundaryPolicy;
pub use format_int::NiceInt;
