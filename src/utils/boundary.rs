/// Describes how neighbors outside the field are resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Bounds of the field are stitched together.
    #[default]
    Wraparound,
    /// Everything outside the field is permanently dead.
    DeadBorder,
}

impl std::fmt::Display for BoundaryPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wraparound => write!(f, "wraparound"),
            Self::DeadBorder => write!(f, "dead border"),
        }
    }
}
