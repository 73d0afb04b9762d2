//! Result type for operations that degrade instead of failing

/// Outcome of a loader or mutator call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The remote endpoint answered
    Fresh(T),
    /// The remote endpoint failed; `T` was produced locally
    Degraded(T, String),
    /// Nothing usable could be produced
    Empty(String),
}

impl<T> Outcome<T> {
    /// Warning text for the view, if any
    pub fn warning(&self) -> Option<&str> {
        match self {
            Self::Fresh(_) => None,
            Self::Degraded(_, reason) | Self::Empty(reason) => Some(reason),
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Fresh(value) | Self::Degraded(value, _) => Some(value),
            Self::Empty(_) => None,
        }
    }
}
