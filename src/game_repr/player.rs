use std::fmt;

/// One of the two sides. `First` always moves on turn 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Player {
    pub fn opposite(&self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    /// Conventional mark label ("X" moves first).
    pub fn symbol(&self) -> char {
        match self {
            Self::First => 'X',
            Self::Second => 'O',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Self::First),
            'O' | 'o' => Some(Self::Second),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
