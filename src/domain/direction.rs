//! Compass headings and control tokens.

use std::fmt;

use thiserror::Error;

/// The compass direction a vehicle currently faces. Determines the effect of
/// a move command.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// The heading after one right turn, following the cycle
    /// North → East → South → West → North.
    pub fn turned_right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// The heading after one left turn, the inverse of [`Heading::turned_right`].
    pub fn turned_left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::East => Heading::North,
            Heading::South => Heading::East,
            Heading::West => Heading::South,
        }
    }
}

impl TryFrom<char> for Heading {
    type Error = DirectionError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        match letter {
            'N' => Ok(Heading::North),
            'E' => Ok(Heading::East),
            'S' => Ok(Heading::South),
            'W' => Ok(Heading::West),
            _ => Err(DirectionError::UnknownHeading(letter)),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Heading::North => "N",
            Heading::East => "E",
            Heading::South => "S",
            Heading::West => "W",
        })
    }
}

/// A single control token from a command sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Control {
    Left,
    Move,
    Right,
}

impl TryFrom<char> for Control {
    type Error = DirectionError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        match letter {
            'L' => Ok(Control::Left),
            'M' => Ok(Control::Move),
            'R' => Ok(Control::Right),
            _ => Err(DirectionError::UnknownControl(letter)),
        }
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum DirectionError {
    #[error("unknown heading letter {0:?}")]
    UnknownHeading(char),
    #[error("unknown control letter {0:?}")]
    UnknownControl(char),
}
