//! Rover state machine: heading-relative movement and rotation.

use std::rc::Rc;

use thiserror::Error;

use super::{Control, Heading, LandingZone};

/// A deployed vehicle. Owns its position and heading and shares the landing
/// zone with the rest of the fleet for boundary queries.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rover {
    x: u64,
    y: u64,
    heading: Heading,
    landing_zone: Rc<LandingZone>,
}

impl Rover {
    pub fn new(x: u64, y: u64, heading: Heading, landing_zone: Rc<LandingZone>) -> Self {
        Self {
            x,
            y,
            heading,
            landing_zone,
        }
    }

    pub fn x(&self) -> u64 {
        self.x
    }

    pub fn y(&self) -> u64 {
        self.y
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Computes the coordinate one unit ahead in the current heading without
    /// mutating the rover. Fails if that coordinate leaves the landing zone.
    pub fn next_move(&self) -> Result<(u64, u64), RoverError> {
        match self.heading {
            Heading::North => match self.y.checked_add(1) {
                Some(y) if y <= self.landing_zone.height() => Ok((self.x, y)),
                _ => Err(self.out_of_bounds()),
            },
            Heading::East => match self.x.checked_add(1) {
                Some(x) if x <= self.landing_zone.width() => Ok((x, self.y)),
                _ => Err(self.out_of_bounds()),
            },
            Heading::South => match self.y.checked_sub(1) {
                Some(y) => Ok((self.x, y)),
                None => Err(self.out_of_bounds()),
            },
            Heading::West => match self.x.checked_sub(1) {
                Some(x) => Ok((x, self.y)),
                None => Err(self.out_of_bounds()),
            },
        }
    }

    /// Commits the move computed by [`Rover::next_move`]. On failure the
    /// rover is left unchanged.
    pub fn advance(&mut self) -> Result<(), RoverError> {
        let (x, y) = self.next_move()?;
        self.x = x;
        self.y = y;
        Ok(())
    }

    /// Turns the rover one step along the rotation cycle. A `Move` token is a
    /// no-op here so that every control token can be routed through the same
    /// dispatch path; movement itself is arbitrated by the fleet service.
    pub fn rotate(&mut self, control: Control) {
        match control {
            Control::Left => self.heading = self.heading.turned_left(),
            Control::Right => self.heading = self.heading.turned_right(),
            Control::Move => {}
        }
    }

    fn out_of_bounds(&self) -> RoverError {
        RoverError::OutOfBounds {
            x: self.x,
            y: self.y,
            heading: self.heading,
        }
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum RoverError {
    #[error("moving {heading} from ({x}, {y}) leaves the landing zone")]
    OutOfBounds { x: u64, y: u64, heading: Heading },
}
