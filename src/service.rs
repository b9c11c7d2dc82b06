//! Fleet coordination: deployment and movement arbitration.
//!
//! The service owns the landing zone and the ordered fleet of deployed
//! rovers. Every deployment and move is validated against the zone bounds and
//! against the positions of the other fleet members before any state changes,
//! so a failing request leaves the fleet exactly as it was.

use std::rc::Rc;

use thiserror::Error;

use crate::domain::{Control, Heading, LandingZone, Rover, RoverError};

pub struct FleetService {
    landing_zone: Rc<LandingZone>,
    fleet: Vec<Rover>,
}

impl FleetService {
    /// Creates a coordinator for the given landing zone. Constructing the
    /// service is what marks the zone as configured; there is no unconfigured
    /// service state.
    pub fn new(landing_zone: LandingZone) -> Self {
        Self {
            landing_zone: Rc::new(landing_zone),
            fleet: Vec::new(),
        }
    }

    /// Deploys a new rover at `(x, y)`. The rover becomes the active vehicle.
    pub fn deploy(&mut self, x: u64, y: u64, heading: Heading) -> Result<(), ServiceError> {
        if !self.landing_zone.contains(x, y) {
            return Err(ServiceError::OutOfBounds { x, y });
        }
        if self.is_occupied(x, y) {
            return Err(ServiceError::PositionOccupied { x, y });
        }
        self.fleet
            .push(Rover::new(x, y, heading, Rc::clone(&self.landing_zone)));
        Ok(())
    }

    /// Applies one control token to the active vehicle. For a `Move` token the
    /// boundary check runs first, then the collision check, and only then is
    /// the new position committed.
    pub fn drive(&mut self, control: Control) -> Result<(), ServiceError> {
        let active = self
            .fleet
            .len()
            .checked_sub(1)
            .ok_or(ServiceError::NoActiveVehicle)?;

        if control != Control::Move {
            self.fleet[active].rotate(control);
            return Ok(());
        }

        let (x, y) = self.fleet[active].next_move()?;
        if self.is_occupied(x, y) {
            return Err(ServiceError::PositionOccupied { x, y });
        }
        self.fleet[active].advance()?;
        Ok(())
    }

    /// The most recently deployed rover, or `None` while the fleet is empty.
    pub fn active_vehicle(&self) -> Option<&Rover> {
        self.fleet.last()
    }

    /// Fleet sizes are small, so a linear scan is all the collision detection
    /// needed. The candidate cell of a move always differs from the mover's
    /// own cell, so the mover never collides with itself.
    fn is_occupied(&self, x: u64, y: u64) -> bool {
        self.fleet.iter().any(|v| v.x() == x && v.y() == y)
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum ServiceError {
    #[error("position ({x}, {y}) is outside the landing zone")]
    OutOfBounds { x: u64, y: u64 },
    #[error("another vehicle occupies position ({x}, {y})")]
    PositionOccupied { x: u64, y: u64 },
    #[error("no vehicle has been deployed")]
    NoActiveVehicle,
    #[error(transparent)]
    Vehicle(#[from] RoverError),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn service() -> FleetService {
        FleetService::new(LandingZone::new(5, 5))
    }

    #[test]
    fn test_deploy_inside_the_landing_zone() {
        let mut service = service();
        service.deploy(0, 0, Heading::North).unwrap();

        let rover = service.active_vehicle().unwrap();
        assert_eq!((rover.x(), rover.y()), (0, 0));
        assert_eq!(rover.heading(), Heading::North);
    }

    #[test]
    fn test_deploy_outside_the_landing_zone() {
        let mut service = service();
        assert_eq!(
            service.deploy(6, 6, Heading::North),
            Err(ServiceError::OutOfBounds { x: 6, y: 6 })
        );
        assert!(service.active_vehicle().is_none());
    }

    // The zone is (width, height) and deployment reads x first, so x is
    // checked against the width and y against the height.
    #[rstest]
    #[case::far_corner_fits(3, 7, true )]
    #[case::x_beyond_width( 4, 0, false)]
    #[case::y_beyond_height(0, 8, false)]
    fn test_deploy_checks_x_against_width_and_y_against_height(
        #[case] x: u64,
        #[case] y: u64,
        #[case] admitted: bool,
    ) {
        let mut service = FleetService::new(LandingZone::new(3, 7));
        assert_eq!(service.deploy(x, y, Heading::North).is_ok(), admitted);
    }

    #[test]
    fn test_deploy_onto_an_occupied_position() {
        let mut service = service();
        service.deploy(3, 3, Heading::South).unwrap();

        assert_eq!(
            service.deploy(3, 3, Heading::North),
            Err(ServiceError::PositionOccupied { x: 3, y: 3 })
        );

        // The occupying rover stays the active vehicle, untouched.
        let rover = service.active_vehicle().unwrap();
        assert_eq!((rover.x(), rover.y()), (3, 3));
        assert_eq!(rover.heading(), Heading::South);
    }

    #[test]
    fn test_drive_moves_the_active_vehicle() {
        let mut service = service();
        service.deploy(3, 3, Heading::North).unwrap();
        service.drive(Control::Move).unwrap();

        let rover = service.active_vehicle().unwrap();
        assert_eq!((rover.x(), rover.y()), (3, 4));
        assert_eq!(rover.heading(), Heading::North);
    }

    #[rstest]
    #[case(Control::Left,  Heading::West)]
    #[case(Control::Right, Heading::East)]
    fn test_drive_turns_the_active_vehicle(#[case] control: Control, #[case] expected: Heading) {
        let mut service = service();
        service.deploy(3, 3, Heading::North).unwrap();
        service.drive(control).unwrap();

        let rover = service.active_vehicle().unwrap();
        assert_eq!((rover.x(), rover.y()), (3, 3));
        assert_eq!(rover.heading(), expected);
    }

    #[test]
    fn test_drive_does_not_leave_the_landing_zone() {
        let mut service = service();
        service.deploy(5, 5, Heading::North).unwrap();

        assert_eq!(
            service.drive(Control::Move),
            Err(ServiceError::Vehicle(RoverError::OutOfBounds {
                x: 5,
                y: 5,
                heading: Heading::North,
            }))
        );

        let rover = service.active_vehicle().unwrap();
        assert_eq!((rover.x(), rover.y()), (5, 5));
        assert_eq!(rover.heading(), Heading::North);
    }

    #[test]
    fn test_drive_does_not_collide_with_another_vehicle() {
        let mut service = service();
        service.deploy(3, 3, Heading::North).unwrap();
        service.deploy(3, 4, Heading::South).unwrap();

        // The active rover faces South into the first rover's cell.
        assert_eq!(
            service.drive(Control::Move),
            Err(ServiceError::PositionOccupied { x: 3, y: 3 })
        );

        let rover = service.active_vehicle().unwrap();
        assert_eq!((rover.x(), rover.y()), (3, 4));
        assert_eq!(rover.heading(), Heading::South);
    }

    #[test]
    fn test_drive_without_a_deployed_vehicle() {
        let mut service = service();
        assert_eq!(
            service.drive(Control::Move),
            Err(ServiceError::NoActiveVehicle)
        );
    }

    #[test]
    fn test_active_vehicle_is_the_most_recently_deployed() {
        let mut service = service();
        service.deploy(0, 0, Heading::North).unwrap();
        service.deploy(1, 1, Heading::East).unwrap();

        let rover = service.active_vehicle().unwrap();
        assert_eq!((rover.x(), rover.y()), (1, 1));
    }
}
