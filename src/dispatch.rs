//! Line-oriented command dispatch.
//!
//! The command center classifies each raw text line as one of three shapes
//! and routes it into the fleet service: a zone configuration line
//! (`"5 5"`, accepted once), a deployment line (`"1 2 N"`), or a control
//! sequence (`"LMLMLMLMM"`). Whether the fleet service exists is what encodes
//! "the landing zone is configured"; every other command is gated on it.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::domain::{Control, DirectionError, Heading, LandingZone};
use crate::service::{FleetService, ServiceError};

static CONFIGURE_ZONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+) (\d+)$").unwrap());
static DEPLOY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+) (\d+) ([NESW])$").unwrap());
static DRIVE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[LMR]+$").unwrap());

#[derive(Default)]
pub struct CommandCenter {
    service: Option<FleetService>,
}

impl CommandCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes one command line. A control sequence reports the final
    /// position of the active vehicle; the other commands report nothing.
    /// Processing of a control sequence stops at the first failing token.
    pub fn send(&mut self, command: &str) -> Result<Option<String>, CommandError> {
        if DRIVE_RE.is_match(command) {
            let service = self
                .service
                .as_mut()
                .ok_or(CommandError::ZoneNotConfigured)?;

            for letter in command.chars() {
                service.drive(Control::try_from(letter)?)?;
            }

            let rover = service
                .active_vehicle()
                .ok_or(ServiceError::NoActiveVehicle)?;
            return Ok(Some(format!(
                "Rover Position: {} {} {}",
                rover.x(),
                rover.y(),
                rover.heading()
            )));
        }

        if let Some(fields) = DEPLOY_RE.captures(command) {
            let service = self
                .service
                .as_mut()
                .ok_or(CommandError::ZoneNotConfigured)?;

            let x = fields[1].parse()?;
            let y = fields[2].parse()?;
            let heading = match fields[3].chars().next() {
                Some(letter) => Heading::try_from(letter)?,
                None => return Err(CommandError::Unrecognized(command.to_owned())),
            };

            service.deploy(x, y, heading)?;
            return Ok(None);
        }

        if let Some(fields) = CONFIGURE_ZONE_RE.captures(command) {
            if self.service.is_some() {
                return Err(CommandError::ZoneAlreadyConfigured);
            }

            let width = fields[1].parse()?;
            let height = fields[2].parse()?;
            self.service = Some(FleetService::new(LandingZone::new(width, height)));
            return Ok(None);
        }

        Err(CommandError::Unrecognized(command.to_owned()))
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum CommandError {
    #[error("the landing zone has not been configured")]
    ZoneNotConfigured,
    #[error("the landing zone is already configured")]
    ZoneAlreadyConfigured,
    #[error("unrecognized command {0:?}")]
    Unrecognized(String),
    #[error("invalid number in command: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),
    #[error(transparent)]
    Direction(#[from] DirectionError),
    #[error(transparent)]
    Service(#[from] ServiceError),
}
