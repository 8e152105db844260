mod assignment;
mod gaps;
mod types;
mod util;

pub use assignment::assign;
pub use types::{DaySchedule, LocationSchedule, SchedError, Schedule, ScheduleReport, StaffingGap};

use crate::config::LocationConfig;
use crate::model::{Availability, Roster, StudentId};

/// Session de planification : possède le roster et la configuration des lieux.
#[derive(Debug, Default)]
pub struct Scheduler {
    roster: Roster,
    config: LocationConfig,
}

impl Scheduler {
    /// Session vide avec la configuration de référence.
    pub fn new() -> Self {
        Self::with_config(LocationConfig::reference())
    }

    pub fn with_config(config: LocationConfig) -> Self {
        Self {
            roster: Roster::default(),
            config,
        }
    }

    /// Reprend un roster déjà constitué (import CSV, tests).
    pub fn from_roster(roster: Roster, config: LocationConfig) -> Self {
        Self { roster, config }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
    pub fn config(&self) -> &LocationConfig {
        &self.config
    }

    pub fn register_student(
        &mut self,
        name: &str,
        weekly_hours: f64,
        availability: Availability,
    ) -> Result<StudentId, SchedError> {
        Ok(self.roster.register_student(name, weekly_hours, availability)?)
    }

    pub fn register_from_input(
        &mut self,
        name: &str,
        weekly_hours: &str,
        availability: Availability,
    ) -> Result<StudentId, SchedError> {
        Ok(self
            .roster
            .register_from_input(name, weekly_hours, availability)?)
    }

    /// Recalcule le planning ; le roster n'est pas modifié.
    pub fn generate_schedule(&self) -> Result<ScheduleReport, SchedError> {
        Ok(assign(&self.roster, &self.config)?)
    }
}
