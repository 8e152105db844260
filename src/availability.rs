//! Saisie et validation des disponibilités, inscription au roster.

use crate::model::{Availability, Roster, Student, StudentId, TimeWindow};
use chrono::Weekday;
use thiserror::Error;

/// Mot-clé de fin de saisie pour un jour (une saisie vide marche aussi).
pub const SENTINEL: &str = "done";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("invalid name: student name cannot be empty")]
    InvalidName,
    #[error("invalid hours: {0}")]
    InvalidHours(String),
    #[error("invalid time range: {0}")]
    InvalidTimeRange(String),
}

pub fn validate_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::InvalidName);
    }
    Ok(name.to_string())
}

pub fn check_weekly_hours(hours: f64) -> Result<f64, ValidationError> {
    if !hours.is_finite() || hours <= 0.0 {
        return Err(ValidationError::InvalidHours(format!(
            "{hours} must be greater than zero"
        )));
    }
    Ok(hours)
}

pub fn parse_weekly_hours(raw: &str) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    let hours: f64 = raw
        .parse()
        .map_err(|_| ValidationError::InvalidHours(format!("{raw:?} is not a number")))?;
    check_weekly_hours(hours)
}

/// Parse `start-end` (ex. `9-17`).
pub fn parse_time_range(raw: &str) -> Result<TimeWindow, ValidationError> {
    let malformed =
        || ValidationError::InvalidTimeRange(format!("expected 'start-end' (e.g. '9-17'), got {raw:?}"));
    let (start, end) = raw.trim().split_once('-').ok_or_else(malformed)?;
    let start: i64 = start.trim().parse().map_err(|_| malformed())?;
    let end: i64 = end.trim().parse().map_err(|_| malformed())?;
    TimeWindow::new(start, end)
}

pub fn is_sentinel(raw: &str) -> bool {
    let raw = raw.trim();
    raw.is_empty() || raw.eq_ignore_ascii_case(SENTINEL)
}

/// Résultat d'une saisie pour un jour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    Accepted(TimeWindow),
    Done,
}

/// Collecte jour par jour des plages saisies, jusqu'au mot-clé de fin.
#[derive(Debug, Default)]
pub struct AvailabilityCollector {
    availability: Availability,
}

impl AvailabilityCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn day(&mut self, weekday: Weekday) -> DayCollector<'_> {
        DayCollector {
            weekday,
            availability: &mut self.availability,
            done: false,
        }
    }

    pub fn finish(self) -> Availability {
        self.availability
    }
}

pub struct DayCollector<'a> {
    weekday: Weekday,
    availability: &'a mut Availability,
    done: bool,
}

impl DayCollector<'_> {
    /// Une saisie invalide est rejetée sans toucher aux plages déjà acceptées.
    pub fn feed(&mut self, raw: &str) -> Result<Feed, ValidationError> {
        if self.done || is_sentinel(raw) {
            self.done = true;
            return Ok(Feed::Done);
        }
        let window = parse_time_range(raw)?;
        self.availability.add_window(self.weekday, window);
        Ok(Feed::Accepted(window))
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl Roster {
    /// Inscrit un étudiant. En cas d'erreur le roster n'est pas modifié.
    pub fn register_student(
        &mut self,
        name: &str,
        weekly_hours: f64,
        availability: Availability,
    ) -> Result<StudentId, ValidationError> {
        let name = validate_name(name)?;
        let weekly_hours = check_weekly_hours(weekly_hours)?;
        let student = Student::new(name, weekly_hours, availability);
        let id = student.id().clone();

        #[cfg(feature = "logging")]
        tracing::debug!(
            student = student.name(),
            days = student.availability().days().count(),
            "student registered"
        );

        self.students.push(student);
        Ok(id)
    }

    /// Variante pour une saisie texte des heures hebdomadaires.
    pub fn register_from_input(
        &mut self,
        name: &str,
        weekly_hours: &str,
        availability: Availability,
    ) -> Result<StudentId, ValidationError> {
        let name = validate_name(name)?;
        let weekly_hours = parse_weekly_hours(weekly_hours)?;
        self.register_student(&name, weekly_hours, availability)
    }
}
