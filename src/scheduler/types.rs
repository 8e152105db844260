use crate::availability::ValidationError;
use crate::config::{ConfigurationError, LocationConfig};
use crate::model::{serialize_weekday, weekday_name, Shift};
use chrono::Weekday;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Créneaux attribués pour un lieu et un jour, dans l'ordre d'attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySchedule {
    #[serde(serialize_with = "serialize_weekday")]
    pub weekday: Weekday,
    pub shifts: Vec<Shift>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationSchedule {
    pub location: String,
    pub required_staff: u32,
    pub days: Vec<DaySchedule>,
}

impl LocationSchedule {
    pub fn day(&self, weekday: Weekday) -> Option<&DaySchedule> {
        self.days.iter().find(|d| d.weekday == weekday)
    }
}

/// Planning complet : lieux dans l'ordre de priorité, jours dans l'ordre de la configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    locations: Vec<LocationSchedule>,
}

impl Schedule {
    /// Une entrée vide par couple (lieu, jour) présent dans les horaires d'ouverture.
    pub(crate) fn empty_for(config: &LocationConfig) -> Self {
        let locations = config
            .locations()
            .iter()
            .map(|l| LocationSchedule {
                location: l.name.clone(),
                required_staff: l.required_staff,
                days: l
                    .weekdays()
                    .map(|weekday| DaySchedule {
                        weekday,
                        shifts: Vec::new(),
                    })
                    .collect(),
            })
            .collect();
        Self { locations }
    }

    pub(crate) fn day_mut(&mut self, location_index: usize, weekday: Weekday) -> Option<&mut DaySchedule> {
        self.locations
            .get_mut(location_index)?
            .days
            .iter_mut()
            .find(|d| d.weekday == weekday)
    }

    pub fn locations(&self) -> &[LocationSchedule] {
        &self.locations
    }

    pub fn location(&self, name: &str) -> Option<&LocationSchedule> {
        self.locations.iter().find(|l| l.location == name)
    }

    /// `None` si le lieu n'ouvre pas ce jour-là.
    pub fn shifts(&self, location: &str, weekday: Weekday) -> Option<&[Shift]> {
        self.location(location)?
            .day(weekday)
            .map(|d| d.shifts.as_slice())
    }

    pub fn iter_days(&self) -> impl Iterator<Item = (&LocationSchedule, &DaySchedule)> {
        self.locations
            .iter()
            .flat_map(|l| l.days.iter().map(move |d| (l, d)))
    }

    pub fn total_shifts(&self) -> usize {
        self.iter_days().map(|(_, d)| d.shifts.len()).sum()
    }
}

/// Manque d'effectif pour un lieu et un jour. Ce n'est pas une erreur.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffingGap {
    pub location: String,
    #[serde(serialize_with = "serialize_weekday")]
    pub weekday: Weekday,
    pub required: u32,
    pub assigned: u32,
}

impl StaffingGap {
    pub fn deficit(&self) -> u32 {
        self.required.saturating_sub(self.assigned)
    }
}

impl fmt::Display for StaffingGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Not enough staff for {} on {}. Required: {}, Scheduled: {}",
            self.location,
            weekday_name(self.weekday),
            self.required,
            self.assigned
        )
    }
}

/// Résultat d'une affectation : planning + manques d'effectif.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleReport {
    pub schedule: Schedule,
    pub gaps: Vec<StaffingGap>,
}

impl ScheduleReport {
    pub fn is_fully_staffed(&self) -> bool {
        self.gaps.is_empty()
    }

    pub fn gap_for(&self, location: &str, weekday: Weekday) -> Option<&StaffingGap> {
        self.gaps
            .iter()
            .find(|g| g.location == location && g.weekday == weekday)
    }
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
