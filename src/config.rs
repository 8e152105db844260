use crate::model::{parse_weekday, weekday_name};
use anyhow::Context;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("configuration must define at least one location")]
    NoLocations,
    #[error("location name cannot be empty")]
    EmptyLocationName,
    #[error("duplicate location: {0}")]
    DuplicateLocation(String),
    #[error("required_staff must be > 0 for {location} (got {value})")]
    NonPositiveStaff { location: String, value: i64 },
    #[error("invalid operating window {start}-{end} for {location} on {weekday}")]
    InvalidOperatingWindow {
        location: String,
        weekday: String,
        start: i64,
        end: i64,
    },
    #[error("unknown weekday {weekday:?} for {location}")]
    UnknownWeekday { location: String, weekday: String },
    #[error("weekday {weekday} declared twice for {location}")]
    DuplicateWeekday { location: String, weekday: String },
    #[error("priority lists unknown location: {0}")]
    UnknownPriorityLocation(String),
    #[error("location {0} is missing from priority")]
    MissingFromPriority(String),
    #[error("parsing configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("reading configuration {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Horaires d'ouverture d'un lieu pour un jour, en heures entières.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperatingWindow {
    pub start: u8,
    pub end: u8,
}

impl OperatingWindow {
    pub fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    fn is_valid(&self) -> bool {
        self.start < self.end && self.end <= 24
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub name: String,
    pub required_staff: u32,
    /// Jours planifiables, lundi en premier.
    pub operating_hours: Vec<(Weekday, OperatingWindow)>,
}

impl Location {
    pub fn new<N: Into<String>>(
        name: N,
        required_staff: u32,
        operating_hours: Vec<(Weekday, OperatingWindow)>,
    ) -> Self {
        Self {
            name: name.into(),
            required_staff,
            operating_hours,
        }
    }

    pub fn window(&self, weekday: Weekday) -> Option<OperatingWindow> {
        self.operating_hours
            .iter()
            .find(|(d, _)| *d == weekday)
            .map(|(_, w)| *w)
    }

    pub fn weekdays(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.operating_hours.iter().map(|(d, _)| *d)
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        if self.name.trim().is_empty() {
            return Err(ConfigurationError::EmptyLocationName);
        }
        if self.required_staff == 0 {
            return Err(ConfigurationError::NonPositiveStaff {
                location: self.name.clone(),
                value: 0,
            });
        }
        let mut seen = HashSet::new();
        for (day, window) in &self.operating_hours {
            if !seen.insert(day.num_days_from_monday()) {
                return Err(ConfigurationError::DuplicateWeekday {
                    location: self.name.clone(),
                    weekday: weekday_name(*day).to_string(),
                });
            }
            if !window.is_valid() {
                return Err(ConfigurationError::InvalidOperatingWindow {
                    location: self.name.clone(),
                    weekday: weekday_name(*day).to_string(),
                    start: i64::from(window.start),
                    end: i64::from(window.end),
                });
            }
        }
        Ok(())
    }
}

/// Table des lieux ; l'ordre de la liste est l'ordre de priorité d'affectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationConfig {
    locations: Vec<Location>,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self::reference()
    }
}

impl LocationConfig {
    /// Aucune validation ici : `validate` est appelé avant chaque affectation.
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    /// Configuration de référence : Main Office, G Building puis Inventory Room, du lundi au vendredi.
    pub fn reference() -> Self {
        let week = |start, end| {
            [
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ]
            .into_iter()
            .map(|d| (d, OperatingWindow::new(start, end)))
            .collect::<Vec<_>>()
        };
        Self::new(vec![
            Location::new("Main Office", 1, week(11, 15)),
            Location::new("G Building", 1, week(15, 19)),
            Location::new("Inventory Room", 2, week(8, 18)),
        ])
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.name == name)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.locations.is_empty() {
            return Err(ConfigurationError::NoLocations);
        }
        let mut names = HashSet::new();
        for location in &self.locations {
            location.validate()?;
            if !names.insert(location.name.as_str()) {
                return Err(ConfigurationError::DuplicateLocation(location.name.clone()));
            }
        }
        Ok(())
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigurationError> {
        let file: ConfigFile = serde_json::from_str(raw)?;
        file.try_into()
    }

    pub fn to_file(&self) -> ConfigFile {
        ConfigFile::from(self)
    }
}

/// Format JSON de la configuration.
///
/// ```json
/// {
///   "priority": ["Main Office", "G Building", "Inventory Room"],
///   "locations": {
///     "Main Office": { "operating_hours": { "Monday": [11, 15] }, "required_staff": 1 }
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub priority: Vec<String>,
    pub locations: BTreeMap<String, LocationEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationEntry {
    pub operating_hours: BTreeMap<String, [i64; 2]>,
    pub required_staff: i64,
}

impl TryFrom<ConfigFile> for LocationConfig {
    type Error = ConfigurationError;

    fn try_from(mut file: ConfigFile) -> Result<Self, Self::Error> {
        let mut seen = HashSet::new();
        let mut locations = Vec::with_capacity(file.priority.len());
        for name in &file.priority {
            if !seen.insert(name.as_str()) {
                return Err(ConfigurationError::DuplicateLocation(name.clone()));
            }
            let entry = file
                .locations
                .remove(name)
                .ok_or_else(|| ConfigurationError::UnknownPriorityLocation(name.clone()))?;
            locations.push(entry.into_location(name)?);
        }
        if let Some(name) = file.locations.into_keys().next() {
            return Err(ConfigurationError::MissingFromPriority(name));
        }
        let config = LocationConfig::new(locations);
        config.validate()?;
        Ok(config)
    }
}

impl LocationEntry {
    fn into_location(self, name: &str) -> Result<Location, ConfigurationError> {
        let required_staff = u32::try_from(self.required_staff)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| ConfigurationError::NonPositiveStaff {
                location: name.to_string(),
                value: self.required_staff,
            })?;

        let mut operating_hours = Vec::with_capacity(self.operating_hours.len());
        for (raw_day, [start, end]) in self.operating_hours {
            let day = parse_weekday(&raw_day).ok_or_else(|| ConfigurationError::UnknownWeekday {
                location: name.to_string(),
                weekday: raw_day.clone(),
            })?;
            if !(0 <= start && start < end && end <= 24) {
                return Err(ConfigurationError::InvalidOperatingWindow {
                    location: name.to_string(),
                    weekday: weekday_name(day).to_string(),
                    start,
                    end,
                });
            }
            if operating_hours.iter().any(|(d, _)| *d == day) {
                return Err(ConfigurationError::DuplicateWeekday {
                    location: name.to_string(),
                    weekday: weekday_name(day).to_string(),
                });
            }
            operating_hours.push((day, OperatingWindow::new(start as u8, end as u8)));
        }
        operating_hours.sort_by_key(|(d, _)| d.num_days_from_monday());

        Ok(Location::new(name, required_staff, operating_hours))
    }
}

impl From<&LocationConfig> for ConfigFile {
    fn from(config: &LocationConfig) -> Self {
        let priority = config.locations.iter().map(|l| l.name.clone()).collect();
        let locations = config
            .locations
            .iter()
            .map(|l| {
                let operating_hours = l
                    .operating_hours
                    .iter()
                    .map(|(d, w)| {
                        (
                            weekday_name(*d).to_string(),
                            [i64::from(w.start), i64::from(w.end)],
                        )
                    })
                    .collect();
                (
                    l.name.clone(),
                    LocationEntry {
                        operating_hours,
                        required_staff: i64::from(l.required_staff),
                    },
                )
            })
            .collect();
        Self {
            priority,
            locations,
        }
    }
}

pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<LocationConfig, ConfigurationError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    LocationConfig::from_json_str(&data)
}

pub fn export_config_json<P: AsRef<Path>>(path: P, config: &LocationConfig) -> anyhow::Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(&config.to_file())?;
    fs::write(path, json).with_context(|| format!("writing configuration {}", path.display()))?;
    Ok(())
}
