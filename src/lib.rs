#![forbid(unsafe_code)]
//! Pantry Scheduler — répartition d'étudiants bénévoles sur les permanences hebdomadaires.
//!
//! - Disponibilités par jour, validées à l'inscription.
//! - Affectation déterministe : ordre d'inscription, puis priorité fixe des lieux.
//! - Un créneau au plus par étudiant et par jour.
//! - Les manques d'effectif sont signalés, jamais traités comme des erreurs.

pub mod availability;
pub mod config;
pub mod io;
pub mod model;
pub mod scheduler;

pub use availability::{
    parse_time_range, parse_weekly_hours, AvailabilityCollector, DayCollector, Feed,
    ValidationError,
};
pub use config::{
    export_config_json, load_config_from_file, ConfigurationError, Location, LocationConfig,
    OperatingWindow,
};
pub use model::{Availability, Roster, Shift, Student, StudentId, TimeWindow};
pub use scheduler::{
    assign, SchedError, Schedule, ScheduleReport, Scheduler, StaffingGap,
};
