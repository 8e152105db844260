use crate::availability::ValidationError;
use chrono::Weekday;
use serde::{Serialize, Serializer};
use uuid::Uuid;

/// Ordre canonique des jours (lundi en premier).
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Nom anglais complet du jour (`Monday`, ...).
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Accepte `Monday`, `mon`, `MONDAY`...
pub fn parse_weekday(raw: &str) -> Option<Weekday> {
    raw.trim().parse::<Weekday>().ok()
}

pub(crate) fn serialize_weekday<S: Serializer>(day: &Weekday, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(weekday_name(*day))
}

/// Identifiant fort pour Student
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StudentId(String);

impl StudentId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Plage de disponibilité `[start, end)` en heures entières, `0 <= start < end <= 24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    start: u8,
    end: u8,
}

impl TimeWindow {
    pub fn new(start: i64, end: i64) -> Result<Self, ValidationError> {
        if !(0 <= start && start < end && end <= 24) {
            return Err(ValidationError::InvalidTimeRange(format!(
                "{start}-{end} is outside 0 <= start < end <= 24"
            )));
        }
        Ok(Self {
            start: start as u8,
            end: end as u8,
        })
    }

    pub fn start(&self) -> u8 {
        self.start
    }
    pub fn end(&self) -> u8 {
        self.end
    }
}

/// Plages déclarées pour un jour, dans l'ordre de saisie (jamais vide).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayAvailability {
    #[serde(serialize_with = "serialize_weekday")]
    pub weekday: Weekday,
    pub windows: Vec<TimeWindow>,
}

/// Disponibilités hebdomadaires d'un étudiant.
///
/// Les jours gardent leur ordre de déclaration ; un jour sans plage n'apparaît pas.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Availability {
    days: Vec<DayAvailability>,
}

impl Availability {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute une plage, à la suite des plages déjà déclarées pour ce jour.
    pub fn add_window(&mut self, weekday: Weekday, window: TimeWindow) {
        match self.days.iter_mut().find(|d| d.weekday == weekday) {
            Some(day) => day.windows.push(window),
            None => self.days.push(DayAvailability {
                weekday,
                windows: vec![window],
            }),
        }
    }

    pub fn windows(&self, weekday: Weekday) -> Option<&[TimeWindow]> {
        self.days
            .iter()
            .find(|d| d.weekday == weekday)
            .map(|d| d.windows.as_slice())
    }

    pub fn days(&self) -> impl Iterator<Item = &DayAvailability> {
        self.days.iter()
    }

    pub fn weekdays(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.days.iter().map(|d| d.weekday)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Étudiant bénévole ; non modifiable une fois inscrit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    id: StudentId,
    name: String,
    weekly_hours: f64,
    availability: Availability,
}

impl Student {
    pub(crate) fn new(name: String, weekly_hours: f64, availability: Availability) -> Self {
        Self {
            id: StudentId::random(),
            name,
            weekly_hours,
            availability,
        }
    }

    pub fn id(&self) -> &StudentId {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn weekly_hours(&self) -> f64 {
        self.weekly_hours
    }
    pub fn availability(&self) -> &Availability {
        &self.availability
    }
}

/// Roster : étudiants dans l'ordre d'inscription (ajout seulement).
#[derive(Debug, Clone, Default, Serialize)]
pub struct Roster {
    pub(crate) students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn students(&self) -> &[Student] {
        &self.students
    }
    pub fn len(&self) -> usize {
        self.students.len()
    }
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
    pub fn find_student_by_name<'a>(&'a self, name: &str) -> Option<&'a Student> {
        self.students.iter().find(|s| s.name == name)
    }
    pub fn find_student_by_id<'a>(&'a self, id: &StudentId) -> Option<&'a Student> {
        self.students.iter().find(|s| &s.id == id)
    }
}

/// Créneau attribué : intersection de la plage de l'étudiant et des horaires du lieu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shift {
    pub student_id: StudentId,
    pub student_name: String,
    pub start: u8,
    pub end: u8,
}

impl Shift {
    /// Durée en heures.
    pub fn duration_hours(&self) -> u8 {
        self.end - self.start
    }
}
