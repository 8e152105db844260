use super::{gaps, util, Schedule, ScheduleReport};
use crate::config::{ConfigurationError, LocationConfig};
use crate::model::{DayAvailability, Roster, Shift, Student};

/// Affecte les étudiants aux permanences, en repartant de zéro.
///
/// Étudiants dans l'ordre d'inscription, jours dans l'ordre déclaré, lieux dans
/// l'ordre de priorité de `config`. Pour chaque lieu non complet, la première
/// plage qui chevauche les horaires d'ouverture donne un créneau tronqué à
/// l'intersection. Un étudiant reçoit au plus un créneau par jour.
pub fn assign(roster: &Roster, config: &LocationConfig) -> Result<ScheduleReport, ConfigurationError> {
    config.validate()?;

    let mut schedule = Schedule::empty_for(config);

    for student in roster.students() {
        for day in student.availability().days() {
            place_for_day(&mut schedule, config, student, day);
        }
    }

    let gaps = gaps::detect_gaps(&schedule);

    #[cfg(feature = "logging")]
    tracing::debug!(
        students = roster.len(),
        shifts = schedule.total_shifts(),
        gaps = gaps.len(),
        "schedule generated"
    );

    Ok(ScheduleReport { schedule, gaps })
}

fn place_for_day(
    schedule: &mut Schedule,
    config: &LocationConfig,
    student: &Student,
    day: &DayAvailability,
) {
    for (index, location) in config.locations().iter().enumerate() {
        let Some(op) = location.window(day.weekday) else {
            continue;
        };
        let Some(slot) = schedule.day_mut(index, day.weekday) else {
            continue;
        };
        if slot.shifts.len() >= location.required_staff as usize {
            continue;
        }

        if let Some((start, end)) = day.windows.iter().find_map(|w| util::clip(w, op)) {
            #[cfg(feature = "logging")]
            tracing::debug!(
                student = student.name(),
                location = %location.name,
                weekday = %day.weekday,
                start,
                end,
                "shift assigned"
            );
            slot.shifts.push(Shift {
                student_id: student.id().clone(),
                student_name: student.name().to_string(),
                start,
                end,
            });
            return;
        }
    }
}
