use super::{Schedule, StaffingGap};

pub(super) fn detect_gaps(schedule: &Schedule) -> Vec<StaffingGap> {
    let mut out = Vec::new();

    for (location, day) in schedule.iter_days() {
        let assigned = day.shifts.len() as u32;
        if assigned < location.required_staff {
            #[cfg(feature = "logging")]
            tracing::warn!(
                location = %location.location,
                weekday = %day.weekday,
                required = location.required_staff,
                assigned,
                "understaffed"
            );
            out.push(StaffingGap {
                location: location.location.clone(),
                weekday: day.weekday,
                required: location.required_staff,
                assigned,
            });
        }
    }

    out
}
