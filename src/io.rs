use crate::availability::parse_time_range;
use crate::model::{parse_weekday, weekday_name, Availability, Roster};
use crate::scheduler::{Schedule, ScheduleReport, StaffingGap};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import d'étudiants depuis CSV: header `name,weekly_hours[,availability]`
///
/// `availability` : `Monday=9-12 13-17;Tuesday=10-14`. Tout ou rien : si une
/// ligne est invalide, le roster reste inchangé.
pub fn import_students_csv<P: AsRef<Path>>(path: P, roster: &mut Roster) -> anyhow::Result<usize> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut staged = roster.clone();
    let mut count = 0usize;
    for (idx, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let line = idx + 2;
        let name = rec.get(0).context("missing name")?;
        let hours = rec.get(1).context("missing weekly_hours")?;
        let availability = parse_availability(rec.get(2).unwrap_or(""))
            .with_context(|| format!("invalid availability on line {line}"))?;
        staged
            .register_from_input(name, hours, availability)
            .with_context(|| format!("invalid student on line {line}"))?;
        count += 1;
    }
    *roster = staged;
    Ok(count)
}

/// `Monday=9-12 13-17;Tuesday=10-14` ; un jour sans plage est ignoré.
pub fn parse_availability(raw: &str) -> anyhow::Result<Availability> {
    let mut availability = Availability::new();
    for chunk in raw.split(';').map(str::trim).filter(|c| !c.is_empty()) {
        let Some((day_raw, ranges)) = chunk.split_once('=') else {
            bail!("expected 'Day=start-end', got {chunk:?}");
        };
        let day = parse_weekday(day_raw)
            .with_context(|| format!("unknown weekday {:?}", day_raw.trim()))?;
        for range in ranges.split_whitespace() {
            availability.add_window(day, parse_time_range(range)?);
        }
    }
    Ok(availability)
}

/// Export JSON du planning et des manques (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(path: P, report: &ScheduleReport) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(report)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV des créneaux: header `location,weekday,student,start,end`
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["location", "weekday", "student", "start", "end"])?;
    for (location, day) in schedule.iter_days() {
        for shift in &day.shifts {
            let mut start = itoa::Buffer::new();
            let mut end = itoa::Buffer::new();
            w.write_record([
                location.location.as_str(),
                weekday_name(day.weekday),
                shift.student_name.as_str(),
                start.format(shift.start),
                end.format(shift.end),
            ])?;
        }
    }
    w.flush()?;
    Ok(())
}

/// Export CSV des manques: header `location,weekday,required,assigned,deficit`
pub fn export_gaps_csv<P: AsRef<Path>>(path: P, gaps: &[StaffingGap]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["location", "weekday", "required", "assigned", "deficit"])?;
    for gap in gaps {
        let mut required = itoa::Buffer::new();
        let mut assigned = itoa::Buffer::new();
        let mut deficit = itoa::Buffer::new();
        w.write_record([
            gap.location.as_str(),
            weekday_name(gap.weekday),
            required.format(gap.required),
            assigned.format(gap.assigned),
            deficit.format(gap.deficit()),
        ])?;
    }
    w.flush()?;
    Ok(())
}
