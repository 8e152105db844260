use crate::config::OperatingWindow;
use crate::model::TimeWindow;

/// Intersection non vide de la plage et des horaires d'ouverture.
pub(super) fn clip(window: &TimeWindow, op: OperatingWindow) -> Option<(u8, u8)> {
    let start = window.start().max(op.start);
    let end = window.end().min(op.end);
    (start < end).then_some((start, end))
}
