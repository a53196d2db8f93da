//! Read-only views derived from wizard state: progress, step markers and the
//! confirmation summary. Nothing here is stored; callers recompute on read.

use super::form::{Field, FormData};
use super::step::Step;

/// Separator between a stylist's name and their role, as in
/// `"Alex Thompson - Master Stylist"`.
pub const STYLIST_QUALIFIER_SEPARATOR: &str = " - ";

/// Fraction of the progress indicator to fill: 0.0 on the first step,
/// 1.0 on the last.
pub fn progress_fraction(current: Step) -> f64 {
    f64::from(current.position() - 1) / f64::from(Step::COUNT - 1)
}

/// Progress as a whole percentage, for gauges.
pub fn progress_percent(current: Step) -> u16 {
    (progress_fraction(current) * 100.0).round() as u16
}

/// How a step appears in the step indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

/// A step is completed iff it comes strictly before the current one.
pub fn is_completed(step: Step, current: Step) -> bool {
    step.position() < current.position()
}

pub fn step_status(step: Step, current: Step) -> StepStatus {
    if is_completed(step, current) {
        StepStatus::Completed
    } else if step == current {
        StepStatus::Current
    } else {
        StepStatus::Upcoming
    }
}

/// Status of every step, in order.
pub fn step_markers(current: Step) -> Vec<(Step, StepStatus)> {
    Step::all().map(|step| (step, step_status(step, current))).collect()
}

/// Split a stylist entry into its name and trailing role qualifier.
///
/// Only the last separator counts, so hyphens inside a name survive.
pub fn split_stylist(stylist: &str) -> (&str, Option<&str>) {
    match stylist.rsplit_once(STYLIST_QUALIFIER_SEPARATOR) {
        Some((name, role)) => (name.trim_end(), Some(role.trim())),
        None => (stylist, None),
    }
}

/// Stylist name with the trailing role qualifier removed, so
/// `"Quinn Martins - Senior Stylist"` becomes `"Quinn Martins"`.
/// A value without a separator is returned unchanged.
pub fn stylist_display_name(stylist: &str) -> &str {
    split_stylist(stylist).0
}

/// One labelled row of the confirmation summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryItem {
    pub label: &'static str,
    pub value: String,
}

/// Ordered confirmation summary. Notes appear only when filled in.
pub fn summary(form: &FormData) -> Vec<SummaryItem> {
    Field::all()
        .filter(|&field| field != Field::Notes || !form.notes.is_empty())
        .map(|field| SummaryItem {
            label: field.label(),
            value: match field {
                Field::Stylist => stylist_display_name(&form.stylist).to_string(),
                other => form.get(other).to_string(),
            },
        })
        .collect()
}

/// Sentence announced when a booking is submitted.
pub fn confirmation_message(form: &FormData) -> String {
    format!(
        "{} with {} on {} at {}.",
        form.service,
        stylist_display_name(&form.stylist),
        form.date,
        form.time
    )
}
