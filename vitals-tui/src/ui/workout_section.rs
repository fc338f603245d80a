//! Workout list section — pure rendering.
//!
//! Displays exactly the order it is given: no sorting, no filtering, no
//! interaction.

use ratatui::text::{Line, Span};

use vitals_core::domain::Workout;

use crate::theme;

/// A header, then one row per workout, or a single placeholder when empty.
pub fn lines(workouts: &[Workout]) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled("Workouts", theme::accent_bold()))];

    if workouts.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No workouts found.",
            theme::muted(),
        )));
        return lines;
    }

    for workout in workouts {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<18}", workout.activity.label()),
                theme::text(),
            ),
            Span::styled(
                format!("{:>6.0} seconds", workout.duration_secs),
                theme::muted(),
            ),
        ]));
    }

    lines
}
