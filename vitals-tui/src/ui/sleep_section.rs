//! Sleep list section — pure rendering.
//!
//! Same contract as the workout section: displays exactly the order it is
//! given, no interaction.

use ratatui::text::{Line, Span};

use vitals_core::domain::SleepSample;

use crate::theme;

const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M";

/// A header, then one row per sample, or a single placeholder when empty.
pub fn lines(samples: &[SleepSample]) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled("Sleep", theme::accent_bold()))];

    if samples.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No sleep data found.",
            theme::muted(),
        )));
        return lines;
    }

    for sample in samples {
        lines.push(Line::from(vec![
            Span::styled("  Start: ", theme::muted()),
            Span::styled(
                sample.start.format(TIMESTAMP_FMT).to_string(),
                theme::text(),
            ),
            Span::styled("   End: ", theme::muted()),
            Span::styled(sample.end.format(TIMESTAMP_FMT).to_string(), theme::text()),
        ]));
    }

    lines
}
