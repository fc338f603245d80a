//! The metrics screen — the two running totals plus the workout and sleep
//! sections, rendered top to bottom as one list.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::{sleep_section, workout_section};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let m = &app.metrics;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Step Count: ", theme::muted()),
        Span::styled(format!("{:.0} steps", m.step_count), theme::accent()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Dietary Protein: ", theme::muted()),
        Span::styled(format!("{:.1} g", m.dietary_protein_g), theme::accent()),
    ]));

    if m.pending_fetches > 0 {
        lines.push(Line::from(Span::styled(
            format!("Refreshing... {} queries outstanding", m.pending_fetches),
            theme::warning(),
        )));
    } else if let Some(at) = m.last_updated {
        lines.push(Line::from(Span::styled(
            format!("Updated {}", at.format("%H:%M:%S")),
            theme::muted(),
        )));
    }

    lines.push(Line::from(""));
    lines.extend(workout_section::lines(&m.workouts));
    lines.push(Line::from(""));
    lines.extend(sleep_section::lines(&m.sleep));

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}
