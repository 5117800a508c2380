// Plain-text rendering of the dashboard for the terminal
use crate::domain::chart::bounds;
use crate::presentation::view::{DashboardView, PanelView};
use std::fmt::Write;

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub fn render_text(view: &DashboardView) -> String {
    match view {
        DashboardView::Loading => "Loading...\n".to_string(),
        DashboardView::Error { message } => format!("Error: {}\n", message),
        DashboardView::Charts {
            title,
            date,
            updated,
            panels,
        } => {
            let mut out = String::new();
            match date {
                Some(date) => {
                    let _ = writeln!(out, "{} ({})  updated {}", title, date, updated);
                }
                None => {
                    let _ = writeln!(out, "{}  updated {}", title, updated);
                }
            }
            for panel in panels {
                render_panel(&mut out, panel);
            }
            out
        }
    }
}

fn render_panel(out: &mut String, panel: &PanelView) {
    let _ = writeln!(out, "[{}] {}", panel.slot, panel.label);

    let (Some(first), Some(last), Some((lo, hi))) = (
        panel.time_labels.first(),
        panel.time_labels.last(),
        bounds(&panel.values),
    ) else {
        let _ = writeln!(out, "    no data");
        return;
    };

    let _ = writeln!(out, "    {}  {} - {}", sparkline(&panel.values), first, last);
    let _ = writeln!(
        out,
        "    min {}  max {}",
        panel.kind.format_value(lo),
        panel.kind.format_value(hi)
    );
}

/// One block character per value, scaled between the series min and max.
pub fn sparkline(values: &[f64]) -> String {
    let Some((lo, hi)) = bounds(values) else {
        return String::new();
    };
    let span = hi - lo;
    let top = SPARK_LEVELS.len() - 1;

    values
        .iter()
        .map(|&v| {
            if span <= f64::EPSILON {
                SPARK_LEVELS[top / 2]
            } else {
                let level = ((v - lo) / span * top as f64).round() as usize;
                SPARK_LEVELS[level.min(top)]
            }
        })
        .collect()
}
