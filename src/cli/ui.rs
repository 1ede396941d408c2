use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

pub const FOOTER: &str =
    "FLex - Financial Literacy Assistant for Students\nEducational purposes only. Not financial advice.";

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Heading,
    Highlight,
    Success,
    Info,
    Warning,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined().blue(),
        StyleType::Heading => style(text).bold().blue(),
        StyleType::Highlight => style(text).cyan(),
        StyleType::Success => style(text).green(),
        StyleType::Info => style(text).blue(),
        StyleType::Warning => style(text).yellow(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Page title followed by a blank line.
pub fn page_header(title: &str) -> String {
    format!("{}\n\n", style_text(title, StyleType::Title))
}

/// Section heading preceded by a blank line.
pub fn section(title: &str) -> String {
    format!("\n{}\n", style_text(title, StyleType::Heading))
}

pub fn bullet_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("  • {}\n", item.as_ref()))
        .collect()
}

pub fn numbered_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("  {}. {}\n", i + 1, item.as_ref()))
        .collect()
}

/// Indents every line of a multi-line block.
pub fn indent(text: &str) -> String {
    text.trim_end()
        .lines()
        .map(|line| {
            if line.is_empty() {
                "\n".to_string()
            } else {
                format!("  {line}\n")
            }
        })
        .collect()
}

pub fn footer() -> String {
    format!("\n{}\n", style_text(FOOTER, StyleType::Subtle))
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Right-aligned numeric cell.
pub fn number_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Formats a cell with bold and green text
pub fn format_percentage_cell(value: f64) -> Cell {
    Cell::new(format!("{value:.1}%"))
        .add_attribute(Attribute::Bold)
        .fg(Color::Green)
        .set_alignment(CellAlignment::Right)
}

/// Creates a cell for displaying percentage change with color coding.
pub fn change_cell(change: Option<f64>) -> Cell {
    match change {
        Some(change) => {
            let text = format!("{change:+.2}%");
            let color = if change >= 0.0 {
                Color::Green
            } else {
                Color::Red
            };
            Cell::new(text)
                .fg(color)
                .set_alignment(CellAlignment::Right)
        }
        None => Cell::new("N/A")
            .fg(Color::DarkGrey)
            .set_alignment(CellAlignment::Right),
    }
}

/// Horizontal bar of `width` characters proportional to `value / max`.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let filled = ((value / max).min(1.0) * width as f64).round() as usize;
    "█".repeat(filled)
}

/// One-line chart of a price series using block characters.
pub fn sparkline(values: &[f64]) -> String {
    const TICKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    values
        .iter()
        .map(|v| {
            if range <= 0.0 {
                TICKS[0]
            } else {
                let idx = ((v - min) / range * (TICKS.len() - 1) as f64).round() as usize;
                TICKS[idx.min(TICKS.len() - 1)]
            }
        })
        .collect()
}

/// Draws a finished 0-100 gauge on stdout. Hidden when stdout is not a terminal.
pub fn show_score_gauge(score: u8) {
    let pb = ProgressBar::with_draw_target(Some(100), ProgressDrawTarget::stdout());
    pb.set_style(
        ProgressStyle::with_template("  [{bar:40.green/white}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_position(u64::from(score));
    pb.abandon();
}

/// Returns a separator line matching the terminal width.
pub fn separator() -> String {
    let term_width = console::Term::stdout()
        .size_checked()
        .map(|(_, w)| w as usize)
        .unwrap_or(80);
    format!("\n{}", "─".repeat(term_width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_scales_to_width() {
        assert_eq!(bar(5.0, 10.0, 10).chars().count(), 5);
        assert_eq!(bar(20.0, 10.0, 10).chars().count(), 10);
        assert!(bar(0.0, 10.0, 10).is_empty());
    }

    #[test]
    fn test_sparkline_spans_min_to_max() {
        let line = sparkline(&[1.0, 2.0, 3.0]);
        assert_eq!(line.chars().count(), 3);
        assert!(line.starts_with('▁'));
        assert!(line.ends_with('█'));
        assert_eq!(sparkline(&[5.0, 5.0]), "▁▁");
        assert_eq!(sparkline(&[]), "");
    }

    #[test]
    fn test_lists() {
        assert_eq!(bullet_list(&["a", "b"]), "  • a\n  • b\n");
        assert_eq!(numbered_list(&["a"]), "  1. a\n");
        assert_eq!(indent("x\n\ny\n"), "  x\n\n  y\n");
    }
}
