//! Centered modal dialogs and the loading overlay

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::state::Modal;

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    pub accent: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint text shown at the bottom
    pub hint: &'a str,
    pub max_width: u16,
}

/// Route an active modal to its dialog rendering
pub fn draw_modal(frame: &mut Frame, modal: &Modal) {
    let config = match modal {
        Modal::Confirmation { message } => DialogConfig {
            title: "Thank You",
            accent: Color::Green,
            message,
            hint: "Press Enter to dismiss",
            max_width: 60,
        },
        Modal::Alert { message } => DialogConfig {
            title: "Something Went Wrong",
            accent: Color::Red,
            message,
            hint: "Press Enter to dismiss",
            max_width: 60,
        },
        Modal::Support { program } => {
            return draw_support(frame, program);
        }
    };
    render_dialog(frame, config);
}

fn draw_support(frame: &mut Frame, program: &str) {
    let message = format!(
        "Interested in our {program} program? Email programs@outreach.org or call us to get involved."
    );
    render_dialog(
        frame,
        DialogConfig {
            title: "Support This Program",
            accent: Color::Cyan,
            message: &message,
            hint: "Press Enter to dismiss",
            max_width: 60,
        },
    );
}

/// Dim overlay shown while a submission is in flight
pub fn draw_loading(frame: &mut Frame) {
    let area = centered_rect(frame.area(), 24, 3);
    frame.render_widget(Clear, area);
    let paragraph = Paragraph::new(Line::from(Span::styled(
        "Submitting…",
        Style::default().fg(Color::Yellow),
    )).centered())
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(paragraph, area);
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let padding = 4u16;
    let max_line_width = config.max_width.saturating_sub(padding) as usize;

    let wrapped = wrap_text(config.message, max_line_width);

    let content_width = wrapped
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(config.title.len())
        .max(config.hint.len()) as u16;
    let width = (content_width + padding + 2).min(config.max_width);

    // title + blank + message + blank + hint, plus borders
    let height = (wrapped.len() as u16 + 4 + 2).max(7);

    let dialog_area = centered_rect(area, width, height);
    frame.render_widget(Clear, dialog_area);

    let mut lines = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for text in wrapped {
        lines.push(Line::from(text));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        config.hint,
        Style::default().fg(Color::DarkGray),
    )));

    let dialog = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.accent))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if !current.is_empty() && current.chars().count() + word.chars().count() + 1 > max_width
            {
                lines.push(current);
                current = String::new();
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wrap_respects_the_width() {
        let lines = wrap_text("Thank you for subscribing to our newsletter!", 20);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= 20));
    }

    #[test]
    fn wrap_preserves_explicit_newlines() {
        let lines = wrap_text("one\n\ntwo", 40);
        assert_eq!(lines, vec!["one".to_string(), String::new(), "two".to_string()]);
    }

    #[test]
    fn empty_text_yields_one_blank_line() {
        assert_eq!(wrap_text("", 40), vec![String::new()]);
    }

    #[test]
    fn centered_rect_never_exceeds_the_area() {
        let rect = centered_rect(Rect::new(0, 0, 20, 5), 60, 10);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 5);
    }
}
