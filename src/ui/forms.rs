//! Shared form rendering: one bordered row per field, plus the submit row

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::state::forms::{FieldValue, Form, FormField, AMOUNT_PRESETS};
use crate::state::UiState;

const FIELD_HEIGHT: u16 = 3;
const MULTILINE_HEIGHT: u16 = 5;

/// Draw a whole form inside `area`, keeping the active row visible when the
/// form is taller than the viewport.
pub fn draw_form(frame: &mut Frame, area: Rect, title: &str, form: &dyn Form, ui: &UiState) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let heights: Vec<u16> = (0..form.field_count())
        .map(|index| match form.get_field(index) {
            Some(field) if field.is_multiline => MULTILINE_HEIGHT,
            _ => FIELD_HEIGHT,
        })
        .collect();

    let start = scroll_start(&heights, form.active_field(), inner.height);

    let mut y = inner.y;
    for index in start..form.field_count() {
        let height = heights[index];
        if y + height > inner.y + inner.height {
            break;
        }
        let row = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height,
        };
        let is_active = index == form.active_field();
        match form.get_field(index) {
            Some(field) => draw_field(frame, row, field, is_active, ui.field_error(&field.name)),
            None => draw_submit_row(frame, row, is_active),
        }
        y += height;
    }
}

/// First row to render so the active row fits inside `viewport_height`.
fn scroll_start(heights: &[u16], active: usize, viewport_height: u16) -> usize {
    let mut start = 0;
    loop {
        let used: u16 = heights[start..=active].iter().sum();
        if used <= viewport_height || start == active {
            return start;
        }
        start += 1;
    }
}

/// Draw a single form field with its label, value, and inline error
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let accent = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(if error.is_some() {
            Style::default().fg(Color::Red)
        } else {
            accent
        });

    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }

    let content = field_lines(field, is_active);
    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}

fn field_lines(field: &FormField, is_active: bool) -> Vec<Line<'_>> {
    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = Span::styled(
        if is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    match &field.value {
        FieldValue::Text(s) | FieldValue::Number(s) => {
            if field.is_multiline {
                let mut lines: Vec<Line> = s
                    .split('\n')
                    .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
                    .collect();
                if is_active {
                    match lines.last_mut() {
                        Some(last) => last.spans.push(cursor),
                        None => lines.push(Line::from(cursor)),
                    }
                }
                lines
            } else {
                vec![Line::from(vec![
                    Span::styled(s.clone(), text_style),
                    cursor,
                ])]
            }
        }
        FieldValue::Select { options, selected } => {
            let mut spans = Vec::new();
            for (index, (_, label)) in options.iter().enumerate() {
                let style = if index == *selected {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                let marker = if index == *selected { "●" } else { "○" };
                spans.push(Span::styled(format!("{marker} {label}  "), style));
            }
            vec![Line::from(spans)]
        }
        FieldValue::MultiSelect {
            options,
            chosen,
            cursor: hover,
        } => {
            let mut spans = Vec::new();
            for (index, option) in options.iter().enumerate() {
                let picked = chosen.get(index).copied().unwrap_or(false);
                let mark = if picked { "[x]" } else { "[ ]" };
                let style = if is_active && index == *hover {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else if picked {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                spans.push(Span::styled(format!("{mark} {option}  "), style));
            }
            vec![Line::from(spans)]
        }
        FieldValue::Checkbox(checked) => {
            let mark = if *checked { "[x]" } else { "[ ]" };
            vec![Line::from(Span::styled(mark.to_string(), text_style))]
        }
        FieldValue::Amount { selected, custom } => {
            let mut spans = Vec::new();
            for (index, preset) in AMOUNT_PRESETS.iter().enumerate() {
                let style = if Some(index) == *selected {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                spans.push(Span::styled(format!("[${preset}] "), style));
            }
            spans.push(Span::styled(" Custom: $", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(custom.clone(), text_style));
            if is_active {
                spans.push(cursor);
            }
            vec![Line::from(spans)]
        }
    }
}

/// Draw the trailing submit row
pub fn draw_submit_row(frame: &mut Frame, area: Rect, is_active: bool) {
    let style = if is_active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(" Submit ", style)).centered()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scroll_start_keeps_early_fields_when_they_fit() {
        let heights = vec![3, 3, 3, 3];
        assert_eq!(scroll_start(&heights, 1, 12), 0);
    }

    #[test]
    fn scroll_start_skips_rows_until_the_active_one_fits() {
        let heights = vec![3; 12];
        // 10 rows of height 3 fit in 30; active row 11 needs two skipped.
        assert_eq!(scroll_start(&heights, 11, 30), 2);
    }

    #[test]
    fn scroll_start_degenerates_to_the_active_row() {
        let heights = vec![5, 5, 5];
        assert_eq!(scroll_start(&heights, 2, 4), 2);
    }
}
