//! Gallery view: filter bar, item grid, lightbox overlay

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::App;
use crate::state::gallery::FILTER_ALL;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Filter bar
            Constraint::Min(0),    // Item list
        ])
        .split(area);

    draw_filter_bar(frame, chunks[0], app);
    draw_items(frame, chunks[1], app);

    if app.state.gallery.is_lightbox_open() {
        draw_lightbox(frame, app);
    }
}

fn draw_filter_bar(frame: &mut Frame, area: Rect, app: &App) {
    let gallery = &app.state.gallery;
    let mut spans = vec![Span::styled(" Filter: ", Style::default().fg(Color::Gray))];

    let mut filters = vec![FILTER_ALL];
    filters.extend(gallery.categories());
    for filter in filters {
        let style = if filter == gallery.filter() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {filter} "), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_items(frame: &mut Frame, area: Rect, app: &App) {
    let gallery = &app.state.gallery;
    let visible = gallery.visible_indices();

    let items: Vec<ListItem> = visible
        .iter()
        .filter_map(|&index| gallery.items().get(index))
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    item.title.clone(),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("  [{}]", item.category),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Gallery ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut list_state = ListState::default();
    if !visible.is_empty() {
        list_state.select(Some(gallery.cursor()));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_lightbox(frame: &mut Frame, app: &App) {
    let Some(item) = app.state.gallery.lightbox_item() else {
        return;
    };

    let area = frame.area();
    let width = area.width.saturating_sub(10).min(70);
    let height = 9.min(area.height);
    let overlay = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, overlay);

    let lines = vec![
        Line::from(Span::styled(
            item.title.clone(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(""),
        Line::from(item.description.clone()).centered(),
        Line::from(""),
        Line::from(Span::styled(
            format!("[{}]", item.category),
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
        Line::from(""),
        Line::from(Span::styled(
            "←/→: browse  Esc: close",
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
    ];

    let dialog = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));
    frame.render_widget(dialog, overlay);
}
