//! 地图页面视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 渲染地图页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 样式加载状态
            Constraint::Min(3),    // 标记点列表
            Constraint::Length(5), // 选中标记详情
        ])
        .split(area);

    // 地图样式加载状态
    let style_line = if app.map.loading {
        Line::from(Span::styled(
            "  Loading map style...",
            Style::default().fg(c.muted),
        ))
    } else {
        match app.map.style {
            Some(ref style) => Line::from(Span::styled(
                format!("  Map style loaded ({} rules)", style.len()),
                Style::default().fg(Color::Gray),
            )),
            None => Line::from(Span::styled(
                "  Map style not loaded (default look)",
                Style::default().fg(c.muted),
            )),
        }
    };
    frame.render_widget(Paragraph::new(style_line), layout[0]);

    // 标记点列表
    let items: Vec<ListItem> = app
        .map
        .markers
        .iter()
        .enumerate()
        .map(|(i, marker)| {
            let is_selected = i == app.map.selected;
            let prefix = if is_selected { "▶ " } else { "  " };
            let style = if is_selected {
                Style::default()
                    .bg(c.selected_bg)
                    .fg(c.selected_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };
            ListItem::new(Line::from(Span::styled(
                format!("{prefix}📍 {}", marker.title),
                style,
            )))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.map.selected));
    frame.render_stateful_widget(List::new(items), layout[1], &mut state);

    // 选中标记详情
    let detail_block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(c.border));

    let detail = match app.map.selected_marker() {
        Some(marker) => vec![
            Line::from(Span::styled(
                marker.description.as_str(),
                Style::default().fg(c.fg),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("Lat {:.4}, Lng {:.4}", marker.lat, marker.lng),
                Style::default().fg(Color::Gray),
            )),
        ],
        None => vec![Line::from(Span::styled(
            "No markers",
            Style::default().fg(c.muted),
        ))],
    };

    frame.render_widget(
        Paragraph::new(detail)
            .block(detail_block)
            .wrap(Wrap { trim: false }),
        layout[2],
    );
}
