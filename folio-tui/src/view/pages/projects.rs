//! 项目页面视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 渲染项目页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // 项目列表
            Constraint::Length(6), // 选中项详情
        ])
        .split(area);

    // 项目列表
    let items: Vec<ListItem> = app
        .projects
        .projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let is_selected = i == app.projects.selected;
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
                format!("{prefix}{}", project.name),
                style,
            )))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.projects.selected));
    frame.render_stateful_widget(List::new(items), layout[0], &mut state);

    // 选中项详情
    let detail_block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(c.border));

    let detail = match app.projects.selected_project() {
        Some(project) => vec![
            Line::from(Span::styled(
                project.description,
                Style::default().fg(c.fg),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("Tech: {}", project.tech),
                Style::default().fg(Color::Gray),
            )),
        ],
        None => vec![Line::from(Span::styled(
            "No projects yet",
            Style::default().fg(c.muted),
        ))],
    };

    frame.render_widget(
        Paragraph::new(detail)
            .block(detail_block)
            .wrap(Wrap { trim: false }),
        layout[1],
    );
}
