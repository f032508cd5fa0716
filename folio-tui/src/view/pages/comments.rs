//! 评论页面视图

use chrono::DateTime;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 渲染评论页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    // 未登录时只显示登录提示
    if !app.session.logged_in() {
        render_sign_in_hint(app, frame, area);
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // 查询条件
            Constraint::Min(1),    // 评论列表
        ])
        .split(area);

    // 当前查询条件
    let query = &app.comments.query;
    let mut header_spans = vec![
        Span::styled("  Showing ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}", query.count),
            Style::default().fg(c.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" · ", Style::default().fg(Color::DarkGray)),
        Span::styled(query.sort.label(), Style::default().fg(c.accent)),
        Span::styled(" · ", Style::default().fg(Color::DarkGray)),
        Span::styled(query.lang.label(), Style::default().fg(c.accent)),
    ];
    if app.comments.loading {
        header_spans.push(Span::styled(
            "  (refreshing...)",
            Style::default().fg(c.muted),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(header_spans)), layout[0]);

    // 评论列表
    if app.comments.comments.is_empty() {
        let empty = if app.comments.loading {
            "  Loading comments..."
        } else if app.comments.loaded_once {
            "  No comments yet. Press Alt+a to write the first one."
        } else {
            "  Comments have not been loaded yet. Press Alt+r to refresh."
        };
        frame.render_widget(
            Paragraph::new(Span::styled(empty, Style::default().fg(c.muted))),
            layout[1],
        );
        return;
    }

    let items: Vec<ListItem> = app
        .comments
        .comments
        .iter()
        .enumerate()
        .map(|(i, comment)| {
            let is_selected = i == app.comments.selected;
            let prefix = if is_selected { "▶ " } else { "  " };
            let name_style = if is_selected {
                Style::default()
                    .bg(c.selected_bg)
                    .fg(c.selected_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.accent).add_modifier(Modifier::BOLD)
            };

            let header = Line::from(vec![
                Span::styled(format!("{prefix}{}", comment.name), name_style),
                Span::styled(
                    format!("  {}", format_timestamp(comment.timestamp)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            let body = Line::from(Span::styled(
                format!("    {}", comment.comment),
                Style::default().fg(c.fg),
            ));

            ListItem::new(vec![header, body, Line::from("")])
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.comments.selected));
    frame.render_stateful_widget(List::new(items), layout[1], &mut state);
}

/// 毫秒时间戳转为可读时间，无效值原样显示
fn format_timestamp(millis: i64) -> String {
    match DateTime::from_timestamp_millis(millis) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => format!("t={millis}"),
    }
}

/// 未登录时的提示
fn render_sign_in_hint(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Sign in to read and write comments.",
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let login_url = app.session.login_url();
    if login_url.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Checking session status...",
            Style::default().fg(c.muted),
        )));
    } else {
        lines.push(Line::from(vec![
            Span::styled("  Open this link to sign in: ", Style::default().fg(Color::Gray)),
            Span::styled(login_url.to_string(), Style::default().fg(c.accent)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Restart the client after signing in to pick up the new session.",
        Style::default().fg(Color::Gray),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
