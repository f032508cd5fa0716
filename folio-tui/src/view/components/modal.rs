//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::state::{DeleteTarget, Modal};
use crate::model::App;
use crate::view::theme::colors;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Nickname { input } => render_nickname(frame, input),
        Modal::AddComment { name, body, focus } => render_add_comment(frame, name, body, *focus),
        Modal::ConfirmDelete { target, focus } => render_confirm_delete(frame, target, *focus),
        Modal::Help => render_help(frame),
        Modal::Error { title, message } => render_error(frame, title, message),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗内容区域（边框内再缩进一列）
fn inner_rect(area: Rect) -> Rect {
    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

/// 底部操作提示行
fn hint_line(pairs: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (i, (key, desc)) in pairs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            format!(" {desc}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// 带光标的输入行
fn input_line(value: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };
    let display = if focused {
        format!("  {value}▎")
    } else {
        format!("  {value}")
    };
    Line::styled(display, style)
}

/// 渲染昵称输入弹窗
fn render_nickname(frame: &mut Frame, input: &str) {
    // 输入变长时弹窗跟着加宽
    let width = 44.max(UnicodeWidthStr::width(input) as u16 + 8);
    let area = centered_rect(width, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Choose a Nickname ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            "Shown next to your comments",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        input_line(input, true),
        Line::from(""),
        hint_line(&[("Enter", "Save"), ("Esc", "Cancel")]),
    ];

    frame.render_widget(Paragraph::new(lines), inner_rect(area));
}

/// 渲染发表评论弹窗
fn render_add_comment(frame: &mut Frame, name: &str, body: &str, focus: usize) {
    let area = centered_rect(54, 12, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" New Comment ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled("Name", Style::default().fg(Color::Gray))),
        input_line(name, focus == 0),
        Line::from(""),
        Line::from(Span::styled("Comment", Style::default().fg(Color::Gray))),
        input_line(body, focus == 1),
        Line::from(""),
        hint_line(&[("Tab", "Next"), ("Enter", "Post"), ("Esc", "Cancel")]),
    ];

    frame.render_widget(Paragraph::new(lines), inner_rect(area));
}

/// 渲染确认删除弹窗
fn render_confirm_delete(frame: &mut Frame, target: &DeleteTarget, focus: usize) {
    let area = centered_rect(46, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm Deletion ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors().error))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    let question = match target {
        DeleteTarget::One { author, .. } => format!("Delete the comment by {author}?"),
        DeleteTarget::All => "Delete ALL comments? This cannot be undone.".to_string(),
    };

    let cancel_style = if focus == 0 {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let confirm_style = if focus == 1 {
        Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Red)
    };

    let lines = vec![
        Line::from(Span::styled(question, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::raw("      "),
            Span::styled("[ Cancel ]", cancel_style),
            Span::raw("    "),
            Span::styled("[ Delete ]", confirm_style),
        ]),
        Line::from(""),
        hint_line(&[("←→", "Switch"), ("Enter", "Confirm"), ("Esc", "Cancel")]),
    ];

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        inner_rect(area),
    );
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let area = centered_rect(50, 16, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    let entries: [(&str, &str); 11] = [
        ("Tab", "Switch between menu and content"),
        ("↑↓ / jk", "Move selection"),
        ("Enter", "Open page / confirm"),
        ("Alt+a", "Write a comment"),
        ("Alt+d", "Delete selected comment"),
        ("Alt+x", "Delete all comments"),
        ("Alt+r", "Refresh comments"),
        ("s / l", "Sort order / language filter"),
        ("+ / -", "Fetch more / fewer comments"),
        ("f", "Show a fun fact (Home)"),
        ("Alt+q", "Quit"),
    ];

    let mut lines = Vec::new();
    for (key, desc) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<9}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(Color::White)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(hint_line(&[("Esc", "Close")]));

    frame.render_widget(Paragraph::new(lines), inner_rect(area));
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(50, 10, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors().error))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    let mut lines = vec![Line::from("")];
    for part in message.lines() {
        lines.push(Line::from(Span::styled(
            part.to_string(),
            Style::default().fg(Color::White),
        )));
    }
    lines.push(Line::from(""));
    lines.push(hint_line(&[("Esc", "Close")]));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        inner_rect(area),
    );
}
