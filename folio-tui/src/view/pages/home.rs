//! 首页视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 渲染首页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    // 首页布局：欢迎区域 + 趣闻区域
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // 欢迎区域
            Constraint::Min(1),    // 趣闻区域
        ])
        .split(area);

    // 欢迎信息 + 打字机标语
    let welcome = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Welcome to my corner of the internet",
            Style::default()
                .fg(c.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", app.home.tagline()),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Browse my projects, drop a comment, or see where I've been.",
            Style::default().fg(Color::Gray),
        )),
    ];

    frame.render_widget(Paragraph::new(welcome), layout[0]);

    // 趣闻区域
    let fact_block = Block::default()
        .title(" Fun Fact ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let fact_text = match app.home.fact() {
        Some(fact) => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {fact}"),
                Style::default().fg(c.fg),
            )),
        ],
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Press f for a fun fact about me",
                Style::default().fg(c.muted),
            )),
        ],
    };

    frame.render_widget(
        Paragraph::new(fact_text)
            .block(fact_block)
            .wrap(Wrap { trim: false }),
        layout[1],
    );
}
