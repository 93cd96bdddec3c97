use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::App;
use super::dashboard;
use super::theme;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(5),    // Dashboard
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], app);
    dashboard::render(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_title_bar(f: &mut Frame, area: Rect, app: &App) {
    let bar = Paragraph::new(Line::from(vec![
        Span::styled(" SpendView ", theme::header_style()),
        Span::styled(
            format!(" {} ", app.month.label()),
            Style::default()
                .fg(theme::ACCENT)
                .bg(theme::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("({})", app.month),
            Style::default().fg(theme::TEXT_DIM).bg(theme::HEADER_BG),
        ),
    ]))
    .style(Style::default().bg(theme::HEADER_BG));
    f.render_widget(bar, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let info = if app.status_message.is_empty() {
        format!(
            " {} | {} txns this month ",
            app.source_label,
            app.month_txn_count()
        )
    } else {
        format!(" {} ", app.status_message)
    };
    let right = " H/L month | t today | ? help | q quit ";

    let available = area.width as usize;
    let used = info.chars().count() + right.len();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let help_text = vec![
        Line::from(Span::styled(
            " SpendView Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Navigation",
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  H or Left        Previous month",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  L or Right       Next month",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  t                Jump to the current month",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " General",
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  ?                Show this help",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  Esc              Clear the status line",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  q or Ctrl-c      Quit",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Press any key to close ",
            Style::default().fg(theme::TEXT_DIM),
        )),
    ];

    // Center the popup, clamped to terminal size
    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 48.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}
