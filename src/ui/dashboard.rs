use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_percent, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary cards
            Constraint::Min(10),   // Chart + table
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);

    if app.summary.is_empty() {
        render_empty_state(f, chunks[1]);
        return;
    }

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_category_chart(f, halves[0], app);
    render_category_table(f, halves[1], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    render_card(
        f,
        cards[0],
        "Total Spending",
        format_amount(app.summary.total),
        theme::YELLOW,
        Some(app.month.label()),
    );
    render_card(
        f,
        cards[1],
        "Transactions",
        app.month_txn_count().to_string(),
        theme::ACCENT,
        None,
    );

    let (top_name, top_detail) = match app.summary.top_category() {
        Some(top) => (
            truncate(&top.category, 18),
            Some(format!(
                "{} ({})",
                format_amount(top.amount),
                format_percent(top.percentage)
            )),
        ),
        None => ("—".into(), None),
    };
    render_card(
        f,
        cards[2],
        "Top Category",
        top_name,
        theme::category_color(0),
        top_detail,
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    color: ratatui::style::Color,
    subtitle: Option<String>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()));

    let sub_text = subtitle.unwrap_or_default();

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(sub_text, theme::dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_category_chart(f: &mut Frame, area: Rect, app: &App) {
    let bars: Vec<Bar> = app
        .summary
        .summaries
        .iter()
        .take(12)
        .enumerate()
        .map(|(i, summary)| {
            let val = summary.amount.abs().to_u64().unwrap_or(0);
            let label = truncate(&summary.category, 10);
            Bar::default()
                .value(val)
                .label(Line::from(label))
                .style(Style::default().fg(theme::category_color(i)))
                .value_style(
                    Style::default()
                        .fg(theme::TEXT)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::OVERLAY))
                .title(Span::styled(" Spending by Category ", theme::title_style())),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1)
        .value_style(Style::default().fg(theme::TEXT));

    f.render_widget(chart, area);
}

fn render_category_table(f: &mut Frame, area: Rect, app: &App) {
    let header_cells = ["Category", "Amount", "%"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .summary
        .summaries
        .iter()
        .enumerate()
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, summary)| {
            let name_cell = Cell::from(Line::from(vec![
                Span::styled("● ", Style::default().fg(theme::category_color(i))),
                Span::styled(summary.category.clone(), theme::normal_style()),
            ]));
            let amount_cell = Cell::from(
                Line::from(Span::styled(
                    format_amount(summary.amount),
                    theme::normal_style(),
                ))
                .right_aligned(),
            );
            let percent_cell = Cell::from(
                Line::from(Span::styled(
                    format_percent(summary.percentage),
                    theme::dim_style(),
                ))
                .right_aligned(),
            );
            Row::new(vec![name_cell, amount_cell, percent_cell])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(14),
            Constraint::Length(14),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" Breakdown ", theme::title_style())),
    );

    f.render_widget(table, area);
}

fn render_empty_state(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(" Spending by Category ", theme::title_style()));
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No transactions found for this month.",
            theme::dim_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "H/L to change month, t for the current month",
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(block);
    f.render_widget(msg, area);
}
