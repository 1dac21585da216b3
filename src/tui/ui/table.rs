use crate::cards::Card;
use crate::tui::app::{AppState, Phase};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let header_height: u16 = 2 + 2;
    let status_height: u16 = 3 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // header
            Constraint::Length(7),             // hand
            Constraint::Min(3),                // result + tally
            Constraint::Length(status_height), // status bar
        ])
        .split(size);

    let header_lines = vec![
        Line::from(format!(
            "Session {}   Rounds: {}",
            &app.session().to_string()[..8],
            app.rounds_played()
        )),
        Line::from(format!("Draw pile: {} cards", app.cards_left())),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("draw-poker").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    draw_hand(f, chunks[1], app);
    draw_result(f, chunks[2], app);
    draw_status(f, chunks[3], app);

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    }
}

fn draw_hand(f: &mut Frame, area: Rect, app: &AppState) {
    let title = match app.phase {
        Phase::Idle => "Hand",
        Phase::Dealt => "Hand (mark discards with 1-5)",
        Phase::Scored => "Final hand",
    };
    f.render_widget(Block::default().title(title).borders(Borders::ALL), area);
    let hand_inner = inner(area);
    let card_width = hand_inner.width.saturating_sub(2) / 5;
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(card_width); 5])
        .split(hand_inner);
    let cards = app.cards();
    for i in 0..5 {
        let marked = app.phase == Phase::Dealt && app.marks()[i];
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(slots[i]);
        render_card_widget(
            f,
            rows[0],
            cards.map(|c| c[i]),
            if marked { Some(Color::Yellow) } else { None },
        );
        let caption = if marked { format!("{} DISCARD", i + 1) } else { format!("{}", i + 1) };
        let style = if marked {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        f.render_widget(
            Paragraph::new(Span::styled(caption, style)).alignment(Alignment::Center),
            rows[1],
        );
    }
}

fn draw_result(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default().title("Result").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    match (app.phase, app.last_score()) {
        (Phase::Scored, Some(score)) => {
            lines.push(Line::from(Span::styled(
                score.category.label(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )));
        }
        _ => lines.push(Line::from(Span::styled("--", Style::default().add_modifier(Modifier::DIM)))),
    }
    let tally = app.tally();
    if !tally.is_empty() {
        lines.push(Line::from(""));
        for (name, n) in tally {
            lines.push(Line::from(format!("{name:<16}{n:>5}")));
        }
    }
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner(area));

    let mut left_info = match app.phase {
        Phase::Idle => vec![Line::from("No hand yet — press Space to deal.")],
        Phase::Dealt => {
            let marked = app.marked_positions();
            let list = if marked.is_empty() {
                "none (keep all five)".to_string()
            } else {
                marked.iter().map(|i| (i + 1).to_string()).collect::<Vec<_>>().join(" ")
            };
            vec![Line::from(format!("Discarding: {list}")), Line::from("Enter / D to draw.")]
        }
        Phase::Scored => vec![Line::from("Round over — press Space for a new hand.")],
    };
    if let Some(err) = app.action_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    let right_keys = vec![Line::from(""), Line::from("? help • H history • Q quit")];
    f.render_widget(Paragraph::new(left_info).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let entries = app.history_recent_offset(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    if entries.is_empty() {
        lines.push(Line::from("No rounds yet."));
    } else {
        let total = app.rounds_played();
        for (n, score) in entries.into_iter().enumerate() {
            let round = total - app.history_offset() - n;
            lines.push(Line::from(format!("#{round:<4} {score}")));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Round:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Space: deal a new hand"),
        Line::from("- 1-5: mark / unmark a card to discard (at most 4)"),
        Line::from("- Enter or D: draw replacements and score"),
        Line::from(""),
        Line::from(Span::styled("Views:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- H: history"),
        Line::from("- ?: help"),
        Line::from("- Q or Esc: quit"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn card_style(c: Card) -> Style {
    if c.suit().is_red() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => Line::from(Span::styled(c.label(), card_style(c))),
        None => Line::from("[  ]"),
    };
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center), inner);
}
