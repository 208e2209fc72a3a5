//! TUI rendering with ratatui
//!
//! Six slot columns between the Start and End letters, with the meeting
//! chain shown underneath once the two sides share a string.

use super::app::{App, MessageStyle};
use crate::core::{Side, Slot, SlotState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Slots
            Constraint::Length(4), // Result
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_slots(f, app, chunks[1]);
    render_result(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let letter = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "THE WIKI GAME",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   Start: "),
        Span::styled(app.session.start().to_string(), letter),
        Span::raw("   End: "),
        Span::styled(app.session.end().to_string(), letter),
        Span::raw("   Time: "),
        Span::raw(app.timer_label.as_str()),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_slots<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let sides = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (side, side_area) in [Side::Left, Side::Right].into_iter().zip(sides.iter()) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(*side_area);

        let slots = Slot::ALL.into_iter().filter(|slot| slot.side() == side);
        for (slot, column) in slots.zip(columns.iter()) {
            render_slot(f, app, slot, *column);
        }
    }
}

fn render_slot<S>(f: &mut Frame, app: &App<S>, slot: Slot, area: Rect) {
    let candidates = app.session.candidates(slot);
    let selected = app.session.selected(slot);
    let focused = app.focus == slot;

    let items: Vec<ListItem> = candidates
        .iter()
        .map(|item| {
            if selected.iter().any(|s| s == item) {
                ListItem::new(format!("* {item}")).style(
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(format!("  {item}"))
            }
        })
        .collect();

    let border = match (focused, app.session.slot_state(slot)) {
        (true, _) => Color::Yellow,
        (false, SlotState::Selected) => Color::Green,
        (false, SlotState::Populated) => Color::White,
        (false, SlotState::Empty) => Color::DarkGray,
    };
    let title = format!(" {slot} ({}) ", candidates.len());

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(if focused {
                    BorderType::Double
                } else {
                    BorderType::Rounded
                })
                .style(Style::default().fg(border)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if focused && !candidates.is_empty() {
        state.select(Some(app.cursor(slot)));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn render_result<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (content, color) = match app.session.match_result() {
        Some(result) => (result.render(), Color::Green),
        None => (
            "The chains have not met yet".to_string(),
            Color::DarkGray,
        ),
    };

    let paragraph = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(" Result ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(25),
            Constraint::Percentage(55),
        ])
        .split(area);

    let focus = Paragraph::new(format!("Slot: {}", app.focus)).alignment(Alignment::Center);
    f.render_widget(focus, chunks[0]);

    let stats = Paragraph::new(format!(
        "Challenges: {} | Met: {}",
        app.stats.challenges, app.stats.matches
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("←/→: Slot | ↑/↓: Move | Enter: Pick | Space: Add | n: New | q: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
