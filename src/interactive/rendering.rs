//! TUI rendering with ratatui
//!
//! Three feedback inputs across the top, the live candidate list below
//! them, the derived pool and position sets beside the list.

use super::app::{App, MessageStyle, Outcome};
use crate::output::formatters::{green_mask, letters_string};
use crate::parser::Field;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(9), // Inputs
            Constraint::Min(8),    // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_inputs(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Candidates
            Constraint::Percentage(40), // Search details
        ])
        .split(chunks[2]);

    render_candidates(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔎 WORDLE FILTER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn field_color(field: Field) -> Color {
    match field {
        Field::Green => Color::Green,
        Field::Yellow => Color::Yellow,
        Field::Gray => Color::Gray,
    }
}

fn render_inputs(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    let fields = [
        (Field::Green, " 🟩 Correct letters "),
        (Field::Yellow, " 🟨 Wrong positions (a1 b3) "),
        (Field::Gray, " ⬜ Still available "),
    ];

    for ((field, title), chunk) in fields.into_iter().zip(chunks.iter()) {
        let color = field_color(field);
        let focused = app.focus == field;
        let mut content = app.field(field).to_string();
        if focused {
            content.push('▏');
        }

        let border = if focused {
            BorderType::Double
        } else {
            BorderType::Rounded
        };
        let style = if focused {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let input = Paragraph::new(content).style(style).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(border)
                .style(Style::default().fg(color)),
        );
        f.render_widget(input, *chunk);
    }
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" Candidates ({}) ", app.get_candidates_count()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let items: Vec<ListItem> = match &app.outcome {
        Outcome::Empty => vec![ListItem::new("Start typing your feedback above")],
        Outcome::Invalid(err) => vec![ListItem::new(Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(Color::Red),
        )))],
        Outcome::Ready(result) if result.generation.candidates.is_empty() => {
            vec![ListItem::new("No words match this feedback")]
        }
        Outcome::Ready(result) => result
            .generation
            .candidates
            .iter()
            .enumerate()
            .skip(app.scroll)
            .map(|(i, word)| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>4}. ", i + 1),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        word.text().to_uppercase(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]))
            })
            .collect(),
    };

    f.render_widget(List::new(items).block(block), area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(9),    // Pool and position sets
            Constraint::Length(3), // Search gauge
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_search_details(f, app, chunks[0]);
    render_gauge(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_search_details(f: &mut Frame, app: &App, area: Rect) {
    let content = if let Outcome::Ready(result) = &app.outcome {
        let mut lines = vec![
            Line::from(vec![
                Span::raw("Pattern: "),
                Span::styled(
                    green_mask(&result.constraints.greens, app.placeholder()),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!(
                "Pool:    {}",
                letters_string(result.generation.pool.letters())
            )),
        ];
        lines.extend(
            result
                .generation
                .position_sets
                .iter()
                .map(|(position, set)| Line::from(format!("  {position}: {}", letters_string(set)))),
        );
        lines
    } else {
        vec![Line::from("No constraints yet")]
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Search ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_gauge(f: &mut Frame, app: &App, area: Rect) {
    let (examined, space) = match &app.outcome {
        Outcome::Ready(result) => (
            result.generation.stats.examined,
            result.generation.stats.search_space,
        ),
        Outcome::Empty | Outcome::Invalid(_) => (0, 0),
    };

    let ratio = if space == 0 {
        0.0
    } else {
        (examined as f64 / space as f64).clamp(0.0, 1.0)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Examined ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!("{examined} / {space}"));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|msg| {
            let (prefix, color) = match msg.style {
                MessageStyle::Info => ("ℹ ", Color::Cyan),
                MessageStyle::Warning => ("⚠ ", Color::Yellow),
            };
            ListItem::new(Line::from(vec![
                Span::styled(prefix, Style::default().fg(color)),
                Span::raw(&msg.text),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let focus = Paragraph::new(format!("Editing: {}", app.focus)).alignment(Alignment::Center);
    f.render_widget(focus, chunks[0]);

    let candidates = Paragraph::new(format!("Candidates: {}", app.get_candidates_count()))
        .alignment(Alignment::Center);
    f.render_widget(candidates, chunks[1]);

    let help = Paragraph::new("Esc: Quit | Tab: Next | ^U: Clear | ↑↓: Scroll")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
