use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use vestibule_core::{BannerKind, Field};

use super::{App, Focus, FOOD_CHOICES};

/// Render the registration form view.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Outcome banner
            Constraint::Length(3), // Username input
            Constraint::Length(1), // Username error
            Constraint::Length(3), // Favorite language
            Constraint::Length(1), // Favorite language error
            Constraint::Length(3), // Favorite food
            Constraint::Length(1), // Favorite food error
            Constraint::Length(1), // Agreement checkbox
            Constraint::Length(1), // Agreement error
            Constraint::Length(3), // Submit button
            Constraint::Min(0),    // Spacer
            Constraint::Length(3), // Help bar
        ])
        .split(area);

    render_title(frame, chunks[0]);
    render_banner(frame, app, chunks[1]);
    render_username(frame, app, chunks[2]);
    render_error(frame, app, Field::Username, chunks[3]);
    render_language(frame, app, chunks[4]);
    render_error(frame, app, Field::FavLanguage, chunks[5]);
    render_food(frame, app, chunks[6]);
    render_error(frame, app, Field::FavFood, chunks[7]);
    render_agreement(frame, app, chunks[8]);
    render_error(frame, app, Field::Agreement, chunks[9]);
    render_submit(frame, app, chunks[10]);
    render_help(frame, chunks[12]);
}

/// Border style for a field block, highlighted while focused.
fn border_style(app: &App, focus: Focus) -> Style {
    if app.focus == focus {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("Create an Account")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_banner(frame: &mut Frame, app: &App, area: Rect) {
    let Some(banner) = app.controller.banner() else {
        return;
    };
    let style = match banner.kind {
        BannerKind::Success => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        BannerKind::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    let paragraph = Paragraph::new(banner.message.clone())
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_username(frame: &mut Frame, app: &App, area: Rect) {
    let value = &app.controller.form().username;
    let content = if value.is_empty() {
        Line::from(Span::styled(
            "Type Username",
            Style::default().fg(Color::DarkGray),
        ))
    } else if app.focus == Focus::Username {
        Line::from(vec![
            Span::raw(value.clone()),
            Span::styled("█", Style::default().fg(Color::Cyan)),
        ])
    } else {
        Line::from(value.clone())
    };
    let input = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(app, Focus::Username))
            .title("Username"),
    );
    frame.render_widget(input, area);
}

fn render_language(frame: &mut Frame, app: &App, area: Rect) {
    let current = &app.controller.form().fav_language;
    let radio = |value: &str, label: &str| {
        if current == value {
            format!("(•) {label}")
        } else {
            format!("( ) {label}")
        }
    };
    let line = format!(
        "{}    {}",
        radio("javascript", "JavaScript"),
        radio("rust", "Rust")
    );
    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(app, Focus::Language))
            .title("Favorite Language"),
    );
    frame.render_widget(paragraph, area);
}

fn render_food(frame: &mut Frame, app: &App, area: Rect) {
    let current = &app.controller.form().fav_food;
    let content = if current.is_empty() {
        Line::from(Span::styled(
            "-- Select Favorite Food --",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(current.clone())
    };
    let position = FOOD_CHOICES
        .iter()
        .position(|choice| choice == current)
        .unwrap_or(0);
    let title = format!("Favorite Food [{}/{}]", position, FOOD_CHOICES.len() - 1);
    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(app, Focus::Food))
            .title(title),
    );
    frame.render_widget(paragraph, area);
}

fn render_agreement(frame: &mut Frame, app: &App, area: Rect) {
    let checked = app.controller.form().agreement;
    let marker = if checked { "[x]" } else { "[ ]" };
    let style = if app.focus == Focus::Agreement {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let paragraph = Paragraph::new(format!(" {marker} Agree to our terms")).style(style);
    frame.render_widget(paragraph, area);
}

fn render_error(frame: &mut Frame, app: &App, field: Field, area: Rect) {
    let message = app.controller.error(field);
    if message.is_empty() {
        return;
    }
    let paragraph =
        Paragraph::new(format!("   {message}")).style(Style::default().fg(Color::Red));
    frame.render_widget(paragraph, area);
}

fn render_submit(frame: &mut Frame, app: &App, area: Rect) {
    let (label, style) = if app.controller.submit_in_flight() {
        ("Submitting...", Style::default().fg(Color::Yellow))
    } else if app.controller.submit_enabled() {
        (
            "Submit",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("Submit", Style::default().fg(Color::DarkGray))
    };
    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(app, Focus::Submit)),
        );
    frame.render_widget(button, area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "  Tab/\u{2193} Next  Shift-Tab/\u{2191} Prev  \u{2190}/\u{2192}/Space Select  Enter Submit  Esc Quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
