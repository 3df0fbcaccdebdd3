use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::app::App;
use crate::scheduler::{Phase, format_mmss};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Timer card
            Constraint::Length(3), // Status/help bar
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);
    draw_timer(frame, app, chunks[1]);
    draw_footer(frame, app, chunks[2]);

    // Draw help overlay if active
    if app.show_help {
        draw_help_overlay(frame);
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let sessions = app.scheduler.completed_work_sessions();
    let summary = Span::styled(
        format!(
            " {} work session{} completed ({} phases) ",
            sessions,
            if sessions == 1 { "" } else { "s" },
            app.scheduler.session_count()
        ),
        Style::default().fg(Color::DarkGray),
    );

    let header = Paragraph::new(Line::from(summary))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" TOMO - Pomodoro Timer "),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(header, area);
}

fn draw_timer(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Spacer
            Constraint::Length(10), // Timer display
            Constraint::Min(0),     // Rest
        ])
        .split(area);

    let inner = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(chunks[1]);

    // The surface displays the render frame text verbatim
    let frame_data = app.scheduler.render();

    let countdown_style = match app.scheduler.phase() {
        Phase::Work => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
        phase if phase.is_break() => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        _ => Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    };

    let button = format!("[ {} ]", frame_data.button_label);
    let button_style = if app.scheduler.is_running() {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(frame_data.countdown, countdown_style)).alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            frame_data.caption,
            Style::default().fg(Color::White),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(button, button_style)).alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            "Press [space] to start/stop",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
    ];

    let border_color = match app.scheduler.phase() {
        Phase::Work => Color::Red,
        phase if phase.is_break() => Color::Green,
        _ => Color::White,
    };

    let card = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", app.scheduler.phase().title()))
            .style(Style::default().fg(border_color)),
    );

    frame.render_widget(card, inner[1]);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.scheduler.is_running() {
        "[space] Stop  [?] Help  [q] Quit".to_string()
    } else if app.scheduler.phase() != Phase::Idle {
        format!(
            "Paused at {}  [space] Resume  [?] Help  [q] Quit",
            format_mmss(app.scheduler.remaining_seconds())
        )
    } else {
        "[space] Start  [?] Help  [q] Quit".to_string()
    };

    let footer = Paragraph::new(Line::from(Span::styled(
        help_text,
        Style::default().fg(Color::DarkGray),
    )))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

fn draw_help_overlay(frame: &mut Frame) {
    let area = centered_rect(50, 50, frame.area());

    let help_text = vec![
        Line::from(Span::styled(
            "TOMO - Help",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  space    - Start or stop the timer"),
        Line::from("  s/Enter  - Same as space"),
        Line::from("  ?        - Toggle this help"),
        Line::from("  q/Esc    - Quit"),
        Line::from(""),
        Line::from("  Work and break sessions alternate"),
        Line::from("  automatically when the countdown ends."),
        Line::from("  Stopping mid-session keeps the remaining"),
        Line::from("  time; starting again resumes it."),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, area);
    frame.render_widget(help, area);
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
