//! Post-authentication placeholder view.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub fn draw_dashboard(f: &mut Frame, app: &mut App, area: Rect) {
    let outer_block = Block::default().title("Dashboard").borders(Borders::ALL);
    f.render_widget(outer_block, area);
    let chunks = Layout::default()
        .margin(2)
        .constraints([
            Constraint::Length(2), // greeting
            Constraint::Length(3), // logout button
            Constraint::Min(1),
        ])
        .split(area);

    let name = app
        .auth
        .current_user
        .as_ref()
        .map(|u| u.display_name.as_str())
        .unwrap_or("stranger");
    f.render_widget(
        Paragraph::new(format!("Welcome, {}!", name))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        chunks[0],
    );

    f.render_widget(
        Paragraph::new(Span::styled(
            "[ LOG OUT ]",
            Style::default().bg(Color::Cyan).fg(Color::Black),
        ))
        .alignment(Alignment::Center),
        chunks[1],
    );
}
