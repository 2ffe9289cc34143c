//! Main UI module. Re-exports submodules and provides the main entry point.

pub mod auth;
pub mod banner;
pub mod dashboard;

use ratatui::Frame;

use crate::app::App;
use crate::state::AppMode;
use crate::ui::auth::{draw_login, draw_register};
use crate::ui::banner::{draw_masthead, masthead_height};
use crate::ui::dashboard::draw_dashboard;

pub fn ui(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let chunks = ratatui::layout::Layout::default()
        .constraints([
            ratatui::layout::Constraint::Length(masthead_height()), // Masthead
            ratatui::layout::Constraint::Min(0),                    // Main content
            ratatui::layout::Constraint::Length(3),                 // Footer
        ])
        .split(size);

    draw_masthead(f, chunks[0]);

    let help_text = match app.ui.mode {
        AppMode::Login | AppMode::Register => {
            "[Tab]/[Shift+Tab] Change Focus | [Enter] Select/Submit\n[F3] Show/Hide Password | [Esc] Quit"
        }
        AppMode::Dashboard => "[Enter] Log Out | [q]/[Esc] Quit",
    };
    let status_text = if let Some(user) = &app.auth.current_user {
        format!("Logged in as: {}", user.display_name)
    } else {
        "Not Logged In".to_string()
    };

    let footer_chunks = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage(67),
            ratatui::layout::Constraint::Percentage(33),
        ])
        .split(chunks[2]);

    f.render_widget(
        ratatui::widgets::Paragraph::new(help_text)
            .wrap(ratatui::widgets::Wrap { trim: true })
            .block(ratatui::widgets::Block::default().borders(ratatui::widgets::Borders::TOP)),
        footer_chunks[0],
    );
    f.render_widget(
        ratatui::widgets::Paragraph::new(ratatui::text::Span::styled(
            status_text,
            ratatui::style::Style::default().fg(ratatui::style::Color::Yellow),
        ))
        .alignment(ratatui::layout::Alignment::Right)
        .block(ratatui::widgets::Block::default().borders(ratatui::widgets::Borders::TOP)),
        footer_chunks[1],
    );

    let main_area = chunks[1];
    match app.ui.mode {
        AppMode::Login => draw_login(f, app, main_area),
        AppMode::Register => draw_register(f, app, main_area),
        AppMode::Dashboard => draw_dashboard(f, app, main_area),
    }
}
