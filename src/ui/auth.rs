//! Authentication (login/register) UI screens.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::form::{Field, LoginField};
use crate::state::InputMode;

fn focused_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn masked(value: &str, visible: bool) -> String {
    if visible {
        value.to_string()
    } else {
        "*".repeat(value.chars().count())
    }
}

fn draw_input(f: &mut Frame, area: Rect, title: &str, text: &str, focused: bool) {
    f.render_widget(
        Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title(title.to_string()))
            .style(focused_style(focused)),
        area,
    );
    if focused {
        f.set_cursor_position((area.x + text.chars().count() as u16 + 1, area.y + 1));
    }
}

fn draw_error_line(f: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        f.render_widget(
            Paragraph::new(message).style(Style::default().fg(Color::Red)),
            area,
        );
    }
}

fn draw_banner_line(f: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        f.render_widget(
            Paragraph::new(message)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Red)),
            area,
        );
    }
}

fn draw_buttons(f: &mut Frame, area: Rect, app: &App, submit_label: &str, switch_label: &str) {
    let button_area = Layout::default()
        .margin(1)
        .constraints([Constraint::Length(3)])
        .split(area)[0];
    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(button_area);

    let submit_style = if app.auth.input_mode == Some(InputMode::AuthSubmit) {
        Style::default().bg(Color::Cyan).fg(Color::Black)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new(Span::styled(submit_label.to_string(), submit_style))
            .alignment(Alignment::Center),
        button_chunks[0],
    );

    let switch_style = if app.auth.input_mode == Some(InputMode::AuthSwitch) {
        Style::default().bg(Color::Magenta).fg(Color::Black)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new(Span::styled(switch_label.to_string(), switch_style))
            .alignment(Alignment::Center),
        button_chunks[1],
    );
}

pub fn draw_login(f: &mut Frame, app: &mut App, area: Rect) {
    let outer_block = Block::default().title("Sign In").borders(Borders::ALL);
    f.render_widget(outer_block, area);
    let chunks = Layout::default()
        .margin(2)
        .constraints([
            Constraint::Length(3), // username
            Constraint::Length(3), // password
            Constraint::Length(1), // banner
            Constraint::Min(1),    // buttons
        ])
        .split(area);

    draw_input(
        f,
        chunks[0],
        "Username",
        app.login.value(LoginField::Username),
        app.auth.input_mode == Some(InputMode::LoginUsername),
    );
    draw_input(
        f,
        chunks[1],
        "Password",
        &masked(app.login.value(LoginField::Password), app.auth.show_password),
        app.auth.input_mode == Some(InputMode::LoginPassword),
    );
    draw_banner_line(f, chunks[2], app.login.banner_message());
    draw_buttons(f, chunks[3], app, "[ SIGN IN ]", "[ Create an account ]");
}

const REGISTER_FIELDS: [(Field, InputMode, &str); 5] = [
    (Field::FirstName, InputMode::RegisterFirstName, "First Name"),
    (Field::LastName, InputMode::RegisterLastName, "Last Name"),
    (Field::Email, InputMode::RegisterEmail, "Email Address"),
    (Field::Password, InputMode::RegisterPassword, "Password"),
    (
        Field::ConfirmPassword,
        InputMode::RegisterConfirmPassword,
        "Confirm Password",
    ),
];

pub fn draw_register(f: &mut Frame, app: &mut App, area: Rect) {
    let outer_block = Block::default().title("Sign Up").borders(Borders::ALL);
    f.render_widget(outer_block, area);
    let chunks = Layout::default()
        .margin(2)
        .constraints([
            Constraint::Length(3), // first name
            Constraint::Length(1), //   error
            Constraint::Length(3), // last name
            Constraint::Length(1), //   error
            Constraint::Length(3), // email
            Constraint::Length(1), //   error
            Constraint::Length(3), // password
            Constraint::Length(1), //   error
            Constraint::Length(3), // confirm password
            Constraint::Length(1), //   error
            Constraint::Length(1), // banner
            Constraint::Min(1),    // buttons
        ])
        .split(area);

    for (i, (field, mode, title)) in REGISTER_FIELDS.iter().enumerate() {
        let visible = match field {
            Field::Password => app.auth.show_password,
            Field::ConfirmPassword => app.auth.show_confirm_password,
            _ => true,
        };
        draw_input(
            f,
            chunks[i * 2],
            title,
            &masked(app.register.value(*field), visible),
            app.auth.input_mode == Some(*mode),
        );
        draw_error_line(f, chunks[i * 2 + 1], app.register.error(*field));
    }

    draw_banner_line(f, chunks[10], app.register.banner_message());
    draw_buttons(f, chunks[11], app, "[ SIGN UP ]", "[ Sign In instead ]");
}
