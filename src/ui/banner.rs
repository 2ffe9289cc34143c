//! Figlet masthead drawn above every screen.

use figlet_rs::FIGfont;
use once_cell::sync::Lazy;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

static MASTHEAD: Lazy<String> = Lazy::new(|| {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("AUTHGATE").map(|figure| figure.to_string()))
        .unwrap_or_else(|| "AUTHGATE".to_string())
});

pub fn masthead_height() -> u16 {
    MASTHEAD.lines().count() as u16 + 1
}

pub fn draw_masthead(f: &mut Frame, area: Rect) {
    let banner = Paragraph::new(MASTHEAD.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Magenta))
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(banner, area);
}
