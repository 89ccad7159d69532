//! 4x4 pad grid, each pad tinted with its fingerprint colour

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use kick_dsp::{color, Parameters};

use crate::app::GRID;

pub fn pad_color(params: &Parameters) -> Color {
    let rgb = color(params);
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Black or white, whichever reads better on `bg`
fn label_color(params: &Parameters) -> Color {
    let rgb = color(params);
    let luma = 0.299 * rgb.r as f32 + 0.587 * rgb.g as f32 + 0.114 * rgb.b as f32;
    if luma > 140.0 {
        Color::Black
    } else {
        Color::White
    }
}

pub fn render_pads(frame: &mut Frame, area: Rect, pads: &[Parameters], selected: usize) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, GRID as u32); GRID])
        .split(area);

    for (r, row_area) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, GRID as u32); GRID])
            .split(*row_area);

        for (c, cell) in cells.iter().enumerate() {
            let index = r * GRID + c;
            let Some(params) = pads.get(index) else {
                continue;
            };

            let (border, border_style) = if index == selected {
                (
                    BorderType::Thick,
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )
            } else {
                (BorderType::Rounded, Style::default().fg(Color::DarkGray))
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(border)
                .border_style(border_style)
                .style(Style::default().bg(pad_color(params)));

            let label = Paragraph::new(vec![
                Line::from(format!("Pad {}", index + 1)),
                Line::from(params.waveform_type.abbreviation()),
            ])
            .alignment(Alignment::Center)
            .style(Style::default().fg(label_color(params)))
            .block(block);

            frame.render_widget(label, *cell);
        }
    }
}
