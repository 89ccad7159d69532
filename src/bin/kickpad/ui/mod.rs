//! TUI module for kickpad
//!
//! Pad grid on the left, the selected pad's waveform and knobs on the right.

mod pads;
mod waveform;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use kick_dsp::color;

use crate::app::PadApp;
use pads::{pad_color, render_pads};
use waveform::render_waveform;

pub fn render(frame: &mut Frame, app: &PadApp) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(1)])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(columns[1]);

    let pad_block = Block::default().title(" Pads ").borders(Borders::ALL);
    let pad_area = pad_block.inner(columns[0]);
    frame.render_widget(pad_block, columns[0]);
    render_pads(frame, pad_area, &app.pads, app.selected);

    let selected = app.selected_pad();
    render_waveform(frame, right[0], &app.preview, pad_color(selected));

    let info_lines = vec![
        Line::from(format!("Pad {}  {}", app.selected + 1, color(selected).hex())),
        Line::from(selected.summary()),
        Line::from(format!(
            "Sweep {:.0} -> {:.0} Hz  Fade {:.3}s  Smooth {}",
            selected.start_freq,
            selected.end_freq,
            selected.fade_duration,
            selected.smooth_frequency_transitions
        )),
        Line::from(format!("Peak {:.3}  RMS {:.3}", app.preview_level.0, app.preview_level.1)),
        Line::from(""),
        Line::from(app.status.as_str()),
    ];
    let info = Paragraph::new(info_lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Info ").borders(Borders::ALL));
    frame.render_widget(info, right[1]);

    let help = Paragraph::new(
        " [Arrows/hjkl] Select  [Space] Play  [F] Fan out  [M] Mutate all  [R] Reseed  [S] Save  [Q] Quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, rows[1]);
}
