//! Waveform view of the selected pad

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use kick_dsp::io::converter::downsample_peaks;

/// Render the whole kick, squeezed to the chart width
pub fn render_waveform(frame: &mut Frame, area: Rect, samples: &[f32], color: Color) {
    let block = Block::default()
        .title(" Waveform ")
        .borders(Borders::ALL);

    // Braille packs two columns per cell
    let columns = downsample_peaks(samples, area.width.max(1) as usize * 2);
    let data: Vec<(f64, f64)> = columns
        .iter()
        .enumerate()
        .map(|(i, &sample)| (i as f64 / columns.len() as f64, sample as f64))
        .collect();

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, 1.0])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-1.0, 1.0])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
