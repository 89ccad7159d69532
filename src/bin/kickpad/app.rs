//! Pad grid state and key handling.

use std::path::PathBuf;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::Duration;

use kick_dsp::io::converter::{pcm_to_f32, peak, rms, RENDER_FULL_SCALE};
use kick_dsp::rng::KickRng;
use kick_dsp::search::{Mutator, MUTATE_ALL, PAD_FAN_OUT};
use kick_dsp::synth::{render, save_to_dir};
use kick_dsp::Parameters;

use super::audio::Player;
use super::ui;

pub const GRID: usize = 4;
pub const PAD_COUNT: usize = GRID * GRID;

pub struct PadApp {
    /// Start frequencies, format and anything else the pads share.
    template: Parameters,
    pub pads: Vec<Parameters>,
    pub selected: usize,
    /// Selected pad rendered to [-1, 1] for the waveform view.
    pub preview: Vec<f32>,
    /// Peak and RMS of the preview relative to full scale.
    pub preview_level: (f64, f64),
    pub status: String,
    save_dir: PathBuf,
    rng: KickRng,
    player: Option<Player>,
    should_quit: bool,
}

impl PadApp {
    pub fn new(template: Parameters, save_dir: PathBuf, mut rng: KickRng, player: Option<Player>) -> Self {
        let pads = random_pads(&template, &mut rng);
        let status = match &player {
            Some(p) => format!("audio at {} Hz", p.sample_rate()),
            None => "no audio device, playback disabled".to_string(),
        };
        let mut app = Self {
            template,
            pads,
            selected: 0,
            preview: Vec::new(),
            preview_level: (0.0, 0.0),
            status,
            save_dir,
            rng,
            player,
            should_quit: false,
        };
        app.refresh_preview();
        app
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, self))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') => self.move_selection(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_selection(0, 1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1, 0),
            KeyCode::Enter | KeyCode::Char(' ') => self.play_selected(),
            KeyCode::Char('f') => self.fan_out(),
            KeyCode::Char('m') => self.mutate_all(),
            KeyCode::Char('r') => self.reseed(),
            KeyCode::Char('s') => self.save_selected(),
            _ => {}
        }
    }

    /// Move the cursor, wrapping at the grid edges.
    pub fn move_selection(&mut self, rows: isize, cols: isize) {
        let g = GRID as isize;
        let row = (self.selected as isize / g + rows).rem_euclid(g);
        let col = (self.selected as isize % g + cols).rem_euclid(g);
        self.selected = (row * g + col) as usize;
        self.refresh_preview();
    }

    pub fn selected_pad(&self) -> &Parameters {
        &self.pads[self.selected]
    }

    fn play_selected(&mut self) {
        let Some(player) = self.player.as_mut() else {
            self.status = "no audio device".to_string();
            return;
        };
        let mut params = self.pads[self.selected].clone();
        params.sample_rate = player.sample_rate();
        match render(&params, &mut self.rng) {
            Ok(samples) => {
                if !player.play(pcm_to_f32(&samples)) {
                    self.status = "playback queue full".to_string();
                }
            }
            Err(err) => self.status = format!("render failed: {err}"),
        }
    }

    /// Every pad becomes a variation of the selected one.
    pub fn fan_out(&mut self) {
        let base = self.pads[self.selected].clone();
        self.pads = Mutator::new(PAD_FAN_OUT).fan_out(&base, PAD_COUNT, &mut self.rng);
        self.status = format!("fanned out from pad {}", self.selected + 1);
        self.refresh_preview();
    }

    pub fn mutate_all(&mut self) {
        Mutator::new(MUTATE_ALL).mutate_all(&mut self.pads, &mut self.rng);
        self.status = "mutated all pads".to_string();
        self.refresh_preview();
    }

    pub fn reseed(&mut self) {
        self.pads = random_pads(&self.template, &mut self.rng);
        self.status = "new random pads".to_string();
        self.refresh_preview();
    }

    fn save_selected(&mut self) {
        let params = self.pads[self.selected].clone();
        self.status = match save_to_dir(&params, &mut self.rng, &self.save_dir) {
            Ok(path) => format!("saved {}", path.display()),
            Err(err) => format!("save failed: {err}"),
        };
    }

    fn refresh_preview(&mut self) {
        let params = self.pads[self.selected].clone();
        let samples = match render(&params, &mut self.rng) {
            Ok(samples) => samples,
            Err(err) => {
                self.status = format!("render failed: {err}");
                Vec::new()
            }
        };
        let full_scale = RENDER_FULL_SCALE as f64;
        self.preview_level = (peak(&samples) as f64 / full_scale, rms(&samples) / full_scale);
        self.preview = pcm_to_f32(&samples);
    }
}

fn random_pads(template: &Parameters, rng: &mut KickRng) -> Vec<Parameters> {
    (0..PAD_COUNT)
        .map(|_| Parameters::random(template, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kick_dsp::rng::create_rng;

    fn app() -> PadApp {
        let mut template = Parameters::default();
        template.sample_rate = 8_000;
        template.duration = 0.05;
        PadApp::new(template, std::env::temp_dir(), create_rng(4), None)
    }

    #[test]
    fn grid_is_full() {
        let app = app();
        assert_eq!(app.pads.len(), PAD_COUNT);
        assert_eq!(app.preview.len(), 400);
    }

    #[test]
    fn selection_wraps() {
        let mut app = app();
        app.move_selection(0, -1);
        assert_eq!(app.selected, 3);
        app.move_selection(-1, 0);
        assert_eq!(app.selected, 15);
        app.move_selection(1, 1);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn fan_out_keeps_template_format() {
        let mut app = app();
        app.selected = 5;
        app.fan_out();
        assert_eq!(app.pads.len(), PAD_COUNT);
        assert!(app.pads.iter().all(|p| p.sample_rate == 8_000));
    }
}
