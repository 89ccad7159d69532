//! Factory tables for the classic machines.
//!
//! Every factory starts from [`Parameters::new`] and overwrites the same set
//! of fields, so a preset never inherits anything except the base
//! constructor's oscillator stack, bands, saturator and noise settings.

use crate::dsp::WaveformType;
use crate::error::KickResult;
use crate::params::Parameters;

/// The fields a preset pins down.
struct Shape {
    start_freq: f64,
    end_freq: f64,
    waveform: WaveformType,
    attack: f64,
    decay: f64,
    /// `None` keeps the base constructor's sustain.
    sustain: Option<f64>,
    release: f64,
    drive: f64,
    filter_cutoff: f64,
    sweep: f64,
    pitch_decay: f64,
    fade_duration: f64,
}

impl Shape {
    fn build(&self, sample_rate: u32, duration: f64, bit_depth: u16) -> KickResult<Parameters> {
        let mut p = Parameters::new(self.start_freq, self.end_freq, sample_rate, duration, bit_depth)?;
        p.waveform_type = self.waveform;
        p.attack = self.attack;
        p.decay = self.decay;
        if let Some(sustain) = self.sustain {
            p.sustain = sustain;
        }
        p.release = self.release;
        p.drive = self.drive;
        p.filter_cutoff = self.filter_cutoff;
        p.sweep = self.sweep;
        p.pitch_decay = self.pitch_decay;
        p.fade_duration = self.fade_duration;
        p.smooth_frequency_transitions = true;
        Ok(p)
    }
}

/// Long, deep boom: slow decay and a wide sweep.
pub fn tr808(sample_rate: u32, duration: f64, bit_depth: u16) -> KickResult<Parameters> {
    Shape {
        start_freq: 55.0,
        end_freq: 30.0,
        waveform: WaveformType::Sine,
        attack: 0.01,
        decay: 0.8,
        sustain: Some(0.2),
        release: 0.6,
        drive: 0.2,
        filter_cutoff: 4000.0,
        sweep: 0.9,
        pitch_decay: 0.5,
        fade_duration: 0.02,
    }
    .build(sample_rate, duration, bit_depth)
}

/// Short and punchy with a triangle edge.
pub fn tr909(sample_rate: u32, duration: f64, bit_depth: u16) -> KickResult<Parameters> {
    Shape {
        start_freq: 70.0,
        end_freq: 50.0,
        waveform: WaveformType::Triangle,
        attack: 0.002,
        decay: 0.2,
        sustain: Some(0.1),
        release: 0.3,
        drive: 0.4,
        filter_cutoff: 8000.0,
        sweep: 0.7,
        pitch_decay: 0.2,
        fade_duration: 0.015,
    }
    .build(sample_rate, duration, bit_depth)
}

pub fn tr707(sample_rate: u32, duration: f64, bit_depth: u16) -> KickResult<Parameters> {
    Shape {
        start_freq: 60.0,
        end_freq: 40.0,
        waveform: WaveformType::Triangle,
        attack: 0.005,
        decay: 0.3,
        sustain: Some(0.2),
        release: 0.2,
        drive: 0.3,
        filter_cutoff: 5000.0,
        sweep: 0.6,
        pitch_decay: 0.3,
        fade_duration: 0.01,
    }
    .build(sample_rate, duration, bit_depth)
}

pub fn tr606(sample_rate: u32, duration: f64, bit_depth: u16) -> KickResult<Parameters> {
    Shape {
        start_freq: 65.0,
        end_freq: 45.0,
        waveform: WaveformType::Sine,
        attack: 0.01,
        decay: 0.3,
        sustain: Some(0.1),
        release: 0.2,
        drive: 0.4,
        filter_cutoff: 5000.0,
        sweep: 0.7,
        pitch_decay: 0.5,
        fade_duration: 0.015,
    }
    .build(sample_rate, duration, bit_depth)
}

pub fn linn_drum(sample_rate: u32, duration: f64, bit_depth: u16) -> KickResult<Parameters> {
    Shape {
        start_freq: 60.0,
        end_freq: 40.0,
        waveform: WaveformType::Sine,
        attack: 0.01,
        decay: 0.5,
        sustain: Some(0.1),
        release: 0.3,
        drive: 0.4,
        filter_cutoff: 5000.0,
        sweep: 0.6,
        pitch_decay: 0.4,
        fade_duration: 0.02,
    }
    .build(sample_rate, duration, bit_depth)
}

/// Sub-heavy with a long tail and heavier drive.
pub fn deep_house(sample_rate: u32, duration: f64, bit_depth: u16) -> KickResult<Parameters> {
    Shape {
        start_freq: 45.0,
        end_freq: 25.0,
        waveform: WaveformType::Sine,
        attack: 0.005,
        decay: 0.9,
        sustain: Some(0.3),
        release: 0.7,
        drive: 0.6,
        filter_cutoff: 3500.0,
        sweep: 0.8,
        pitch_decay: 0.6,
        fade_duration: 0.03,
    }
    .build(sample_rate, duration, bit_depth)
}

/// Sawtooth dive from 80 Hz to 20 Hz, driven hard.
pub fn experimental(sample_rate: u32, duration: f64, bit_depth: u16) -> KickResult<Parameters> {
    Shape {
        start_freq: 80.0,
        end_freq: 20.0,
        waveform: WaveformType::Sawtooth,
        attack: 0.001,
        decay: 0.7,
        sustain: None,
        release: 0.4,
        drive: 0.8,
        filter_cutoff: 3000.0,
        sweep: 1.2,
        pitch_decay: 0.8,
        fade_duration: 0.01,
    }
    .build(sample_rate, duration, bit_depth)
}

/// The base record at 150 Hz falling to 40 Hz, with the smooth sweep on
/// like every other preset.
pub fn default_kick(sample_rate: u32, duration: f64, bit_depth: u16) -> KickResult<Parameters> {
    let mut p = Parameters::new(150.0, 40.0, sample_rate, duration, bit_depth)?;
    p.smooth_frequency_transitions = true;
    Ok(p)
}
