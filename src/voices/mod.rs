//! Factory presets for common kick styles.
//!
//! Each preset is a fully populated [`Parameters`] record approximating a
//! classic drum machine. Use them as starting points for the pad grid or the
//! optimizer, or study them to learn how the knobs shape a kick.
//!
//! # Example
//!
//! ```ignore
//! use kick_dsp::voices::Preset;
//!
//! let boom = Preset::Tr808.build(48_000, 1.0, 16)?;
//! let punch: Preset = "909".parse()?;
//! ```

mod presets;

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::KickResult;
use crate::params::Parameters;

pub use presets::{
    deep_house, default_kick, experimental, linn_drum, tr606, tr707, tr808, tr909,
};

/// Named preset selector.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preset {
    #[default]
    Default,
    Tr808,
    Tr909,
    Tr707,
    Tr606,
    LinnDrum,
    DeepHouse,
    Experimental,
}

impl Preset {
    pub const ALL: [Preset; 8] = [
        Preset::Default,
        Preset::Tr808,
        Preset::Tr909,
        Preset::Tr707,
        Preset::Tr606,
        Preset::LinnDrum,
        Preset::DeepHouse,
        Preset::Experimental,
    ];

    /// Build the preset's parameter record for the given render format.
    pub fn build(self, sample_rate: u32, duration: f64, bit_depth: u16) -> KickResult<Parameters> {
        let factory = match self {
            Preset::Default => default_kick,
            Preset::Tr808 => tr808,
            Preset::Tr909 => tr909,
            Preset::Tr707 => tr707,
            Preset::Tr606 => tr606,
            Preset::LinnDrum => linn_drum,
            Preset::DeepHouse => deep_house,
            Preset::Experimental => experimental,
        };
        factory(sample_rate, duration, bit_depth)
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Default => "Default",
            Preset::Tr808 => "Roland TR-808",
            Preset::Tr909 => "Roland TR-909",
            Preset::Tr707 => "Roland TR-707",
            Preset::Tr606 => "Roland TR-606",
            Preset::LinnDrum => "LinnDrum",
            Preset::DeepHouse => "Deep House",
            Preset::Experimental => "Experimental",
        }
    }

    /// Selector accepted by [`FromStr`].
    pub fn selector(self) -> &'static str {
        match self {
            Preset::Default => "default",
            Preset::Tr808 => "808",
            Preset::Tr909 => "909",
            Preset::Tr707 => "707",
            Preset::Tr606 => "606",
            Preset::LinnDrum => "linn",
            Preset::DeepHouse => "deephouse",
            Preset::Experimental => "experimental",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Preset::Default => "Plain sine kick sweeping 150 Hz down to 40 Hz",
            Preset::Tr808 => "Deep, long boom with a slow decay and soft drive",
            Preset::Tr909 => "Short triangle punch with a bright top",
            Preset::Tr707 => "Tight triangle thud from the early digital machines",
            Preset::Tr606 => "Small, dry sine kick with a quick release",
            Preset::LinnDrum => "Rounded sampled-style kick with a medium tail",
            Preset::DeepHouse => "Sub-heavy sine with a long tail and warm drive",
            Preset::Experimental => "Driven sawtooth dive from 80 Hz to 20 Hz",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Preset::ALL
            .into_iter()
            .find(|p| p.selector() == wanted)
            .ok_or_else(|| {
                let choices: Vec<_> = Preset::ALL.iter().map(|p| p.selector()).collect();
                format!("invalid preset '{s}', choose from: {}", choices.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::WaveformType;

    #[test]
    fn tr808_table() {
        let p = Preset::Tr808.build(48_000, 1.0, 16).unwrap();
        assert_eq!((p.start_freq, p.end_freq), (55.0, 30.0));
        assert_eq!(p.waveform_type, WaveformType::Sine);
        assert_eq!((p.attack, p.decay, p.sustain, p.release), (0.01, 0.8, 0.2, 0.6));
        assert_eq!((p.drive, p.filter_cutoff), (0.2, 4000.0));
        assert_eq!((p.sweep, p.pitch_decay, p.fade_duration), (0.9, 0.5, 0.02));
        assert!(p.smooth_frequency_transitions);
        assert_eq!(p.sample_rate, 48_000);
    }

    #[test]
    fn experimental_keeps_base_sustain() {
        let p = Preset::Experimental.build(44_100, 0.5, 24).unwrap();
        assert_eq!(p.sustain, 0.2);
        assert_eq!(p.waveform_type, WaveformType::Sawtooth);
        assert_eq!(p.sweep, 1.2);
    }

    #[test]
    fn every_preset_is_renderable() {
        for preset in Preset::ALL {
            let p = preset.build(48_000, 1.0, 16).unwrap();
            assert!(p.validate().is_ok(), "{preset} failed validation");
            assert!(p.smooth_frequency_transitions, "{preset} is not smooth");
            assert_eq!(p.oscillator_levels, vec![1.0]);
        }
    }

    #[test]
    fn bad_format_is_rejected() {
        assert!(Preset::Tr909.build(0, 1.0, 16).is_err());
        assert!(Preset::Tr909.build(48_000, 0.0, 16).is_err());
    }

    #[test]
    fn selectors_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(preset.selector().parse::<Preset>(), Ok(preset));
        }
        assert_eq!(" Linn ".parse::<Preset>(), Ok(Preset::LinnDrum));
        let err = "303".parse::<Preset>().unwrap_err();
        assert!(err.contains("808"));
    }
}
