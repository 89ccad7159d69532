//! Colour tag for a parameter record.
//!
//! The nine shape fields are printed in a fixed order (waveform index, then
//! eight knobs with six fractional digits, no separators) and hashed with
//! SHA-1. The first three digest bytes are the colour. Formatting goes
//! through `format!`, which never consults a locale, so the same record
//! gets the same colour everywhere. This is a UI tag only.

use sha1::{Digest, Sha1};

use crate::params::Parameters;

/// 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// `#rrggbb`.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Canonical text that is hashed.
pub fn fingerprint_text(params: &Parameters) -> String {
    format!(
        "{}{:.6}{:.6}{:.6}{:.6}{:.6}{:.6}{:.6}{:.6}",
        params.waveform_type.index(),
        params.attack,
        params.decay,
        params.sustain,
        params.release,
        params.drive,
        params.filter_cutoff,
        params.sweep,
        params.pitch_decay,
    )
}

/// Deterministic colour for `params`.
pub fn color(params: &Parameters) -> Rgb {
    let digest = Sha1::digest(fingerprint_text(params).as_bytes());
    Rgb {
        r: digest[0],
        g: digest[1],
        b: digest[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::NoiseType;

    #[test]
    fn canonical_text() {
        let p = Parameters::default();
        assert_eq!(
            fingerprint_text(&p),
            "00.0030000.3000000.1000000.1500000.1000005000.0000000.8000000.200000"
        );
    }

    #[test]
    fn digest_prefix_is_the_colour() {
        let p = Parameters::default();
        let digest = Sha1::digest(fingerprint_text(&p).as_bytes());
        let c = color(&p);
        assert_eq!([c.r, c.g, c.b], [digest[0], digest[1], digest[2]]);
        assert_eq!(c.hex().len(), 7);
    }

    #[test]
    fn only_the_nine_fields_matter() {
        let a = Parameters::default();
        let mut b = a.clone();
        b.start_freq = 99.0;
        b.noise_type = NoiseType::Brown;
        b.fade_duration = 0.5;
        b.sample_rate = 44_100;
        assert_eq!(color(&a), color(&b));

        let mut c = a.clone();
        c.decay += 0.001;
        assert_ne!(fingerprint_text(&a), fingerprint_text(&c));
    }
}
