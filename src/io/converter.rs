/// Full scale of a rendered buffer. Every render leaves the saturator inside
/// ±2^15, whatever its bit depth.
pub const RENDER_FULL_SCALE: f32 = 32_768.0;

/// Convert a rendered buffer to floats in [-1, 1] for playback and display.
pub fn pcm_to_f32(samples: &[i32]) -> Vec<f32> {
    samples
        .iter()
        .map(|&s| (s as f32 / RENDER_FULL_SCALE).clamp(-1.0, 1.0))
        .collect()
}

/// Root mean square of an integer buffer.
pub fn rms(samples: &[i32]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f64 = samples.iter().map(|&s| (s as f64) * (s as f64)).sum();
    (sum / samples.len() as f64).sqrt()
}

/// Largest absolute sample value.
pub fn peak(samples: &[i32]) -> i32 {
    samples.iter().map(|s| s.saturating_abs()).max().unwrap_or(0)
}

/// Reduce `samples` to `width` columns, keeping the largest magnitude (with
/// its sign) in each column so transients survive.
pub fn downsample_peaks(samples: &[f32], width: usize) -> Vec<f32> {
    if width == 0 || samples.is_empty() {
        return Vec::new();
    }
    let chunk = samples.len().div_ceil(width);
    samples
        .chunks(chunk)
        .map(|c| c.iter().copied().fold(0.0f32, |acc, s| if s.abs() > acc.abs() { s } else { acc }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_is_normalised() {
        let f = pcm_to_f32(&[0, 16_384, -32_768, 40_000]);
        assert_eq!(f, vec![0.0, 0.5, -1.0, 1.0]);
    }

    #[test]
    fn stats() {
        assert_eq!(rms(&[]), 0.0);
        assert!((rms(&[3, -4, 3, -4]) - 3.535_533_905).abs() < 1e-6);
        assert_eq!(peak(&[3, -7, 5]), 7);
        assert_eq!(peak(&[]), 0);
    }

    #[test]
    fn downsample_keeps_extremes() {
        let samples = [0.1, -0.9, 0.2, 0.3, 0.5, -0.4];
        assert_eq!(downsample_peaks(&samples, 3), vec![-0.9, 0.3, 0.5]);
        assert!(downsample_peaks(&samples, 0).is_empty());
    }
}
