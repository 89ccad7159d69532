//! WAV encoding of rendered kicks and decoding of reference waveforms.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::error::{KickError, KickResult};

/// Mono integer PCM spec for a render.
pub fn wav_spec(sample_rate: u32, bit_depth: u16) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: bit_depth,
        sample_format: SampleFormat::Int,
    }
}

/// Write `samples` as a mono little-endian PCM WAV.
///
/// Always the canonical 44-byte layout (`fmt ` chunk of 16 bytes, format
/// tag 1) followed by the packed payload, 2 or 3 bytes per sample. Samples
/// must fit the bit depth; anything wider fails with `WriteFailed` before a
/// single byte reaches the sink.
pub fn write_wav<W: Write>(
    mut writer: W,
    samples: &[i32],
    sample_rate: u32,
    bit_depth: u16,
) -> KickResult<()> {
    let pcm = encode_pcm(samples, bit_depth)?;
    let spec = wav_spec(sample_rate, bit_depth);
    let block_align = spec.channels * (bit_depth / 8);
    let byte_rate = sample_rate * block_align as u32;
    let data_size = pcm.len() as u32;

    let mut header = Vec::with_capacity(44);
    header.extend_from_slice(b"RIFF");
    header.extend_from_slice(&(36 + data_size).to_le_bytes());
    header.extend_from_slice(b"WAVE");

    header.extend_from_slice(b"fmt ");
    header.extend_from_slice(&16u32.to_le_bytes());
    header.extend_from_slice(&1u16.to_le_bytes()); // PCM
    header.extend_from_slice(&spec.channels.to_le_bytes());
    header.extend_from_slice(&sample_rate.to_le_bytes());
    header.extend_from_slice(&byte_rate.to_le_bytes());
    header.extend_from_slice(&block_align.to_le_bytes());
    header.extend_from_slice(&bit_depth.to_le_bytes());

    header.extend_from_slice(b"data");
    header.extend_from_slice(&data_size.to_le_bytes());

    writer.write_all(&header).map_err(KickError::write)?;
    writer.write_all(&pcm).map_err(KickError::write)?;
    writer.flush().map_err(KickError::write)
}

/// Little-endian payload, range-checked against the bit depth.
fn encode_pcm(samples: &[i32], bit_depth: u16) -> KickResult<Vec<u8>> {
    let width = match bit_depth {
        16 => 2,
        24 => 3,
        _ => return Err(KickError::write(hound::Error::Unsupported)),
    };
    let max = (1i32 << (bit_depth - 1)) - 1;
    let min = -max - 1;

    let mut pcm = Vec::with_capacity(samples.len() * width);
    for &sample in samples {
        if sample < min || sample > max {
            return Err(KickError::write(hound::Error::TooWide));
        }
        pcm.extend_from_slice(&sample.to_le_bytes()[..width]);
    }
    Ok(pcm)
}

/// Decode a reference WAV file into a flat integer stream.
pub fn read_reference(path: impl AsRef<Path>) -> KickResult<Vec<i32>> {
    let file = File::open(path.as_ref()).map_err(KickError::decode)?;
    decode_reference(BufReader::new(file))
}

/// Decode any PCM (or float) WAV into integers.
///
/// Integer samples are kept at their native scale. Float samples are scaled
/// to 16-bit full scale. Multichannel frames are averaged down to one value.
pub fn decode_reference<R: Read>(reader: R) -> KickResult<Vec<i32>> {
    let mut wav = WavReader::new(reader).map_err(KickError::decode)?;
    let spec = wav.spec();

    let interleaved: Vec<i32> = match spec.sample_format {
        SampleFormat::Int => wav
            .samples::<i32>()
            .collect::<Result<_, _>>()
            .map_err(KickError::decode)?,
        SampleFormat::Float => wav
            .samples::<f32>()
            .map(|s| s.map(|x| (x * 32_767.0) as i32))
            .collect::<Result<_, _>>()
            .map_err(KickError::decode)?,
    };

    let channels = spec.channels.max(1) as usize;
    if channels == 1 {
        return Ok(interleaved);
    }

    Ok(interleaved
        .chunks(channels)
        .map(|frame| {
            let sum: i64 = frame.iter().map(|&s| s as i64).sum();
            (sum / frame.len() as i64) as i32
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode(samples: &[i32], sample_rate: u32, bit_depth: u16) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        write_wav(&mut cursor, samples, sample_rate, bit_depth).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn sixteen_bit_header_is_canonical() {
        let bytes = encode(&[0, 1, -1, 32_767, -32_767], 48_000, 16);

        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[12..16], b"fmt ");
        // 44 byte header + 5 two-byte frames
        assert_eq!(bytes.len(), 44 + 10);
        assert_eq!(u16::from_le_bytes([bytes[20], bytes[21]]), 1); // PCM
        assert_eq!(u16::from_le_bytes([bytes[22], bytes[23]]), 1); // mono
        assert_eq!(
            u32::from_le_bytes([bytes[24], bytes[25], bytes[26], bytes[27]]),
            48_000
        );
        assert_eq!(&bytes[36..40], b"data");
        // 32767 little-endian
        assert_eq!(&bytes[50..52], &[0xff, 0x7f]);
    }

    #[test]
    fn twenty_four_bit_samples_are_packed() {
        let samples = [0, 8_388_607, -8_388_607, 1234];
        let bytes = encode(&samples, 96_000, 24);
        let decoded = decode_reference(Cursor::new(bytes)).unwrap();
        assert_eq!(decoded, samples);
    }

    #[test]
    fn twenty_four_bit_header_is_canonical() {
        let bytes = encode(&[0, -1, 8_388_607], 96_000, 24);

        assert_eq!(bytes.len(), 44 + 9);
        assert_eq!(u32::from_le_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]), 16);
        assert_eq!(u16::from_le_bytes([bytes[20], bytes[21]]), 1); // PCM, not extensible
        assert_eq!(u16::from_le_bytes([bytes[32], bytes[33]]), 3);
        assert_eq!(u16::from_le_bytes([bytes[34], bytes[35]]), 24);
        assert_eq!(&bytes[36..40], b"data");
        assert_eq!(&bytes[44..53], &[0, 0, 0, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f]);
    }

    #[test]
    fn out_of_range_twenty_four_bit_sample_fails_to_write() {
        let mut cursor = Cursor::new(Vec::new());
        let err = write_wav(&mut cursor, &[0, 8_388_608], 48_000, 24).unwrap_err();
        assert!(matches!(err, KickError::WriteFailed(_)));
        assert!(cursor.into_inner().is_empty());
    }

    #[test]
    fn out_of_range_sample_fails_to_write() {
        let mut cursor = Cursor::new(Vec::new());
        let err = write_wav(&mut cursor, &[40_000], 48_000, 16).unwrap_err();
        assert!(matches!(err, KickError::WriteFailed(_)));
    }

    #[test]
    fn stereo_reference_is_averaged() {
        let spec = WavSpec {
            channels: 2,
            sample_rate: 44_100,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut w = WavWriter::new(&mut cursor, spec).unwrap();
            for s in [100i16, 300, -50, -150, 7, 7] {
                w.write_sample(s).unwrap();
            }
            w.finalize().unwrap();
        }

        let decoded = decode_reference(Cursor::new(cursor.into_inner())).unwrap();
        assert_eq!(decoded, vec![200, -100, 7]);
    }

    #[test]
    fn garbage_is_a_decode_failure() {
        let err = decode_reference(Cursor::new(b"definitely not a wav".to_vec())).unwrap_err();
        assert!(matches!(err, KickError::DecodeFailed(_)));
    }

    #[test]
    fn missing_file_is_a_decode_failure() {
        let err = read_reference("/nonexistent/kick/reference.wav").unwrap_err();
        assert!(matches!(err, KickError::DecodeFailed(_)));
    }
}
