use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::Rng;

use super::engine::render;
use crate::error::{KickError, KickResult};
use crate::io::wav::write_wav;
use crate::params::Parameters;

/// Render `params` and encode it into any byte sink.
pub fn render_to_writer<W, R>(params: &Parameters, rng: &mut R, writer: W) -> KickResult<()>
where
    W: Write,
    R: Rng + ?Sized,
{
    let samples = render(params, rng)?;
    write_wav(writer, &samples, params.sample_rate, params.bit_depth)
}

/// Render `params` into a WAV file at `path`.
///
/// A file that fails to encode is removed rather than left truncated.
pub fn save<R: Rng + ?Sized>(params: &Parameters, rng: &mut R, path: &Path) -> KickResult<()> {
    // Validate before touching the filesystem
    params.validate()?;

    let file = File::create(path).map_err(KickError::write)?;
    let mut writer = BufWriter::new(file);

    let result = render_to_writer(params, rng, &mut writer)
        .and_then(|()| writer.flush().map_err(KickError::write));

    if let Err(err) = result {
        drop(writer);
        if let Err(remove_err) = fs::remove_file(path) {
            tracing::warn!(path = %path.display(), error = %remove_err, "could not remove partial WAV");
        }
        return Err(err);
    }

    tracing::info!(
        path = %path.display(),
        samples = params.num_samples(),
        sample_rate = params.sample_rate,
        bit_depth = params.bit_depth,
        "saved kick"
    );
    Ok(())
}

/// First `kickN.wav` (N = 1, 2, ...) that does not exist yet in `dir`.
pub fn next_free_path(dir: &Path) -> PathBuf {
    (1u32..)
        .map(|n| dir.join(format!("kick{n}.wav")))
        .find(|candidate| !candidate.exists())
        .unwrap_or_else(|| dir.join("kick.wav"))
}

/// Save into `dir` under the first free `kickN.wav` name and return the path.
pub fn save_to_dir<R: Rng + ?Sized>(
    params: &Parameters,
    rng: &mut R,
    dir: &Path,
) -> KickResult<PathBuf> {
    let path = next_free_path(dir);
    save(params, rng, &path)?;
    Ok(path)
}
