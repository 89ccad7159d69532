//! Playback of rendered pads through the default output device.
//!
//! Rendered buffers travel to the audio callback over a lock-free ring; the
//! callback swaps in the newest buffer and plays it once from the top. Spent
//! buffers go back over a second ring so the callback never frees memory.

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{Consumer, Producer, PushError, RingBuffer};

/// Pending one-shots; older ones are dropped when the pads are hammered.
const PLAY_QUEUE: usize = 4;

/// Between two drains the callback can hand back every queued buffer plus
/// the one it was playing.
const RETURN_QUEUE: usize = PLAY_QUEUE + 1;

/// Audio-thread side: owns the buffer being played.
struct OneShot {
    incoming: Consumer<Vec<f32>>,
    spent: Producer<Vec<f32>>,
    current: Vec<f32>,
    position: usize,
}

impl OneShot {
    fn new(incoming: Consumer<Vec<f32>>, spent: Producer<Vec<f32>>) -> Self {
        Self {
            incoming,
            spent,
            current: Vec::new(),
            position: 0,
        }
    }

    /// Fill an interleaved block, copying the mono signal to every channel.
    fn fill(&mut self, data: &mut [f32], channels: usize) {
        // Newest buffer wins
        while let Ok(next) = self.incoming.pop() {
            let old = std::mem::replace(&mut self.current, next);
            self.position = 0;
            if old.capacity() > 0 {
                // RETURN_QUEUE leaves room for every buffer in flight
                let _ = self.spent.push(old);
            }
        }

        for frame in data.chunks_mut(channels.max(1)) {
            let s = self.current.get(self.position).copied().unwrap_or(0.0);
            if self.position < self.current.len() {
                self.position += 1;
            }
            frame.fill(s);
        }
    }
}

pub struct Player {
    /// Kept alive for as long as the player exists.
    _stream: cpal::Stream,
    tx: Producer<Vec<f32>>,
    spent: Consumer<Vec<f32>>,
    sample_rate: u32,
}

impl Player {
    pub fn open() -> EyreResult<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = config.sample_rate().0;
        let channels = config.channels() as usize;

        let (tx, rx) = RingBuffer::<Vec<f32>>::new(PLAY_QUEUE);
        let (spent_tx, spent) = RingBuffer::<Vec<f32>>::new(RETURN_QUEUE);
        let mut voice = OneShot::new(rx, spent_tx);

        let stream = device
            .build_output_stream(
                &config.into(),
                move |data: &mut [f32], _| voice.fill(data, channels),
                move |err| eprintln!("Stream error: {err}"),
                None,
            )
            .wrap_err("failed to build output stream")?;

        stream.play().wrap_err("failed to start output stream")?;

        Ok(Self {
            _stream: stream,
            tx,
            spent,
            sample_rate,
        })
    }

    /// Device rate; pads are re-rendered at this rate for playback.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Queue a mono buffer. Returns false if the queue was full.
    pub fn play(&mut self, samples: Vec<f32>) -> bool {
        // Spent buffers are freed here, on the UI thread
        while self.spent.pop().is_ok() {}
        !matches!(self.tx.push(samples), Err(PushError::Full(_)))
    }
}
