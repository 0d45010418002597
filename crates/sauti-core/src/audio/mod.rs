//! Audio utilities for provider PCM output

mod framer;

pub use framer::{pcm_to_wav, CHANNELS, SAMPLE_RATE, WAV_HEADER_LEN};
