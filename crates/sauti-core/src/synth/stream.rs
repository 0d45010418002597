//! Incremental audio chunk stream

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures::{pin_mut, Stream, StreamExt};
use tracing::{debug, info};

use crate::error::Result;

/// Upper bound on the size of one emitted chunk
pub const MAX_CHUNK_BYTES: usize = 1024;

/// A lazy, finite, non-restartable sequence of audio chunks.
///
/// Chunks are emitted strictly in arrival order and never exceed
/// [`MAX_CHUNK_BYTES`]. A read error ends the sequence at the point of
/// failure; chunks already yielded are not retracted. Dropping the stream
/// before it is exhausted drops the upstream response and with it the
/// outbound connection.
pub struct AudioStream {
    inner: Pin<Box<dyn Stream<Item = Result<Bytes>> + Send>>,
}

impl AudioStream {
    /// Wrap an upstream byte stream, splitting oversized transport chunks.
    pub fn new<S>(upstream: S) -> Self
    where
        S: Stream<Item = Result<Bytes>> + Send + 'static,
    {
        Self {
            inner: Box::pin(rechunk(upstream)),
        }
    }
}

impl std::fmt::Debug for AudioStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioStream").finish_non_exhaustive()
    }
}

impl Stream for AudioStream {
    type Item = Result<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

/// Re-emit `upstream` with every chunk capped at `MAX_CHUNK_BYTES`,
/// preserving byte order. Errors pass through and terminate the stream.
fn rechunk<S>(upstream: S) -> impl Stream<Item = Result<Bytes>>
where
    S: Stream<Item = Result<Bytes>>,
{
    async_stream::try_stream! {
        pin_mut!(upstream);
        let mut emitted = 0usize;

        while let Some(piece) = upstream.next().await {
            let mut piece = piece?;
            while piece.len() > MAX_CHUNK_BYTES {
                let head = piece.split_to(MAX_CHUNK_BYTES);
                emitted += 1;
                debug!("Streaming chunk {}: {} bytes", emitted, head.len());
                yield head;
            }
            if !piece.is_empty() {
                emitted += 1;
                debug!("Streaming chunk {}: {} bytes", emitted, piece.len());
                yield piece;
            }
        }

        info!("Upstream closed after {} chunks", emitted);
    }
}
