use hmac::{Hmac, Mac, digest::Key};
use sha3::Sha3_256;

use crate::foundation::error::{AdorableError, AdorableResult};

type HmacSha3_256 = Hmac<Sha3_256>;

const HASH_LEN: usize = 32;

/// Upper bound on the bytes a single [`KeyStream`] can produce (`255 * HashLen`).
pub const MAX_STREAM_LEN: usize = 255 * HASH_LEN;

/// Sequential source of pseudo-random bytes consumed by the samplers.
pub trait ByteSource {
    /// Fill `buf` entirely with the next bytes of the source.
    fn fill(&mut self, buf: &mut [u8]) -> AdorableResult<()>;
}

/// HKDF-SHA3-256 output stream with empty salt and empty info.
///
/// Blocks are produced lazily as `T(i) = HMAC(PRK, T(i-1) || i)` and handed out through a single
/// cursor, so the bytes a caller sees depend only on the seed and on how many bytes were read
/// before.
#[derive(Clone)]
pub struct KeyStream {
    prk: HmacSha3_256,
    block: [u8; HASH_LEN],
    counter: u8,
    pos: usize,
    consumed: usize,
}

impl KeyStream {
    /// Expand `seed` into a fresh stream. Any seed is accepted, including an empty one.
    pub fn expand(seed: &[u8]) -> Self {
        let mut extract = keyed(&[0u8; HASH_LEN]);
        extract.update(seed);
        let mut prk = [0u8; HASH_LEN];
        prk.copy_from_slice(&extract.finalize().into_bytes());

        Self {
            prk: keyed(&prk),
            block: [0u8; HASH_LEN],
            counter: 0,
            pos: HASH_LEN,
            consumed: 0,
        }
    }

    /// Bytes handed out so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Bytes still available before the derivation limit.
    pub fn remaining(&self) -> usize {
        MAX_STREAM_LEN - self.consumed
    }

    fn refill(&mut self) {
        let mut mac = self.prk.clone();
        if self.counter > 0 {
            mac.update(&self.block);
        }
        self.counter += 1;
        mac.update(&[self.counter]);
        self.block.copy_from_slice(&mac.finalize().into_bytes());
        self.pos = 0;
        tracing::trace!(counter = self.counter, "key stream block");
    }
}

impl ByteSource for KeyStream {
    fn fill(&mut self, buf: &mut [u8]) -> AdorableResult<()> {
        if buf.len() > self.remaining() {
            return Err(AdorableError::StreamExhausted {
                requested: buf.len(),
                remaining: self.remaining(),
            });
        }

        let mut written = 0;
        while written < buf.len() {
            if self.pos == HASH_LEN {
                self.refill();
            }
            let take = (buf.len() - written).min(HASH_LEN - self.pos);
            buf[written..written + take].copy_from_slice(&self.block[self.pos..self.pos + take]);
            self.pos += take;
            written += take;
        }
        self.consumed += buf.len();
        Ok(())
    }
}

impl std::fmt::Debug for KeyStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyStream")
            .field("consumed", &self.consumed)
            .field("counter", &self.counter)
            .finish_non_exhaustive()
    }
}

// HMAC keys shorter than the block size are zero-padded, so a padded block-size key is
// equivalent to the raw key and keeps construction infallible.
fn keyed(key: &[u8; HASH_LEN]) -> HmacSha3_256 {
    let mut padded = Key::<HmacSha3_256>::default();
    padded[..HASH_LEN].copy_from_slice(key);
    <HmacSha3_256 as Mac>::new(&padded)
}

#[cfg(test)]
#[path = "../../tests/unit/random/stream.rs"]
mod tests;
