//! SbCrypt: stream framer and transform orchestrator.
//!
//! Reads input in 4096-byte chunks, drives the block codec over every
//! 16-byte block while threading the chaining value, and handles the
//! self-describing length padding on the final chunk. Chunking is
//! transparent to the cipher because the block size evenly divides the
//! chunk size; anyone changing [`BUF_SIZE`] must preserve that.

use std::io::{self, Read, Write};

use crate::block_codec::{decrypt_block, encrypt_block, Block, BLOCK_SIZE};
use crate::error::SbCryptError;
use crate::random::lcgen::LcGen;
use crate::random::password_seed::derive_seed;

/// Chunk size for streaming I/O. Must be a multiple of [`BLOCK_SIZE`].
pub const BUF_SIZE: usize = 4096;

/// One-shot cipher state for a single file transform.
///
/// Construction derives the seed, builds the keystream generator, and
/// draws the first 16 keystream bytes as the initial chaining block —
/// before any input data is touched, so the chain start is independent
/// of file content. The streaming methods consume `self`: generator and
/// chaining state are exclusively owned by one transform and cannot leak
/// into a second file.
pub struct SbCrypt {
    rand: LcGen,
    prev_block: Block,
}

impl SbCrypt {
    /// Creates a transform for `password`.
    pub fn new(password: &str) -> Self {
        Self::with_seed(derive_seed(password))
    }

    /// Creates a transform from an already-derived seed.
    pub fn with_seed(seed: u64) -> Self {
        let mut rand = LcGen::new(seed);
        let mut prev_block = [0u8; BLOCK_SIZE];
        rand.fill(&mut prev_block);
        SbCrypt { rand, prev_block }
    }

    /// Encrypts everything from `reader` into `writer`.
    ///
    /// The first chunk shorter than [`BUF_SIZE`] is the final one. It is
    /// padded up to the next block boundary with `pad` bytes of value
    /// `pad`, where `pad = 16 - len % 16`. The pad is never zero: an
    /// input that is an exact multiple of the chunk size is followed by a
    /// zero-length final chunk which still receives a full pad block, so
    /// the ciphertext always grows by 1..=16 bytes.
    ///
    /// # Errors
    /// Any read or write failure aborts the transform; output written so
    /// far is left in place.
    pub fn encrypt_stream<R: Read, W: Write>(
        mut self,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<(), SbCryptError> {
        loop {
            let mut chunk = read_chunk(reader)?;
            let last = chunk.len() < BUF_SIZE;
            if last {
                let pad = BLOCK_SIZE - chunk.len() % BLOCK_SIZE;
                chunk.resize(chunk.len() + pad, pad as u8);
            }
            self.encrypt_chunk(&mut chunk);
            writer.write_all(&chunk).map_err(SbCryptError::Write)?;
            if last {
                return Ok(());
            }
        }
    }

    /// Decrypts everything from `reader` into `writer`.
    ///
    /// Mirrors the encrypt chunking with one chunk of lookahead: a full
    /// chunk is final if and only if the next read returns no bytes.
    /// After the final chunk is transformed, its last byte names how many
    /// trailing pad bytes to drop. A corrupt pad count larger than the
    /// output truncates to empty rather than panicking — without an
    /// authentication tag, garbage in means garbage out.
    ///
    /// # Errors
    /// Any read or write failure aborts the transform.
    pub fn decrypt_stream<R: Read, W: Write>(
        mut self,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<(), SbCryptError> {
        let mut chunk = read_chunk(reader)?;
        loop {
            let next = if chunk.len() == BUF_SIZE {
                read_chunk(reader)?
            } else {
                Vec::new()
            };
            self.decrypt_chunk(&mut chunk);
            if next.is_empty() {
                let pad = chunk.last().copied().unwrap_or(0) as usize;
                chunk.truncate(chunk.len().saturating_sub(pad));
                writer.write_all(&chunk).map_err(SbCryptError::Write)?;
                return Ok(());
            }
            writer.write_all(&chunk).map_err(SbCryptError::Write)?;
            chunk = next;
        }
    }

    /// Transforms every full block of `buf` in place, threading the
    /// chaining value. The generator advances one 16-byte draw per block,
    /// driven purely by block count.
    fn encrypt_chunk(&mut self, buf: &mut [u8]) {
        for slot in buf.chunks_exact_mut(BLOCK_SIZE) {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(slot);
            let mut stream = [0u8; BLOCK_SIZE];
            self.rand.fill(&mut stream);
            let cipher = encrypt_block(block, &self.prev_block, &stream);
            slot.copy_from_slice(&cipher);
            self.prev_block = cipher;
        }
    }

    /// Inverse of [`encrypt_chunk`]. The raw ciphertext block, saved
    /// before transformation, becomes the next chaining value. A trailing
    /// partial block (malformed input, never produced by encryption)
    /// passes through untouched.
    fn decrypt_chunk(&mut self, buf: &mut [u8]) {
        for slot in buf.chunks_exact_mut(BLOCK_SIZE) {
            let mut raw = [0u8; BLOCK_SIZE];
            raw.copy_from_slice(slot);
            let mut stream = [0u8; BLOCK_SIZE];
            self.rand.fill(&mut stream);
            let plain = decrypt_block(raw, &self.prev_block, &stream);
            slot.copy_from_slice(&plain);
            self.prev_block = raw;
        }
    }
}

/// Encrypts an in-memory buffer with `password`.
///
/// Convenience wrapper over [`SbCrypt::encrypt_stream`]; the ciphertext
/// is `1..=16` bytes longer than the plaintext.
pub fn encrypt(password: &str, plaintext: &[u8]) -> Result<Vec<u8>, SbCryptError> {
    let mut out = Vec::with_capacity(plaintext.len() + BLOCK_SIZE);
    SbCrypt::new(password).encrypt_stream(&mut &plaintext[..], &mut out)?;
    Ok(out)
}

/// Decrypts an in-memory buffer with `password`.
pub fn decrypt(password: &str, ciphertext: &[u8]) -> Result<Vec<u8>, SbCryptError> {
    let mut out = Vec::with_capacity(ciphertext.len());
    SbCrypt::new(password).decrypt_stream(&mut &ciphertext[..], &mut out)?;
    Ok(out)
}

/// Reads up to [`BUF_SIZE`] bytes, looping over short reads so a chunk is
/// only ever smaller than the buffer at end of input.
fn read_chunk<R: Read>(reader: &mut R) -> Result<Vec<u8>, SbCryptError> {
    let mut buf = vec![0u8; BUF_SIZE];
    let mut filled = 0;
    while filled < BUF_SIZE {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(SbCryptError::Read(err)),
        }
    }
    buf.truncate(filled);
    Ok(buf)
}
