//! Shuffle-block (SB) chaining cipher.
//!
//! A symmetric block-chaining obfuscation cipher for arbitrary binary data.
//! A password is hashed into a 64-bit seed, which drives a byte-wide
//! linear-congruential keystream. Data is processed in 16-byte blocks:
//! each block is XOR-chained with the previous ciphertext block, its bytes
//! are shuffled by keystream nibbles, and the result is XORed with the
//! keystream itself. The final chunk carries self-describing length padding
//! so decryption restores the exact original length.
//!
//! This is a pedagogical obfuscation scheme, not a secure primitive: there
//! is no key management, no authentication tag, and no resistance to
//! cryptanalysis. A wrong password silently produces garbage output.
//!
//! # Architecture
//!
//! ```text
//! LcGen       (keystream source — byte-wide linear-congruential generator)
//!     ↓ 16-byte draws, one per block
//! block_codec (XOR chaining + nibble-driven byte shuffle per 16-byte block)
//!     ↓ blocks in strict sequence
//! SbCrypt     (stream framer — 4096-byte chunks, self-describing padding)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt an in-memory buffer:
//!
//! ```
//! use sbcrypt::{decrypt, encrypt};
//!
//! let ciphertext = encrypt("sesame", b"attack at dawn").unwrap();
//! assert_ne!(&ciphertext[..], b"attack at dawn");
//!
//! let plaintext = decrypt("sesame", &ciphertext).unwrap();
//! assert_eq!(plaintext, b"attack at dawn");
//! ```
//!
//! Stream a file through the cipher:
//!
//! ```no_run
//! use sbcrypt::SbCrypt;
//! use std::fs::File;
//! use std::io::{BufReader, BufWriter};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut reader = BufReader::new(File::open("document.txt")?);
//! let mut writer = BufWriter::new(File::create("document.sb")?);
//! SbCrypt::new("sesame").encrypt_stream(&mut reader, &mut writer)?;
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all)]

pub mod block_codec;
pub mod error;
pub mod random;

mod sbcrypt;

pub use block_codec::{Block, BLOCK_SIZE};
pub use sbcrypt::{decrypt, encrypt, SbCrypt, BUF_SIZE};
