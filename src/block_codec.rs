//! Per-block transform: XOR chaining plus nibble-driven byte shuffling.
//!
//! The atomic unit of the cipher. Each 16-byte block is combined with the
//! previous ciphertext block (CBC-style chaining), permuted by a swap
//! sequence read from the keystream's nibbles, and masked with the
//! keystream itself. Encrypt and decrypt are exact mirrors: the swap
//! sequence is self-inverse when replayed in reverse index order.
//!
//! Both directions are pure functions over `(block, prev, stream)`; the
//! chaining value is threaded explicitly by the caller rather than held
//! in shared mutable state.

/// Cipher block width in bytes.
///
/// Fixed at 16: a keystream nibble (4 bits) addresses a byte position
/// 0–15, so the shuffle is only well-formed at exactly this width.
pub const BLOCK_SIZE: usize = 16;

/// A single cipher block.
pub type Block = [u8; BLOCK_SIZE];

/// Applies the keystream-driven swap sequence in ascending index order.
///
/// For each `i` in `0..16`, the low nibble of `stream[i]` and the high
/// nibble of `stream[i]` select two byte positions to swap.
pub fn shuffle_forward(block: &mut Block, stream: &Block) {
    for &byte in stream.iter() {
        let lo = (byte & 0xF) as usize;
        let hi = ((byte >> 4) & 0xF) as usize;
        block.swap(lo, hi);
    }
}

/// Applies the same swap sequence in descending index order, undoing
/// [`shuffle_forward`] for an identical stream.
pub fn shuffle_reverse(block: &mut Block, stream: &Block) {
    for &byte in stream.iter().rev() {
        let lo = (byte & 0xF) as usize;
        let hi = ((byte >> 4) & 0xF) as usize;
        block.swap(lo, hi);
    }
}

/// Encrypts one block.
///
/// Chain XOR with `prev`, shuffle forward, then mask with the keystream.
/// The returned ciphertext block is the chaining value for the next block.
pub fn encrypt_block(mut block: Block, prev: &Block, stream: &Block) -> Block {
    for (b, p) in block.iter_mut().zip(prev.iter()) {
        *b ^= p;
    }
    shuffle_forward(&mut block, stream);
    for (b, s) in block.iter_mut().zip(stream.iter()) {
        *b ^= s;
    }
    block
}

/// Decrypts one block.
///
/// Exact inverse of [`encrypt_block`]: unmask, shuffle in reverse, then
/// undo the chain XOR. The caller must keep the *raw* ciphertext block
/// (the input to this function) as the chaining value for the next block.
pub fn decrypt_block(mut block: Block, prev: &Block, stream: &Block) -> Block {
    for (b, s) in block.iter_mut().zip(stream.iter()) {
        *b ^= s;
    }
    shuffle_reverse(&mut block, stream);
    for (b, p) in block.iter_mut().zip(prev.iter()) {
        *b ^= p;
    }
    block
}
