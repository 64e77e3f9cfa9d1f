use crate::constants::*;
use anchor_lang::solana_program::keccak;

/// Source of randomness for winner selection and id generation.
///
/// Implementations only need to supply raw `u64` words; `next_index` turns
/// them into unbiased bounded indices.
pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Uniform index in `0..bound`. Words from the uneven tail of the `u64`
    /// range are rejected so every index is equally likely.
    fn next_index(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }

        let bound = bound as u64;
        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let value = self.next_u64();
            if value < zone {
                return (value % bound) as usize;
            }
        }
    }
}

/// Counter-mode keccak stream: word `n` is the first 8 bytes of
/// `keccak(seed || n)`.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    seed: [u8; 32],
    counter: u64,
}

impl SeededRandom {
    pub fn new(seed: [u8; 32]) -> Self {
        Self { seed, counter: 0 }
    }
}

impl RandomSource for SeededRandom {
    fn next_u64(&mut self) -> u64 {
        let block = keccak::hashv(&[&self.seed[..], &self.counter.to_le_bytes()[..]]).to_bytes();
        self.counter = self.counter.wrapping_add(1);

        let mut word = [0u8; 8];
        word.copy_from_slice(&block[..8]);
        u64::from_le_bytes(word)
    }
}

/// Random base-36 id of `GENERATED_ID_LEN` characters.
pub fn generate_id<R: RandomSource>(rng: &mut R) -> String {
    (0..GENERATED_ID_LEN)
        .map(|_| ID_ALPHABET[rng.next_index(ID_ALPHABET.len())] as char)
        .collect()
}

/// Generates ids until one is not `taken`.
pub fn generate_unique_id<R, F>(rng: &mut R, taken: F) -> String
where
    R: RandomSource,
    F: Fn(&str) -> bool,
{
    loop {
        let id = generate_id(rng);
        if !taken(&id) {
            return id;
        }
    }
}
