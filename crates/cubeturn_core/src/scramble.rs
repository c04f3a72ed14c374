//! Seeded scramble generation.

use cubeturn_notation::{Algorithm, FamilyKind, Move};
use itertools::Itertools;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use sha2::Digest;

/// Default number of moves in a scramble.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 25;

/// Deterministic generator of random face-turn sequences.
///
/// The same seed always produces the same sequence of scrambles.
#[derive(Debug, Clone)]
pub struct Scrambler {
    rng: ChaCha12Rng,
    moves: Vec<Move>,
}

impl Scrambler {
    /// Constructs a scrambler from a seed string.
    #[allow(clippy::unwrap_used)] // SHA-256 digests are always 32 bytes
    pub fn from_seed(seed: &str) -> Self {
        let digest = sha2::Sha256::digest(seed.as_bytes());
        let rng = ChaCha12Rng::from_seed(<[u8; 32]>::try_from(&digest[..32]).unwrap());
        let moves = Move::all()
            .filter(|m| m.family.kind() == FamilyKind::Face)
            .collect_vec();
        Self { rng, moves }
    }

    /// Returns a fresh seed from the thread-local RNG.
    pub fn random_seed() -> String {
        format!("{:016x}", rand::rng().random::<u64>())
    }

    /// Generates a scramble of `length` face turns, never turning the same face
    /// twice in a row.
    pub fn generate(&mut self, length: usize) -> Algorithm {
        let mut ret = Algorithm::new();
        while ret.len() < length {
            let Some(&m) = self.moves.choose(&mut self.rng) else {
                break;
            };
            if ret.last().is_some_and(|prev| prev.family == m.family) {
                continue;
            }
            ret.push(m);
        }
        ret
    }
}
