use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{ParseSeedError, ShapeKind};

/// Supplies the kind of each newly spawned piece.
///
/// The engine never draws random numbers itself; it asks its source. Swap in a
/// [`ScriptedPieceSource`] to make the piece order exact in tests.
pub trait PieceSource {
    /// Returns the kind of the next piece to spawn.
    fn next_kind(&mut self) -> ShapeKind;
}

/// Uniformly random piece kinds from a seeded generator.
///
/// Every draw is independent: each of the seven kinds has probability 1/7,
/// with no bag or drought protection.
///
/// # Example
///
/// ```
/// use blockfall_engine::{PieceSource as _, RandomPieceSource};
/// use rand::Rng as _;
///
/// let seed = rand::rng().random();
/// let mut a = RandomPieceSource::with_seed(seed);
/// let mut b = RandomPieceSource::with_seed(seed);
///
/// for _ in 0..10 {
///     assert_eq!(a.next_kind(), b.next_kind());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RandomPieceSource {
    seed: PieceSeed,
    rng: Pcg32,
}

impl Default for RandomPieceSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPieceSource {
    /// Creates a source seeded from the thread-local generator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for a reproducible sequence.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self {
            seed,
            rng: Pcg32::from_seed(seed.to_bytes()),
        }
    }

    /// Returns the seed this source was created with.
    #[must_use]
    pub fn seed(&self) -> PieceSeed {
        self.seed
    }
}

impl PieceSource for RandomPieceSource {
    fn next_kind(&mut self) -> ShapeKind {
        self.rng.random()
    }
}

/// Replays a fixed list of kinds in order, starting over after the last one.
#[derive(Debug, Clone)]
pub struct ScriptedPieceSource {
    kinds: Vec<ShapeKind>,
    next: usize,
}

impl ScriptedPieceSource {
    /// Creates a source that yields `kinds` in order, cycling forever.
    ///
    /// # Panics
    ///
    /// Panics if `kinds` is empty.
    #[must_use]
    pub fn new(kinds: impl IntoIterator<Item = ShapeKind>) -> Self {
        let kinds: Vec<_> = kinds.into_iter().collect();
        assert!(!kinds.is_empty(), "scripted piece source needs at least one kind");
        Self { kinds, next: 0 }
    }
}

impl PieceSource for ScriptedPieceSource {
    fn next_kind(&mut self) -> ShapeKind {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind
    }
}

impl<S> PieceSource for &mut S
where
    S: PieceSource + ?Sized,
{
    fn next_kind(&mut self) -> ShapeKind {
        (**self).next_kind()
    }
}

/// Seed for deterministic piece generation.
///
/// A 128-bit seed for the generator behind [`RandomPieceSource`]. The same
/// seed always yields the same piece sequence, so a game can be replayed by
/// passing the seed printed at exit back on the command line.
///
/// The text form is 32 lowercase hex digits; serde uses the same string.
///
/// ```
/// use blockfall_engine::PieceSeed;
///
/// let seed: PieceSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
/// assert_eq!(seed.to_string(), "000102030405060708090a0b0c0d0e0f");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSeed([u8; 16]);

impl PieceSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }
}

impl fmt::Display for PieceSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for PieceSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseSeedError::Length(s.len()));
        }
        let num = u128::from_str_radix(s, 16)
            .map_err(|e| ParseSeedError::Digits(format!("{s} ({e})")))?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for PieceSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PieceSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `PieceSeed` values with `rng.random()`.
impl Distribution<PieceSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        PieceSeed(seed)
    }
}
