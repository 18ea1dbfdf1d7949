//! Probabilistic primality and twin-prime table sizing
//!
//! A prime capacity `m` spreads both probe sequences over every slot. When
//! `m - 2` is prime as well, the double-hashing step modulus shares that
//! property, so the sizer looks for a twin pair and hands back its larger
//! member.

use crate::error::TableError;
use rand::Rng;

/// First candidate scanned by default
pub const DEFAULT_LOWER_BOUND: u64 = 95_501;

/// Scan stops before this value by default
pub const DEFAULT_UPPER_BOUND: u64 = 96_000;

/// Fermat rounds a candidate must pass by default
pub const DEFAULT_ROUNDS: usize = 2;

/// `base^exponent mod modulus` by square-and-multiply
///
/// Walks the bits of `exponent` from the most significant down. Products are
/// taken in `u128`, so any `u64` modulus is safe.
pub fn mod_pow(base: u64, exponent: u64, modulus: u64) -> u64 {
    assert!(modulus > 0, "modulus must be positive");
    if modulus == 1 {
        return 0;
    }

    let m = u128::from(modulus);
    let base = u128::from(base) % m;
    let bits = u64::BITS - exponent.leading_zeros();

    let mut acc: u128 = 1;
    for bit in (0..bits).rev() {
        acc = acc * acc % m;
        if (exponent >> bit) & 1 == 1 {
            acc = acc * base % m;
        }
    }
    acc as u64
}

/// Fermat primality tester with a random base per round
///
/// Composite numbers occasionally pass (Carmichael numbers pass for every
/// base coprime to them). Running several rounds lowers that rate without
/// removing it.
pub struct FermatTester<R> {
    rng: R,
    rounds: usize,
}

impl<R: Rng> FermatTester<R> {
    /// Tester running [`DEFAULT_ROUNDS`] rounds per candidate
    pub fn new(rng: R) -> Self {
        Self::with_rounds(rng, DEFAULT_ROUNDS)
    }

    /// Tester running `rounds` rounds per candidate (at least one)
    pub fn with_rounds(rng: R, rounds: usize) -> Self {
        FermatTester {
            rng,
            rounds: rounds.max(1),
        }
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Single Fermat round: random `a` in `[1, p)`, true iff `a^(p-1) mod p == 1`
    pub fn is_probably_prime(&mut self, p: u64) -> bool {
        if p < 2 {
            return false;
        }
        let a = self.rng.gen_range(1..p);
        mod_pow(a, p - 1, p) == 1
    }

    /// True iff `p` passes every configured round
    pub fn passes(&mut self, p: u64) -> bool {
        (0..self.rounds).all(|_| self.is_probably_prime(p))
    }

    pub fn into_rng(self) -> R {
        self.rng
    }
}

/// Range and confidence used when scanning for a table size
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizerConfig {
    /// First candidate (bumped to odd)
    pub lower: u64,
    /// Exclusive end of the scan
    pub upper: u64,
    /// Fermat rounds per candidate
    pub rounds: usize,
}

impl Default for SizerConfig {
    fn default() -> Self {
        SizerConfig {
            lower: DEFAULT_LOWER_BOUND,
            upper: DEFAULT_UPPER_BOUND,
            rounds: DEFAULT_ROUNDS,
        }
    }
}

/// Scans a range for the first twin-prime pair
pub struct TableSizer<R> {
    config: SizerConfig,
    tester: FermatTester<R>,
}

impl<R: Rng> TableSizer<R> {
    /// Sizer over the default range `[95501, 96000)`
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, SizerConfig::default())
    }

    pub fn with_config(rng: R, config: SizerConfig) -> Self {
        TableSizer {
            config,
            tester: FermatTester::with_rounds(rng, config.rounds),
        }
    }

    pub fn config(&self) -> &SizerConfig {
        &self.config
    }

    /// First `(p, p + 2)` with odd `p` in range where both pass the tester
    pub fn find_twin_primes(&mut self) -> Option<(u64, u64)> {
        let SizerConfig { lower, upper, .. } = self.config;

        let mut p = lower | 1;
        while p < upper {
            let twin = p.checked_add(2)?;
            if self.tester.passes(p) && self.tester.passes(twin) {
                log::debug!("twin primes found: ({}, {})", p, twin);
                return Some((p, twin));
            }
            p = twin;
        }

        log::debug!("no twin primes in [{}, {})", lower, upper);
        None
    }

    /// Larger member of the first twin-prime pair, used as table capacity
    pub fn find_table_size(&mut self) -> Result<usize, TableError> {
        let failure = TableError::SizingFailure {
            lower: self.config.lower,
            upper: self.config.upper,
        };

        self.find_twin_primes()
            .and_then(|(_, size)| usize::try_from(size).ok())
            .ok_or(failure)
    }
}
