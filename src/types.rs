use ibig::UBig;

pub type CharType = u32;

///Number of letters in the (latin) alphabet, the only alphabet we support
pub const ALPHABET_SIZE: usize = 26;

///The first 26 primes, assigned to the letters a-z in order (a=2, b=3, c=5, ... z=101)
pub const PRIMES: &[CharType] = &[
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101,
];

///The anagram fingerprint: the product of the primes corresponding to each letter occurrence in a
///word. Divisibility of one fingerprint by another captures the sub-multiset relation exactly,
///because prime factorisation is unique. Fingerprints for inputs beyond ~30 letters overflow any
///fixed-width 64-bit integer, so this has to be a big integer.
pub type AnaValue = UBig;

///Letter occurrence counts for a word, index 0 corresponds to 'a'
pub type Histogram = [u32; ALPHABET_SIZE];

///Inputs shorter than this (in letters) are solved with the prime fingerprint strategy, longer
///ones with the histogram strategy. This is an empirically chosen crossover point where the
///big-integer arithmetic stops paying off, not an architectural boundary; it can be overridden
///via [`SolveParams`].
pub const HASH_STRATEGY_MAX_LEN: usize = 120;

#[derive(Clone, Debug)]
pub struct SolveParams {
    /// Whether a dictionary word that is exactly equal to the (normalized) input counts as a
    /// match. It is a valid match under both strategies (a multiset is a sub-multiset of
    /// itself); excluding it is a presentation policy some callers want.
    pub include_self_match: bool,

    /// Strategy crossover point, see [`HASH_STRATEGY_MAX_LEN`]
    pub hash_max_len: usize,
}

impl Default for SolveParams {
    fn default() -> Self {
        Self {
            include_self_match: true,
            hash_max_len: HASH_STRATEGY_MAX_LEN,
        }
    }
}

impl SolveParams {
    pub fn with_self_match(mut self, include: bool) -> Self {
        self.include_self_match = include;
        self
    }

    pub fn with_hash_max_len(mut self, len: usize) -> Self {
        self.hash_max_len = len;
        self
    }
}
