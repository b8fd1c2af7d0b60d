extern crate ibig;
extern crate num_traits;

use std::fs::File;
use std::io::{BufRead, BufReader};

pub mod anahash;
pub mod error;
pub mod normalize;
pub mod types;

pub use crate::anahash::*;
pub use crate::error::*;
pub use crate::normalize::*;
pub use crate::types::*;

///The jumble model: a static wordlist along with the precomputed per-word anagram fingerprints
///and letter histograms used for fast sub-multiset matching. The wordlist and both index arrays
///are built once at load time and never mutated afterwards; all solving methods take `&self`, so
///a built model can be shared freely between threads.
pub struct JumbleModel {
    ///The dictionary, in load order. All entries are normalized.
    pub words: Vec<String>,

    ///Anagram fingerprint per word, index-aligned with `words`
    pub fingerprints: Vec<AnaValue>,

    ///Letter histogram per word, index-aligned with `words`
    pub histograms: Vec<Histogram>,

    pub debug: bool,
}

impl JumbleModel {
    pub fn new() -> JumbleModel {
        JumbleModel {
            words: Vec::new(),
            fingerprints: Vec::new(),
            histograms: Vec::new(),
            debug: false,
        }
    }

    ///Add a single word to the model. The word is normalized (the corpus is assumed to be clean
    ///already, but we reuse the same rules as for query input for consistency) and its
    ///fingerprint and histogram are computed eagerly, exactly once.
    pub fn add_word(&mut self, text: &str) -> Result<(), InvalidInputError> {
        let word = normalize(text)?;
        if self.debug {
            eprintln!(
                " -- Adding to wordlist: {} (anavalue {})",
                word,
                word.anahash()
            );
        }
        self.fingerprints.push(word.anahash());
        self.histograms.push(word.histogram());
        self.words.push(word);
        Ok(())
    }

    ///Read a wordlist from a file, one word per line, empty lines are skipped
    pub fn read_wordlist(&mut self, filename: &str) -> Result<(), WordlistError> {
        if self.debug {
            eprintln!("Reading wordlist from {}...", filename);
        }
        let f = File::open(filename)?;
        let f_buffer = BufReader::new(f);
        for (i, line) in f_buffer.lines().enumerate() {
            let line = line?;
            if !line.is_empty() {
                self.add_word(&line)
                    .map_err(|source| WordlistError::InvalidWord {
                        line: i + 1,
                        source,
                    })?;
            }
        }
        if self.debug {
            eprintln!(" -- Read wordlist of size {}", self.words.len());
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    ///Find all words whose letters are a sub-multiset of the input's letters, using the prime
    ///fingerprint strategy: a word matches iff the input's fingerprint is divisible by the
    ///word's fingerprint. One big-integer modulus per candidate, but the cost of that modulus
    ///grows with the bit-length of the input fingerprint. Returns unordered matches.
    pub fn solve_with_hash(&self, raw: &str) -> Result<Vec<&str>, InvalidInputError> {
        let input = normalize(raw)?;
        Ok(self.match_by_hash(&input))
    }

    ///Find all words whose letters are a sub-multiset of the input's letters, using the letter
    ///histogram strategy: per-letter count comparison with small fixed-width counters, flat cost
    ///with respect to input length. Returns unordered matches.
    pub fn solve_with_hist(&self, raw: &str) -> Result<Vec<&str>, InvalidInputError> {
        let input = normalize(raw)?;
        Ok(self.match_by_hist(&input))
    }

    ///Find all words whose letters are a sub-multiset of the input's letters, selecting the
    ///cheaper strategy based on input length. Returns unordered matches.
    pub fn solve(&self, raw: &str) -> Result<Vec<&str>, InvalidInputError> {
        let input = normalize(raw)?;
        Ok(self.match_unordered(&input, HASH_STRATEGY_MAX_LEN))
    }

    ///Primary entry point: solve a jumble and return the matches ordered by length (longest
    ///first), ties broken alphabetically. The input word itself is included if it is in the
    ///dictionary, use [`JumbleModel::solve_jumble_with`] to exclude it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use jumble::*;
    /// # use jumble::test::*;
    /// let model = get_test_model();
    /// let matches = model.solve_jumble("bat").unwrap();
    /// assert_eq!(matches, vec!["bat", "tab", "at", "a", "b", "t"]);
    /// ```
    pub fn solve_jumble(&self, raw: &str) -> Result<Vec<&str>, InvalidInputError> {
        self.solve_jumble_with(raw, &SolveParams::default())
    }

    ///Like [`JumbleModel::solve_jumble`] but with explicit parameters
    pub fn solve_jumble_with(
        &self,
        raw: &str,
        params: &SolveParams,
    ) -> Result<Vec<&str>, InvalidInputError> {
        let input = normalize(raw)?;
        let mut matches = self.match_unordered(&input, params.hash_max_len);
        if !params.include_self_match {
            matches.retain(|word| *word != input);
        }
        order_matches(&mut matches);
        Ok(matches)
    }

    ///Strategy dispatch on an already-normalized input
    fn match_unordered(&self, input: &str, hash_max_len: usize) -> Vec<&str> {
        if input.len() < hash_max_len {
            if self.debug {
                eprintln!("(solving {} with the fingerprint strategy)", input);
            }
            self.match_by_hash(input)
        } else {
            if self.debug {
                eprintln!("(solving {} with the histogram strategy)", input);
            }
            self.match_by_hist(input)
        }
    }

    fn match_by_hash(&self, input: &str) -> Vec<&str> {
        let input_hash = input.anahash();
        let mut matches = Vec::new();
        for (i, word) in self.words.iter().enumerate() {
            if word.len() <= input.len() && input_hash.contains(&self.fingerprints[i]) {
                matches.push(word.as_str());
            }
        }
        matches
    }

    fn match_by_hist(&self, input: &str) -> Vec<&str> {
        let input_histogram = input.histogram();
        let mut matches = Vec::new();
        for (i, word) in self.words.iter().enumerate() {
            if word.len() <= input.len()
                && self.histograms[i]
                    .iter()
                    .zip(input_histogram.iter())
                    .all(|(wordcount, inputcount)| wordcount <= inputcount)
            {
                matches.push(word.as_str());
            }
        }
        matches
    }
}

impl Default for JumbleModel {
    fn default() -> Self {
        Self::new()
    }
}

///Sort matches by word length, longest first; ties are broken by ascending lexicographic order.
///Deterministic regardless of the dictionary order the matches were gathered in.
pub fn order_matches(matches: &mut Vec<&str>) {
    matches.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
}
