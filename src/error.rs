use thiserror::Error;

///The input still contains a character outside a-z after normalization (trimming, case folding
///and diacritic stripping). Covers internal whitespace, digits and punctuation alike.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid input: {character:?} is not a letter, input must contain only letters a-z after normalization")]
pub struct InvalidInputError {
    pub character: char,
}

///Errors that can occur when loading a wordlist from file
#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("unable to read wordlist: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid word on line {line}: {source}")]
    InvalidWord {
        line: usize,
        source: InvalidInputError,
    },
}
