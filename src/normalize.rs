use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::InvalidInputError;

///Clean raw input into its canonical form: trimmed, diacritics stripped, lowercased. The result
///contains only the letters a-z; any other remaining character is a fatal input error. An empty
///result is valid (e.g. all-whitespace input).
///
/// # Examples
///
/// ```
/// # use jumble::normalize;
/// assert_eq!(normalize(" BaT ").unwrap(), "bat");
/// assert_eq!(normalize("déjàvu").unwrap(), "dejavu");
/// assert!(normalize("a b").is_err());
/// ```
pub fn normalize(raw: &str) -> Result<String, InvalidInputError> {
    let mut result = String::with_capacity(raw.len());
    //NFD decomposition splits accented letters into base letter + combining marks,
    //so dropping the marks strips the diacritics
    for c in raw.trim().nfd() {
        if is_combining_mark(c) {
            continue;
        }
        for lower in c.to_lowercase() {
            if lower.is_ascii_lowercase() {
                result.push(lower);
            } else {
                return Err(InvalidInputError { character: lower });
            }
        }
    }
    Ok(result)
}
