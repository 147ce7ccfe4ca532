//! # Input Normalization
//!
//! File: cli/src/assistant/normalize.rs
//!
//! Users type accented Spanish ("currículo", "EduCréditos") while triggers are
//! written as plain ASCII roots. Before matching, text is lower-cased,
//! decomposed to NFD and stripped of combining marks, so "Cuántos" becomes
//! "cuantos" and "ñ" becomes "n".
//!
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lower-cases `text` and removes diacritics.
///
/// ```rust
/// use educirculos::assistant::normalize;
///
/// assert_eq!(normalize("¿Cuántos EduCréditos?"), "¿cuantos educreditos?");
/// ```
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}
