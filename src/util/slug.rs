//! Slug derivation.
//!
//! A slug is the lowercase, hyphen-separated ASCII form of a title. Non-ASCII
//! characters are transliterated, so `"Café Déjà vu"` becomes `"cafe-deja-vu"`.

use rand::{distr::Alphanumeric, Rng};

/// Length of the random token appended to a taken slug.
pub const SUFFIX_LEN: usize = 6;

/// Converts a human-readable name into its base slug.
///
/// Returns an empty string when the name has no letters or digits.
pub fn slugify(name: &str) -> String {
    ::slug::slugify(name)
}

/// Builds the slug candidate for the given attempt.
///
/// Attempt 0 is the bare base slug; later attempts append `-` and a random
/// lowercase alphanumeric token, so every candidate starts with `"{base}-"` or
/// equals `base`.
pub fn candidate(base: &str, attempt: u32) -> String {
    if attempt == 0 {
        return base.to_string();
    }

    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();

    format!("{}-{}", base, suffix)
}
