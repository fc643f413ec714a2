/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 22/10/25
******************************************************************************/

//! Password generation for mailbox secrets
//!
//! The PDD API expects passwords and secret answers as plain strings; this
//! module produces statistically uniform filler values for those fields.
//! The generator is not meant for real credential security and uses the
//! thread-local `rand` source, not a CSPRNG-backed keystore.

use crate::constants::{
    DEFAULT_PASSWORD_LENGTH, DEFAULT_PASSWORD_SETS, HINT_ANSWER_PREFIX, PASSWORD_SET_DIGITS,
    PASSWORD_SET_LOWER, PASSWORD_SET_SYMBOLS, PASSWORD_SET_UPPER,
};
use crate::error::AppError;
use rand::seq::{IndexedRandom, SliceRandom};

/// Generates a random password from the requested character classes
///
/// Set codes in `available_sets`: `l` lowercase, `u` uppercase, `d` digits,
/// `s` symbols. Ambiguous characters (`i`, `l`, `o`, `I`, `L`, `O`, `0`,
/// `1`) are never produced. Unknown codes are ignored. The result contains
/// at least one character from every selected set; the remainder is drawn
/// uniformly from the union of the selected sets and the whole string is
/// shuffled.
///
/// # Arguments
///
/// * `length` - Number of password characters (dashes excluded)
/// * `add_dashes` - Group the output into dash-separated chunks of
///   `floor(sqrt(length))` characters
/// * `available_sets` - Character-set selector, e.g. `"luds"` or `"ld"`
///
/// # Returns
///
/// * `Ok(String)` - The generated password
/// * `Err(AppError::InvalidArgument)` - No recognized set codes, or `length`
///   is smaller than the number of selected sets
///
/// # Examples
/// ```
/// use pdd_client::utils::password::generate_password;
///
/// let password = generate_password(9, false, "luds").unwrap();
/// assert_eq!(password.len(), 9);
/// ```
pub fn generate_password(
    length: usize,
    add_dashes: bool,
    available_sets: &str,
) -> Result<String, AppError> {
    let sets = selected_sets(available_sets);
    if sets.is_empty() {
        return Err(AppError::InvalidArgument(format!(
            "no recognized character sets in {available_sets:?}"
        )));
    }
    if length < sets.len() {
        return Err(AppError::InvalidArgument(format!(
            "length {length} is smaller than the {} selected character sets",
            sets.len()
        )));
    }

    let password = fill_from_sets(length, &sets);
    if !add_dashes {
        return Ok(password);
    }

    let dash_len = (length as f64).sqrt().floor() as usize;
    let chars: Vec<char> = password.chars().collect();
    let grouped: Vec<String> = chars
        .chunks(dash_len)
        .map(|chunk| chunk.iter().collect())
        .collect();
    Ok(grouped.join("-"))
}

/// Generates the default secret answer used by mailbox autofill
///
/// The fixed prefix keeps the answer from ever matching a login.
pub(crate) fn random_hint_answer() -> String {
    let sets = selected_sets(DEFAULT_PASSWORD_SETS);
    format!(
        "{HINT_ANSWER_PREFIX}{}",
        fill_from_sets(DEFAULT_PASSWORD_LENGTH, &sets)
    )
}

/// Resolves set codes to their alphabets, ignoring unknown codes
fn selected_sets(available_sets: &str) -> Vec<&'static str> {
    let mut sets = Vec::new();
    if available_sets.contains('l') {
        sets.push(PASSWORD_SET_LOWER);
    }
    if available_sets.contains('u') {
        sets.push(PASSWORD_SET_UPPER);
    }
    if available_sets.contains('d') {
        sets.push(PASSWORD_SET_DIGITS);
    }
    if available_sets.contains('s') {
        sets.push(PASSWORD_SET_SYMBOLS);
    }
    sets
}

/// One guaranteed draw per set, uniform filler from the union, then shuffle
///
/// Callers must pass a non-empty `sets` with `length >= sets.len()`.
fn fill_from_sets(length: usize, sets: &[&str]) -> String {
    let mut rng = rand::rng();
    let mut chars: Vec<char> = Vec::with_capacity(length);
    let mut all: Vec<char> = Vec::new();

    for set in sets {
        let set_chars: Vec<char> = set.chars().collect();
        if let Some(c) = set_chars.choose(&mut rng) {
            chars.push(*c);
        }
        all.extend(set_chars);
    }
    while chars.len() < length {
        if let Some(c) = all.choose(&mut rng) {
            chars.push(*c);
        }
    }
    chars.shuffle(&mut rng);
    chars.into_iter().collect()
}
