use crate::error::LoadError;
use std::fs;
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block.
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Folds accented letters to their base letter and lowercases the result.
#[must_use]
pub fn to_ascii_word(token: &str) -> String {
    token
        .nfd()
        .filter(|&c| !is_combining_mark(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Splits on runs of CR/LF. A leading or trailing break yields an empty
/// first or last entry; blank lines in between collapse into one break.
fn split_entries(data: &str) -> Vec<&str> {
    let is_break = |c: char| c == '\r' || c == '\n';
    let mut entries: Vec<&str> = data.split(is_break).filter(|t| !t.is_empty()).collect();
    if data.is_empty() || data.starts_with(is_break) {
        entries.insert(0, "");
    }
    if data.ends_with(is_break) {
        entries.push("");
    }
    entries
}

/// Builds the ordered dictionary from newline-delimited text.
///
/// # Errors
///
/// Returns [`LoadError::EmptyWord`] for the first entry that is empty after
/// normalization, with its zero-based position and the total entry count.
pub fn load_wordbank_from_str(data: &str) -> Result<Vec<String>, LoadError> {
    let words: Vec<String> = split_entries(data).into_iter().map(to_ascii_word).collect();
    if let Some(position) = words.iter().position(String::is_empty) {
        return Err(LoadError::EmptyWord {
            position,
            total: words.len(),
        });
    }
    log::info!("Loaded {} words", words.len());
    Ok(words)
}

/// # Errors
///
/// Fails if the file cannot be read or contains an empty entry.
pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
    let data = fs::read_to_string(path)?;
    load_wordbank_from_str(&data)
}
