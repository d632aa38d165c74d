//! Word tokenizer shared by the lexicon scorer and term statistics.

/// Split text into lower-cased word tokens.
///
/// A word is a run of alphanumeric characters, optionally joined by
/// apostrophes (`don't`, `prof's`). Typographic apostrophes are folded to
/// `'`; leading and trailing apostrophes are dropped.
#[must_use]
pub fn words(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        let ch = if matches!(ch, '\u{2019}' | '\u{2018}') {
            '\''
        } else {
            ch
        };

        if ch.is_alphanumeric() || (ch == '\'' && !current.is_empty()) {
            current.extend(ch.to_lowercase());
        } else {
            flush(&mut current, &mut out);
        }
    }
    flush(&mut current, &mut out);

    out
}

/// Split text into clauses at `,` `.` `;` `:` `!` `?`.
///
/// Empty clauses are dropped.
pub fn clauses(text: &str) -> impl Iterator<Item = &str> {
    text.split([',', '.', ';', ':', '!', '?'])
        .filter(|clause| !clause.trim().is_empty())
}

fn flush(current: &mut String, out: &mut Vec<String>) {
    let word = current.trim_end_matches('\'');
    if !word.is_empty() {
        out.push(word.to_string());
    }
    current.clear();
}
