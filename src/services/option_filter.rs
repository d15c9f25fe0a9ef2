use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::Label;

static YEAR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d\d\d\d").expect("YEAR_REGEX is a valid regex pattern"));

/// Whether the `text` contains a year (a run of four digits).
pub fn contains_year(text: &str) -> bool {
    YEAR_REGEX.is_match(text)
}

fn words(text: &str) -> BTreeSet<&str> {
    text.split_whitespace().collect()
}

/// Removes options that duplicate the `sought` one so that it stays unique.
///
/// With the options `"Steve Paul Jobs"`, `"Steve"`, `"Steve Wozniak"`, `"Steve Gary Wozniak"`,
/// `"Gil Steve"`, and `"Gil Amelio"`: seeking `"Steve Wozniak"` removes `"Steve"` and
/// `"Steve Gary Wozniak"`; seeking `"Steve"` removes every option containing the word `Steve`;
/// seeking `"Gil Amelio"` removes nothing. The `sought` option is always part of the result.
pub fn remove_duplicates(options: &[String], sought: &str) -> Vec<String> {
    let sought_words = words(sought);
    let mut kept: Vec<String> = options
        .iter()
        .filter(|option| {
            let option_words = words(option);
            option_words == sought_words
                || (!option_words.is_subset(&sought_words) && !option_words.is_superset(&sought_words))
        })
        .cloned()
        .collect();
    if !kept.iter().any(|option| option == sought) {
        kept.push(sought.to_string());
    }
    kept
}

/// Applies the per-label option rules for an `answer`: name-like labels lose options duplicating
/// the answer, and dates lose options lacking years unless `allow_sans_years`.
pub fn filter_options(
    options: &[String],
    answer: &str,
    label: Label,
    allow_sans_years: bool,
) -> Vec<String> {
    let mut filtered = if label.is_nameable() {
        remove_duplicates(options, answer)
    } else {
        options.to_vec()
    };
    if label == Label::Date && !allow_sans_years {
        filtered.retain(|option| option == answer || contains_year(option));
    }
    filtered
}
