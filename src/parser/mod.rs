//! Extraction helpers shared by the store and workshop resolvers.
//!
//! Remote pages are treated as loosely structured input: every helper returns
//! `Option` or a shape report instead of assuming an element is present.

use crate::constants::{
    DETAIL_LABEL_CLASS, DETAIL_VALUE_CLASS, STORE_TITLE_SUFFIX, WORKSHOP_TITLE_PREFIX,
};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("static selector"));
static DETAIL_LABEL_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(&format!(".{}", DETAIL_LABEL_CLASS)).expect("static selector")
});
static DETAIL_VALUE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(&format!(".{}", DETAIL_VALUE_CLASS)).expect("static selector")
});
// Sale banner, e.g. "Save 50% on "
static DISCOUNT_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Save [0-9]?[0-9]% on ").expect("static regex"));

/// Label/value lists on a workshop page did not line up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeMismatch {
    pub labels: usize,
    pub values: usize,
}

/// Right-panel details of a workshop page, already paired positionally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailPanel {
    /// `(normalized_label, value)` in page order.
    pub pairs: Vec<(String, String)>,
    /// Set when the two lists differed in length; pairs are truncated to the shorter one.
    pub mismatch: Option<ShapeMismatch>,
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Text of the document's `<title>`, if there is one.
pub fn page_title(document: &Html) -> Option<String> {
    document.select(&TITLE_SELECTOR).next().map(element_text)
}

pub fn detail_panel(document: &Html) -> DetailPanel {
    let labels: Vec<String> = document
        .select(&DETAIL_LABEL_SELECTOR)
        .map(element_text)
        .collect();
    let values: Vec<String> = document
        .select(&DETAIL_VALUE_SELECTOR)
        .map(element_text)
        .collect();

    let mismatch = (labels.len() != values.len()).then(|| ShapeMismatch {
        labels: labels.len(),
        values: values.len(),
    });

    let pairs = labels
        .iter()
        .zip(values)
        .map(|(label, value)| (normalize_label(label), value))
        .collect();

    DetailPanel { pairs, mismatch }
}

/// "File Size " -> "file_size"
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase().replace(' ', "_")
}

/// Strip the " on Steam" suffix and any leading sale banner from a store page title.
pub fn clean_game_title(title: &str) -> String {
    let title = title.strip_suffix(STORE_TITLE_SUFFIX).unwrap_or(title);
    DISCOUNT_PREFIX.replace(title, "").into_owned()
}

/// Strip the "Steam Workshop::" prefix from a workshop page title.
pub fn clean_mod_title(title: &str) -> String {
    title
        .strip_prefix(WORKSHOP_TITLE_PREFIX)
        .unwrap_or(title)
        .to_string()
}
