//! Leaf text post-processing

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::config::RenderOptions;

/// Strip diacritics: decompose, then drop combining marks
pub fn remove_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Apply the configured case folding and accent stripping
pub fn post_process(text: String, options: &RenderOptions) -> String {
    if !options.transforms_text() {
        return text;
    }
    let text = if options.remove_accents {
        remove_accents(&text)
    } else {
        text
    };
    if options.uppercase {
        text.to_uppercase()
    } else {
        text
    }
}
