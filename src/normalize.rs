/// Input normalization: NFKC + whitespace collapse.
///
/// Input: "  ＡＢＣ\t東京\r\n" → "ABC 東京"
use unicode_normalization::UnicodeNormalization;

/// Normalize raw text before segmentation.
///
/// Absent, empty and all-whitespace input yields an empty string. Otherwise the
/// text is NFKC-normalized, every run of Unicode whitespace becomes a single
/// ASCII space, and leading/trailing whitespace is trimmed.
pub fn normalize<'a>(input: impl Into<Option<&'a str>>) -> String {
    let input = match input.into() {
        Some(s) if !is_blank(s) => s,
        _ => return String::new(),
    };

    let mut out = String::with_capacity(input.len());
    let mut last_was_space = false;

    for ch in input.nfkc() {
        if ch.is_whitespace() {
            if !last_was_space {
                out.push(' ');
                last_was_space = true;
            }
            continue;
        }
        out.push(ch);
        last_was_space = false;
    }

    // Only ASCII spaces can remain at the edges.
    let trimmed = out.trim_matches(' ');
    if trimmed.len() == out.len() {
        out
    } else {
        trimmed.to_string()
    }
}

/// True for empty or whitespace-only text.
pub fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}
