pub(crate) fn normalize_course_code(value: &str) -> String {
    let collapsed = strip_and_collapse(value);
    collapsed.to_ascii_uppercase()
}

pub(crate) fn normalize_review_text(value: &str) -> String {
    let collapsed = strip_and_collapse(value);
    collapsed.to_ascii_lowercase()
}

/// Exports frequently carry BOMs and zero-width characters; strip those and
/// collapse runs of whitespace before case-folding.
fn strip_and_collapse(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_codes_are_uppercased_and_collapsed() {
        assert_eq!(normalize_course_code("\u{feff} rust-101 \t advanced "), "RUST-101 ADVANCED");
    }

    #[test]
    fn review_text_is_lowercased_and_collapsed() {
        assert_eq!(
            normalize_review_text("  Video   KEEPS\nfreezing\u{200b} "),
            "video keeps freezing"
        );
    }
}
