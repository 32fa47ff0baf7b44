/// Characters that are illegal in filenames on at least one platform,
/// plus `^` and `#`, which break Obsidian wiki-links.
const ILLEGAL: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|', '^', '#'];

/// Default cap on derived note titles, in characters.
pub const MAX_TITLE_LEN: usize = 100;

const TRUNCATION_MARKER: &str = "...";

/// Build the display title for a note: prefix + title, truncated to
/// `max_len` characters with a trailing marker when it overflows.
pub fn note_title(title: &str, prefix: &str, max_len: usize) -> String {
    let full = format!("{}{}", prefix, title);

    if full.chars().count() <= max_len {
        return full;
    }

    let truncated: String = full.chars().take(max_len).collect();
    format!("{}{}", truncated, TRUNCATION_MARKER)
}

/// Replace every filename-illegal character with `substitute`.
///
/// Idempotent: sanitizing an already-sanitized name is a no-op. A
/// substitute that is itself illegal falls back to `.` so the guarantee
/// holds for any input.
pub fn sanitize(name: &str, substitute: char) -> String {
    let substitute = if ILLEGAL.contains(&substitute) {
        '.'
    } else {
        substitute
    };

    name.chars()
        .map(|c| if ILLEGAL.contains(&c) { substitute } else { c })
        .collect()
}

/// Derive the sanitized `.md` filename for a note.
pub fn note_filename(title: &str, prefix: &str) -> String {
    let derived = note_title(title, prefix, MAX_TITLE_LEN);
    sanitize(&format!("{}.md", derived), '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_replaces_illegal_characters() {
        assert_eq!(sanitize("a/b:c", '.'), "a.b.c");
        assert_eq!(sanitize(r#"w\x*y?z"<>|"#, '_'), "w_x_y_z____");
        assert_eq!(sanitize("C# and ^caret", '.'), "C. and .caret");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let inputs = ["Video. Rust: 2024 | part 1", "plain title", "a/b\\c#d"];
        for input in inputs {
            let once = sanitize(input, '.');
            assert_eq!(sanitize(&once, '.'), once);
        }
    }

    #[test]
    fn test_illegal_substitute_falls_back() {
        let sanitized = sanitize("a/b", '/');
        assert_eq!(sanitized, "a.b");
        assert_eq!(sanitize(&sanitized, '/'), sanitized);
    }

    #[test]
    fn test_note_title_prefix_and_truncation() {
        assert_eq!(note_title("Short", "Video. ", 100), "Video. Short");

        let long = "x".repeat(200);
        let derived = note_title(&long, "Video. ", 100);
        assert_eq!(derived.chars().count(), 103);
        assert!(derived.ends_with("..."));
    }

    #[test]
    fn test_note_filename() {
        assert_eq!(
            note_filename("Rust: zero to hero", "Video. "),
            "Video. Rust. zero to hero.md"
        );
    }
}
