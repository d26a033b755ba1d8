//! Reversible escaping of arbitrary text into line-safe token payloads.
//!
//! TOON token lines are delimited by newlines and use `=` to separate the
//! token tag from its payload, so neither may appear literally inside an
//! escaped payload. [`escape`] neutralizes both, plus every character that
//! could corrupt a token line (quotes, C0 control characters, the Unicode
//! line/paragraph separators), each with a distinct backslash sequence.
//!
//! The invariant callers rely on: `unescape(escape(s)) == s` for every `s`,
//! and `escape(s)` never contains a literal `=` or line break.

/// Escape a string into a line-safe payload.
///
/// Single left-to-right pass; the backslash is handled by the same match arm
/// as every other character, so markers introduced for one character can
/// never be re-escaped or confused with a later substitution.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            '"' => out.push_str("\\\""),
            '=' => out.push_str("\\="),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

/// Decode an escaped payload back to the original string.
///
/// `\uXXXX` sequences are decoded before the single-character escapes are
/// considered, so a payload like `\u005c` cannot be mistaken for the start
/// of another escape. Unknown sequences and a trailing lone backslash pass
/// through literally.
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('u') => {
                let mut hex = String::with_capacity(4);
                for _ in 0..4 {
                    match chars.peek() {
                        Some(h) if h.is_ascii_hexdigit() => {
                            hex.push(*h);
                            chars.next();
                        }
                        _ => break,
                    }
                }
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) if hex.len() == 4 => out.push(decoded),
                    _ => {
                        // Malformed unicode escape: keep it verbatim
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('=') => out.push('='),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_structural_characters() {
        assert_eq!(escape("a=b"), "a\\=b");
        assert_eq!(escape("line1\nline2"), "line1\\nline2");
        assert_eq!(escape("tab\there"), "tab\\there");
        assert_eq!(escape("say \"hi\""), "say \\\"hi\\\"");
    }

    #[test]
    fn escapes_backslash_without_double_escaping() {
        assert_eq!(escape("C:\\path\\to"), "C:\\\\path\\\\to");
        assert_eq!(escape("\\n"), "\\\\n");
        assert_eq!(unescape("\\\\n"), "\\n");
    }

    #[test]
    fn escapes_control_and_separator_chars() {
        assert_eq!(escape("\u{0001}"), "\\u0001");
        assert_eq!(escape("\u{001f}"), "\\u001f");
        assert_eq!(escape("\0"), "\\0");
        assert_eq!(escape("\u{2028}"), "\\u2028");
        assert_eq!(escape("\u{2029}"), "\\u2029");
    }

    #[test]
    fn escaped_output_is_line_safe() {
        let nasty = "a=b\nc\rd\u{2028}e\u{0007}";
        let escaped = escape(nasty);
        assert!(!escaped.contains('='));
        assert!(!escaped.contains('\n'));
        assert!(!escaped.contains('\r'));
        assert!(!escaped.contains('\u{2028}'));
    }

    #[test]
    fn roundtrips() {
        for s in [
            "",
            "plain",
            "a=b=c",
            "multi\nline\r\n",
            "C:\\Users\\test",
            "emoji 🎉 and 中文",
            "quote \" backslash \\ equals = nul \0",
            "\u{2028}\u{2029}\u{0001}\u{001f}",
            "\\u0041 literal escape text",
        ] {
            assert_eq!(unescape(&escape(s)), s, "roundtrip failed for {s:?}");
        }
    }

    #[test]
    fn unescape_passes_unknown_sequences_through() {
        assert_eq!(unescape("\\x"), "\\x");
        assert_eq!(unescape("trailing\\"), "trailing\\");
        assert_eq!(unescape("\\uZZZZ"), "\\uZZZZ");
        assert_eq!(unescape("\\u12"), "\\u12");
    }
}
