/// Make a filename fragment safe for use inside a storage key.
///
/// Apostrophes are dropped, letters/digits/`_`/`-` are kept, and everything else
/// (whitespace, control characters, path separators, URL-reserved punctuation)
/// becomes a single `-`. Leading and trailing dashes are trimmed. Case is preserved.
pub fn safe_string(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for c in input.chars() {
        if c == '\'' {
            continue;
        }

        let mapped = if c.is_alphanumeric() || c == '_' || c == '-' {
            c
        } else {
            '-'
        };

        if mapped == '-' && out.ends_with('-') {
            continue;
        }
        out.push(mapped);
    }

    out.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces_become_dashes() {
        assert_eq!(safe_string("My Report"), "My-Report");
        assert_eq!(safe_string("  lots   of   space  "), "lots-of-space");
    }

    #[test]
    fn test_separators_and_controls_removed() {
        assert_eq!(safe_string("../etc/passwd"), "etc-passwd");
        assert_eq!(safe_string("a\\b\tc\u{0}d\u{7f}e"), "a-b-c-d-e");
    }

    #[test]
    fn test_reserved_characters() {
        assert_eq!(safe_string("what?#[x]!$&()*+,;=%<>|^~\"{}`"), "what-x");
        assert_eq!(safe_string("it's"), "its");
        assert_eq!(safe_string("v1.2.3"), "v1-2-3");
    }

    #[test]
    fn test_unicode_letters_kept() {
        assert_eq!(safe_string("照片 01"), "照片-01");
        assert_eq!(safe_string("Café_Menu"), "Café_Menu");
    }

    #[test]
    fn test_nothing_safe_left() {
        assert_eq!(safe_string("///"), "");
        assert_eq!(safe_string(""), "");
    }
}
