//! Decoding of quoted string literals.

/// Decode a single- or double-quoted literal to its runtime value.
///
/// Returns `None` for double-quoted strings that interpolate variables:
/// their value is not known statically.
pub fn decode_string_literal(text: &str) -> Option<String> {
    let quote = text.chars().next()?;
    if !matches!(quote, '\'' | '"') || text.len() < 2 || !text.ends_with(quote) {
        return None;
    }
    let inner = &text[1..text.len() - 1];
    match quote {
        '\'' => Some(unescape_single(inner)),
        '"' => unescape_double(inner),
        _ => None,
    }
}

/// Single quotes only recognise `\\` and `\'`.
fn unescape_single(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(next @ ('\\' | '\'')) => out.push(next),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn unescape_double(content: &str) -> Option<String> {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '$' => {
                if chars
                    .peek()
                    .is_some_and(|&n| n == '{' || n == '_' || n.is_alphabetic())
                {
                    return None;
                }
                out.push('$');
            }
            '{' if chars.peek() == Some(&'$') => return None,
            '\\' => match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some('v') => out.push('\u{0B}'),
                Some('e') => out.push('\u{1B}'),
                Some('f') => out.push('\u{0C}'),
                Some(next @ ('\\' | '$' | '"')) => out.push(next),
                Some(d @ '0'..='7') => {
                    let mut value = d.to_digit(8).unwrap_or(0);
                    for _ in 0..2 {
                        match chars.peek().and_then(|n| n.to_digit(8)) {
                            Some(digit) => {
                                value = value * 8 + digit;
                                chars.next();
                            }
                            None => break,
                        }
                    }
                    out.push(char::from_u32(value & 0xFF).unwrap_or('\u{FFFD}'));
                }
                Some('x') if chars.peek().is_some_and(char::is_ascii_hexdigit) => {
                    let mut value = 0;
                    for _ in 0..2 {
                        match chars.peek().and_then(|n| n.to_digit(16)) {
                            Some(digit) => {
                                value = value * 16 + digit;
                                chars.next();
                            }
                            None => break,
                        }
                    }
                    out.push(char::from_u32(value).unwrap_or('\u{FFFD}'));
                }
                Some('u') if chars.peek() == Some(&'{') => {
                    chars.next();
                    let hex: String = chars.by_ref().take_while(|&n| n != '}').collect();
                    let decoded = u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32);
                    out.push(decoded.unwrap_or('\u{FFFD}'));
                }
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            },
            _ => out.push(c),
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::decode_string_literal;

    #[test]
    fn single_quoted_keeps_unknown_escapes() {
        assert_eq!(decode_string_literal(r"'a\'b\\c\n'").as_deref(), Some("a'b\\c\\n"));
    }

    #[test]
    fn double_quoted_decodes_escapes() {
        assert_eq!(
            decode_string_literal(r#""tab\there\x41\101\u{1F600}""#).as_deref(),
            Some("tab\there\x41A\u{1F600}")
        );
    }

    #[test]
    fn interpolation_is_not_static() {
        assert_eq!(decode_string_literal(r#""hello $name""#), None);
        assert_eq!(decode_string_literal(r#""hello {$name}""#), None);
        assert_eq!(decode_string_literal(r#""cost: \$5""#).as_deref(), Some("cost: $5"));
        assert_eq!(decode_string_literal(r#""$ 5""#).as_deref(), Some("$ 5"));
    }

    #[test]
    fn malformed_literals_are_rejected() {
        assert_eq!(decode_string_literal("'"), None);
        assert_eq!(decode_string_literal("abc"), None);
    }
}
