//! JSON syntax highlighting
//!
//! A lexical pass over serialized JSON text. Every input byte ends up in
//! exactly one token, so concatenating the token texts yields the input.

/// Token classes used for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Object key, including the trailing colon
    Key,
    Str,
    Bool,
    Null,
    Number,
    /// Punctuation and whitespace
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

/// Split JSON text into styled tokens
pub fn highlight(text: &str) -> Vec<Token> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let matched = match bytes[i] {
            b'"' => Some(scan_string(bytes, i)),
            b't' | b'f' | b'n' if at_word_start(bytes, i) => scan_literal(bytes, i),
            b'-' | b'0'..=b'9' => scan_number(bytes, i).map(|end| (end, TokenKind::Number)),
            _ => None,
        };

        match matched {
            Some((end, kind)) => {
                if plain_start < i {
                    push(&mut tokens, TokenKind::Plain, &text[plain_start..i]);
                }
                push(&mut tokens, kind, &text[i..end]);
                i = end;
                plain_start = end;
            }
            None => i += 1,
        }
    }

    if plain_start < bytes.len() {
        push(&mut tokens, TokenKind::Plain, &text[plain_start..]);
    }
    tokens
}

fn push(tokens: &mut Vec<Token>, kind: TokenKind, text: &str) {
    tokens.push(Token {
        kind,
        text: text.to_string(),
    });
}

fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn at_word_start(bytes: &[u8], i: usize) -> bool {
    i == 0 || !is_word(bytes[i - 1])
}

/// String starting at `start` (a quote). A string followed by optional
/// whitespace and a colon is a key and swallows the colon.
fn scan_string(bytes: &[u8], start: usize) -> (usize, TokenKind) {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => {
                i += 1;
                break;
            }
            _ => i += 1,
        }
    }
    let end = i.min(bytes.len());

    let mut j = end;
    while j < bytes.len() && bytes[j].is_ascii_whitespace() {
        j += 1;
    }
    if j < bytes.len() && bytes[j] == b':' {
        (j + 1, TokenKind::Key)
    } else {
        (end, TokenKind::Str)
    }
}

fn scan_literal(bytes: &[u8], start: usize) -> Option<(usize, TokenKind)> {
    const LITERALS: &[(&[u8], TokenKind)] = &[
        (b"true", TokenKind::Bool),
        (b"false", TokenKind::Bool),
        (b"null", TokenKind::Null),
    ];
    LITERALS.iter().find_map(|(word, kind)| {
        let end = start + word.len();
        let fits = bytes.get(start..end) == Some(*word);
        let bounded = bytes.get(end).map_or(true, |b| !is_word(*b));
        (fits && bounded).then_some((end, *kind))
    })
}

/// `-?\d+(\.\d*)?([eE][+-]?\d+)?`
fn scan_number(bytes: &[u8], start: usize) -> Option<usize> {
    let digits = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = start;
    if bytes[i] == b'-' {
        i += 1;
    }
    let int_end = digits(i);
    if int_end == i {
        return None;
    }
    i = int_end;

    if i < bytes.len() && bytes[i] == b'.' {
        i = digits(i + 1);
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_end = digits(j);
        if exp_end > j {
            i = exp_end;
        }
    }
    Some(i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn kinds(text: &str) -> Vec<(TokenKind, String)> {
        highlight(text)
            .into_iter()
            .filter(|t| t.kind != TokenKind::Plain)
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn test_classifies_tokens() {
        let got = kinds(r#"{"id": 5, "ok": true, "gone": null, "name": "x", "r": -1.5e3}"#);
        assert_eq!(
            got,
            vec![
                (TokenKind::Key, "\"id\":".to_string()),
                (TokenKind::Number, "5".to_string()),
                (TokenKind::Key, "\"ok\":".to_string()),
                (TokenKind::Bool, "true".to_string()),
                (TokenKind::Key, "\"gone\":".to_string()),
                (TokenKind::Null, "null".to_string()),
                (TokenKind::Key, "\"name\":".to_string()),
                (TokenKind::Str, "\"x\"".to_string()),
                (TokenKind::Key, "\"r\":".to_string()),
                (TokenKind::Number, "-1.5e3".to_string()),
            ]
        );
    }

    #[test]
    fn test_escaped_quotes_stay_in_string() {
        let got = kinds(r#"["a\"b: 1"]"#);
        assert_eq!(got, vec![(TokenKind::Str, r#""a\"b: 1""#.to_string())]);
    }

    #[test]
    fn test_digits_inside_strings_are_not_numbers() {
        let got = kinds(r#"{"k2": "v3"}"#);
        assert_eq!(got.len(), 2);
        assert!(got.iter().all(|(k, _)| *k != TokenKind::Number));
    }

    #[test]
    fn test_pretty_output_preserved() {
        let text = serde_json::to_string_pretty(&json!({"a": [1, {"b": "ü"}]})).unwrap();
        let joined: String = highlight(&text).into_iter().map(|t| t.text).collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn test_unterminated_string() {
        let joined: String = highlight("\"abc").into_iter().map(|t| t.text).collect();
        assert_eq!(joined, "\"abc");
    }

    proptest! {
        #[test]
        fn prop_text_is_never_altered(text in "\\PC{0,80}") {
            let joined: String = highlight(&text).into_iter().map(|t| t.text).collect();
            prop_assert_eq!(joined, text);
        }
    }
}
