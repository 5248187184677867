use std::fmt::{self, Display, Formatter};

use crate::error::{Error, Result};

/// One `key=value` argument of a `set` command. `value` keeps its quoting
/// exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub key: String,
    pub value: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unquoted,
    Quoted,
}

/// Return true when `command` is a `set` on the menu itself.
///
/// The first word must be the `set` verb. A first argument that is not
/// `key=value` (`[ find ... ]`, a numeric index, an item name) selects one
/// item of the menu, so such lines are not menu settings.
pub fn is_menu_set(command: &str) -> bool {
    let mut words = command.split_whitespace();
    if words.next() != Some("set") {
        return false;
    }
    match words.next() {
        None => true,
        Some(first) => !first.starts_with('[') && first.contains('='),
    }
}

/// Split the arguments of a `set` command into ordered tokens.
///
/// Whitespace separates tokens except inside double quotes, where a
/// backslash escapes the next character.
pub fn tokenize_set(command: &str) -> Result<Vec<Token>> {
    let args = command
        .trim_start()
        .strip_prefix("set")
        .ok_or_else(|| Error::malformed(command, "not a set command"))?;

    split_words(command, args)?
        .into_iter()
        .map(|word| parse_token(command, word))
        .collect()
}

fn split_words(command: &str, args: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut state = State::Unquoted;
    let mut chars = args.chars();

    while let Some(ch) = chars.next() {
        match state {
            State::Unquoted if ch.is_whitespace() => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            State::Unquoted => {
                if ch == '"' {
                    state = State::Quoted;
                }
                current.push(ch);
            }
            State::Quoted => {
                current.push(ch);
                match ch {
                    '\\' => {
                        let escaped = chars.next().ok_or_else(|| {
                            Error::malformed(command, "dangling escape inside quoted value")
                        })?;
                        current.push(escaped);
                    }
                    '"' => state = State::Unquoted,
                    _ => {}
                }
            }
        }
    }

    if state == State::Quoted {
        return Err(Error::malformed(command, "unterminated quote"));
    }
    if !current.is_empty() {
        words.push(current);
    }
    Ok(words)
}

fn parse_token(command: &str, word: String) -> Result<Token> {
    match word.split_once('=') {
        Some((key, value)) if !key.is_empty() && !key.contains('"') => Ok(Token {
            key: key.to_string(),
            value: value.to_string(),
        }),
        _ => Err(Error::malformed(
            command,
            format!("expected key=value, found '{word}'"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::{is_menu_set, tokenize_set, Token};
    use crate::error::Error;

    fn token(key: &str, value: &str) -> Token {
        Token {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn spaces_inside_quotes_do_not_split() {
        let tokens = tokenize_set(r#"set comment="edge router" disabled=no"#).expect("tokenize");
        assert_eq!(
            tokens,
            vec![token("comment", r#""edge router""#), token("disabled", "no")]
        );
    }

    #[test]
    fn escaped_quote_stays_inside_value() {
        let tokens = tokenize_set(r#"set comment="say \"hi\" now""#).expect("tokenize");
        assert_eq!(tokens, vec![token("comment", r#""say \"hi\" now""#)]);
    }

    #[test]
    fn repeated_whitespace_and_empty_values() {
        let tokens = tokenize_set("set   a=1 \t b=").expect("tokenize");
        assert_eq!(tokens, vec![token("a", "1"), token("b", "")]);
    }

    #[test]
    fn unterminated_quote_is_malformed() {
        let err = tokenize_set(r#"set comment="open"#).expect_err("should fail");
        assert!(matches!(err, Error::MalformedCommand { .. }));
        assert!(err.to_string().contains("unterminated quote"));
    }

    #[test]
    fn bare_word_is_malformed() {
        let err = tokenize_set("set 0 name=x").expect_err("should fail");
        assert!(err.to_string().contains("expected key=value"));
    }

    #[test]
    fn verb_detection_requires_whole_word() {
        assert!(is_menu_set("set a=1"));
        assert!(is_menu_set("  set a=1"));
        assert!(!is_menu_set("setting a=1"));
        assert!(!is_menu_set("add name=x"));
    }

    #[test]
    fn item_selectors_are_not_menu_sets() {
        assert!(!is_menu_set("set [ find default-name=wlan1 ] ssid=A"));
        assert!(!is_menu_set("set [find name=ether1] disabled=no"));
        assert!(!is_menu_set("set 0 name=x"));
        assert!(!is_menu_set("set ether1 mtu=1500"));
        assert!(is_menu_set(r#"set comment="a [b]" x=1"#));
    }
}
