use pest::{Parser, iterators::Pair};
use pest_derive::Parser;
use tracing::{trace, warn};

use crate::error::MacroError;
use crate::token::Token;

#[derive(Parser)]
#[grammar = "src/macro.pest"]
pub struct MacroParser;

/// Directive key reserved for timing directives
pub const WAIT_KEY: &str = "wait";

/// Duration of a `<wait>` directive with no argument
pub const DEFAULT_WAIT: u32 = 1;

impl MacroParser {
    /// Scan one line into tokens, merging runs of bare characters into
    /// string tokens.
    pub fn scan(line: &str) -> Result<Vec<Token<'_>>, MacroError> {
        let Some(line_pair) = MacroParser::parse(Rule::line, line)
            .map_err(Box::new)?
            .next()
        else {
            return Ok(Vec::new());
        };

        let mut tokens = Vec::new();
        // Byte range of the bare run not yet emitted
        let mut run: Option<(usize, usize)> = None;

        for pair in line_pair.into_inner() {
            let span = pair.as_span();
            if pair.as_rule() == Rule::bare {
                let start = run.map_or(span.start(), |(start, _)| start);
                run = Some((start, span.end()));
                continue;
            }

            if let Some((start, end)) = run.take() {
                tokens.push(Token::text(&line[start..end]));
            }
            if let Some(token) = Self::lex_pair(pair) {
                tokens.push(token);
            }
        }

        if let Some((start, end)) = run {
            tokens.push(Token::text(&line[start..end]));
        }

        Ok(tokens)
    }

    fn lex_pair(pair: Pair<'_, Rule>) -> Option<Token<'_>> {
        match pair.as_rule() {
            Rule::command => {
                let raw = pair.as_str();
                let name = pair.into_inner().next()?.as_str();
                Some(Token::command(name, raw))
            }
            Rule::quoted => {
                let raw = pair.as_str();
                let value = pair.into_inner().next().map_or("", |p| p.as_str());
                Some(Token::string(value, raw))
            }
            Rule::directive => Self::lex_directive(pair),
            Rule::blank => Some(Token::whitespace(pair.as_str())),
            _ => None,
        }
    }

    fn lex_directive(pair: Pair<'_, Rule>) -> Option<Token<'_>> {
        let raw = pair.as_str();
        let mut inner = pair.into_inner();
        let key = inner.next()?.as_str();
        let value = inner.next().map(|p| p.as_str());

        if key == WAIT_KEY {
            Some(Token::wait(value.map_or(DEFAULT_WAIT, round_wait), raw))
        } else {
            Some(Token::placeholder(key, value, raw))
        }
    }
}

/// Tokenize one line of macro text.
///
/// Never fails: malformed quotes and directives fall through to bare text.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    match MacroParser::scan(line) {
        Ok(tokens) => {
            trace!(line, count = tokens.len(), "tokenized line");
            tokens
        }
        Err(err) => {
            warn!(line, %err, "scan failed, treating line as plain text");
            if line.is_empty() {
                Vec::new()
            } else {
                vec![Token::text(line)]
            }
        }
    }
}

/// Read a wait argument as a decimal prefix and round half up.
///
/// Anything without a leading number reads as 0. The float-to-int cast
/// saturates, so negative durations clamp to 0 and `Infinity` to `u32::MAX`.
pub fn round_wait(value: &str) -> u32 {
    let number = MacroParser::parse(Rule::wait_arg, value)
        .ok()
        .and_then(|mut pairs| pairs.next())
        .and_then(|pair| pair.into_inner().next())
        .and_then(|decimal| decimal.as_str().parse::<f64>().ok());

    match number {
        Some(number) => (number + 0.5).floor() as u32,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;
    use rstest::rstest;

    fn kinds<'a>(tokens: &[Token<'a>]) -> Vec<TokenKind<'a>> {
        tokens.iter().map(|t| t.kind.clone()).collect()
    }

    #[test]
    fn test_tokenize_empty_line() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_command_with_args() {
        let tokens = tokenize("/아이콘 \"내 초코보\" 탈것");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Command { value: "아이콘" },
                TokenKind::Whitespace,
                TokenKind::String { value: "내 초코보" },
                TokenKind::Whitespace,
                TokenKind::String { value: "탈것" },
            ]
        );
        assert_eq!(tokens[0].raw, "/아이콘");
        assert_eq!(tokens[2].raw, "\"내 초코보\"");
    }

    #[test]
    fn test_tokenize_bare_text_is_merged() {
        let tokens = tokenize("안녕하세요 저는");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], Token::text("안녕하세요"));
        assert_eq!(tokens[1], Token::whitespace(" "));
        assert_eq!(tokens[2], Token::text("저는"));
    }

    #[test]
    fn test_tokenize_command_only_at_line_start() {
        let tokens = tokenize("a /b");
        assert_eq!(tokens[2], Token::text("/b"));

        let tokens = tokenize(" /b");
        assert_eq!(tokens[0], Token::whitespace(" "));
        assert_eq!(tokens[1], Token::text("/b"));
    }

    #[test]
    fn test_tokenize_lone_slash_is_text() {
        let tokens = tokenize("/ x");
        assert_eq!(tokens[0], Token::text("/"));
    }

    #[test]
    fn test_tokenize_placeholder() {
        let tokens = tokenize("<me><target.기본값>");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Placeholder {
                    key: "me",
                    value: None
                },
                TokenKind::Placeholder {
                    key: "target",
                    value: Some("기본값")
                },
            ]
        );
        assert_eq!(tokens[1].raw, "<target.기본값>");
    }

    #[test]
    fn test_tokenize_placeholder_value_keeps_dots() {
        let tokens = tokenize("<a.b.c>");
        assert_eq!(
            tokens[0].kind,
            TokenKind::Placeholder {
                key: "a",
                value: Some("b.c")
            }
        );
    }

    #[test]
    fn test_tokenize_wait_directive() {
        let tokens = tokenize("<wait><wait.3>");
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Wait { value: 1 }, TokenKind::Wait { value: 3 }]
        );
    }

    #[test]
    fn test_tokenize_unterminated_quote_is_text() {
        let tokens = tokenize("\"abc");
        assert_eq!(tokens, vec![Token::text("\"abc")]);
    }

    #[test]
    fn test_tokenize_empty_quotes() {
        let tokens = tokenize("\"\"");
        assert_eq!(tokens, vec![Token::string("", "\"\"")]);
    }

    #[test]
    fn test_tokenize_malformed_directive_is_text() {
        assert_eq!(tokenize("<abc"), vec![Token::text("<abc")]);
        assert_eq!(tokenize("<>"), vec![Token::text("<>")]);
        assert_eq!(tokenize("<wait.>"), vec![Token::text("<wait.>")]);
    }

    #[test]
    fn test_tokenize_bare_text_around_directive() {
        let tokens = tokenize("a<me>b");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], Token::text("a"));
        assert_eq!(tokens[2], Token::text("b"));
    }

    #[test]
    fn test_tokenize_reproduces_line() {
        let line = "/기술시전 \"단체 질주\" <wait.1> 끝<t>  \"열린";
        let rebuilt: String = tokenize(line).iter().map(ToString::to_string).collect();
        assert_eq!(rebuilt, line);
    }

    #[test]
    fn test_tokenize_byte_order_mark_is_whitespace() {
        let tokens = tokenize("a\u{feff}b");
        assert_eq!(
            tokens,
            vec![
                Token::text("a"),
                Token::whitespace("\u{feff}"),
                Token::text("b"),
            ]
        );
    }

    #[test]
    fn test_tokenize_next_line_is_text() {
        assert_eq!(tokenize("a\u{85}b"), vec![Token::text("a\u{85}b")]);
    }

    #[test]
    fn test_tokenize_unicode_spaces() {
        let tokens = tokenize("/인사\u{3000}\u{a0}탈것");
        assert_eq!(tokens[0], Token::command("인사", "/인사"));
        assert_eq!(tokens[1], Token::whitespace("\u{3000}\u{a0}"));
        assert_eq!(tokens[2], Token::text("탈것"));

        // command heads stop at a byte order mark too
        assert_eq!(tokenize("/a\u{feff}")[0], Token::command("a", "/a"));
    }

    #[rstest]
    #[case("1", 1)]
    #[case("5.3", 5)]
    #[case("7.5", 8)]
    #[case("0.49", 0)]
    #[case("2.5", 3)]
    #[case(" 4", 4)]
    #[case("5.3.1", 5)]
    #[case("3초", 3)]
    #[case(".5", 1)]
    #[case("2.", 2)]
    #[case("1e1", 10)]
    #[case("-3", 0)]
    #[case("abc", 0)]
    #[case("1e20", u32::MAX)]
    #[case("Infinity", u32::MAX)]
    #[case("+Infinity초", u32::MAX)]
    #[case("-Infinity", 0)]
    #[case("infinity", 0)]
    #[case("\u{feff}\u{3000}6", 6)]
    fn test_round_wait(#[case] value: &str, #[case] expected: u32) {
        assert_eq!(round_wait(value), expected);
    }
}
