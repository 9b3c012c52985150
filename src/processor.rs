use tracing::{debug, trace};

use crate::ast::{AstNode, AstRoot, Command, CommandArg, Placeholder, TextNode};
use crate::error::MacroError;
use crate::parser::tokenize;
use crate::token::{Token, TokenKind};

/// Parse one line's tokens into a root node.
///
/// Returns `Ok(None)` when nothing is left after the first `<wait>`
/// directive and everything following it is dropped.
pub fn parse<'a>(tokens: &[Token<'a>]) -> Result<Option<AstRoot<'a>>, MacroError> {
    let (tokens, wait) = split_wait(tokens);

    let Some((first, rest)) = tokens.split_first() else {
        return Ok(None);
    };

    let node = match first.kind {
        TokenKind::Command { value } => AstNode::Command(Command {
            name: value,
            args: command_args(rest)?,
        }),
        _ => AstNode::Text(text_nodes(tokens)),
    };

    Ok(Some(AstRoot { node, wait }))
}

/// Cut the tokens at the first wait directive, returning its duration.
fn split_wait<'t, 'a>(tokens: &'t [Token<'a>]) -> (&'t [Token<'a>], u32) {
    let first_wait = tokens.iter().enumerate().find_map(|(i, token)| match token.kind {
        TokenKind::Wait { value } => Some((i, value)),
        _ => None,
    });

    match first_wait {
        Some((index, wait)) => {
            trace!(index, wait, dropped = tokens.len() - index, "truncating at wait");
            (&tokens[..index], wait)
        }
        None => (tokens, 0),
    }
}

fn command_args<'a>(tokens: &[Token<'a>]) -> Result<Vec<CommandArg<'a>>, MacroError> {
    tokens
        .iter()
        .filter(|token| !token.is_whitespace())
        .map(|token| match token.kind {
            TokenKind::Placeholder { key, value } => {
                Ok(CommandArg::Placeholder(Placeholder { key, value }))
            }
            TokenKind::String { value } => Ok(CommandArg::Value { value }),
            TokenKind::Whitespace | TokenKind::Command { .. } | TokenKind::Wait { .. } => {
                Err(MacroError::UnexpectedToken {
                    kind: token.kind.name(),
                })
            }
        })
        .collect()
}

fn text_nodes<'a>(tokens: &[Token<'a>]) -> Vec<TextNode<'a>> {
    let mut nodes: Vec<TextNode<'a>> = Vec::with_capacity(tokens.len());

    for token in tokens {
        // Placeholders interrupt the text; everything else contributes its raw form
        if let TokenKind::Placeholder { key, value } = token.kind {
            nodes.push(TextNode::Placeholder(Placeholder { key, value }));
            continue;
        }

        match nodes.last_mut() {
            Some(TextNode::Text { value }) => value.push_str(token.raw),
            _ => nodes.push(TextNode::text(token.raw)),
        }
    }

    nodes
}

/// Split macro input into lines on `\n` or `\r\n`.
///
/// Empty input is a single empty line, and a trailing line break leaves a
/// trailing empty line.
pub fn split_lines(input: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(input);
    std::iter::from_fn(move || {
        let remaining = rest?;
        match remaining.split_once('\n') {
            Some((line, tail)) => {
                rest = Some(tail);
                // only a `\r` right before the break belongs to it
                Some(line.strip_suffix('\r').unwrap_or(line))
            }
            None => {
                rest = None;
                Some(remaining)
            }
        }
    })
}

/// Tokenize and parse a single line
pub fn parse_line(line: &str) -> Result<Option<AstRoot<'_>>, MacroError> {
    parse(&tokenize(line))
}

/// Lazily parse every line of `input`, one result per line
pub fn parse_lines(input: &str) -> impl Iterator<Item = Result<Option<AstRoot<'_>>, MacroError>> {
    split_lines(input).map(parse_line)
}

/// Parse every line of `input`, in order
pub fn parser(input: &str) -> Result<Vec<Option<AstRoot<'_>>>, MacroError> {
    let roots = parse_lines(input).collect::<Result<Vec<_>, _>>()?;
    debug!(lines = roots.len(), "parsed macro");
    Ok(roots)
}
