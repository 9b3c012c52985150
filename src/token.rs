use std::fmt;

/// A single lexical unit of one macro line.
///
/// `raw` is the exact slice of the line the token was scanned from, so
/// writing the tokens of a line back out in order reproduces the line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'a> {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: TokenKind<'a>,
    pub raw: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "type", rename_all = "lowercase")
)]
pub enum TokenKind<'a> {
    /// Run of whitespace characters
    Whitespace,
    /// Command head: the text after a leading `/`
    Command { value: &'a str },
    /// Quoted string content, or a merged run of bare text
    String { value: &'a str },
    /// `<key>` or `<key.value>`
    Placeholder {
        key: &'a str,
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        value: Option<&'a str>,
    },
    /// `<wait>` or `<wait.N>`, already rounded
    Wait { value: u32 },
}

impl<'a> Token<'a> {
    pub fn whitespace(raw: &'a str) -> Self {
        Self {
            kind: TokenKind::Whitespace,
            raw,
        }
    }

    pub fn command(value: &'a str, raw: &'a str) -> Self {
        Self {
            kind: TokenKind::Command { value },
            raw,
        }
    }

    pub fn string(value: &'a str, raw: &'a str) -> Self {
        Self {
            kind: TokenKind::String { value },
            raw,
        }
    }

    /// Bare text, where the value is the raw text itself
    pub fn text(raw: &'a str) -> Self {
        Self::string(raw, raw)
    }

    pub fn placeholder(key: &'a str, value: Option<&'a str>, raw: &'a str) -> Self {
        Self {
            kind: TokenKind::Placeholder { key, value },
            raw,
        }
    }

    pub fn wait(value: u32, raw: &'a str) -> Self {
        Self {
            kind: TokenKind::Wait { value },
            raw,
        }
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace)
    }
}

impl TokenKind<'_> {
    /// Name of the variant as it appears in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Command { .. } => "command",
            TokenKind::String { .. } => "string",
            TokenKind::Placeholder { .. } => "placeholder",
            TokenKind::Wait { .. } => "wait",
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}
