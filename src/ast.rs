/// Parsed result for one macro line
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AstRoot<'a> {
    pub node: AstNode<'a>,
    /// Pause after the line, taken from the first `<wait>` directive
    pub wait: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum AstNode<'a> {
    Command(Command<'a>),
    /// Free text interleaved with placeholders
    Text(Vec<TextNode<'a>>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "type", rename = "command")
)]
pub struct Command<'a> {
    pub name: &'a str,
    pub args: Vec<CommandArg<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "type", rename_all = "kebab-case")
)]
pub enum CommandArg<'a> {
    #[cfg_attr(feature = "serde", serde(rename = "command-arg"))]
    Value { value: &'a str },
    Placeholder(Placeholder<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "type", rename_all = "lowercase")
)]
pub enum TextNode<'a> {
    Text { value: String },
    Placeholder(Placeholder<'a>),
}

/// Substitutable `<key>` with an optional default from `<key.value>`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Placeholder<'a> {
    pub key: &'a str,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub value: Option<&'a str>,
}

impl<'a> AstRoot<'a> {
    pub fn command(&self) -> Option<&Command<'a>> {
        match &self.node {
            AstNode::Command(command) => Some(command),
            AstNode::Text(_) => None,
        }
    }

    pub fn text(&self) -> Option<&[TextNode<'a>]> {
        match &self.node {
            AstNode::Text(nodes) => Some(nodes),
            AstNode::Command(_) => None,
        }
    }
}

impl TextNode<'_> {
    pub fn text(value: impl Into<String>) -> Self {
        TextNode::Text {
            value: value.into(),
        }
    }
}
