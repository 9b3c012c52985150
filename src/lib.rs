//! Tokenizer and parser for in-game macro scripts.
//!
//! Each line of a macro is either a `/command` with arguments or free text
//! with `<placeholder>` directives. A `<wait>` or `<wait.N>` directive sets
//! the pause after the line and cuts off everything that follows it.
//!
//! ```
//! use ffmacro::{AstNode, parser};
//!
//! let roots = parser("/아이콘 \"내 초코보\" 탈것\n안<wait>녕").unwrap();
//! assert_eq!(roots.len(), 2);
//! assert!(matches!(roots[0].as_ref().unwrap().node, AstNode::Command(_)));
//! assert_eq!(roots[1].as_ref().unwrap().wait, 1);
//! ```

pub mod ast;
pub mod completion;
pub mod error;
pub mod parser;
pub mod processor;
pub mod token;

pub use ast::{AstNode, AstRoot, Command, CommandArg, Placeholder, TextNode};
pub use error::MacroError;
pub use parser::{MacroParser, Rule, round_wait, tokenize};
pub use processor::{parse, parse_line, parse_lines, parser, split_lines};
pub use token::{Token, TokenKind};
