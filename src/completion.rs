//! Completion triggers for macro editors.
//!
//! An editor offers completions when the text before the cursor on the
//! current line is a lone `/` (a command head) or ends with `<` (a
//! directive). There is a single known suggestion.

/// Characters that can open a completion
pub const TRIGGER_CHARS: [char; 2] = ['/', '<'];

/// Suggestions offered at every trigger
pub const SUGGESTIONS: &[Suggestion] = &[Suggestion {
    label: "/?",
    kind: SuggestionKind::Keyword,
    detail: "",
}];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    Keyword,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub label: &'static str,
    pub kind: SuggestionKind,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// `/` at the start of a line
    Command,
    /// `<` anywhere in a line
    Placeholder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// Byte offset where the replaced text starts
    pub from: usize,
    pub trigger: Trigger,
    pub options: &'static [Suggestion],
}

/// Decide whether a completion applies at byte offset `cursor` of `text`.
pub fn complete(text: &str, cursor: usize) -> Option<Completion> {
    let before = text.get(..cursor)?;
    let line = before.rfind('\n').map_or(before, |i| &before[i + 1..]);

    let last = line.chars().next_back()?;
    if !TRIGGER_CHARS.contains(&last) {
        return None;
    }

    let trigger = match last {
        '/' if line.len() == 1 => Trigger::Command,
        '/' => return None,
        _ => Trigger::Placeholder,
    };

    Some(Completion {
        from: cursor - last.len_utf8(),
        trigger,
        options: SUGGESTIONS,
    })
}
