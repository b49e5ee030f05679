//! Grammar declarations registered with the host engine
//!
//! Pure data: the list names, capture rules, and command rules the host
//! compiles into its recognition grammar. Nothing here parses speech; the
//! host matches utterances and calls back with a [`Recognition`](crate::Recognition).

use crate::dispatch::Rule;
use crate::vocab::{Category, Vocabulary};

/// A named vocabulary list exposed to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListDecl {
    pub category: Category,
    pub description: &'static str,
}

/// A named capture rule composed from lists and other captures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureDecl {
    pub name: &'static str,
    pub rule: &'static str,
    pub description: &'static str,
}

/// A spoken command pattern bound to a dispatch rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDecl {
    pub phrase: &'static str,
    pub rule: Rule,
}

pub const LISTS: [ListDecl; 6] = [
    ListDecl {
        category: Category::Letter,
        description: "The spoken phonetic alphabet",
    },
    ListDecl {
        category: Category::Symbol,
        description: "All symbols from the keyboard",
    },
    ListDecl {
        category: Category::Arrow,
        description: "All arrow keys",
    },
    ListDecl {
        category: Category::Number,
        description: "All number keys",
    },
    ListDecl {
        category: Category::Modifier,
        description: "All modifier keys",
    },
    ListDecl {
        category: Category::Special,
        description: "All special keys",
    },
];

/// Symbols are deliberately absent from `any`: a bare spoken symbol types
/// the character through its own rule and never takes modifiers
pub const CAPTURES: [CaptureDecl; 8] = [
    CaptureDecl {
        name: "modifiers",
        rule: "{modifier}+",
        description: "One or more modifier keys",
    },
    CaptureDecl {
        name: "arrow",
        rule: "{arrow}",
        description: "One directional arrow key",
    },
    CaptureDecl {
        name: "number",
        rule: "{number}",
        description: "One number key",
    },
    CaptureDecl {
        name: "letter",
        rule: "{letter}",
        description: "One letter key",
    },
    CaptureDecl {
        name: "symbol",
        rule: "{symbol}",
        description: "One symbol key",
    },
    CaptureDecl {
        name: "special",
        rule: "{special}",
        description: "One special key",
    },
    CaptureDecl {
        name: "any",
        rule: "(<arrow> | <number> | <letter> | <special>)",
        description: "Any one key",
    },
    CaptureDecl {
        name: "key",
        rule: "[<modifiers>] <any>",
        description: "A single key with optional modifiers",
    },
];

pub const COMMANDS: [CommandDecl; 6] = [
    CommandDecl {
        phrase: "go <arrow>",
        rule: Rule::NavigateArrow,
    },
    CommandDecl {
        phrase: "<number>",
        rule: Rule::Number,
    },
    CommandDecl {
        phrase: "<letter>",
        rule: Rule::Letter,
    },
    CommandDecl {
        phrase: "<symbol>",
        rule: Rule::Symbol,
    },
    CommandDecl {
        phrase: "<special>",
        rule: Rule::Special,
    },
    CommandDecl {
        phrase: "<key>",
        rule: Rule::Key,
    },
];

/// Host-side registration seam
///
/// The engine implements this and receives every declaration exactly once at
/// startup, lists first so captures and commands can refer to them.
pub trait GrammarHost {
    fn declare_list(&mut self, list: &ListDecl, entries: &[(&'static str, String)]);
    fn declare_capture(&mut self, capture: &CaptureDecl);
    fn declare_command(&mut self, command: &CommandDecl);
}

/// Hand the full grammar to a host
pub fn register(host: &mut dyn GrammarHost, vocab: &Vocabulary) {
    for list in &LISTS {
        let entries = vocab.entries(list.category);
        host.declare_list(list, &entries);
    }
    for capture in &CAPTURES {
        host.declare_capture(capture);
    }
    for command in &COMMANDS {
        host.declare_command(command);
    }
}
