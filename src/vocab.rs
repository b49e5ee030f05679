//! Spoken-phrase vocabulary tables
//!
//! One table per category, each mapping a spoken phrase to the key it emits.
//! Several phrases may emit the same key (synonyms like "dot"/"period" or
//! "delete"/"junk"); a phrase appears at most once per category. Tables are
//! built once and never written afterwards, so the shared instance is safe to
//! read from anywhere.

use std::collections::HashMap;
use std::sync::LazyLock;

/// The phonetic alphabet, one word per letter
const LETTERS: [(&str, char); 26] = [
    ("air", 'a'),
    ("bat", 'b'),
    ("cap", 'c'),
    ("drum", 'd'),
    ("each", 'e'),
    ("fine", 'f'),
    ("gust", 'g'),
    ("harp", 'h'),
    ("sit", 'i'),
    ("jury", 'j'),
    ("crunch", 'k'),
    ("look", 'l'),
    ("made", 'm'),
    ("near", 'n'),
    ("odd", 'o'),
    ("pit", 'p'),
    ("quench", 'q'),
    ("red", 'r'),
    ("sun", 's'),
    ("trap", 't'),
    ("urge", 'u'),
    ("vest", 'v'),
    ("whale", 'w'),
    ("plex", 'x'),
    ("yank", 'y'),
    ("zip", 'z'),
];

/// Keyboard symbols with their spoken synonyms
const SYMBOLS: [(&str, char); 60] = [
    ("back tick", '`'),
    ("comma", ','),
    ("dot", '.'),
    ("period", '.'),
    ("semi", ';'),
    ("semicolon", ';'),
    ("quote", '\''),
    ("L square", '['),
    ("left square", '['),
    ("square", '['),
    ("R square", ']'),
    ("right square", ']'),
    ("forward slash", '/'),
    ("slash", '/'),
    ("backslash", '\\'),
    ("minus", '-'),
    ("dash", '-'),
    ("equals", '='),
    ("plus", '+'),
    ("question mark", '?'),
    ("tilde", '~'),
    ("bang", '!'),
    ("exclamation point", '!'),
    ("dollar", '$'),
    ("dollar sign", '$'),
    ("down score", '_'),
    ("under score", '_'),
    ("colon", ':'),
    ("paren", '('),
    ("L paren", '('),
    ("left paren", '('),
    ("R paren", ')'),
    ("right paren", ')'),
    ("brace", '{'),
    ("left brace", '{'),
    ("R brace", '}'),
    ("right brace", '}'),
    ("angle", '<'),
    ("left angle", '<'),
    ("less than", '<'),
    ("rangle", '>'),
    ("R angle", '>'),
    ("right angle", '>'),
    ("greater than", '>'),
    ("star", '*'),
    ("asterisk", '*'),
    ("pound", '#'),
    ("hash", '#'),
    ("hash sign", '#'),
    ("number sign", '#'),
    ("percent", '%'),
    ("percent sign", '%'),
    ("caret", '^'),
    ("at sign", '@'),
    ("and sign", '&'),
    ("ampersand", '&'),
    ("amper", '&'),
    ("pipe", '|'),
    ("dubquote", '"'),
    ("double quote", '"'),
];

const NUMBERS: [(&str, u8); 10] = [
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

const MODIFIERS: [(&str, &str); 7] = [
    ("command", "cmd"),
    ("control", "ctrl"),
    ("troll", "ctrl"),
    ("shift", "shift"),
    ("sky", "shift"),
    ("alt", "alt"),
    ("option", "alt"),
];

const ARROWS: [(&str, &str); 4] = [
    ("left", "left"),
    ("right", "right"),
    ("up", "up"),
    ("down", "down"),
];

/// Keys spoken by their own name
const SIMPLE_SPECIALS: [&str; 8] = [
    "tab", "escape", "enter", "space", "home", "pageup", "pagedown", "end",
];

/// Special keys whose spoken form differs from the key name
const ALTERNATE_SPECIALS: [(&str, &str); 3] = [
    ("delete", "backspace"),
    ("junk", "backspace"),
    ("forward delete", "delete"),
];

/// Vocabulary categories declared to the host engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Letter,
    Symbol,
    Number,
    Modifier,
    Arrow,
    Special,
}

impl Category {
    /// List name used in grammar declarations
    pub fn name(&self) -> &'static str {
        match self {
            Category::Letter => "letter",
            Category::Symbol => "symbol",
            Category::Number => "number",
            Category::Modifier => "modifier",
            Category::Arrow => "arrow",
            Category::Special => "special",
        }
    }

    pub const ALL: [Category; 6] = [
        Category::Letter,
        Category::Symbol,
        Category::Number,
        Category::Modifier,
        Category::Arrow,
        Category::Special,
    ];
}

/// All spoken-phrase tables, built once at startup
pub struct Vocabulary {
    letters: HashMap<&'static str, char>,
    symbols: HashMap<&'static str, char>,
    numbers: HashMap<&'static str, u8>,
    modifiers: HashMap<&'static str, &'static str>,
    arrows: HashMap<&'static str, &'static str>,
    specials: HashMap<&'static str, &'static str>,
}

static VOCABULARY: LazyLock<Vocabulary> = LazyLock::new(Vocabulary::new);

/// Shared process-wide vocabulary
pub fn vocabulary() -> &'static Vocabulary {
    &VOCABULARY
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

impl Vocabulary {
    pub fn new() -> Self {
        let mut specials: HashMap<&'static str, &'static str> =
            SIMPLE_SPECIALS.iter().map(|k| (*k, *k)).collect();
        specials.extend(ALTERNATE_SPECIALS);

        Self {
            letters: LETTERS.into_iter().collect(),
            symbols: SYMBOLS.into_iter().collect(),
            numbers: NUMBERS.into_iter().collect(),
            modifiers: MODIFIERS.into_iter().collect(),
            arrows: ARROWS.into_iter().collect(),
            specials,
        }
    }

    pub fn letter(&self, phrase: &str) -> Option<char> {
        self.letters.get(phrase).copied()
    }

    pub fn symbol(&self, phrase: &str) -> Option<char> {
        self.symbols.get(phrase).copied()
    }

    pub fn number(&self, phrase: &str) -> Option<u8> {
        self.numbers.get(phrase).copied()
    }

    pub fn modifier(&self, phrase: &str) -> Option<&'static str> {
        self.modifiers.get(phrase).copied()
    }

    pub fn arrow(&self, phrase: &str) -> Option<&'static str> {
        self.arrows.get(phrase).copied()
    }

    pub fn special(&self, phrase: &str) -> Option<&'static str> {
        self.specials.get(phrase).copied()
    }

    /// Look up a phrase in one category, rendered as the string form key
    /// injection consumes. `None` means the phrase was never declared, which
    /// a well-formed host grammar rules out.
    pub fn lookup(&self, category: Category, phrase: &str) -> Option<String> {
        match category {
            Category::Letter => self.letter(phrase).map(|c| c.to_string()),
            Category::Symbol => self.symbol(phrase).map(|c| c.to_string()),
            Category::Number => self.number(phrase).map(|n| n.to_string()),
            Category::Modifier => self.modifier(phrase).map(str::to_string),
            Category::Arrow => self.arrow(phrase).map(str::to_string),
            Category::Special => self.special(phrase).map(str::to_string),
        }
    }

    /// Every (phrase, emitted value) pair of a category, for grammar
    /// registration and display. Order is unspecified.
    pub fn entries(&self, category: Category) -> Vec<(&'static str, String)> {
        match category {
            Category::Letter => collect(&self.letters),
            Category::Symbol => collect(&self.symbols),
            Category::Number => collect(&self.numbers),
            Category::Modifier => collect(&self.modifiers),
            Category::Arrow => collect(&self.arrows),
            Category::Special => collect(&self.specials),
        }
    }

    pub fn len(&self, category: Category) -> usize {
        match category {
            Category::Letter => self.letters.len(),
            Category::Symbol => self.symbols.len(),
            Category::Number => self.numbers.len(),
            Category::Modifier => self.modifiers.len(),
            Category::Arrow => self.arrows.len(),
            Category::Special => self.specials.len(),
        }
    }
}

fn collect<V: ToString>(map: &HashMap<&'static str, V>) -> Vec<(&'static str, String)> {
    map.iter().map(|(k, v)| (*k, v.to_string())).collect()
}
