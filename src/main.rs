//! Companion binary: inspect the grammar and drive the dispatcher by hand
//!
//! `keyspeak grammar` prints everything the crate declares to a host engine.
//! `keyspeak simulate` reads one utterance per stdin line, matches it against
//! the command rules with plain table lookups (a stand-in for the host
//! recognizer, not a grammar engine), and dispatches the result.

use anyhow::Result;
use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};

use keyspeak::config::{Config, InjectionBackend};
use keyspeak::{
    Captures, Category, DispatchError, Dispatcher, DryRunInjector, KeyAlternates, KeyInjector,
    ModifierSet, Recognition, Rule, Vocabulary, grammar, vocabulary,
};

#[derive(Parser)]
#[command(name = "keyspeak")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the declared lists, captures, and command rules
    Grammar,
    /// Read utterances from stdin and dispatch them
    Simulate {
        /// Press keys for real (requires the `inject` build feature)
        #[arg(long)]
        inject: bool,
        /// Log every resolution step
        #[arg(long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Grammar) => {
            print_grammar(vocabulary());
            Ok(())
        }
        Some(Command::Simulate { inject, verbose }) => run_simulate(inject, verbose),
        None => run_simulate(false, false),
    }
}

fn print_grammar(vocab: &Vocabulary) {
    println!("LISTS");
    for list in &grammar::LISTS {
        println!(
            "  {:<10} {:<34} {} entries",
            list.category.name(),
            list.description,
            vocab.len(list.category)
        );
    }

    println!("\nCAPTURES");
    for capture in &grammar::CAPTURES {
        println!("  {:<10} {:<34} {}", capture.name, capture.rule, capture.description);
    }

    println!("\nCOMMANDS");
    for command in &grammar::COMMANDS {
        println!("  {:<14} -> {:?}", command.phrase, command.rule);
    }
}

fn run_simulate(inject: bool, verbose: bool) -> Result<()> {
    let config = Config::load();
    let verbose = verbose || config.verbose;
    let use_enigo = inject || config.injection.backend == InjectionBackend::Enigo;

    let injector = make_injector(use_enigo, &config)?;
    let mut dispatcher = Dispatcher::new(injector).with_verbose(verbose);
    let vocab = vocabulary();

    eprintln!(
        "{} backend: {}. One utterance per line, e.g. \"control shift air\" or \"go left\". Ctrl-D exits.",
        "[KEYSPEAK]".bold(),
        dispatcher.injector().name()
    );

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match match_utterance(vocab, &line) {
            Some(recognition) => match dispatcher.dispatch(&recognition) {
                Ok(()) => {}
                Err(e @ DispatchError::Inject(_)) => {
                    // Injection failures end the session, like any host action
                    // failure would
                    return Err(e.into());
                }
                Err(e) => eprintln!("{} {}", "error:".red(), e),
            },
            None => {
                eprintln!("{} no rule matches {:?}", "unmatched:".yellow(), line.trim());
            }
        }
        io::stdout().flush()?;
    }

    Ok(())
}

fn make_injector(use_enigo: bool, config: &Config) -> Result<Box<dyn KeyInjector>> {
    if use_enigo {
        #[cfg(feature = "inject")]
        {
            let injector = keyspeak::inject::EnigoInjector::new(
                config.injection.modifier_delay_ms,
                config.injection.click_delay_ms,
            )?;
            return Ok(Box::new(injector));
        }
        #[cfg(not(feature = "inject"))]
        anyhow::bail!("built without the `inject` feature; rebuild with --features inject");
    }
    let _ = config;
    Ok(Box::new(DryRunInjector))
}

/// Match one utterance against the command rules by table lookup
///
/// Rules are tried in declaration order: "go <arrow>", then the four
/// whole-phrase category rules, then "<key>" (leading modifier words plus an
/// any-key phrase). Returns `None` when nothing matches.
fn match_utterance(vocab: &Vocabulary, utterance: &str) -> Option<Recognition> {
    let phrase = utterance.trim().to_lowercase();
    if phrase.is_empty() {
        return None;
    }

    if let Some(rest) = phrase.strip_prefix("go ") {
        if let Some(arrow) = vocab.arrow(rest.trim()) {
            return Some(Recognition {
                rule: Rule::NavigateArrow,
                captures: Captures {
                    keys: KeyAlternates {
                        arrow: Some(arrow.to_string()),
                        ..Default::default()
                    },
                    ..Default::default()
                },
            });
        }
    }

    if let Some(value) = vocab.lookup(Category::Number, &phrase) {
        return Some(bare(Rule::Number, Category::Number, value));
    }
    if let Some(value) = vocab.lookup(Category::Letter, &phrase) {
        return Some(bare(Rule::Letter, Category::Letter, value));
    }
    if let Some(value) = vocab.lookup(Category::Symbol, &phrase) {
        return Some(bare(Rule::Symbol, Category::Symbol, value));
    }
    if let Some(value) = vocab.lookup(Category::Special, &phrase) {
        return Some(bare(Rule::Special, Category::Special, value));
    }

    match_key_rule(vocab, &phrase)
}

/// "<key>": any leading run of modifier words, then one any-key phrase
fn match_key_rule(vocab: &Vocabulary, phrase: &str) -> Option<Recognition> {
    let words: Vec<&str> = phrase.split_whitespace().collect();

    let mut mods = ModifierSet::default();
    let mut idx = 0;
    while idx < words.len() {
        match vocab.modifier(words[idx]) {
            Some(m) => {
                mods.insert(m);
                idx += 1;
            }
            None => break,
        }
    }

    let rest = words[idx..].join(" ");
    if rest.is_empty() {
        return None;
    }

    let keys = KeyAlternates {
        arrow: vocab.arrow(&rest).map(str::to_string),
        number: vocab.number(&rest).map(|n| n.to_string()),
        letter: vocab.letter(&rest).map(|c| c.to_string()),
        special: vocab.special(&rest).map(str::to_string),
    };
    if keys == KeyAlternates::default() {
        return None;
    }

    let modifier_sets = if mods.is_empty() { vec![] } else { vec![mods] };
    Some(Recognition {
        rule: Rule::Key,
        captures: Captures {
            keys,
            symbol: None,
            modifier_sets,
        },
    })
}

fn bare(rule: Rule, category: Category, value: String) -> Recognition {
    let mut captures = Captures::default();
    match category {
        Category::Arrow => captures.keys.arrow = Some(value),
        Category::Number => captures.keys.number = Some(value),
        Category::Letter => captures.keys.letter = Some(value),
        Category::Special => captures.keys.special = Some(value),
        Category::Symbol => captures.symbol = Some(value),
        Category::Modifier => {}
    }
    Recognition { rule, captures }
}
