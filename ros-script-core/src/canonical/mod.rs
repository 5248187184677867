//! Folding of repeated `set` commands.
//!
//! Independent generators often touch the same singleton menu (`/ip dns`,
//! `/interface pptp-server server`) with their own `set` line. Within each
//! menu path those lines are folded into one, where a later value for a key
//! wins but the key keeps the position of its first appearance.

pub mod lexer;

use tracing::debug;

use crate::error::Result;
use crate::fragment::Fragment;
use lexer::{is_menu_set, tokenize_set, Token};

/// Fold every menu path's `set` commands into at most one.
///
/// Other commands, including `set` lines that select one item of the menu,
/// keep their relative order and the folded line takes the slot of the
/// first menu-level `set`. The raw body is copied untouched. Any
/// tokenization failure aborts the whole call.
pub fn canonicalize(fragment: &Fragment) -> Result<Fragment> {
    let mut out = Fragment::new();

    for section in fragment {
        let commands = if section.path.is_raw() {
            section.commands.clone()
        } else {
            fold_section(&section.path.to_string(), &section.commands)?
        };
        out.section_mut(section.path.clone()).commands = commands;
    }

    Ok(out)
}

fn fold_section(path: &str, commands: &[String]) -> Result<Vec<String>> {
    let set_count = commands.iter().filter(|c| is_menu_set(c)).count();
    if set_count <= 1 {
        return Ok(commands.to_vec());
    }

    let mut folded: Vec<Token> = Vec::new();
    for command in commands.iter().filter(|c| is_menu_set(c)) {
        for token in tokenize_set(command)? {
            match folded.iter_mut().find(|t| t.key == token.key) {
                Some(existing) => existing.value = token.value,
                None => folded.push(token),
            }
        }
    }
    debug!(path, set_count, keys = folded.len(), "folded set commands");

    let folded_line = render_set(&folded);
    let mut out = Vec::with_capacity(commands.len() - set_count + 1);
    let mut emitted = false;
    for command in commands {
        if !is_menu_set(command) {
            out.push(command.clone());
        } else if !emitted {
            out.push(folded_line.clone());
            emitted = true;
        }
    }
    Ok(out)
}

fn render_set(tokens: &[Token]) -> String {
    if tokens.is_empty() {
        return "set".to_string();
    }
    let args: Vec<String> = tokens.iter().map(Token::to_string).collect();
    format!("set {}", args.join(" "))
}
