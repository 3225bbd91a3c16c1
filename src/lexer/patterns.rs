use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::SYMBOLS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Whitespace,
    Comment,
    Quoted,
    Symbol,
}

pub struct RegexPattern {
    regex: Regex,
    rule: Rule,
}

lazy_static! {
    /// Alternation over the symbol table. Leftmost-first semantics keep the
    /// table order, so `<=` is tried before `<`.
    static ref SYMBOL_REGEX: Regex = {
        let alternatives = SYMBOLS
            .iter()
            .map(|(symbol, _)| regex::escape(symbol))
            .collect::<Vec<String>>()
            .join("|");
        Regex::new(&format!("^(?:{})", alternatives)).unwrap()
    };

    /// A quote runs to the last quote on the line, or to end of line when unclosed.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), rule: Rule::Whitespace },
        RegexPattern { regex: Regex::new(r"^//").unwrap(), rule: Rule::Comment },
        RegexPattern { regex: Regex::new(r#"^"(?:.*"|[^"]*$)"#).unwrap(), rule: Rule::Quoted },
        RegexPattern { regex: (*SYMBOL_REGEX).clone(), rule: Rule::Symbol },
    ];
}

fn match_rule(rest: &str) -> Option<(Rule, usize)> {
    PATTERNS
        .iter()
        .find_map(|pattern| pattern.regex.find(rest).map(|m| (pattern.rule, m.end())))
}

// Only called where no rule matched, so the first char always belongs to the run.
fn run_length(rest: &str) -> usize {
    rest.char_indices()
        .find(|&(i, c)| {
            i > 0 && (c.is_whitespace() || c == '"' || SYMBOL_REGEX.is_match(&rest[i..]))
        })
        .map_or(rest.len(), |(i, _)| i)
}

/// Byte range of the first candidate at or after `pos`, skipping whitespace.
pub fn next_candidate(line: &str, mut pos: usize) -> Option<Range<usize>> {
    while pos < line.len() {
        let rest = &line[pos..];

        match match_rule(rest) {
            Some((Rule::Whitespace, len)) => pos += len,
            Some((_, len)) => return Some(pos..pos + len),
            None => return Some(pos..pos + run_length(rest)),
        }
    }

    None
}

/// Lexeme candidates of one line, left to right.
pub struct Candidates<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Iterator for Candidates<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let range = next_candidate(self.line, self.pos)?;
        self.pos = range.end;
        Some(&self.line[range])
    }
}

pub fn candidates(line: &str) -> Candidates<'_> {
    Candidates { line, pos: 0 }
}
