use crate::core::data::elements;
use std::collections::BTreeMap;
use thiserror::Error;

pub type Composition = BTreeMap<&'static str, u32>;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FormulaError {
    #[error("Formula is empty")]
    Empty,
    #[error("Unknown element symbol '{0}'")]
    UnknownElement(String),
    #[error("Unbalanced parenthesis at position {position}")]
    UnbalancedParenthesis { position: usize },
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },
    #[error("Atom count too large at position {position}")]
    CountTooLarge { position: usize },
}

struct FormulaParser<'a> {
    chars: Vec<char>,
    pos: usize,
    source: &'a str,
}

impl<'a> FormulaParser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().filter(|c| !c.is_whitespace()).collect(),
            pos: 0,
            source,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn parse(mut self) -> Result<Composition, FormulaError> {
        if self.chars.is_empty() {
            return Err(FormulaError::Empty);
        }
        let mut total = self.parse_sequence(None)?;
        while let Some(ch) = self.peek() {
            if !matches!(ch, '·' | '*' | '.' | '•') {
                return Err(self.unexpected(ch));
            }
            self.pos += 1;
            let count_pos = self.pos;
            let multiplier = self.parse_count()?.unwrap_or(1);
            let hydrate = self.parse_sequence(None)?;
            if hydrate.is_empty() {
                return Err(match self.peek() {
                    Some(ch) => self.unexpected(ch),
                    None => FormulaError::Empty,
                });
            }
            merge(&mut total, hydrate, multiplier, count_pos)?;
        }
        Ok(total)
    }

    /// Parses groups until end of input, a hydrate dot, or the expected closing bracket.
    fn parse_sequence(&mut self, closing: Option<char>) -> Result<Composition, FormulaError> {
        let mut composition = Composition::new();
        while let Some(ch) = self.peek() {
            match ch {
                '(' | '[' => {
                    let open_pos = self.pos;
                    self.pos += 1;
                    let close = if ch == '(' { ')' } else { ']' };
                    let inner = self.parse_sequence(Some(close))?;
                    if self.peek() != Some(close) {
                        return Err(FormulaError::UnbalancedParenthesis { position: open_pos });
                    }
                    self.pos += 1;
                    let count_pos = self.pos;
                    let count = self.parse_count()?.unwrap_or(1);
                    merge(&mut composition, inner, count, count_pos)?;
                }
                ')' | ']' => {
                    if closing == Some(ch) {
                        return Ok(composition);
                    }
                    return Err(FormulaError::UnbalancedParenthesis { position: self.pos });
                }
                c if c.is_ascii_uppercase() => {
                    let symbol = self.parse_symbol()?;
                    let count_pos = self.pos;
                    let count = self.parse_count()?.unwrap_or(1);
                    add_atoms(&mut composition, symbol, count, count_pos)?;
                }
                '·' | '*' | '.' | '•' if closing.is_none() => return Ok(composition),
                other => return Err(self.unexpected(other)),
            }
        }
        if closing.is_some() {
            return Err(FormulaError::UnbalancedParenthesis { position: self.pos });
        }
        Ok(composition)
    }

    fn parse_symbol(&mut self) -> Result<&'static str, FormulaError> {
        let start = self.pos;
        self.pos += 1;
        while matches!(self.peek(), Some(c) if c.is_ascii_lowercase()) {
            self.pos += 1;
        }
        let symbol: String = self.chars[start..self.pos].iter().collect();
        elements::by_symbol(&symbol)
            .map(|element| element.symbol)
            .ok_or(FormulaError::UnknownElement(symbol))
    }

    /// Reads an optional count after a symbol or group; `None` when no digits follow.
    fn parse_count(&mut self) -> Result<Option<u32>, FormulaError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.pos += 1;
        }
        if start == self.pos {
            return Ok(None);
        }
        self.chars[start..self.pos]
            .iter()
            .collect::<String>()
            .parse()
            .map(Some)
            .map_err(|_| FormulaError::CountTooLarge { position: start })
    }

    fn unexpected(&self, ch: char) -> FormulaError {
        tracing::trace!("Unexpected '{}' while parsing formula '{}'", ch, self.source);
        FormulaError::UnexpectedCharacter {
            ch,
            position: self.pos,
        }
    }
}

fn add_atoms(
    into: &mut Composition,
    symbol: &'static str,
    count: u32,
    position: usize,
) -> Result<(), FormulaError> {
    let entry = into.entry(symbol).or_insert(0);
    *entry = entry
        .checked_add(count)
        .ok_or(FormulaError::CountTooLarge { position })?;
    Ok(())
}

fn merge(
    into: &mut Composition,
    other: Composition,
    multiplier: u32,
    position: usize,
) -> Result<(), FormulaError> {
    for (symbol, count) in other {
        let scaled = count
            .checked_mul(multiplier)
            .ok_or(FormulaError::CountTooLarge { position })?;
        add_atoms(into, symbol, scaled, position)?;
    }
    Ok(())
}

/// Parses a formula such as `"Ca(OH)2"` or `"CuSO4·5H2O"` into atom counts per element.
///
/// Positions reported in errors index the formula with whitespace removed.
pub fn parse_formula(formula: &str) -> Result<Composition, FormulaError> {
    FormulaParser::new(formula).parse()
}

/// Molar mass in g/mol computed from the built-in periodic table.
pub fn molar_mass(formula: &str) -> Result<f64, FormulaError> {
    let composition = parse_formula(formula)?;
    Ok(composition
        .iter()
        .filter_map(|(symbol, &count)| {
            elements::by_symbol(symbol).map(|element| element.atomic_mass * count as f64)
        })
        .sum())
}
