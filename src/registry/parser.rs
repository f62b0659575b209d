//! Line parsing for constant tables.
//!
//! Each non-blank, non-comment line has the form
//!
//! ```text
//! name = value_or_expression [unit] = alias1 = alias2 ...
//! ```
//!
//! Fields are separated by `=`. Within the value field, the expression and an
//! optional trailing unit token are whitespace-separated; `_` as the unit
//! token marks the absence of an explicit unit. Lines starting with `#` and
//! blank lines are skipped.
//!
//! This module only splits lines into [`RawEntry`] values. Expression
//! parsing, unit resolution, and duplicate/reference checking happen in the
//! registry.

use super::expression::is_valid_name;
use crate::errors::{ConstantError, ConstantResult};

/// One table line, split into fields but not yet resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    /// 1-based line number in the source table.
    pub line: usize,
    pub name: String,
    pub expression: String,
    pub unit: Option<String>,
    pub aliases: Vec<String>,
}

/// Parser for the `name = value [unit] = alias ...` table format.
#[derive(Debug, Default)]
pub struct TableParser;

impl TableParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a single line. Returns `Ok(None)` for comments and blank lines.
    pub fn parse_line(&self, line_no: usize, line: &str) -> ConstantResult<Option<RawEntry>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let fields: Vec<&str> = trimmed.split('=').map(str::trim).collect();
        if fields.len() < 2 {
            return Err(ConstantError::malformed_entry(
                line_no,
                "expected 'name = value [unit] [= alias ...]'",
            ));
        }

        let name = fields[0];
        if !is_valid_name(name) {
            return Err(ConstantError::malformed_entry(
                line_no,
                &format!("invalid constant name '{}'", name),
            ));
        }

        let tokens: Vec<&str> = fields[1].split_whitespace().collect();
        if tokens.is_empty() {
            return Err(ConstantError::malformed_entry(line_no, "missing value"));
        }
        let (expression, unit) = split_value_field(&tokens)
            .map_err(|message| ConstantError::malformed_entry(line_no, &message))?;

        let mut aliases = Vec::with_capacity(fields.len() - 2);
        for alias in &fields[2..] {
            if !is_valid_name(alias) {
                return Err(ConstantError::malformed_entry(
                    line_no,
                    &format!("invalid alias '{}'", alias),
                ));
            }
            aliases.push(alias.to_string());
        }

        Ok(Some(RawEntry {
            line: line_no,
            name: name.to_string(),
            expression,
            unit,
            aliases,
        }))
    }

    /// Parse a whole table into entries, in declaration order.
    pub fn parse(&self, content: &str) -> ConstantResult<Vec<RawEntry>> {
        let mut entries = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            if let Some(entry) = self.parse_line(idx + 1, line)? {
                entries.push(entry);
            }
        }
        Ok(entries)
    }
}

/// Split the value field's whitespace tokens into expression text and an
/// optional trailing unit token.
///
/// Tokens are consumed into the expression while the chain is open (the text
/// so far ends with an operator) or the next token begins with one. At most
/// one token may remain afterwards; it is the unit, with `_` meaning none.
/// This accepts spaced chains (`a / b`), compact chains (`a/b`), and
/// name-plus-unit fields (`speed_of_light au/day`).
fn split_value_field(tokens: &[&str]) -> Result<(String, Option<String>), String> {
    if tokens[0].parse::<f64>().is_ok() {
        return match tokens.len() {
            1 => Ok((tokens[0].to_string(), None)),
            2 => Ok((tokens[0].to_string(), unit_token(tokens[1]))),
            _ => Err(format!(
                "unexpected trailing fields '{}'",
                tokens[2..].join(" ")
            )),
        };
    }

    let mut expression = tokens[0].to_string();
    let mut i = 1;
    while i < tokens.len() {
        let open = expression.ends_with('/') || expression.ends_with('*');
        let token = tokens[i];
        if open || token.starts_with('/') || token.starts_with('*') {
            expression.push_str(token);
            i += 1;
        } else {
            break;
        }
    }

    match tokens.len() - i {
        0 => Ok((expression, None)),
        1 => Ok((expression, unit_token(tokens[i]))),
        _ => Err(format!(
            "unexpected trailing fields '{}'",
            tokens[i..].join(" ")
        )),
    }
}

fn unit_token(token: &str) -> Option<String> {
    if token == "_" {
        None
    } else {
        Some(token.to_string())
    }
}
