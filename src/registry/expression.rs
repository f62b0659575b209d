//! The value micro-language for derived constants.
//!
//! A value expression is either a floating-point literal or a chain of
//! previously declared constant names combined with `*` and `/`, evaluated
//! strictly left to right with no precedence:
//!
//! ```text
//! 1.49597870700e11
//! solar_mass_parameter / gravitational_constant
//! ```
//!
//! This module only tokenizes and represents expressions. Evaluation lives
//! with the registry, which owns the resolved values the names refer to.

use crate::errors::{ConstantError, ConstantResult};
use once_cell::sync::Lazy;
use regex::Regex;

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Returns `true` for a valid constant name or alias token.
///
/// The bare underscore is excluded: `_` is the dimensionless unit marker in
/// table lines and may not name a constant.
pub(crate) fn is_valid_name(token: &str) -> bool {
    token != "_" && NAME_REGEX.is_match(token)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExprOp {
    Mul,
    Div,
}

/// A parsed value expression: a literal, or a left-to-right operator chain.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueExpression {
    Literal(f64),
    Chain {
        first: String,
        terms: Vec<(ExprOp, String)>,
    },
}

impl ValueExpression {
    /// Parse the expression text of a table entry.
    ///
    /// `line` is the 1-based table line, used for error context. Whitespace
    /// inside the expression is ignored, so `a / b` and `a/b` are the same
    /// chain.
    pub fn parse(line: usize, text: &str) -> ConstantResult<Self> {
        let compact: String = text.split_whitespace().collect();
        if compact.is_empty() {
            return Err(ConstantError::malformed_entry(line, "empty value expression"));
        }

        if let Ok(value) = compact.parse::<f64>() {
            return Ok(ValueExpression::Literal(value));
        }

        let mut first = None;
        let mut terms = Vec::new();
        let mut pending_op = None;
        let mut start = 0;

        for (idx, ch) in compact.char_indices().chain([(compact.len(), '\0')]) {
            if ch != '*' && ch != '/' && idx != compact.len() {
                continue;
            }
            let token = &compact[start..idx];
            if token.is_empty() {
                return Err(ConstantError::malformed_entry(
                    line,
                    &format!("dangling operator in '{}'", compact),
                ));
            }
            if !is_valid_name(token) {
                return Err(ConstantError::malformed_entry(
                    line,
                    &format!(
                        "'{}' is neither a number nor a constant reference in '{}'",
                        token, compact
                    ),
                ));
            }
            match pending_op.take() {
                None => first = Some(token.to_string()),
                Some(op) => terms.push((op, token.to_string())),
            }
            if ch == '*' {
                pending_op = Some(ExprOp::Mul);
            } else if ch == '/' {
                pending_op = Some(ExprOp::Div);
            }
            start = idx + 1;
        }

        match first {
            Some(first) => Ok(ValueExpression::Chain { first, terms }),
            None => Err(ConstantError::malformed_entry(
                line,
                &format!("empty value expression '{}'", compact),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal() {
        assert_eq!(
            ValueExpression::parse(1, "1.49597870700e11").unwrap(),
            ValueExpression::Literal(1.49597870700e11)
        );
        assert_eq!(
            ValueExpression::parse(1, "-5.5").unwrap(),
            ValueExpression::Literal(-5.5)
        );
        assert_eq!(
            ValueExpression::parse(1, "42").unwrap(),
            ValueExpression::Literal(42.0)
        );
    }

    #[test]
    fn test_single_reference() {
        let expr = ValueExpression::parse(1, "speed_of_light").unwrap();
        assert_eq!(
            expr,
            ValueExpression::Chain {
                first: "speed_of_light".to_string(),
                terms: vec![],
            }
        );
    }

    #[test]
    fn test_division_chain() {
        let expr = ValueExpression::parse(1, "solar_mass_parameter / gravitational_constant").unwrap();
        assert_eq!(
            expr,
            ValueExpression::Chain {
                first: "solar_mass_parameter".to_string(),
                terms: vec![(ExprOp::Div, "gravitational_constant".to_string())],
            }
        );
    }

    #[test]
    fn test_compact_and_spaced_are_equal() {
        let spaced = ValueExpression::parse(1, "a / b * c").unwrap();
        let compact = ValueExpression::parse(1, "a/b*c").unwrap();
        assert_eq!(spaced, compact);
    }

    #[test]
    fn test_mixed_operators_preserved_in_order() {
        let expr = ValueExpression::parse(1, "a*b/c").unwrap();
        match expr {
            ValueExpression::Chain { first, terms } => {
                assert_eq!(first, "a");
                assert_eq!(terms[0], (ExprOp::Mul, "b".to_string()));
                assert_eq!(terms[1], (ExprOp::Div, "c".to_string()));
            }
            ValueExpression::Literal(_) => panic!("expected chain"),
        }
    }

    #[test]
    fn test_error_cases() {
        assert!(ValueExpression::parse(1, "").is_err());
        assert!(ValueExpression::parse(1, "   ").is_err());
        assert!(ValueExpression::parse(1, "a/").is_err());
        assert!(ValueExpression::parse(1, "*a").is_err());
        assert!(ValueExpression::parse(1, "a//b").is_err());
        assert!(ValueExpression::parse(1, "a/3").is_err());
        assert!(ValueExpression::parse(1, "1.5x").is_err());
        assert!(ValueExpression::parse(1, "_").is_err());
    }

    #[test]
    fn test_error_carries_line() {
        let err = ValueExpression::parse(17, "a//b").unwrap_err();
        assert!(err.to_string().contains("line 17"));
        assert!(!err.is_recoverable());
    }
}
