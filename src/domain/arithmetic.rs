//! Arithmetic fast path for trivial binary expressions.
//!
//! Questions of the form `<int> <op> <int>` are answered locally without
//! contacting the endpoint. Recognition is an ordered table of
//! (pattern, evaluator) rules; each pattern must match the whole question.

use regex::Regex;

/// Reply for a division-by-zero question.
pub const DIVISION_BY_ZERO: &str = "Division by zero is not allowed";

/// Outcome of applying an evaluator to two operands.
enum Outcome {
    Value(i64),
    DivisionByZero,
}

struct Rule {
    pattern: Regex,
    symbol: char,
    apply: fn(i64, i64) -> Option<Outcome>,
}

impl Rule {
    fn new(pattern: &str, symbol: char, apply: fn(i64, i64) -> Option<Outcome>) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("hardcoded pattern"),
            symbol,
            apply,
        }
    }
}

/// Ordered rule table for the arithmetic fast path.
///
/// Rules are tried in fixed order: addition, subtraction, multiplication,
/// division. Each pattern must match the entire trimmed question.
pub struct FastPath {
    rules: Vec<Rule>,
}

impl FastPath {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Rule::new(r"^\s*(\d+)\s*\+\s*(\d+)\s*$", '+', |a, b| {
                    a.checked_add(b).map(Outcome::Value)
                }),
                Rule::new(r"^\s*(\d+)\s*-\s*(\d+)\s*$", '-', |a, b| {
                    a.checked_sub(b).map(Outcome::Value)
                }),
                Rule::new(r"^\s*(\d+)\s*\*\s*(\d+)\s*$", '*', |a, b| {
                    a.checked_mul(b).map(Outcome::Value)
                }),
                Rule::new(r"^\s*(\d+)\s*/\s*(\d+)\s*$", '/', |a, b| {
                    if b == 0 {
                        Some(Outcome::DivisionByZero)
                    } else {
                        Some(Outcome::Value(a / b))
                    }
                }),
            ],
        }
    }

    /// Evaluate the question against the rule table.
    ///
    /// Returns `None` when no rule matches, or when an operand does not fit
    /// `i64` or the operation overflows; such questions fall through to the
    /// remote path.
    pub fn evaluate(&self, question: &str) -> Option<String> {
        for rule in &self.rules {
            let Some(caps) = rule.pattern.captures(question) else {
                continue;
            };
            let (Ok(a), Ok(b)) = (caps[1].parse::<i64>(), caps[2].parse::<i64>()) else {
                continue;
            };
            return match (rule.apply)(a, b)? {
                Outcome::Value(v) => Some(format!("{a} {} {b} = {v}", rule.symbol)),
                Outcome::DivisionByZero => Some(DIVISION_BY_ZERO.to_string()),
            };
        }
        None
    }
}

impl Default for FastPath {
    fn default() -> Self {
        Self::new()
    }
}
