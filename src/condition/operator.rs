use super::Value;
use std::fmt;

/// The relational operators a condition can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    LessThan,
    LessThanOrEqual,
    Equal,
    GreaterThanOrEqual,
    GreaterThan,
    NotEqual,
}

impl Operator {
    pub fn parse(symbol: &str) -> Option<Operator> {
        match symbol.trim() {
            "<" => Some(Operator::LessThan),
            "<=" => Some(Operator::LessThanOrEqual),
            "=" => Some(Operator::Equal),
            ">=" => Some(Operator::GreaterThanOrEqual),
            ">" => Some(Operator::GreaterThan),
            "!=" => Some(Operator::NotEqual),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::Equal => "=",
            Operator::GreaterThanOrEqual => ">=",
            Operator::GreaterThan => ">",
            Operator::NotEqual => "!=",
        }
    }

    /// Computes `actual <op> expected`.
    ///
    /// Pairs that both read as numbers compare as `f64`. Any other pair only
    /// supports `=` and `!=`, which compare the displayed text; the ordered
    /// operators are `false` for it.
    pub fn apply(&self, actual: &Value, expected: &Value) -> bool {
        if let (Some(a), Some(e)) = (actual.as_number(), expected.as_number()) {
            return match self {
                Operator::LessThan => a < e,
                Operator::LessThanOrEqual => a <= e,
                Operator::Equal => a == e,
                Operator::GreaterThanOrEqual => a >= e,
                Operator::GreaterThan => a > e,
                Operator::NotEqual => a != e,
            };
        }

        match self {
            Operator::Equal => actual.to_string() == expected.to_string(),
            Operator::NotEqual => actual.to_string() != expected.to_string(),
            _ => false,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
