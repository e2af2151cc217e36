//! Classification of property default values.
//!
//! Sources report defaults as raw PHP expression text; [`PhpValue::from_source`]
//! turns the common literal forms into typed values and keeps everything
//! else (`self::FOO`, `PHP_INT_MAX`, `1 << 3`) as an opaque expression.

/// A property's declared default value.
#[derive(Debug, Clone, PartialEq)]
pub enum PhpValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// An array literal, kept as written (`[]`, `['a' => 1]`, `array()`).
    Array(String),
    /// Any other constant expression, kept as written.
    Expression(String),
}

impl PhpValue {
    /// Classify the source text of a default value expression.
    pub fn from_source(raw: &str) -> Self {
        let s = raw.trim();
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "null" => return Self::Null,
            "true" => return Self::Bool(true),
            "false" => return Self::Bool(false),
            _ => {}
        }

        let is_array_call = lower
            .strip_prefix("array")
            .is_some_and(|rest| rest.trim_start().starts_with('('))
            && s.ends_with(')');
        if (s.starts_with('[') && s.ends_with(']')) || is_array_call {
            return Self::Array(s.to_string());
        }

        if let Some(text) = unquote(s) {
            return Self::String(text);
        }

        if looks_numeric(s) {
            if let Some(int) = parse_int(s) {
                return Self::Int(int);
            }
            if let Ok(float) = s.replace('_', "").parse::<f64>() {
                return Self::Float(float);
            }
        }

        Self::Expression(s.to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Numeric literals start with a digit, a dot, or a sign followed by one.
/// This keeps constants like `INF` and `NAN` out of the float parser.
fn looks_numeric(s: &str) -> bool {
    let unsigned = s.strip_prefix(['-', '+']).unwrap_or(s);
    unsigned
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '.')
}

fn parse_int(s: &str) -> Option<i64> {
    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits = unsigned.replace('_', "");
    let lower = digits.to_ascii_lowercase();

    let magnitude = if let Some(hex) = lower.strip_prefix("0x") {
        i64::from_str_radix(hex, 16).ok()?
    } else if let Some(bin) = lower.strip_prefix("0b") {
        i64::from_str_radix(bin, 2).ok()?
    } else if let Some(oct) = lower.strip_prefix("0o") {
        i64::from_str_radix(oct, 8).ok()?
    } else if lower.len() > 1 && lower.starts_with('0') {
        i64::from_str_radix(&lower[1..], 8).ok()?
    } else {
        lower.parse::<i64>().ok()?
    };

    Some(if negative { -magnitude } else { magnitude })
}

/// Decode a single- or double-quoted PHP string literal.
fn unquote(s: &str) -> Option<String> {
    let quote = s.chars().next().filter(|c| *c == '\'' || *c == '"')?;
    let inner = s.strip_prefix(quote)?.strip_suffix(quote)?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(next) = chars.next() else {
            out.push('\\');
            break;
        };
        match (quote, next) {
            ('\'', '\'') | (_, '\\') => out.push(next),
            ('"', '"') | ('"', '$') => out.push(next),
            ('"', 'n') => out.push('\n'),
            ('"', 't') => out.push('\t'),
            ('"', 'r') => out.push('\r'),
            _ => {
                out.push('\\');
                out.push(next);
            }
        }
    }
    Some(out)
}
