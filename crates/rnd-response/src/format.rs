//! `%`-style interpolation for catalog message templates
//!
//! Supported verbs: `%s` and `%v` (any value), `%d` (integers), `%f`
//! (floats), `%t` (booleans), `%q` (quoted strings) and `%%` for a literal
//! percent sign. A `.N` precision truncates `%s`, zero-pads `%d` to `N`
//! digits and sets the decimals of `%f`; it is rejected on other verbs and
//! above [`MAX_PRECISION`]. Width and flags are not supported.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest `.N` precision a placeholder may carry
pub const MAX_PRECISION: usize = 65_535;

/// Positional value interpolated into a message template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormatArg {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl FormatArg {
    const fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
        }
    }
}

impl fmt::Display for FormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => v.fmt(f),
            Self::Int(v) => v.fmt(f),
            Self::Float(v) => v.fmt(f),
            Self::Str(v) => f.write_str(v),
        }
    }
}

impl From<&str> for FormatArg {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for FormatArg {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for FormatArg {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for FormatArg {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for FormatArg {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for FormatArg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FormatArg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Template interpolation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Number of values differs from the number of placeholders
    #[error("template expects {expected} values, got {given}")]
    ArgumentCount { expected: usize, given: usize },

    /// Placeholder with a verb this formatter does not know
    #[error("unsupported verb '%{verb}' at byte {position}")]
    UnknownVerb { verb: char, position: usize },

    /// Value cannot be rendered by its placeholder's verb
    #[error("verb '%{verb}' cannot format value {index} of type {kind}")]
    Mismatch {
        verb: char,
        index: usize,
        kind: &'static str,
    },

    /// Precision larger than [`MAX_PRECISION`]
    #[error("precision at byte {position} exceeds {MAX_PRECISION}")]
    Precision { position: usize },

    /// Precision on a verb that does not take one
    #[error("verb '%{verb}' at byte {position} does not take a precision")]
    PrecisionNotSupported { verb: char, position: usize },

    /// Template ends in the middle of a placeholder
    #[error("template ends with an incomplete placeholder")]
    Dangling,
}

enum Piece<'a> {
    Literal(&'a str),
    Percent,
    Verb { verb: char, precision: Option<usize> },
}

/// Interpolate `args` into `template` in order
pub fn sprintf(template: &str, args: &[FormatArg]) -> Result<String, FormatError> {
    let pieces = parse(template)?;

    let expected = pieces.iter().filter(|p| matches!(p, Piece::Verb { .. })).count();
    if expected != args.len() {
        return Err(FormatError::ArgumentCount {
            expected,
            given: args.len(),
        });
    }

    let mut out = String::with_capacity(template.len());
    let mut values = args.iter().enumerate();

    for piece in pieces {
        match piece {
            Piece::Literal(text) => out.push_str(text),
            Piece::Percent => out.push('%'),
            Piece::Verb { verb, precision } => {
                // Counts were checked above
                let Some((index, arg)) = values.next() else {
                    return Err(FormatError::Dangling);
                };
                render(&mut out, verb, precision, index, arg)?;
            }
        }
    }

    Ok(out)
}

fn parse(template: &str) -> Result<Vec<Piece<'_>>, FormatError> {
    let mut pieces = Vec::new();
    let mut chars = template.char_indices().peekable();
    let mut literal_start = 0;

    while let Some((start, c)) = chars.next() {
        if c != '%' {
            continue;
        }

        if literal_start < start {
            pieces.push(Piece::Literal(&template[literal_start..start]));
        }

        let (mut position, mut verb) = chars.next().ok_or(FormatError::Dangling)?;
        let mut precision = None;

        if verb == '.' {
            let dot = position;
            let mut digits = 0usize;
            while let Some(&(_, d)) = chars.peek() {
                let Some(value) = d.to_digit(10).and_then(|v| usize::try_from(v).ok()) else {
                    break;
                };
                digits = digits
                    .checked_mul(10)
                    .and_then(|n| n.checked_add(value))
                    .filter(|&n| n <= MAX_PRECISION)
                    .ok_or(FormatError::Precision { position: dot })?;
                chars.next();
            }
            precision = Some(digits);
            (position, verb) = chars.next().ok_or(FormatError::Dangling)?;
        }

        match verb {
            '%' if precision.is_none() => pieces.push(Piece::Percent),
            's' | 'd' | 'f' => pieces.push(Piece::Verb { verb, precision }),
            'v' | 't' | 'q' if precision.is_some() => {
                return Err(FormatError::PrecisionNotSupported { verb, position });
            }
            'v' | 't' | 'q' => pieces.push(Piece::Verb { verb, precision }),
            _ => return Err(FormatError::UnknownVerb { verb, position }),
        }

        literal_start = position + verb.len_utf8();
    }

    if literal_start < template.len() {
        pieces.push(Piece::Literal(&template[literal_start..]));
    }

    Ok(pieces)
}

fn render(
    out: &mut String,
    verb: char,
    precision: Option<usize>,
    index: usize,
    arg: &FormatArg,
) -> Result<(), FormatError> {
    use fmt::Write;

    let mismatch = || FormatError::Mismatch {
        verb,
        index,
        kind: arg.kind(),
    };

    // Writing into a String cannot fail
    let _ = match (verb, arg) {
        ('s', FormatArg::Str(s)) => match precision {
            Some(max) => write!(out, "{}", s.chars().take(max).collect::<String>()),
            None => write!(out, "{s}"),
        },
        ('s' | 'v', value) => write!(out, "{value}"),
        ('d', FormatArg::Int(v)) => match precision {
            // Zero precision prints nothing for zero
            Some(0) if *v == 0 => Ok(()),
            Some(min) => {
                let sign = if *v < 0 { "-" } else { "" };
                write!(out, "{sign}{:0>min$}", v.unsigned_abs())
            }
            None => write!(out, "{v}"),
        },
        ('f', FormatArg::Float(v)) => write!(out, "{v:.prec$}", prec = precision.unwrap_or(6)),
        ('t', FormatArg::Bool(v)) => write!(out, "{v}"),
        ('q', FormatArg::Str(s)) => write!(out, "{s:?}"),
        _ => return Err(mismatch()),
    };

    Ok(())
}
