use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

const DEFAULT_PRECISION: usize = 6;

/// Numeric label format: literal prefix, fixed decimals, literal suffix.
///
/// Parsed from printf-style templates such as `%.1f`, `$ %.0f` or `%.2f%%`.
/// Flags and field widths in the template are accepted and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ValueFormat {
    prefix: String,
    precision: usize,
    suffix: String,
}

impl Default for ValueFormat {
    fn default() -> Self {
        Self::fixed(1)
    }
}

impl ValueFormat {
    #[must_use]
    pub fn fixed(precision: usize) -> Self {
        Self {
            prefix: String::new(),
            precision,
            suffix: String::new(),
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix.push_str(&suffix.into());
        self
    }

    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        format!(
            "{}{:.*}{}",
            self.prefix, self.precision, value, self.suffix
        )
    }

    pub fn parse(template: &str) -> ChartResult<Self> {
        let bad = || ChartError::InvalidFormat(template.to_owned());
        let mut prefix = String::new();
        let mut chars = template.char_indices().peekable();

        while let Some((_, ch)) = chars.next() {
            if ch != '%' {
                prefix.push(ch);
                continue;
            }
            if chars.next_if(|&(_, next)| next == '%').is_some() {
                prefix.push('%');
                continue;
            }

            while chars
                .next_if(|&(_, c)| matches!(c, '-' | '+' | ' ' | '#' | '0'))
                .is_some()
            {}
            while chars.next_if(|&(_, c)| c.is_ascii_digit()).is_some() {}

            let mut precision = DEFAULT_PRECISION;
            if chars.next_if(|&(_, c)| c == '.').is_some() {
                let mut digits = String::new();
                while let Some((_, c)) = chars.next_if(|&(_, c)| c.is_ascii_digit()) {
                    digits.push(c);
                }
                precision = if digits.is_empty() {
                    0
                } else {
                    digits.parse().map_err(|_| bad())?
                };
            }

            let Some((verb_at, 'f' | 'F')) = chars.next() else {
                return Err(bad());
            };
            let rest = &template[verb_at + 1..];
            if rest.replace("%%", "").contains('%') {
                return Err(bad());
            }

            return Ok(Self {
                prefix,
                precision,
                suffix: rest.replace("%%", "%"),
            });
        }

        Err(bad())
    }
}

impl fmt::Display for ValueFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}%.{}f{}",
            self.prefix.replace('%', "%%"),
            self.precision,
            self.suffix.replace('%', "%%")
        )
    }
}

impl FromStr for ValueFormat {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ValueFormat {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ValueFormat> for String {
    fn from(value: ValueFormat) -> Self {
        value.to_string()
    }
}
