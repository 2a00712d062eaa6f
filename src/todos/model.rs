use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub done: bool,
    // Records written before labels existed have no such field
    #[serde(default)]
    pub labels: Vec<String>,
}

impl Todo {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
            labels: Vec::new(),
        }
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Appends `label` unless the todo already carries it. Returns whether it was added.
    pub fn add_label(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.has_label(&label) {
            return false;
        }
        self.labels.push(label);
        true
    }

    pub fn matches_id(&self, id: &IdArg) -> bool {
        self.id as f64 == id.value()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Done,
    NotDone,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Done => "done",
            Status::NotDone => "not-done",
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        todo.done == (*self == Status::Done)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "done" => Ok(Status::Done),
            "not-done" => Ok(Status::NotDone),
            _ => Err(()),
        }
    }
}

/// A todo id as typed on the command line, already checked to be numeric.
///
/// Ids are looked up by numeric value, so `"01"`, `" 1 "` and `"1e0"` all address
/// todo `1`, while `"1.5"` is a valid argument that simply matches nothing.
/// Displaying an `IdArg` gives back the argument as it was typed.
#[derive(Debug, Clone, PartialEq)]
pub struct IdArg {
    value: f64,
    raw: String,
}

impl IdArg {
    /// Coerces a raw argument to a number, or `None` when it isn't one.
    ///
    /// Surrounding whitespace is ignored and a blank argument counts as `0`.
    /// Accepted forms: decimal literals with optional sign, fraction and exponent,
    /// unsigned `0x`/`0o`/`0b` integers, and `Infinity` with an optional sign.
    pub fn parse(raw: &str) -> Option<Self> {
        numeric_value(raw.trim()).map(|value| IdArg {
            value,
            raw: raw.to_string(),
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl From<u64> for IdArg {
    fn from(id: u64) -> Self {
        IdArg {
            value: id as f64,
            raw: id.to_string(),
        }
    }
}

impl fmt::Display for IdArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn numeric_value(s: &str) -> Option<f64> {
    if s.is_empty() {
        return Some(0.0);
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    let unsigned = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    if unsigned == "Infinity" {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    if !is_decimal_literal(unsigned) {
        return None;
    }
    s.parse::<f64>().ok()
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
    })
}

/// `digits [. digits] [(e|E) [+|-] digits]`, with at least one mantissa digit.
fn is_decimal_literal(s: &str) -> bool {
    let (mantissa, exponent) = match s.find(&['e', 'E'][..]) {
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    };

    let mut parts = mantissa.splitn(2, '.');
    let int_part = parts.next().unwrap_or("");
    let frac_part = parts.next().unwrap_or("");
    let all_digits = |p: &str| p.chars().all(|c| c.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return false;
    }
    if int_part.is_empty() && frac_part.is_empty() {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let exp = exp.strip_prefix(&['+', '-'][..]).unwrap_or(exp);
            !exp.is_empty() && all_digits(exp)
        }
    }
}
