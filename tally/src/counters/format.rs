use std::fmt::{Display, Formatter};

/// Represents the way a counter value is rendered as text.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberFormat {
    /// Fixed-point notation with the given number of decimals: `42.00`.
    Fixed { decimals: usize },
    /// Integer part (floored) with thousands separated by commas: `1,234,567`.
    Grouped,
    /// Short notation for large numbers: `1.2M`, `3.4K`, or the plain number below 1000.
    Compact,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::Fixed { decimals: 0 }
    }
}

impl NumberFormat {
    /// Renders the value.
    ///
    /// # Example
    /// ```
    /// use tally::counters::NumberFormat;
    ///
    /// assert_eq!(NumberFormat::Fixed { decimals: 2 }.format(42.0), "42.00");
    /// assert_eq!(NumberFormat::Grouped.format(1234567.9), "1,234,567");
    /// assert_eq!(NumberFormat::Compact.format(1500.0), "1.5K");
    /// ```
    pub fn format(&self, value: f64) -> String {
        match self {
            NumberFormat::Fixed { decimals } => fixed(value, *decimals),
            NumberFormat::Grouped => group_thousands(value.floor()),
            NumberFormat::Compact => match value {
                v if v >= 1_000_000.0 => format!("{}M", fixed(v / 1_000_000.0, 1)),
                v if v >= 1_000.0 => format!("{}K", fixed(v / 1_000.0, 1)),
                v => format!("{}", v),
            },
        }
    }
}

/// Fixed-point notation where ties round away from zero (`2.5` gives `3`, not `2`).
fn fixed(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let scaled = value * factor;
    let rounded = if scaled.is_finite() {
        scaled.round() / factor
    } else {
        value
    };
    format!("{:.*}", decimals, rounded)
}

/// Inserts a comma every three digits of an integral value.
fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0.0 {
        grouped.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

impl Display for NumberFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NumberFormat::Fixed { decimals } => write!(f, "fixed({})", decimals),
            NumberFormat::Grouped => write!(f, "grouped"),
            NumberFormat::Compact => write!(f, "compact"),
        }
    }
}
