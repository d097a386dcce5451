//! Cell reference parsing and formatting.
//!
//! Converts between spreadsheet-style references ("A1", "B2", "AA100") and the
//! 1-based column/row numbers a host reports for an edited range.
//!
//! # Examples
//!
//! ```
//! use platefix_engine::CellRef;
//!
//! let cell = CellRef::parse_a1("B3").unwrap();
//! assert_eq!(cell.col, 2); // 1-based
//! assert_eq!(cell.row, 3);
//! assert_eq!(cell.to_string(), "B3");
//! ```

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// A reference to a cell by 1-based column and row.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct CellRef {
    pub col: u32,
    pub row: u32,
}

fn a1_re() -> &'static Regex {
    static A1_RE: OnceLock<Regex> = OnceLock::new();
    A1_RE.get_or_init(|| {
        Regex::new(r"^(?<letters>[A-Za-z]+)(?<numbers>[0-9]+)$")
            .expect("A1 reference regex must compile")
    })
}

impl CellRef {
    pub fn new(col: u32, row: u32) -> CellRef {
        CellRef { col, row }
    }

    /// Parse a cell reference from spreadsheet notation (e.g., "A1", "b2", "AA10").
    /// Returns None if the input is invalid or a coordinate is zero.
    pub fn parse_a1(name: &str) -> Option<CellRef> {
        let caps = a1_re().captures(name.trim())?;
        let letters = &caps["letters"];
        let numbers = &caps["numbers"];

        let mut col = 0u32;
        for c in letters.to_ascii_uppercase().bytes() {
            let digit = (c - b'A') as u32 + 1;
            col = col.checked_mul(26)?.checked_add(digit)?;
        }

        let row = numbers.parse::<u32>().ok().filter(|r| *r > 0)?;

        Some(CellRef::new(col, row))
    }

    /// Convert a 1-based column number to letters (1 -> A, 26 -> Z, 27 -> AA).
    /// Column 0 has no letters and yields an empty string.
    pub fn col_to_letters(col: u32) -> String {
        let mut result = String::new();
        let mut n = col;
        while n > 0 {
            n -= 1;
            result.insert(0, (b'A' + (n % 26) as u8) as char);
            n /= 26;
        }
        result
    }
}

impl std::str::FromStr for CellRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_a1(s).ok_or_else(|| format!("Invalid cell reference: {}", s))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CellRef::col_to_letters(self.col), self.row)
    }
}
