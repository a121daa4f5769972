//! Module matrices and the golden-fixture comparison oracle
//!
//! Fixtures spell a matrix as one text line per row, `'1'` for a dark
//! module and `'0'` for a light one. Leading and trailing whitespace on each
//! line and blank lines are ignored so fixtures can be written as indented
//! multi-line literals.

use crate::symbol::Symbol;
use std::fmt;

/// Rectangular grid of dark (`true`) and light modules.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModuleMatrix {
    rows: usize,
    width: usize,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// All-light matrix.
    pub fn new(rows: usize, width: usize) -> Self {
        Self {
            rows,
            width,
            modules: vec![false; rows * width],
        }
    }

    /// Build from row-major modules. Returns `None` if the length does not
    /// match `rows * width`.
    pub fn from_modules(rows: usize, width: usize, modules: Vec<bool>) -> Option<Self> {
        (modules.len() == rows * width).then_some(Self {
            rows,
            width,
            modules,
        })
    }

    /// Parse fixture text. Rows must all have the same length and contain
    /// only `'0'` and `'1'`.
    pub fn parse(expected: &str) -> Result<Self, ModulesMismatch> {
        let lines = fixture_rows(expected);
        let width = lines.first().map_or(0, |l| l.chars().count());
        let mut matrix = Self::new(lines.len(), width);
        for (row, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if len != width {
                return Err(ModulesMismatch::Width {
                    row,
                    actual: len,
                    expected: width,
                });
            }
            for (column, ch) in line.chars().enumerate() {
                matrix.set(row, column, parse_module(ch, row, column)?);
            }
        }
        Ok(matrix)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Module at `(row, column)`; out of range reads as light.
    pub fn get(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.width && self.modules[row * self.width + column]
    }

    /// # Panics
    ///
    /// Panics if `(row, column)` is outside the matrix.
    pub fn set(&mut self, row: usize, column: usize, dark: bool) {
        assert!(row < self.rows && column < self.width, "module ({row}, {column}) out of range");
        self.modules[row * self.width + column] = dark;
    }

    pub fn row(&self, row: usize) -> &[bool] {
        &self.modules[row * self.width..(row + 1) * self.width]
    }

    /// First point where `self` (actual) diverges from `expected`.
    /// Dimensions are checked before any module.
    pub fn first_divergence(&self, expected: &ModuleMatrix) -> Option<ModulesMismatch> {
        if self.rows != expected.rows {
            return Some(ModulesMismatch::Rows {
                actual: self.rows,
                expected: expected.rows,
            });
        }
        if self.width != expected.width {
            return Some(ModulesMismatch::Width {
                row: 0,
                actual: self.width,
                expected: expected.width,
            });
        }
        let index = self
            .modules
            .iter()
            .zip(&expected.modules)
            .position(|(a, e)| a != e)?;
        Some(ModulesMismatch::Module {
            row: index / self.width,
            column: index % self.width,
            expected: expected.modules[index],
        })
    }
}

impl fmt::Display for ModuleMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for &m in self.row(r) {
                f.write_str(if m { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Why a module matrix did not match its fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModulesMismatch {
    /// Row counts differ
    Rows { actual: usize, expected: usize },
    /// Row `row` has a different number of modules
    Width {
        row: usize,
        actual: usize,
        expected: usize,
    },
    /// First module that differs
    Module {
        row: usize,
        column: usize,
        expected: bool,
    },
    /// Fixture contains something other than `'0'` or `'1'`
    BadChar { row: usize, column: usize, ch: char },
}

impl ModulesMismatch {
    pub fn is_dimension(&self) -> bool {
        matches!(self, Self::Rows { .. } | Self::Width { .. })
    }

    /// `(row, column)` of the divergence; dimension mismatches report the
    /// first row or column past the shorter side.
    pub fn location(&self) -> (usize, usize) {
        match *self {
            Self::Rows { actual, expected } => (actual.min(expected), 0),
            Self::Width {
                row,
                actual,
                expected,
            } => (row, actual.min(expected)),
            Self::Module { row, column, .. } | Self::BadChar { row, column, .. } => (row, column),
        }
    }
}

impl fmt::Display for ModulesMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Rows { actual, expected } => write!(f, "rows {actual} != {expected}"),
            Self::Width {
                row,
                actual,
                expected,
            } => write!(f, "row {row} width {actual} != {expected}"),
            Self::Module {
                row,
                column,
                expected,
            } => write!(
                f,
                "module ({row}, {column}) {} != {}",
                u8::from(!expected),
                u8::from(expected)
            ),
            Self::BadChar { row, column, ch } => {
                write!(f, "invalid fixture character {ch:?} at ({row}, {column})")
            }
        }
    }
}

impl std::error::Error for ModulesMismatch {}

fn fixture_rows(expected: &str) -> Vec<&str> {
    expected
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

fn parse_module(ch: char, row: usize, column: usize) -> Result<bool, ModulesMismatch> {
    match ch {
        '1' => Ok(true),
        '0' => Ok(false),
        _ => Err(ModulesMismatch::BadChar { row, column, ch }),
    }
}

/// Compare a produced matrix against fixture text, stopping at the first
/// discrepancy.
pub fn modules_cmp(matrix: &ModuleMatrix, expected: &str) -> Result<(), ModulesMismatch> {
    let lines = fixture_rows(expected);
    if lines.len() != matrix.rows() {
        return Err(ModulesMismatch::Rows {
            actual: matrix.rows(),
            expected: lines.len(),
        });
    }
    for (row, line) in lines.iter().enumerate() {
        let len = line.chars().count();
        if len != matrix.width() {
            return Err(ModulesMismatch::Width {
                row,
                actual: matrix.width(),
                expected: len,
            });
        }
        for (column, ch) in line.chars().enumerate() {
            let expected = parse_module(ch, row, column)?;
            if matrix.get(row, column) != expected {
                return Err(ModulesMismatch::Module {
                    row,
                    column,
                    expected,
                });
            }
        }
    }
    Ok(())
}

/// All rows concatenated, the form handed to external decoders.
pub fn modules_dump(matrix: &ModuleMatrix) -> String {
    let mut dump = String::with_capacity(matrix.rows() * matrix.width());
    for r in 0..matrix.rows() {
        dump.extend(matrix.row(r).iter().map(|&m| if m { '1' } else { '0' }));
    }
    dump
}

/// Fixture text for generate mode: each row wrapped in `prefix`/`postfix`.
pub fn modules_print(matrix: &ModuleMatrix, prefix: &str, postfix: &str) -> String {
    let mut out = String::new();
    for r in 0..matrix.rows() {
        out.push_str(prefix);
        out.extend(matrix.row(r).iter().map(|&m| if m { '1' } else { '0' }));
        out.push_str(postfix);
    }
    out
}

/// Field-by-field symbol comparison. Returns 0 when equal, otherwise a code
/// identifying the first differing field: 1 symbology, 2 rows, 3 width,
/// 4 modules, 5 text.
pub fn symbol_cmp(a: &Symbol, b: &Symbol) -> u32 {
    if a.symbology != b.symbology {
        return 1;
    }
    if a.rows() != b.rows() {
        return 2;
    }
    if a.width() != b.width() {
        return 3;
    }
    if a.matrix.first_divergence(&b.matrix).is_some() {
        return 4;
    }
    if a.text != b.text {
        return 5;
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbology;

    const ANNEX_I_MICRO: &str = "
        1111111010101
        1000001011101
        1011101001101
        1011101001111
        1011101011100
        1000001010001
        1111111001111
        0000000001100
        1101000010001
        0110101010101
        1110011111110
        0001010000110
        1110100110111
    ";

    #[test]
    fn test_parse_and_display() {
        let m = ModuleMatrix::parse(ANNEX_I_MICRO).unwrap();
        assert_eq!(m.rows(), 13);
        assert_eq!(m.width(), 13);
        assert!(m.get(0, 0));
        assert!(!m.get(7, 0));
        assert_eq!(modules_cmp(&m, &m.to_string()), Ok(()));
    }

    #[test]
    fn test_cmp_self() {
        let m = ModuleMatrix::parse(ANNEX_I_MICRO).unwrap();
        assert_eq!(modules_cmp(&m, ANNEX_I_MICRO), Ok(()));
        assert_eq!(m.first_divergence(&m.clone()), None);
    }

    #[test]
    fn test_first_divergence() {
        let expected = ModuleMatrix::parse(ANNEX_I_MICRO).unwrap();
        let mut actual = expected.clone();
        actual.set(9, 4, !actual.get(9, 4));
        let err = modules_cmp(&actual, ANNEX_I_MICRO).unwrap_err();
        assert_eq!(
            err,
            ModulesMismatch::Module {
                row: 9,
                column: 4,
                expected: expected.get(9, 4)
            }
        );
        assert_eq!(err.location(), (9, 4));
        assert_eq!(actual.first_divergence(&expected), Some(err));
    }

    #[test]
    fn test_dimension_mismatch() {
        let wide = ModuleMatrix::parse("000111").unwrap();
        assert_eq!(
            modules_cmp(&wide, "000\n111"),
            Err(ModulesMismatch::Rows {
                actual: 1,
                expected: 2
            })
        );

        let tall = ModuleMatrix::parse("000\n111").unwrap();
        let err = modules_cmp(&tall, "0001\n111").unwrap_err();
        assert_eq!(
            err,
            ModulesMismatch::Width {
                row: 0,
                actual: 3,
                expected: 4
            }
        );
        assert!(err.is_dimension());

        // Same modules, different shape
        let a = ModuleMatrix::from_modules(2, 3, vec![false; 6]).unwrap();
        let b = ModuleMatrix::from_modules(3, 2, vec![false; 6]).unwrap();
        assert!(a.first_divergence(&b).unwrap().is_dimension());
    }

    #[test]
    fn test_bad_char() {
        let m = ModuleMatrix::new(1, 3);
        assert_eq!(
            modules_cmp(&m, "0x0"),
            Err(ModulesMismatch::BadChar {
                row: 0,
                column: 1,
                ch: 'x'
            })
        );
    }

    #[test]
    fn test_non_ascii_fixture() {
        // Widths count characters, so parse and compare report the same fault
        let fault = ModulesMismatch::BadChar {
            row: 1,
            column: 1,
            ch: 'é',
        };
        assert_eq!(ModuleMatrix::parse("10\n1é"), Err(fault));
        let matrix = ModuleMatrix::parse("10\n10").unwrap();
        assert_eq!(modules_cmp(&matrix, "10\n1é"), Err(fault));

        let err = ModuleMatrix::parse("10\n1é0").unwrap_err();
        assert_eq!(
            err,
            ModulesMismatch::Width {
                row: 1,
                actual: 3,
                expected: 2
            }
        );
    }

    #[test]
    fn test_dump_and_print() {
        let m = ModuleMatrix::parse("10\n01").unwrap();
        assert_eq!(modules_dump(&m), "1001");
        assert_eq!(modules_print(&m, "    \"", "\"\n"), "    \"10\"\n    \"01\"\n");
    }

    #[test]
    fn test_symbol_cmp() {
        let a = Symbol::new(Symbology::QrCode, ModuleMatrix::parse("10\n01").unwrap());
        let mut b = a.clone();
        assert_eq!(symbol_cmp(&a, &b), 0);
        b.text.push('A');
        assert_eq!(symbol_cmp(&a, &b), 5);
        b.matrix.set(0, 0, false);
        assert_eq!(symbol_cmp(&a, &b), 4);
        b.symbology = Symbology::MicroQr;
        assert_eq!(symbol_cmp(&a, &b), 1);
    }
}
