// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Test-Case Text Format
//!
//! A test case is stored as plain text, one space-separated record per line:
//!
//! ```text
//! m n
//! p h t
//! x y      (h house lines)
//! x y      (t tree lines)
//! ```
//!
//! There is no marker telling uniform and clustered files apart; readers
//! rely on the two leading lines only.

use crate::err::ParseTestCaseError;
use crate::testcase::TestCase;
use soal_core::{GridCoord, GridDims};
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

impl TestCase {
    /// Writes the text form to `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        let dims = self.dims();
        writeln!(writer, "{} {}", dims.rows(), dims.cols())?;
        writeln!(
            writer,
            "{} {} {}",
            self.stations(),
            self.house_count(),
            self.tree_count()
        )?;
        for c in self.houses().iter().chain(self.trees()) {
            writeln!(writer, "{} {}", c.x(), c.y())?;
        }
        Ok(())
    }

    /// Creates (or truncates) `path` and writes the text form to it.
    ///
    /// The file is flushed before returning so that buffered write errors
    /// are reported here and not swallowed on drop.
    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()
    }

    /// Parses the text form.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self, ParseTestCaseError> {
        let mut lines = NumberedLines::new(reader);

        let (line, header) = lines.fields::<2>("grid dimensions")?;
        let dims = GridDims::new(header[0], header[1])
            .map_err(|_| ParseTestCaseError::EmptyGrid { line })?;

        let (_, [stations, house_count, tree_count]) = lines.fields::<3>("entity counts")?;

        let houses = lines.coords(house_count, dims.cells(), "house coordinate")?;
        let trees = lines.coords(tree_count, dims.cells(), "tree coordinate")?;

        if let Some(line) = lines.next_non_blank()? {
            return Err(ParseTestCaseError::TrailingData { line });
        }

        Ok(TestCase::new(dims, stations, houses, trees)?)
    }

    #[inline]
    pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Self, ParseTestCaseError> {
        Self::read_from(std::io::BufReader::new(File::open(path)?))
    }
}

impl FromStr for TestCase {
    type Err = ParseTestCaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::read_from(s.as_bytes())
    }
}

struct NumberedLines<R> {
    inner: std::io::Lines<R>,
    line: usize,
}

impl<R: BufRead> NumberedLines<R> {
    fn new(reader: R) -> Self {
        Self {
            inner: reader.lines(),
            line: 0,
        }
    }

    fn next_line(&mut self, expected: &'static str) -> Result<(usize, String), ParseTestCaseError> {
        self.line += 1;
        match self.inner.next() {
            Some(text) => Ok((self.line, text?)),
            None => Err(ParseTestCaseError::MissingLine {
                line: self.line,
                expected,
            }),
        }
    }

    fn fields<const N: usize>(
        &mut self,
        expected: &'static str,
    ) -> Result<(usize, [usize; N]), ParseTestCaseError> {
        let (line, text) = self.next_line(expected)?;
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() != N {
            return Err(ParseTestCaseError::FieldCount {
                line,
                expected: N,
                found: tokens.len(),
            });
        }
        let mut out = [0usize; N];
        for (slot, token) in out.iter_mut().zip(tokens) {
            *slot = token
                .parse()
                .map_err(|_| ParseTestCaseError::InvalidInteger {
                    line,
                    token: token.to_string(),
                })?;
        }
        Ok((line, out))
    }

    /// Reads `count` coordinate lines. The header count is untrusted, so
    /// preallocation is capped at `max_hint`.
    fn coords(
        &mut self,
        count: usize,
        max_hint: usize,
        expected: &'static str,
    ) -> Result<Vec<GridCoord>, ParseTestCaseError> {
        let mut out = Vec::with_capacity(count.min(max_hint));
        for _ in 0..count {
            let (_, [x, y]) = self.fields::<2>(expected)?;
            out.push(GridCoord::new(x, y));
        }
        Ok(out)
    }

    fn next_non_blank(&mut self) -> Result<Option<usize>, ParseTestCaseError> {
        for text in self.inner.by_ref() {
            self.line += 1;
            if !text?.trim().is_empty() {
                return Ok(Some(self.line));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::err::InvalidTestCaseError;

    fn sample() -> TestCase {
        TestCase::new(
            GridDims::new(4, 3).unwrap(),
            1,
            vec![GridCoord::new(1, 1), GridCoord::new(4, 3)],
            vec![GridCoord::new(2, 2)],
        )
        .unwrap()
    }

    #[test]
    fn test_write_layout() {
        let mut buf = Vec::new();
        sample().write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "4 3\n1 2 1\n1 1\n4 3\n2 2\n");
    }

    #[test]
    fn test_read_back_written_text() {
        let mut buf = Vec::new();
        sample().write_to(&mut buf).unwrap();
        let parsed = TestCase::read_from(buf.as_slice()).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_trailing_blank_lines_are_ignored() {
        let tc: TestCase = "4 3\n1 2 1\n1 1\n4 3\n2 2\n\n  \n".parse().unwrap();
        assert_eq!(tc, sample());
    }

    #[test]
    fn test_missing_tree_line() {
        let err = "4 3\n1 2 1\n1 1\n4 3\n".parse::<TestCase>().unwrap_err();
        assert!(matches!(
            err,
            ParseTestCaseError::MissingLine {
                line: 5,
                expected: "tree coordinate"
            }
        ));
    }

    #[test]
    fn test_huge_count_is_a_missing_line() {
        let err = "1 1\n0 18446744073709551615 0\n1 1\n"
            .parse::<TestCase>()
            .unwrap_err();
        assert!(matches!(
            err,
            ParseTestCaseError::MissingLine {
                line: 4,
                expected: "house coordinate"
            }
        ));
    }

    #[test]
    fn test_wrong_field_count() {
        let err = "4 3\n1 2\n".parse::<TestCase>().unwrap_err();
        assert!(matches!(
            err,
            ParseTestCaseError::FieldCount {
                line: 2,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_non_integer_token() {
        let err = "4 x\n".parse::<TestCase>().unwrap_err();
        match err {
            ParseTestCaseError::InvalidInteger { line, token } => {
                assert_eq!(line, 1);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_negative_coordinate_is_rejected() {
        let err = "4 3\n1 1 0\n-1 2\n".parse::<TestCase>().unwrap_err();
        assert!(matches!(err, ParseTestCaseError::InvalidInteger { line: 3, .. }));
    }

    #[test]
    fn test_zero_dimension() {
        let err = "0 3\n1 0 0\n".parse::<TestCase>().unwrap_err();
        assert!(matches!(err, ParseTestCaseError::EmptyGrid { line: 1 }));
    }

    #[test]
    fn test_trailing_data() {
        let err = "4 3\n1 0 0\n1 1\n".parse::<TestCase>().unwrap_err();
        assert!(matches!(err, ParseTestCaseError::TrailingData { line: 3 }));
    }

    #[test]
    fn test_overlap_reported_as_invalid() {
        let err = "4 3\n1 1 1\n2 2\n2 2\n".parse::<TestCase>().unwrap_err();
        assert!(matches!(
            err,
            ParseTestCaseError::Invalid(InvalidTestCaseError::Duplicate(_))
        ));
    }
}
