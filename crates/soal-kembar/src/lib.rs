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

//! Counts "twin" letters: positions whose character reappears exactly two
//! places later, as in the `a_a` of `"aba"`.

use std::fmt::Display;
use std::io::{BufRead, Write};
use tracing::debug;

/// Number of indices `i` with `s[i] == s[i + 2]`, indexing by `char`.
///
/// # Examples
///
/// ```
/// use soal_kembar::count_skip_one_matches;
///
/// assert_eq!(count_skip_one_matches("abab"), 2);
/// assert_eq!(count_skip_one_matches(""), 0);
/// ```
pub fn count_skip_one_matches(s: &str) -> usize {
    s.chars()
        .zip(s.chars().skip(2))
        .filter(|(a, b)| a == b)
        .count()
}

#[derive(Debug)]
pub enum KembarError {
    Io(std::io::Error),
    MissingCount,
    InvalidCount(String),
    MissingCase { expected: usize, found: usize },
}

impl Display for KembarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use KembarError::*;
        match self {
            Io(e) => write!(f, "{}", e),
            MissingCount => write!(f, "Missing case count"),
            InvalidCount(token) => write!(f, "Case count '{}' is not a non-negative integer", token),
            MissingCase { expected, found } => write!(
                f,
                "Expected {} cases but input ended after {}",
                expected, found
            ),
        }
    }
}

impl std::error::Error for KembarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KembarError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for KembarError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Reads a case count followed by that many whitespace-separated words and
/// writes one match count per line. Tokens after the last case are ignored.
///
/// Returns the number of cases answered. Answers already written stay
/// written when a later case is missing.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> Result<usize, KembarError> {
    let mut tokens = Tokens::new(input);

    let count_token = tokens.next_token()?.ok_or(KembarError::MissingCount)?;
    let expected: usize = count_token
        .parse()
        .map_err(|_| KembarError::InvalidCount(count_token.clone()))?;
    debug!(expected, "Reading cases");

    for found in 0..expected {
        let Some(word) = tokens.next_token()? else {
            output.flush()?;
            return Err(KembarError::MissingCase { expected, found });
        };
        writeln!(output, "{}", count_skip_one_matches(&word))?;
    }
    output.flush()?;
    Ok(expected)
}

struct Tokens<R> {
    lines: std::io::Lines<R>,
    pending: std::vec::IntoIter<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            pending: Vec::new().into_iter(),
        }
    }

    fn next_token(&mut self) -> std::io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.next() {
                return Ok(Some(token));
            }
            match self.lines.next() {
                Some(line) => {
                    self.pending = line?
                        .split_whitespace()
                        .map(str::to_owned)
                        .collect::<Vec<_>>()
                        .into_iter();
                }
                None => return Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_str(input: &str) -> (Result<usize, KembarError>, String) {
        let mut out = Vec::new();
        let res = run(input.as_bytes(), &mut out);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn counts_examples() {
        assert_eq!(count_skip_one_matches("abab"), 2);
        assert_eq!(count_skip_one_matches("aaaa"), 2);
        assert_eq!(count_skip_one_matches("abcabc"), 0);
        assert_eq!(count_skip_one_matches("aXaXa"), 3);
    }

    #[test]
    fn short_strings_have_no_matches() {
        assert_eq!(count_skip_one_matches(""), 0);
        assert_eq!(count_skip_one_matches("a"), 0);
        assert_eq!(count_skip_one_matches("aa"), 0);
        assert_eq!(count_skip_one_matches("aba"), 1);
    }

    #[test]
    fn counts_by_char_not_byte() {
        assert_eq!(count_skip_one_matches("éxé"), 1);
        assert_eq!(count_skip_one_matches("日本日本"), 2);
    }

    #[test]
    fn matches_the_index_definition() {
        for s in ["", "x", "xyx", "mississippi", "abracadabra", "zzzzzz"] {
            let chars: Vec<char> = s.chars().collect();
            let expected = (0..chars.len().saturating_sub(2))
                .filter(|&i| chars[i] == chars[i + 2])
                .count();
            assert_eq!(count_skip_one_matches(s), expected, "{s}");
        }
    }

    #[test]
    fn run_answers_each_case_in_order() {
        let (res, out) = run_str("3\nabab aaaa\nxyz\n");
        assert_eq!(res.unwrap(), 3);
        assert_eq!(out, "2\n2\n0\n");
    }

    #[test]
    fn run_ignores_extra_tokens() {
        let (res, out) = run_str("1 aba extra words");
        assert_eq!(res.unwrap(), 1);
        assert_eq!(out, "1\n");
    }

    #[test]
    fn run_with_zero_cases() {
        let (res, out) = run_str("0\n");
        assert_eq!(res.unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn run_reports_missing_count() {
        let (res, _) = run_str("  \n\n");
        assert!(matches!(res, Err(KembarError::MissingCount)));
    }

    #[test]
    fn run_reports_invalid_count() {
        let (res, _) = run_str("three abc");
        match res {
            Err(KembarError::InvalidCount(token)) => assert_eq!(token, "three"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn run_keeps_answers_before_missing_case() {
        let (res, out) = run_str("3 abab aba");
        assert!(matches!(
            res,
            Err(KembarError::MissingCase {
                expected: 3,
                found: 2
            })
        ));
        assert_eq!(out, "2\n1\n");
    }
}
