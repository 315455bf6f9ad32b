use std::str::Lines;

use crate::error::ScriptError;

/// Line cursor over script text, tracking 1-based line numbers.
pub(crate) struct ScriptReader<'a> {
    lines: Lines<'a>,
    line_no: usize,
}

impl<'a> ScriptReader<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines(),
            line_no: 0,
        }
    }

    fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.next()?;
        self.line_no += 1;
        Some(line.trim())
    }

    /// Returns the next non-blank line, trimmed, with its line number.
    pub(crate) fn next_directive(&mut self) -> Option<(usize, &'a str)> {
        while let Some(line) = self.next_line() {
            if !line.is_empty() {
                return Some((self.line_no, line));
            }
        }
        None
    }

    /// Consumes the next line as an argument of `directive`.
    pub(crate) fn argument_line(&mut self, directive: &str) -> Result<(usize, &'a str), ScriptError> {
        match self.next_line() {
            Some(line) => Ok((self.line_no, line)),
            None => Err(ScriptError::Parse {
                line: self.line_no,
                directive: directive.to_owned(),
                message: "missing argument line".to_owned(),
            }),
        }
    }

    /// Consumes the next line as exactly `N` finite numbers.
    pub(crate) fn numbers<const N: usize>(&mut self, directive: &str) -> Result<[f64; N], ScriptError> {
        let (line, text) = self.argument_line(directive)?;
        let fail = |message: String| ScriptError::Parse {
            line,
            directive: directive.to_owned(),
            message,
        };

        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() != N {
            return Err(fail(format!("expected {N} numbers, found {}", tokens.len())));
        }
        let mut values = [0.0; N];
        for (slot, token) in values.iter_mut().zip(tokens) {
            let value: f64 = token
                .parse()
                .map_err(|_| fail(format!("invalid number `{token}`")))?;
            if !value.is_finite() {
                return Err(fail(format!("number `{token}` is not finite")));
            }
            *slot = value;
        }
        Ok(values)
    }
}
