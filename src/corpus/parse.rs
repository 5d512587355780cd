use anyhow::{bail, Context, Result};

use super::{Op, Output, Test};
use crate::ctx::Condition;

/// Parses test cases.
pub fn parse(s: &str) -> Result<Vec<Test>> {
    let mut cases = Vec::new();
    for (i, line) in s.lines().enumerate() {
        let line = line.trim_end();
        if line.is_empty() || line.starts_with("--") {
            continue;
        }
        if let Some(v) = line.strip_prefix("version: ") {
            if v.trim() != "1" {
                bail!("#{i}: unsupported version: `{v}`");
            }
            continue;
        }
        let case = Buf { s: line }
            .parse_test()
            .with_context(|| format!("#{i}: unable to parse test: `{line}`"))?;
        cases.push(case);
    }
    if cases.is_empty() {
        bail!("no test cases");
    }
    Ok(cases)
}

struct Buf<'a> {
    s: &'a str,
}

impl<'a> Buf<'a> {
    fn parse_test(&mut self) -> Result<Test> {
        let id = self.require_token("id")?;
        let op = self.require_token("operation")?;
        let input = self.require_token("input")?;
        let arrow = self.require_token("`->`")?;
        if arrow != "->" {
            bail!("expected `->`, got `{arrow}`");
        }

        let op = match op.as_str() {
            "fromstring" => Op::FromString {
                input,
                output: parse_output(&self.require_token("output")?)?,
            },
            "tostring" => Op::ToString {
                input: parse_bits(&input)?,
                output: self.require_token("output")?,
            },
            _ => bail!("unknown op: `{op}`"),
        };

        let mut conds = Condition::empty();
        while let Some(name) = self.parse_token()? {
            conds |= parse_condition(&name)?;
        }
        if matches!(op, Op::ToString { .. }) && !conds.is_empty() {
            bail!("`tostring` does not raise conditions");
        }
        Ok(Test { id, op, conds })
    }

    fn parse_token(&mut self) -> Result<Option<String>> {
        self.s = self.s.trim_start_matches(' ');
        match self.s.strip_prefix('\'') {
            Some(rest) => {
                self.s = rest;
                self.parse_quoted_token().map(Some)
            }
            None => Ok(self.parse_unquoted_token()),
        }
    }

    fn require_token(&mut self, what: &str) -> Result<String> {
        self.parse_token()?
            .with_context(|| format!("expected {what} token"))
    }

    /// Parses the rest of a single-quoted token. A doubled
    /// quote is a literal quote.
    fn parse_quoted_token(&mut self) -> Result<String> {
        let mut token = String::new();
        loop {
            let (chunk, rest) = self
                .s
                .split_once('\'')
                .context("unterminated quoted token")?;
            token.push_str(chunk);
            match rest.strip_prefix('\'') {
                Some(rest) => {
                    token.push('\'');
                    self.s = rest;
                }
                None => {
                    self.s = rest;
                    return Ok(token);
                }
            }
        }
    }

    fn parse_unquoted_token(&mut self) -> Option<String> {
        if self.s.is_empty() {
            return None;
        }
        let (token, rest) = self.s.split_once(' ').unwrap_or((self.s, ""));
        self.s = rest;
        Some(token.to_owned())
    }
}

fn parse_output(s: &str) -> Result<Output> {
    let output = match s {
        "!syntax" => Output::Syntax,
        "!overflow" => Output::Overflow,
        _ => Output::Bits(parse_bits(s)?),
    };
    Ok(output)
}

/// Parses `#` followed by 32 big-endian hex digits.
fn parse_bits(s: &str) -> Result<u128> {
    let digits = s
        .strip_prefix('#')
        .with_context(|| format!("bit pattern missing `#`: `{s}`"))?;
    let mut buf = [0u8; 16];
    hex::decode_to_slice(digits, &mut buf)
        .with_context(|| format!("invalid bit pattern: `{s}`"))?;
    Ok(u128::from_be_bytes(buf))
}

fn parse_condition(s: &str) -> Result<Condition> {
    let cond = match s {
        "Clamped" => Condition::CLAMPED,
        "Conversion_syntax" => Condition::CONVERSION_SYNTAX,
        "Inexact" => Condition::INEXACT,
        "Overflow" => Condition::OVERFLOW,
        "Rounded" => Condition::ROUNDED,
        "Underflow" => Condition::UNDERFLOW,
        _ => bail!("unknown condition: `{s}`"),
    };
    Ok(cond)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let got = parse("version: 1\nx1 fromstring 'it''s 1' -> #7c000000000000000000000000000000 Conversion_syntax\n")
            .unwrap();
        assert_eq!(got.len(), 1);
        let Test { id, op, conds } = &got[0];
        assert_eq!(id, "x1");
        assert_eq!(
            op,
            &Op::FromString {
                input: "it's 1".to_owned(),
                output: Output::Bits(0x7c00_0000_0000_0000_0000_0000_0000_0000),
            }
        );
        assert_eq!(*conds, Condition::CONVERSION_SYNTAX);
    }

    #[test]
    fn test_parse_empty_quoted() {
        let got = parse("x1 fromstring '' -> !syntax").unwrap();
        assert_eq!(
            got[0].op,
            Op::FromString {
                input: String::new(),
                output: Output::Syntax,
            }
        );
    }

    #[test]
    fn test_parse_invalid() {
        for s in [
            "x1 fromstring 1",
            "x1 fromstring 1 => #30400000000000000000000000000001",
            "x1 fromstring 1 -> #3040",
            "x1 fromstring 1 -> #30400000000000000000000000000001 Bogus",
            "x1 frobnicate 1 -> 1",
            "x1 fromstring 'unterminated -> !syntax",
            "x1 tostring #30400000000000000000000000000001 -> 1 Inexact",
            "version: 2",
            "",
        ] {
            assert!(parse(s).is_err(), "`{s}`");
        }
    }
}
