//! Runs the conversion test corpus in `testdata/`.

use anyhow::{anyhow, bail, Result};

use crate::{bid::D128, ctx::Condition};

mod parse;

pub use parse::parse;

/// A single test case.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Test {
    pub id: String,
    pub op: Op,
    /// The conditions the operation raises.
    pub conds: Condition,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Op {
    /// Parse a literal.
    FromString { input: String, output: Output },
    /// Format a bit pattern.
    ToString { input: u128, output: String },
}

/// The expected result of parsing.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Output {
    Bits(u128),
    Syntax,
    Overflow,
}

impl Test {
    /// Runs the test case.
    pub fn run(&self) -> Result<()> {
        let Self { id, op, conds } = self;
        match op {
            Op::FromString { input, output } => {
                let got = D128::parse_with_conditions(input);
                match (got, *output) {
                    (Ok((d, flags)), Output::Bits(want)) => {
                        if d.to_bits() != want {
                            bail!(
                                "{id}: `{input}`: got {:#034x}, want {want:#034x}",
                                d.to_bits()
                            );
                        }
                        if flags != *conds {
                            bail!("{id}: `{input}`: got {flags:?}, want {conds:?}");
                        }
                        // Finite results survive formatting.
                        if d.is_finite() {
                            let s = d.to_string();
                            let again = D128::parse(&s)
                                .map_err(|err| anyhow!("{id}: `{s}`: {err}"))?;
                            if again != d {
                                bail!("{id}: `{input}`: `{s}` parsed as {again:?}, want {d:?}");
                            }
                        }
                    }
                    (Err(err), Output::Syntax) if err.is_syntax() => {}
                    (Err(err), Output::Overflow) if err.is_overflow() => {}
                    (got, want) => bail!("{id}: `{input}`: got {got:?}, want {want:?}"),
                }
            }
            Op::ToString { input, output } => {
                let got = D128::from_bits(*input).to_string();
                if got != *output {
                    bail!("{id}: {input:#034x}: got `{got}`, want `{output}`");
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static CORPUS: &str = include_str!("../../testdata/decimal128.corpus");

    #[test]
    fn test_corpus() {
        let cases = parse(CORPUS).unwrap();
        let mut failed = 0;
        for case in &cases {
            if let Err(err) = case.run() {
                println!("{err:#}");
                failed += 1;
            }
        }
        assert_eq!(failed, 0, "{failed} of {} cases failed", cases.len());
    }

    #[test]
    fn test_corpus_covers_conditions() {
        let cases = parse(CORPUS).unwrap();
        let all = cases
            .iter()
            .fold(Condition::empty(), |acc, case| acc | case.conds);
        assert_eq!(all, Condition::all());
    }
}
