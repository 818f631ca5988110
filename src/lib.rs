//! dialface - declarative watch dial rendering to SVG markup.
//!
//! A watch face is described as a [`WatchDef`]: a dictionary of named
//! numeric constants plus concentric rings of repeated markers. [`render`]
//! resolves the symbolic parameters against the dictionary, lays the
//! markers out radially (skipping positions already claimed by an earlier
//! group in the same ring) and emits a single markup document.
//!
//! ```
//! let svg = dialface::render(&dialface::faces::submariner()).unwrap();
//! assert!(svg.contains("<polygon"));
//! ```

use pest_derive::Parser;

/// Parser for the arithmetic sublanguage used inside watch definitions
/// (numeric literals, `+ - * / ^`, unary minus, parentheses).
#[derive(Parser)]
#[grammar = "expr.pest"]
pub struct ExprParser;

pub mod ast;
pub mod errors;
pub mod eval;
pub mod faces;
pub mod log;
pub mod parse;
pub mod render;
pub mod resolve;
pub mod types;

pub use errors::Error;
pub use render::render;
pub use types::{ConstantDict, ElementGroup, Param, PositionSpec, Ring, ShapeKind, WatchDef};

#[cfg(test)]
mod tests {
    use super::*;
    use pest::Parser;

    #[test]
    fn grammar_accepts_arithmetic() {
        for input in [
            "1",
            "0.75",
            ".5",
            "1/60",
            "-1/60",
            "2 + 0.5 * 1.5",
            "2^3^2",
            "2^-3",
            "-(4 + 1)",
            "30 * 0.7",
        ] {
            let result = ExprParser::parse(Rule::expression, input);
            assert!(result.is_ok(), "failed to parse {input:?}: {result:?}");
        }
    }

    #[test]
    fn grammar_rejects_everything_else() {
        for input in [
            "",
            "2 == 2",
            "a_len + 2",
            "sqrt(4)",
            "1 < 2",
            "2 ** 3",
            "1 + ",
            "0x10",
        ] {
            let result = ExprParser::parse(Rule::expression, input);
            assert!(result.is_err(), "unexpectedly parsed {input:?}");
        }
    }
}
