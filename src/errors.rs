//! Error types with diagnostic codes using miette.
//!
//! A malformed expression or argument list indicates a malformed watch
//! definition (a programming error in the input), so nothing here is
//! recovered locally; errors propagate to the render caller.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug, Clone)]
pub enum Error {
    /// The expression uses syntax outside the arithmetic sublanguage
    /// (identifiers, comparisons, calls, ...).
    #[error("unsupported expression: {expr:?}")]
    #[diagnostic(
        code(dialface::eval::unsupported_expression),
        help("only numeric literals, + - * / ^, unary minus and parentheses are allowed")
    )]
    UnsupportedExpression { expr: String },

    #[error("division by zero")]
    #[diagnostic(code(dialface::eval::division_by_zero))]
    DivisionByZero,

    #[error("arithmetic overflow (result is infinite or NaN)")]
    #[diagnostic(code(dialface::eval::non_finite))]
    NonFiniteResult,

    /// Alphabetic residue survived constant substitution in a context that
    /// needs a number.
    #[error("unresolved symbol in {context}: {residue:?}")]
    #[diagnostic(
        code(dialface::resolve::unresolved_symbol),
        help("every name used in a watch definition must appear in its constant dictionary")
    )]
    UnresolvedSymbol {
        residue: String,
        context: &'static str,
    },

    #[error("shape \"{shape}\" takes {expected} argument(s), but {got} were provided")]
    #[diagnostic(code(dialface::shape::wrong_arg_count))]
    WrongArgCount {
        shape: &'static str,
        expected: usize,
        got: usize,
    },
}
