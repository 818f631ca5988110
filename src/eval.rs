//! Evaluation of arithmetic expression ASTs.

use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::errors::Error;
use crate::parse::parse_expression;

/// Parse and evaluate an arithmetic expression string.
///
/// The input must already be fully numeric; variable names are substituted
/// by the resolver before this is called.
pub fn eval_source(source: &str) -> Result<f64, Error> {
    eval_expr(&parse_expression(source)?)
}

/// Evaluate an expression tree to a double-precision result.
pub fn eval_expr(expr: &Expr) -> Result<f64, Error> {
    let value = match expr {
        Expr::Number(n) => *n,
        Expr::BinaryOp(lhs, op, rhs) => {
            let l = eval_expr(lhs)?;
            let r = eval_expr(rhs)?;
            match op {
                BinaryOp::Add => l + r,
                BinaryOp::Sub => l - r,
                BinaryOp::Mul => l * r,
                BinaryOp::Div => {
                    if r == 0.0 {
                        return Err(Error::DivisionByZero);
                    }
                    l / r
                }
                BinaryOp::Pow => l.powf(r),
            }
        }
        Expr::UnaryOp(UnaryOp::Neg, operand) => -eval_expr(operand)?,
    };
    // Catches overflow to infinity and 0^negative
    if !value.is_finite() {
        return Err(Error::NonFiniteResult);
    }
    Ok(value)
}
