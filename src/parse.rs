//! Parse pest pairs into expression AST nodes.

use crate::ast::*;
use crate::errors::Error;
use crate::{ExprParser, Rule};
use pest::Parser;
use pest::iterators::Pair;

/// Parse an arithmetic expression into an AST.
///
/// Anything the grammar rejects - identifiers, comparisons, function calls -
/// surfaces as [`Error::UnsupportedExpression`].
pub fn parse_expression(source: &str) -> Result<Expr, Error> {
    let pairs = ExprParser::parse(Rule::expression, source).map_err(|_| {
        Error::UnsupportedExpression {
            expr: source.to_string(),
        }
    })?;

    for pair in pairs {
        if pair.as_rule() == Rule::expr {
            return parse_expr(pair);
        }
    }

    Err(Error::UnsupportedExpression {
        expr: source.to_string(),
    })
}

fn parse_expr(pair: Pair<Rule>) -> Result<Expr, Error> {
    // expr = term ~ (add_op ~ term)*
    let mut inner = pair.into_inner();
    let mut result = parse_term(inner.next().unwrap())?;

    while let Some(op_pair) = inner.next() {
        let op = match op_pair.as_str() {
            "+" => BinaryOp::Add,
            "-" => BinaryOp::Sub,
            _ => continue,
        };
        let rhs = parse_term(inner.next().unwrap())?;
        result = Expr::BinaryOp(Box::new(result), op, Box::new(rhs));
    }

    Ok(result)
}

fn parse_term(pair: Pair<Rule>) -> Result<Expr, Error> {
    // term = unary ~ (mul_op ~ unary)*
    let mut inner = pair.into_inner();
    let mut result = parse_unary(inner.next().unwrap())?;

    while let Some(op_pair) = inner.next() {
        let op = match op_pair.as_str() {
            "*" => BinaryOp::Mul,
            "/" => BinaryOp::Div,
            _ => continue,
        };
        let rhs = parse_unary(inner.next().unwrap())?;
        result = Expr::BinaryOp(Box::new(result), op, Box::new(rhs));
    }

    Ok(result)
}

fn parse_unary(pair: Pair<Rule>) -> Result<Expr, Error> {
    // unary = prefix ~ unary | power
    let source = pair.as_str().to_string();
    let mut inner = pair.into_inner();
    let first = inner.next().unwrap();
    match first.as_rule() {
        Rule::prefix => {
            let operand = parse_unary(inner.next().unwrap())?;
            Ok(Expr::UnaryOp(UnaryOp::Neg, Box::new(operand)))
        }
        Rule::power => parse_power(first),
        _ => Err(Error::UnsupportedExpression { expr: source }),
    }
}

fn parse_power(pair: Pair<Rule>) -> Result<Expr, Error> {
    // power = primary ~ (pow_op ~ unary)?
    let mut inner = pair.into_inner();
    let base = parse_primary(inner.next().unwrap())?;

    if inner.next().is_some() {
        // pow_op consumed; exponent is right-associative
        let exponent = parse_unary(inner.next().unwrap())?;
        Ok(Expr::BinaryOp(
            Box::new(base),
            BinaryOp::Pow,
            Box::new(exponent),
        ))
    } else {
        Ok(base)
    }
}

fn parse_primary(pair: Pair<Rule>) -> Result<Expr, Error> {
    // primary = number | "(" ~ expr ~ ")"
    let source = pair.as_str().to_string();
    let inner = pair.into_inner().next().unwrap();
    match inner.as_rule() {
        Rule::number => {
            let n = inner
                .as_str()
                .parse::<f64>()
                .map_err(|_| Error::UnsupportedExpression { expr: source })?;
            Ok(Expr::Number(n))
        }
        Rule::expr => parse_expr(inner),
        _ => Err(Error::UnsupportedExpression { expr: source }),
    }
}
