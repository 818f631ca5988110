//! Parameter resolution: substitute named constants into expression leaves
//! and fold the arithmetic.
//!
//! Substitution is token-based: the leaf is scanned into identifier runs and
//! other text, and only whole identifiers that exactly name a dictionary
//! entry are replaced. A key `a` therefore never matches inside `a_len`, and
//! the result is independent of dictionary order for any dictionary.

use crate::errors::Error;
use crate::eval::eval_source;
use crate::render::shapes::MarkerEnum;
use crate::types::{ConstantDict, Param, PositionSpec, WatchDef};

/// Result of resolving a single leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Num(f64),
    /// Irreducible residue: text still containing letters after
    /// substitution is passed through unevaluated.
    Text(String),
}

impl Value {
    /// Require a number, upgrading leftover residue into an explicit error.
    pub fn into_num(self, context: &'static str) -> Result<f64, Error> {
        match self {
            Value::Num(n) => Ok(n),
            Value::Text(residue) => Err(Error::UnresolvedSymbol { residue, context }),
        }
    }
}

/// Resolve one leaf against the constant dictionary.
pub fn resolve_leaf(param: &Param, dict: &ConstantDict) -> Result<Value, Error> {
    let text = match param {
        // Already-numeric fast path: the evaluator is never invoked.
        Param::Num(n) => return Ok(Value::Num(*n)),
        Param::Expr(text) => text,
    };
    if let Ok(n) = text.parse::<f64>() {
        return Ok(Value::Num(n));
    }

    let substituted = substitute(text, dict);
    if substituted.chars().any(|c| c.is_ascii_alphabetic()) {
        return Ok(Value::Text(substituted));
    }
    Ok(Value::Num(eval_source(&substituted)?))
}

/// Replace whole identifier tokens that name dictionary entries with the
/// entry's decimal rendering; everything else is copied through.
fn substitute(text: &str, dict: &ConstantDict) -> String {
    let mut out = String::with_capacity(text.len());
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i].is_ascii_alphabetic() || bytes[i] == b'_' {
            let start = i;
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                i += 1;
            }
            let ident = &text[start..i];
            match dict.get(ident) {
                Some(value) => out.push_str(&value.to_string()),
                None => out.push_str(ident),
            }
        } else {
            let start = i;
            while i < bytes.len() && !(bytes[i].is_ascii_alphabetic() || bytes[i] == b'_') {
                i += 1;
            }
            out.push_str(&text[start..i]);
        }
    }

    out
}

// ============================================================================
// Whole-definition resolution
// ============================================================================

/// A watch definition with every parameter folded to a number and every
/// group's marker constructed. Mirrors the input tree's shape.
#[derive(Debug, Clone)]
pub struct ResolvedFace {
    pub rings: Vec<ResolvedRing>,
}

#[derive(Debug, Clone)]
pub struct ResolvedRing {
    pub offset: f64,
    pub groups: Vec<ResolvedGroup>,
}

#[derive(Debug, Clone)]
pub struct ResolvedGroup {
    pub positions: ResolvedPositions,
    pub marker: MarkerEnum,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedPositions {
    Count(u32),
    Explicit(Vec<f64>),
    Arc { count: u32, start: f64, end: f64 },
}

/// Resolve a whole definition up front, so a malformed face fails before
/// any markup is produced.
pub fn resolve_face(def: &WatchDef) -> Result<ResolvedFace, Error> {
    let dict = &def.constants;
    let mut rings = Vec::with_capacity(def.rings.len());

    for ring in &def.rings {
        let offset = resolve_leaf(&ring.offset, dict)?.into_num("ring offset")?;
        let mut groups = Vec::with_capacity(ring.groups.len());
        for group in &ring.groups {
            let positions = resolve_positions(&group.positions, dict)?;
            let mut args = Vec::with_capacity(group.args.len());
            for arg in &group.args {
                args.push(resolve_leaf(arg, dict)?.into_num("shape argument")?);
            }
            let marker = MarkerEnum::build(group.shape, &args)?;
            groups.push(ResolvedGroup { positions, marker });
        }
        rings.push(ResolvedRing { offset, groups });
    }

    Ok(ResolvedFace { rings })
}

fn resolve_positions(
    spec: &PositionSpec,
    dict: &ConstantDict,
) -> Result<ResolvedPositions, Error> {
    Ok(match spec {
        PositionSpec::Count(n) => ResolvedPositions::Count(*n),
        PositionSpec::Explicit(params) => {
            let mut fractions = Vec::with_capacity(params.len());
            for param in params {
                fractions.push(resolve_leaf(param, dict)?.into_num("position")?);
            }
            ResolvedPositions::Explicit(fractions)
        }
        PositionSpec::Arc { count, start, end } => ResolvedPositions::Arc {
            count: *count,
            start: resolve_leaf(start, dict)?.into_num("arc start")?,
            end: resolve_leaf(end, dict)?.into_num("arc end")?,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faces;
    use crate::types::{ElementGroup, Ring, ShapeKind};

    fn dict() -> ConstantDict {
        ConstantDict::new().with("a_len", 2.0).with("a_width", 0.5)
    }

    #[test]
    fn numeric_param_passes_through() {
        let v = resolve_leaf(&Param::Num(3.25), &dict()).unwrap();
        assert_eq!(v, Value::Num(3.25));
    }

    #[test]
    fn numeric_string_passes_through_without_eval() {
        // "007" parses as a float, so it short-circuits before substitution.
        let v = resolve_leaf(&"007".into(), &dict()).unwrap();
        assert_eq!(v, Value::Num(7.0));
    }

    #[test]
    fn substitute_then_evaluate() {
        let v = resolve_leaf(&"a_len + a_width * 1.5".into(), &dict()).unwrap();
        assert_eq!(v, Value::Num(2.75));
    }

    #[test]
    fn whole_token_substitution_ignores_prefix_collisions() {
        // A key "a" must not match inside "a_len".
        let d = ConstantDict::new().with("a", 1.0).with("a_len", 2.0);
        let v = resolve_leaf(&"a_len + a".into(), &d).unwrap();
        assert_eq!(v, Value::Num(3.0));
    }

    #[test]
    fn irreducible_text_is_passed_through() {
        let v = resolve_leaf(&"line".into(), &dict()).unwrap();
        assert_eq!(v, Value::Text("line".to_string()));
    }

    #[test]
    fn empty_dictionary_leaves_text_unchanged() {
        let v = resolve_leaf(&"b_len - 3".into(), &ConstantDict::new()).unwrap();
        assert_eq!(v, Value::Text("b_len - 3".to_string()));
    }

    #[test]
    fn residue_in_numeric_context_is_an_error() {
        let err = Value::Text("b_len".to_string())
            .into_num("ring offset")
            .unwrap_err();
        assert!(matches!(err, Error::UnresolvedSymbol { .. }));
    }

    #[test]
    fn malformed_expression_propagates() {
        let err = resolve_leaf(&"a_len == 2".into(), &dict()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedExpression { .. }));
    }

    #[test]
    fn shipped_faces_resolve() {
        assert!(resolve_face(&faces::submariner()).is_ok());
        assert!(resolve_face(&faces::speedmaster()).is_ok());
    }

    #[test]
    fn wrong_arg_count_is_caught_at_resolution() {
        let def = WatchDef::new(
            ConstantDict::new(),
            vec![Ring::new(
                1.0,
                vec![ElementGroup::new(
                    PositionSpec::Count(12),
                    ShapeKind::Line,
                    vec![3.0.into()],
                )],
            )],
        );
        let err = resolve_face(&def).unwrap_err();
        assert!(matches!(
            err,
            Error::WrongArgCount {
                shape: "line",
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn unresolved_ring_offset_is_an_error() {
        let def = WatchDef::new(
            ConstantDict::new(),
            vec![Ring::new("b_off", vec![])],
        );
        assert!(matches!(
            resolve_face(&def).unwrap_err(),
            Error::UnresolvedSymbol { .. }
        ));
    }
}
