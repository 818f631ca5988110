//! Watch definition data model.
//!
//! A face is declared as a [`ConstantDict`] of named numeric parameters plus
//! an ordered list of [`Ring`]s. Ring offsets are cumulative: a ring's
//! effective radius is the running sum of all preceding offsets plus its
//! own, so the order of rings matters. Within a ring, group order decides
//! occlusion priority (first group at a position wins).

/// A symbolic-or-numeric expression leaf in a watch definition.
///
/// Strings may reference constant names and combine them with the
/// arithmetic sublanguage, e.g. `"a_len + b_off"` or `"a_width * 1.5"`.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Num(f64),
    Expr(String),
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Param::Num(value)
    }
}

impl From<&str> for Param {
    fn from(source: &str) -> Self {
        Param::Expr(source.to_string())
    }
}

/// Named numeric constants scoped to one watch definition.
///
/// Entries keep declaration order so substitution is deterministic across
/// renders; names must be unique.
#[derive(Debug, Clone, Default)]
pub struct ConstantDict {
    entries: Vec<(String, f64)>,
}

impl ConstantDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a constant, builder-style.
    pub fn with(mut self, name: &str, value: f64) -> Self {
        debug_assert!(
            self.get(name).is_none(),
            "duplicate constant name: {name}"
        );
        self.entries.push((name.to_string(), value));
        self
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The kinds of marker a group can place around a ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Radial tick: args are (length, width).
    Line,
    /// Filled dot tangent to the ring: arg is (diameter).
    Circle,
    /// Base at the rim, apex pointing inward: args are (length, width).
    Triangle,
    /// Apex at the rim, base pointing inward: args are (length, width).
    UpsideTriangle,
    /// A line with equal length and width: arg is (side).
    Square,
    /// Parallel pair of radial ticks: args are (length, width, separation).
    TwoLines,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::UpsideTriangle => "upside_triangle",
            ShapeKind::Square => "square",
            ShapeKind::TwoLines => "two_lines",
        }
    }
}

/// Where a group's markers go around the circle, as fractions of a turn.
#[derive(Debug, Clone, PartialEq)]
pub enum PositionSpec {
    /// `n` evenly spaced fractions i/n, for i in 0..n.
    Count(u32),
    /// Explicit fractional positions. Values are used exactly as written:
    /// negatives and values outside [0, 1) are NOT reduced modulo 1, since
    /// they map to angles via `position * 2pi`.
    Explicit(Vec<Param>),
    /// Count-style fractions restricted to the arc from `start` to `end`
    /// (fractions of a turn; the arc may cross twelve o'clock).
    Arc {
        count: u32,
        start: Param,
        end: Param,
    },
}

/// A set of identically-styled markers placed within one ring.
#[derive(Debug, Clone)]
pub struct ElementGroup {
    pub positions: PositionSpec,
    pub shape: ShapeKind,
    pub args: Vec<Param>,
}

impl ElementGroup {
    pub fn new(positions: PositionSpec, shape: ShapeKind, args: Vec<Param>) -> Self {
        Self {
            positions,
            shape,
            args,
        }
    }
}

/// One concentric layer of the face.
#[derive(Debug, Clone)]
pub struct Ring {
    /// Radial offset relative to the previous ring (cumulative).
    pub offset: Param,
    pub groups: Vec<ElementGroup>,
}

impl Ring {
    pub fn new(offset: impl Into<Param>, groups: Vec<ElementGroup>) -> Self {
        Self {
            offset: offset.into(),
            groups,
        }
    }
}

/// A complete declarative description of one watch face.
#[derive(Debug, Clone)]
pub struct WatchDef {
    pub constants: ConstantDict,
    pub rings: Vec<Ring>,
}

impl WatchDef {
    pub fn new(constants: ConstantDict, rings: Vec<Ring>) -> Self {
        Self { constants, rings }
    }
}
