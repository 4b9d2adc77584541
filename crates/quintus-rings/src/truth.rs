//! Three-valued decision results.
//!
//! Predicates over generic ring elements cannot always be decided, so
//! their results carry an explicit third value instead of degrading to
//! booleans. The combinators follow Kleene logic: conjunction is
//! dominated by `False`, disjunction by `True`, and `Unknown` otherwise.

/// The result of a decision procedure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Truth {
    /// The predicate provably holds.
    True,
    /// The predicate provably does not hold.
    False,
    /// Neither could be proven with the available information.
    Unknown,
}

impl Truth {
    /// Lifts a decidable boolean into a definite truth value.
    #[must_use]
    pub fn from_bool(b: bool) -> Self {
        if b {
            Truth::True
        } else {
            Truth::False
        }
    }

    /// Conjunction. `False` dominates, then `Unknown`.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Truth::False, _) | (_, Truth::False) => Truth::False,
            (Truth::Unknown, _) | (_, Truth::Unknown) => Truth::Unknown,
            (Truth::True, Truth::True) => Truth::True,
        }
    }

    /// Disjunction. `True` dominates, then `Unknown`.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match (self, other) {
            (Truth::True, _) | (_, Truth::True) => Truth::True,
            (Truth::Unknown, _) | (_, Truth::Unknown) => Truth::Unknown,
            (Truth::False, Truth::False) => Truth::False,
        }
    }

    /// Negation. `Unknown` stays `Unknown`.
    #[must_use]
    pub fn not(self) -> Self {
        match self {
            Truth::True => Truth::False,
            Truth::False => Truth::True,
            Truth::Unknown => Truth::Unknown,
        }
    }

    /// Returns true only for a definite `True`.
    #[must_use]
    pub fn is_true(self) -> bool {
        self == Truth::True
    }

    /// Returns true only for a definite `False`.
    #[must_use]
    pub fn is_false(self) -> bool {
        self == Truth::False
    }

    /// Returns true if the predicate could not be decided.
    #[must_use]
    pub fn is_unknown(self) -> bool {
        self == Truth::Unknown
    }
}

impl From<bool> for Truth {
    fn from(b: bool) -> Self {
        Truth::from_bool(b)
    }
}
