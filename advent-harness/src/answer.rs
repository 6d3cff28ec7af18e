//! Type-erased answer values and their canonical string form
//!
//! Parts return whatever value type is natural for them; the harness only
//! renders it to text when a validation actually compares it against a
//! recorded expectation. Solving never canonicalizes.

use std::fmt;

/// A computed answer value, type-erased until validation or display.
pub struct Answer(Box<dyn fmt::Display + Send + Sync>);

impl Answer {
    /// Wrap any displayable value as an answer.
    pub fn new(value: impl fmt::Display + Send + Sync + 'static) -> Self {
        Self(Box::new(value))
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Debug for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Answer({})", self.0)
    }
}

/// Convert an answer into its canonical display string.
///
/// The canonical form is the `Display` rendering with surrounding
/// whitespace removed, so multi-line "banner" answers compare equal no
/// matter how the solver padded them. Comparison against an expectation is
/// the runner's job and is case-insensitive on top of this.
pub fn canonical_string(answer: &Answer) -> String {
    answer.to_string().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_renders_display() {
        assert_eq!(canonical_string(&Answer::new(42)), "42");
        assert_eq!(canonical_string(&Answer::new("hello")), "hello");
    }

    #[test]
    fn canonical_trims_surrounding_whitespace() {
        assert_eq!(canonical_string(&Answer::new("  ABCD \n")), "ABCD");
        assert_eq!(canonical_string(&Answer::new("\n.##.\n#..#\n")), ".##.\n#..#");
    }
}
