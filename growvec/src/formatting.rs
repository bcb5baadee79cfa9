use crate::Collection;
use itertools::Itertools;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Canonical form: `[e1, e2, ...]`, or `[]` when empty.
///
/// Elements render through their own [Display], so nested collections
/// recurse. Mixed element types nest as `Collection<Box<dyn Display>>`.
impl<T: Display> Display for Collection<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().format(", "))
    }
}

impl<T: Display> Collection<T> {
    /// Renders the collection into its canonical string form
    pub fn render(&self) -> String {
        self.to_string()
    }
}
