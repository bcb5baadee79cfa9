use growvec::{Collection, Edit, IndexOutOfRange};
use miette::Diagnostic;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info_span};

#[derive(Debug, Error, Diagnostic)]
pub enum ScaleError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Index(#[from] IndexOutOfRange),
    #[error("collection rendered as `{}` after removing every element", .0)]
    NotEmpty(String),
    #[error("capacity {} fell below count {}", .capacity, .count)]
    CapacityBelowCount { capacity: usize, count: usize },
}

#[derive(Debug, Copy, Clone)]
pub struct ScaleReport {
    pub peak_capacity: usize,
    pub elapsed: Duration,
}

/// Adds `items` sequential integers in a single batch, then removes them
/// from the highest index down to zero.
pub fn run_scale(items: usize) -> Result<ScaleReport, ScaleError> {
    let _span = info_span!("scale", items).entered();
    let start = Instant::now();

    let mut collection = Collection::new();
    collection.add_range((0..items).map(|i| i + 1));
    check_capacity(&collection)?;
    let peak_capacity = collection.capacity();
    debug!(
        count = collection.count(),
        capacity = peak_capacity,
        "filled collection"
    );

    for index in (0..items).rev() {
        collection.remove_at(index)?;
    }
    check_capacity(&collection)?;

    let rendered = collection.render();
    if rendered != "[]" {
        return Err(ScaleError::NotEmpty(rendered));
    }

    Ok(ScaleReport {
        peak_capacity,
        elapsed: start.elapsed(),
    })
}

fn check_capacity<T>(collection: &Collection<T>) -> Result<(), ScaleError> {
    if collection.capacity() < collection.count() {
        return Err(ScaleError::CapacityBelowCount {
            capacity: collection.capacity(),
            count: collection.count(),
        });
    }
    Ok(())
}

/// Seeds a collection with `items` and applies `edits` in order
pub fn run_edits(
    items: Vec<String>,
    edits: Vec<Edit<String>>,
) -> Result<Collection<String>, IndexOutOfRange> {
    let mut collection = Collection::from(items);
    for edit in edits {
        debug!(%edit, "applying edit");
        edit.apply(&mut collection)?;
    }
    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use growvec::Operation;
    use rstest::rstest;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn edits(ops: &[&str]) -> Vec<Edit<String>> {
        ops.iter().map(|op| op.parse().unwrap()).collect()
    }

    #[rstest]
    #[case(0, 16)]
    #[case(16, 16)]
    #[case(10_000, 10_000)]
    fn scale_leaves_collection_empty(#[case] items: usize, #[case] peak_capacity: usize) {
        let report = run_scale(items).unwrap();
        assert_eq!(report.peak_capacity, peak_capacity);
    }

    #[rstest]
    #[case(&["Ivan", "Pesho"], &["add:Gosho"], "[Ivan, Pesho, Gosho]")]
    #[case(&["1", "2", "3"], &["insert:0:4", "swap:0:3"], "[3, 1, 2, 4]")]
    #[case(&["1", "2", "3"], &["remove:1", "set:0:x"], "[x, 3]")]
    #[case(&["1"], &["clear", "add_range:a,b"], "[a, b]")]
    fn edits_render(#[case] items: &[&str], #[case] ops: &[&str], #[case] expected: &str) {
        let collection = run_edits(strings(items), edits(ops)).unwrap();
        assert_eq!(collection.to_string(), expected);
    }

    #[test]
    fn out_of_range_edit_is_reported() {
        let err = run_edits(strings(&["1", "2", "3"]), edits(&["insert:5:4"])).unwrap_err();
        assert_eq!(err, IndexOutOfRange::new(Operation::InsertAt, 5, 3));
    }
}
