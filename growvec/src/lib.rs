//! A growable, indexable sequence with an explicit capacity and a
//! doubling growth policy.

pub use collection_traits::{HasCapacity, HasLength, IndexOutOfRange, Operation, Resizable};
pub use edit::{Edit, EditParseError};
pub use growth::DEFAULT_CAPACITY;
pub use storage::Collection;

pub mod edit;
pub mod formatting;
pub mod growth;
pub mod storage;


/// Create a [Collection] from a list of elements.
///
/// ```
/// let c = growvec::collection![5, 6];
/// assert_eq!(c.to_string(), "[5, 6]");
/// ```
#[macro_export]
macro_rules! collection {
    () => {
        $crate::Collection::new()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Collection::from([$($x),+])
    };
}
