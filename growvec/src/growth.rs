/// Capacity of a collection created without an explicit size
pub const DEFAULT_CAPACITY: usize = 16;

/// Capacity to reallocate to when `required` slots do not fit into
/// `current`.
///
/// Doubles the current capacity, or jumps straight to `required` when a
/// batch needs more than that. Returns `current` when no growth is needed.
pub fn grown_capacity(current: usize, required: usize) -> usize {
    if required <= current {
        return current;
    }
    required.max(current.saturating_mul(2))
}
