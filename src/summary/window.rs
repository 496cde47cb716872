// Fixed-size trailing window over time-ordered sequences

/// Entries kept per chart series and in the violation history.
pub const WINDOW_SIZE: usize = 7;

/// Last `WINDOW_SIZE` elements in their original order; shorter input is returned whole.
pub fn trailing<T>(items: &[T]) -> &[T] {
    let start = items.len().saturating_sub(WINDOW_SIZE);
    &items[start..]
}

/// Owning form of [`trailing`].
pub fn window<T>(mut items: Vec<T>) -> Vec<T> {
    let excess = items.len().saturating_sub(WINDOW_SIZE);
    items.drain(..excess);
    items
}
