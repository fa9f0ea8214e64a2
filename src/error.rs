/// An error raised by [`MacDropdown::try_new`](crate::MacDropdown::try_new).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The dropdown has no items.
    #[error("a dropdown needs at least one item")]
    Empty,
    /// The selected index does not point to an item.
    #[error("selected index {index} is out of bounds for {len} items")]
    OutOfBounds {
        /// The selected index.
        index: usize,
        /// The number of items.
        len: usize,
    },
}
