pub mod prelude {
    pub use super::Error;

    pub type IResult<T> = Result<T, Error>;
}

pub mod api;
mod config;
mod ds;

pub use config::{Config, ConfigInner, Overflow};
pub use ds::{sort_array, CompareFn, DestroyFn, DoublyLinkedList, Iter, MinHeap, EMPTY};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Insert on a heap holding `capacity` elements
    #[error("heap is full, capacity {capacity}")]
    Full { capacity: usize },
    /// Peek on an empty heap
    #[error("heap is empty")]
    Empty,
}
