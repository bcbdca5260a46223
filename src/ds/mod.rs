pub mod dll;
pub mod heap;

pub use self::{
    dll::{CompareFn, DestroyFn, DoublyLinkedList, Iter},
    heap::{sort_array, MinHeap, EMPTY},
};
