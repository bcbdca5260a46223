//! Procedural surface over the list and the heap.
//!
//! List functions take `Option<&DoublyLinkedList<_>>` so that an absent list
//! can be passed; they then do nothing, or answer with `-1`, `false` or `None`.

pub mod list {
    use crate::ds::DoublyLinkedList;
    use std::cmp::Ordering;

    pub fn new<Item, F>(compare: F) -> DoublyLinkedList<Item>
    where
        F: Fn(&Item, &Item) -> Ordering + 'static,
    {
        DoublyLinkedList::new(compare)
    }

    pub fn new_full<Item, F, D>(compare: F, destroy: D) -> DoublyLinkedList<Item>
    where
        F: Fn(&Item, &Item) -> Ordering + 'static,
        D: FnMut(Item) + 'static,
    {
        DoublyLinkedList::new_full(compare, destroy)
    }

    /// Number of elements, `-1` without a list
    pub fn length<Item>(list: Option<&DoublyLinkedList<Item>>) -> isize {
        list.map_or(-1, |list| list.len() as isize)
    }

    pub fn prepend<Item>(list: Option<&mut DoublyLinkedList<Item>>, item: Item) {
        if let Some(list) = list {
            list.prepend(item)
        }
    }

    pub fn append<Item>(list: Option<&mut DoublyLinkedList<Item>>, item: Item) {
        if let Some(list) = list {
            list.append(item)
        }
    }

    pub fn insert_at<Item>(list: Option<&mut DoublyLinkedList<Item>>, item: Item, position: isize) {
        if let Some(list) = list {
            list.insert_at(item, position)
        }
    }

    pub fn remove<Item>(list: Option<&mut DoublyLinkedList<Item>>, item: &Item) -> bool {
        list.map_or(false, |list| list.remove(item))
    }

    pub fn remove_all<Item>(list: Option<&mut DoublyLinkedList<Item>>, item: &Item) -> bool {
        list.map_or(false, |list| list.remove_all(item))
    }

    pub fn remove_at<Item>(list: Option<&mut DoublyLinkedList<Item>>, position: usize) -> bool {
        list.map_or(false, |list| list.remove_at(position))
    }

    pub fn get<Item>(list: Option<&DoublyLinkedList<Item>>, position: usize) -> Option<&Item> {
        list.and_then(|list| list.get(position))
    }

    /// Position of the first match, `-1` if there is none
    pub fn index_of<Item>(list: Option<&DoublyLinkedList<Item>>, item: &Item) -> isize {
        list.and_then(|list| list.index_of(item))
            .map_or(-1, |index| index as isize)
    }

    pub fn reverse<Item>(list: Option<&mut DoublyLinkedList<Item>>) {
        if let Some(list) = list {
            list.reverse()
        }
    }

    pub fn destroy<Item>(list: Option<DoublyLinkedList<Item>>) {
        if let Some(list) = list {
            list.destroy()
        }
    }
}

pub mod heap {
    use crate::{
        ds::{self, MinHeap},
        prelude::*,
    };

    pub fn new(max_size: usize) -> MinHeap {
        MinHeap::new(max_size)
    }

    pub fn new_from_array(array: &[i32]) -> MinHeap {
        MinHeap::new_from_array(array)
    }

    pub fn free(heap: MinHeap) {
        heap.free()
    }

    pub fn get_size(heap: &MinHeap) -> usize {
        heap.get_size()
    }

    pub fn peek(heap: &MinHeap) -> IResult<i32> {
        heap.peek()
    }

    pub fn insert(heap: &mut MinHeap, value: i32) -> IResult<()> {
        heap.insert(value)
    }

    /// The minimum, `-1` on an empty heap
    pub fn pop(heap: &mut MinHeap) -> i32 {
        heap.pop()
    }

    pub fn sort_array(array: &mut [i32]) {
        ds::sort_array(array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DoublyLinkedList;

    fn cmp(a: &i64, b: &i64) -> std::cmp::Ordering {
        a.cmp(b)
    }

    #[test]
    fn test_absent_list() {
        let mut absent: Option<DoublyLinkedList<i64>> = None;

        assert_eq!(list::length(absent.as_ref()), -1);
        list::prepend(absent.as_mut(), 1);
        list::append(absent.as_mut(), 1);
        list::insert_at(absent.as_mut(), 1, 0);
        list::reverse(absent.as_mut());
        assert!(!list::remove(absent.as_mut(), &1));
        assert!(!list::remove_all(absent.as_mut(), &1));
        assert!(!list::remove_at(absent.as_mut(), 0));
        assert_eq!(list::get(absent.as_ref(), 0), None);
        assert_eq!(list::index_of(absent.as_ref(), &1), -1);
        list::destroy(absent);
    }

    #[test]
    fn test_list_walkthrough() {
        let mut l = list::new(cmp);
        assert_eq!(list::length(Some(&l)), 0);

        list::append(Some(&mut l), 5);
        assert_eq!(list::length(Some(&l)), 1);
        assert_eq!(list::get(Some(&l), 0), Some(&5));

        list::prepend(Some(&mut l), 4);
        assert_eq!(list::length(Some(&l)), 2);
        assert_eq!(list::get(Some(&l), 0), Some(&4));

        list::prepend(Some(&mut l), 2);
        list::prepend(Some(&mut l), 1);
        list::append(Some(&mut l), 2);
        assert_eq!(list::length(Some(&l)), 5);
        assert_eq!(list::get(Some(&l), 1), Some(&2));
        assert_eq!(list::index_of(Some(&l), &5), 3);

        list::insert_at(Some(&mut l), 2, 2);
        list::insert_at(Some(&mut l), 3, 0);
        list::insert_at(Some(&mut l), 9, 6);
        assert_eq!(list::get(Some(&l), 7), Some(&2));
        assert_eq!(list::index_of(Some(&l), &3), 0);
        assert_eq!(list::index_of(Some(&l), &9), 6);

        assert!(list::remove(Some(&mut l), &4));
        assert_eq!(list::index_of(Some(&l), &5), 4);
        assert!(list::remove(Some(&mut l), &5));
        assert!(!list::remove(Some(&mut l), &5));

        assert!(list::remove_all(Some(&mut l), &2));
        assert_eq!(list::length(Some(&l)), 3);
        assert_eq!(list::get(Some(&l), 2), Some(&9));
        assert!(list::remove_at(Some(&mut l), 2));
        assert_eq!(list::index_of(Some(&l), &9), -1);

        list::reverse(Some(&mut l));
        assert_eq!(list::get(Some(&l), 0), Some(&1));
        assert_eq!(list::get(Some(&l), 1), Some(&3));

        list::destroy(Some(l));
    }

    #[test]
    fn test_list_new_full() {
        use std::{cell::Cell, rc::Rc};

        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        let mut l = list::new_full(cmp, move |_| seen.set(seen.get() + 1));

        list::append(Some(&mut l), 1);
        list::append(Some(&mut l), 2);
        assert!(list::remove_at(Some(&mut l), 0));
        assert_eq!(count.get(), 1);

        list::destroy(Some(l));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_heap_walkthrough() {
        let mut h = heap::new(4);
        assert_eq!(heap::pop(&mut h), -1);
        assert_eq!(heap::get_size(&h), 0);
        assert!(heap::peek(&h).is_err());

        heap::insert(&mut h, 4).unwrap();
        heap::insert(&mut h, 1).unwrap();
        heap::insert(&mut h, 3).unwrap();
        assert_eq!(heap::peek(&h).unwrap(), 1);
        assert_eq!(heap::get_size(&h), 3);
        assert_eq!(heap::pop(&mut h), 1);
        heap::free(h);

        let mut h = heap::new_from_array(&[3, 2, 1]);
        assert_eq!(heap::pop(&mut h), 1);
        assert_eq!(heap::pop(&mut h), 2);
        assert_eq!(heap::pop(&mut h), 3);
        assert_eq!(heap::pop(&mut h), -1);

        let mut v = [8, 4, 2, 5, 1, 3, 7, 6];
        heap::sort_array(&mut v);
        assert_eq!(v, [1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
