/// double linked list
///
/// Nodes live in a `Slab`, links are slab keys. Head has no `prev`, tail has
/// no `next`, and the number of occupied slots is the length of the list.
use log::trace;
use slab::Slab;
use std::{cmp::Ordering, fmt, iter, mem};

/// Orders two payloads, `Ordering::Equal` means "same element"
pub type CompareFn<Item> = Box<dyn Fn(&Item, &Item) -> Ordering>;

/// Releases a payload when its node leaves the list
pub type DestroyFn<Item> = Box<dyn FnMut(Item)>;

#[derive(Debug)]
pub(crate) struct Node<Item> {
    pub(crate) item: Item,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
}

impl<Item> Node<Item> {
    fn new(item: Item) -> Self {
        Self { item, prev: None, next: None }
    }
}

pub struct DoublyLinkedList<Item> {
    nodes: Slab<Node<Item>>,
    head: Option<usize>,
    tail: Option<usize>,
    compare: CompareFn<Item>,
    destroy: Option<DestroyFn<Item>>,
}

impl<Item: Ord + 'static> Default for DoublyLinkedList<Item> {
    fn default() -> Self {
        Self::new(|a: &Item, b: &Item| a.cmp(b))
    }
}

impl<Item> DoublyLinkedList<Item> {
    /// An empty list, `compare` drives `remove`, `remove_all` and `index_of`
    pub fn new<F>(compare: F) -> Self
    where
        F: Fn(&Item, &Item) -> Ordering + 'static,
    {
        Self {
            nodes: Slab::new(),
            head: None,
            tail: None,
            compare: Box::new(compare),
            destroy: None,
        }
    }

    /// An empty list which hands every removed payload to `destroy`
    pub fn new_full<F, D>(compare: F, destroy: D) -> Self
    where
        F: Fn(&Item, &Item) -> Ordering + 'static,
        D: FnMut(Item) + 'static,
    {
        let mut list = Self::new(compare);
        list.destroy = Some(Box::new(destroy));
        list
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn front(&self) -> Option<&Item> {
        self.head.map(|key| &self.nodes[key].item)
    }

    pub fn back(&self) -> Option<&Item> {
        self.tail.map(|key| &self.nodes[key].item)
    }

    /// Add an element at the head, O(1)
    pub fn prepend(&mut self, item: Item) {
        let key = self.nodes.insert(Node::new(item));

        match self.head {
            Some(head) => {
                self.nodes[head].prev = Some(key);
                self.nodes[key].next = Some(head);
            }
            None => self.tail = Some(key),
        }

        self.head = Some(key);
    }

    /// Add an element at the tail, O(1)
    pub fn append(&mut self, item: Item) {
        let key = self.nodes.insert(Node::new(item));

        match self.tail {
            Some(tail) => {
                self.nodes[tail].next = Some(key);
                self.nodes[key].prev = Some(tail);
            }
            None => self.head = Some(key),
        }

        self.tail = Some(key);
    }

    /// Insert `item` so that it ends up at `position`.
    ///
    /// A negative position, or one at or past the end, appends.
    pub fn insert_at(&mut self, item: Item, position: isize) {
        if position < 0 || position as usize >= self.len() {
            return self.append(item);
        }

        if position == 0 {
            return self.prepend(item);
        }

        let prev = match self.key_at(position as usize - 1) {
            Some(prev) => prev,
            None => return self.append(item),
        };
        let next = self.nodes[prev].next;

        let key = self.nodes.insert(Node { item, prev: Some(prev), next });
        self.nodes[prev].next = Some(key);
        if let Some(next) = next {
            self.nodes[next].prev = Some(key);
        }

        trace!("dll: spliced node {} at position {}", key, position);
    }

    /// Remove the first element equal to `item`
    pub fn remove(&mut self, item: &Item) -> bool {
        match self.find(item) {
            Some((_, key)) => {
                self.remove_existing(key);
                true
            }
            None => false,
        }
    }

    /// Remove every element equal to `item`, true if at least one went away
    pub fn remove_all(&mut self, item: &Item) -> bool {
        let mut removed = false;
        let mut cursor = self.head;

        while let Some(key) = cursor {
            cursor = self.nodes[key].next;
            if (self.compare)(&self.nodes[key].item, item) == Ordering::Equal {
                self.remove_existing(key);
                removed = true;
            }
        }

        removed
    }

    pub fn remove_at(&mut self, position: usize) -> bool {
        match self.key_at(position) {
            Some(key) => {
                self.remove_existing(key);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, position: usize) -> Option<&Item> {
        self.key_at(position).map(|key| &self.nodes[key].item)
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut Item> {
        let key = self.key_at(position)?;
        Some(&mut self.nodes[key].item)
    }

    /// Position of the first element equal to `item`
    pub fn index_of(&self, item: &Item) -> Option<usize> {
        self.find(item).map(|(index, _)| index)
    }

    /// Reverse in place by swapping the links of every node
    pub fn reverse(&mut self) {
        for (_, node) in self.nodes.iter_mut() {
            mem::swap(&mut node.prev, &mut node.next);
        }
        mem::swap(&mut self.head, &mut self.tail);

        trace!("dll: reversed {} nodes", self.len());
    }

    /// Remove every element, running the destroy hook head to tail
    pub fn clear(&mut self) {
        while let Some(head) = self.head {
            self.remove_existing(head);
        }
    }

    /// Tear the list down, see `clear`
    pub fn destroy(mut self) {
        self.clear();
    }

    pub fn iter(&self) -> Iter<'_, Item> {
        Iter { list: self, head: self.head, tail: self.tail, len: self.len() }
    }

    /// Slab keys from head to tail
    fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        iter::successors(self.head, move |&key| self.nodes[key].next)
    }

    fn key_at(&self, position: usize) -> Option<usize> {
        if position >= self.len() {
            return None;
        }
        self.keys().nth(position)
    }

    fn find(&self, item: &Item) -> Option<(usize, usize)> {
        self.keys()
            .enumerate()
            .find(|&(_, key)| (self.compare)(&self.nodes[key].item, item) == Ordering::Equal)
    }

    /// `key` must be occupied
    fn unlink(&mut self, key: usize) -> Item {
        let node = self.nodes.remove(key);

        match node.prev {
            Some(prev) => self.nodes[prev].next = node.next,
            None => self.head = node.next,
        }

        match node.next {
            Some(next) => self.nodes[next].prev = node.prev,
            None => self.tail = node.prev,
        }

        node.item
    }

    fn remove_existing(&mut self, key: usize) {
        let item = self.unlink(key);

        if let Some(destroy) = self.destroy.as_mut() {
            destroy(item);
        }

        trace!("dll: removed node {}, {} left", key, self.len());
    }
}

impl<Item> Drop for DoublyLinkedList<Item> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<Item> Extend<Item> for DoublyLinkedList<Item> {
    fn extend<I: IntoIterator<Item = Item>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<Item: fmt::Debug> fmt::Debug for DoublyLinkedList<Item> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, Item> IntoIterator for &'a DoublyLinkedList<Item> {
    type Item = &'a Item;
    type IntoIter = Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator, walks `next` from the front and `prev` from the back
pub struct Iter<'a, Item> {
    list: &'a DoublyLinkedList<Item>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<'a, Item> Iterator for Iter<'a, Item> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let node = &self.list.nodes[self.head?];
        self.head = node.next;
        self.len -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, Item> DoubleEndedIterator for Iter<'a, Item> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let node = &self.list.nodes[self.tail?];
        self.tail = node.prev;
        self.len -= 1;
        Some(&node.item)
    }
}

impl<'a, Item> ExactSizeIterator for Iter<'a, Item> {}
