/// Configuration of a min-heap
use std::sync::Arc;

/// What `MinHeap::insert` does once `size == capacity`
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Overflow {
    /// Refuse the value with `Error::Full`
    Reject,
    /// Double the capacity and keep going
    Grow,
}

impl Default for Overflow {
    fn default() -> Self {
        Overflow::Reject
    }
}

#[derive(Clone, Debug, Default)]
pub struct Config(Arc<ConfigInner>);

impl Config {
    pub fn new(capacity: usize) -> Self {
        let inner = ConfigInner { capacity, overflow: Overflow::default() };
        Self(Arc::new(inner))
    }

    /// Set the initial capacity
    pub fn capacity(mut self, capacity: usize) -> Self {
        Arc::make_mut(&mut self.0).capacity = capacity;
        self
    }

    /// Set the overflow policy
    pub fn overflow(mut self, overflow: Overflow) -> Self {
        Arc::make_mut(&mut self.0).overflow = overflow;
        self
    }
}

impl std::ops::Deref for Config {
    type Target = ConfigInner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Clone, Debug)]
pub struct ConfigInner {
    /// Number of elements a heap holds before `overflow` applies
    pub capacity: usize,
    pub overflow: Overflow,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self { capacity: 0, overflow: Overflow::Reject }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = Config::default();
        assert_eq!(config.capacity, 0);
        assert_eq!(config.overflow, Overflow::Reject);

        let config = Config::new(8).overflow(Overflow::Grow);
        assert_eq!(config.capacity, 8);
        assert_eq!(config.overflow, Overflow::Grow);
    }

    #[test]
    fn test_config_clone_is_detached() {
        let base = Config::new(4);
        let grown = base.clone().capacity(16);

        assert_eq!(base.capacity, 4);
        assert_eq!(grown.capacity, 16);
    }
}
