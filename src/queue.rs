//! A first-in, first-out work list. Level-order traversal uses it to visit nodes
//! shallowest first.

use std::collections::VecDeque;

/// A FIFO queue. Items come out of [`dequeue`][Queue::dequeue] in the order they went into
/// [`enqueue`][Queue::enqueue].
///
/// # Examples
///
/// ```
/// use rooted_bst::queue::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
///
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.dequeue(), Some(2));
///
/// // An exhausted queue reports `None` instead of failing.
/// assert_eq!(queue.dequeue(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Appends `item` to the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the item at the front of the queue, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// The number of items waiting in the queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is waiting in the queue.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
