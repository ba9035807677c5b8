//! Minimal stack used for traversal bookkeeping.
//!
//! The nested renderer tracks declared container sizes on it (the stack
//! depth doubles as the indentation level); the flat renderer tracks the
//! live path segments, mutating the head in place as the active child
//! changes.

/// Growable stack with head replacement.
///
/// Invariant held by the renderers: the stack depth equals the current
/// nesting depth at every visitor callback. Push on enter, pop on exit;
/// `swap` is the only other mutation.
#[derive(Debug)]
pub(crate) struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub(crate) fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub(crate) fn push(&mut self, value: T) {
        self.items.push(value);
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Replaces the head element. No-op on an empty stack.
    pub(crate) fn swap(&mut self, value: T) {
        if let Some(head) = self.items.last_mut() {
            *head = value;
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn head(&self) -> Option<&T> {
        self.items.last()
    }

    /// Iterates bottom-up, in insertion order.
    pub(crate) fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Stack;

    #[test]
    fn push_pop_order() {
        let mut stack = Stack::new();
        assert_eq!(stack.len(), 0);

        stack.push(42);
        stack.push(1337);
        assert_eq!(stack.len(), 2);

        assert_eq!(stack.pop(), Some(1337));
        assert_eq!(stack.len(), 1);

        stack.push(21);
        assert_eq!(stack.len(), 2);

        assert_eq!(stack.pop(), Some(21));
        assert_eq!(stack.pop(), Some(42));
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn large_stack_keeps_order() {
        let mut stack = Stack::new();
        for i in 0..100 {
            stack.push(i);
            assert_eq!(stack.len(), i + 1);
        }
        for i in (0..100).rev() {
            assert_eq!(stack.pop(), Some(i));
            assert_eq!(stack.len(), i);
        }
    }

    #[test]
    fn swap_replaces_head_only() {
        let mut stack = Stack::new();
        stack.push("a".to_string());
        stack.push("b".to_string());

        stack.swap("c".to_string());
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(), Some("c".to_string()));
        assert_eq!(stack.pop(), Some("a".to_string()));
    }

    #[test]
    fn swap_on_empty_is_noop() {
        let mut stack: Stack<i32> = Stack::new();
        stack.swap(1);
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn head_peeks_without_removing() {
        let mut stack = Stack::new();
        assert_eq!(stack.head(), None);
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.head(), Some(&2));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn iter_is_bottom_up() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        let collected: Vec<_> = stack.iter().copied().collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }
}
