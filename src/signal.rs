// src/signal.rs
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Synchronous publish/subscribe. Handlers run in subscription order, each
/// to completion, on the emitting thread.
pub struct Signal<T> {
    handlers: Vec<(SubscriptionId, Box<dyn FnMut(&T)>)>,
    next_id: u64,
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self { handlers: Vec::new(), next_id: 0 }
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal").field("handlers", &self.handlers.len()).finish()
    }
}

impl<T> Signal<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Returns false when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(existing, _)| *existing != id);
        self.handlers.len() != before
    }

    /// Invokes every handler once and returns how many ran.
    pub fn emit(&mut self, value: &T) -> usize {
        for (_, handler) in self.handlers.iter_mut() {
            handler(value);
        }
        self.handlers.len()
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_runs_each_handler_once_in_order() {
        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let mut signal: Signal<u32> = Signal::new();

        let first = seen.clone();
        signal.subscribe(move |v| first.borrow_mut().push(format!("a{}", v)));
        let second = seen.clone();
        signal.subscribe(move |v| second.borrow_mut().push(format!("b{}", v)));

        assert_eq!(signal.emit(&7), 2);
        assert_eq!(*seen.borrow(), vec!["a7", "b7"]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut signal: Signal<()> = Signal::new();
        let counter = count.clone();
        let id = signal.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(signal.unsubscribe(id));
        assert!(!signal.unsubscribe(id));
        assert_eq!(signal.emit(&()), 0);
        assert_eq!(*count.borrow(), 0);
    }
}
