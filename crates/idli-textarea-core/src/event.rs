use std::fmt;

/// An input event as delivered by the host on the rendered textarea.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NativeInputEvent {
    /// The textarea's text after the edit.
    pub target_value: String,
}

impl NativeInputEvent {
    pub fn new(target_value: impl Into<String>) -> Self {
        Self {
            target_value: target_value.into(),
        }
    }
}

/// Change notification emitted after a user edit on an enabled component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputChangeEvent {
    pub original_event: NativeInputEvent,
    pub old_value: Option<String>,
    pub new_value: String,
}

impl InputChangeEvent {
    /// Event name used when re-dispatching through a host.
    pub const NAME: &'static str = "inputChange";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<E> = Box<dyn FnMut(&E)>;

/// Synchronous single-threaded event dispatch. Listeners run in registration order on the
/// caller's thread.
pub struct EventEmitter<E> {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener<E>)>,
}

impl<E> Default for EventEmitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EventEmitter<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&E) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Delivers `event` to every listener and returns how many ran.
    pub fn emit(&mut self, event: &E) -> usize {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
        self.listeners.len()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<E> fmt::Debug for EventEmitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn listeners_run_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut em: EventEmitter<u32> = EventEmitter::new();
        let a = Rc::clone(&seen);
        em.subscribe(move |v| a.borrow_mut().push(("a", *v)));
        let b = Rc::clone(&seen);
        em.subscribe(move |v| b.borrow_mut().push(("b", *v)));
        assert_eq!(em.emit(&7), 2);
        assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn unsubscribe_removes_only_that_listener() {
        let count = Rc::new(RefCell::new(0));
        let mut em: EventEmitter<()> = EventEmitter::new();
        let c = Rc::clone(&count);
        let id = em.subscribe(move |_| *c.borrow_mut() += 1);
        let c = Rc::clone(&count);
        em.subscribe(move |_| *c.borrow_mut() += 10);
        assert!(em.unsubscribe(id));
        assert!(!em.unsubscribe(id));
        em.emit(&());
        assert_eq!(*count.borrow(), 10);
        assert_eq!(em.len(), 1);
    }
}
