// Multicast delegate: an ordered invocation list of callables that all run
// on a single call.

use std::fmt;

/// Handle returned when a target is added; used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

type Target<A, R> = Box<dyn Fn(&A) -> R>;

pub struct Multicast<A: ?Sized, R = ()> {
    targets: Vec<(HandlerId, Target<A, R>)>,
    next_id: u64,
}

impl<A: ?Sized, R> Multicast<A, R> {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            next_id: 0,
        }
    }

    /// Starts a list holding exactly one target.
    pub fn with<F>(target: F) -> Self
    where
        F: Fn(&A) -> R + 'static,
    {
        let mut delegate = Self::new();
        delegate.add(target);
        delegate
    }

    /// Appends a target (`+=`).
    pub fn add<F>(&mut self, target: F) -> HandlerId
    where
        F: Fn(&A) -> R + 'static,
    {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.targets.push((id, Box::new(target)));
        id
    }

    /// Removes a previously added target (`-=`). Returns whether it was present.
    pub fn remove(&mut self, id: HandlerId) -> bool {
        let before = self.targets.len();
        self.targets.retain(|(target_id, _)| *target_id != id);
        self.targets.len() != before
    }

    /// Replaces the whole invocation list with a single target (`=`).
    pub fn assign<F>(&mut self, target: F) -> HandlerId
    where
        F: Fn(&A) -> R + 'static,
    {
        self.targets.clear();
        self.add(target)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Runs every target in insertion order and returns the last result,
    /// or `None` for an empty list.
    pub fn invoke(&self, args: &A) -> Option<R> {
        self.targets.iter().fold(None, |_, (_, target)| Some(target(args)))
    }

    /// Runs every target in insertion order and keeps every result.
    pub fn invoke_all(&self, args: &A) -> Vec<R> {
        self.targets.iter().map(|(_, target)| target(args)).collect()
    }
}

impl<A: ?Sized, R> Default for Multicast<A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized, R> fmt::Debug for Multicast<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Multicast")
            .field("targets", &self.targets.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&'static str) -> Box<dyn Fn(&str)>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let make = move |tag: &'static str| -> Box<dyn Fn(&str)> {
            let sink = sink.clone();
            Box::new(move |msg: &str| sink.borrow_mut().push(format!("{}:{}", tag, msg)))
        };
        (log, make)
    }

    #[test]
    fn test_invokes_in_insertion_order() {
        let (log, make) = recorder();
        let mut delegate: Multicast<str> = Multicast::new();
        delegate.add(make("a"));
        delegate.add(make("b"));
        delegate.add(make("c"));

        delegate.invoke("x");
        assert_eq!(*log.borrow(), vec!["a:x", "b:x", "c:x"]);
    }

    #[test]
    fn test_invoke_returns_last_result() {
        let mut delegate: Multicast<(i32, i32), i32> = Multicast::with(|(a, b)| a + b);
        delegate.add(|(a, b)| a * b);
        assert_eq!(delegate.invoke(&(3, 4)), Some(12));
        assert_eq!(delegate.invoke_all(&(3, 4)), vec![7, 12]);
    }

    #[test]
    fn test_empty_invoke_is_none() {
        let delegate: Multicast<i32, i32> = Multicast::default();
        assert!(delegate.is_empty());
        assert_eq!(delegate.invoke(&1), None);
        assert!(delegate.invoke_all(&1).is_empty());
    }

    #[test]
    fn test_remove_by_handle() {
        let (log, make) = recorder();
        let mut delegate: Multicast<str> = Multicast::new();
        delegate.add(make("email"));
        let sms = delegate.add(make("sms"));

        assert!(delegate.remove(sms));
        assert!(!delegate.remove(sms));
        delegate.invoke("update");
        assert_eq!(*log.borrow(), vec!["email:update"]);
    }

    #[test]
    fn test_assign_replaces_list() {
        let mut delegate: Multicast<i32, i32> = Multicast::with(|x| x + 1);
        delegate.add(|x| x + 2);
        delegate.assign(|x| x * 10);
        assert_eq!(delegate.len(), 1);
        assert_eq!(delegate.invoke(&3), Some(30));
    }

    #[test]
    fn test_handles_stay_unique_after_assign() {
        let mut delegate: Multicast<i32, i32> = Multicast::new();
        let first = delegate.add(|x| *x);
        let second = delegate.assign(|x| *x);
        assert_ne!(first, second);
        assert!(!delegate.remove(first));
        assert!(delegate.remove(second));
    }
}
