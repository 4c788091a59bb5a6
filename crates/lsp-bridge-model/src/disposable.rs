//! Disposal handles for registrations and subscriptions.

/// A handle that undoes one registration when disposed.
///
/// Disposal is idempotent; dropping an undisposed handle disposes it.
pub struct Disposable {
    action: Option<Box<dyn FnOnce() + Send>>,
}

impl Disposable {
    /// Creates a handle running `action` on disposal.
    pub fn new(action: impl FnOnce() + Send + 'static) -> Self {
        Self { action: Some(Box::new(action)) }
    }

    /// A handle that does nothing.
    pub fn noop() -> Self {
        Self { action: None }
    }

    /// Runs the disposal action. Subsequent calls do nothing.
    pub fn dispose(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

impl Drop for Disposable {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for Disposable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Disposable")
            .field("disposed", &self.action.is_none())
            .finish()
    }
}

/// A group of handles disposed together.
#[derive(Debug, Default)]
pub struct DisposableCollection {
    items: Vec<Disposable>,
}

impl DisposableCollection {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a handle to the collection.
    pub fn push(&mut self, disposable: Disposable) {
        self.items.push(disposable);
    }

    /// Disposes every handle and empties the collection.
    pub fn dispose(&mut self) {
        for mut item in self.items.drain(..) {
            item.dispose();
        }
    }

    /// Collapses the collection into one handle.
    pub fn into_disposable(mut self) -> Disposable {
        let mut items = std::mem::take(&mut self.items);
        Disposable::new(move || {
            for item in &mut items {
                item.dispose();
            }
        })
    }
}

impl Drop for DisposableCollection {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl FromIterator<Disposable> for DisposableCollection {
    fn from_iter<I: IntoIterator<Item = Disposable>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn dispose_is_idempotent() {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        let mut d = Disposable::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        d.dispose();
        d.dispose();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn drop_disposes_once() {
        let count = Arc::new(AtomicUsize::new(0));
        {
            let c = count.clone();
            let mut d = Disposable::new(move || {
                c.fetch_add(1, Ordering::SeqCst);
            });
            d.dispose();
        }
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn collection_disposes_all_members() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut collection = DisposableCollection::new();
        for _ in 0..3 {
            let c = count.clone();
            collection.push(Disposable::new(move || {
                c.fetch_add(1, Ordering::SeqCst);
            }));
        }
        collection.dispose();
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }
}
