/// Identify a subscription made through `Observable::subscribe`.
pub type SubscriptionId = u32;

type Subscriber<T> = Box<dyn FnMut(&T)>;

/// Holds a value and synchronously notifies its subscribers each time it is set.
///
/// Only the owner of the `Observable` can set its value. Subscribers are called in the order
/// in which they subscribed.
pub struct Observable<T: Clone> {
    value: T,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
    next_id: SubscriptionId,
}

impl<T: Clone> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: vec![],
            next_id: 0,
        }
    }

    /// Returns a copy of the last value set.
    pub fn get(&self) -> T {
        self.value.clone()
    }

    /// Returns a reference to the last value set.
    pub fn get_ref(&self) -> &T {
        &self.value
    }

    /// Replace the current value then call every subscriber with it.
    pub(crate) fn set(&mut self, value: T) {
        self.value = value;
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.value);
        }
    }

    /// Register `callback` so it is called with the new value each time it is set.
    ///
    /// The callback is not called with the current value.
    pub fn subscribe(&mut self, callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription. Returns `false` if no subscription had that `id`.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != len_before
    }

    pub(crate) fn clear_subscribers(&mut self) {
        self.subscribers.clear();
    }

    #[cfg(test)]
    pub(crate) fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
