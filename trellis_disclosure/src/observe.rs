// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subscriber lists for widget events.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Handle returned by [`Observers::subscribe`], used to unsubscribe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Callback<E> = Box<dyn FnMut(&E)>;

/// The callbacks interested in a widget's events.
///
/// Every state change a widget makes is delivered to its observers in
/// subscription order, after the widget's own state has been updated, so a
/// callback that reads the widget back sees the new state.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use trellis_disclosure::Observers;
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let mut observers = Observers::new();
/// let sink = Rc::clone(&seen);
/// let id = observers.subscribe(move |n: &u32| sink.borrow_mut().push(*n));
///
/// observers.notify(&1);
/// assert!(observers.unsubscribe(id));
/// observers.notify(&2);
/// assert_eq!(*seen.borrow(), [1]);
/// ```
pub struct Observers<E> {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback<E>)>,
}

impl<E> Observers<E> {
    /// An empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    /// Register `callback` for every future event.
    pub fn subscribe(&mut self, callback: impl FnMut(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(s, _)| *s != id);
        self.subscribers.len() != before
    }

    /// Deliver `event` to every subscriber.
    pub fn notify(&mut self, event: &E) {
        for (_, callback) in &mut self.subscribers {
            callback(event);
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Whether nobody is listening.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Observers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.subscribers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
