// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for unit tests.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use trellis_dismiss::{DismissHost, ListenerKinds, OpenChange};

use crate::Observers;

/// A host that records every effect.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub(crate) changes: Vec<OpenChange>,
    pub(crate) attached: ListenerKinds,
    pub(crate) focus_restored: usize,
}

impl DismissHost for Recorder {
    fn open_changed(&mut self, change: OpenChange) {
        self.changes.push(change);
    }

    fn attach_listeners(&mut self, kinds: ListenerKinds) {
        self.attached |= kinds;
    }

    fn detach_listeners(&mut self, kinds: ListenerKinds) {
        self.attached -= kinds;
    }

    fn restore_focus(&mut self) {
        self.focus_restored += 1;
    }
}

/// Subscribe a collector that clones every event into a shared list.
pub(crate) fn collect<E: Clone + 'static>(observers: &mut Observers<E>) -> Rc<RefCell<Vec<E>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    observers.subscribe(move |e: &E| sink.borrow_mut().push(e.clone()));
    log
}
