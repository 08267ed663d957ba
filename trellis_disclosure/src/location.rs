// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A button that asks the host for the device location.

use alloc::string::{String, ToString};
use core::cell::{Cell, RefCell};
use core::fmt;
use core::future::Future;

use trellis_i18n::{Translate, builtin::keys};

use crate::{Observers, SubscriptionId};

/// A position fix.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    /// Degrees north.
    pub latitude: f64,
    /// Degrees east.
    pub longitude: f64,
    /// Radius of uncertainty in meters, if known.
    pub accuracy_m: Option<f64>,
}

/// Where fixes come from: a platform geolocation API, an IP lookup, a fake.
pub trait LocationSource {
    /// Why a fix could not be produced.
    type Error: fmt::Display;

    /// Produce one fix.
    fn locate(&mut self) -> impl Future<Output = Result<Coordinates, Self::Error>>;
}

/// Notifications from a [`LocationButton`].
#[derive(Clone, Debug, PartialEq)]
pub enum LocationEvent {
    /// A request started; the button shows its busy state.
    Requested,
    /// The source produced a fix.
    Located(Coordinates),
    /// The source failed; the message is for logs, not users.
    Failed(String),
    /// The request future was dropped before it finished.
    Cancelled,
}

/// Busy state and notifications around a host location request.
///
/// [`request`](Self::request) takes `&self`, so the host can keep reading
/// [`is_busy`](Self::is_busy) (to render a spinner) while the request is
/// pending. The busy flag clears when the request finishes, fails, or is
/// dropped mid-flight. Failures are logged and reported as
/// [`LocationEvent::Failed`]; they never reach the caller as errors.
#[derive(Debug, Default)]
pub struct LocationButton {
    busy: Cell<bool>,
    observers: RefCell<Observers<LocationEvent>>,
}

impl LocationButton {
    /// An idle button.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Listen for request progress.
    pub fn subscribe(&mut self, callback: impl FnMut(&LocationEvent) + 'static) -> SubscriptionId {
        self.observers.get_mut().subscribe(callback)
    }

    /// Stop listening.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.get_mut().unsubscribe(id)
    }

    /// Whether a request is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// The button's text for the current state.
    #[must_use]
    pub fn label(&self, t: &impl Translate) -> String {
        t.translate(if self.is_busy() {
            keys::LOCATION_BUSY
        } else {
            keys::LOCATION_IDLE
        })
    }

    /// Ask `source` for a fix.
    ///
    /// Returns `None` on failure, and immediately when another request is
    /// already in flight.
    pub async fn request<S: LocationSource>(&self, source: &mut S) -> Option<Coordinates> {
        if self.busy.replace(true) {
            tracing::trace!("location request already in flight");
            return None;
        }
        let mut guard = BusyGuard {
            button: self,
            settled: false,
        };
        self.emit(&LocationEvent::Requested);

        let result = source.locate().await;
        guard.settled = true;
        drop(guard);

        match result {
            Ok(coordinates) => {
                tracing::debug!(
                    latitude = coordinates.latitude,
                    longitude = coordinates.longitude,
                    "location resolved"
                );
                self.emit(&LocationEvent::Located(coordinates));
                Some(coordinates)
            }
            Err(error) => {
                tracing::warn!(%error, "location request failed");
                self.emit(&LocationEvent::Failed(error.to_string()));
                None
            }
        }
    }

    fn emit(&self, event: &LocationEvent) {
        match self.observers.try_borrow_mut() {
            Ok(mut observers) => observers.notify(event),
            Err(_) => tracing::warn!(?event, "location observers re-entered, event dropped"),
        }
    }
}

struct BusyGuard<'a> {
    button: &'a LocationButton,
    settled: bool,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.button.busy.set(false);
        if !self.settled {
            tracing::debug!("location request cancelled");
            self.button.emit(&LocationEvent::Cancelled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::collect;
    use core::pin::{Pin, pin};
    use core::task::{Context, Poll, Waker};

    const HOME: Coordinates = Coordinates {
        latitude: 52.37,
        longitude: 4.89,
        accuracy_m: Some(25.0),
    };

    /// Resolves on the second poll.
    struct PendingOnce {
        result: Result<Coordinates, &'static str>,
        polled: bool,
    }

    impl Future for PendingOnce {
        type Output = Result<Coordinates, &'static str>;

        fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
            let this = self.get_mut();
            if this.polled {
                Poll::Ready(this.result)
            } else {
                this.polled = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    struct Scripted(Result<Coordinates, &'static str>);

    impl LocationSource for Scripted {
        type Error = &'static str;

        fn locate(&mut self) -> impl Future<Output = Result<Coordinates, Self::Error>> {
            PendingOnce {
                result: self.0,
                polled: false,
            }
        }
    }

    #[test]
    fn busy_while_pending_then_resolves() {
        let mut button = LocationButton::new();
        let events = collect(button.observers.get_mut());
        let mut source = Scripted(Ok(HOME));
        let mut cx = Context::from_waker(Waker::noop());
        {
            let mut request = pin!(button.request(&mut source));
            assert!(request.as_mut().poll(&mut cx).is_pending());
            assert!(button.is_busy());
            assert_eq!(button.label(&trellis_i18n::KeysOnly), keys::LOCATION_BUSY);
            assert_eq!(request.as_mut().poll(&mut cx), Poll::Ready(Some(HOME)));
        }
        assert!(!button.is_busy());
        assert_eq!(
            *events.borrow(),
            [LocationEvent::Requested, LocationEvent::Located(HOME)]
        );
    }

    #[test]
    fn failure_is_swallowed_and_clears_busy() {
        let mut button = LocationButton::new();
        let events = collect(button.observers.get_mut());
        let mut source = Scripted(Err("permission denied"));
        let mut cx = Context::from_waker(Waker::noop());
        {
            let mut request = pin!(button.request(&mut source));
            assert!(request.as_mut().poll(&mut cx).is_pending());
            assert_eq!(request.as_mut().poll(&mut cx), Poll::Ready(None));
        }
        assert!(!button.is_busy());
        assert_eq!(
            events.borrow().last(),
            Some(&LocationEvent::Failed("permission denied".into()))
        );
    }

    #[test]
    fn dropping_the_request_clears_busy() {
        let mut button = LocationButton::new();
        let events = collect(button.observers.get_mut());
        let mut source = Scripted(Ok(HOME));
        let mut cx = Context::from_waker(Waker::noop());
        {
            let mut request = pin!(button.request(&mut source));
            assert!(request.as_mut().poll(&mut cx).is_pending());
            assert!(button.is_busy());
        }
        assert!(!button.is_busy());
        assert_eq!(events.borrow().last(), Some(&LocationEvent::Cancelled));
    }

    #[test]
    fn second_request_while_busy_is_refused() {
        let button = LocationButton::new();
        let mut first_source = Scripted(Ok(HOME));
        let mut second_source = Scripted(Ok(HOME));
        let mut cx = Context::from_waker(Waker::noop());
        let mut first = pin!(button.request(&mut first_source));
        assert!(first.as_mut().poll(&mut cx).is_pending());
        let mut second = pin!(button.request(&mut second_source));
        assert_eq!(second.as_mut().poll(&mut cx), Poll::Ready(None));
        assert!(button.is_busy());
        assert_eq!(first.as_mut().poll(&mut cx), Poll::Ready(Some(HOME)));
        assert!(!button.is_busy());
    }

    #[test]
    fn idle_label() {
        let button = LocationButton::new();
        assert_eq!(button.label(&trellis_i18n::KeysOnly), keys::LOCATION_IDLE);
    }
}
