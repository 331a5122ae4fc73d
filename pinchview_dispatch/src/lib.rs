// Copyright 2025 the PinchView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pinchview_dispatch --heading-base-level=0

//! PinchView Dispatch: deliver gesture notifications on the UI thread.
//!
//! Gesture recognition often runs on a different thread than the one that
//! owns the UI. `pinchview_gesture` only *reports* that the viewer should
//! close or that the user tapped; this crate carries those
//! [`ViewerRequest`]s across threads and runs the host's handlers where they
//! belong.
//!
//! - [`request_channel`] creates a connected [`RequestSender`] /
//!   [`RequestReceiver`] pair.
//! - The sender is `Send + Clone` and never blocks. Sending after the receiver
//!   is gone is logged and otherwise ignored.
//! - The receiver owns the handlers and runs them from
//!   [`RequestReceiver::dispatch_pending`], typically once per UI frame.
//! - [`GestureSession`] bundles a [`GestureInterpreter`] with a sender for
//!   the gesture thread.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::Size;
//! use pinchview_dispatch::{GestureSession, request_channel};
//! use pinchview_gesture::{GestureEvent, GestureInterpreter};
//!
//! let (sender, receiver) = request_channel();
//! let taps = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&taps);
//! let mut receiver = receiver
//!     .on_request_close(|| {})
//!     .on_single_tap(move || counter.set(counter.get() + 1));
//!
//! let gestures = std::thread::spawn(move || {
//!     let interpreter = GestureInterpreter::new(Size::new(400.0, 800.0), Size::new(800.0, 600.0));
//!     let mut session = GestureSession::new(interpreter, sender);
//!     session.handle(GestureEvent::SingleTap);
//! });
//! gestures.join().unwrap();
//!
//! assert_eq!(receiver.dispatch_pending(), 1);
//! assert_eq!(taps.get(), 1);
//! ```

use core::fmt;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use pinchview_gesture::{Directives, GestureEvent, GestureInterpreter, Outcome, ViewerRequest};
use tracing::{debug, warn};

/// Creates a connected sender/receiver pair.
#[must_use]
pub fn request_channel() -> (RequestSender, RequestReceiver) {
    let (tx, rx) = mpsc::channel();
    (
        RequestSender { tx },
        RequestReceiver {
            rx,
            on_request_close: None,
            on_single_tap: None,
        },
    )
}

/// Gesture-thread side of the handoff.
#[derive(Clone, Debug)]
pub struct RequestSender {
    tx: Sender<ViewerRequest>,
}

impl RequestSender {
    /// Queues `request` for the UI thread. Fire-and-forget.
    pub fn send(&self, request: ViewerRequest) {
        if self.tx.send(request).is_err() {
            warn!(?request, "request receiver dropped; notification lost");
        }
    }

    /// Queues the request carried by `outcome`, if any.
    pub fn forward(&self, outcome: &Outcome) {
        if let Some(request) = outcome.request {
            self.send(request);
        }
    }
}

type Handler = Box<dyn FnMut()>;

/// UI-thread side of the handoff.
///
/// Owns the host's handlers. They only ever run inside
/// [`dispatch_pending`](Self::dispatch_pending), on the calling thread.
pub struct RequestReceiver {
    rx: Receiver<ViewerRequest>,
    on_request_close: Option<Handler>,
    on_single_tap: Option<Handler>,
}

impl fmt::Debug for RequestReceiver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestReceiver")
            .field("rx", &self.rx)
            .field("on_request_close", &self.on_request_close.is_some())
            .field("on_single_tap", &self.on_single_tap.is_some())
            .finish()
    }
}

impl RequestReceiver {
    /// Sets the handler for [`ViewerRequest::Close`].
    #[must_use]
    pub fn on_request_close(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_request_close = Some(Box::new(handler));
        self
    }

    /// Sets the optional handler for [`ViewerRequest::SingleTap`].
    ///
    /// Without one, single taps are dropped.
    #[must_use]
    pub fn on_single_tap(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_single_tap = Some(Box::new(handler));
        self
    }

    /// Runs the handler for every queued request, in arrival order.
    ///
    /// Returns the number of requests taken from the queue, including those
    /// without a handler. Never blocks.
    pub fn dispatch_pending(&mut self) -> usize {
        let mut count = 0;
        loop {
            match self.rx.try_recv() {
                Ok(request) => {
                    count += 1;
                    self.run(request);
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        count
    }

    fn run(&mut self, request: ViewerRequest) {
        let handler = match request {
            ViewerRequest::Close => self.on_request_close.as_mut(),
            ViewerRequest::SingleTap => self.on_single_tap.as_mut(),
        };
        match handler {
            Some(handler) => handler(),
            None => debug!(?request, "no handler registered"),
        }
    }
}

/// A [`GestureInterpreter`] whose notifications go straight to a
/// [`RequestSender`].
///
/// Lives on the gesture thread; only directives are returned to the caller.
#[derive(Debug)]
pub struct GestureSession {
    interpreter: GestureInterpreter,
    requests: RequestSender,
}

impl GestureSession {
    /// Wraps `interpreter`, forwarding its requests to `requests`.
    #[must_use]
    pub fn new(interpreter: GestureInterpreter, requests: RequestSender) -> Self {
        Self {
            interpreter,
            requests,
        }
    }

    /// Applies `event`, forwards any request and returns the directives.
    pub fn handle(&mut self, event: GestureEvent) -> Directives {
        let outcome = self.interpreter.handle(event);
        self.requests.forward(&outcome);
        outcome.directives
    }

    /// Returns the wrapped interpreter.
    #[must_use]
    pub fn interpreter(&self) -> &GestureInterpreter {
        &self.interpreter
    }

    /// Returns the wrapped interpreter mutably, for animation writeback and
    /// viewport changes.
    pub fn interpreter_mut(&mut self) -> &mut GestureInterpreter {
        &mut self.interpreter
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::thread;

    use kurbo::{Size, Vec2};
    use pinchview_gesture::{GestureEvent, GestureInterpreter, PanEnd, ViewerRequest};

    use super::{GestureSession, request_channel};

    fn interpreter() -> GestureInterpreter {
        GestureInterpreter::new(Size::new(400.0, 800.0), Size::new(4000.0, 3000.0))
    }

    fn recording() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Box<dyn FnMut()>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let handle = Rc::clone(&log);
        let make = move |name: &'static str| -> Box<dyn FnMut()> {
            let log = Rc::clone(&handle);
            Box::new(move || log.borrow_mut().push(name))
        };
        (log, make)
    }

    #[test]
    fn requests_run_on_dispatching_thread_in_order() {
        let (sender, receiver) = request_channel();
        let (log, make) = recording();
        let mut receiver = receiver
            .on_request_close(make("close"))
            .on_single_tap(make("tap"));

        let worker = thread::spawn(move || {
            let mut session = GestureSession::new(interpreter(), sender);
            session.handle(GestureEvent::SingleTap);
            session.handle(GestureEvent::PanStart);
            session.handle(GestureEvent::PanEnd(PanEnd {
                translation: Vec2::new(0.0, -300.0),
                velocity: Vec2::new(0.0, -3000.0),
            }));
        });
        worker.join().unwrap();

        // Nothing runs until the UI thread asks.
        assert!(log.borrow().is_empty());
        assert_eq!(receiver.dispatch_pending(), 2);
        assert_eq!(*log.borrow(), ["tap", "close"]);
        assert_eq!(receiver.dispatch_pending(), 0);
    }

    #[test]
    fn missing_single_tap_handler_is_a_no_op() {
        let (sender, receiver) = request_channel();
        let (log, make) = recording();
        let mut receiver = receiver.on_request_close(make("close"));

        sender.send(ViewerRequest::SingleTap);
        assert_eq!(receiver.dispatch_pending(), 1);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn sending_after_receiver_dropped_does_not_panic() {
        let (sender, receiver) = request_channel();
        drop(receiver);
        sender.send(ViewerRequest::Close);
    }

    #[test]
    fn session_returns_directives_and_keeps_requests_out() {
        let (sender, mut receiver) = request_channel();
        let mut session = GestureSession::new(interpreter(), sender);

        session.handle(GestureEvent::PanStart);
        session.handle(GestureEvent::PanUpdate {
            translation: Vec2::new(0.0, -20.0),
        });
        let directives = session.handle(GestureEvent::PanEnd(PanEnd {
            translation: Vec2::new(0.0, -20.0),
            velocity: Vec2::ZERO,
        }));
        assert_eq!(directives.len(), 2);
        assert_eq!(receiver.dispatch_pending(), 0);
        assert_eq!(session.interpreter().state().translate_y, -20.0);
    }
}
