//! Event queue for deferred callbacks.
//!
//! Stands in for the host event loop: work posted here runs only when the
//! test drives the queue with [`EventQueue::tick`] or
//! [`EventQueue::run_until_idle`].

use crate::error::MockError;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;
use tracing::trace;

enum Task {
    Callback(Box<dyn FnOnce()>),
    Raise(MockError),
}

/// FIFO queue of deferred work. Clones share the same queue.
#[derive(Clone, Default)]
pub struct EventQueue {
    tasks: Rc<RefCell<VecDeque<Task>>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a callback to run on a later tick.
    pub fn post(&self, f: impl FnOnce() + 'static) {
        self.tasks.borrow_mut().push_back(Task::Callback(Box::new(f)));
    }

    /// Post an error to be raised on a later tick.
    pub fn post_raise(&self, error: MockError) {
        self.tasks.borrow_mut().push_back(Task::Raise(error));
    }

    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub fn is_idle(&self) -> bool {
        self.tasks.borrow().is_empty()
    }

    /// Run the oldest task. Returns `Ok(false)` when the queue was empty.
    ///
    /// A raised task surfaces as `Err`.
    pub fn tick(&self) -> Result<bool, MockError> {
        // Release the borrow before running: callbacks may post more work.
        let task = self.tasks.borrow_mut().pop_front();
        match task {
            None => Ok(false),
            Some(Task::Callback(f)) => {
                trace!(remaining = self.pending(), "running queued callback");
                f();
                Ok(true)
            }
            Some(Task::Raise(error)) => Err(error),
        }
    }

    /// Run tasks until the queue is empty, including tasks posted meanwhile.
    ///
    /// Stops at the first raised error; tasks behind it stay queued.
    pub fn run_until_idle(&self) -> Result<usize, MockError> {
        let mut ran = 0;
        while self.tick()? {
            ran += 1;
        }
        Ok(ran)
    }
}

impl fmt::Debug for EventQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventQueue")
            .field("pending", &self.pending())
            .finish()
    }
}
