//! Redraw scheduling: a coalescing two-slot task queue drained across
//! macrotask ticks.
//!
//! Slider drags request redraws faster than the browser can paint. A naive
//! per-event queue grows without bound and the picture lags the slider. The
//! queue here retains at most two tasks — the one in flight and the most
//! recently requested one — and a newer request replaces the pending slot
//! outright, so intermediate states are dropped and only the latest requested
//! state is ever drawn next.
//!
//! Execution is deferred: each drain tick runs on a fresh macrotask (a
//! zero-delay timeout), never within the call stack that submitted the task.
//! A task that panics halts the rest of its drain chain; tasks are not
//! expected to fail and this is not handled.

#[cfg(test)]
#[path = "sched_test.rs"]
mod sched_test;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce()>;

/// Bounded double-slot queue: one task in flight, one pending, nothing else.
///
/// Pure state machine with no notion of time; the caller schedules drain
/// ticks whenever `submit` or `finish_tick` says to. Single-threaded by
/// construction, so plain sequential logic suffices.
pub struct CoalescingQueue<T> {
    /// Task scheduled for the next drain tick.
    current: Option<T>,
    /// Most recent submission while `current` was occupied; replaced, never
    /// queued further.
    next: Option<T>,
    /// A drain tick has taken `current` and is executing it.
    in_flight: bool,
}

impl<T> Default for CoalescingQueue<T> {
    fn default() -> Self {
        Self { current: None, next: None, in_flight: false }
    }
}

impl<T> CoalescingQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a task. Returns `true` when the caller must schedule a drain
    /// tick — only on the transition out of the idle state; in every other
    /// state a tick is already on its way and the task lands in (or
    /// replaces) the pending slot.
    pub fn submit(&mut self, task: T) -> bool {
        if self.current.is_none() && !self.in_flight {
            self.current = Some(task);
            true
        } else {
            self.next = Some(task);
            false
        }
    }

    /// Start a drain tick: remove the front task for execution.
    pub fn begin_tick(&mut self) -> Option<T> {
        let task = self.current.take();
        self.in_flight = task.is_some();
        task
    }

    /// End a drain tick: promote the pending task, if any, into the front
    /// slot. Returns `true` when the caller must schedule another tick.
    pub fn finish_tick(&mut self) -> bool {
        self.in_flight = false;
        if self.current.is_none() {
            self.current = self.next.take();
        }
        self.current.is_some()
    }

    /// Number of outstanding tasks (in flight plus retained). Never exceeds 2.
    #[must_use]
    pub fn outstanding(&self) -> usize {
        usize::from(self.current.is_some() || self.in_flight) + usize::from(self.next.is_some())
    }
}

/// Deferred-callback primitive: runs `f` later, never synchronously within
/// the current call stack.
pub trait Defer {
    fn defer(&self, f: Box<dyn FnOnce()>);
}

/// Browser macrotask defer: a zero-delay timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacrotaskDefer;

impl Defer for MacrotaskDefer {
    fn defer(&self, f: Box<dyn FnOnce()>) {
        Timeout::new(0, f).forget();
    }
}

/// Drives a [`CoalescingQueue`] of redraw tasks across deferred ticks.
///
/// Clones share the same queue, so a task may submit follow-up work through
/// a clone of its own scheduler.
pub struct RedrawScheduler<D> {
    queue: Rc<RefCell<CoalescingQueue<Task>>>,
    defer: D,
}

impl<D: Clone> Clone for RedrawScheduler<D> {
    fn clone(&self) -> Self {
        Self { queue: Rc::clone(&self.queue), defer: self.defer.clone() }
    }
}

impl<D: Defer + Clone + 'static> RedrawScheduler<D> {
    #[must_use]
    pub fn new(defer: D) -> Self {
        Self { queue: Rc::new(RefCell::new(CoalescingQueue::new())), defer }
    }

    /// Submit a task for eventual execution on a later macrotask tick.
    ///
    /// Tasks submitted while one is already queued and another pending
    /// silently replace the pending one; they never execute.
    pub fn run(&self, task: Task) {
        if self.queue.borrow_mut().submit(task) {
            self.schedule_tick();
        }
    }

    fn schedule_tick(&self) {
        let this = self.clone();
        self.defer.defer(Box::new(move || {
            let task = this.queue.borrow_mut().begin_tick();
            if let Some(task) = task {
                task();
            }
            if this.queue.borrow_mut().finish_tick() {
                this.schedule_tick();
            }
        }));
    }
}
