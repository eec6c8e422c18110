use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::*;

// =============================================================
// Helpers
// =============================================================

/// Test stand-in for the browser macrotask queue: deferred callbacks pile up
/// here until the test pumps them explicitly.
#[derive(Clone, Default)]
struct ManualDefer {
    pending: Rc<RefCell<VecDeque<Box<dyn FnOnce()>>>>,
}

impl ManualDefer {
    fn new() -> Self {
        Self::default()
    }

    /// Run the oldest deferred callback, if any. Returns whether one ran.
    fn pump_one(&self) -> bool {
        let front = self.pending.borrow_mut().pop_front();
        match front {
            Some(f) => {
                f();
                true
            }
            None => false,
        }
    }

    /// Run deferred callbacks until none remain.
    fn pump_all(&self) {
        while self.pump_one() {}
    }

    fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }
}

impl Defer for ManualDefer {
    fn defer(&self, f: Box<dyn FnOnce()>) {
        self.pending.borrow_mut().push_back(f);
    }
}

type Log = Rc<RefCell<Vec<&'static str>>>;

fn named_task(log: &Log, name: &'static str) -> Task {
    let log = Rc::clone(log);
    Box::new(move || log.borrow_mut().push(name))
}

// =============================================================
// CoalescingQueue
// =============================================================

#[test]
fn first_submit_requests_a_tick() {
    let mut queue = CoalescingQueue::new();
    assert!(queue.submit("a"));
}

#[test]
fn second_submit_does_not_request_a_tick() {
    let mut queue = CoalescingQueue::new();
    queue.submit("a");
    assert!(!queue.submit("b"));
}

#[test]
fn third_submit_replaces_the_pending_task() {
    let mut queue = CoalescingQueue::new();
    queue.submit("a");
    queue.submit("b");
    queue.submit("c");

    assert_eq!(queue.begin_tick(), Some("a"));
    assert!(queue.finish_tick());
    assert_eq!(queue.begin_tick(), Some("c"));
    assert!(!queue.finish_tick());
}

#[test]
fn outstanding_never_exceeds_two() {
    let mut queue = CoalescingQueue::new();
    for name in ["a", "b", "c", "d", "e"] {
        queue.submit(name);
        assert!(queue.outstanding() <= 2);
    }
    assert_eq!(queue.outstanding(), 2);
}

#[test]
fn begin_tick_on_empty_queue_is_none() {
    let mut queue = CoalescingQueue::<&str>::new();
    assert_eq!(queue.begin_tick(), None);
    assert!(!queue.finish_tick());
}

#[test]
fn in_flight_task_counts_as_outstanding() {
    let mut queue = CoalescingQueue::new();
    queue.submit("a");
    queue.begin_tick();
    assert_eq!(queue.outstanding(), 1);
    queue.finish_tick();
    assert_eq!(queue.outstanding(), 0);
}

#[test]
fn submit_while_in_flight_lands_in_pending() {
    let mut queue = CoalescingQueue::new();
    queue.submit("a");
    assert_eq!(queue.begin_tick(), Some("a"));

    // Mid-execution: the front slot is free but a tick is in flight, so the
    // submission must not claim the front slot or request a tick.
    assert!(!queue.submit("b"));
    assert!(queue.finish_tick());
    assert_eq!(queue.begin_tick(), Some("b"));
}

#[test]
fn finish_tick_promotes_pending_to_front() {
    let mut queue = CoalescingQueue::new();
    queue.submit("a");
    queue.submit("b");
    queue.begin_tick();
    assert!(queue.finish_tick());
    assert_eq!(queue.begin_tick(), Some("b"));
}

// =============================================================
// RedrawScheduler
// =============================================================

#[test]
fn run_is_never_synchronous() {
    let defer = ManualDefer::new();
    let scheduler = RedrawScheduler::new(defer.clone());
    let log: Log = Rc::default();

    scheduler.run(named_task(&log, "a"));
    assert!(log.borrow().is_empty());
    assert_eq!(defer.pending_count(), 1);
}

#[test]
fn single_task_executes_exactly_once() {
    let defer = ManualDefer::new();
    let scheduler = RedrawScheduler::new(defer.clone());
    let log: Log = Rc::default();

    scheduler.run(named_task(&log, "a"));
    defer.pump_all();

    assert_eq!(*log.borrow(), ["a"]);
    assert_eq!(defer.pending_count(), 0);
}

#[test]
fn two_rapid_runs_execute_both_in_order() {
    let defer = ManualDefer::new();
    let scheduler = RedrawScheduler::new(defer.clone());
    let log: Log = Rc::default();

    scheduler.run(named_task(&log, "a"));
    scheduler.run(named_task(&log, "b"));
    defer.pump_all();

    assert_eq!(*log.borrow(), ["a", "b"]);
}

#[test]
fn three_rapid_runs_drop_the_middle_task() {
    let defer = ManualDefer::new();
    let scheduler = RedrawScheduler::new(defer.clone());
    let log: Log = Rc::default();

    scheduler.run(named_task(&log, "a"));
    scheduler.run(named_task(&log, "b"));
    scheduler.run(named_task(&log, "c"));
    defer.pump_all();

    // Exactly two executions: the first submitted and the last submitted.
    assert_eq!(*log.borrow(), ["a", "c"]);
}

#[test]
fn many_rapid_runs_keep_only_first_and_last() {
    let defer = ManualDefer::new();
    let scheduler = RedrawScheduler::new(defer.clone());
    let log: Log = Rc::default();

    for name in ["a", "b", "c", "d", "e", "f"] {
        scheduler.run(named_task(&log, name));
    }
    defer.pump_all();

    assert_eq!(*log.borrow(), ["a", "f"]);
}

#[test]
fn each_tick_executes_one_task() {
    let defer = ManualDefer::new();
    let scheduler = RedrawScheduler::new(defer.clone());
    let log: Log = Rc::default();

    scheduler.run(named_task(&log, "a"));
    scheduler.run(named_task(&log, "b"));

    assert!(defer.pump_one());
    assert_eq!(*log.borrow(), ["a"]);
    assert_eq!(defer.pending_count(), 1);

    assert!(defer.pump_one());
    assert_eq!(*log.borrow(), ["a", "b"]);
    assert_eq!(defer.pending_count(), 0);
}

#[test]
fn run_submitted_mid_execution_executes_on_a_later_tick() {
    let defer = ManualDefer::new();
    let scheduler = RedrawScheduler::new(defer.clone());
    let log: Log = Rc::default();

    let inner = scheduler.clone();
    let inner_log = Rc::clone(&log);
    let follow_up = Rc::clone(&log);
    scheduler.run(Box::new(move || {
        inner_log.borrow_mut().push("a");
        inner.run(named_task(&follow_up, "b"));
    }));

    assert!(defer.pump_one());
    assert_eq!(*log.borrow(), ["a"]);

    defer.pump_all();
    assert_eq!(*log.borrow(), ["a", "b"]);
}

#[test]
fn scheduler_is_reusable_after_draining() {
    let defer = ManualDefer::new();
    let scheduler = RedrawScheduler::new(defer.clone());
    let log: Log = Rc::default();

    scheduler.run(named_task(&log, "a"));
    defer.pump_all();
    scheduler.run(named_task(&log, "b"));
    defer.pump_all();

    assert_eq!(*log.borrow(), ["a", "b"]);
}
