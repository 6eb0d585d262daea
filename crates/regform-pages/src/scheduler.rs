//! Deferred tasks
//!
//! The form runs on a single-threaded event loop, so tasks are plain
//! `FnOnce` boxes without `Send`. Every scheduled task gets a
//! [`TaskHandle`] that can cancel it until it fires.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

pub type Task = Box<dyn FnOnce() + 'static>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

pub trait Scheduler {
	/// Run `task` once after `delay`.
	fn schedule(&self, delay: Duration, task: Task) -> TaskHandle;

	/// Cancel a pending task. Returns `false` if it already ran or was
	/// cancelled.
	fn cancel(&self, handle: TaskHandle) -> bool;
}

/// Scheduler driven by an explicit virtual clock.
///
/// Nothing runs until [`advance`](Self::advance) moves the clock. Tasks
/// scheduled from inside a running task are picked up in the same call if
/// they fall due before the target time.
///
/// ```
/// use regform_pages::{ManualScheduler, Scheduler};
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// let fired = Rc::new(Cell::new(false));
/// let flag = fired.clone();
/// scheduler.schedule(Duration::from_secs(2), Box::new(move || flag.set(true)));
///
/// scheduler.advance(Duration::from_millis(1999));
/// assert!(!fired.get());
/// scheduler.advance(Duration::from_millis(1));
/// assert!(fired.get());
/// ```
#[derive(Clone, Default)]
pub struct ManualScheduler {
	queue: Rc<RefCell<ManualQueue>>,
}

#[derive(Default)]
struct ManualQueue {
	now: Duration,
	next_id: u64,
	// Keyed by (due, id) so equal due times keep scheduling order.
	tasks: BTreeMap<(Duration, u64), Task>,
}

impl ManualScheduler {
	pub fn new() -> Self {
		Self::default()
	}

	/// Virtual time elapsed since creation.
	pub fn now(&self) -> Duration {
		self.queue.borrow().now
	}

	pub fn pending(&self) -> usize {
		self.queue.borrow().tasks.len()
	}

	/// Move the clock forward by `by`, running every task that falls due.
	///
	/// Returns the number of tasks run.
	pub fn advance(&self, by: Duration) -> usize {
		let target = self.now() + by;
		let mut ran = 0;
		loop {
			let next = {
				let mut queue = self.queue.borrow_mut();
				let due = queue.tasks.keys().next().map(|&(due, _)| due);
				match due {
					Some(due) if due <= target => {
						queue.now = due;
						queue.tasks.pop_first().map(|(_, task)| task)
					}
					_ => None,
				}
			};
			// The queue borrow is released before the task runs so it can
			// schedule follow-ups.
			let Some(task) = next else { break };
			task();
			ran += 1;
		}
		self.queue.borrow_mut().now = target;
		ran
	}

	/// Run tasks until none are left, advancing the clock as needed.
	pub fn run_until_idle(&self) -> usize {
		let mut ran = 0;
		loop {
			let due = {
				let queue = self.queue.borrow();
				match queue.tasks.keys().next() {
					Some(&(due, _)) => due.saturating_sub(queue.now),
					None => return ran,
				}
			};
			ran += self.advance(due);
		}
	}
}

impl Scheduler for ManualScheduler {
	fn schedule(&self, delay: Duration, task: Task) -> TaskHandle {
		let mut queue = self.queue.borrow_mut();
		let id = queue.next_id;
		queue.next_id += 1;
		let due = queue.now + delay;
		queue.tasks.insert((due, id), task);
		TaskHandle(id)
	}

	fn cancel(&self, handle: TaskHandle) -> bool {
		let mut queue = self.queue.borrow_mut();
		let key = queue.tasks.keys().find(|(_, id)| *id == handle.0).copied();
		match key {
			Some(key) => queue.tasks.remove(&key).is_some(),
			None => false,
		}
	}
}

/// Browser scheduler backed by `setTimeout`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Default)]
pub struct TimeoutScheduler {
	registry: Rc<RefCell<TimeoutRegistry>>,
}

#[cfg(target_arch = "wasm32")]
#[derive(Default)]
struct TimeoutRegistry {
	next_id: u64,
	active: std::collections::HashMap<u64, gloo_timers::callback::Timeout>,
	// Ids whose callback has returned. Their `Timeout`s are dropped on the
	// next schedule call. A task that schedules from inside its callback is
	// not listed yet, so its own `Timeout` survives that call.
	fired: Vec<u64>,
}

#[cfg(target_arch = "wasm32")]
impl TimeoutScheduler {
	pub fn new() -> Self {
		Self::default()
	}
}

#[cfg(target_arch = "wasm32")]
impl Scheduler for TimeoutScheduler {
	fn schedule(&self, delay: Duration, task: Task) -> TaskHandle {
		let mut registry = self.registry.borrow_mut();
		let fired = std::mem::take(&mut registry.fired);
		for id in fired {
			registry.active.remove(&id);
		}

		let id = registry.next_id;
		registry.next_id += 1;
		let weak = Rc::downgrade(&self.registry);
		let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
		let timeout = gloo_timers::callback::Timeout::new(millis, move || {
			task();
			if let Some(registry) = weak.upgrade() {
				registry.borrow_mut().fired.push(id);
			}
		});
		registry.active.insert(id, timeout);
		TaskHandle(id)
	}

	fn cancel(&self, handle: TaskHandle) -> bool {
		let mut registry = self.registry.borrow_mut();
		if registry.fired.contains(&handle.0) {
			return false;
		}
		// Dropping a gloo `Timeout` clears it.
		registry.active.remove(&handle.0).is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
		let log = Rc::new(RefCell::new(Vec::new()));
		let sink = log.clone();
		let make = move |label: &'static str| -> Task {
			let sink = sink.clone();
			Box::new(move || sink.borrow_mut().push(label))
		};
		(log, make)
	}

	#[rstest]
	fn test_tasks_run_in_due_order() {
		let scheduler = ManualScheduler::new();
		let (log, task) = recorder();
		scheduler.schedule(Duration::from_secs(3), task("late"));
		scheduler.schedule(Duration::from_secs(1), task("early"));
		scheduler.schedule(Duration::from_secs(1), task("early-second"));

		assert_eq!(scheduler.advance(Duration::from_secs(5)), 3);
		assert_eq!(*log.borrow(), vec!["early", "early-second", "late"]);
		assert_eq!(scheduler.now(), Duration::from_secs(5));
	}

	#[rstest]
	fn test_cancelled_task_never_runs() {
		let scheduler = ManualScheduler::new();
		let (log, task) = recorder();
		let handle = scheduler.schedule(Duration::from_secs(1), task("cancelled"));

		assert!(scheduler.cancel(handle));
		assert!(!scheduler.cancel(handle));
		scheduler.advance(Duration::from_secs(2));
		assert!(log.borrow().is_empty());
	}

	#[rstest]
	fn test_nested_schedule_runs_when_due() {
		let scheduler = ManualScheduler::new();
		let (log, task) = recorder();
		let inner = scheduler.clone();
		let follow_up = task("follow-up");
		scheduler.schedule(
			Duration::from_secs(2),
			Box::new(move || {
				inner.schedule(Duration::from_secs(5), follow_up);
			}),
		);

		scheduler.advance(Duration::from_secs(6));
		assert!(log.borrow().is_empty());
		assert_eq!(scheduler.pending(), 1);

		scheduler.advance(Duration::from_secs(1));
		assert_eq!(*log.borrow(), vec!["follow-up"]);
	}

	#[rstest]
	fn test_run_until_idle_drains_queue() {
		let scheduler = ManualScheduler::new();
		let (log, task) = recorder();
		scheduler.schedule(Duration::from_secs(7), task("b"));
		scheduler.schedule(Duration::from_secs(2), task("a"));

		assert_eq!(scheduler.run_until_idle(), 2);
		assert_eq!(*log.borrow(), vec!["a", "b"]);
		assert_eq!(scheduler.now(), Duration::from_secs(7));
		assert_eq!(scheduler.pending(), 0);
	}
}
