use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::callback::{Interval, Timeout};
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Source of timer and display-refresh callbacks.
///
/// Every method returns a handle that cancels its callback when dropped, so a
/// component releases its timers simply by dropping whatever it holds in the
/// effect cleanup.
pub trait Scheduler: Clone + 'static {
    type Handle: 'static;

    fn interval<F>(&self, millis: u32, callback: F) -> Self::Handle
    where
        F: FnMut() + 'static;

    fn timeout<F>(&self, millis: u32, callback: F) -> Self::Handle
    where
        F: FnOnce() + 'static;

    /// Calls `callback` once per rendered frame until the handle is dropped.
    fn frames<F>(&self, callback: F) -> Self::Handle
    where
        F: FnMut() + 'static;
}

/// Shared home for a handle whose own callbacks may need to cancel it.
pub struct Slot<H>(Rc<RefCell<Option<H>>>);

impl<H> Clone for Slot<H> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<H> Default for Slot<H> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }
}

impl<H> Slot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `handle`, cancelling whatever the slot held before.
    pub fn fill(&self, handle: H) {
        let previous = self.0.borrow_mut().replace(handle);
        drop(previous);
    }

    pub fn clear(&self) {
        // Take first so the RefCell is released before the handle's Drop runs.
        let previous = self.0.borrow_mut().take();
        drop(previous);
    }

    #[cfg(test)]
    pub fn is_filled(&self) -> bool {
        self.0.borrow().is_some()
    }
}

#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub struct BrowserScheduler;

// Fields are held only for their Drop.
#[allow(dead_code)]
pub enum TimerHandle {
    Interval(Interval),
    Timeout(Timeout),
    Frames(FrameLoop),
}

impl Scheduler for BrowserScheduler {
    type Handle = TimerHandle;

    fn interval<F>(&self, millis: u32, callback: F) -> TimerHandle
    where
        F: FnMut() + 'static,
    {
        TimerHandle::Interval(Interval::new(millis, callback))
    }

    fn timeout<F>(&self, millis: u32, callback: F) -> TimerHandle
    where
        F: FnOnce() + 'static,
    {
        TimerHandle::Timeout(Timeout::new(millis, callback))
    }

    fn frames<F>(&self, callback: F) -> TimerHandle
    where
        F: FnMut() + 'static,
    {
        TimerHandle::Frames(FrameLoop::start(callback))
    }
}

type FrameClosure = Closure<dyn FnMut()>;

/// A `requestAnimationFrame` loop that re-arms itself after every frame.
pub struct FrameLoop {
    request_id: Rc<Cell<Option<i32>>>,
    closure: Rc<RefCell<Option<FrameClosure>>>,
}

impl FrameLoop {
    fn start<F>(mut callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let request_id = Rc::new(Cell::new(None));
        let closure: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));

        // Weak so the closure does not keep its own slot alive.
        let rearm: Weak<RefCell<Option<FrameClosure>>> = Rc::downgrade(&closure);
        let next_id = request_id.clone();
        let frame = Closure::wrap(Box::new(move || {
            callback();
            if let Some(slot) = rearm.upgrade() {
                if let Some(frame) = slot.borrow().as_ref() {
                    next_id.set(request_frame(frame));
                }
            }
        }) as Box<dyn FnMut()>);

        request_id.set(request_frame(&frame));
        *closure.borrow_mut() = Some(frame);

        Self { request_id, closure }
    }
}

fn request_frame(frame: &FrameClosure) -> Option<i32> {
    let window = web_sys::window()?;
    match window.request_animation_frame(frame.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(err) => {
            warn!("requestAnimationFrame failed: {:?}", err);
            None
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(window), Some(id)) = (web_sys::window(), self.request_id.take()) {
            let _ = window.cancel_animation_frame(id);
        }
        let frame = self.closure.borrow_mut().take();
        drop(frame);
    }
}

/// Deterministic scheduler driven by virtual milliseconds.
#[cfg(test)]
pub mod manual {
    use super::Scheduler;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    enum Job {
        Every(u32, Box<dyn FnMut()>),
        Once(Box<dyn FnOnce()>),
        Frame(Box<dyn FnMut()>),
    }

    struct Task {
        id: u64,
        due: u64,
        job: Job,
        live: Rc<Cell<bool>>,
    }

    #[derive(Default)]
    struct Queue {
        now: u64,
        next_id: u64,
        tasks: Vec<Task>,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        queue: Rc<RefCell<Queue>>,
    }

    pub struct ManualHandle {
        live: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.live.set(false);
        }
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.queue.borrow().now
        }

        /// Number of timers and frame loops that can still fire.
        pub fn pending(&self) -> usize {
            self.queue
                .borrow()
                .tasks
                .iter()
                .filter(|task| task.live.get())
                .count()
        }

        /// Moves virtual time forward, firing due timers in order.
        pub fn advance(&self, millis: u64) {
            let target = self.now() + millis;
            while let Some(task) = self.next_due(target) {
                self.run(task);
            }
            self.queue.borrow_mut().now = target;
        }

        /// Delivers one display refresh to every live frame loop.
        pub fn frame(&self) {
            let ids: Vec<u64> = self
                .queue
                .borrow()
                .tasks
                .iter()
                .filter(|task| matches!(task.job, Job::Frame(_)) && task.live.get())
                .map(|task| task.id)
                .collect();

            for id in ids {
                let task = {
                    let mut queue = self.queue.borrow_mut();
                    let index = queue.tasks.iter().position(|task| task.id == id);
                    index.map(|index| queue.tasks.remove(index))
                };
                if let Some(task) = task {
                    if task.live.get() {
                        self.run(task);
                    }
                }
            }
        }

        fn push(&self, delay: u64, job: Job) -> ManualHandle {
            let live = Rc::new(Cell::new(true));
            let mut queue = self.queue.borrow_mut();
            let id = queue.next_id;
            queue.next_id += 1;
            let due = queue.now + delay;
            queue.tasks.push(Task {
                id,
                due,
                job,
                live: live.clone(),
            });
            ManualHandle { live }
        }

        fn next_due(&self, target: u64) -> Option<Task> {
            let mut queue = self.queue.borrow_mut();
            queue.tasks.retain(|task| task.live.get());
            let index = queue
                .tasks
                .iter()
                .enumerate()
                .filter(|(_, task)| !matches!(task.job, Job::Frame(_)) && task.due <= target)
                .min_by_key(|(_, task)| (task.due, task.id))
                .map(|(index, _)| index)?;
            let task = queue.tasks.remove(index);
            queue.now = task.due;
            Some(task)
        }

        // The queue is never borrowed while a callback runs, so callbacks may
        // schedule or cancel freely.
        fn run(&self, task: Task) {
            let Task { id, due, job, live } = task;
            match job {
                Job::Every(period, mut callback) => {
                    callback();
                    if live.get() {
                        self.queue.borrow_mut().tasks.push(Task {
                            id,
                            due: due + u64::from(period.max(1)),
                            job: Job::Every(period, callback),
                            live,
                        });
                    }
                }
                Job::Once(callback) => {
                    live.set(false);
                    callback();
                }
                Job::Frame(mut callback) => {
                    callback();
                    if live.get() {
                        self.queue.borrow_mut().tasks.push(Task {
                            id,
                            due,
                            job: Job::Frame(callback),
                            live,
                        });
                    }
                }
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn interval<F>(&self, millis: u32, callback: F) -> ManualHandle
        where
            F: FnMut() + 'static,
        {
            self.push(u64::from(millis.max(1)), Job::Every(millis, Box::new(callback)))
        }

        fn timeout<F>(&self, millis: u32, callback: F) -> ManualHandle
        where
            F: FnOnce() + 'static,
        {
            self.push(u64::from(millis), Job::Once(Box::new(callback)))
        }

        fn frames<F>(&self, callback: F) -> ManualHandle
        where
            F: FnMut() + 'static,
        {
            self.push(0, Job::Frame(Box::new(callback)))
        }
    }
}
