use yew::prelude::*;

use crate::config::{LOADER_SETTLE_MS, LOADER_STEP, LOADER_TICK_MS};
use crate::timing::{BrowserScheduler, Scheduler, Slot};

/// Progress counter for the loading screen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LoaderSequencer {
    progress: u8,
}

impl LoaderSequencer {
    #[cfg(test)]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_full(&self) -> bool {
        self.progress >= 100
    }

    /// Advances one tick. Returns the new progress, or `None` once full.
    pub fn tick(&mut self) -> Option<u8> {
        if self.is_full() {
            return None;
        }
        self.progress = self.progress.saturating_add(LOADER_STEP).min(100);
        Some(self.progress)
    }
}

/// A running loading sequence. Dropping it cancels whatever is still pending,
/// including the completion callback.
pub struct LoaderRun<S: Scheduler> {
    ticker: Slot<S::Handle>,
    settle: Slot<S::Handle>,
}

impl<S: Scheduler> LoaderRun<S> {
    pub fn start(scheduler: &S, on_progress: Callback<u8>, on_complete: Callback<()>) -> Self {
        let ticker = Slot::new();
        let settle = Slot::new();

        let tick = {
            let ticker = ticker.clone();
            let settle = settle.clone();
            let scheduler = scheduler.clone();
            let mut sequencer = LoaderSequencer::default();
            move || {
                let Some(progress) = sequencer.tick() else {
                    return;
                };
                on_progress.emit(progress);
                if sequencer.is_full() {
                    let on_complete = on_complete.clone();
                    settle.fill(scheduler.timeout(LOADER_SETTLE_MS, move || {
                        log::info!("Loading finished");
                        on_complete.emit(());
                    }));
                    // Stop ticking last; this drops the closure we are running in.
                    ticker.clear();
                }
            }
        };
        ticker.fill(scheduler.interval(LOADER_TICK_MS, tick));

        Self { ticker, settle }
    }

    #[cfg(test)]
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_filled()
    }
}

impl<S: Scheduler> Drop for LoaderRun<S> {
    fn drop(&mut self) {
        // The tick closure holds these slots too; clearing breaks the cycle.
        self.ticker.clear();
        self.settle.clear();
    }
}

#[derive(Properties, PartialEq)]
pub struct LoaderProps {
    pub on_complete: Callback<()>,
}

#[function_component(Loader)]
pub fn loader(props: &LoaderProps) -> Html {
    let progress = use_state(|| 0u8);

    {
        let set_progress = progress.setter();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |_| {
                let on_progress = Callback::from(move |value| set_progress.set(value));
                let run = LoaderRun::start(&BrowserScheduler, on_progress, on_complete);
                move || drop(run)
            },
            (),
        );
    }

    html! {
        <div class="loader-screen">
            <div class="loader-content">
                <div class="loader-icon">{"⚡"}</div>
                <h2 class="loader-title">{"Initializing Future Tech"}</h2>
                <div class="loader-track">
                    <div class="loader-bar" style={format!("width: {}%;", *progress)}></div>
                </div>
                <p class="loader-percent">{format!("{}%", *progress)}</p>
            </div>
            <style>
                {r#"
                    .loader-screen {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(135deg, #111827 0%, #1e3a8a 50%, #581c87 100%);
                    }
                    .loader-content {
                        text-align: center;
                    }
                    .loader-icon {
                        font-size: 4rem;
                        margin-bottom: 2rem;
                        animation: loader-spin 2s linear infinite;
                    }
                    .loader-title {
                        color: #fff;
                        font-size: 1.5rem;
                        margin-bottom: 1.5rem;
                        animation: loader-rise 0.5s ease-out 0.5s both;
                    }
                    .loader-track {
                        width: 16rem;
                        height: 0.5rem;
                        background: #374151;
                        border-radius: 9999px;
                        overflow: hidden;
                    }
                    .loader-bar {
                        height: 100%;
                        background: linear-gradient(90deg, #60a5fa, #c084fc);
                        transition: width 0.1s linear;
                    }
                    .loader-percent {
                        color: #93c5fd;
                        margin-top: 1rem;
                        font-size: 0.875rem;
                    }
                    @keyframes loader-spin {
                        to { transform: rotate(360deg); }
                    }
                    @keyframes loader-rise {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::manual::ManualScheduler;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct Harness {
        scheduler: ManualScheduler,
        progress: Rc<RefCell<Vec<u8>>>,
        completions: Rc<Cell<u32>>,
        run: LoaderRun<ManualScheduler>,
    }

    fn start() -> Harness {
        let scheduler = ManualScheduler::new();
        let progress = Rc::new(RefCell::new(Vec::new()));
        let completions = Rc::new(Cell::new(0));
        let on_progress = {
            let progress = progress.clone();
            Callback::from(move |value| progress.borrow_mut().push(value))
        };
        let on_complete = {
            let completions = completions.clone();
            Callback::from(move |_| completions.set(completions.get() + 1))
        };
        let run = LoaderRun::start(&scheduler, on_progress, on_complete);
        Harness {
            scheduler,
            progress,
            completions,
            run,
        }
    }

    #[test]
    fn sequencer_reaches_full_after_fifty_ticks() {
        let mut sequencer = LoaderSequencer::default();
        for _ in 0..49 {
            sequencer.tick();
        }
        assert_eq!(sequencer.progress(), 98);
        assert_eq!(sequencer.tick(), Some(100));
        assert!(sequencer.is_full());
        assert_eq!(sequencer.tick(), None);
        assert_eq!(sequencer.progress(), 100);
    }

    #[test]
    fn progress_is_bounded_and_non_decreasing() {
        let harness = start();
        harness.scheduler.advance(10_000);

        let progress = harness.progress.borrow();
        assert_eq!(progress.len(), 50);
        assert!(progress.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(progress.iter().all(|value| *value <= 100));
        assert_eq!(progress.last(), Some(&100));
    }

    #[test]
    fn completion_fires_once_after_settle_delay() {
        let harness = start();

        harness.scheduler.advance(2_499);
        assert_eq!(harness.progress.borrow().last(), Some(&98));

        harness.scheduler.advance(1);
        assert_eq!(harness.progress.borrow().last(), Some(&100));
        assert!(!harness.run.is_ticking());
        assert_eq!(harness.completions.get(), 0);

        harness.scheduler.advance(499);
        assert_eq!(harness.completions.get(), 0);

        harness.scheduler.advance(1);
        assert_eq!(harness.completions.get(), 1);

        harness.scheduler.advance(60_000);
        assert_eq!(harness.completions.get(), 1);
        assert_eq!(harness.scheduler.pending(), 0);
    }

    #[test]
    fn teardown_before_completion_cancels_everything() {
        let harness = start();
        harness.scheduler.advance(1_000);
        assert_eq!(harness.progress.borrow().last(), Some(&40));

        let Harness {
            scheduler,
            progress,
            completions,
            run,
        } = harness;
        drop(run);

        scheduler.advance(10_000);
        assert_eq!(progress.borrow().last(), Some(&40));
        assert_eq!(completions.get(), 0);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn teardown_during_settle_suppresses_completion() {
        let harness = start();
        harness.scheduler.advance(2_700);

        let Harness {
            scheduler,
            completions,
            run,
            ..
        } = harness;
        drop(run);

        scheduler.advance(1_000);
        assert_eq!(completions.get(), 0);
    }
}
