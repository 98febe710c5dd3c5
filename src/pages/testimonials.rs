use std::rc::Rc;

use yew::prelude::*;

use crate::config::CAROUSEL_INTERVAL_MS;
use crate::timing::{BrowserScheduler, Scheduler};

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub image: &'static str,
    pub content: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Sarah Chen",
        role: "CTO",
        company: "TechGlobal Inc.",
        image: "https://images.pexels.com/photos/3785079/pexels-photo-3785079.jpeg?auto=compress&cs=tinysrgb&w=400",
        content: "The 5G infrastructure solutions have transformed our operations. We've seen a 300% increase in network efficiency and our customers are experiencing unprecedented connectivity speeds.",
        rating: 5,
    },
    Testimonial {
        name: "Marcus Rodriguez",
        role: "Head of Innovation",
        company: "ConnectCorp",
        image: "https://images.pexels.com/photos/3778876/pexels-photo-3778876.jpeg?auto=compress&cs=tinysrgb&w=400",
        content: "Their IoT platform has enabled us to connect over 50,000 devices seamlessly. The real-time analytics and AI-driven insights have given us a competitive edge in the market.",
        rating: 5,
    },
    Testimonial {
        name: "Dr. Emily Watson",
        role: "Tech Lead",
        company: "FutureNetworks",
        image: "https://images.pexels.com/photos/3785077/pexels-photo-3785077.jpeg?auto=compress&cs=tinysrgb&w=400",
        content: "The security and reliability of their quantum communication protocols are unmatched. We've successfully deployed secure networks across 15 countries with zero security incidents.",
        rating: 5,
    },
    Testimonial {
        name: "James Park",
        role: "VP of Engineering",
        company: "SmartCity Solutions",
        image: "https://images.pexels.com/photos/3778603/pexels-photo-3778603.jpeg?auto=compress&cs=tinysrgb&w=400",
        content: "Their edge computing solutions have reduced our latency by 90% and enabled real-time processing for our smart city initiatives. Absolutely game-changing technology.",
        rating: 5,
    },
];

/// Position in a fixed, non-empty ring of slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

pub enum CarouselAction {
    /// Timer-driven advance.
    Tick,
    Next,
    Previous,
    Select(usize),
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "carousel needs at least one slide");
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    fn apply(self, action: CarouselAction) -> Self {
        let index = match action {
            CarouselAction::Tick | CarouselAction::Next => (self.index + 1) % self.len,
            CarouselAction::Previous => (self.index + self.len - 1) % self.len,
            CarouselAction::Select(index) => index % self.len,
        };
        Self { index, ..self }
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Starts the recurring advance. Manual navigation does not restart it.
pub fn autoplay<S: Scheduler>(scheduler: &S, dispatch: Callback<CarouselAction>) -> S::Handle {
    scheduler.interval(CAROUSEL_INTERVAL_MS, move || dispatch.emit(CarouselAction::Tick))
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let carousel = use_reducer(|| Carousel::new(TESTIMONIALS.len()));

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |_| {
                let timer = autoplay(
                    &BrowserScheduler,
                    Callback::from(move |action| dispatcher.dispatch(action)),
                );
                move || drop(timer)
            },
            (),
        );
    }

    let on_action = |make: fn() -> CarouselAction| {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(make()))
    };
    let prev = on_action(|| CarouselAction::Previous);
    let next = on_action(|| CarouselAction::Next);

    let current = &TESTIMONIALS[carousel.index()];

    html! {
        <section id="testimonials" class="testimonials-section">
            <div class="testimonials-inner">
                <div class="section-header">
                    <h2>{"What Our Clients Say"}</h2>
                    <p>{"Trusted by industry leaders worldwide"}</p>
                </div>

                <div class="testimonial-stage">
                    <div class="testimonial-card" key={carousel.index()}>
                        <div class="testimonial-quote">{"❝"}</div>
                        <div class="testimonial-body">
                            <img class="testimonial-avatar" src={current.image} alt={current.name} />
                            <div>
                                <div class="testimonial-stars">
                                    { for (0..current.rating).map(|_| html! { <span>{"★"}</span> }) }
                                </div>
                                <blockquote>{format!("\"{}\"", current.content)}</blockquote>
                                <div class="testimonial-name">{current.name}</div>
                                <div class="testimonial-role">{current.role}</div>
                                <div class="testimonial-company">{current.company}</div>
                            </div>
                        </div>
                    </div>

                    <button class="carousel-arrow carousel-prev" onclick={prev} aria-label="Previous testimonial">{"‹"}</button>
                    <button class="carousel-arrow carousel-next" onclick={next} aria-label="Next testimonial">{"›"}</button>
                </div>

                <div class="carousel-dots">
                    { for (0..TESTIMONIALS.len()).map(|index| {
                        let dispatcher = carousel.dispatcher();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            dispatcher.dispatch(CarouselAction::Select(index))
                        });
                        html! {
                            <button
                                class={classes!("carousel-dot", (carousel.index() == index).then(|| "active"))}
                                {onclick}
                                aria-label={format!("Show testimonial {}", index + 1)}
                            ></button>
                        }
                    }) }
                </div>

                <div class="company-logos">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <div class="company-logo">{t.company}</div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .testimonials-section {
                        padding: 5rem 0;
                        background: linear-gradient(135deg, #eff6ff, #faf5ff);
                    }
                    .dark .testimonials-section {
                        background: linear-gradient(135deg, #111827, #1f2937);
                    }
                    .testimonials-inner {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .testimonial-stage {
                        position: relative;
                    }
                    .testimonial-card {
                        position: relative;
                        padding: 3rem;
                        border-radius: 1.5rem;
                        background: #fff;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                        animation: testimonial-in 0.5s ease-out;
                    }
                    .dark .testimonial-card {
                        background: #1f2937;
                    }
                    .testimonial-quote {
                        position: absolute;
                        top: 1.5rem;
                        left: 1.5rem;
                        font-size: 4rem;
                        line-height: 1;
                        color: rgba(59, 130, 246, 0.2);
                    }
                    .testimonial-body {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        gap: 2rem;
                    }
                    .testimonial-avatar {
                        width: 8rem;
                        height: 8rem;
                        border-radius: 9999px;
                        object-fit: cover;
                        border: 4px solid #bfdbfe;
                    }
                    .testimonial-stars {
                        color: #facc15;
                        margin-bottom: 1rem;
                    }
                    .testimonial-body blockquote {
                        margin: 0 0 1.5rem;
                        font-size: 1.25rem;
                        font-style: italic;
                        line-height: 1.6;
                        color: #374151;
                    }
                    .dark .testimonial-body blockquote {
                        color: #d1d5db;
                    }
                    .testimonial-name {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #111827;
                    }
                    .dark .testimonial-name {
                        color: #fff;
                    }
                    .testimonial-role {
                        color: #2563eb;
                        font-weight: 500;
                    }
                    .testimonial-company {
                        color: #6b7280;
                    }
                    .carousel-arrow {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        width: 3rem;
                        height: 3rem;
                        border: none;
                        border-radius: 9999px;
                        background: #fff;
                        font-size: 1.5rem;
                        cursor: pointer;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .dark .carousel-arrow {
                        background: #374151;
                        color: #fff;
                    }
                    .carousel-prev {
                        left: -1.5rem;
                    }
                    .carousel-next {
                        right: -1.5rem;
                    }
                    .carousel-dots {
                        display: flex;
                        justify-content: center;
                        gap: 0.75rem;
                        margin-top: 2rem;
                    }
                    .carousel-dot {
                        width: 0.75rem;
                        height: 0.75rem;
                        padding: 0;
                        border: none;
                        border-radius: 9999px;
                        background: #d1d5db;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .carousel-dot.active {
                        width: 2rem;
                        background: linear-gradient(90deg, #3b82f6, #9333ea);
                    }
                    .company-logos {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 2rem;
                        margin-top: 4rem;
                        opacity: 0.6;
                    }
                    .company-logo {
                        font-size: 1.125rem;
                        font-weight: 600;
                        color: #6b7280;
                    }
                    @keyframes testimonial-in {
                        from { opacity: 0; transform: translateX(50px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::timing::manual::ManualScheduler;

    struct Harness {
        state: Rc<RefCell<Rc<Carousel>>>,
    }

    impl Harness {
        fn new(len: usize) -> Self {
            Self {
                state: Rc::new(RefCell::new(Rc::new(Carousel::new(len)))),
            }
        }

        fn dispatcher(&self) -> Callback<CarouselAction> {
            let state = self.state.clone();
            Callback::from(move |action| {
                let current = state.borrow().clone();
                *state.borrow_mut() = current.reduce(action);
            })
        }

        fn index(&self) -> usize {
            self.state.borrow().index()
        }
    }

    #[test]
    fn n_nexts_return_to_the_start() {
        let harness = Harness::new(TESTIMONIALS.len());
        let dispatch = harness.dispatcher();
        for _ in 0..TESTIMONIALS.len() {
            dispatch.emit(CarouselAction::Next);
        }
        assert_eq!(harness.index(), 0);
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let carousel = Carousel::new(4).apply(CarouselAction::Previous);
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn select_jumps_and_stays_in_range() {
        let carousel = Carousel::new(4).apply(CarouselAction::Select(2));
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.apply(CarouselAction::Select(9)).index(), 1);
    }

    #[test]
    fn single_slide_never_moves() {
        let carousel = Carousel::new(1)
            .apply(CarouselAction::Next)
            .apply(CarouselAction::Previous);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn timer_advances_every_interval() {
        let scheduler = ManualScheduler::new();
        let harness = Harness::new(4);
        let _timer = autoplay(&scheduler, harness.dispatcher());

        scheduler.advance(u64::from(CAROUSEL_INTERVAL_MS) - 1);
        assert_eq!(harness.index(), 0);
        scheduler.advance(1);
        assert_eq!(harness.index(), 1);
        scheduler.advance(u64::from(CAROUSEL_INTERVAL_MS) * 3);
        assert_eq!(harness.index(), 0);
    }

    #[test]
    fn manual_navigation_does_not_reset_the_timer() {
        let scheduler = ManualScheduler::new();
        let harness = Harness::new(4);
        let dispatch = harness.dispatcher();
        let _timer = autoplay(&scheduler, dispatch.clone());

        scheduler.advance(4000);
        dispatch.emit(CarouselAction::Next);
        assert_eq!(harness.index(), 1);

        // The tick still lands on the initial 5000 ms cadence.
        scheduler.advance(1000);
        assert_eq!(harness.index(), 2);
    }

    #[test]
    fn teardown_stops_the_timer() {
        let scheduler = ManualScheduler::new();
        let harness = Harness::new(4);
        let timer = autoplay(&scheduler, harness.dispatcher());

        scheduler.advance(u64::from(CAROUSEL_INTERVAL_MS));
        drop(timer);
        scheduler.advance(u64::from(CAROUSEL_INTERVAL_MS) * 10);

        assert_eq!(harness.index(), 1);
        assert_eq!(scheduler.pending(), 0);
    }
}
