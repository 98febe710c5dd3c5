use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::components::particle_field::ParticleCanvas;
use crate::config::RIPPLE_MS;
use crate::timing::{BrowserScheduler, Scheduler, TimerHandle};

/// Where a click ripple sits inside its button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleSpot {
    pub id: u32,
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

impl RippleSpot {
    /// Sizes the ripple to cover the button and centers it on the click.
    /// `left`/`top` are the button's viewport offsets.
    pub fn at(id: u32, left: f64, top: f64, width: f64, height: f64, client_x: f64, client_y: f64) -> Self {
        let size = width.max(height);
        Self {
            id,
            size,
            x: client_x - left - size / 2.0,
            y: client_y - top - size / 2.0,
        }
    }

    fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {}px; top: {}px;",
            self.x,
            self.y,
            size = self.size
        )
    }
}

/// Ripples currently animating on the call-to-action.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ripples(Vec<RippleSpot>);

pub enum RippleAction {
    Spawn(RippleSpot),
    Expire(u32),
}

impl Reducible for Ripples {
    type Action = RippleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut spots = self.0.clone();
        match action {
            RippleAction::Spawn(spot) => spots.push(spot),
            RippleAction::Expire(id) => spots.retain(|spot| spot.id != id),
        }
        Rc::new(Self(spots))
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let ripples = use_reducer(Ripples::default);
    let next_id = use_mut_ref(|| 0u32);
    let timers = use_mut_ref(HashMap::<u32, TimerHandle>::new);

    // Pending ripple timers die with the section.
    {
        let timers = timers.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    let pending: Vec<TimerHandle> = timers.borrow_mut().drain().map(|(_, t)| t).collect();
                    drop(pending);
                }
            },
            (),
        );
    }

    let create_ripple = {
        let dispatcher = ripples.dispatcher();
        Callback::from(move |e: MouseEvent| {
            let Some(button) = e
                .current_target()
                .and_then(|target| target.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            let rect = button.get_bounding_client_rect();
            let id = {
                let mut next = next_id.borrow_mut();
                *next = next.wrapping_add(1);
                *next
            };
            dispatcher.dispatch(RippleAction::Spawn(RippleSpot::at(
                id,
                rect.left(),
                rect.top(),
                f64::from(button.offset_width()),
                f64::from(button.offset_height()),
                f64::from(e.client_x()),
                f64::from(e.client_y()),
            )));

            let expire = {
                let dispatcher = dispatcher.clone();
                let timers = timers.clone();
                move || {
                    dispatcher.dispatch(RippleAction::Expire(id));
                    let finished = timers.borrow_mut().remove(&id);
                    drop(finished);
                }
            };
            timers
                .borrow_mut()
                .insert(id, BrowserScheduler.timeout(RIPPLE_MS, expire));
        })
    };

    html! {
        <section id="home" class="hero">
            <ParticleCanvas />
            <div class="hero-overlay"></div>

            <div class="hero-content">
                <div class="hero-badge">
                    <span class="hero-badge-icon">{"✨"}</span>
                    <span>{"Next-Generation Technology"}</span>
                </div>
                <h1 class="hero-title">
                    {"Shape the Future of "}
                    <span class="hero-gradient">{"Connectivity"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Revolutionize global communication with our cutting-edge telecom solutions. "}
                    {"Experience the power of 5G, IoT, and AI-driven technology."}
                </p>

                <div class="hero-cta-group">
                    <button class="hero-cta" onclick={create_ripple}>
                        <span>{"Get Started"}</span>
                        <span class="hero-cta-arrow">{"→"}</span>
                        { for ripples.0.iter().map(|spot| html! {
                            <span key={spot.id} class="ripple" style={spot.style()}></span>
                        }) }
                    </button>
                    <button class="hero-secondary">
                        <span>{"▶"}</span>
                        <span>{"Watch Demo"}</span>
                    </button>
                </div>

                <div class="hero-float hero-float-left"></div>
                <div class="hero-float hero-float-right"></div>
            </div>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .hero-canvas {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        background: linear-gradient(135deg, #0f172a 0%, #1e293b 50%, #0f172a 100%);
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(135deg, rgba(30, 58, 138, 0.2), rgba(88, 28, 135, 0.2), rgba(22, 78, 99, 0.2));
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 80rem;
                        padding: 0 1rem;
                        text-align: center;
                        animation: hero-rise 0.8s ease-out;
                    }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        margin-bottom: 1.5rem;
                        border-radius: 9999px;
                        color: #93c5fd;
                        font-size: 0.875rem;
                        background: rgba(59, 130, 246, 0.2);
                        border: 1px solid rgba(59, 130, 246, 0.3);
                    }
                    .hero-title {
                        color: #fff;
                        font-size: clamp(2.25rem, 6vw, 4.5rem);
                        font-weight: 700;
                        line-height: 1.1;
                        margin-bottom: 1.5rem;
                    }
                    .hero-gradient {
                        background: linear-gradient(90deg, #60a5fa, #c084fc, #22d3ee, #60a5fa);
                        background-size: 200% auto;
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                        animation: hero-shimmer 3s linear infinite;
                    }
                    .hero-subtitle {
                        color: #d1d5db;
                        font-size: 1.25rem;
                        max-width: 48rem;
                        margin: 0 auto 2rem;
                        line-height: 1.6;
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                    }
                    .hero-cta, .hero-secondary {
                        position: relative;
                        overflow: hidden;
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        font-weight: 600;
                        color: #fff;
                        cursor: pointer;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .hero-cta {
                        border: none;
                        background: linear-gradient(90deg, #3b82f6, #9333ea);
                    }
                    .hero-cta:hover {
                        transform: scale(1.05);
                        box-shadow: 0 20px 40px rgba(59, 130, 246, 0.3);
                    }
                    .hero-secondary {
                        background: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                    }
                    .hero-secondary:hover {
                        transform: scale(1.05);
                        background: rgba(255, 255, 255, 0.2);
                    }
                    .ripple {
                        position: absolute;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.3);
                        transform: scale(0);
                        animation: ripple 0.6s linear;
                        pointer-events: none;
                    }
                    .hero-float {
                        position: absolute;
                        border-radius: 9999px;
                        filter: blur(24px);
                    }
                    .hero-float-left {
                        top: 5rem;
                        left: 2.5rem;
                        width: 4rem;
                        height: 4rem;
                        background: rgba(59, 130, 246, 0.2);
                        animation: hero-bob 4s ease-in-out infinite;
                    }
                    .hero-float-right {
                        bottom: 5rem;
                        right: 2.5rem;
                        width: 6rem;
                        height: 6rem;
                        background: rgba(168, 85, 247, 0.2);
                        animation: hero-bob 3s ease-in-out infinite reverse;
                    }
                    @keyframes ripple {
                        to { transform: scale(4); opacity: 0; }
                    }
                    @keyframes hero-rise {
                        from { opacity: 0; transform: translateY(30px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes hero-shimmer {
                        to { background-position: 200% center; }
                    }
                    @keyframes hero-bob {
                        0%, 100% { transform: translateY(-20px); }
                        50% { transform: translateY(20px); }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_is_centered_on_the_click() {
        let spot = RippleSpot::at(1, 100.0, 50.0, 160.0, 56.0, 180.0, 78.0);
        assert_eq!(spot.size, 160.0);
        assert_eq!((spot.x, spot.y), (0.0, -52.0));
    }

    #[test]
    fn ripple_uses_the_larger_dimension() {
        let spot = RippleSpot::at(2, 0.0, 0.0, 40.0, 90.0, 20.0, 45.0);
        assert_eq!(spot.size, 90.0);
        assert_eq!((spot.x, spot.y), (-25.0, 0.0));
    }

    #[test]
    fn expiring_removes_only_that_ripple() {
        let first = RippleSpot::at(1, 0.0, 0.0, 10.0, 10.0, 5.0, 5.0);
        let second = RippleSpot::at(2, 0.0, 0.0, 10.0, 10.0, 1.0, 1.0);
        let ripples = Rc::new(Ripples::default())
            .reduce(RippleAction::Spawn(first))
            .reduce(RippleAction::Spawn(second))
            .reduce(RippleAction::Expire(1));
        assert_eq!(ripples.0, vec![second]);
    }
}
