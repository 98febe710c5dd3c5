use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{PARTICLE_COUNT, PARTICLE_MAX_SPEED, PARTICLE_OPACITY, PARTICLE_RADIUS};
use crate::timing::{BrowserScheduler, Scheduler};

fn uniform(rng: &mut fastrand::Rng, (low, high): (f64, f64)) -> f64 {
    low + rng.f64() * (high - low)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub opacity: f64,
}

impl Particle {
    fn random(rng: &mut fastrand::Rng, width: f64, height: f64) -> Self {
        Self {
            x: rng.f64() * width,
            y: rng.f64() * height,
            vx: uniform(rng, (-PARTICLE_MAX_SPEED, PARTICLE_MAX_SPEED)),
            vy: uniform(rng, (-PARTICLE_MAX_SPEED, PARTICLE_MAX_SPEED)),
            radius: uniform(rng, PARTICLE_RADIUS),
            opacity: uniform(rng, PARTICLE_OPACITY),
        }
    }

    /// Moves by one frame, reflecting off the edges of `width` x `height`.
    fn advance(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
            self.x = self.x.clamp(0.0, width);
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
            self.y = self.y.clamp(0.0, height);
        }
    }

    pub fn fill_style(&self) -> String {
        format!("rgba(59, 130, 246, {})", self.opacity)
    }
}

/// Fixed set of drifting points behind the hero banner.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    pub fn new(rng: &mut fastrand::Rng, width: f64, height: f64) -> Self {
        let (width, height) = (width.max(0.0), height.max(0.0));
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::random(rng, width, height))
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    #[cfg(test)]
    pub fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> Self {
        Self {
            particles,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    pub fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Adopts new surface dimensions; particles keep their state and are
    /// pulled back in by the next step if they ended up outside.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
    }

    pub fn draw(&self, context: &CanvasRenderingContext2d) {
        context.clear_rect(0.0, 0.0, self.width, self.height);
        for particle in self.particles() {
            context.begin_path();
            if context
                .arc(particle.x, particle.y, particle.radius, 0.0, TAU)
                .is_err()
            {
                continue;
            }
            context.set_fill_style(&JsValue::from_str(&particle.fill_style()));
            context.fill();
        }
    }
}

fn canvas_context(canvas_ref: &NodeRef) -> Option<(HtmlCanvasElement, CanvasRenderingContext2d)> {
    let canvas = canvas_ref.cast::<HtmlCanvasElement>()?;
    let context = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;
    Some((canvas, context))
}

fn random_seed() -> u64 {
    (web_sys::js_sys::Math::random() * u64::MAX as f64) as u64
}

#[function_component(ParticleCanvas)]
pub fn particle_canvas() -> Html {
    let canvas_ref = use_node_ref();
    let field = use_mut_ref(|| None::<ParticleField>);
    let (width, height) = use_window_size();

    // Seed the field and start the frame loop once.
    {
        let canvas_ref = canvas_ref.clone();
        let field = field.clone();
        use_effect_with_deps(
            move |_| {
                let frames = match canvas_context(&canvas_ref) {
                    Some((canvas, context)) => {
                        canvas.set_width(width as u32);
                        canvas.set_height(height as u32);
                        let mut rng = fastrand::Rng::with_seed(random_seed());
                        *field.borrow_mut() = Some(ParticleField::new(&mut rng, width, height));

                        let field = field.clone();
                        Some(BrowserScheduler.frames(move || {
                            if let Some(field) = field.borrow_mut().as_mut() {
                                field.step();
                                field.draw(&context);
                            }
                        }))
                    }
                    None => {
                        log::warn!("Hero canvas has no 2d context, skipping particles");
                        None
                    }
                };
                move || drop(frames)
            },
            (),
        );
    }

    // Keep the drawing surface in sync with the viewport.
    {
        let canvas_ref = canvas_ref.clone();
        let field = field.clone();
        use_effect_with_deps(
            move |(width, height)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    canvas.set_width(*width as u32);
                    canvas.set_height(*height as u32);
                }
                if let Some(field) = field.borrow_mut().as_mut() {
                    field.resize(*width, *height);
                }
                || ()
            },
            (width, height),
        );
    }

    html! {
        <canvas ref={canvas_ref} class="hero-canvas" />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle {
            x,
            y,
            vx,
            vy,
            radius: 2.0,
            opacity: 0.5,
        }
    }

    #[test]
    fn new_field_respects_configured_ranges() {
        let mut rng = fastrand::Rng::with_seed(7);
        let field = ParticleField::new(&mut rng, 800.0, 600.0);

        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for p in field.particles() {
            assert!((0.0..=800.0).contains(&p.x));
            assert!((0.0..=600.0).contains(&p.y));
            assert!(p.vx.abs() <= PARTICLE_MAX_SPEED);
            assert!(p.vy.abs() <= PARTICLE_MAX_SPEED);
            assert!(p.radius >= PARTICLE_RADIUS.0 && p.radius < PARTICLE_RADIUS.1);
            assert!(p.opacity >= PARTICLE_OPACITY.0 && p.opacity < PARTICLE_OPACITY.1);
        }
    }

    #[test]
    fn particles_stay_inside_bounds_after_every_step() {
        let mut rng = fastrand::Rng::with_seed(42);
        let mut field = ParticleField::new(&mut rng, 320.0, 240.0);

        for _ in 0..20_000 {
            field.step();
            for p in field.particles() {
                assert!((0.0..=320.0).contains(&p.x), "x escaped: {}", p.x);
                assert!((0.0..=240.0).contains(&p.y), "y escaped: {}", p.y);
            }
        }
    }

    #[test]
    fn velocity_flips_only_when_an_edge_is_crossed() {
        let mut field = ParticleField::from_particles(
            vec![
                particle(0.1, 50.0, -0.2, 0.1),
                particle(50.0, 50.0, 0.2, -0.2),
                particle(99.9, 99.95, 0.2, 0.1),
            ],
            100.0,
            100.0,
        );

        field.step();
        let [left, middle, corner] = field.particles() else {
            panic!("expected three particles");
        };

        assert_eq!((left.vx, left.vy), (0.2, 0.1));
        assert_eq!(left.x, 0.0);

        assert_eq!((middle.vx, middle.vy), (0.2, -0.2));

        assert_eq!((corner.vx, corner.vy), (-0.2, -0.1));
        assert_eq!((corner.x, corner.y), (100.0, 100.0));
    }

    #[test]
    fn reflected_particle_heads_back_inside() {
        let mut field =
            ParticleField::from_particles(vec![particle(0.1, 10.0, -0.2, 0.0)], 100.0, 100.0);
        field.step();
        field.step();
        let p = field.particles()[0];
        assert!((p.x - 0.2).abs() < 1e-9);
        assert_eq!(p.vx, 0.2);
    }

    #[test]
    fn resize_keeps_particle_state() {
        let mut rng = fastrand::Rng::with_seed(3);
        let mut field = ParticleField::new(&mut rng, 1000.0, 800.0);
        let before = field.particles().to_vec();

        field.resize(400.0, 300.0);

        assert_eq!(field.particles(), before.as_slice());
        assert_eq!(field.bounds(), (400.0, 300.0));
    }

    #[test]
    fn shrinking_pulls_stragglers_back_within_one_step() {
        let mut field =
            ParticleField::from_particles(vec![particle(900.0, 700.0, -0.1, 0.1)], 1000.0, 800.0);
        field.resize(400.0, 300.0);
        field.step();

        let p = field.particles()[0];
        assert_eq!((p.x, p.y), (400.0, 300.0));
    }

    #[test]
    fn fill_style_uses_particle_opacity() {
        assert_eq!(
            particle(0.0, 0.0, 0.0, 0.0).fill_style(),
            "rgba(59, 130, 246, 0.5)"
        );
    }
}
