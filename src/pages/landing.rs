use yew::prelude::*;

use crate::pages::contact::Contact;
use crate::pages::features::Features;
use crate::pages::hero::Hero;
use crate::pages::showcase::Showcase;
use crate::pages::stats::Stats;
use crate::pages::testimonials::Testimonials;

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <main class="landing">
            <Hero />
            <Features />
            <Stats />
            <Testimonials />
            <Showcase />
            <Contact />
            <style>
                {r#"
                    .landing {
                        position: relative;
                        z-index: 10;
                    }
                    .section-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .section-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-header h2 {
                        font-size: clamp(1.875rem, 4vw, 3rem);
                        font-weight: 700;
                        color: #111827;
                        margin-bottom: 1rem;
                    }
                    .section-header p {
                        font-size: 1.25rem;
                        color: #4b5563;
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .dark .section-header h2 {
                        color: #fff;
                    }
                    .dark .section-header p {
                        color: #d1d5db;
                    }
                "#}
            </style>
        </main>
    }
}
