use log::info;
use yew::prelude::*;

mod config;
mod theme;
mod timing;
mod components {
    pub mod cursor_glow;
    pub mod loader;
    pub mod navbar;
    pub mod particle_field;
    pub mod scroll_to_top;
}
mod pages {
    pub mod contact;
    pub mod features;
    pub mod hero;
    pub mod landing;
    pub mod showcase;
    pub mod stats;
    pub mod testimonials;
}

use components::cursor_glow::CursorGlow;
use components::loader::Loader;
use components::navbar::Navbar;
use components::scroll_to_top::ScrollToTop;
use pages::landing::Landing;
use theme::{apply_document_theme, LocalStorage, ThemeContext, ThemeController};

#[function_component(App)]
pub fn app() -> Html {
    let controller = use_mut_ref(|| ThemeController::load(LocalStorage));
    let dark = use_state(|| controller.borrow().is_dark());
    let is_loading = use_state(|| true);

    // Follow the controller for as long as the app is mounted.
    {
        let controller = controller.clone();
        let set_dark = dark.setter();
        use_effect_with_deps(
            move |_| {
                apply_document_theme(controller.borrow().is_dark());
                let subscription = controller.borrow_mut().subscribe(Callback::from(move |dark| {
                    apply_document_theme(dark);
                    set_dark.set(dark);
                }));
                move || controller.borrow_mut().unsubscribe(subscription)
            },
            (),
        );
    }

    let theme = ThemeContext {
        dark: *dark,
        toggle: {
            let controller = controller.clone();
            Callback::from(move |_| {
                controller.borrow_mut().toggle();
            })
        },
    };

    let on_loaded = {
        let is_loading = is_loading.clone();
        Callback::from(move |_| is_loading.set(false))
    };

    html! {
        <ContextProvider<ThemeContext> context={theme}>
            <div class="app-root">
                <CursorGlow />
                {
                    if *is_loading {
                        html! { <Loader on_complete={on_loaded} /> }
                    } else {
                        html! {
                            <>
                                <Navbar />
                                <Landing />
                                <ScrollToTop />
                            </>
                        }
                    }
                }
            </div>
            <style>
                {r#"
                    html {
                        scroll-behavior: smooth;
                    }
                    body {
                        margin: 0;
                        font-family: Inter, system-ui, -apple-system, sans-serif;
                    }
                    .app-root {
                        position: relative;
                        min-height: 100vh;
                        overflow: hidden;
                        background: #fff;
                        transition: background-color 0.3s ease;
                    }
                    .dark .app-root {
                        background: #111827;
                    }
                    .cursor-glow {
                        position: fixed;
                        top: 0;
                        left: 0;
                        z-index: 0;
                        border-radius: 50%;
                        pointer-events: none;
                        mix-blend-mode: overlay;
                        background: radial-gradient(circle, rgba(255, 255, 255, 0.08) 0%, transparent 80%);
                        transition: transform 0.05s ease-out;
                    }
                "#}
            </style>
        </ContextProvider<ThemeContext>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
