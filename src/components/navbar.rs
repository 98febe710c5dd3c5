use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::NAV_SCROLLED_AT;
use crate::theme::ThemeContext;

pub const NAV_ITEMS: [&str; 5] = ["Home", "Features", "Solutions", "Testimonials", "Contact"];

/// Sections are addressed by their lower-cased nav label.
pub fn section_id(label: &str) -> String {
    label.to_lowercase()
}

pub fn scroll_to_section(id: &str) {
    let Some(section) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::debug!("No section with id {}", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let theme = use_context::<ThemeContext>();
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > NAV_SCROLLED_AT;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = {
        let menu_open = menu_open.clone();
        move |label: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |_: MouseEvent| {
                scroll_to_section(&section_id(label));
                menu_open.set(false);
            })
        }
    };

    let (dark, toggle_theme) = match theme {
        Some(ThemeContext { dark, toggle }) => (dark, toggle.reform(|_: MouseEvent| ())),
        None => (false, Callback::noop()),
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="nav-logo">
                    <span class="nav-logo-icon">{"⚡"}</span>
                    <span class="nav-logo-text">{"TechComm 2025"}</span>
                </div>

                <div class="nav-links">
                    { for NAV_ITEMS.iter().map(|label| html! {
                        <button class="nav-link" onclick={go_to(*label)}>{*label}</button>
                    }) }
                </div>

                <div class="nav-actions">
                    <button class="theme-toggle" onclick={toggle_theme} aria-label="Toggle dark mode">
                        { if dark { "☀️" } else { "🌙" } }
                    </button>
                    <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for NAV_ITEMS.iter().map(|label| html! {
                                <button class="mobile-link" onclick={go_to(*label)}>{*label}</button>
                            }) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 40;
                        background: transparent;
                        transition: all 0.3s ease;
                        animation: nav-drop 0.5s ease-out;
                    }
                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .dark .top-nav.scrolled {
                        background: rgba(17, 24, 39, 0.9);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                        height: 4rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-weight: 700;
                        font-size: 1.25rem;
                        color: #111827;
                    }
                    .dark .nav-logo, .top-nav:not(.scrolled) .nav-logo {
                        color: #fff;
                    }
                    .nav-links {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link, .mobile-link {
                        background: none;
                        border: none;
                        cursor: pointer;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #374151;
                        transition: color 0.2s ease, transform 0.2s ease;
                    }
                    .dark .nav-link, .dark .mobile-link, .top-nav:not(.scrolled) .nav-link {
                        color: #d1d5db;
                    }
                    .nav-link:hover, .mobile-link:hover {
                        color: #3b82f6;
                        transform: scale(1.1);
                    }
                    .nav-actions {
                        display: flex;
                        gap: 1rem;
                    }
                    .theme-toggle, .burger-menu {
                        padding: 0.5rem;
                        border-radius: 0.5rem;
                        border: none;
                        cursor: pointer;
                        background: #f3f4f6;
                    }
                    .dark .theme-toggle, .dark .burger-menu {
                        background: #1f2937;
                        color: #d1d5db;
                    }
                    .burger-menu {
                        display: none;
                    }
                    .mobile-menu {
                        margin: 0.5rem 1rem;
                        padding: 0.5rem;
                        border-radius: 0.5rem;
                        background: #fff;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .dark .mobile-menu {
                        background: #1f2937;
                    }
                    .mobile-link {
                        display: block;
                        width: 100%;
                        text-align: left;
                        padding: 0.5rem 0.75rem;
                    }
                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                    }
                    @keyframes nav-drop {
                        from { transform: translateY(-100px); }
                        to { transform: translateY(0); }
                    }
                "#}
            </style>
        </nav>
    }
}
