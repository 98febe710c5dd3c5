use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::SCROLL_TOP_VISIBLE_AT;

pub fn should_show(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_VISIBLE_AT
}

#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let (_, scroll_y) = use_window_scroll();

    if !should_show(scroll_y) {
        return html! {};
    }

    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    html! {
        <>
            <button class="scroll-top" {onclick} aria-label="Scroll to top">{"↑"}</button>
            <style>
                {r#"
                    .scroll-top {
                        position: fixed;
                        right: 2rem;
                        bottom: 2rem;
                        z-index: 40;
                        width: 3rem;
                        height: 3rem;
                        border: none;
                        border-radius: 9999px;
                        cursor: pointer;
                        color: #fff;
                        font-size: 1.25rem;
                        background: linear-gradient(90deg, #3b82f6, #9333ea);
                        box-shadow: 0 10px 15px rgba(59, 130, 246, 0.25);
                        transition: transform 0.2s ease;
                    }
                    .scroll-top:hover {
                        transform: scale(1.1);
                    }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_near_the_top() {
        assert!(!should_show(0.0));
        assert!(!should_show(SCROLL_TOP_VISIBLE_AT));
        assert!(should_show(SCROLL_TOP_VISIBLE_AT + 1.0));
    }
}
