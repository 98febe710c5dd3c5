use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::config::CURSOR_GLOW_SIZE;

/// CSS transform that centers an element of `size` px on the pointer.
pub fn follow_transform(client_x: f64, client_y: f64, size: f64) -> String {
    let half = size / 2.0;
    format!("translate({}px, {}px)", client_x - half, client_y - half)
}

/// Soft radial glow that trails the pointer across the whole page.
#[function_component(CursorGlow)]
pub fn cursor_glow() -> Html {
    let glow_ref = use_node_ref();

    {
        let glow_ref = glow_ref.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
                    if let Some(glow) = glow_ref.cast::<HtmlElement>() {
                        let transform = follow_transform(
                            f64::from(event.client_x()),
                            f64::from(event.client_y()),
                            CURSOR_GLOW_SIZE,
                        );
                        let _ = glow.style().set_property("transform", &transform);
                    }
                }) as Box<dyn FnMut(MouseEvent)>);

                if let Some(window) = &window {
                    if window
                        .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
                        .is_err()
                    {
                        log::warn!("Could not subscribe to pointer movement");
                    }
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "mousemove",
                            on_move.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <div
            ref={glow_ref}
            class="cursor-glow"
            style={format!("width: {size}px; height: {size}px;", size = CURSOR_GLOW_SIZE)}
        ></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glow_is_centered_on_the_pointer() {
        assert_eq!(follow_transform(300.0, 150.0, 200.0), "translate(200px, 50px)");
    }

    #[test]
    fn pointer_near_origin_yields_negative_offset() {
        assert_eq!(follow_transform(0.0, 10.0, 200.0), "translate(-100px, -90px)");
    }

    #[test]
    fn fractional_sizes_keep_precision() {
        assert_eq!(follow_transform(10.0, 10.0, 5.0), "translate(7.5px, 7.5px)");
    }
}
