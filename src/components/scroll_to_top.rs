//! Back-to-top button with a ring that fills as the page is read.
//! Appears once the viewport has scrolled past 400px.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

const VISIBLE_AFTER_PX: f64 = 400.0;
const RING_RADIUS: f64 = 15.0;

#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let visible = use_state_eq(|| false);
    let read_fraction = use_state_eq(|| 0.0f64);

    {
        let visible = visible.clone();
        let read_fraction = read_fraction.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let root = document.document_element().unwrap();
                    let scroll_top = f64::from(root.scroll_top());
                    let max = f64::from(root.scroll_height() - root.client_height());
                    visible.set(scroll_top > VISIBLE_AFTER_PX);
                    read_fraction.set(if max > 0.0 {
                        (scroll_top / max).clamp(0.0, 1.0)
                    } else {
                        0.0
                    });
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let mut options = ScrollToOptions::new();
            options.top(0.0).behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    if !*visible {
        return html! {};
    }

    let circumference = 2.0 * std::f64::consts::PI * RING_RADIUS;
    let dash_offset = circumference * (1.0 - *read_fraction);

    html! {
        <button class="scroll-top" {onclick} aria-label="Volver arriba">
            <svg viewBox="0 0 36 36" class="scroll-top-ring">
                <circle cx="18" cy="18" r={RING_RADIUS.to_string()} class="ring-track" />
                <circle
                    cx="18"
                    cy="18"
                    r={RING_RADIUS.to_string()}
                    class="ring-fill"
                    stroke-dasharray={format!("{circumference:.2}")}
                    stroke-dashoffset={format!("{dash_offset:.2}")}
                />
            </svg>
            <span class="scroll-top-arrow">{"↑"}</span>
            <style>{r#"
                .scroll-top {
                    position: fixed;
                    bottom: 10rem;
                    right: 2rem;
                    z-index: 90;
                    width: 3rem;
                    height: 3rem;
                    border: none;
                    border-radius: 50%;
                    background: rgba(30, 30, 30, 0.9);
                    cursor: pointer;
                    backdrop-filter: blur(10px);
                }

                .scroll-top-ring {
                    position: absolute;
                    inset: 0;
                    transform: rotate(-90deg);
                }

                .ring-track {
                    fill: none;
                    stroke: rgba(255, 255, 255, 0.12);
                    stroke-width: 2;
                }

                .ring-fill {
                    fill: none;
                    stroke: #F59E0B;
                    stroke-width: 2;
                    stroke-linecap: round;
                }

                .scroll-top-arrow {
                    color: #F59E0B;
                    font-size: 1rem;
                }
            "#}</style>
        </button>
    }
}
