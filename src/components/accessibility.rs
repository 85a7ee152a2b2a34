//! Accessibility widget: base font size, reduced motion and high
//! contrast. Settings apply to the document root and persist across
//! visits.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::prefs::{AccessibilitySettings, ACCESSIBILITY_KEY, FONT_SIZE_MAX, FONT_SIZE_MIN};
use crate::storage;

fn apply(settings: &AccessibilitySettings) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Some(element) = root.dyn_ref::<HtmlElement>() {
        if element
            .style()
            .set_property("font-size", &format!("{}%", settings.font_size))
            .is_err()
        {
            log::warn!("could not apply the font size setting");
        }
    }
    let classes = root.class_list();
    let _ = if settings.reduced_motion {
        classes.add_1("reduce-motion")
    } else {
        classes.remove_1("reduce-motion")
    };
    let _ = if settings.high_contrast {
        classes.add_1("high-contrast")
    } else {
        classes.remove_1("high-contrast")
    };
}

#[function_component(AccessibilityWidget)]
pub fn accessibility_widget() -> Html {
    let open = use_state(|| false);
    let settings = use_state(|| {
        storage::load_json::<AccessibilitySettings>(ACCESSIBILITY_KEY).unwrap_or_default()
    });

    {
        let settings = *settings;
        use_effect_with_deps(
            move |current| {
                apply(current);
                storage::save_json(ACCESSIBILITY_KEY, current);
                || ()
            },
            settings,
        );
    }

    let toggle_open = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };
    let increase = {
        let settings = settings.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *settings;
            next.increase_font();
            settings.set(next);
        })
    };
    let decrease = {
        let settings = settings.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *settings;
            next.decrease_font();
            settings.set(next);
        })
    };
    let toggle_motion = {
        let settings = settings.clone();
        Callback::from(move |_: MouseEvent| {
            settings.set(AccessibilitySettings {
                reduced_motion: !settings.reduced_motion,
                ..*settings
            })
        })
    };
    let toggle_contrast = {
        let settings = settings.clone();
        Callback::from(move |_: MouseEvent| {
            settings.set(AccessibilitySettings {
                high_contrast: !settings.high_contrast,
                ..*settings
            })
        })
    };
    let reset = {
        let settings = settings.clone();
        Callback::from(move |_: MouseEvent| settings.set(AccessibilitySettings::default()))
    };

    html! {
        <div class="a11y-widget">
            if *open {
                <div class="a11y-panel" role="region" aria-label="Opciones de accesibilidad">
                    <div class="a11y-row">
                        <span>{"Tamaño de texto"}</span>
                        <div class="a11y-font-controls">
                            <button
                                onclick={decrease}
                                disabled={settings.font_size == FONT_SIZE_MIN}
                                aria-label="Reducir texto"
                            >{"A−"}</button>
                            <span>{ format!("{}%", settings.font_size) }</span>
                            <button
                                onclick={increase}
                                disabled={settings.font_size == FONT_SIZE_MAX}
                                aria-label="Aumentar texto"
                            >{"A+"}</button>
                        </div>
                    </div>
                    <label class="a11y-row">
                        <span>{"Reducir animaciones"}</span>
                        <input
                            type="checkbox"
                            checked={settings.reduced_motion}
                            onclick={toggle_motion}
                        />
                    </label>
                    <label class="a11y-row">
                        <span>{"Alto contraste"}</span>
                        <input
                            type="checkbox"
                            checked={settings.high_contrast}
                            onclick={toggle_contrast}
                        />
                    </label>
                    <button class="a11y-reset" onclick={reset}>{"Restablecer"}</button>
                </div>
            }
            <button class="a11y-fab" onclick={toggle_open} aria-label="Accesibilidad">
                {"♿"}
            </button>
            <style>{r#"
                .a11y-widget {
                    position: fixed;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 90;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.6rem;
                }

                .a11y-fab {
                    width: 2.8rem;
                    height: 2.8rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 50%;
                    background: rgba(30, 30, 30, 0.9);
                    color: #fff;
                    cursor: pointer;
                    backdrop-filter: blur(10px);
                }

                .a11y-panel {
                    width: 240px;
                    padding: 1rem;
                    border: 1px solid rgba(245, 158, 11, 0.25);
                    border-radius: 14px;
                    background: rgba(20, 20, 20, 0.97);
                    color: #CCC;
                    font-size: 0.85rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.7rem;
                }

                .a11y-row {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 0.6rem;
                }

                .a11y-row input {
                    accent-color: #F59E0B;
                }

                .a11y-font-controls {
                    display: flex;
                    align-items: center;
                    gap: 0.4rem;
                }

                .a11y-font-controls button {
                    padding: 0.2rem 0.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 6px;
                    background: transparent;
                    color: #fff;
                    cursor: pointer;
                }

                .a11y-font-controls button:disabled {
                    opacity: 0.35;
                    cursor: default;
                }

                .a11y-reset {
                    border: none;
                    background: none;
                    color: #F59E0B;
                    cursor: pointer;
                    text-decoration: underline;
                    align-self: flex-start;
                    padding: 0;
                }
            "#}</style>
        </div>
    }
}
