use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 20);
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

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <a href="#inicio" class="nav-logo" onclick={close_menu.clone()}>
                    <span class="nav-logo-mark">{"◉"}</span>
                    { config::SITE_NAME }
                </a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Abrir menú">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for config::NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link" onclick={close_menu.clone()}>
                            { *label }
                        </a>
                    }) }
                    <a href="#cta" class="nav-cta" onclick={close_menu.clone()}>
                        {"Reservar"}
                    </a>
                </div>
            </div>
            <style>{r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    background: transparent;
                    transition: all 0.3s ease;
                }

                .top-nav.scrolled {
                    background: rgba(18, 18, 18, 0.92);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(245, 158, 11, 0.12);
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #fff;
                    font-size: 1.25rem;
                    font-weight: 700;
                    text-decoration: none;
                }

                .nav-logo-mark {
                    color: #F59E0B;
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }

                .nav-link {
                    color: #CCC;
                    text-decoration: none;
                    font-size: 0.9rem;
                    transition: color 0.2s ease;
                }

                .nav-link:hover {
                    color: #F59E0B;
                }

                .nav-cta {
                    padding: 0.5rem 1.2rem;
                    border-radius: 999px;
                    background: #F59E0B;
                    color: #1a1a1a;
                    font-weight: 600;
                    font-size: 0.9rem;
                    text-decoration: none;
                    transition: transform 0.2s ease;
                }

                .nav-cta:hover {
                    transform: translateY(-1px);
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 4px;
                }

                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #fff;
                    transition: all 0.3s ease;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem;
                        background: rgba(18, 18, 18, 0.97);
                        border-bottom: 1px solid rgba(245, 158, 11, 0.12);
                    }

                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }
            "#}</style>
        </nav>
    }
}
