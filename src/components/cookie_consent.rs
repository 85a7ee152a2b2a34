//! Cookie banner. Shows two seconds after first load and never again
//! once a choice is stored.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::prefs::{CookiePreferences, COOKIE_CONSENT_KEY};
use crate::storage;

const SHOW_DELAY_MS: u32 = 2_000;

#[function_component(CookieConsent)]
pub fn cookie_consent() -> Html {
    let visible = use_state(|| false);
    let customizing = use_state(|| false);
    let draft = use_state(CookiePreferences::default);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let mut delay = None;
                if !storage::has_key(COOKIE_CONSENT_KEY) {
                    delay = Some(Timeout::new(SHOW_DELAY_MS, move || visible.set(true)));
                }
                move || drop(delay)
            },
            (),
        );
    }

    let save_and_close = {
        let visible = visible.clone();
        move |preferences: CookiePreferences| {
            storage::save_json(COOKIE_CONSENT_KEY, &preferences);
            visible.set(false);
        }
    };

    let accept_all = {
        let save_and_close = save_and_close.clone();
        Callback::from(move |_: MouseEvent| save_and_close(CookiePreferences::all_accepted()))
    };
    let only_necessary = {
        let save_and_close = save_and_close.clone();
        Callback::from(move |_: MouseEvent| save_and_close(CookiePreferences::only_necessary()))
    };
    let save_custom = {
        let save_and_close = save_and_close.clone();
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| save_and_close(*draft))
    };
    let toggle_customizing = {
        let customizing = customizing.clone();
        Callback::from(move |_: MouseEvent| customizing.set(!*customizing))
    };
    let toggle_analytics = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            draft.set(CookiePreferences { analytics: !draft.analytics, ..*draft })
        })
    };
    let toggle_marketing = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            draft.set(CookiePreferences { marketing: !draft.marketing, ..*draft })
        })
    };

    if !*visible {
        return html! {};
    }

    html! {
        <div class="cookie-banner" role="dialog" aria-label="Preferencias de cookies">
            <p>
                {"Usamos cookies para mejorar tu experiencia. Puedes aceptarlas todas o elegir cuáles permitir."}
            </p>
            if *customizing {
                <div class="cookie-toggles">
                    <label class="cookie-toggle disabled">
                        <input type="checkbox" checked=true disabled=true />
                        {"Necesarias"}
                    </label>
                    <label class="cookie-toggle">
                        <input type="checkbox" checked={draft.analytics} onclick={toggle_analytics} />
                        {"Analíticas"}
                    </label>
                    <label class="cookie-toggle">
                        <input type="checkbox" checked={draft.marketing} onclick={toggle_marketing} />
                        {"Marketing"}
                    </label>
                </div>
            }
            <div class="cookie-actions">
                <button class="cookie-primary" onclick={accept_all}>{"Aceptar todas"}</button>
                <button class="cookie-secondary" onclick={only_necessary}>{"Solo necesarias"}</button>
                if *customizing {
                    <button class="cookie-secondary" onclick={save_custom}>{"Guardar selección"}</button>
                } else {
                    <button class="cookie-link" onclick={toggle_customizing}>{"Personalizar"}</button>
                }
            </div>
            <style>{r#"
                .cookie-banner {
                    position: fixed;
                    bottom: 1rem;
                    left: 1rem;
                    z-index: 130;
                    width: min(380px, calc(100vw - 2rem));
                    padding: 1.2rem;
                    border: 1px solid rgba(245, 158, 11, 0.25);
                    border-radius: 14px;
                    background: rgba(20, 20, 20, 0.97);
                    color: #CCC;
                    font-size: 0.88rem;
                }

                .cookie-banner p {
                    margin: 0 0 0.9rem;
                }

                .cookie-toggles {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                    margin-bottom: 0.9rem;
                }

                .cookie-toggle {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    cursor: pointer;
                }

                .cookie-toggle.disabled {
                    color: #777;
                    cursor: default;
                }

                .cookie-toggle input {
                    accent-color: #F59E0B;
                }

                .cookie-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }

                .cookie-primary {
                    padding: 0.5rem 1rem;
                    border: none;
                    border-radius: 999px;
                    background: #F59E0B;
                    color: #1a1a1a;
                    font-weight: 600;
                    cursor: pointer;
                }

                .cookie-secondary {
                    padding: 0.5rem 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 999px;
                    background: transparent;
                    color: #CCC;
                    cursor: pointer;
                }

                .cookie-link {
                    padding: 0.5rem 0.4rem;
                    border: none;
                    background: none;
                    color: #F59E0B;
                    cursor: pointer;
                    text-decoration: underline;
                }
            "#}</style>
        </div>
    }
}
