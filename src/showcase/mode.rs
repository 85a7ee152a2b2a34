//! Guided tour of the landing page. A floating button starts an
//! auto-advancing walkthrough that smooth-scrolls through every section
//! with ambient music and a playback control panel.
//!
//! All playback logic lives in [`ShowcaseState`]; this component maps it
//! onto browser timers, the audio element and the DOM. Both timer
//! handles are owned here and dropped before re-arming, so a superseded
//! dwell timer is cancelled instead of firing late.

use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlAudioElement, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::showcase::machine::{
    Phase, Section, ShowcaseState, DEFAULT_VOLUME, PROGRESS_TICK_MS,
};

pub const SECTIONS: &[Section] = &[
    Section { id: "inicio", label: "Inicio", duration_ms: 8_000 },
    Section { id: "beneficios", label: "Beneficios", duration_ms: 7_000 },
    Section { id: "precios", label: "Precios", duration_ms: 7_000 },
    Section { id: "testimonios", label: "Testimonios", duration_ms: 7_000 },
    Section { id: "blog", label: "Blog", duration_ms: 6_000 },
    Section { id: "nosotros", label: "Nosotros", duration_ms: 7_000 },
    Section { id: "ubicacion", label: "Ubicación", duration_ms: 7_000 },
    Section { id: "faq", label: "FAQ", duration_ms: 7_000 },
    Section { id: "cta", label: "Reserva", duration_ms: 7_000 },
];

const AMBIENT_MUSIC_URL: &str =
    "https://cdn.pixabay.com/audio/2022/03/10/audio_d65d6a5a0e.mp3";

pub enum ShowcaseAction {
    Start,
    Stop,
    TogglePlay,
    Previous,
    Next,
    GoTo(usize),
    Advance,
    Tick(f64),
    SetVolume(i32),
    ToggleMute,
    ToggleControls,
}

impl Reducible for ShowcaseState {
    type Action = ShowcaseAction;

    fn reduce(self: Rc<Self>, action: ShowcaseAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ShowcaseAction::Start => next.start(),
            ShowcaseAction::Stop => next.stop(),
            ShowcaseAction::TogglePlay => next.toggle_play(),
            ShowcaseAction::Previous => next.go_previous(),
            ShowcaseAction::Next => next.go_next(SECTIONS.len()),
            ShowcaseAction::GoTo(index) => next.go_to(index, SECTIONS.len()),
            ShowcaseAction::Advance => next.advance(SECTIONS.len()),
            ShowcaseAction::Tick(increment) => next.tick(increment),
            ShowcaseAction::SetVolume(percent) => next.set_volume(percent),
            ShowcaseAction::ToggleMute => next.toggle_mute(),
            ShowcaseAction::ToggleControls => next.toggle_controls(),
        }
        next.into()
    }
}

fn scroll_to_section(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    match document.get_element_by_id(id) {
        Some(element) => {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::debug!("no anchor for section #{id}"),
    }
}

/// Autoplay policies can reject `play()`; the walkthrough carries on
/// silently when they do.
fn best_effort_play(audio: &HtmlAudioElement) {
    match audio.play() {
        Ok(promise) => spawn_local(async move {
            if JsFuture::from(promise).await.is_err() {
                log::warn!("ambient music blocked by autoplay policy");
            }
        }),
        Err(_) => log::warn!("ambient music could not start"),
    }
}

#[function_component(ShowcaseMode)]
pub fn showcase_mode() -> Html {
    let state = use_reducer(ShowcaseState::new);
    let audio = use_mut_ref(|| None::<HtmlAudioElement>);
    let advance_timer = use_mut_ref(|| None::<Timeout>);
    let progress_ticker = use_mut_ref(|| None::<Interval>);

    // Audio element lives for the whole component, playback phase decides
    // whether it is audible.
    {
        let audio = audio.clone();
        use_effect_with_deps(
            move |_| {
                match HtmlAudioElement::new_with_src(AMBIENT_MUSIC_URL) {
                    Ok(element) => {
                        element.set_loop(true);
                        element.set_volume(f64::from(DEFAULT_VOLUME) / 100.0);
                        *audio.borrow_mut() = Some(element);
                    }
                    Err(_) => log::warn!("ambient audio element could not be created"),
                }
                move || {
                    if let Some(element) = audio.borrow_mut().take() {
                        let _ = element.pause();
                    }
                }
            },
            (),
        );
    }

    {
        let audio = audio.clone();
        use_effect_with_deps(
            move |phase| {
                if let Some(element) = audio.borrow().as_ref() {
                    match phase {
                        Phase::Playing => best_effort_play(element),
                        Phase::Paused => {
                            let _ = element.pause();
                        }
                        Phase::Idle => {
                            let _ = element.pause();
                            element.set_current_time(0.0);
                        }
                    }
                }
                || ()
            },
            state.phase,
        );
    }

    {
        let audio = audio.clone();
        use_effect_with_deps(
            move |volume| {
                if let Some(element) = audio.borrow().as_ref() {
                    element.set_volume(*volume);
                }
                || ()
            },
            state.effective_volume(),
        );
    }

    {
        use_effect_with_deps(
            move |(active, current)| {
                if *active {
                    scroll_to_section(SECTIONS[*current].id);
                }
                || ()
            },
            (state.is_active(), state.current),
        );
    }

    // Dwell timer plus progress ticker, re-armed whenever the phase or
    // the section changes. Taking the old handles first cancels them.
    {
        let deps = (state.phase, state.current);
        let state = state.clone();
        let advance_timer = advance_timer.clone();
        let progress_ticker = progress_ticker.clone();
        use_effect_with_deps(
            move |(phase, current)| {
                advance_timer.borrow_mut().take();
                progress_ticker.borrow_mut().take();
                if *phase == Phase::Playing {
                    let section = SECTIONS[*current];
                    let remaining = state.remaining_ms(section.duration_ms);
                    let increment =
                        f64::from(PROGRESS_TICK_MS) / f64::from(section.duration_ms) * 100.0;
                    let dwell = {
                        let state = state.clone();
                        Timeout::new(remaining, move || {
                            state.dispatch(ShowcaseAction::Advance)
                        })
                    };
                    let ticker = {
                        let state = state.clone();
                        Interval::new(PROGRESS_TICK_MS, move || {
                            state.dispatch(ShowcaseAction::Tick(increment))
                        })
                    };
                    *advance_timer.borrow_mut() = Some(dwell);
                    *progress_ticker.borrow_mut() = Some(ticker);
                }
                move || {
                    advance_timer.borrow_mut().take();
                    progress_ticker.borrow_mut().take();
                }
            },
            deps,
        );
    }

    let on_start = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ShowcaseAction::Start))
    };
    let on_stop = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ShowcaseAction::Stop))
    };
    let on_toggle_play = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ShowcaseAction::TogglePlay))
    };
    let on_previous = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ShowcaseAction::Previous))
    };
    let on_next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ShowcaseAction::Next))
    };
    let on_toggle_mute = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ShowcaseAction::ToggleMute))
    };
    let on_toggle_controls = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ShowcaseAction::ToggleControls))
    };
    let on_volume = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(percent) = input.value().parse::<i32>() {
                state.dispatch(ShowcaseAction::SetVolume(percent));
            }
        })
    };

    if !state.is_active() {
        return html! {
            <>
                <button class="showcase-fab" onclick={on_start} aria-label="Iniciar modo presentación">
                    {"▶ Modo Presentación"}
                </button>
                <style>{SHOWCASE_STYLE}</style>
            </>
        };
    }

    let section = SECTIONS[state.current];
    let at_first = state.current == 0;
    let at_last = state.current + 1 == SECTIONS.len();
    let volume_icon = if state.muted || state.volume == 0 { "🔇" } else { "🔊" };

    html! {
        <>
            <div class="showcase-vignette"></div>
            if state.controls_visible {
                <div class="showcase-panel" role="region" aria-label="Controles de presentación">
                    <div class="showcase-progress-track">
                        <div
                            class="showcase-progress-fill"
                            style={format!("width: {:.2}%", state.progress)}
                        ></div>
                    </div>
                    <div class="showcase-pills">
                        { for SECTIONS.iter().enumerate().map(|(i, entry)| {
                            let onclick = {
                                let state = state.clone();
                                Callback::from(move |_: MouseEvent| {
                                    state.dispatch(ShowcaseAction::GoTo(i))
                                })
                            };
                            let class = if i == state.current {
                                "showcase-pill active"
                            } else {
                                "showcase-pill"
                            };
                            html! {
                                <button {class} {onclick} title={entry.label}>
                                    { entry.label }
                                </button>
                            }
                        }) }
                    </div>
                    <div class="showcase-controls">
                        <span class="showcase-now">{ section.label }</span>
                        <button
                            class="showcase-btn"
                            onclick={on_previous}
                            disabled={at_first}
                            aria-label="Sección anterior"
                        >
                            {"⏮"}
                        </button>
                        <button
                            class="showcase-btn showcase-btn-main"
                            onclick={on_toggle_play}
                            aria-label={if state.is_playing() { "Pausar" } else { "Reanudar" }}
                        >
                            { if state.is_playing() { "⏸" } else { "▶" } }
                        </button>
                        <button
                            class="showcase-btn"
                            onclick={on_next}
                            disabled={at_last}
                            aria-label="Sección siguiente"
                        >
                            {"⏭"}
                        </button>
                        <button class="showcase-btn" onclick={on_toggle_mute} aria-label="Silenciar">
                            { volume_icon }
                        </button>
                        <input
                            class="showcase-volume"
                            type="range"
                            min="0"
                            max="100"
                            value={state.volume.to_string()}
                            oninput={on_volume}
                            aria-label="Volumen"
                        />
                        <button
                            class="showcase-btn"
                            onclick={on_toggle_controls}
                            aria-label="Ocultar controles"
                        >
                            {"⌄"}
                        </button>
                        <button class="showcase-btn" onclick={on_stop} aria-label="Salir">
                            {"✕"}
                        </button>
                    </div>
                </div>
            } else {
                <button
                    class="showcase-restore"
                    onclick={on_toggle_controls}
                    aria-label="Mostrar controles"
                >
                    {"⌃"}
                </button>
            }
            <style>{SHOWCASE_STYLE}</style>
        </>
    }
}

const SHOWCASE_STYLE: &str = r#"
    .showcase-fab {
        position: fixed;
        bottom: 2rem;
        left: 2rem;
        z-index: 90;
        padding: 0.8rem 1.4rem;
        border: 1px solid rgba(245, 158, 11, 0.4);
        border-radius: 999px;
        background: rgba(30, 30, 30, 0.9);
        color: #F59E0B;
        font-size: 0.9rem;
        cursor: pointer;
        backdrop-filter: blur(10px);
        transition: all 0.3s ease;
    }

    .showcase-fab:hover {
        background: rgba(245, 158, 11, 0.15);
        transform: translateY(-2px);
    }

    .showcase-vignette {
        position: fixed;
        inset: 0;
        z-index: 80;
        pointer-events: none;
        box-shadow: inset 0 0 140px rgba(0, 0, 0, 0.55);
    }

    .showcase-panel {
        position: fixed;
        bottom: 1.5rem;
        left: 50%;
        transform: translateX(-50%);
        z-index: 95;
        width: min(680px, calc(100vw - 2rem));
        padding: 0.8rem 1rem 1rem;
        border: 1px solid rgba(245, 158, 11, 0.25);
        border-radius: 16px;
        background: rgba(20, 20, 20, 0.92);
        backdrop-filter: blur(14px);
    }

    .showcase-progress-track {
        height: 4px;
        border-radius: 2px;
        background: rgba(255, 255, 255, 0.12);
        overflow: hidden;
        margin-bottom: 0.7rem;
    }

    .showcase-progress-fill {
        height: 100%;
        background: linear-gradient(90deg, #F59E0B, #FBBF24);
        transition: width 60ms linear;
    }

    .showcase-pills {
        display: flex;
        flex-wrap: wrap;
        gap: 0.35rem;
        margin-bottom: 0.7rem;
    }

    .showcase-pill {
        padding: 0.25rem 0.7rem;
        border: 1px solid rgba(255, 255, 255, 0.15);
        border-radius: 999px;
        background: transparent;
        color: #999;
        font-size: 0.72rem;
        cursor: pointer;
        transition: all 0.2s ease;
    }

    .showcase-pill:hover {
        color: #fff;
        border-color: rgba(245, 158, 11, 0.5);
    }

    .showcase-pill.active {
        background: rgba(245, 158, 11, 0.18);
        border-color: #F59E0B;
        color: #F59E0B;
    }

    .showcase-controls {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }

    .showcase-now {
        flex: 1;
        color: #fff;
        font-size: 0.85rem;
        white-space: nowrap;
        overflow: hidden;
        text-overflow: ellipsis;
    }

    .showcase-btn {
        width: 2.2rem;
        height: 2.2rem;
        display: grid;
        place-items: center;
        border: 1px solid rgba(255, 255, 255, 0.15);
        border-radius: 8px;
        background: transparent;
        color: #fff;
        cursor: pointer;
        transition: all 0.2s ease;
    }

    .showcase-btn:hover:not(:disabled) {
        border-color: rgba(245, 158, 11, 0.6);
        color: #F59E0B;
    }

    .showcase-btn:disabled {
        opacity: 0.35;
        cursor: default;
    }

    .showcase-btn-main {
        background: rgba(245, 158, 11, 0.18);
        border-color: #F59E0B;
        color: #F59E0B;
    }

    .showcase-volume {
        width: 90px;
        accent-color: #F59E0B;
    }

    .showcase-restore {
        position: fixed;
        bottom: 1.5rem;
        left: 50%;
        transform: translateX(-50%);
        z-index: 95;
        width: 2.6rem;
        height: 2.6rem;
        border: 1px solid rgba(245, 158, 11, 0.4);
        border-radius: 50%;
        background: rgba(20, 20, 20, 0.92);
        color: #F59E0B;
        cursor: pointer;
    }

    @media (max-width: 640px) {
        .showcase-pills {
            display: none;
        }

        .showcase-volume {
            width: 60px;
        }
    }
"#;
