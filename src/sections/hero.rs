//! Landing hero. Rotating headline slides plus glow orbs that follow
//! the pointer through the smoothed tracking hook.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::effects::floating_particles::FloatingParticles;
use crate::effects::reactive_orb::ReactiveOrb;
use crate::hooks::mouse_tracking::{use_mouse_tracking, MouseTrackingOptions};

const SLIDE_MS: u32 = 5_000;

struct Slide {
    title: &'static str,
    subtitle: &'static str,
}

const SLIDES: &[Slide] = &[
    Slide {
        title: "Tu santuario de concentración",
        subtitle: "Cápsulas privadas e insonorizadas para estudiar sin distracciones en el centro de Temuco.",
    },
    Slide {
        title: "Silencio real, desde $2.500 la hora",
        subtitle: "Escritorio ergonómico, luz cálida regulable y WiFi de fibra en cada cápsula.",
    },
    Slide {
        title: "A pasos de tu universidad",
        subtitle: "A cinco minutos de la UFRO y a ocho de la UCT. Llega caminando entre clases.",
    },
];

#[function_component(Hero)]
pub fn hero() -> Html {
    let current = use_state(|| 0usize);
    let tracking = use_mouse_tracking(MouseTrackingOptions {
        intensity: 0.06,
        enable_smoothing: true,
        ..Default::default()
    });

    {
        let index = *current;
        let current = current.clone();
        use_effect_with_deps(
            move |index| {
                let next = (*index + 1) % SLIDES.len();
                let timer = Timeout::new(SLIDE_MS, move || current.set(next));
                move || drop(timer)
            },
            index,
        );
    }

    let slide = &SLIDES[*current];
    let offset = tracking.smooth_offset;

    html! {
        <section
            id="inicio"
            class="hero"
            ref={tracking.container_ref.clone()}
            onmousemove={tracking.onmousemove.clone()}
        >
            <FloatingParticles count={24} />
            <ReactiveOrb
                position="top: 15%; left: 8%;"
                size_px={360}
                dx={offset.x}
                dy={offset.y}
                pulse=true
            />
            <ReactiveOrb
                position="bottom: 10%; right: 6%;"
                size_px={280}
                color="rgba(251, 191, 36, 0.12)"
                dx={-offset.x}
                dy={-offset.y}
            />
            <div class="hero-content">
                <h1 key={*current}>{ slide.title }</h1>
                <p key={format!("sub-{}", *current)}>{ slide.subtitle }</p>
                <div class="hero-actions">
                    <a href="#cta" class="hero-primary">{"Reserva tu cápsula"}</a>
                    <a href="#precios" class="hero-secondary">{"Ver precios"}</a>
                </div>
                <div class="hero-dots">
                    <button
                        class="hero-arrow"
                        onclick={{
                            let current = current.clone();
                            Callback::from(move |_: MouseEvent| {
                                current.set((*current + SLIDES.len() - 1) % SLIDES.len())
                            })
                        }}
                        aria-label="Mensaje anterior"
                    >{"‹"}</button>
                    { for (0..SLIDES.len()).map(|i| {
                        let onclick = {
                            let current = current.clone();
                            Callback::from(move |_: MouseEvent| current.set(i))
                        };
                        let class = if i == *current { "hero-dot active" } else { "hero-dot" };
                        html! { <button {class} {onclick} aria-label={format!("Ir al mensaje {}", i + 1)}></button> }
                    }) }
                    <button
                        class="hero-arrow"
                        onclick={{
                            let current = current.clone();
                            Callback::from(move |_: MouseEvent| {
                                current.set((*current + 1) % SLIDES.len())
                            })
                        }}
                        aria-label="Mensaje siguiente"
                    >{"›"}</button>
                </div>
                <div class="hero-stats">
                    <div><strong>{"500+"}</strong><span>{"estudiantes al mes"}</span></div>
                    <div><strong>{"4.9★"}</strong><span>{"valoración promedio"}</span></div>
                    <div><strong>{"14"}</strong><span>{"cápsulas disponibles"}</span></div>
                </div>
            </div>
            <a href="#beneficios" class="hero-scroll-cue" aria-label="Bajar a beneficios">
                {"⌄"}
            </a>
            <style>{r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: radial-gradient(circle at 30% 20%, #1d1b16 0%, #121212 60%);
                }

                .hero-content {
                    position: relative;
                    z-index: 1;
                    text-align: center;
                    max-width: 720px;
                    padding: 6rem 1.5rem 3rem;
                }

                .hero h1 {
                    color: #fff;
                    font-size: clamp(2.2rem, 6vw, 3.6rem);
                    margin: 0 0 1rem;
                    animation: hero-fade 0.6s ease both;
                }

                .hero-content p {
                    color: #AAA;
                    font-size: 1.1rem;
                    margin: 0 0 2rem;
                    animation: hero-fade 0.6s ease 0.1s both;
                }

                @keyframes hero-fade {
                    from {
                        opacity: 0;
                        transform: translateY(12px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                .reduce-motion .hero h1,
                .reduce-motion .hero-content p {
                    animation: none;
                }

                .hero-actions {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }

                .hero-primary {
                    padding: 0.8rem 1.8rem;
                    border-radius: 999px;
                    background: #F59E0B;
                    color: #1a1a1a;
                    font-weight: 700;
                    text-decoration: none;
                    transition: transform 0.2s ease;
                }

                .hero-primary:hover {
                    transform: translateY(-2px);
                }

                .hero-secondary {
                    padding: 0.8rem 1.8rem;
                    border-radius: 999px;
                    border: 1px solid rgba(255, 255, 255, 0.25);
                    color: #fff;
                    text-decoration: none;
                    transition: border-color 0.2s ease;
                }

                .hero-secondary:hover {
                    border-color: #F59E0B;
                }

                .hero-dots {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 2.5rem;
                }

                .hero-dot {
                    width: 8px;
                    height: 8px;
                    border: none;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.25);
                    cursor: pointer;
                    transition: all 0.2s ease;
                }

                .hero-dot.active {
                    width: 22px;
                    border-radius: 4px;
                    background: #F59E0B;
                }

                .hero-arrow {
                    border: none;
                    background: none;
                    color: rgba(255, 255, 255, 0.5);
                    font-size: 1.3rem;
                    line-height: 1;
                    cursor: pointer;
                    padding: 0 0.4rem;
                    transition: color 0.2s ease;
                }

                .hero-arrow:hover {
                    color: #F59E0B;
                }

                .hero-scroll-cue {
                    position: absolute;
                    bottom: 1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    color: rgba(255, 255, 255, 0.5);
                    font-size: 1.4rem;
                    text-decoration: none;
                    animation: cue-bob 2s ease-in-out infinite;
                }

                @keyframes cue-bob {
                    0%, 100% { transform: translate(-50%, 0); }
                    50% { transform: translate(-50%, 8px); }
                }

                .reduce-motion .hero-scroll-cue {
                    animation: none;
                }

                .hero-stats {
                    display: flex;
                    justify-content: center;
                    gap: 2.5rem;
                }

                .hero-stats div {
                    display: flex;
                    flex-direction: column;
                    gap: 0.2rem;
                }

                .hero-stats strong {
                    color: #F59E0B;
                    font-size: 1.4rem;
                }

                .hero-stats span {
                    color: #888;
                    font-size: 0.82rem;
                }
            "#}</style>
        </section>
    }
}
