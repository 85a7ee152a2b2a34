//! Closing call to action: urgency countdown, a reserve button with a
//! magnetic pointer pull and a small coffee easter egg.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::booking;
use crate::effects::floating_particles::FloatingParticles;
use crate::hooks::mouse_tracking::{use_mouse_tracking, MouseTrackingOptions};

/// 2:34:56, the promo window shown on first load.
const COUNTDOWN_START_SECS: u32 = 2 * 3600 + 34 * 60 + 56;
const EASTER_EGG_CLICKS: u32 = 5;

fn format_countdown(total_secs: u32) -> String {
    format!(
        "{}:{:02}:{:02}",
        total_secs / 3600,
        (total_secs / 60) % 60,
        total_secs % 60,
    )
}

#[function_component(Cta)]
pub fn cta() -> Html {
    let remaining = use_state(|| COUNTDOWN_START_SECS);
    let hovering = use_state(|| false);
    let coffee_clicks = use_state(|| 0u32);
    let tracking = use_mouse_tracking(MouseTrackingOptions {
        intensity: 0.2,
        ..Default::default()
    });

    // One-second countdown, wrapping back to the full window at zero.
    {
        let secs = *remaining;
        let remaining = remaining.clone();
        use_effect_with_deps(
            move |secs| {
                let next = if *secs == 0 { COUNTDOWN_START_SECS } else { secs - 1 };
                let timer = Timeout::new(1_000, move || remaining.set(next));
                move || drop(timer)
            },
            secs,
        );
    }

    let on_enter = {
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| hovering.set(true))
    };
    let on_leave = {
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| hovering.set(false))
    };
    let on_coffee = {
        let coffee_clicks = coffee_clicks.clone();
        Callback::from(move |_: MouseEvent| {
            let clicks = *coffee_clicks + 1;
            if clicks == EASTER_EGG_CLICKS {
                log::info!("coffee easter egg unlocked");
            }
            coffee_clicks.set(clicks);
        })
    };

    let pull = if *hovering { tracking.offset } else { Default::default() };
    let button_style = format!("transform: translate({:.1}px, {:.1}px);", pull.x, pull.y);

    html! {
        <section id="cta" class="cta">
            <FloatingParticles count={14} />
            <div class="cta-content">
                <h2>{"Tu próxima sesión de estudio empieza aquí"}</h2>
                <p>{"Reserva hoy y el primer café de especialidad va por la casa."}</p>
                <div class="cta-countdown" aria-label="Tiempo restante de la promoción">
                    <span class="cta-countdown-label">{"La promo termina en"}</span>
                    <strong>{ format_countdown(*remaining) }</strong>
                </div>
                <div
                    class="cta-magnet-zone"
                    ref={tracking.container_ref.clone()}
                    onmousemove={tracking.onmousemove.clone()}
                    onmouseenter={on_enter}
                    onmouseleave={on_leave}
                >
                    <a
                        class="cta-button"
                        style={button_style}
                        href={booking::contact_url()}
                        target="_blank"
                        rel="noopener"
                    >
                        {"Reservar por WhatsApp"}
                    </a>
                </div>
                <button class="cta-coffee" onclick={on_coffee} aria-label="Café">
                    {"☕"}
                </button>
                if *coffee_clicks >= EASTER_EGG_CLICKS {
                    <p class="cta-egg">
                        {"¡Encontraste el café escondido! Muestra esta pantalla en recepción y el primero corre por nuestra cuenta."}
                    </p>
                }
            </div>
            <style>{r#"
                .cta {
                    position: relative;
                    padding: 6rem 1.5rem;
                    background: radial-gradient(circle at 50% 0%, #201a10 0%, #121212 70%);
                    overflow: hidden;
                }

                .cta-content {
                    position: relative;
                    z-index: 1;
                    max-width: 640px;
                    margin: 0 auto;
                    text-align: center;
                }

                .cta h2 {
                    color: #fff;
                    font-size: clamp(1.8rem, 4vw, 2.6rem);
                    margin: 0 0 0.8rem;
                }

                .cta-content > p {
                    color: #AAA;
                    margin: 0 0 2rem;
                }

                .cta-countdown {
                    display: inline-flex;
                    flex-direction: column;
                    gap: 0.2rem;
                    padding: 0.8rem 2rem;
                    border: 1px solid rgba(245, 158, 11, 0.3);
                    border-radius: 12px;
                    margin-bottom: 2rem;
                }

                .cta-countdown-label {
                    color: #999;
                    font-size: 0.78rem;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                }

                .cta-countdown strong {
                    color: #F59E0B;
                    font-size: 1.8rem;
                    font-variant-numeric: tabular-nums;
                }

                .cta-magnet-zone {
                    display: flex;
                    justify-content: center;
                    padding: 2rem;
                }

                .cta-button {
                    display: inline-block;
                    padding: 1rem 2.4rem;
                    border-radius: 999px;
                    background: #F59E0B;
                    color: #1a1a1a;
                    font-size: 1.05rem;
                    font-weight: 700;
                    text-decoration: none;
                    box-shadow: 0 12px 32px rgba(245, 158, 11, 0.35);
                    transition: transform 0.15s ease-out;
                }

                .reduce-motion .cta-button {
                    transform: none !important;
                }

                .cta-coffee {
                    margin-top: 2rem;
                    border: none;
                    background: none;
                    font-size: 1.3rem;
                    cursor: pointer;
                    opacity: 0.5;
                    transition: opacity 0.2s ease;
                }

                .cta-coffee:hover {
                    opacity: 1;
                }

                .cta-egg {
                    margin-top: 0.8rem;
                    color: #4ADE80;
                    font-size: 0.9rem;
                }
            "#}</style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_starts_at_the_promo_window() {
        assert_eq!(format_countdown(COUNTDOWN_START_SECS), "2:34:56");
    }

    #[test]
    fn countdown_pads_minutes_and_seconds() {
        assert_eq!(format_countdown(0), "0:00:00");
        assert_eq!(format_countdown(61), "0:01:01");
        assert_eq!(format_countdown(3_605), "1:00:05");
    }
}
