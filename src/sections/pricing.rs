//! Pricing table plus a live-looking availability counter. The counter
//! is a bounded random walk refreshed every 30 seconds; there is no
//! occupancy backend behind it.

use gloo_timers::callback::Interval;
use web_sys::js_sys;
use yew::prelude::*;

use crate::booking::{self, DURATIONS};
use crate::components::section_header::SectionHeader;
use crate::config;

const AVAILABILITY_REFRESH_MS: u32 = 30_000;
const PODS_FLOOR: i32 = 2;
const PODS_CEIL: i32 = 12;
const PODS_INITIAL: i32 = 7;

/// `roll` in `0.0..1.0` maps to a -1, 0 or +1 step, clamped to the
/// plausible range.
fn bounded_step(current: i32, roll: f64) -> i32 {
    let step = (roll * 3.0).floor() as i32 - 1;
    (current + step).clamp(PODS_FLOOR, PODS_CEIL)
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let available = use_state(|| PODS_INITIAL);

    // Keyed on the current count so the closure never reads a stale
    // snapshot of the state handle.
    {
        let count = *available;
        let available = available.clone();
        use_effect_with_deps(
            move |count| {
                let count = *count;
                let ticker = Interval::new(AVAILABILITY_REFRESH_MS, move || {
                    available.set(bounded_step(count, js_sys::Math::random()));
                });
                move || drop(ticker)
            },
            count,
        );
    }

    html! {
        <section id="precios" class="pricing">
            <SectionHeader
                eyebrow="Precios"
                title="Paga solo por el tiempo que estudias"
                subtitle={format!(
                    "Sin membresías ni matrículas. Desde ${} la hora, reserva por bloque o por el día completo.",
                    booking::format_clp(config::PRICE_PER_HOUR_CLP),
                )}
            />
            <div class="pricing-availability">
                <span class="availability-dot"></span>
                { format!("{} cápsulas disponibles ahora", *available) }
            </div>
            <div class="pricing-grid">
                { for DURATIONS.iter().enumerate().map(|(i, option)| {
                    let featured = i == 2;
                    let class = if featured { "price-card featured" } else { "price-card" };
                    html! {
                        <div {class}>
                            if featured {
                                <span class="price-badge">{"Más elegido"}</span>
                            }
                            <h3>{ option.label }</h3>
                            <div class="price-amount">
                                <span class="price-currency">{"$"}</span>
                                { booking::format_clp(option.price_clp) }
                            </div>
                            <span class="price-per">
                                { format!("${} por hora", booking::format_clp(option.price_clp / u32::from(option.hours))) }
                            </span>
                            <a href="#cta" class="price-cta">{"Reservar"}</a>
                        </div>
                    }
                }) }
            </div>
            <p class="pricing-note">
                {"Todos los precios en CLP e incluyen café, WiFi y lockers."}
            </p>
            <style>{r#"
                .pricing {
                    padding: 5rem 1.5rem;
                    background: #121212;
                }

                .pricing-availability {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    color: #4ADE80;
                    font-size: 0.9rem;
                    margin-bottom: 2rem;
                }

                .availability-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #4ADE80;
                    animation: availability-pulse 2s ease-in-out infinite;
                }

                @keyframes availability-pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.4; }
                }

                .reduce-motion .availability-dot {
                    animation: none;
                }

                .pricing-grid {
                    max-width: 1000px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(210px, 1fr));
                    gap: 1.2rem;
                }

                .price-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 2rem 1.4rem;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 14px;
                    background: rgba(255, 255, 255, 0.02);
                    transition: all 0.25s ease;
                }

                .price-card:hover {
                    transform: translateY(-4px);
                }

                .price-card.featured {
                    border-color: #F59E0B;
                    background: rgba(245, 158, 11, 0.06);
                }

                .price-badge {
                    position: absolute;
                    top: -0.7rem;
                    padding: 0.2rem 0.8rem;
                    border-radius: 999px;
                    background: #F59E0B;
                    color: #1a1a1a;
                    font-size: 0.72rem;
                    font-weight: 700;
                }

                .price-card h3 {
                    color: #CCC;
                    margin: 0;
                    font-size: 0.95rem;
                }

                .price-amount {
                    color: #fff;
                    font-size: 2.2rem;
                    font-weight: 700;
                }

                .price-currency {
                    font-size: 1.2rem;
                    color: #F59E0B;
                }

                .price-per {
                    color: #777;
                    font-size: 0.8rem;
                }

                .price-cta {
                    margin-top: 0.8rem;
                    padding: 0.55rem 1.6rem;
                    border-radius: 999px;
                    border: 1px solid rgba(245, 158, 11, 0.5);
                    color: #F59E0B;
                    text-decoration: none;
                    font-size: 0.88rem;
                    transition: all 0.2s ease;
                }

                .price-cta:hover {
                    background: #F59E0B;
                    color: #1a1a1a;
                }

                .pricing-note {
                    text-align: center;
                    color: #777;
                    font-size: 0.85rem;
                    margin-top: 2rem;
                }
            "#}</style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_step_moves_by_at_most_one() {
        assert_eq!(bounded_step(7, 0.0), 6);
        assert_eq!(bounded_step(7, 0.5), 7);
        assert_eq!(bounded_step(7, 0.99), 8);
    }

    #[test]
    fn availability_walk_stays_in_range() {
        assert_eq!(bounded_step(PODS_FLOOR, 0.0), PODS_FLOOR);
        assert_eq!(bounded_step(PODS_CEIL, 0.99), PODS_CEIL);
    }
}
