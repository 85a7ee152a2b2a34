//! Floating reservation flow. Three steps (day and slot, duration and
//! pod count, summary) ending in a prefilled WhatsApp chat; nothing is
//! submitted anywhere else.

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use yew::prelude::*;

use crate::booking::{self, DURATIONS, MAX_PODS, MIN_PODS, TIME_SLOTS};

const DAYS_SHOWN: u64 = 7;

fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Lun",
        Weekday::Tue => "Mar",
        Weekday::Wed => "Mié",
        Weekday::Thu => "Jue",
        Weekday::Fri => "Vie",
        Weekday::Sat => "Sáb",
        Weekday::Sun => "Dom",
    }
}

fn upcoming_days(from: NaiveDate) -> Vec<NaiveDate> {
    (0..DAYS_SHOWN)
        .filter_map(|i| from.checked_add_days(Days::new(i)))
        .collect()
}

#[function_component(QuickBooking)]
pub fn quick_booking() -> Html {
    let open = use_state(|| false);
    let step = use_state(|| 1usize);
    let selected_date = use_state(|| None::<NaiveDate>);
    let selected_time = use_state(|| None::<&'static str>);
    let duration_idx = use_state(|| 0usize);
    let pods = use_state(|| MIN_PODS);

    let days = upcoming_days(Local::now().date_naive());

    let toggle_open = {
        let open = open.clone();
        let step = step.clone();
        Callback::from(move |_: MouseEvent| {
            step.set(1);
            open.set(!*open);
        })
    };

    let back = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| step.set((*step - 1).max(1)))
    };
    let forward = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| step.set((*step + 1).min(3)))
    };

    let confirm = {
        let open = open.clone();
        let selected_date = selected_date.clone();
        let selected_time = selected_time.clone();
        let duration_idx = duration_idx.clone();
        let pods = pods.clone();
        Callback::from(move |_: MouseEvent| {
            let (Some(date), Some(time)) = (*selected_date, *selected_time) else {
                return;
            };
            let url = booking::booking_url(
                &date.format("%d-%m-%Y").to_string(),
                time,
                &DURATIONS[*duration_idx],
                *pods,
            );
            if let Some(window) = web_sys::window() {
                if window.open_with_url_and_target(&url, "_blank").is_err() {
                    log::warn!("could not open the reservation chat");
                }
            }
            open.set(false);
        })
    };

    let duration = &DURATIONS[*duration_idx];
    let step_ready = match *step {
        1 => selected_date.is_some() && selected_time.is_some(),
        _ => true,
    };

    html! {
        <>
            <button class="booking-fab" onclick={toggle_open.clone()} aria-label="Reserva rápida">
                {"📅 Reserva rápida"}
            </button>
            if *open {
                <div class="booking-backdrop" onclick={toggle_open.clone()}></div>
                <div class="booking-modal" role="dialog" aria-label="Reserva rápida">
                    <div class="booking-head">
                        <h3>{ format!("Paso {} de 3", *step) }</h3>
                        <button class="booking-close" onclick={toggle_open} aria-label="Cerrar">
                            {"✕"}
                        </button>
                    </div>
                    {
                        match *step {
                            1 => html! {
                                <div class="booking-step">
                                    <span class="booking-label">{"¿Qué día?"}</span>
                                    <div class="booking-days">
                                        { for days.iter().map(|day| {
                                            let day = *day;
                                            let onclick = {
                                                let selected_date = selected_date.clone();
                                                Callback::from(move |_: MouseEvent| {
                                                    selected_date.set(Some(day))
                                                })
                                            };
                                            let class = if *selected_date == Some(day) {
                                                "booking-day selected"
                                            } else {
                                                "booking-day"
                                            };
                                            html! {
                                                <button {class} {onclick}>
                                                    <span>{ weekday_abbrev(day.weekday()) }</span>
                                                    <strong>{ day.day() }</strong>
                                                </button>
                                            }
                                        }) }
                                    </div>
                                    <span class="booking-label">{"¿A qué hora?"}</span>
                                    <div class="booking-slots">
                                        { for TIME_SLOTS.iter().map(|slot| {
                                            let slot = *slot;
                                            let onclick = {
                                                let selected_time = selected_time.clone();
                                                Callback::from(move |_: MouseEvent| {
                                                    selected_time.set(Some(slot))
                                                })
                                            };
                                            let class = if *selected_time == Some(slot) {
                                                "booking-slot selected"
                                            } else {
                                                "booking-slot"
                                            };
                                            html! { <button {class} {onclick}>{ slot }</button> }
                                        }) }
                                    </div>
                                </div>
                            },
                            2 => html! {
                                <div class="booking-step">
                                    <span class="booking-label">{"¿Cuánto tiempo?"}</span>
                                    <div class="booking-durations">
                                        { for DURATIONS.iter().enumerate().map(|(i, option)| {
                                            let onclick = {
                                                let duration_idx = duration_idx.clone();
                                                Callback::from(move |_: MouseEvent| duration_idx.set(i))
                                            };
                                            let class = if i == *duration_idx {
                                                "booking-duration selected"
                                            } else {
                                                "booking-duration"
                                            };
                                            html! {
                                                <button {class} {onclick}>
                                                    <span>{ option.label }</span>
                                                    <strong>
                                                        { format!("${}", booking::format_clp(option.price_clp)) }
                                                    </strong>
                                                </button>
                                            }
                                        }) }
                                    </div>
                                    <span class="booking-label">{"¿Cuántas cápsulas?"}</span>
                                    <div class="booking-pods">
                                        <button
                                            class="booking-count"
                                            disabled={*pods == MIN_PODS}
                                            onclick={{
                                                let pods = pods.clone();
                                                Callback::from(move |_: MouseEvent| pods.set(*pods - 1))
                                            }}
                                        >{"−"}</button>
                                        <strong>{ *pods }</strong>
                                        <button
                                            class="booking-count"
                                            disabled={*pods == MAX_PODS}
                                            onclick={{
                                                let pods = pods.clone();
                                                Callback::from(move |_: MouseEvent| pods.set(*pods + 1))
                                            }}
                                        >{"+"}</button>
                                    </div>
                                </div>
                            },
                            _ => html! {
                                <div class="booking-step">
                                    <span class="booking-label">{"Resumen"}</span>
                                    <ul class="booking-summary">
                                        <li>
                                            { selected_date
                                                .map(|d| d.format("%d-%m-%Y").to_string())
                                                .unwrap_or_default() }
                                            { " a las " }
                                            { selected_time.unwrap_or("") }
                                        </li>
                                        <li>{ duration.label }</li>
                                        <li>{ format!("{} cápsula(s)", *pods) }</li>
                                        <li class="booking-total">
                                            { format!(
                                                "Total: ${} CLP",
                                                booking::format_clp(booking::total_price(duration, *pods)),
                                            ) }
                                        </li>
                                    </ul>
                                </div>
                            },
                        }
                    }
                    <div class="booking-actions">
                        if *step > 1 {
                            <button class="booking-back" onclick={back}>{"Atrás"}</button>
                        }
                        if *step < 3 {
                            <button class="booking-next" onclick={forward} disabled={!step_ready}>
                                {"Continuar"}
                            </button>
                        } else {
                            <button class="booking-next" onclick={confirm}>
                                {"Confirmar por WhatsApp"}
                            </button>
                        }
                    </div>
                </div>
            }
            <style>{BOOKING_STYLE}</style>
        </>
    }
}

const BOOKING_STYLE: &str = r#"
    .booking-fab {
        position: fixed;
        bottom: 2rem;
        right: 2rem;
        z-index: 90;
        padding: 0.8rem 1.4rem;
        border: none;
        border-radius: 999px;
        background: #F59E0B;
        color: #1a1a1a;
        font-weight: 600;
        font-size: 0.9rem;
        cursor: pointer;
        box-shadow: 0 8px 24px rgba(245, 158, 11, 0.35);
        transition: transform 0.2s ease;
    }

    .booking-fab:hover {
        transform: translateY(-2px);
    }

    .booking-backdrop {
        position: fixed;
        inset: 0;
        z-index: 110;
        background: rgba(0, 0, 0, 0.6);
    }

    .booking-modal {
        position: fixed;
        bottom: 50%;
        right: 50%;
        transform: translate(50%, 50%);
        z-index: 120;
        width: min(420px, calc(100vw - 2rem));
        max-height: 85vh;
        overflow-y: auto;
        padding: 1.2rem;
        border: 1px solid rgba(245, 158, 11, 0.25);
        border-radius: 16px;
        background: #1a1a1a;
    }

    .booking-head {
        display: flex;
        justify-content: space-between;
        align-items: center;
        margin-bottom: 1rem;
    }

    .booking-head h3 {
        color: #fff;
        margin: 0;
        font-size: 1rem;
    }

    .booking-close {
        background: none;
        border: none;
        color: #999;
        cursor: pointer;
        font-size: 1rem;
    }

    .booking-label {
        display: block;
        color: #999;
        font-size: 0.82rem;
        margin: 0.8rem 0 0.5rem;
    }

    .booking-days {
        display: flex;
        gap: 0.4rem;
        overflow-x: auto;
        padding-bottom: 0.3rem;
    }

    .booking-day {
        flex: 0 0 auto;
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.2rem;
        padding: 0.5rem 0.7rem;
        border: 1px solid rgba(255, 255, 255, 0.15);
        border-radius: 10px;
        background: transparent;
        color: #CCC;
        cursor: pointer;
    }

    .booking-slots {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 0.4rem;
    }

    .booking-slot {
        padding: 0.4rem 0;
        border: 1px solid rgba(255, 255, 255, 0.15);
        border-radius: 8px;
        background: transparent;
        color: #CCC;
        font-size: 0.82rem;
        cursor: pointer;
    }

    .booking-durations {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 0.4rem;
    }

    .booking-duration {
        display: flex;
        flex-direction: column;
        gap: 0.2rem;
        padding: 0.7rem;
        border: 1px solid rgba(255, 255, 255, 0.15);
        border-radius: 10px;
        background: transparent;
        color: #CCC;
        cursor: pointer;
    }

    .booking-day.selected,
    .booking-slot.selected,
    .booking-duration.selected {
        border-color: #F59E0B;
        background: rgba(245, 158, 11, 0.12);
        color: #F59E0B;
    }

    .booking-pods {
        display: flex;
        align-items: center;
        gap: 1.2rem;
        color: #fff;
        font-size: 1.1rem;
    }

    .booking-count {
        width: 2.2rem;
        height: 2.2rem;
        border: 1px solid rgba(255, 255, 255, 0.2);
        border-radius: 8px;
        background: transparent;
        color: #fff;
        font-size: 1.1rem;
        cursor: pointer;
    }

    .booking-count:disabled {
        opacity: 0.35;
        cursor: default;
    }

    .booking-summary {
        list-style: none;
        margin: 0;
        padding: 0;
        color: #CCC;
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
    }

    .booking-total {
        color: #F59E0B;
        font-weight: 700;
        padding-top: 0.5rem;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
    }

    .booking-actions {
        display: flex;
        justify-content: flex-end;
        gap: 0.6rem;
        margin-top: 1.2rem;
    }

    .booking-back {
        padding: 0.6rem 1.2rem;
        border: 1px solid rgba(255, 255, 255, 0.2);
        border-radius: 999px;
        background: transparent;
        color: #CCC;
        cursor: pointer;
    }

    .booking-next {
        padding: 0.6rem 1.4rem;
        border: none;
        border-radius: 999px;
        background: #F59E0B;
        color: #1a1a1a;
        font-weight: 600;
        cursor: pointer;
    }

    .booking-next:disabled {
        opacity: 0.4;
        cursor: default;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_abbreviations_are_spanish() {
        assert_eq!(weekday_abbrev(Weekday::Mon), "Lun");
        assert_eq!(weekday_abbrev(Weekday::Sat), "Sáb");
        assert_eq!(weekday_abbrev(Weekday::Sun), "Dom");
    }

    #[test]
    fn date_strip_starts_today_and_covers_a_week() {
        let start = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        let days = upcoming_days(start);
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], start);
        assert_eq!(days[6], NaiveDate::from_ymd_opt(2026, 8, 29).unwrap());
    }
}
