use yew::prelude::*;

use crate::components::section_header::SectionHeader;

const FAQS: &[(&str, &str)] = &[
    (
        "¿Necesito reservar con anticipación?",
        "No es obligatorio, pero sí recomendable en época de exámenes. La reserva por WhatsApp toma menos de un minuto y te asegura la cápsula.",
    ),
    (
        "¿Qué incluye el precio?",
        "Cápsula privada insonorizada, escritorio, silla ergonómica, WiFi de fibra, café y té ilimitado y acceso a lockers. Sin cargos extra.",
    ),
    (
        "¿Puedo salir y volver a entrar durante mi reserva?",
        "Sí, tu cápsula queda asignada durante todo el bloque reservado. Puedes salir a almorzar y volver sin perderla.",
    ),
    (
        "¿Hay enchufes y puedo cargar mi notebook?",
        "Cada cápsula tiene cuatro enchufes y un puerto USB-C de carga rápida.",
    ),
    (
        "¿Qué pasa si llego tarde?",
        "Guardamos tu cápsula 15 minutos. Pasado ese tiempo la liberamos, pero puedes reagendar sin costo avisando por WhatsApp.",
    ),
    (
        "¿Puedo estudiar en grupo?",
        "Las cápsulas son individuales, pero puedes reservar hasta 5 contiguas. Para trabajos en grupo con conversación tenemos una sala aparte.",
    ),
    (
        "¿Cómo cancelo una reserva?",
        "Escríbenos por WhatsApp hasta 2 horas antes y anulamos sin costo. Con menos anticipación se cobra el 50% del bloque.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    is_open: bool,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <div class={classes!("faq-item", props.is_open.then_some("open"))}>
            <button class="faq-question" onclick={props.on_toggle.clone()}>
                { props.question.clone() }
                <span class="faq-chevron">{ if props.is_open { "−" } else { "+" } }</span>
            </button>
            if props.is_open {
                <p class="faq-answer">{ props.answer.clone() }</p>
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    // Single-open accordion; clicking the open question closes it.
    let open_index = use_state(|| None::<usize>);

    html! {
        <section id="faq" class="faq">
            <SectionHeader
                eyebrow="FAQ"
                title="Preguntas frecuentes"
            />
            <div class="faq-list">
                { for FAQS.iter().enumerate().map(|(i, (question, answer))| {
                    let on_toggle = {
                        let open_index = open_index.clone();
                        Callback::from(move |_: MouseEvent| {
                            open_index.set(if *open_index == Some(i) { None } else { Some(i) });
                        })
                    };
                    html! {
                        <FaqItem
                            question={*question}
                            answer={*answer}
                            is_open={*open_index == Some(i)}
                            {on_toggle}
                        />
                    }
                }) }
            </div>
            <style>{r#"
                .faq {
                    padding: 5rem 1.5rem;
                    background: #141414;
                }

                .faq-list {
                    max-width: 720px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 0.6rem;
                }

                .faq-item {
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 12px;
                    background: rgba(255, 255, 255, 0.02);
                    overflow: hidden;
                    transition: border-color 0.2s ease;
                }

                .faq-item.open {
                    border-color: rgba(245, 158, 11, 0.4);
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem 1.2rem;
                    border: none;
                    background: none;
                    color: #fff;
                    font-size: 0.95rem;
                    text-align: left;
                    cursor: pointer;
                }

                .faq-chevron {
                    color: #F59E0B;
                    font-size: 1.2rem;
                }

                .faq-answer {
                    margin: 0;
                    padding: 0 1.2rem 1.1rem;
                    color: #999;
                    font-size: 0.9rem;
                    line-height: 1.6;
                }
            "#}</style>
        </section>
    }
}
