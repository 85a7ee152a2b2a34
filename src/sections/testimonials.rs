use yew::prelude::*;

use crate::components::section_header::SectionHeader;

struct Testimonial {
    name: &'static str,
    detail: &'static str,
    quote: &'static str,
    stars: u8,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Valentina M.",
        detail: "Medicina, UFRO",
        quote: "Preparé el examen de grado completo acá. El silencio es de verdad, no como en la biblioteca en época de pruebas.",
        stars: 5,
    },
    Testimonial {
        name: "Joaquín R.",
        detail: "Ingeniería Civil, UCT",
        quote: "Reservo dos horas entre clases y rindo más que en toda una tarde en mi casa. El café ayuda bastante.",
        stars: 5,
    },
    Testimonial {
        name: "Camila P.",
        detail: "Derecho, U. Autónoma",
        quote: "La cápsula del día completo sale más barata que tres cafés en un café con ruido. Y sin nadie conversando al lado.",
        stars: 4,
    },
    Testimonial {
        name: "Matías S.",
        detail: "Teletrabajo",
        quote: "No soy estudiante, pero para reuniones importantes es lejos el lugar más tranquilo de Temuco.",
        stars: 5,
    },
];

fn stars(count: u8) -> String {
    "★".repeat(usize::from(count)) + &"☆".repeat(usize::from(5 - count.min(5)))
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section id="testimonios" class="testimonials">
            <SectionHeader
                eyebrow="Testimonios"
                title="Lo que dicen quienes ya estudian aquí"
            />
            <div class="testimonials-grid">
                { for TESTIMONIALS.iter().map(|t| html! {
                    <figure class="testimonial-card">
                        <span class="testimonial-stars">{ stars(t.stars) }</span>
                        <blockquote>{ t.quote }</blockquote>
                        <figcaption>
                            <strong>{ t.name }</strong>
                            <span>{ t.detail }</span>
                        </figcaption>
                    </figure>
                }) }
            </div>
            <style>{r#"
                .testimonials {
                    padding: 5rem 1.5rem;
                    background: #141414;
                }

                .testimonials-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
                    gap: 1.2rem;
                }

                .testimonial-card {
                    margin: 0;
                    padding: 1.6rem;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 14px;
                    background: rgba(255, 255, 255, 0.02);
                    display: flex;
                    flex-direction: column;
                    gap: 0.8rem;
                }

                .testimonial-stars {
                    color: #F59E0B;
                    letter-spacing: 2px;
                }

                .testimonial-card blockquote {
                    margin: 0;
                    color: #CCC;
                    font-size: 0.92rem;
                    line-height: 1.55;
                    font-style: italic;
                }

                .testimonial-card figcaption {
                    display: flex;
                    flex-direction: column;
                    gap: 0.1rem;
                }

                .testimonial-card strong {
                    color: #fff;
                    font-size: 0.9rem;
                }

                .testimonial-card figcaption span {
                    color: #777;
                    font-size: 0.8rem;
                }
            "#}</style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_strings_pad_to_five() {
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(0), "☆☆☆☆☆");
    }
}
