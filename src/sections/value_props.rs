use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::effects::floating_particles::FloatingParticles;
use crate::effects::reactive_orb::ReactiveOrb;
use crate::hooks::mouse_tracking::{use_mouse_tracking, MouseTrackingOptions};

const BENEFITS: &[(&str, &str, &str)] = &[
    (
        "🔇",
        "Silencio absoluto",
        "Cápsulas insonorizadas con aislamiento acústico real, no solo promesas.",
    ),
    (
        "📶",
        "WiFi de fibra",
        "Conexión simétrica de 600 Mbps, estable incluso con todas las cápsulas ocupadas.",
    ),
    (
        "💡",
        "Luz regulable",
        "Iluminación cálida o fría según tu preferencia, sin parpadeos ni reflejos.",
    ),
    (
        "☕",
        "Café incluido",
        "Café de grano y té ilimitado mientras dure tu reserva.",
    ),
    (
        "🪑",
        "Ergonomía real",
        "Silla ergonómica y escritorio amplio en cada cápsula.",
    ),
    (
        "🕗",
        "Horario extendido",
        "Abierto de 8:00 a 22:00 entre semana, ideal para exámenes.",
    ),
];

#[function_component(ValueProps)]
pub fn value_props() -> Html {
    let tracking = use_mouse_tracking(MouseTrackingOptions {
        intensity: 0.04,
        enable_smoothing: true,
        ..Default::default()
    });
    let offset = tracking.smooth_offset;

    html! {
        <section
            id="beneficios"
            class="benefits"
            ref={tracking.container_ref.clone()}
            onmousemove={tracking.onmousemove.clone()}
        >
            <FloatingParticles count={12} color="rgba(251, 191, 36, 0.25)" />
            <ReactiveOrb
                position="top: 30%; right: 5%;"
                size_px={300}
                color="rgba(245, 158, 11, 0.1)"
                dx={offset.x}
                dy={offset.y}
            />
            <SectionHeader
                eyebrow="Beneficios"
                title="Todo pensado para concentrarte"
                subtitle="Cada detalle de las cápsulas existe para que tu única tarea sea estudiar."
            />
            <div class="benefits-grid">
                { for BENEFITS.iter().map(|(icon, title, text)| html! {
                    <div class="benefit-card">
                        <span class="benefit-icon">{ *icon }</span>
                        <h3>{ *title }</h3>
                        <p>{ *text }</p>
                    </div>
                }) }
            </div>
            <style>{r#"
                .benefits {
                    position: relative;
                    padding: 5rem 1.5rem;
                    background: #141414;
                    overflow: hidden;
                }

                .benefits-grid {
                    position: relative;
                    z-index: 1;
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.2rem;
                }

                .benefit-card {
                    padding: 1.6rem;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 14px;
                    background: rgba(255, 255, 255, 0.02);
                    transition: all 0.25s ease;
                }

                .benefit-card:hover {
                    border-color: rgba(245, 158, 11, 0.4);
                    transform: translateY(-4px);
                }

                .benefit-icon {
                    font-size: 1.8rem;
                }

                .benefit-card h3 {
                    color: #fff;
                    margin: 0.8rem 0 0.5rem;
                    font-size: 1.1rem;
                }

                .benefit-card p {
                    color: #999;
                    margin: 0;
                    font-size: 0.92rem;
                    line-height: 1.5;
                }
            "#}</style>
        </section>
    }
}
