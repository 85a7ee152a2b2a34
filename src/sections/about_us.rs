use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::config;

#[function_component(AboutUs)]
pub fn about_us() -> Html {
    html! {
        <section id="nosotros" class="about">
            <SectionHeader
                eyebrow="Nosotros"
                title="Hecho por estudiantes que no encontraban dónde estudiar"
            />
            <div class="about-content">
                <p>
                    { format!(
                        "{} nació en 2024, después de un semestre completo peregrinando \
                         entre bibliotecas llenas, cafés ruidosos y la pieza con vecinos \
                         en remodelación. Decidimos construir el lugar que nos habría \
                         gustado tener: cápsulas individuales, silencio garantizado y \
                         precios de estudiante.",
                        config::SITE_NAME,
                    ) }
                </p>
                <p>
                    { format!(
                        "Hoy operamos 14 cápsulas en {} y seguimos siendo un equipo \
                         pequeño de la {}. Si algo no funciona, nos escribes y lo \
                         arregla una persona, no un bot.",
                        config::SITE_ADDRESS,
                        config::SITE_REGION,
                    ) }
                </p>
                <div class="about-values">
                    <div>
                        <strong>{"Silencio primero"}</strong>
                        <span>{"Cada decisión de diseño parte de ahí."}</span>
                    </div>
                    <div>
                        <strong>{"Precio justo"}</strong>
                        <span>{"Pensado para presupuesto de estudiante."}</span>
                    </div>
                    <div>
                        <strong>{"Cercanía"}</strong>
                        <span>{"Atendemos nosotros mismos, todos los días."}</span>
                    </div>
                </div>
            </div>
            <style>{r#"
                .about {
                    padding: 5rem 1.5rem;
                    background: #141414;
                }

                .about-content {
                    max-width: 720px;
                    margin: 0 auto;
                    color: #BBB;
                    line-height: 1.7;
                }

                .about-content p {
                    margin: 0 0 1.2rem;
                }

                .about-values {
                    margin-top: 2rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 1rem;
                }

                .about-values div {
                    padding: 1rem;
                    border-left: 2px solid #F59E0B;
                    display: flex;
                    flex-direction: column;
                    gap: 0.3rem;
                }

                .about-values strong {
                    color: #fff;
                    font-size: 0.95rem;
                }

                .about-values span {
                    color: #888;
                    font-size: 0.85rem;
                }
            "#}</style>
        </section>
    }
}
