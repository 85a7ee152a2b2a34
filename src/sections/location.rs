use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::config;

const MAP_EMBED_URL: &str =
    "https://www.google.com/maps?q=Av.+Alemania+0123,+Temuco,+Chile&output=embed";

#[function_component(Location)]
pub fn location() -> Html {
    html! {
        <section id="ubicacion" class="location">
            <SectionHeader
                eyebrow="Ubicación"
                title="En pleno sector universitario"
                subtitle="Llega caminando desde cualquiera de los campus del centro."
            />
            <div class="location-grid">
                <div class="location-map">
                    <iframe
                        src={MAP_EMBED_URL}
                        title="Mapa de FocusPod"
                        loading="lazy"
                        referrerpolicy="no-referrer-when-downgrade"
                    ></iframe>
                </div>
                <div class="location-info">
                    <div class="location-block">
                        <h3>{"Dirección"}</h3>
                        <p>
                            { config::SITE_ADDRESS }<br />
                            { format!("{}, {}", config::SITE_LOCATION, config::SITE_REGION) }
                        </p>
                        <a
                            class="location-directions"
                            href="https://www.google.com/maps/search/?api=1&query=Av.+Alemania+0123,+Temuco,+Chile"
                            target="_blank"
                            rel="noopener"
                        >
                            {"Cómo llegar →"}
                        </a>
                    </div>
                    <div class="location-block">
                        <h3>{"A pasos de"}</h3>
                        <ul>
                            { for config::NEARBY_PLACES.iter().map(|(place, distance)| html! {
                                <li>
                                    <span>{ *place }</span>
                                    <span class="location-distance">{ *distance }</span>
                                </li>
                            }) }
                        </ul>
                    </div>
                    <div class="location-block">
                        <h3>{"Horarios"}</h3>
                        <ul>
                            { for config::SCHEDULE.iter().map(|(days, hours)| html! {
                                <li>
                                    <span>{ *days }</span>
                                    <span class="location-distance">{ *hours }</span>
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>
            </div>
            <style>{r#"
                .location {
                    padding: 5rem 1.5rem;
                    background: #121212;
                }

                .location-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 3fr 2fr;
                    gap: 1.5rem;
                }

                .location-map iframe {
                    width: 100%;
                    height: 100%;
                    min-height: 360px;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 14px;
                    filter: grayscale(0.6) invert(0.9) hue-rotate(180deg);
                }

                .location-info {
                    display: flex;
                    flex-direction: column;
                    gap: 1.2rem;
                }

                .location-block {
                    padding: 1.2rem;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 14px;
                    background: rgba(255, 255, 255, 0.02);
                }

                .location-block h3 {
                    color: #F59E0B;
                    margin: 0 0 0.6rem;
                    font-size: 0.9rem;
                    text-transform: uppercase;
                    letter-spacing: 0.06em;
                }

                .location-block p {
                    color: #CCC;
                    margin: 0;
                    line-height: 1.6;
                }

                .location-block ul {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                }

                .location-block li {
                    display: flex;
                    justify-content: space-between;
                    color: #CCC;
                    font-size: 0.9rem;
                }

                .location-distance {
                    color: #777;
                }

                .location-directions {
                    display: inline-block;
                    margin-top: 0.7rem;
                    color: #F59E0B;
                    text-decoration: none;
                    font-size: 0.88rem;
                }

                @media (max-width: 768px) {
                    .location-grid {
                        grid-template-columns: 1fr;
                    }
                }
            "#}</style>
        </section>
    }
}
