use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-col footer-brand">
                    <div class="footer-logo">
                        <span class="footer-logo-mark">{"◉"}</span>
                        { config::SITE_NAME }
                    </div>
                    <p>{ config::SITE_TAGLINE }</p>
                    <p class="footer-muted">
                        { format!("{}, {}", config::SITE_LOCATION, config::SITE_COUNTRY) }
                    </p>
                    <div class="footer-social">
                        <a href={config::SITE_INSTAGRAM} target="_blank" rel="noopener">{"Instagram"}</a>
                        <a href={config::SITE_TIKTOK} target="_blank" rel="noopener">{"TikTok"}</a>
                    </div>
                </div>
                <div class="footer-col">
                    <h4>{"Navegación"}</h4>
                    { for config::FOOTER_NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href}>{ *label }</a>
                    }) }
                </div>
                <div class="footer-col">
                    <h4>{"Contacto"}</h4>
                    <a href={format!("mailto:{}", config::SITE_EMAIL)}>{ config::SITE_EMAIL }</a>
                    <a href={config::tel_href()}>{ config::SITE_PHONE }</a>
                    <span class="footer-muted">
                        { format!("{}, {}", config::SITE_ADDRESS, config::SITE_LOCATION) }
                    </span>
                </div>
                <div class="footer-col">
                    <h4>{"Horarios"}</h4>
                    { for config::SCHEDULE.iter().map(|(days, hours)| html! {
                        <span class="footer-muted">{ format!("{days}: {hours}") }</span>
                    }) }
                </div>
            </div>
            <div class="footer-bottom">
                <span>{ format!("© 2026 {}. Todos los derechos reservados.", config::SITE_NAME) }</span>
                <div class="footer-legal">
                    { for config::FOOTER_LEGAL_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href}>{ *label }</a>
                    }) }
                </div>
            </div>
            <style>{r#"
                .site-footer {
                    background: #111;
                    border-top: 1px solid rgba(245, 158, 11, 0.12);
                    padding: 3rem 1.5rem 1.5rem;
                    color: #CCC;
                }

                .footer-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr 1fr;
                    gap: 2rem;
                }

                .footer-col {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .footer-col h4 {
                    color: #fff;
                    margin: 0 0 0.5rem;
                    font-size: 0.95rem;
                }

                .footer-col a {
                    color: #999;
                    text-decoration: none;
                    font-size: 0.88rem;
                    transition: color 0.2s ease;
                }

                .footer-col a:hover {
                    color: #F59E0B;
                }

                .footer-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #fff;
                    font-size: 1.2rem;
                    font-weight: 700;
                }

                .footer-logo-mark {
                    color: #F59E0B;
                }

                .footer-muted {
                    color: #777;
                    font-size: 0.85rem;
                }

                .footer-social {
                    display: flex;
                    gap: 1rem;
                    margin-top: 0.5rem;
                }

                .footer-bottom {
                    max-width: 1200px;
                    margin: 2.5rem auto 0;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                    display: flex;
                    justify-content: space-between;
                    flex-wrap: wrap;
                    gap: 1rem;
                    font-size: 0.8rem;
                    color: #777;
                }

                .footer-legal {
                    display: flex;
                    gap: 1.5rem;
                }

                .footer-legal a {
                    color: #777;
                    text-decoration: none;
                }

                .footer-legal a:hover {
                    color: #F59E0B;
                }

                @media (max-width: 768px) {
                    .footer-content {
                        grid-template-columns: 1fr 1fr;
                    }
                }
            "#}</style>
        </footer>
    }
}
