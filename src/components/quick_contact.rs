//! Expandable contact fab: WhatsApp, phone and email shortcuts.

use yew::prelude::*;

use crate::{booking, config};

#[function_component(QuickContact)]
pub fn quick_contact() -> Html {
    let open = use_state(|| false);

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    html! {
        <div class="contact-fab-group">
            if *open {
                <div class="contact-options">
                    <a
                        class="contact-option whatsapp"
                        href={booking::contact_url()}
                        target="_blank"
                        rel="noopener"
                    >
                        {"💬 WhatsApp"}
                    </a>
                    <a class="contact-option" href={config::tel_href()}>
                        {"📞 Llamar"}
                    </a>
                    <a class="contact-option" href={format!("mailto:{}", config::SITE_EMAIL)}>
                        {"✉ Correo"}
                    </a>
                </div>
            }
            <button class="contact-fab" onclick={toggle} aria-label="Contacto rápido">
                { if *open { "✕" } else { "💬" } }
            </button>
            <style>{r#"
                .contact-fab-group {
                    position: fixed;
                    bottom: 6rem;
                    right: 2rem;
                    z-index: 90;
                    display: flex;
                    flex-direction: column;
                    align-items: flex-end;
                    gap: 0.6rem;
                }

                .contact-fab {
                    width: 3rem;
                    height: 3rem;
                    border: 1px solid rgba(245, 158, 11, 0.4);
                    border-radius: 50%;
                    background: rgba(30, 30, 30, 0.9);
                    color: #F59E0B;
                    font-size: 1.1rem;
                    cursor: pointer;
                    backdrop-filter: blur(10px);
                    transition: transform 0.2s ease;
                }

                .contact-fab:hover {
                    transform: scale(1.06);
                }

                .contact-options {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                }

                .contact-option {
                    padding: 0.55rem 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    border-radius: 999px;
                    background: rgba(30, 30, 30, 0.95);
                    color: #fff;
                    font-size: 0.85rem;
                    text-decoration: none;
                    white-space: nowrap;
                    transition: border-color 0.2s ease;
                }

                .contact-option:hover {
                    border-color: #F59E0B;
                }

                .contact-option.whatsapp {
                    border-color: rgba(37, 211, 102, 0.5);
                }
            "#}</style>
        </div>
    }
}
