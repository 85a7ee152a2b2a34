use yew::prelude::*;

use crate::components::section_header::SectionHeader;

struct Article {
    tag: &'static str,
    title: &'static str,
    excerpt: &'static str,
    read_minutes: u8,
}

const ARTICLES: &[Article] = &[
    Article {
        tag: "Técnicas",
        title: "Pomodoro en serio: cómo usarlo sin engañarte",
        excerpt: "Los 25 minutos no son mágicos. Lo que importa es qué haces en la pausa y dónde dejas el teléfono.",
        read_minutes: 6,
    },
    Article {
        tag: "Ciencia",
        title: "Por qué el ruido de fondo destruye tu memoria de trabajo",
        excerpt: "Un repaso a la evidencia sobre ruido intermitente y retención, y por qué los audífonos no bastan.",
        read_minutes: 8,
    },
    Article {
        tag: "Temuco",
        title: "Guía de supervivencia para la semana de exámenes en la UFRO",
        excerpt: "Horarios, lugares y rutinas que funcionan cuando la biblioteca colapsa.",
        read_minutes: 5,
    },
];

#[function_component(BlogPreview)]
pub fn blog_preview() -> Html {
    html! {
        <section id="blog" class="blog-preview">
            <SectionHeader
                eyebrow="Blog"
                title="Ideas para estudiar mejor"
                subtitle="Publicamos guías cortas sobre concentración y técnicas de estudio."
            />
            <div class="blog-grid">
                { for ARTICLES.iter().map(|article| html! {
                    <article class="blog-card">
                        <span class="blog-tag">{ article.tag }</span>
                        <h3>{ article.title }</h3>
                        <p>{ article.excerpt }</p>
                        <span class="blog-meta">
                            { format!("{} min de lectura", article.read_minutes) }
                        </span>
                    </article>
                }) }
            </div>
            <style>{r#"
                .blog-preview {
                    padding: 5rem 1.5rem;
                    background: #121212;
                }

                .blog-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.2rem;
                }

                .blog-card {
                    padding: 1.6rem;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 14px;
                    background: rgba(255, 255, 255, 0.02);
                    display: flex;
                    flex-direction: column;
                    gap: 0.7rem;
                    cursor: pointer;
                    transition: all 0.25s ease;
                }

                .blog-card:hover {
                    border-color: rgba(245, 158, 11, 0.4);
                    transform: translateY(-4px);
                }

                .blog-tag {
                    align-self: flex-start;
                    padding: 0.2rem 0.7rem;
                    border-radius: 999px;
                    background: rgba(245, 158, 11, 0.12);
                    color: #F59E0B;
                    font-size: 0.72rem;
                }

                .blog-card h3 {
                    color: #fff;
                    margin: 0;
                    font-size: 1.05rem;
                    line-height: 1.4;
                }

                .blog-card p {
                    color: #999;
                    margin: 0;
                    font-size: 0.9rem;
                    line-height: 1.5;
                    flex: 1;
                }

                .blog-meta {
                    color: #777;
                    font-size: 0.78rem;
                }
            "#}</style>
        </section>
    }
}
