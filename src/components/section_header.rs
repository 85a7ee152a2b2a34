//! Shared eyebrow/title/subtitle block every landing section opens with.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub eyebrow: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section-header">
            <span class="section-eyebrow">{ props.eyebrow.clone() }</span>
            <h2>{ props.title.clone() }</h2>
            if let Some(subtitle) = &props.subtitle {
                <p>{ subtitle.clone() }</p>
            }
            <style>{r#"
                .section-header {
                    text-align: center;
                    max-width: 640px;
                    margin: 0 auto 3rem;
                }

                .section-eyebrow {
                    display: inline-block;
                    padding: 0.3rem 1rem;
                    border: 1px solid rgba(245, 158, 11, 0.3);
                    border-radius: 999px;
                    color: #F59E0B;
                    font-size: 0.78rem;
                    letter-spacing: 0.08em;
                    text-transform: uppercase;
                    margin-bottom: 1rem;
                }

                .section-header h2 {
                    color: #fff;
                    font-size: clamp(1.8rem, 4vw, 2.6rem);
                    margin: 0 0 0.8rem;
                }

                .section-header p {
                    color: #999;
                    font-size: 1.05rem;
                    margin: 0;
                }
            "#}</style>
        </div>
    }
}
