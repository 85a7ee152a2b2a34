//! Blurred glow blob that shifts with the pointer offset fed by its
//! parent. The parent owns the tracking; the orb only renders.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReactiveOrbProps {
    /// CSS positioning of the orb's anchor inside the parent.
    #[prop_or(AttrValue::Static("top: 20%; left: 10%;"))]
    pub position: AttrValue,
    #[prop_or(320)]
    pub size_px: u32,
    #[prop_or(AttrValue::Static("rgba(245, 158, 11, 0.18)"))]
    pub color: AttrValue,
    /// Pointer offset, already intensity-scaled.
    #[prop_or_default]
    pub dx: f64,
    #[prop_or_default]
    pub dy: f64,
    #[prop_or(false)]
    pub pulse: bool,
}

#[function_component(ReactiveOrb)]
pub fn reactive_orb(props: &ReactiveOrbProps) -> Html {
    let class = if props.pulse { "reactive-orb pulse" } else { "reactive-orb" };
    let style = format!(
        "{} width: {}px; height: {}px; background: {}; \
         transform: translate3d({:.1}px, {:.1}px, 0);",
        props.position, props.size_px, props.size_px, props.color, props.dx, props.dy,
    );

    html! {
        <div {class} {style} aria-hidden="true">
            <style>{r#"
                .reactive-orb {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(60px);
                    pointer-events: none;
                    transition: transform 0.2s ease-out;
                }

                .reactive-orb.pulse {
                    animation: orb-pulse 6s ease-in-out infinite;
                }

                @keyframes orb-pulse {
                    0%, 100% { opacity: 0.7; }
                    50% { opacity: 1; }
                }

                .reduce-motion .reactive-orb {
                    transition: none;
                    animation: none;
                }
            "#}</style>
        </div>
    }
}
