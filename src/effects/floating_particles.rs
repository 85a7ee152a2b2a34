//! Slowly drifting dots layered behind a section. Purely cosmetic, so
//! their placement is randomized once on mount and never re-rolled.

use web_sys::js_sys;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FloatingParticlesProps {
    #[prop_or(18)]
    pub count: usize,
    /// Particle color, any CSS color value.
    #[prop_or(AttrValue::Static("rgba(245, 158, 11, 0.35)"))]
    pub color: AttrValue,
}

#[derive(Clone, PartialEq)]
struct Particle {
    left_pct: f64,
    top_pct: f64,
    size_px: f64,
    duration_s: f64,
    delay_s: f64,
}

fn random_in(min: f64, max: f64) -> f64 {
    min + js_sys::Math::random() * (max - min)
}

#[function_component(FloatingParticles)]
pub fn floating_particles(props: &FloatingParticlesProps) -> Html {
    let particles = use_state(|| {
        (0..props.count)
            .map(|_| Particle {
                left_pct: random_in(0.0, 100.0),
                top_pct: random_in(0.0, 100.0),
                size_px: random_in(2.0, 6.0),
                duration_s: random_in(8.0, 20.0),
                delay_s: random_in(0.0, 8.0),
            })
            .collect::<Vec<_>>()
    });

    html! {
        <div class="particles-layer" aria-hidden="true">
            { for particles.iter().map(|p| {
                let style = format!(
                    "left: {:.1}%; top: {:.1}%; width: {:.1}px; height: {:.1}px; \
                     background: {}; animation-duration: {:.1}s; animation-delay: {:.1}s;",
                    p.left_pct, p.top_pct, p.size_px, p.size_px, props.color, p.duration_s, p.delay_s,
                );
                html! { <span class="particle" {style}></span> }
            }) }
            <style>{r#"
                .particles-layer {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                }

                .particle {
                    position: absolute;
                    border-radius: 50%;
                    animation-name: particle-drift;
                    animation-timing-function: ease-in-out;
                    animation-iteration-count: infinite;
                }

                @keyframes particle-drift {
                    0%, 100% {
                        transform: translate(0, 0);
                        opacity: 0.3;
                    }
                    50% {
                        transform: translate(12px, -26px);
                        opacity: 0.9;
                    }
                }

                .reduce-motion .particle {
                    animation: none;
                }
            "#}</style>
        </div>
    }
}
