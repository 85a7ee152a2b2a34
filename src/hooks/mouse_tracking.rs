//! Pointer tracking relative to a container's center, optionally
//! smoothed through the spring in [`crate::hooks::spring`]. Drives the
//! hero parallax and the magnetic reserve button.

use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::hooks::spring::{centered_offset, SpringConfig};

const SMOOTHING_TICK_MS: u32 = 16;
const SMOOTHING_DT: f64 = 0.016;
/// Below this distance the smoothed value snaps to the target and the
/// ticker stops causing re-renders.
const REST_EPSILON: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseTrackingOptions {
    /// Multiplier on the raw center distance. 1.0 is the pointer itself,
    /// 0.2 gives the subtle magnetic pull.
    pub intensity: f64,
    pub enable_smoothing: bool,
    pub spring: SpringConfig,
}

impl Default for MouseTrackingOptions {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            enable_smoothing: false,
            spring: SpringConfig::default(),
        }
    }
}

pub struct MouseTracking {
    /// Attach to the tracked container. Falls back to the event's
    /// current target when left unattached.
    pub container_ref: NodeRef,
    pub offset: PointerOffset,
    /// Equals `offset` when smoothing is off.
    pub smooth_offset: PointerOffset,
    pub onmousemove: Callback<MouseEvent>,
}

#[hook]
pub fn use_mouse_tracking(options: MouseTrackingOptions) -> MouseTracking {
    let container_ref = use_node_ref();
    let offset = use_state_eq(PointerOffset::default);
    let smooth_offset = use_state_eq(PointerOffset::default);
    // Spring target and (value, velocity) per axis, shared with the
    // ticker without re-rendering on every pointer event.
    let target = use_mut_ref(PointerOffset::default);
    let motion = use_mut_ref(|| ((0.0f64, 0.0f64), (0.0f64, 0.0f64)));

    {
        let smooth_offset = smooth_offset.clone();
        let target = target.clone();
        let motion = motion.clone();
        use_effect_with_deps(
            move |(enabled, spring)| {
                let mut ticker = None;
                if *enabled {
                    let spring = *spring;
                    ticker = Some(Interval::new(SMOOTHING_TICK_MS, move || {
                        let goal = *target.borrow();
                        let mut state = motion.borrow_mut();
                        let ((mut x, mut vx), (mut y, mut vy)) = *state;
                        (x, vx) = spring.step(x, vx, goal.x, SMOOTHING_DT);
                        (y, vy) = spring.step(y, vy, goal.y, SMOOTHING_DT);
                        if (x - goal.x).abs() < REST_EPSILON
                            && (y - goal.y).abs() < REST_EPSILON
                            && vx.abs() < REST_EPSILON
                            && vy.abs() < REST_EPSILON
                        {
                            (x, vx) = (goal.x, 0.0);
                            (y, vy) = (goal.y, 0.0);
                        }
                        *state = ((x, vx), (y, vy));
                        drop(state);
                        smooth_offset.set(PointerOffset { x, y });
                    }));
                }
                move || drop(ticker)
            },
            (options.enable_smoothing, options.spring),
        );
    }

    let onmousemove = {
        let container_ref = container_ref.clone();
        let offset = offset.clone();
        let smooth_offset = smooth_offset.clone();
        let target = target.clone();
        let intensity = options.intensity;
        let smoothing = options.enable_smoothing;
        Callback::from(move |e: MouseEvent| {
            let element = container_ref
                .cast::<Element>()
                .or_else(|| e.current_target().and_then(|t| t.dyn_into::<Element>().ok()));
            let Some(element) = element else { return };
            let rect = element.get_bounding_client_rect();
            let center_x = rect.left() + rect.width() / 2.0;
            let center_y = rect.top() + rect.height() / 2.0;
            let (x, y) = centered_offset(
                f64::from(e.client_x()),
                f64::from(e.client_y()),
                center_x,
                center_y,
                intensity,
            );
            let next = PointerOffset { x, y };
            offset.set(next);
            if smoothing {
                *target.borrow_mut() = next;
            } else {
                smooth_offset.set(next);
            }
        })
    };

    MouseTracking {
        container_ref,
        offset: *offset,
        smooth_offset: *smooth_offset,
        onmousemove,
    }
}
