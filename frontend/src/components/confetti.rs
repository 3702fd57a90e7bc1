use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Number of particles in one burst
pub const CONFETTI_COUNT: usize = 50;
/// Gap between consecutive particle starts
pub const CONFETTI_STAGGER_MS: u32 = 30;
/// How long a particle lives before it is removed
pub const CONFETTI_LIFETIME_MS: u32 = 4000;
/// Fall duration is 2s plus up to 2s of jitter
pub const CONFETTI_MIN_FALL_SECS: f64 = 2.0;
pub const CONFETTI_FALL_JITTER_SECS: f64 = 2.0;

const CONFETTI_COLORS: [&str; 5] = ["#ffd700", "#ff6b6b", "#4CAF50", "#2196F3", "#ff69b4"];

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    pub id: usize,
    /// Horizontal start position as a percentage of the viewport width
    pub left_pct: f64,
    pub color: &'static str,
    pub fall_secs: f64,
}

impl ConfettiPiece {
    /// Build a particle with randomized position, color, and fall duration
    pub fn scatter(id: usize) -> Self {
        let color_idx = (js_sys::Math::random() * CONFETTI_COLORS.len() as f64) as usize;
        ConfettiPiece {
            id,
            left_pct: js_sys::Math::random() * 100.0,
            color: CONFETTI_COLORS[color_idx.min(CONFETTI_COLORS.len() - 1)],
            fall_secs: CONFETTI_MIN_FALL_SECS + js_sys::Math::random() * CONFETTI_FALL_JITTER_SECS,
        }
    }

    fn style(&self) -> String {
        format!(
            "left: {:.2}%; background-color: {}; animation-duration: {:.2}s;",
            self.left_pct, self.color, self.fall_secs
        )
    }
}

#[derive(Default, PartialEq)]
struct Burst {
    pieces: Vec<ConfettiPiece>,
}

enum BurstAction {
    Add(ConfettiPiece),
    Remove(usize),
}

impl Reducible for Burst {
    type Action = BurstAction;

    fn reduce(self: Rc<Self>, action: BurstAction) -> Rc<Self> {
        let mut pieces = self.pieces.clone();
        match action {
            BurstAction::Add(piece) => pieces.push(piece),
            BurstAction::Remove(id) => pieces.retain(|p| p.id != id),
        }
        Rc::new(Burst { pieces })
    }
}

/// Decorative particle burst played once when the message screen appears
///
/// Particles start 30ms apart, fall for a randomized duration, and remove
/// themselves after a fixed lifetime. Fire-and-forget: once mounted the burst
/// always runs to completion.
#[function_component(Confetti)]
pub fn confetti() -> Html {
    let burst = use_reducer(Burst::default);

    {
        let burst = burst.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                for id in 0..CONFETTI_COUNT {
                    TimeoutFuture::new(CONFETTI_STAGGER_MS).await;
                    burst.dispatch(BurstAction::Add(ConfettiPiece::scatter(id)));

                    let burst = burst.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(CONFETTI_LIFETIME_MS).await;
                        burst.dispatch(BurstAction::Remove(id));
                    });
                }
            });
            || ()
        });
    }

    html! {
        <div class="confetti-layer">
            {for burst.pieces.iter().map(|piece| {
                html! {
                    <div
                        key={piece.id.to_string()}
                        class="confetti-piece"
                        style={piece.style()}
                    />
                }
            })}
        </div>
    }
}
