use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::confetti::Confetti;
use components::date_gate::DateGate;
use components::message_screen::MessageScreen;
use services::logging::Logger;

/// How long the button stays in the affirmative state before the fade starts
pub const ACCEPT_HOLD_MS: u32 = 500;
/// Duration of the login screen's fade/scale-out transition
pub const FADE_OUT_MS: u32 = 800;

/// Screen lifecycle for one page load
///
/// The sequence is strictly linear and `Unlocked` is terminal: no code path
/// assigns a phase after it, so a reload is the only way back to the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenPhase {
    AwaitingInput,
    Accepted,
    FadingOut,
    Unlocked,
}

#[function_component(App)]
fn app() -> Html {
    let phase = use_state(|| ScreenPhase::AwaitingInput);

    // Runs the timed unlock sequence as one linear future rather than
    // nested timer callbacks. The gate disables itself once accepted, so
    // this fires at most once per page load.
    let on_correct = {
        let phase = phase.clone();
        Callback::from(move |_: ()| {
            Logger::info_with_component("app", "correct date entered, starting unlock sequence");
            phase.set(ScreenPhase::Accepted);
            let phase = phase.clone();
            spawn_local(async move {
                TimeoutFuture::new(ACCEPT_HOLD_MS).await;
                phase.set(ScreenPhase::FadingOut);
                TimeoutFuture::new(FADE_OUT_MS).await;
                phase.set(ScreenPhase::Unlocked);
            });
        })
    };

    if *phase == ScreenPhase::Unlocked {
        html! {
            <>
                <MessageScreen />
                <Confetti />
            </>
        }
    } else {
        html! {
            <div class={classes!(
                "login-screen",
                (*phase == ScreenPhase::FadingOut).then_some("fade-out"),
            )}>
                <DateGate
                    on_correct={on_correct}
                    accepted={*phase != ScreenPhase::AwaitingInput}
                />
            </div>
        }
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_unlock_sequence_timing() {
        // 500ms affirmative hold, then an 800ms fade
        assert_eq!(ACCEPT_HOLD_MS, 500);
        assert_eq!(FADE_OUT_MS, 800);
    }

    #[wasm_bindgen_test]
    fn test_phase_ordering_is_linear() {
        let sequence = [
            ScreenPhase::AwaitingInput,
            ScreenPhase::Accepted,
            ScreenPhase::FadingOut,
            ScreenPhase::Unlocked,
        ];
        assert_eq!(sequence.len(), 4);
        assert_ne!(sequence[0], sequence[3]);
    }
}
