use shared::{check_date, sanitize_field, GateError, TargetDate, DAY_MAX_LEN, MONTH_MAX_LEN, YEAR_MAX_LEN};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_transient_flag;
use crate::services::logging::Logger;

/// How long the error banner stays visible after a failed attempt
pub const ERROR_BANNER_MS: u32 = 3000;
/// Duration of the shake animation on the input fields
pub const SHAKE_MS: u32 = 500;

#[derive(Properties, PartialEq)]
pub struct DateGateProps {
    /// Fired once when the entered date matches the target
    pub on_correct: Callback<()>,
    /// Whether the gate has already accepted a correct date this session
    pub accepted: bool,
}

/// The day/month/year input gate
///
/// Collects and sanitizes the three fields, runs the check on submit, and
/// renders failure feedback locally. Success is reported upward through
/// `on_correct`; the parent drives the screen transition.
#[function_component(DateGate)]
pub fn date_gate(props: &DateGateProps) -> Html {
    let day = use_state(String::new);
    let month = use_state(String::new);
    let year = use_state(String::new);

    let day_ref = use_node_ref();
    let month_ref = use_node_ref();
    let year_ref = use_node_ref();

    let error_banner = use_transient_flag(ERROR_BANNER_MS);
    let shake = use_transient_flag(SHAKE_MS);

    // Auto-focus the day field on mount
    {
        let day_ref = day_ref.clone();
        use_effect_with((), move |_| {
            if let Some(input) = day_ref.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
            || ()
        });
    }

    // Rewrites the field in place on every keystroke: non-digits are
    // silently dropped and the value is truncated to the field's width.
    let sanitize_on_input = |state: UseStateHandle<String>, max_len: usize| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let cleaned = sanitize_field(&input.value(), max_len);
            input.set_value(&cleaned);
            state.set(cleaned);
        })
    };

    let on_day_input = sanitize_on_input(day.clone(), DAY_MAX_LEN);
    let on_month_input = sanitize_on_input(month.clone(), MONTH_MAX_LEN);
    let on_year_input = sanitize_on_input(year.clone(), YEAR_MAX_LEN);

    // Enter advances day -> month -> year; Enter in the year field submits
    let focus_next_on_enter = |next: NodeRef| {
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                if let Some(input) = next.cast::<HtmlInputElement>() {
                    let _ = input.focus();
                }
            }
        })
    };

    let on_day_keypress = focus_next_on_enter(month_ref.clone());
    let on_month_keypress = focus_next_on_enter(year_ref.clone());

    let on_submit = {
        let day = day.clone();
        let month = month.clone();
        let year = year.clone();
        let error_trigger = error_banner.trigger.clone();
        let shake_trigger = shake.trigger.clone();
        let on_correct = props.on_correct.clone();
        let accepted = props.accepted;
        Callback::from(move |_: ()| {
            if accepted {
                return;
            }
            Logger::debug_with_component(
                "date-gate",
                &format!("checking: day={} month={} year={}", *day, *month, *year),
            );
            match check_date(&day, &month, &year, &TargetDate::UNLOCK) {
                Ok(()) => {
                    on_correct.emit(());
                }
                Err(err) => {
                    match err {
                        GateError::EmptyField => {
                            Logger::warn_with_component("date-gate", "attempt with empty field")
                        }
                        GateError::DateMismatch => {
                            Logger::warn_with_component("date-gate", "wrong date entered")
                        }
                    }
                    error_trigger.emit(());
                    shake_trigger.emit(());
                }
            }
        })
    };

    let on_year_keypress = {
        let on_submit = on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_submit.emit(());
            }
        })
    };

    let on_button_click = {
        let on_submit = on_submit.clone();
        Callback::from(move |_: MouseEvent| {
            on_submit.emit(());
        })
    };

    let field_class = classes!("date-field", shake.active.then_some("shake"));

    html! {
        <div class="date-gate">
            <h1 class="gate-title">{"🔒 Enter the Date"}</h1>
            <p class="gate-hint">{"A special day opens this lock"}</p>

            <div class="date-fields">
                <input
                    ref={day_ref}
                    type="text"
                    inputmode="numeric"
                    class={field_class.clone()}
                    placeholder="DD"
                    maxlength="2"
                    value={(*day).clone()}
                    oninput={on_day_input}
                    onkeypress={on_day_keypress}
                    disabled={props.accepted}
                />
                <span class="date-separator">{"/"}</span>
                <input
                    ref={month_ref}
                    type="text"
                    inputmode="numeric"
                    class={field_class.clone()}
                    placeholder="MM"
                    maxlength="2"
                    value={(*month).clone()}
                    oninput={on_month_input}
                    onkeypress={on_month_keypress}
                    disabled={props.accepted}
                />
                <span class="date-separator">{"/"}</span>
                <input
                    ref={year_ref}
                    type="text"
                    inputmode="numeric"
                    class={field_class}
                    placeholder="YYYY"
                    maxlength="4"
                    value={(*year).clone()}
                    oninput={on_year_input}
                    onkeypress={on_year_keypress}
                    disabled={props.accepted}
                />
            </div>

            <div class={classes!("error-message", error_banner.active.then_some("show"))}>
                {"That's not the right date. Try again!"}
            </div>

            <button
                class={classes!("unlock-btn", props.accepted.then_some("success"))}
                onclick={on_button_click}
                disabled={props.accepted}
            >
                {if props.accepted { "✓ Correct!" } else { "🔓 Unlock" }}
            </button>
        </div>
    }
}
