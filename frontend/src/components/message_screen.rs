use yew::prelude::*;

/// The hidden surface revealed after the gate unlocks
#[function_component(MessageScreen)]
pub fn message_screen() -> Html {
    html! {
        <div class="message-screen show">
            <div class="message-card">
                <h1 class="message-title">{"🎉 You found it!"}</h1>
                <p class="message-text">
                    {"June 26th, 2005 — a day worth remembering."}
                </p>
                <p class="message-text">
                    {"This little page was locked just for you. 💛"}
                </p>
            </div>
        </div>
    }
}
