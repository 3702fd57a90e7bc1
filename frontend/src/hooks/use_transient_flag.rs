use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Handle returned by [`use_transient_flag`]
pub struct UseTransientFlagHandle {
    /// Whether the flag is currently raised
    pub active: bool,
    /// Raise the flag and restart its hide timer
    pub trigger: Callback<()>,
}

/// Hook for a display flag that auto-clears after a fixed delay
///
/// Each trigger raises the flag and schedules a hide `duration_ms` later.
/// Triggers are re-entrant: every one takes a ticket from a shared counter,
/// and a hide timer only fires if its ticket is still the latest, so a stale
/// timer never clears a newer flag early. Once scheduled a timer always runs
/// to completion; there is no cancellation.
#[hook]
pub fn use_transient_flag(duration_ms: u32) -> UseTransientFlagHandle {
    let active = use_state(|| false);
    let ticket_counter = use_mut_ref(|| 0u32);

    let trigger = {
        let active = active.clone();
        let ticket_counter = ticket_counter.clone();
        Callback::from(move |_: ()| {
            *ticket_counter.borrow_mut() += 1;
            let ticket = *ticket_counter.borrow();
            active.set(true);

            let active = active.clone();
            let ticket_counter = ticket_counter.clone();
            spawn_local(async move {
                TimeoutFuture::new(duration_ms).await;
                if *ticket_counter.borrow() == ticket {
                    active.set(false);
                }
            });
        })
    };

    UseTransientFlagHandle {
        active: *active,
        trigger,
    }
}
