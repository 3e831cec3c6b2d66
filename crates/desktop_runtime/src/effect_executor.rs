//! Drains reducer-emitted [`RuntimeEffect`]s into the host, oldest first.

use leptos::*;

use crate::{reducer::RuntimeEffect, runtime_context::DesktopRuntimeContext};

/// Empties the queue and returns its contents in emission order.
///
/// Reads through `with` so a surrounding effect subscribes to the queue; the swap leaves an empty
/// batch for actions dispatched while the drained effects run.
fn take_queued(effects: RwSignal<Vec<RuntimeEffect>>) -> Vec<RuntimeEffect> {
    if effects.with(Vec::is_empty) {
        return Vec::new();
    }
    effects.try_update(std::mem::take).unwrap_or_default()
}

pub(crate) fn install(runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        let queued = take_queued(runtime.effects);
        if queued.is_empty() {
            return;
        }
        let host = runtime.host.get_value();
        for effect in queued {
            host.run_runtime_effect(effect);
        }
    });
}
