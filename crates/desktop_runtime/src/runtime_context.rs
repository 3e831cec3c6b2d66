//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container and the runtime effect queue. UI composition
//! stays in [`crate::components`].

use leptos::*;
use platform_host::HostServices;

use crate::{
    deep_link::DeepLinkState,
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the effect executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

/// Reduces `action` against the signals, writing back only what changed.
fn apply_action(
    state: RwSignal<DesktopState>,
    interaction: RwSignal<InteractionState>,
    effects: RwSignal<Vec<RuntimeEffect>>,
    action: DesktopAction,
) {
    let mut desktop = state.get_untracked();
    let mut ui = interaction.get_untracked();
    let previous_desktop = desktop.clone();
    let previous_ui = ui.clone();

    let new_effects = reduce_desktop(&mut desktop, &mut ui, action);
    if desktop != previous_desktop {
        state.set(desktop);
    }
    if ui != previous_ui {
        interaction.set(ui);
    }
    if !new_effects.is_empty() {
        effects.update(|queue| queue.extend(new_effects));
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and applies the boot deep link.
pub fn DesktopProvider(
    /// Injected host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Windows to open at boot.
    #[prop(optional)]
    deep_link: DeepLinkState,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::new(host_services));
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        apply_action(state, interaction, effects, action);
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);

    if !deep_link.is_empty() {
        runtime.dispatch_action(DesktopAction::ApplyDeepLink { deep_link });
    }

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        menus::MenuCommand,
        model::{AppId, WindowId},
    };

    #[test]
    fn apply_action_reduces_into_signals_and_queues_effects() {
        let runtime = create_runtime();
        let state = create_rw_signal(DesktopState::default());
        let interaction = create_rw_signal(InteractionState::default());
        let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

        apply_action(
            state,
            interaction,
            effects,
            DesktopAction::ActivateApp {
                app_id: AppId::Trash,
            },
        );
        apply_action(
            state,
            interaction,
            effects,
            DesktopAction::ActivateMenuCommand {
                command: MenuCommand::Restart,
            },
        );
        apply_action(
            state,
            interaction,
            effects,
            DesktopAction::ActivateMenuCommand {
                command: MenuCommand::ShutDown,
            },
        );

        assert_eq!(
            state.get_untracked().focused_window_id(),
            Some(WindowId::from("trash"))
        );
        assert_eq!(
            effects.get_untracked(),
            vec![
                RuntimeEffect::Reload,
                RuntimeEffect::Log("Goodbye!".to_string())
            ]
        );
        assert_eq!(interaction.get_untracked(), InteractionState::default());
        runtime.dispose();
    }
}
