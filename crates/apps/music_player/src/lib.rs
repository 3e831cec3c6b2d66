//! Music player: one `<audio>` element with transport, seek, volume, and eject controls.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod player;

use std::time::Duration;

use desktop_app_contract::{AppServices, NotificationChannel};
use leptos::*;
use serde_json::Value;
use system_ui::prelude::*;
use wasm_bindgen_futures::JsFuture;

pub use crate::player::PlaybackError;
use crate::player::{PlayerState, TransportCommand, EJECT_PROMPT};

const NOTIFY_TITLE: &str = "Music Player";
const RESUME_DELAY: Duration = Duration::from_millis(100);

fn report_failure(
    player: RwSignal<PlayerState>,
    notifications: NotificationChannel,
    error: PlaybackError,
) {
    logging::warn!("music player: {error}");
    player.update(|state| state.fail());
    notifications.notify(NOTIFY_TITLE, error.to_string());
}

fn start_playback(
    audio: NodeRef<html::Audio>,
    player: RwSignal<PlayerState>,
    notifications: NotificationChannel,
) {
    let Some(element) = audio.get_untracked() else {
        return;
    };
    match element.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                report_failure(
                    player,
                    notifications,
                    PlaybackError::PlayRejected(format!("{err:?}")),
                );
            }
        }),
        Err(err) => report_failure(
            player,
            notifications,
            PlaybackError::PlayRejected(format!("{err:?}")),
        ),
    }
}

fn media_time(audio: NodeRef<html::Audio>, read: fn(&web_sys::HtmlMediaElement) -> f64) -> f64 {
    audio
        .get_untracked()
        .map(|element| read(&element))
        .unwrap_or(0.0)
}

#[component]
/// Music player window content.
pub fn MusicPlayerApp(
    /// Runtime services for prompts and failure notifications.
    services: AppServices,
    /// Launch params; an optional `track` URL replaces the bundled track.
    #[prop(optional)]
    launch_params: Value,
) -> impl IntoView {
    let audio = create_node_ref::<html::Audio>();
    let player = create_rw_signal(PlayerState::from_launch_track(
        launch_params.get("track").and_then(Value::as_str),
    ));
    let notifications = services.notifications;
    let dialogs = store_value(services.dialogs.clone());

    let toggle = Callback::new(move |_| {
        let Some(outcome) = player.try_update(|state| state.toggle()) else {
            return;
        };
        match outcome {
            Ok(TransportCommand::Play) => start_playback(audio, player, notifications),
            Ok(TransportCommand::Pause) => {
                if let Some(element) = audio.get_untracked() {
                    let _ = element.pause();
                }
            }
            Err(error) => {
                logging::warn!("music player: {error}");
                notifications.notify(NOTIFY_TITLE, error.to_string());
            }
        }
    });

    let seek_to = move |seconds: f64| {
        if let Some(element) = audio.get_untracked() {
            element.set_current_time(seconds);
        }
        player.update(|state| state.current_time = seconds);
    };

    let eject = Callback::new(move |_| {
        let dialogs = dialogs.get_value();
        spawn_local(async move {
            let Some(input) = dialogs.prompt(EJECT_PROMPT, "").await else {
                return;
            };
            let Some(resume) = player.try_update(|state| state.eject(&input)).flatten() else {
                return;
            };
            if let Some(element) = audio.get_untracked() {
                let _ = element.pause();
                element.load();
            }
            if resume {
                set_timeout(
                    move || {
                        player.update(|state| state.playing = true);
                        start_playback(audio, player, notifications);
                    },
                    RESUME_DELAY,
                );
            }
        });
    });

    create_effect(move |_| {
        let volume = player.with(|state| state.volume);
        if let Some(element) = audio.get() {
            element.set_volume(f64::from(volume) / 100.0);
        }
    });

    view! {
        <div class="app-music-player">
            <audio
                node_ref=audio
                preload="metadata"
                src=move || player.with(|state| state.track_url.clone())
                on:timeupdate=move |_| {
                    let now = media_time(audio, web_sys::HtmlMediaElement::current_time);
                    player.update(|state| state.current_time = now);
                }
                on:loadedmetadata=move |_| {
                    let duration = media_time(audio, web_sys::HtmlMediaElement::duration);
                    player.update(|state| state.duration = duration);
                }
                on:ended=move |_| player.update(|state| state.playing = false)
                on:error=move |_| {
                    report_failure(player, notifications, PlaybackError::UnsupportedFormat)
                }
                on:canplay=move |_| player.update(|state| state.load_error = false)
            ></audio>

            <GroupBox caption="Now Playing:">
                <div
                    class="music-track"
                    data-ui-state=move || if player.with(|state| state.load_error) { "error" } else { "ok" }
                >
                    {move || player.with(|state| state.track_display())}
                </div>
            </GroupBox>

            <div class="music-time" aria-live="off">
                {move || player.with(|state| state.time_display())}
            </div>

            <RangeField
                layout_class="music-seek"
                aria_label="Position"
                max=Signal::derive(move || player.with(|state| state.seek_max()))
                step=0.1
                value=Signal::derive(move || player.with(|state| state.current_time))
                on_input=Callback::new(move |ev| {
                    if let Ok(seconds) = event_target_value(&ev).parse::<f64>() {
                        seek_to(seconds);
                    }
                })
            />

            <div class="music-transport" role="group" aria-label="Transport">
                <Button
                    title="Back 10 seconds"
                    on_click=Callback::new(move |_| seek_to(player.with_untracked(|state| state.back_target())))
                >
                    "\u{23EE}"
                </Button>
                <Button
                    variant=ButtonVariant::Default
                    title=Signal::derive(move || {
                        if player.with(|state| state.playing) { "Pause" } else { "Play" }.to_string()
                    })
                    on_click=toggle
                >
                    {move || if player.with(|state| state.playing) { "\u{23F8}" } else { "\u{25B6}" }}
                </Button>
                <Button title="Pause" on_click=toggle>"\u{23F8}"</Button>
                <Button
                    title="Forward 10 seconds"
                    on_click=Callback::new(move |_| seek_to(player.with_untracked(|state| state.forward_target())))
                >
                    "\u{23ED}"
                </Button>
                <Button title="Load new track" on_click=eject>"\u{23CF}"</Button>
            </div>

            <label class="music-volume">
                <span>"Volume:"</span>
                <RangeField
                    aria_label="Volume"
                    max=100.0
                    value=Signal::derive(move || f64::from(player.with(|state| state.volume)))
                    on_input=Callback::new(move |ev| {
                        if let Ok(volume) = event_target_value(&ev).parse::<u8>() {
                            player.update(|state| state.volume = volume.min(100));
                        }
                    })
                />
            </label>

            <StatusBar>
                <StatusBarItem>{move || player.with(|state| state.status_text())}</StatusBarItem>
                <StatusBarItem>{move || player.with(|state| state.format_label())}</StatusBarItem>
            </StatusBar>
        </div>
    }
}
