//! Transport state for the single-track player, independent of the `<audio>` element.

use thiserror::Error;

pub(crate) const DEFAULT_TRACK_URL: &str = "/assets/audio/ff4boss.mid";
pub(crate) const DEFAULT_TRACK_NAME: &str = "Final Fantasy IV - Boss Battle";
pub(crate) const DEFAULT_VOLUME: u8 = 70;
pub(crate) const SKIP_SECONDS: f64 = 10.0;
pub(crate) const EJECT_PROMPT: &str = "Enter URL for a music file (.mp3 or .wav recommended):\n\nExample: https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3";

/// Playback failures surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// The current source failed to load or decode.
    #[error("Cannot play this audio format. Please use the Eject button to load a .mp3 or .wav file.")]
    UnsupportedFormat,
    /// The browser rejected `play()`.
    #[error("Cannot play this audio format. Please use the Eject button to load a .mp3 or .wav file. ({0})")]
    PlayRejected(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TransportCommand {
    Play,
    Pause,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlayerState {
    pub(crate) track_url: String,
    pub(crate) track_name: String,
    pub(crate) playing: bool,
    pub(crate) current_time: f64,
    pub(crate) duration: f64,
    pub(crate) volume: u8,
    pub(crate) load_error: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::with_track(DEFAULT_TRACK_URL, DEFAULT_TRACK_NAME)
    }
}

impl PlayerState {
    pub(crate) fn with_track(url: &str, name: &str) -> Self {
        Self {
            track_url: url.to_string(),
            track_name: name.to_string(),
            playing: false,
            current_time: 0.0,
            duration: 0.0,
            volume: DEFAULT_VOLUME,
            load_error: false,
        }
    }

    /// Starts with `url` when it is non-blank, otherwise with the bundled track.
    pub(crate) fn from_launch_track(url: Option<&str>) -> Self {
        match url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Self::with_track(url, track_name_from_url(url)),
            None => Self::default(),
        }
    }

    /// Flips the play state optimistically and returns the element command to run.
    pub(crate) fn toggle(&mut self) -> Result<TransportCommand, PlaybackError> {
        if self.load_error {
            return Err(PlaybackError::UnsupportedFormat);
        }
        self.playing = !self.playing;
        Ok(if self.playing {
            TransportCommand::Play
        } else {
            TransportCommand::Pause
        })
    }

    pub(crate) fn back_target(&self) -> f64 {
        (self.current_time - SKIP_SECONDS).max(0.0)
    }

    pub(crate) fn forward_target(&self) -> f64 {
        let target = self.current_time + SKIP_SECONDS;
        if self.duration.is_finite() {
            target.min(self.duration)
        } else {
            target
        }
    }

    /// Loads a new source from the eject prompt. Returns whether playback should resume.
    pub(crate) fn eject(&mut self, input: &str) -> Option<bool> {
        let url = input.trim();
        if url.is_empty() {
            return None;
        }
        let was_playing = self.playing;
        self.playing = false;
        self.load_error = false;
        self.current_time = 0.0;
        self.duration = 0.0;
        self.track_url = url.to_string();
        self.track_name = track_name_from_url(url).to_string();
        Some(was_playing)
    }

    pub(crate) fn fail(&mut self) {
        self.load_error = true;
        self.playing = false;
    }

    pub(crate) fn track_display(&self) -> String {
        if self.load_error {
            "\u{26A0} Format Not Supported - Use Eject to load MP3/WAV".to_string()
        } else {
            self.track_name.clone()
        }
    }

    pub(crate) fn time_display(&self) -> String {
        format!(
            "{} / {}",
            format_time(self.current_time),
            format_time(self.duration)
        )
    }

    pub(crate) fn status_text(&self) -> &'static str {
        if self.playing {
            "\u{25B6} Playing"
        } else {
            "\u{23F8} Stopped"
        }
    }

    pub(crate) fn format_label(&self) -> &'static str {
        format_label(&self.track_url)
    }

    /// Slider upper bound; `0` until metadata has loaded.
    pub(crate) fn seek_max(&self) -> f64 {
        if self.duration.is_finite() && self.duration > 0.0 {
            self.duration
        } else {
            0.0
        }
    }
}

fn track_name_from_url(url: &str) -> &str {
    match url.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => "Unknown Track",
    }
}

pub(crate) fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "0:00".to_string();
    }
    let total = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

fn format_label(url: &str) -> &'static str {
    if url.ends_with(".mid") {
        "MIDI"
    } else if url.ends_with(".wav") {
        "WAV"
    } else if url.ends_with(".mp3") {
        "MP3"
    } else {
        "Audio"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn time_formatting_pads_seconds_and_tolerates_nan() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.9), "1:05");
        assert_eq!(format_time(600.0), "10:00");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }

    #[test]
    fn format_label_follows_extension() {
        assert_eq!(format_label("/a/b.mid"), "MIDI");
        assert_eq!(format_label("song.wav"), "WAV");
        assert_eq!(format_label("https://x/y.mp3"), "MP3");
        assert_eq!(format_label("https://x/stream"), "Audio");
    }

    #[test]
    fn toggle_flips_play_state_until_a_load_error() {
        let mut player = PlayerState::default();
        assert_eq!(player.toggle(), Ok(TransportCommand::Play));
        assert_eq!(player.status_text(), "\u{25B6} Playing");
        assert_eq!(player.toggle(), Ok(TransportCommand::Pause));

        player.fail();
        assert_eq!(player.toggle(), Err(PlaybackError::UnsupportedFormat));
        assert!(!player.playing);
        assert_eq!(
            player.track_display(),
            "\u{26A0} Format Not Supported - Use Eject to load MP3/WAV"
        );
    }

    #[test]
    fn skipping_is_clamped_to_the_track() {
        let mut player = PlayerState::default();
        player.current_time = 4.0;
        player.duration = 12.0;
        assert_eq!(player.back_target(), 0.0);
        assert_eq!(player.forward_target(), 12.0);

        player.current_time = 30.0;
        player.duration = f64::NAN;
        assert_eq!(player.back_target(), 20.0);
        assert_eq!(player.forward_target(), 40.0);
    }

    #[test]
    fn eject_loads_trimmed_url_and_reports_resume() {
        let mut player = PlayerState::default();
        player.playing = true;
        player.load_error = true;

        assert_eq!(player.eject("  https://cdn.example/music/theme.wav "), Some(true));
        assert_eq!(player.track_url, "https://cdn.example/music/theme.wav");
        assert_eq!(player.track_name, "theme.wav");
        assert!(!player.playing);
        assert!(!player.load_error);
        assert_eq!(player.format_label(), "WAV");

        assert_eq!(player.eject("   "), None);
        assert_eq!(player.track_name, "theme.wav");
    }

    #[test]
    fn blank_eject_keeps_the_current_track_playing() {
        let mut player = PlayerState::default();
        player.playing = true;
        player.current_time = 12.0;
        let before = player.clone();

        assert_eq!(player.eject(""), None);
        assert_eq!(player.eject(" \t "), None);
        assert_eq!(player, before);
        assert_eq!(player.status_text(), "\u{25B6} Playing");
    }

    #[test]
    fn trailing_slash_urls_get_a_placeholder_name() {
        let mut player = PlayerState::default();
        assert_eq!(player.eject("https://radio.example/"), Some(false));
        assert_eq!(player.track_name, "Unknown Track");
    }

    #[test]
    fn launch_track_overrides_the_default() {
        assert_eq!(PlayerState::from_launch_track(None), PlayerState::default());
        assert_eq!(PlayerState::from_launch_track(Some(" ")), PlayerState::default());
        let player = PlayerState::from_launch_track(Some("/media/loop.mp3"));
        assert_eq!(player.track_name, "loop.mp3");
        assert_eq!(player.time_display(), "0:00 / 0:00");
        assert_eq!(player.seek_max(), 0.0);
    }
}
