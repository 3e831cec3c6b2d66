//! Owner profile embedded at build time from `profile.toml`.

use std::sync::OnceLock;

use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

include!(concat!(env!("OUT_DIR"), "/site_profile_generated.rs"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// External profile links used by the Links menu.
pub struct ProfileLinks {
    /// GitHub profile URL.
    pub github: String,
    /// LinkedIn profile URL.
    pub linkedin: String,
    /// Contact address (without the `mailto:` scheme).
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Site owner profile rendered by the About panel.
pub struct SiteProfile {
    /// Simulated system version line.
    pub system_version: String,
    /// Homepage tagline.
    pub tagline: String,
    /// Owner description.
    pub owner: String,
    /// Owner interests, rendered comma-separated.
    pub interests: Vec<String>,
    /// External links.
    pub links: ProfileLinks,
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            system_version: "Mac OS System 7.5.3".to_string(),
            tagline: "Personal Homepage v1.0".to_string(),
            owner: "A Late-90s/Early-2000s Programmer".to_string(),
            interests: vec![
                "Programming".to_string(),
                "Tabletop Gaming".to_string(),
                "Video Games".to_string(),
            ],
            links: ProfileLinks {
                github: "https://github.com".to_string(),
                linkedin: "https://linkedin.com".to_string(),
                email: "example@example.com".to_string(),
            },
        }
    }
}

impl SiteProfile {
    /// `mailto:` URL for the "Email Me" command.
    pub fn mailto_url(&self) -> String {
        format!("mailto:{}", self.links.email)
    }

    pub fn interests_text(&self) -> String {
        self.interests.join(", ")
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Profile decoding failures.
pub enum ProfileError {
    /// The embedded JSON did not match [`SiteProfile`].
    #[error("profile decode failed: {0}")]
    Decode(String),
    /// The contact address cannot form a `mailto:` link.
    #[error("profile email `{0}` is not an email address")]
    InvalidEmail(String),
}

/// Decodes and validates a profile document.
///
/// # Errors
///
/// Returns [`ProfileError`] when the JSON is malformed or the email is unusable.
pub fn decode_profile(json: &str) -> Result<SiteProfile, ProfileError> {
    let profile: SiteProfile =
        serde_json::from_str(json).map_err(|err| ProfileError::Decode(err.to_string()))?;
    if !profile.links.email.contains('@') {
        return Err(ProfileError::InvalidEmail(profile.links.email));
    }
    Ok(profile)
}

/// Returns the embedded site profile, falling back to built-in defaults on decode failure.
pub fn site_profile() -> &'static SiteProfile {
    static PROFILE: OnceLock<SiteProfile> = OnceLock::new();
    PROFILE.get_or_init(|| match decode_profile(SITE_PROFILE_JSON) {
        Ok(profile) => profile,
        Err(err) => {
            logging::warn!("{err}; using default site profile");
            SiteProfile::default()
        }
    })
}
