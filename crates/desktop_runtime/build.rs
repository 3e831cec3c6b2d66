use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProfileLinks {
    github: String,
    linkedin: String,
    email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SiteProfile {
    system_version: String,
    tagline: String,
    owner: String,
    interests: Vec<String>,
    links: ProfileLinks,
}

fn validate(profile: &SiteProfile, path: &str) {
    if profile.owner.trim().is_empty() {
        panic!("profile owner must not be empty in {path}");
    }
    for (field, url) in [
        ("links.github", &profile.links.github),
        ("links.linkedin", &profile.links.linkedin),
    ] {
        if !url.starts_with("https://") {
            panic!("{field} in {path} must be an https URL, found `{url}`");
        }
    }
    if !profile.links.email.contains('@') {
        panic!(
            "links.email in {path} is not an email address: `{}`",
            profile.links.email
        );
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("profile.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let profile: SiteProfile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&profile, &path.display().to_string());

    let json = serde_json::to_string_pretty(&profile).expect("serialize site profile");
    let generated = format!(
        "/// Build-time generated site profile JSON.\n\
pub const SITE_PROFILE_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("site_profile_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
