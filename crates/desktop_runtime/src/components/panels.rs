//! Built-in panels hosted directly by the runtime.

use super::*;
use crate::profile::site_profile;

#[component]
/// "About This Mac": system version and the owner profile.
pub fn AboutPanel() -> impl IntoView {
    let profile = site_profile();

    view! {
        <div class="about-panel">
            <h2>{profile.system_version.clone()}</h2>
            <p>{profile.tagline.clone()}</p>
            <hr />
            <p>
                <strong>"Built By: "</strong>
                {profile.owner.clone()}
            </p>
            <p>
                <strong>"Interests: "</strong>
                {profile.interests_text()}
            </p>
            <hr />
            <p class="about-panel-footnote">
                "\u{A9} 1997 Apple Computer, Inc."
                <br />
                "(Just kidding, this is a nostalgic homage!)"
            </p>
        </div>
    }
}

#[component]
pub fn TrashPanel() -> impl IntoView {
    view! {
        <div class="trash-panel">
            <div class="trash-panel-glyph" aria-hidden="true">{AppId::Trash.glyph()}</div>
            <p>"The Trash is empty."</p>
            <p class="trash-panel-footnote">"(Nothing to see here!)"</p>
        </div>
    }
}
