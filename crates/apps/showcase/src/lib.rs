//! Read-only portfolio windows: programming projects, the video game library, and tabletop
//! campaigns.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod games;
mod projects;
mod tabletop;

pub use games::VideoGamesApp;
pub use projects::ProjectsApp;
pub use tabletop::TabletopApp;
