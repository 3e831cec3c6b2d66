use leptos::*;
use system_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Project {
    pub(crate) id: &'static str,
    pub(crate) name: &'static str,
    pub(crate) kind: &'static str,
    pub(crate) language: &'static str,
    pub(crate) status: &'static str,
    pub(crate) description: &'static str,
    pub(crate) technologies: &'static [&'static str],
    pub(crate) completion: u16,
}

pub(crate) static PROJECTS: [Project; 5] = [
    Project {
        id: "1",
        name: "Web Framework",
        kind: "Library",
        language: "JavaScript",
        status: "Active",
        description: "A lightweight, modern web framework built from scratch with virtual DOM diffing and component lifecycle management. Focuses on simplicity and performance.",
        technologies: &["Virtual DOM", "ES6+", "Webpack", "JSX Transform"],
        completion: 75,
    },
    Project {
        id: "2",
        name: "Game Engine",
        kind: "Application",
        language: "C++",
        status: "In Progress",
        description: "2D game engine with entity-component system architecture. Includes sprite rendering, physics simulation, and audio management.",
        technologies: &["OpenGL", "SDL2", "Box2D", "FMOD"],
        completion: 45,
    },
    Project {
        id: "3",
        name: "CLI Tool",
        kind: "Utility",
        language: "Python",
        status: "Complete",
        description: "Command-line productivity tool for managing development environments and automating common workflows. Supports plugins and custom scripts.",
        technologies: &["Click", "Poetry", "Rich", "YAML"],
        completion: 100,
    },
    Project {
        id: "4",
        name: "3D Renderer",
        kind: "Research",
        language: "C++/GLSL",
        status: "Experimental",
        description: "Real-time 3D renderer exploring advanced techniques like ray marching, signed distance fields, and procedural generation.",
        technologies: &["OpenGL", "GLSL Shaders", "Math Libraries"],
        completion: 30,
    },
    Project {
        id: "5",
        name: "Parser Library",
        kind: "Library",
        language: "Rust",
        status: "Planning",
        description: "Parser combinator library with zero-copy parsing and error recovery. Designed for building custom programming languages and DSLs.",
        technologies: &["Rust", "nom", "Procedural Macros"],
        completion: 15,
    },
];

pub(crate) fn project_by_id(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}

#[component]
/// Programming projects table with a detail panel for the selected row.
pub fn ProjectsApp() -> impl IntoView {
    let selected = create_rw_signal(None::<&'static str>);

    view! {
        <div class="app-projects">
            <h3>"Programming Projects"</h3>
            <DataTable layout_class="interactive" aria_label="Projects">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Language"</th>
                        <th>"Status"</th>
                        <th>"Progress"</th>
                    </tr>
                </thead>
                <tbody>
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            let id = project.id;
                            view! {
                                <tr
                                    data-ui-selected=move || (selected.get() == Some(id)).to_string()
                                    on:click=move |_| selected.set(Some(id))
                                >
                                    <td>{format!("\u{1F4C1} {}", project.name)}</td>
                                    <td>{project.language}</td>
                                    <td>{project.status}</td>
                                    <td>
                                        <ProgressBar max=100 value=project.completion />
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </DataTable>

            {move || {
                selected
                    .get()
                    .and_then(project_by_id)
                    .map(|project| {
                        view! {
                            <GroupBox layout_class="project-details" caption=project.name>
                                <dl class="detail-list">
                                    <dt>"Type:"</dt>
                                    <dd>{project.kind}</dd>
                                    <dt>"Language:"</dt>
                                    <dd>{project.language}</dd>
                                    <dt>"Status:"</dt>
                                    <dd>{project.status}</dd>
                                    <dt>"Completion:"</dt>
                                    <dd>{format!("{}%", project.completion)}</dd>
                                </dl>
                                <p class="detail-description">{project.description}</p>
                                <strong>"Technologies:"</strong>
                                <div class="tag-list">
                                    {project
                                        .technologies
                                        .iter()
                                        .map(|tech| view! { <span class="tag">{*tech}</span> })
                                        .collect_view()}
                                </div>
                                <Button on_click=Callback::new(move |_| selected.set(None))>"Close"</Button>
                            </GroupBox>
                        }
                    })
            }}

            <p class="hint">"Click on a project to view details"</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn projects_are_looked_up_by_id() {
        assert_eq!(project_by_id("3").map(|p| p.name), Some("CLI Tool"));
        assert_eq!(project_by_id("9"), None);
    }

    #[test]
    fn completion_stays_within_progress_range() {
        assert!(PROJECTS.iter().all(|project| project.completion <= 100));
        let ids: Vec<_> = PROJECTS.iter().map(|project| project.id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }
}
