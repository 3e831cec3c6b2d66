//! Static menu bar model: menu titles, their entries, and the commands entries run.

use serde::{Deserialize, Serialize};

use crate::model::AppId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuId {
    System,
    Projects,
    Applications,
    Links,
}

impl MenuId {
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::System => "menu-system",
            Self::Projects => "menu-projects",
            Self::Applications => "menu-applications",
            Self::Links => "menu-links",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileLink {
    GitHub,
    LinkedIn,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuCommand {
    /// Open (or raise) an application window.
    OpenApp(AppId),
    ControlPanels,
    Restart,
    ShutDown,
    OpenLink(ProfileLink),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Command {
        label: &'static str,
        command: MenuCommand,
    },
    Separator,
}

const fn item(label: &'static str, command: MenuCommand) -> MenuEntry {
    MenuEntry::Command { label, command }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSpec {
    pub id: MenuId,
    pub title: &'static str,
    pub entries: &'static [MenuEntry],
}

static SYSTEM_ENTRIES: [MenuEntry; 6] = [
    item("About This Mac", MenuCommand::OpenApp(AppId::About)),
    MenuEntry::Separator,
    item("Control Panels", MenuCommand::ControlPanels),
    MenuEntry::Separator,
    item("Restart", MenuCommand::Restart),
    item("Shut Down", MenuCommand::ShutDown),
];

static PROJECTS_ENTRIES: [MenuEntry; 3] = [
    item("Programming", MenuCommand::OpenApp(AppId::Projects)),
    item("Tabletop", MenuCommand::OpenApp(AppId::Tabletop)),
    item("Video Games", MenuCommand::OpenApp(AppId::VideoGames)),
];

static APPLICATIONS_ENTRIES: [MenuEntry; 3] = [
    item("SimpleText", MenuCommand::OpenApp(AppId::TextEditor)),
    item("Calculator", MenuCommand::OpenApp(AppId::Calculator)),
    item("Music Player", MenuCommand::OpenApp(AppId::MusicPlayer)),
];

static LINKS_ENTRIES: [MenuEntry; 4] = [
    item("GitHub", MenuCommand::OpenLink(ProfileLink::GitHub)),
    item("LinkedIn", MenuCommand::OpenLink(ProfileLink::LinkedIn)),
    MenuEntry::Separator,
    item("Email Me", MenuCommand::OpenLink(ProfileLink::Email)),
];

static MENU_BAR: [MenuSpec; 4] = [
    MenuSpec {
        id: MenuId::System,
        title: "System",
        entries: &SYSTEM_ENTRIES,
    },
    MenuSpec {
        id: MenuId::Projects,
        title: "Projects",
        entries: &PROJECTS_ENTRIES,
    },
    MenuSpec {
        id: MenuId::Applications,
        title: "Applications",
        entries: &APPLICATIONS_ENTRIES,
    },
    MenuSpec {
        id: MenuId::Links,
        title: "Links",
        entries: &LINKS_ENTRIES,
    },
];

/// Menus in menu-bar order.
pub fn menu_bar() -> &'static [MenuSpec] {
    &MENU_BAR
}

pub fn menu_spec(id: MenuId) -> &'static MenuSpec {
    match id {
        MenuId::System => &MENU_BAR[0],
        MenuId::Projects => &MENU_BAR[1],
        MenuId::Applications => &MENU_BAR[2],
        MenuId::Links => &MENU_BAR[3],
    }
}

/// Next open menu after clicking `clicked`'s title.
pub fn toggled_menu(open: Option<MenuId>, clicked: MenuId) -> Option<MenuId> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn labels(id: MenuId) -> Vec<&'static str> {
        menu_spec(id)
            .entries
            .iter()
            .map(|entry| match entry {
                MenuEntry::Command { label, .. } => *label,
                MenuEntry::Separator => "-",
            })
            .collect()
    }

    #[test]
    fn menu_bar_lists_menus_in_order() {
        let titles: Vec<_> = menu_bar().iter().map(|menu| menu.title).collect();
        assert_eq!(titles, vec!["System", "Projects", "Applications", "Links"]);
        for menu in menu_bar() {
            assert_eq!(menu_spec(menu.id), menu);
        }
    }

    #[test]
    fn system_and_links_menus_keep_their_separators() {
        assert_eq!(
            labels(MenuId::System),
            vec![
                "About This Mac",
                "-",
                "Control Panels",
                "-",
                "Restart",
                "Shut Down"
            ]
        );
        assert_eq!(
            labels(MenuId::Links),
            vec!["GitHub", "LinkedIn", "-", "Email Me"]
        );
    }

    #[test]
    fn clicking_a_title_toggles_and_switches_menus() {
        assert_eq!(toggled_menu(None, MenuId::Links), Some(MenuId::Links));
        assert_eq!(toggled_menu(Some(MenuId::Links), MenuId::Links), None);
        assert_eq!(
            toggled_menu(Some(MenuId::Links), MenuId::System),
            Some(MenuId::System)
        );
    }
}
