use leptos::*;
use system_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Campaign {
    pub(crate) id: &'static str,
    pub(crate) name: &'static str,
    pub(crate) game: &'static str,
    pub(crate) session: u32,
    pub(crate) party_level: Option<u32>,
    pub(crate) schedule: &'static str,
    pub(crate) notes: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Character {
    pub(crate) name: &'static str,
    pub(crate) class: &'static str,
    pub(crate) level: u32,
    pub(crate) hp: &'static str,
}

pub(crate) static CAMPAIGNS: [Campaign; 2] = [
    Campaign {
        id: "1",
        name: "The Crystal Keep",
        game: "D&D 5E",
        session: 12,
        party_level: Some(7),
        schedule: "Weekly on Fridays",
        notes: "Party investigating mysterious crystal formations. Last session: discovered ancient library beneath the keep.",
    },
    Campaign {
        id: "2",
        name: "Tournament Army",
        game: "Warhammer 40K",
        session: 0,
        party_level: None,
        schedule: "Tournament Ready",
        notes: "2000pt Space Marines army. Ultramarines chapter tactics. Recent additions: Redemptor Dreadnought, Primaris Intercessors x20.",
    },
];

pub(crate) static PARTY: [Character; 3] = [
    Character {
        name: "Thorin Ironforge",
        class: "Fighter",
        level: 7,
        hp: "68/68",
    },
    Character {
        name: "Lyra Moonwhisper",
        class: "Wizard",
        level: 7,
        hp: "42/42",
    },
    Character {
        name: "Zara the Swift",
        class: "Rogue",
        level: 7,
        hp: "51/51",
    },
];

pub(crate) static COLLECTION: [&str; 8] = [
    "Settlers of Catan",
    "Magic: The Gathering",
    "Twilight Imperium",
    "Gloomhaven",
    "Ticket to Ride",
    "Pandemic",
    "Arkham Horror",
    "Terraforming Mars",
];

const INITIALLY_OWNED: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum TabletopTab {
    #[default]
    Campaigns,
    Characters,
    Collection,
}

impl TabletopTab {
    const ALL: [(Self, &'static str); 3] = [
        (Self::Campaigns, "Campaigns"),
        (Self::Characters, "Characters"),
        (Self::Collection, "Collection"),
    ];
}

/// Checkbox state of the collection list; the first five titles start checked.
pub(crate) fn initial_collection_marks() -> Vec<bool> {
    (0..COLLECTION.len())
        .map(|idx| idx < INITIALLY_OWNED)
        .collect()
}

#[component]
fn CampaignsPanel() -> impl IntoView {
    CAMPAIGNS
        .iter()
        .map(|campaign| {
            view! {
                <GroupBox caption=format!("\u{1F3B2} {}", campaign.name)>
                    <dl class="detail-list">
                        <dt>"Game:"</dt>
                        <dd>{campaign.game}</dd>
                        <dt>"Session:"</dt>
                        <dd>{campaign.session}</dd>
                        {campaign.party_level.map(|level| view! {
                            <dt>"Party Level:"</dt>
                            <dd>{level}</dd>
                        })}
                        <dt>"Schedule:"</dt>
                        <dd>{campaign.schedule}</dd>
                    </dl>
                    <p class="detail-description">{campaign.notes}</p>
                </GroupBox>
            }
        })
        .collect_view()
}

#[component]
fn CharactersPanel() -> impl IntoView {
    view! {
        <GroupBox caption="Active Party">
            <DataTable layout_class="interactive" aria_label="Active party">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Class"</th>
                        <th>"Level"</th>
                        <th>"HP"</th>
                    </tr>
                </thead>
                <tbody>
                    {PARTY
                        .iter()
                        .map(|character| view! {
                            <tr>
                                <td>{character.name}</td>
                                <td>{character.class}</td>
                                <td>{character.level}</td>
                                <td>{character.hp}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </DataTable>
        </GroupBox>
    }
}

#[component]
fn CollectionPanel(marks: RwSignal<Vec<bool>>) -> impl IntoView {
    view! {
        <GroupBox caption="Game Collection">
            <div class="collection-grid">
                {COLLECTION
                    .iter()
                    .enumerate()
                    .map(|(idx, title)| view! {
                        <label class="collection-entry">
                            <CheckboxField
                                aria_label=title.to_string()
                                checked=Signal::derive(move || marks.with(|marks| marks.get(idx).copied().unwrap_or(false)))
                                on_change=Callback::new(move |ev| {
                                    let checked = event_target_checked(&ev);
                                    marks.update(|marks| {
                                        if let Some(mark) = marks.get_mut(idx) {
                                            *mark = checked;
                                        }
                                    });
                                })
                            />
                            <span>{*title}</span>
                        </label>
                    })
                    .collect_view()}
            </div>
        </GroupBox>
    }
}

#[component]
/// Tabletop campaigns, party roster, and board game collection.
pub fn TabletopApp() -> impl IntoView {
    let active = create_rw_signal(TabletopTab::default());
    // Lives above the tab switch so checkbox edits survive switching tabs.
    let marks = create_rw_signal(initial_collection_marks());

    view! {
        <div class="app-tabletop">
            <h3>"Tabletop Gaming"</h3>
            <TabList aria_label="Tabletop sections">
                {TabletopTab::ALL
                    .into_iter()
                    .map(|(tab, label)| view! {
                        <Tab
                            selected=Signal::derive(move || active.get() == tab)
                            on_click=Callback::new(move |_| active.set(tab))
                        >
                            {label}
                        </Tab>
                    })
                    .collect_view()}
            </TabList>
            <div class="tab-panel" role="tabpanel">
                {move || match active.get() {
                    TabletopTab::Campaigns => view! { <CampaignsPanel /> }.into_view(),
                    TabletopTab::Characters => view! { <CharactersPanel /> }.into_view(),
                    TabletopTab::Collection => view! { <CollectionPanel marks=marks /> }.into_view(),
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn first_five_collection_titles_start_checked() {
        assert_eq!(
            initial_collection_marks(),
            vec![true, true, true, true, true, false, false, false]
        );
    }

    #[test]
    fn party_level_is_only_known_for_roleplaying_campaigns() {
        let levels: Vec<_> = CAMPAIGNS
            .iter()
            .map(|campaign| (campaign.id, campaign.party_level))
            .collect();
        assert_eq!(levels, vec![("1", Some(7)), ("2", None)]);
    }

    #[test]
    fn tabs_default_to_campaigns() {
        assert_eq!(TabletopTab::default(), TabletopTab::Campaigns);
        assert_eq!(
            TabletopTab::ALL.map(|(_, label)| label),
            ["Campaigns", "Characters", "Collection"]
        );
    }
}
