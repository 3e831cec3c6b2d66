use leptos::*;
use system_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GameStatus {
    Playing,
    Completed,
    Backlog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Game {
    pub(crate) id: &'static str,
    pub(crate) title: &'static str,
    pub(crate) platform: &'static str,
    pub(crate) progress: u16,
    pub(crate) status: GameStatus,
    pub(crate) genre: &'static str,
}

const fn game(
    id: &'static str,
    title: &'static str,
    platform: &'static str,
    progress: u16,
    status: GameStatus,
    genre: &'static str,
) -> Game {
    Game {
        id,
        title,
        platform,
        progress,
        status,
        genre,
    }
}

pub(crate) static GAMES: [Game; 12] = [
    game("1", "Final Fantasy VII", "PlayStation", 65, GameStatus::Playing, "RPG"),
    game("2", "Baldur's Gate II", "PC", 30, GameStatus::Playing, "RPG"),
    game("3", "StarCraft", "PC", 100, GameStatus::Completed, "RTS"),
    game("4", "Half-Life", "PC", 85, GameStatus::Playing, "FPS"),
    game("5", "Ocarina of Time", "N64", 100, GameStatus::Completed, "Adventure"),
    game("6", "Super Mario 64", "N64", 100, GameStatus::Completed, "Platformer"),
    game("7", "GoldenEye 007", "N64", 100, GameStatus::Completed, "FPS"),
    game("8", "Diablo II", "PC", 90, GameStatus::Playing, "ARPG"),
    game("9", "Counter-Strike", "PC", 50, GameStatus::Playing, "FPS"),
    game("10", "Metal Gear Solid", "PlayStation", 20, GameStatus::Backlog, "Stealth"),
    game("11", "Resident Evil 2", "PlayStation", 15, GameStatus::Backlog, "Horror"),
    game("12", "Chrono Trigger", "SNES", 100, GameStatus::Completed, "RPG"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum GameFilter {
    #[default]
    All,
    Only(GameStatus),
}

impl GameFilter {
    const ALL: [(Self, &'static str); 4] = [
        (Self::All, "All Games"),
        (Self::Only(GameStatus::Playing), "Playing"),
        (Self::Only(GameStatus::Completed), "Completed"),
        (Self::Only(GameStatus::Backlog), "Backlog"),
    ];

    fn admits(self, game: &Game) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => game.status == status,
        }
    }
}

pub(crate) fn filtered_games(filter: GameFilter) -> Vec<&'static Game> {
    GAMES.iter().filter(|game| filter.admits(game)).collect()
}

pub(crate) fn library_summary(filter: GameFilter) -> (String, String) {
    let completed = GAMES
        .iter()
        .filter(|game| game.status == GameStatus::Completed)
        .count();
    (
        format!(
            "Showing {} of {} games",
            filtered_games(filter).len(),
            GAMES.len()
        ),
        format!("{completed} Completed"),
    )
}

#[component]
/// Video game library with status filters.
pub fn VideoGamesApp() -> impl IntoView {
    let filter = create_rw_signal(GameFilter::default());
    let summary = create_memo(move |_| library_summary(filter.get()));

    view! {
        <div class="app-video-games">
            <h3>"Gaming Library"</h3>
            <ToolBar aria_label="Filter games">
                {GameFilter::ALL
                    .into_iter()
                    .map(|(option, label)| {
                        view! {
                            <Button
                                selected=Signal::derive(move || filter.get() == option)
                                on_click=Callback::new(move |_| filter.set(option))
                            >
                                {label}
                            </Button>
                        }
                    })
                    .collect_view()}
            </ToolBar>
            <DataTable layout_class="interactive" aria_label="Games">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"Platform"</th>
                        <th>"Genre"</th>
                        <th>"Progress"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || filtered_games(filter.get()) key=|game| game.id let:game>
                        <tr>
                            <td>
                                {format!("\u{1F3AE} {}", game.title)}
                                {(game.status == GameStatus::Completed)
                                    .then(|| view! { <span class="check-mark">"\u{2713}"</span> })}
                            </td>
                            <td>{game.platform}</td>
                            <td>{game.genre}</td>
                            <td class="progress-cell">
                                <ProgressBar max=100 value=game.progress />
                                <span>{format!("{}%", game.progress)}</span>
                            </td>
                        </tr>
                    </For>
                </tbody>
            </DataTable>
            <StatusBar>
                <StatusBarItem>{move || summary.get().0}</StatusBarItem>
                <StatusBarItem>{move || summary.get().1}</StatusBarItem>
            </StatusBar>
        </div>
    }
}
