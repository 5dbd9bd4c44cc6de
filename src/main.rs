use std::collections::BTreeSet;

use iced::widget::{column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length, Task, Theme};
use tracing::{error, info, warn};

mod api;
mod config;
mod state;
mod ui;

use api::RequestError;
use config::Config;
use state::{FetchOutcome, LoadState, Page, RecordId, Session};
use ui::SelectRowsPanel;

/// The paginator asked for the page starting at this row offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    pub first: usize,
}

/// The table's complete set of checked rows on the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub checked_ids: BTreeSet<RecordId>,
}

/// A background fetch finished
#[derive(Debug, Clone)]
pub struct PageLoaded {
    /// Page number the request was made for
    pub page: u32,
    pub result: Result<Page, RequestError>,
}

/// Main application state
struct ArtworkBrowser {
    /// Fetches pages from the artworks API
    client: api::Client,
    /// Current page, cursor and cross-page selection
    session: Session,
    /// "Select first N rows" panel
    select_rows: SelectRowsPanel,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User navigated to another page
    PageChanged(PageChange),
    /// Background fetch completed
    PageLoaded(PageLoaded),
    /// User checked or unchecked rows on the current page
    SelectionChanged(SelectionChange),
    /// User clicked the "Select Rows" button
    SelectRowsToggled,
    /// User edited the row count
    SelectCountEdited(String),
    /// User applied the row count
    SelectRowsApplied,
}

impl ArtworkBrowser {
    /// Create the application and start loading the first page
    fn new(config: &Config, client: api::Client) -> (Self, Task<Message>) {
        info!(endpoint = %client.endpoint(), page_size = config.page_size.get(), "Artwork browser starting.");

        let mut browser = ArtworkBrowser {
            client,
            session: Session::new(config.page_size),
            select_rows: SelectRowsPanel::default(),
        };

        // Idle -> Loading on page 1
        let page = browser.session.mount();
        let task = browser.fetch(page);

        (browser, task)
    }

    /// Launch a background fetch of `page`
    fn fetch(&self, page: u32) -> Task<Message> {
        let client = self.client.clone();

        // Tag the result with its page so late responses can be told apart
        Task::perform(
            async move { client.fetch_page(page).await },
            move |result| Message::PageLoaded(PageLoaded { page, result }),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PageChanged(PageChange { first }) => {
                // Any in-flight fetch becomes stale
                let page = self.session.request_offset(first);
                self.fetch(page)
            }
            Message::PageLoaded(PageLoaded { page, result }) => {
                // Responses for abandoned pages are dropped by the session
                if self.session.finish_fetch(page, result) == FetchOutcome::Applied {
                    info!(
                        page,
                        rows = self.session.records().len(),
                        selected = self.session.visible_selection().len(),
                        "Page displayed."
                    );
                }

                Task::none()
            }
            Message::SelectionChanged(SelectionChange { checked_ids }) => {
                self.session.change_selection(&checked_ids);
                Task::none()
            }
            Message::SelectRowsToggled => {
                self.select_rows.toggle();
                Task::none()
            }
            Message::SelectCountEdited(input) => {
                self.select_rows.edit(input);
                Task::none()
            }
            Message::SelectRowsApplied => {
                // Parse input, then validate against the displayed page
                let result = self
                    .select_rows
                    .count()
                    .and_then(|count| self.session.select_first_n(count));

                match result {
                    Ok(added) => {
                        info!(added, selected = self.session.selection().len(), "Rows selected.");
                        self.select_rows.finish();
                    }
                    Err(error) => {
                        // Panel stays open with the message
                        warn!(%error, "Invalid row count.");
                        self.select_rows.reject(error);
                    }
                }

                Task::none()
            }
        }
    }

    /// One-line summary shown under the toolbar
    fn status(&self) -> String {
        let selection = self.session.selection();
        let selected = if selection.is_empty() {
            "nothing selected".to_owned()
        } else {
            format!("{} selected", selection.len())
        };

        match self.session.state() {
            LoadState::Idle => "Starting...".to_owned(),
            LoadState::Loading { page, .. } => format!("Loading page {page}... ({selected})"),
            LoadState::Loaded => selected,
            LoadState::Error(error) => {
                format!("Failed to load artworks: {error} ({selected})")
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        // Status turns red after a failed fetch
        let status = text(self.status()).size(14);
        let status = if self.session.last_error().is_some() {
            status.color(ui::ERROR_COLOR)
        } else {
            status
        };

        let toolbar = row![self.select_rows.view(), horizontal_space(), status]
            .spacing(20)
            .align_y(Alignment::Start);

        // Only the displayed page's selected ids
        let visible = self.session.visible_selection();

        let content = column![
            text("Artworks Table").size(28),
            toolbar,
            container(ui::table::view(self.session.records(), &visible)).height(Length::Fill),
            ui::paginator::view(self.session.cursor(), self.session.records().len()),
        ]
        .spacing(16)
        .padding(24);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn init_logging(config: &Config) {
    use tracing_subscriber::fmt;

    let format = fmt::format().with_target(false).compact();

    tracing_subscriber::fmt()
        .event_format(format)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_env_filter(config.log_filter())
        .init();
}

fn main() -> iced::Result {
    let config = Config::default();
    init_logging(&config);

    // A bad endpoint is fatal at start-up only
    let client = match api::Client::new(&config.endpoint, config.page_size) {
        Ok(client) => client,
        Err(error) => {
            error!(%error, "Cannot create artworks client.");
            std::process::exit(1);
        }
    };

    iced::application("Artworks Table", ArtworkBrowser::update, ArtworkBrowser::view)
        .theme(ArtworkBrowser::theme)
        .centered()
        .run_with(move || ArtworkBrowser::new(&config, client))
}
