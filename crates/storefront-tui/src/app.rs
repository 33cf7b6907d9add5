use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use storefront_core::{PaginationController, StorefrontResult, PRODUCTS_PER_PAGE};
use storefront_domain::{Locale, PriceCeiling, ProductQuery, ProductSource};
use tokio::sync::mpsc;

use crate::components::Banner;
use crate::dialog::{handle_dialog_input, DialogAction};
use crate::events::{should_quit, Event, EventHandler};
use crate::feed::{FeedEvent, ProductFeed};
use crate::gallery::{select_view, GalleryView};
use crate::input::InputState;
use crate::transition::Transition;
use crate::ui;
use crate::viewport::{ContentLayout, Viewport, LOADER_HEIGHT};

const BANNER_TTL: Duration = Duration::from_secs(3);

/// Startup inputs for the gallery.
#[derive(Debug, Clone)]
pub struct GallerySettings {
    pub lang: Locale,
    pub search: Option<String>,
    pub filter: PriceCeiling,
    pub page_size: usize,
    pub loader_transition: Duration,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            lang: Locale::default(),
            search: None,
            filter: PriceCeiling::default(),
            page_size: PRODUCTS_PER_PAGE,
            loader_transition: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Browse,
    EditSearch,
    EditFilter,
}

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub input: InputState,
    pub lang: Locale,
    pub search: Option<String>,
    pub filter: PriceCeiling,
    pub pagination: PaginationController,
    pub feed: ProductFeed,
    pub viewport: Viewport,
    pub layout: Option<ContentLayout>,
    pub loader: Transition,
    pub banner: Option<Banner>,
    pub spinner_frame: usize,
}

impl App {
    pub fn new(
        settings: GallerySettings,
        source: Arc<dyn ProductSource>,
        tx: mpsc::UnboundedSender<Event>,
    ) -> Self {
        let search = settings
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Self {
            should_quit: false,
            mode: AppMode::Browse,
            input: InputState::new(),
            lang: settings.lang,
            search,
            filter: settings.filter,
            pagination: PaginationController::new(settings.page_size),
            feed: ProductFeed::new(source, tx),
            viewport: Viewport::default(),
            layout: None,
            loader: Transition::new(settings.loader_transition),
            banner: None,
            spinner_frame: 0,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn query(&self) -> ProductQuery {
        ProductQuery::new(self.lang, self.pagination.limit())
            .with_search(self.search.clone())
            .with_filter(self.filter)
    }

    /// Fetch the current query.
    pub fn refresh(&mut self) {
        let query = self.query();
        self.feed.request(query);
    }

    pub fn view(&self) -> GalleryView<'_> {
        select_view(
            self.feed.result(),
            self.pagination.limit(),
            self.lang,
            self.pagination.page_size(),
        )
    }

    /// Lay out the content for a body area of `width` x `height` cells.
    pub fn measure(&mut self, width: u16, height: u16) -> ContentLayout {
        let layout = {
            let view = select_view(
                self.feed.result(),
                self.pagination.limit(),
                self.lang,
                self.pagination.page_size(),
            );
            ContentLayout::measure(&view.body, width, self.loader.is_rendered())
        };
        self.viewport.set_viewport_height(usize::from(height));
        self.viewport.set_content_height(layout.content_height);
        self.layout = Some(layout);
        layout
    }

    /// The sentinel signal: the loader is fully on screen and no fetch is
    /// outstanding.
    pub fn sentinel_visible(&self) -> bool {
        if self.feed.result().is_loading {
            return false;
        }
        self.layout
            .and_then(|layout| layout.loader_top)
            .is_some_and(|top| self.viewport.is_fully_visible(top, LOADER_HEIGHT))
    }

    /// Feed the sentinel signal to the pagination controller, fetching a
    /// larger page when the limit grows.
    pub fn observe_sentinel(&mut self) {
        let visible = self.sentinel_visible();
        let total = self.feed.result().total;
        if let Some(limit) = self.pagination.observe(visible, total) {
            tracing::info!(limit, total, "loading more products");
            self.refresh();
        }
    }

    /// Mount or unmount the loader to match the pagination state.
    pub fn sync_loader(&mut self, now: Instant) {
        let mounted = self.pagination.loader_mounted(self.feed.result().total);
        self.loader.set_mounted(mounted, now);
        self.loader.tick(now);
    }

    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "terminal resized");
            }
            Event::Tick => self.on_tick(now),
            Event::Fetched(reply) => self.handle_fetched(reply, now),
        }
    }

    pub fn handle_fetched(&mut self, reply: FeedEvent, now: Instant) {
        if self.feed.apply(reply) {
            self.sync_loader(now);
        }
    }

    fn on_tick(&mut self, now: Instant) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
        if self
            .banner
            .as_ref()
            .is_some_and(|banner| banner.is_expired(BANNER_TTL))
        {
            self.banner = None;
        }
        self.sync_loader(now);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        match self.mode {
            AppMode::Browse => self.handle_browse_key(key),
            AppMode::EditSearch => match handle_dialog_input(&mut self.input, key.code) {
                DialogAction::Confirm => {
                    let text = self.input.as_str().to_string();
                    self.close_dialog();
                    self.set_search(Some(text));
                }
                DialogAction::Cancel => self.close_dialog(),
                DialogAction::None => {}
            },
            AppMode::EditFilter => match handle_dialog_input(&mut self.input, key.code) {
                DialogAction::Confirm => {
                    let text = self.input.as_str().to_string();
                    self.close_dialog();
                    if let Err(e) = self.set_filter_text(&text) {
                        tracing::warn!("Rejected price filter: {}", e);
                        self.banner = Some(Banner::error(e.to_string()));
                    }
                }
                DialogAction::Cancel => self.close_dialog(),
                DialogAction::None => {}
            },
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        if should_quit(&key) {
            self.quit();
            return;
        }
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.viewport.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.viewport.scroll_up(1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.viewport.page_down(),
            KeyCode::PageUp => self.viewport.page_up(),
            KeyCode::Char('g') | KeyCode::Home => self.viewport.scroll_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.viewport.scroll_to_bottom(),
            KeyCode::Char('/') => {
                self.input.set(self.search.clone().unwrap_or_default());
                self.mode = AppMode::EditSearch;
            }
            KeyCode::Char('f') => {
                let current = if self.filter == PriceCeiling::default() {
                    String::new()
                } else {
                    self.filter.value().to_string()
                };
                self.input.set(current);
                self.mode = AppMode::EditFilter;
            }
            KeyCode::Char('l') => self.toggle_lang(),
            KeyCode::Char('r') => {
                self.banner = Some(Banner::info("Reloading catalog"));
                self.refresh();
            }
            KeyCode::Esc if self.search.is_some() => self.set_search(None),
            _ => {}
        }
    }

    fn close_dialog(&mut self) {
        self.mode = AppMode::Browse;
        self.input.clear();
    }

    pub fn set_search(&mut self, search: Option<String>) {
        let search = search.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        if search == self.search {
            return;
        }
        tracing::info!(search = ?search, "search changed");
        self.search = search;
        self.restart_query();
    }

    /// Parse and apply a price ceiling; empty text restores the default.
    pub fn set_filter_text(&mut self, text: &str) -> StorefrontResult<()> {
        let filter: PriceCeiling = text.parse()?;
        if filter != self.filter {
            tracing::info!(filter = filter.value(), "price filter changed");
            self.filter = filter;
            self.restart_query();
        }
        Ok(())
    }

    pub fn set_lang(&mut self, lang: Locale) {
        if lang == self.lang {
            return;
        }
        tracing::info!(%lang, "language changed");
        self.lang = lang;
        self.restart_query();
    }

    pub fn toggle_lang(&mut self) {
        let next = match self.lang {
            Locale::En => Locale::Fa,
            Locale::Fa => Locale::En,
        };
        self.set_lang(next);
    }

    /// A new query key pages from the start.
    fn restart_query(&mut self) {
        self.pagination.reset();
        self.viewport.scroll_to_top();
        self.refresh();
    }

    pub async fn run(&mut self, mut events: EventHandler) -> StorefrontResult<()> {
        let mut terminal = setup_terminal()?;
        self.refresh();

        let result = self.event_loop(&mut terminal, &mut events).await;

        events.stop();
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &mut EventHandler,
    ) -> StorefrontResult<()> {
        while !self.should_quit {
            let now = Instant::now();
            self.sync_loader(now);
            terminal.draw(|frame| ui::render(self, frame, now))?;
            self.observe_sentinel();

            match events.next().await {
                Some(event) => self.handle_event(event, Instant::now()),
                None => break,
            }
        }
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
