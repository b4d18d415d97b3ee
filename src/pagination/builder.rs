//! Builder-configured pagination sessions over a published message.

use std::future::Future;
use std::time::Duration;

use futures::future::BoxFuture;
use tracing::debug;
use twilight_model::channel::message::Component;
use twilight_model::channel::message::embed::{Embed, EmbedField};

use super::components::{NavAction, build_nav_row};
use super::page::chunk_items;
use super::session::PaginatedMessage;
use super::view::{PageDescription, build_page_embed};

/// Default page size when callers have no layout preference.
pub const DEFAULT_ITEMS_PER_CHUNK: usize = 9;

/// Default wait window for a navigation session, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Wait configuration for a navigation session.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// How long the session accepts navigation presses.
    pub timeout: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Per-item rendering callback.
///
/// Mapping may be asynchronous; results are awaited strictly in item order,
/// so field order always matches dataset order.
pub type ItemMapper<T> = Box<dyn for<'a> Fn(&'a T) -> BoxFuture<'a, EmbedField> + Send + Sync>;

/// Renders a dataset as a sequence of embed pages navigable via a
/// four-button row attached to a published message.
///
/// A builder is configured through chained setters, then [`build`] publishes
/// the initial card and drives the navigation session until the wait window
/// elapses. Instances are not reused after the session ends.
///
/// [`build`]: PaginationBuilder::build
pub struct PaginationBuilder<T> {
    chunks: Vec<Vec<T>>,
    mapper: ItemMapper<T>,
    title: Option<String>,
    color: Option<u32>,
    description: PageDescription,
    page: usize,
    timed_out: bool,
}

impl<T> PaginationBuilder<T> {
    /// Partition `items` into pages of `items_per_chunk` (clamped to the
    /// platform's `[1, 25]` field range) and attach the per-item mapper.
    pub fn new<F>(items: Vec<T>, mapper: F, items_per_chunk: usize) -> Self
    where
        F: for<'a> Fn(&'a T) -> BoxFuture<'a, EmbedField> + Send + Sync + 'static,
    {
        Self {
            chunks: chunk_items(items, items_per_chunk),
            mapper: Box::new(mapper),
            title: None,
            color: None,
            description: PageDescription::default(),
            page: 0,
            timed_out: false,
        }
    }

    /// Re-supply the dataset and mapper, recomputing the page partition.
    pub fn set_items<F>(&mut self, items: Vec<T>, mapper: F, items_per_chunk: usize) -> &mut Self
    where
        F: for<'a> Fn(&'a T) -> BoxFuture<'a, EmbedField> + Send + Sync + 'static,
    {
        self.chunks = chunk_items(items, items_per_chunk);
        self.mapper = Box::new(mapper);
        self
    }

    /// Set the card title.
    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Set a literal card description.
    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = PageDescription::Literal(description.into());
        self
    }

    /// Set a per-page description, called with the one-based page number and
    /// the total page count.
    pub fn description_with<F>(&mut self, format: F) -> &mut Self
    where
        F: Fn(usize, usize) -> String + Send + Sync + 'static,
    {
        self.description = PageDescription::PerPage(Box::new(format));
        self
    }

    /// Set the card accent color.
    pub fn color(&mut self, color: u32) -> &mut Self {
        self.color = Some(color);
        self
    }

    /// Set the starting page index (zero-based).
    ///
    /// The index is not clamped; an out-of-range value renders the no-data
    /// card until navigation moves back into range.
    pub fn initial_page(&mut self, page: usize) -> &mut Self {
        self.page = page;
        self
    }

    /// Zero-based index of the page currently shown.
    pub fn current_page(&self) -> usize {
        self.page
    }

    /// Total number of pages in the partition.
    pub fn total_pages(&self) -> usize {
        self.chunks.len()
    }

    /// Whether the session's wait window has elapsed.
    pub fn is_timed_out(&self) -> bool {
        self.timed_out
    }

    /// Render the display card for the current page.
    ///
    /// Items of the current chunk are mapped one at a time, awaited in
    /// sequence. An out-of-range page or an empty partition renders the
    /// no-data card.
    pub async fn page_embed(&self) -> anyhow::Result<Embed> {
        let body = match self.chunks.get(self.page) {
            Some(items) => {
                let mut fields = Vec::with_capacity(items.len());
                for item in items {
                    fields.push((self.mapper)(item).await);
                }

                let description = self.description.resolve(self.page + 1, self.chunks.len());
                Some((description, fields))
            }
            None => None,
        };

        build_page_embed(self.title.as_deref(), self.color, body)
    }

    /// Render the navigation controls for the current position.
    pub fn nav_components(&self) -> Vec<Component> {
        vec![build_nav_row(self.page, self.chunks.len(), self.timed_out)]
    }

    /// Publish the initial card and drive the navigation session.
    ///
    /// This is the continuous-collector strategy: every qualifying press
    /// within the wait window is acknowledged, applied, and re-rendered.
    /// When the window elapses (or the press source closes) the session is
    /// marked timed out and the controls alone are republished, leaving the
    /// card as last rendered.
    ///
    /// Presses from users outside `allowed_users` are ignored without
    /// acknowledgement. Publish and edit failures propagate to the caller;
    /// an elapsed window does not.
    pub async fn build<F, Fut, M>(
        &mut self,
        publish: F,
        allowed_users: &[u64],
        options: SessionOptions,
    ) -> anyhow::Result<()>
    where
        F: FnOnce(Embed, Vec<Component>) -> Fut,
        Fut: Future<Output = anyhow::Result<M>>,
        M: PaginatedMessage,
    {
        let mut message = publish(self.page_embed().await?, self.nav_components()).await?;
        let deadline = tokio::time::Instant::now() + options.timeout;

        loop {
            let press = match tokio::time::timeout_at(deadline, message.next_press()).await {
                Ok(Some(press)) => press,
                // Window elapsed, or the press source closed early.
                Ok(None) | Err(_) => break,
            };

            if !allowed_users.contains(&press.user_id) {
                continue;
            }

            message.acknowledge(&press).await?;

            match NavAction::from_custom_id(&press.control) {
                Some(action) => self.apply(action),
                None => debug!(control = %press.control, "ignoring unrecognized control"),
            }

            message
                .update(Some(self.page_embed().await?), self.nav_components())
                .await?;
        }

        self.timed_out = true;
        message.update(None, self.nav_components()).await?;

        Ok(())
    }

    fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::First => self.page = 0,
            NavAction::Previous => self.page = self.page.saturating_sub(1),
            NavAction::Next => self.page += 1,
            NavAction::Last => self.page = self.chunks.len().saturating_sub(1),
        }
    }
}
