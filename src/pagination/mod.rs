//! Paginated-embed sessions driven by navigation buttons.
//!
//! [`PaginationBuilder`] partitions a dataset into pages, renders the
//! current page as an embed with a four-button navigation row, and drives a
//! button-press loop over the published message until the wait window
//! elapses.

mod builder;
mod components;
mod page;
mod session;
mod view;

pub use builder::{
    DEFAULT_ITEMS_PER_CHUNK, DEFAULT_TIMEOUT_SECS, ItemMapper, PaginationBuilder, SessionOptions,
};
pub use components::{NavAction, build_nav_row};
pub use page::{MAX_ITEMS_PER_CHUNK, chunk_items, clamp_chunk_size, total_pages};
pub use session::{
    GatewayMessage, NavPress, PaginatedMessage, press_from_interaction, publish_gateway_message,
};
pub use view::{NO_DATA_DESCRIPTION, PageDescription, build_page_embed, field};
