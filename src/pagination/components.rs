//! Navigation button row for paginated messages.

use twilight_model::channel::message::EmojiReactionType;
use twilight_model::channel::message::component::{ActionRow, Button, ButtonStyle, Component};

/// A navigation action carried by one of the four buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    First,
    Previous,
    Next,
    Last,
}

impl NavAction {
    /// Identifier carried in the button's custom ID.
    pub fn custom_id(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Previous => "previous",
            Self::Next => "next",
            Self::Last => "last",
        }
    }

    /// Parse a control identifier. Anything unrecognized is `None`.
    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        match custom_id {
            "first" => Some(Self::First),
            "previous" => Some(Self::Previous),
            "next" => Some(Self::Next),
            "last" => Some(Self::Last),
            _ => None,
        }
    }

    fn emoji(self) -> &'static str {
        match self {
            Self::First => "⏪",
            Self::Previous => "⬅️",
            Self::Next => "➡️",
            Self::Last => "⏩",
        }
    }
}

/// Build the four-button navigation row for the current position.
///
/// Everything is disabled once the session timed out or there are no pages;
/// first/previous are disabled on the first page and next/last on the final
/// page.
pub fn build_nav_row(page: usize, total_pages: usize, timed_out: bool) -> Component {
    let inert = timed_out || total_pages == 0;
    let at_start = page == 0;
    let at_end = page + 1 == total_pages;

    let buttons = [
        nav_button(NavAction::First, inert || at_start),
        nav_button(NavAction::Previous, inert || at_start),
        nav_button(NavAction::Next, inert || at_end),
        nav_button(NavAction::Last, inert || at_end),
    ];

    Component::ActionRow(ActionRow {
        id: None,
        components: buttons.into_iter().map(Component::Button).collect(),
    })
}

fn nav_button(action: NavAction, disabled: bool) -> Button {
    Button {
        id: None,
        custom_id: Some(action.custom_id().to_owned()),
        disabled,
        emoji: Some(EmojiReactionType::Unicode {
            name: action.emoji().to_owned(),
        }),
        label: None,
        style: ButtonStyle::Primary,
        url: None,
        sku_id: None,
    }
}
