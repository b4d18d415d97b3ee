//! Display-card rendering for the current page.

use twilight_model::channel::message::embed::{Embed, EmbedField};
use twilight_util::builder::embed::EmbedBuilder;

/// Body text shown when the current page resolves to no data.
pub const NO_DATA_DESCRIPTION: &str = "No data available";

/// Description configuration: a literal string or a per-page formatter
/// called with the one-based page number and the total page count.
pub enum PageDescription {
    Literal(String),
    PerPage(Box<dyn Fn(usize, usize) -> String + Send + Sync>),
}

impl Default for PageDescription {
    fn default() -> Self {
        Self::PerPage(Box::new(|page, total| format!("Page#{page} of {total}")))
    }
}

impl PageDescription {
    /// Resolve the description for the given position.
    pub fn resolve(&self, current_page: usize, total_pages: usize) -> String {
        match self {
            Self::Literal(text) => text.clone(),
            Self::PerPage(format) => format(current_page, total_pages),
        }
    }
}

/// Convenience constructor for a non-inline embed field.
pub fn field(name: impl Into<String>, value: impl Into<String>) -> EmbedField {
    EmbedField {
        inline: false,
        name: name.into(),
        value: value.into(),
    }
}

/// Build the display card for one page.
///
/// `body` carries the resolved description and the mapped fields in item
/// order; `None` renders the no-data card.
pub fn build_page_embed(
    title: Option<&str>,
    color: Option<u32>,
    body: Option<(String, Vec<EmbedField>)>,
) -> anyhow::Result<Embed> {
    let mut builder = EmbedBuilder::new();

    if let Some(title) = title {
        builder = builder.title(title);
    }
    if let Some(color) = color {
        builder = builder.color(color);
    }

    builder = match body {
        Some((description, fields)) => {
            let mut builder = builder.description(description);
            for field in fields {
                builder = builder.field(field);
            }
            builder
        }
        None => builder.description(NO_DATA_DESCRIPTION),
    };

    Ok(builder.validate()?.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_description_formats_position() {
        let description = PageDescription::default();
        assert_eq!(description.resolve(2, 3), "Page#2 of 3");
        assert_eq!(description.resolve(1, 1), "Page#1 of 1");
    }

    #[test]
    fn literal_description_ignores_position() {
        let description = PageDescription::Literal("Server warnings".to_owned());
        assert_eq!(description.resolve(5, 9), "Server warnings");
    }

    #[test]
    fn per_page_description_sees_current_and_total() {
        let description = PageDescription::PerPage(Box::new(|page, total| {
            format!("{page}/{total}")
        }));
        assert_eq!(description.resolve(3, 4), "3/4");
    }

    #[test]
    fn empty_body_renders_the_no_data_card() {
        let embed = build_page_embed(Some("Title"), Some(0xFF0000), None).unwrap();

        assert_eq!(embed.description.as_deref(), Some(NO_DATA_DESCRIPTION));
        assert_eq!(embed.title.as_deref(), Some("Title"));
        assert_eq!(embed.color, Some(0xFF0000));
        assert!(embed.fields.is_empty());
    }

    #[test]
    fn body_fields_keep_item_order() {
        let fields = vec![field("a", "1"), field("b", "2"), field("c", "3")];
        let embed = build_page_embed(None, None, Some(("Page#1 of 1".to_owned(), fields))).unwrap();

        let names: Vec<&str> = embed.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(embed.description.as_deref(), Some("Page#1 of 1"));
        assert!(embed.title.is_none());
        assert!(embed.color.is_none());
    }
}
