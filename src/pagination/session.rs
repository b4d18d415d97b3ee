//! Session transport: how a navigation session edits its published message,
//! acknowledges presses, and waits for the next one.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;
use twilight_http::Client;
use twilight_model::application::interaction::InteractionData;
use twilight_model::channel::message::Component;
use twilight_model::channel::message::embed::Embed;
use twilight_model::gateway::payload::incoming::InteractionCreate;
use twilight_model::http::interaction::{InteractionResponse, InteractionResponseType};
use twilight_model::id::{
    Id,
    marker::{ChannelMarker, MessageMarker},
};

/// A button press addressed to a published paginated message.
pub struct NavPress {
    /// Acting user.
    pub user_id: u64,
    /// Control identifier carried by the pressed button.
    pub control: String,
    interaction: Option<Box<InteractionCreate>>,
}

impl NavPress {
    /// Construct a press without an underlying interaction.
    ///
    /// Used by in-memory transports and tests; acknowledging such a press is
    /// a no-op at the HTTP layer.
    pub fn new(user_id: u64, control: impl Into<String>) -> Self {
        Self {
            user_id,
            control: control.into(),
            interaction: None,
        }
    }
}

/// Handle to a published paginated message.
///
/// Publishing is done by the caller's callback; the navigation loop only
/// needs to wait for presses, acknowledge them, and edit the message in
/// place.
#[async_trait]
pub trait PaginatedMessage: Send {
    /// Wait for the next button press on this message.
    ///
    /// Returns `None` once the press source is closed.
    async fn next_press(&mut self) -> Option<NavPress>;

    /// Acknowledge a press without any visible response.
    async fn acknowledge(&mut self, press: &NavPress) -> anyhow::Result<()>;

    /// Edit the message in place. A `None` embed leaves the card untouched
    /// and only swaps the navigation controls.
    async fn update(&mut self, embed: Option<Embed>, components: Vec<Component>)
    -> anyhow::Result<()>;
}

/// Gateway-backed message handle.
///
/// Presses arrive on a channel fed by the caller's `InteractionCreate`
/// events; edits go through the HTTP client.
pub struct GatewayMessage {
    http: Arc<Client>,
    channel_id: Id<ChannelMarker>,
    message_id: Id<MessageMarker>,
    presses: mpsc::Receiver<Box<InteractionCreate>>,
}

impl GatewayMessage {
    /// Wrap an already published message.
    pub fn new(
        http: Arc<Client>,
        channel_id: Id<ChannelMarker>,
        message_id: Id<MessageMarker>,
        presses: mpsc::Receiver<Box<InteractionCreate>>,
    ) -> Self {
        Self {
            http,
            channel_id,
            message_id,
            presses,
        }
    }
}

#[async_trait]
impl PaginatedMessage for GatewayMessage {
    async fn next_press(&mut self) -> Option<NavPress> {
        loop {
            let interaction = self.presses.recv().await?;
            if let Some(press) = press_from_interaction(self.message_id, interaction) {
                return Some(press);
            }
        }
    }

    async fn acknowledge(&mut self, press: &NavPress) -> anyhow::Result<()> {
        let Some(interaction) = press.interaction.as_ref() else {
            return Ok(());
        };

        let response = InteractionResponse {
            kind: InteractionResponseType::DeferredUpdateMessage,
            data: None,
        };

        self.http
            .interaction(interaction.application_id)
            .create_response(interaction.id, &interaction.token, &response)
            .await?;

        Ok(())
    }

    async fn update(
        &mut self,
        embed: Option<Embed>,
        components: Vec<Component>,
    ) -> anyhow::Result<()> {
        match embed {
            Some(embed) => {
                let embeds = [embed];
                self.http
                    .update_message(self.channel_id, self.message_id)
                    .components(Some(&components))
                    .embeds(Some(&embeds))
                    .await?;
            }
            None => {
                self.http
                    .update_message(self.channel_id, self.message_id)
                    .components(Some(&components))
                    .await?;
            }
        }

        Ok(())
    }
}

/// Convert an interaction event into a [`NavPress`] when it is a component
/// press addressed to the given message. Everything else is dropped.
pub fn press_from_interaction(
    message_id: Id<MessageMarker>,
    interaction: Box<InteractionCreate>,
) -> Option<NavPress> {
    let Some(InteractionData::MessageComponent(data)) = interaction.data.as_ref() else {
        return None;
    };

    if interaction.message.as_ref().map(|message| message.id) != Some(message_id) {
        return None;
    }

    let user_id = interaction.author_id()?.get();
    let control = data.custom_id.clone();

    Some(NavPress {
        user_id,
        control,
        interaction: Some(interaction),
    })
}

/// Publish a new paginated message and wrap it in a [`GatewayMessage`].
pub async fn publish_gateway_message(
    http: Arc<Client>,
    channel_id: Id<ChannelMarker>,
    embed: Embed,
    components: Vec<Component>,
    presses: mpsc::Receiver<Box<InteractionCreate>>,
) -> anyhow::Result<GatewayMessage> {
    let message = http
        .create_message(channel_id)
        .embeds(&[embed])
        .components(&components)
        .await?
        .model()
        .await?;

    Ok(GatewayMessage::new(http, channel_id, message.id, presses))
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use twilight_model::id::Id;

    use super::*;

    fn user_json(user_id: u64) -> serde_json::Value {
        json!({
            "avatar": null,
            "bot": false,
            "discriminator": "0001",
            "global_name": null,
            "id": user_id.to_string(),
            "username": "presser",
        })
    }

    fn message_json(message_id: u64) -> serde_json::Value {
        json!({
            "attachments": [],
            "author": user_json(900),
            "channel_id": "2",
            "content": "",
            "edited_timestamp": null,
            "embeds": [],
            "id": message_id.to_string(),
            "mention_everyone": false,
            "mention_roles": [],
            "mentions": [],
            "pinned": false,
            "timestamp": "2020-02-02T02:02:02.020000+00:00",
            "tts": false,
            "type": 0,
        })
    }

    fn component_press(message_id: u64, user_id: u64, control: &str) -> Box<InteractionCreate> {
        let interaction = json!({
            "application_id": "1",
            "authorizing_integration_owners": {},
            "data": { "component_type": 2, "custom_id": control },
            "entitlements": [],
            "id": "300",
            "message": message_json(message_id),
            "token": "interaction-token",
            "type": 3,
            "user": user_json(user_id),
        });

        Box::new(serde_json::from_value(interaction).unwrap())
    }

    fn ping_interaction() -> Box<InteractionCreate> {
        let interaction = json!({
            "application_id": "1",
            "authorizing_integration_owners": {},
            "entitlements": [],
            "id": "301",
            "token": "interaction-token",
            "type": 1,
        });

        Box::new(serde_json::from_value(interaction).unwrap())
    }

    #[test]
    fn component_press_on_the_published_message_becomes_a_nav_press() {
        let press = press_from_interaction(Id::new(4), component_press(4, 7, "next")).unwrap();

        assert_eq!(press.user_id, 7);
        assert_eq!(press.control, "next");
        assert!(press.interaction.is_some());
    }

    #[test]
    fn presses_on_other_messages_are_dropped() {
        let press = press_from_interaction(Id::new(4), component_press(999, 7, "next"));
        assert!(press.is_none());
    }

    #[test]
    fn non_component_interactions_are_dropped() {
        let press = press_from_interaction(Id::new(4), ping_interaction());
        assert!(press.is_none());
    }

    #[test]
    fn component_press_without_a_message_is_dropped() {
        let mut interaction = component_press(4, 7, "next");
        interaction.0.message = None;

        let press = press_from_interaction(Id::new(4), interaction);
        assert!(press.is_none());
    }
}
