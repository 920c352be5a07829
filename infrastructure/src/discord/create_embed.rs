use crate::discord::timestamp::chrono_to_serenity_timestamp;
use domain::ports::discord::{CreateEmbed, EmbedField, EmbedFooter};
use poise::serenity_prelude as serenity;
use tracing::instrument;

#[instrument(level = "trace", skip(embed))]
pub fn domain_to_serenity_create_embed(embed: CreateEmbed) -> serenity::CreateEmbed {
    let CreateEmbed {
        title,
        color,
        thumbnail,
        fields,
        footer,
        timestamp,
    } = embed;

    let mut embed = serenity::CreateEmbed::new();

    if let Some(title) = title {
        embed = embed.title(title);
    }
    if let Some(color) = color {
        embed = embed.color(color);
    }
    if let Some(thumbnail) = thumbnail {
        embed = embed.thumbnail(thumbnail);
    }

    embed = embed.fields(
        fields
            .into_iter()
            .map(|EmbedField { name, value, inline }| (name, value, inline)),
    );

    if let Some(EmbedFooter { text, icon_url }) = footer {
        let mut footer = serenity::CreateEmbedFooter::new(text);
        if let Some(icon_url) = icon_url {
            footer = footer.icon_url(icon_url);
        }
        embed = embed.footer(footer);
    }

    if let Some(timestamp) = timestamp.and_then(chrono_to_serenity_timestamp) {
        embed = embed.timestamp(timestamp);
    }

    embed
}
