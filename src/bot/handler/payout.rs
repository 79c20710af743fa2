use poise::{serenity_prelude as serenity, CreateReply};

use crate::bot::{
    dispatcher::{Context, HandlerResult},
    processor::PayoutIndex,
};

use super::{
    constants::{CURRENCY_SYMBOL, PROFILE_BASE_URL, SOURCE_NAME},
    utils::{format_grouped_amount, format_precise_amount},
};

/* Reply contents */

#[derive(Clone, Debug, PartialEq)]
pub struct PayoutEmbed {
    pub author_name: String,
    pub author_url: String,
    pub author_icon: String,
    pub description: String,
    pub footer: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PayoutReply {
    NotFound { content: String },
    Found(PayoutEmbed),
}

impl PayoutReply {
    // Every payout reply is only visible to whoever asked.
    pub fn into_create_reply(self) -> CreateReply {
        let reply = CreateReply::default().ephemeral(true);
        match self {
            PayoutReply::NotFound { content } => reply.content(content),
            PayoutReply::Found(embed) => {
                let mut author = serenity::CreateEmbedAuthor::new(embed.author_name)
                    .url(embed.author_url);
                if !embed.author_icon.is_empty() {
                    author = author.icon_url(embed.author_icon);
                }

                reply.embed(
                    serenity::CreateEmbed::new()
                        .author(author)
                        .description(embed.description)
                        .footer(serenity::CreateEmbedFooter::new(embed.footer)),
                )
            }
        }
    }
}

/* Looks up a creator's payout and composes the reply for it.
 * The creator is echoed back exactly as requested when nothing is found.
 */
pub fn build_payout_reply(payouts: &PayoutIndex, creator: &str) -> PayoutReply {
    let Some(entry) = payouts.find(creator) else {
        return PayoutReply::NotFound {
            content: format!("No payout found for user **{creator}**."),
        };
    };

    let username = &entry.username;
    let earning = entry.gross_earning;
    let description = format!(
        "Gross Earnings: **{CURRENCY_SYMBOL}{}** (**{CURRENCY_SYMBOL}{}**)",
        format_grouped_amount(earning),
        format_precise_amount(earning)
    );

    let footer = match entry.user_id.resolve() {
        Some(user_id) => format!("User ID: {user_id} | {SOURCE_NAME}"),
        None => SOURCE_NAME.to_string(),
    };

    PayoutReply::Found(PayoutEmbed {
        author_name: username.clone(),
        author_url: format!("{PROFILE_BASE_URL}{username}"),
        author_icon: entry.avatar_url.clone(),
        description,
        footer,
    })
}

/// Look up the gross earnings of a creator on the payouts leaderboard.
#[poise::command(slash_command, ephemeral)]
pub async fn payout(
    ctx: Context<'_>,
    #[description = "Username of the creator"] creator: String,
) -> HandlerResult {
    let reply = build_payout_reply(&ctx.data().payouts, &creator);
    match &reply {
        PayoutReply::Found(_) => log::debug!("Payout - Found payout for creator {creator}"),
        PayoutReply::NotFound { .. } => log::debug!("Payout - No payout for creator {creator}"),
    }

    ctx.send(reply.into_create_reply()).await?;
    Ok(())
}
