//! Long-polling echo bot.
//!
//! ```sh
//! MAX_BOT_TOKEN=... RUST_LOG=info cargo run -p maxbot-client --example echo_bot
//! ```

use anyhow::Result;
use maxbot_client::{Context, GetUpdatesOpts, MaxClient, NewMessageBody, Update, UpdateType};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let client = MaxClient::from_env()?;
    let shutdown = CancellationToken::new();
    let ctx = Context::background().with_cancellation(shutdown.clone());

    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                shutdown.cancel();
            }
        }
    });

    let me = client.bots().me(&ctx).await?;
    info!(bot = %me.profile.user.first_name, "polling for updates");

    let mut opts = GetUpdatesOpts {
        types: vec![UpdateType::MessageCreated, UpdateType::BotStarted],
        ..Default::default()
    };

    while !ctx.is_cancelled() {
        let batch = match client.updates().next_batch(&ctx, &opts).await {
            Ok(batch) => batch,
            Err(e) if ctx.is_cancelled() => {
                info!(error = %e, "shutting down");
                break;
            }
            Err(e) if e.is_timeout() || e.is_server_error() => {
                warn!(error = %e, "poll failed, retrying");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        for update in batch.updates {
            handle(&client, &ctx, update).await;
        }
        if let Some(marker) = batch.marker {
            opts.marker = marker;
        }
    }

    Ok(())
}

async fn handle(client: &MaxClient, ctx: &Context, update: Update) {
    let (chat_id, text) = match update {
        Update::MessageCreated(created) => {
            let Some(chat_id) = created.message.recipient.chat_id else {
                return;
            };
            let text = created.message.body.text.unwrap_or_default();
            if text.is_empty() {
                return;
            }
            (chat_id, text)
        }
        Update::BotStarted(started) => (started.chat_id, "Hi! Send me anything.".to_string()),
        other => {
            info!(update_type = %other.update_type(), "ignored");
            return;
        }
    };

    if let Err(e) = client
        .messages()
        .send(ctx, chat_id, &NewMessageBody::text(text))
        .await
    {
        warn!(chat_id, error = %e, "reply failed");
    }
}
