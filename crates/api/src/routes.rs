use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{calendar, content, health, messages, posts, worker};
use crate::AppContext;

/// Build the HTTP router over `ctx`.
pub fn create_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // Content generation
        .route("/api/content/generate", post(content::generate))
        .route("/api/content/image", post(content::generate_image))
        // Publishing
        .route("/api/posts", get(posts::list))
        .route("/api/posts/publish", post(posts::publish))
        .route("/api/posts/schedule", post(posts::schedule))
        .route("/api/messages", post(messages::send))
        // Calendars
        .route("/api/calendar/sync", post(calendar::sync))
        .route("/api/calendar/{source}", get(calendar::fetch))
        // Worker trigger, called by an external cron
        .route("/functions/publish-scheduled-posts", post(worker::publish_scheduled_posts))
        .with_state(ctx)
}
