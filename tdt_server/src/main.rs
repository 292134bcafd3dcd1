//! This crate implements a server for the rotating trash duty timetable.
//!
//! `/calendar?room=<your_room>` serves the room's duty dates as an iCalendar
//! file, `/schedule` serves the upcoming weeks as JSON for widget clients,
//! and anything else falls back to the static frontend build.

use std::net::SocketAddr;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

mod logging;
mod route;

#[tokio::main]
async fn main() {
    logging::init();
    let app = Router::new()
        .route("/calendar", get(route::calendar::handler))
        .route("/schedule", get(route::schedule::handler))
        .fallback_service(ServeDir::new("frontend/dist"));
    let addr = SocketAddr::from(([0, 0, 0, 0], 8008));
    tracing::info!("listening on http://{addr}");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
