//! Minimal serving example.
//!
//! Run with `cargo run -p augur-serve --example hello`, then:
//!
//! ```text
//! curl http://127.0.0.1:8080/
//! curl http://127.0.0.1:8080/greet/ada
//! curl http://127.0.0.1:8080/anything/else
//! ```

use augur_container::{reply, Container, HandlerRef};
use augur_http::Response;
use augur_router::Router;
use augur_serve::Server;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new();
    container.handler("home", |_container, _request| async move {
        reply(Response::html("<h1>It works.</h1>"))
    });

    let router = Router::new()
        .get("/", HandlerRef::named("home"))
        .get(
            "/greet/{name?}",
            HandlerRef::func(|_container, request| async move {
                let name = request.param("name").unwrap_or("stranger").to_string();
                reply(Response::text(format!("hello, {name}")))
            }),
        )
        .with_fallback(HandlerRef::func(|_container, _request| async move {
            reply(Response::not_found())
        }));

    Server::new(router, container).listen("127.0.0.1:8080").await?;
    Ok(())
}
