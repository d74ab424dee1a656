//! The dispatch sequence: resolve, invoke, transmit.

use std::io::Write;

use augur_container::{Container, HandlerRef};
use augur_http::{Communicable, Request, Response};
use augur_router::{Router, RouterError};
use tracing::{error, info, warn};

use crate::error::Result;

/// Resolves the request against the router, invokes the handler through the
/// container, and transmits the reply to the channel when it is
/// communicable.
///
/// Routing failures are translated into responses at this boundary: no
/// match without a fallback becomes 404, a method mismatch 405, a missing
/// required parameter 400. Handler and container failures become 500. The
/// routing layer itself never recovers from any of these.
pub async fn dispatch(
    router: &Router<HandlerRef>,
    container: &Container,
    mut request: Request,
    channel: &mut (dyn Write + Send),
) -> Result<()> {
    let method = request.method();
    let uri = request.uri().clone();

    let dispatched = match router.handle_request(&mut request) {
        Ok(dispatched) => dispatched,
        Err(err) => {
            warn!(%method, %uri, "{err}");
            error_response(&err).send(channel)?;
            return Ok(());
        }
    };

    let handler = dispatched.handler().clone();
    let fallback = dispatched.is_fallback();

    match container.call(&handler, request).await {
        Ok(Some(reply)) => {
            reply.send(channel)?;
            info!(%method, %uri, fallback, "request dispatched");
        }
        Ok(None) => {
            info!(%method, %uri, fallback, "request dispatched without reply");
        }
        Err(err) => {
            error!(%method, %uri, "handler failed: {err}");
            Response::internal_server_error().send(channel)?;
        }
    }

    Ok(())
}

fn error_response(err: &RouterError) -> Response {
    match err {
        RouterError::NotFound { .. } => Response::not_found(),
        RouterError::MethodNotAllowed { .. } => Response::method_not_allowed(),
        RouterError::MissingParameter { .. } | RouterError::MissingReverseParameter { .. } => {
            Response::bad_request()
        }
    }
}

#[cfg(test)]
mod tests {
    use augur_container::reply;

    use super::*;

    fn wire_text(wire: Vec<u8>) -> String {
        String::from_utf8(wire).unwrap()
    }

    #[tokio::test]
    async fn test_dispatches_to_the_matched_handler() {
        let router = Router::new().get(
            "/users/{id}",
            HandlerRef::func(|_container, request| async move {
                let id = request.param("id").unwrap_or_default().to_string();
                reply(Response::text(format!("user {id}")))
            }),
        );
        let container = Container::new();

        let mut wire = Vec::new();
        dispatch(&router, &container, Request::get("/users/42"), &mut wire)
            .await
            .unwrap();

        let text = wire_text(wire);
        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.ends_with("user 42"));
    }

    #[tokio::test]
    async fn test_dispatches_named_handlers_through_the_container() {
        let container = Container::new();
        container.handler("home", |_container, _request| async move {
            reply(Response::text("welcome"))
        });
        let router = Router::new().get("/", HandlerRef::named("home"));

        let mut wire = Vec::new();
        dispatch(&router, &container, Request::get("/"), &mut wire)
            .await
            .unwrap();

        assert!(wire_text(wire).ends_with("welcome"));
    }

    #[tokio::test]
    async fn test_unmatched_request_is_404() {
        let router: Router<HandlerRef> = Router::new();
        let container = Container::new();

        let mut wire = Vec::new();
        dispatch(&router, &container, Request::get("/nowhere"), &mut wire)
            .await
            .unwrap();

        assert!(wire_text(wire).starts_with("HTTP/1.1 404 Not Found\r\n"));
    }

    #[tokio::test]
    async fn test_method_mismatch_is_405() {
        let router = Router::new().get(
            "/users",
            HandlerRef::func(|_container, _request| async move { None }),
        );
        let container = Container::new();

        let mut wire = Vec::new();
        dispatch(&router, &container, Request::post("/users"), &mut wire)
            .await
            .unwrap();

        assert!(wire_text(wire).starts_with("HTTP/1.1 405 Method Not Allowed\r\n"));
    }

    #[tokio::test]
    async fn test_fallback_handles_unmatched_requests() {
        let router = Router::new()
            .get(
                "/known",
                HandlerRef::func(|_container, _request| async move { None }),
            )
            .with_fallback(HandlerRef::func(|_container, request| async move {
                reply(Response::text(format!("fallback for {}", request.uri())))
            }));
        let container = Container::new();

        let mut wire = Vec::new();
        dispatch(&router, &container, Request::get("/unknown"), &mut wire)
            .await
            .unwrap();

        assert!(wire_text(wire).ends_with("fallback for /unknown"));
    }

    #[tokio::test]
    async fn test_unknown_named_handler_is_500() {
        let router = Router::new().get("/", HandlerRef::named("missing"));
        let container = Container::new();

        let mut wire = Vec::new();
        dispatch(&router, &container, Request::get("/"), &mut wire)
            .await
            .unwrap();

        assert!(wire_text(wire).starts_with("HTTP/1.1 500 Internal Server Error\r\n"));
    }

    #[tokio::test]
    async fn test_non_communicable_reply_writes_nothing() {
        let router = Router::new().get(
            "/silent",
            HandlerRef::func(|_container, _request| async move { None }),
        );
        let container = Container::new();

        let mut wire = Vec::new();
        dispatch(&router, &container, Request::get("/silent"), &mut wire)
            .await
            .unwrap();

        assert!(wire.is_empty());
    }
}
