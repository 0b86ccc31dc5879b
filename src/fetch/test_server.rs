//! Loopback stand-in for the two sites, served by axum.

use std::net::SocketAddr;

use axum::{
    http::{header, StatusCode},
    routing::get,
    Router,
};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct Route {
    path: String,
    status: StatusCode,
    content_type: &'static str,
    body: Vec<u8>,
}

impl Route {
    pub fn ok(path: &str, content_type: &'static str, body: &[u8]) -> Self {
        Self {
            path: path.to_owned(),
            status: StatusCode::OK,
            content_type,
            body: body.to_vec(),
        }
    }

    pub fn status(path: &str, status: StatusCode) -> Self {
        Self {
            path: path.to_owned(),
            status,
            content_type: "text/plain",
            body: vec![],
        }
    }
}

fn router(routes: Vec<Route>) -> Router {
    routes.into_iter().fold(Router::new(), |app, route| {
        let path = route.path.clone();
        app.route(
            &path,
            get(move || async move {
                (
                    route.status,
                    [(header::CONTENT_TYPE, route.content_type)],
                    route.body,
                )
            }),
        )
    })
}

/// Binds an ephemeral port and serves `routes` until the test runtime stops.
/// Unknown paths get axum's 404.
pub async fn serve(routes: Vec<Route>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("loopback should be bindable");
    let addr = listener.local_addr().expect("bound listener has an address");
    let app = router(routes);
    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("test server should keep serving");
    });
    addr
}
