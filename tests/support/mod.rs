#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use axum::Router;
use maya_portal::repositories::api_repo::ApiConnectionRepo;

pub async fn spawn_backend(app: Router) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    let server = axum::Server::from_tcp(listener)
        .expect("server from listener")
        .serve(app.into_make_service());
    tokio::spawn(async move { server.await.expect("serve app") });
    format!("http://{}", addr)
}

pub fn repo(base_url: &str) -> ApiConnectionRepo {
    ApiConnectionRepo::new(base_url, Duration::from_secs(5)).expect("api repo")
}

/// Base url nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

#[derive(Clone, Default)]
pub struct HitCounter(Arc<AtomicUsize>);

impl HitCounter {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}
