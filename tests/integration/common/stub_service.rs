use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// What the stub answers to every `POST /generate_form`
#[derive(Clone)]
pub enum Reply {
    Json(StatusCode, Value),
    Text(StatusCode, &'static str),
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Reply::Json(status, body) => (status, Json(body)).into_response(),
            Reply::Text(status, body) => (status, body).into_response(),
        }
    }
}

/// In-process stand-in for the external generation service
pub struct StubService {
    pub addr: SocketAddr,
    pub base_url: String,
    received: Arc<Mutex<Vec<Value>>>,
}

impl StubService {
    pub async fn start(reply: Reply) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));

        let app = Router::new().route("/generate_form", post({
            let received = received.clone();
            move |Json(body): Json<Value>| {
                let received = received.clone();
                let reply = reply.clone();
                async move {
                    received.lock().unwrap().push(body);
                    reply
                }
            }
        }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        StubService {
            addr,
            base_url,
            received,
        }
    }

    pub async fn json(body: Value) -> Self {
        Self::start(Reply::Json(StatusCode::OK, body)).await
    }

    /// Request bodies received so far
    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}
