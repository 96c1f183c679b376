use happyform::adapters::generation_client::HttpFormGenerator;
use happyform::config::{GenerationSettings, ServerSettings, Settings};
use std::net::SocketAddr;
use std::sync::Arc;

/// HappyForm host listening on a random local port
pub struct TestServer {
    pub addr: SocketAddr,
    pub base_url: String,
}

impl TestServer {
    /// Start a host that relays prompts to `upstream`
    pub async fn new(upstream: &str) -> Self {
        let settings = Arc::new(Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 0, // Random port
            },
            generation: GenerationSettings {
                base_url: upstream.to_string(),
            },
        });
        let generator = Arc::new(HttpFormGenerator::from_settings(&settings));
        let app = happyform::create_app(settings, generator);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        TestServer { addr, base_url }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
