//! Minimal HTTP/1.1 stub of the weather provider
//!
//! Serves canned bodies by request path and records every request line so
//! tests can assert on the query string (including `appid`).

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

pub const CURRENT_WEATHER: &str = include_str!("../fixtures/current_weather.json");
pub const AIR_POLLUTION: &str = include_str!("../fixtures/air_pollution.json");
pub const FORECAST: &str = include_str!("../fixtures/forecast.json");
pub const REVERSE_GEO: &str = include_str!("../fixtures/reverse_geo.json");
pub const DIRECT_GEO: &str = include_str!("../fixtures/direct_geo.json");

pub struct StubProvider {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubProvider {
    /// Start serving `routes` (path -> (status, body)); unknown paths get 404
    pub async fn start(routes: Vec<(&'static str, u16, &'static str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let routes: HashMap<_, _> = routes
            .into_iter()
            .map(|(path, status, body)| (path, (status, body)))
            .collect();
        let routes = Arc::new(routes);
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = requests.clone();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let routes = routes.clone();
                let recorded = recorded.clone();
                tokio::spawn(async move {
                    let (read_half, mut write_half) = stream.into_split();
                    let mut reader = BufReader::new(read_half);

                    let mut request_line = String::new();
                    if reader.read_line(&mut request_line).await.is_err() {
                        return;
                    }
                    loop {
                        let mut header = String::new();
                        match reader.read_line(&mut header).await {
                            Ok(0) => break,
                            Ok(_) if header == "\r\n" => break,
                            Ok(_) => continue,
                            Err(_) => return,
                        }
                    }

                    let target = request_line.split_whitespace().nth(1).unwrap_or("/").to_string();
                    let path = target.split('?').next().unwrap_or("/").to_string();
                    recorded.lock().unwrap().push(target);

                    let (status, body) = routes.get(path.as_str()).copied().unwrap_or((404, "{}"));
                    let response = format!(
                        "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = write_half.write_all(response.as_bytes()).await;
                    let _ = write_half.shutdown().await;
                });
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    /// Serve every provider endpoint with the bundled fixtures
    pub async fn healthy() -> Self {
        Self::start(vec![
            ("/data/2.5/weather", 200, CURRENT_WEATHER),
            ("/data/2.5/air_pollution", 200, AIR_POLLUTION),
            ("/data/2.5/forecast", 200, FORECAST),
            ("/geo/1.0/reverse", 200, REVERSE_GEO),
            ("/geo/1.0/direct", 200, DIRECT_GEO),
        ])
        .await
    }

    /// Request targets (path + query) received so far
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// A port nothing is listening on
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Accepts connections but never answers
pub async fn silent_server_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });
    format!("http://{}", addr)
}
