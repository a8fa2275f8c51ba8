use house_points_shared::{HttpResponse, SnapshotTransport};

/// Browser `fetch` via gloo-net.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl SnapshotTransport for GlooTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, String> {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| format!("fetch error: {e}"))?;

        let status = resp.status();
        if !resp.ok() {
            return Ok(HttpResponse {
                status,
                body: String::new(),
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| format!("read error: {e}"))?;
        Ok(HttpResponse { status, body })
    }
}
