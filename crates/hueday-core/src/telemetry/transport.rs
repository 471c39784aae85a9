//! Fire-and-forget delivery of capture requests.

use super::TelemetryError;

/// Delivers a JSON body to a URL without waiting for the outcome.
///
/// An `Err` only reports that the request could not be handed off;
/// delivery failures after that point are never surfaced.
pub trait Transport {
    fn send(&self, url: &str, body: String) -> Result<(), TelemetryError>;
}

/// Posts each request from a detached thread.
#[cfg(not(target_arch = "wasm32"))]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl HttpTransport {
    pub fn new() -> Result<Self, TelemetryError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|e| TelemetryError::Transport(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Transport for HttpTransport {
    fn send(&self, url: &str, body: String) -> Result<(), TelemetryError> {
        let client = self.client.clone();
        let url = url.to_string();
        std::thread::Builder::new()
            .name("hueday-telemetry".to_string())
            .spawn(move || {
                let result = client
                    .post(&url)
                    .header(reqwest::header::CONTENT_TYPE, "application/json")
                    .body(body)
                    .send();
                match result {
                    Ok(resp) if !resp.status().is_success() => {
                        log::debug!("Telemetry rejected by {}: {}", url, resp.status());
                    }
                    Ok(_) => {}
                    Err(e) => log::debug!("Telemetry post to {} failed: {}", url, e),
                }
            })
            .map(|_| ())
            .map_err(|e| TelemetryError::Transport(format!("Failed to spawn sender: {}", e)))
    }
}

/// Queues each request with `navigator.sendBeacon`.
#[cfg(target_arch = "wasm32")]
pub struct BeaconTransport {
    navigator: web_sys::Navigator,
}

#[cfg(target_arch = "wasm32")]
impl BeaconTransport {
    pub fn new() -> Result<Self, TelemetryError> {
        let window = web_sys::window()
            .ok_or_else(|| TelemetryError::Transport("No window object".to_string()))?;
        Ok(Self { navigator: window.navigator() })
    }
}

#[cfg(target_arch = "wasm32")]
impl Transport for BeaconTransport {
    fn send(&self, url: &str, body: String) -> Result<(), TelemetryError> {
        use wasm_bindgen::JsValue;

        let blob_parts = js_sys::Array::new();
        blob_parts.push(&JsValue::from_str(&body));

        let options = web_sys::BlobPropertyBag::new();
        options.set_type("application/json");

        let blob = web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &options)
            .map_err(|e| TelemetryError::Transport(format!("Failed to build blob: {:?}", e)))?;

        match self.navigator.send_beacon_with_opt_blob(url, Some(&blob)) {
            Ok(true) => Ok(()),
            Ok(false) => Err(TelemetryError::Transport("Beacon queue full".to_string())),
            Err(e) => Err(TelemetryError::Transport(format!("sendBeacon failed: {:?}", e))),
        }
    }
}
