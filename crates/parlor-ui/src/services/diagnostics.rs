//! Console diagnostics for the header provider. The token itself is never passed here.

const MSG_TOKEN_MISSING: &str = "no access token found in storage";
const MSG_TOKEN_MALFORMED: &str = "stored access token is malformed";

pub(crate) fn token_missing() {
    #[cfg(target_arch = "wasm32")]
    gloo::console::warn!(MSG_TOKEN_MISSING);
    #[cfg(not(target_arch = "wasm32"))]
    tracing::warn!("{MSG_TOKEN_MISSING}");
}

pub(crate) fn token_malformed(length: usize) {
    #[cfg(target_arch = "wasm32")]
    gloo::console::error!(format!("{MSG_TOKEN_MALFORMED} (length {length})"));
    #[cfg(not(target_arch = "wasm32"))]
    tracing::error!(token_length = length, "{MSG_TOKEN_MALFORMED}");
}

pub(crate) fn token_attached(length: usize) {
    #[cfg(target_arch = "wasm32")]
    gloo::console::info!(format!("attaching auth header (token length {length})"));
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!(token_length = length, "attaching auth header");
}
