//! Pure request-building helpers extracted for non-wasm testing.

use parlor_api_models::IMAGES_PATH;

/// Path and query for deleting the image stored at `image_url`.
#[must_use]
pub fn delete_image_path(image_url: &str) -> String {
    format!("{IMAGES_PATH}?url={}", urlencoding::encode(image_url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_path_percent_encodes_target() {
        assert_eq!(
            delete_image_path("https://store.public.blob.vercel-storage.com/a b.png?v=1"),
            "/api/images?url=https%3A%2F%2Fstore.public.blob.vercel-storage.com%2Fa%20b.png%3Fv%3D1"
        );
    }
}
