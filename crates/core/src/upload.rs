//! Upload constraints and stored-filename generation for image ingestion.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum accepted image payload (10 MiB).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Multipart field name carrying the image.
pub const UPLOAD_FIELD: &str = "image";

/// Fallback extension when the original filename has none.
const DEFAULT_EXTENSION: &str = "bin";

// ---------------------------------------------------------------------------
// Purpose
// ---------------------------------------------------------------------------

/// What an uploaded image is for. Determines the storage subdirectory and
/// the filename prefix, keeping hero and product images segregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePurpose {
    Hero,
    Product,
}

impl ImagePurpose {
    /// Subdirectory under the upload root.
    pub fn dir_name(self) -> &'static str {
        match self {
            ImagePurpose::Hero => "hero",
            ImagePurpose::Product => "products",
        }
    }

    /// Filename prefix for stored images.
    pub fn file_prefix(self) -> &'static str {
        match self {
            ImagePurpose::Hero => "hero",
            ImagePurpose::Product => "product",
        }
    }

    /// Public URL path for a stored file, relative to the server root.
    pub fn public_path(self, filename: &str) -> String {
        format!("/uploads/{}/{}", self.dir_name(), filename)
    }
}

// ---------------------------------------------------------------------------
// Content checks
// ---------------------------------------------------------------------------

/// Only `image/*` content types are accepted.
pub fn is_image_content_type(content_type: &str) -> bool {
    content_type.starts_with("image/")
}

/// Whether a payload exceeds the upload size cap.
pub fn exceeds_size_limit(len: usize) -> bool {
    len > MAX_UPLOAD_BYTES
}

// ---------------------------------------------------------------------------
// Filename generation
// ---------------------------------------------------------------------------

/// Build a collision-resistant stored filename:
/// `{prefix}-{timestamp_millis}-{random}.{ext}`.
///
/// The extension is taken from the client-supplied filename (lowercased,
/// alphanumerics only) and falls back to a neutral extension when missing
/// or suspicious. Timestamp and random suffix are passed in so the result
/// is deterministic under test.
pub fn stored_filename(
    purpose: ImagePurpose,
    original_name: &str,
    timestamp_millis: i64,
    random: u32,
) -> String {
    let ext = sanitize_extension(original_name);
    format!(
        "{}-{}-{}.{}",
        purpose.file_prefix(),
        timestamp_millis,
        random,
        ext
    )
}

/// Extract a safe lowercase extension from a client filename.
fn sanitize_extension(original_name: &str) -> String {
    let ext = original_name
        .rsplit('.')
        .next()
        .filter(|e| *e != original_name)
        .unwrap_or("");
    if !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        ext.to_ascii_lowercase()
    } else {
        DEFAULT_EXTENSION.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_image_content_types() {
        assert!(is_image_content_type("image/png"));
        assert!(is_image_content_type("image/jpeg"));
        assert!(is_image_content_type("image/webp"));
    }

    #[test]
    fn rejects_non_image_content_types() {
        assert!(!is_image_content_type("application/pdf"));
        assert!(!is_image_content_type("text/html"));
        assert!(!is_image_content_type(""));
    }

    #[test]
    fn size_limit_boundary() {
        assert!(!exceeds_size_limit(MAX_UPLOAD_BYTES));
        assert!(exceeds_size_limit(MAX_UPLOAD_BYTES + 1));
    }

    #[test]
    fn filename_keeps_extension_and_prefix() {
        let name = stored_filename(ImagePurpose::Product, "photo.PNG", 1700000000000, 42);
        assert_eq!(name, "product-1700000000000-42.png");
    }

    #[test]
    fn hero_filenames_use_hero_prefix() {
        let name = stored_filename(ImagePurpose::Hero, "banner.jpg", 1700000000000, 7);
        assert!(name.starts_with("hero-"));
        assert!(name.ends_with(".jpg"));
    }

    #[test]
    fn missing_extension_falls_back() {
        let name = stored_filename(ImagePurpose::Product, "photo", 1, 1);
        assert!(name.ends_with(".bin"));
    }

    #[test]
    fn hostile_extension_falls_back() {
        let name = stored_filename(ImagePurpose::Product, "a.p/../ng", 1, 1);
        assert!(name.ends_with(".bin"));
    }

    #[test]
    fn public_paths_are_segregated_by_purpose() {
        assert_eq!(
            ImagePurpose::Hero.public_path("hero-1-2.jpg"),
            "/uploads/hero/hero-1-2.jpg"
        );
        assert_eq!(
            ImagePurpose::Product.public_path("product-1-2.jpg"),
            "/uploads/products/product-1-2.jpg"
        );
    }
}
