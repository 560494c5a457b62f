//! Image placement extraction.

use crate::elements::ImagePlacement;
use crate::error::Result;
use crate::geometry::BoundingBox;
use crate::source::DocumentSource;

/// Collect a page's image placements.
///
/// Each resource is decoded once; every occurrence rectangle then yields one
/// placement sharing the decoded payload. A resource that fails to decode or
/// decodes to an empty payload is skipped with a warning, never fatal.
pub fn extract_images<S: DocumentSource + ?Sized>(
    source: &S,
    page_index: usize,
    page_w: f32,
    page_h: f32,
) -> Result<Vec<ImagePlacement>> {
    let mut placements: Vec<ImagePlacement> = Vec::new();

    for (res_idx, resource) in source.image_resources(page_index)?.into_iter().enumerate() {
        let decoded = match source.decode_image(page_index, &resource.resource_id) {
            Ok(decoded) => decoded,
            Err(err) => {
                log::warn!(
                    "page {}: skipping image resource {}: {}",
                    page_index + 1,
                    resource.resource_id,
                    err
                );
                continue;
            },
        };
        if decoded.bytes.is_empty() {
            continue;
        }

        let mime = mime_for_extension(&decoded.ext);
        for (rect_idx, rect) in resource.rects.iter().enumerate() {
            let [x0, y0, x1, y1] = *rect;
            placements.push(ImagePlacement {
                id: format!("img_{}_{}_{}", resource.resource_id, res_idx, rect_idx),
                bbox: BoundingBox::normalized(x0, y0, x1, y1, page_w, page_h),
                mime: mime.clone(),
                bytes: decoded.bytes.clone(),
            });
        }
    }

    Ok(placements)
}

/// MIME type for an image file extension.
pub(crate) fn mime_for_extension(ext: &str) -> String {
    let ext = ext.to_ascii_lowercase();
    let ext = if ext == "jpg" { "jpeg".to_string() } else { ext };
    format!("image/{}", ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_extension() {
        assert_eq!(mime_for_extension("png"), "image/png");
        assert_eq!(mime_for_extension("jpg"), "image/jpeg");
        assert_eq!(mime_for_extension("JPG"), "image/jpeg");
        assert_eq!(mime_for_extension("jpeg"), "image/jpeg");
        assert_eq!(mime_for_extension("tiff"), "image/tiff");
    }
}
