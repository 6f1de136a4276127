use crate::error::{ClassifyError, Result};
use base64::Engine;
use std::path::Path;

/// Media type reported when the bytes match no known image format. The
/// service treats the payload as opaque, so an unrecognised format is not an
/// error here.
const FALLBACK_MIME: &str = "application/octet-stream";

/// Read a file and encode it as a base64 `data:` URI.
///
/// The URI doubles as the request payload and as a display source, so the
/// media type is sniffed from the bytes rather than trusted from the file
/// extension. Fails only if the file cannot be read.
pub async fn encode_data_uri(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ClassifyError::Read(format!("{}: {}", path.display(), e)))?;
    Ok(data_uri_from_bytes(&bytes))
}

fn data_uri_from_bytes(bytes: &[u8]) -> String {
    let mime = image::guess_format(bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME);
    let b64 = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime, b64)
}
