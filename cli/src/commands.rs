//! Command implementations over any transport.

use anyhow::Context;
use std::path::Path;

use mever_client::VerifyTransport;
use mever_form::{FormView, VerificationForm};
use mever_types::{declared_type_for_path, FileSelection};

/// Select `path` in the form and submit it if the selection was accepted.
///
/// Local rejections and service failures end up in the returned view's
/// error panel; only an unreadable file is an `Err`.
pub async fn verify_file<T: VerifyTransport>(
    form: &VerificationForm<T>,
    path: &Path,
) -> anyhow::Result<FormView> {
    let data = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let selection = FileSelection::new(file_name, declared_type_for_path(path), data);

    if form.select_file(Some(selection)).is_ok() {
        form.submit().await;
    }
    Ok(form.view())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mever_form::FormOptions;
    use mever_nullables::NullTransport;
    use serde_json::json;
    use std::io::Write;

    fn image_file(suffix: &str, bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("mever-")
            .suffix(suffix)
            .tempfile()
            .unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    #[tokio::test]
    async fn verifies_png_from_disk() {
        let transport = NullTransport::new().respond_json(
            200,
            json!({"is_me": false, "score": 0.31, "threshold": 0.75, "timing_ms": 88.2}),
        );
        let form = VerificationForm::new(transport, FormOptions::default());
        let file = image_file(".png", b"\x89PNG\r\n");

        let view = verify_file(&form, file.path()).await.unwrap();
        let panel = view.result.unwrap();
        assert_eq!(panel.headline, "IS NOT ME");
        assert_eq!(panel.score, "0.3100");
        assert_eq!(panel.latency, "88.2 ms");

        let upload = &form.transport().uploads()[0];
        assert_eq!(upload.media_type.as_mime(), "image/png");
        assert!(upload.file_name.ends_with(".png"));
        assert_eq!(&upload.data[..], b"\x89PNG\r\n");
    }

    #[tokio::test]
    async fn unsupported_extension_is_never_sent() {
        let form = VerificationForm::new(NullTransport::new(), FormOptions::default());
        let file = image_file(".webp", b"RIFF....WEBP");

        let view = verify_file(&form, file.path()).await.unwrap();
        assert!(view.error.is_some());
        assert!(view.result.is_none());
        assert_eq!(form.transport().request_count(), 0);
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let form = VerificationForm::new(NullTransport::new(), FormOptions::default());
        let err = verify_file(&form, Path::new("/nonexistent/face.jpg"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/face.jpg"));
    }
}
