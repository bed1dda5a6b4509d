//! Storage for images uploaded from the editor's image tool.
//!
//! The HTTP layer is left to the caller: it hands over either the uploaded
//! file or the raw JSON body of a fetch-by-URL request, and serializes the
//! returned [`UploadResponse`] as the reply.

pub mod image;

use std::fs::{self, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use self::image::{dimensions, sniff_image_type};

const DEFAULT_FETCH_LIMIT: u64 = 10 * 1024 * 1024;

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("static regex"));

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadMode {
    /// Multipart upload of a local file.
    #[default]
    File,
    /// JSON body naming a remote image to download.
    Url,
}

impl UploadMode {
    pub fn default_param(self) -> &'static str {
        match self {
            UploadMode::File => "image",
            UploadMode::Url => "url",
        }
    }
}

/// Constraints an uploaded image must satisfy. `None` means unchecked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageLimits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<u32>,
    /// Maximum file size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u64>,
    /// Allowed MIME types; empty allows every recognised image type.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSettings {
    /// Directory the files are written to.
    pub path: PathBuf,
    /// Public URL of that directory.
    pub url: String,
    pub mode: UploadMode,
    /// Request field carrying the file or URL; defaults by mode.
    pub param: Option<String>,
    /// Prefix stored names with a unique id.
    pub unique: bool,
    /// Overwrite an existing file with the same name.
    pub replace: bool,
    pub limits: ImageLimits,
}

impl UploadSettings {
    pub fn new(path: impl Into<PathBuf>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
            mode: UploadMode::File,
            param: None,
            unique: true,
            replace: false,
            limits: ImageLimits::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadConfigError {
    #[error("The upload url must be set")]
    MissingUrl,

    #[error("Directory `{path}` doesn't exist or cannot be created: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("No image url given")]
    MissingUrl,
    #[error("Invalid image url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Failed to fetch `{url}`: {reason}")]
    Fetch { url: String, reason: String },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A file received from the client or downloaded from a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Client-side file name, including extension.
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn from_path(path: &Path) -> io::Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, fs::read(path)?))
    }

    fn base_name(&self) -> &str {
        match self.name.rsplit_once('.') {
            Some((base, _)) if !base.is_empty() => base,
            _ => &self.name,
        }
    }

    fn extension(&self) -> Option<String> {
        match self.name.rsplit_once('.') {
            Some((base, ext)) if !base.is_empty() && !ext.is_empty() => {
                Some(ext.to_ascii_lowercase())
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    pub url: String,
    pub original_file_name: String,
}

/// Reply envelope expected by the editor's image tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<StoredFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadResponse {
    pub fn stored(file: StoredFile) -> Self {
        Self {
            success: 1,
            file: Some(file),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: 0,
            file: None,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success == 1
    }
}

#[derive(Debug, Clone)]
pub struct ImageUploader {
    settings: UploadSettings,
}

impl ImageUploader {
    /// Normalizes the public URL and makes sure the storage directory exists.
    pub fn new(mut settings: UploadSettings) -> Result<Self, UploadConfigError> {
        if settings.url.trim().is_empty() {
            return Err(UploadConfigError::MissingUrl);
        }
        settings.url = format!("{}/", settings.url.trim_end_matches('/'));

        fs::create_dir_all(&settings.path).map_err(|source| {
            UploadConfigError::CreateDirectory {
                path: settings.path.clone(),
                source,
            }
        })?;

        Ok(Self { settings })
    }

    pub fn settings(&self) -> &UploadSettings {
        &self.settings
    }

    pub fn param(&self) -> &str {
        self.settings
            .param
            .as_deref()
            .unwrap_or_else(|| self.settings.mode.default_param())
    }

    /// The image URL named by the request body, if any.
    pub fn request_body_url(&self, body: &str) -> Option<String> {
        let value: Value = serde_json::from_str(body).ok()?;
        value
            .get(self.param())
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
    }

    /// Download a remote image over HTTP(S).
    pub fn fetch_remote(&self, url: &str) -> Result<UploadedFile, UploadError> {
        if url.is_empty() {
            return Err(UploadError::MissingUrl);
        }
        let parsed = url::Url::parse(url).map_err(|e| UploadError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(UploadError::InvalidUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme `{}`", parsed.scheme()),
            });
        }

        let response = ureq::get(parsed.as_str())
            .call()
            .map_err(|e| UploadError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        if response.status() != 200 {
            return Err(UploadError::Fetch {
                url: url.to_string(),
                reason: format!("unexpected status {}", response.status()),
            });
        }

        let limit = self.settings.limits.max_size.unwrap_or(DEFAULT_FETCH_LIMIT);
        let mut bytes = Vec::new();
        response
            .into_reader()
            .take(limit.saturating_add(1))
            .read_to_end(&mut bytes)?;
        if bytes.len() as u64 > limit {
            return Err(UploadError::Fetch {
                url: url.to_string(),
                reason: format!("response exceeds {limit} bytes"),
            });
        }

        let name = parsed
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default()
            .to_string();

        Ok(UploadedFile::new(name, bytes))
    }

    /// Handle a fetch-by-URL request body end to end.
    pub fn store_from_request_body(&self, body: &str) -> UploadResponse {
        let file = self
            .request_body_url(body)
            .ok_or(UploadError::MissingUrl)
            .and_then(|url| self.fetch_remote(&url));
        match file {
            Ok(file) => self.store(Some(file)),
            Err(e) => {
                log::warn!("Image fetch failed: {e}");
                self.store(None)
            }
        }
    }

    /// Validate and write an uploaded image, answering with the reply envelope.
    pub fn store(&self, file: Option<UploadedFile>) -> UploadResponse {
        let Some(file) = file else {
            return UploadResponse::failed("File upload error");
        };

        if let Err(message) = self.validate(&file) {
            log::warn!("Rejected upload of `{}`: {message}", file.name);
            return UploadResponse::failed(message);
        }

        let name = self.stored_name(&file);
        let target = self.settings.path.join(&name);

        match self.write(&target, &file.bytes) {
            Ok(()) => {
                log::info!("Stored upload `{}` as {}", file.name, target.display());
                UploadResponse::stored(StoredFile {
                    url: format!("{}{}", self.settings.url, name),
                    original_file_name: file.name,
                })
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                UploadResponse::failed("File already exist")
            }
            Err(e) => {
                log::warn!("Failed to write {}: {e}", target.display());
                UploadResponse::failed("File can not upload")
            }
        }
    }

    fn write(&self, target: &Path, bytes: &[u8]) -> io::Result<()> {
        let mut options = OpenOptions::new();
        options.write(true);
        if self.settings.replace {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }
        write_or_remove(target, options.open(target)?, bytes)
    }

    fn stored_name(&self, file: &UploadedFile) -> String {
        let name = match file.extension() {
            Some(ext) => format!("{}.{}", slug(file.base_name()), slug(&ext)),
            None => slug(&file.name),
        };
        if self.settings.unique {
            format!("{}-{}", uuid::Uuid::new_v4().simple(), name)
        } else {
            name
        }
    }

    fn validate(&self, file: &UploadedFile) -> Result<(), String> {
        let limits = &self.settings.limits;
        let name = &file.name;

        if file.bytes.is_empty() {
            return Err("Please upload a file.".to_string());
        }
        if let Some(max) = limits.max_size
            && file.bytes.len() as u64 > max
        {
            return Err(format!(
                "The file \"{name}\" is too big. Its size cannot exceed {max} bytes."
            ));
        }

        let not_image = || format!("The file \"{name}\" is not an image.");
        let mime = sniff_image_type(&file.bytes).ok_or_else(not_image)?;
        if !limits.allowed_types.is_empty() && !limits.allowed_types.iter().any(|t| t == mime) {
            return Err(format!(
                "Only files with these MIME types are allowed: {}.",
                limits.allowed_types.join(", ")
            ));
        }

        let size = dimensions(&file.bytes).ok_or_else(not_image)?;
        let checks = [
            (limits.min_width, size.width < limits.min_width.unwrap_or(0), "small", "width", "smaller"),
            (limits.min_height, size.height < limits.min_height.unwrap_or(0), "small", "height", "smaller"),
            (limits.max_width, size.width > limits.max_width.unwrap_or(u32::MAX), "large", "width", "larger"),
            (limits.max_height, size.height > limits.max_height.unwrap_or(u32::MAX), "large", "height", "larger"),
        ];
        for (limit, violated, size_word, side, comparison) in checks {
            if let Some(limit) = limit
                && violated
            {
                return Err(format!(
                    "The image \"{name}\" is too {size_word}. The {side} cannot be {comparison} than {limit} pixels."
                ));
            }
        }

        Ok(())
    }
}

// A partly written file would block every later upload of the same name.
fn write_or_remove(target: &Path, mut out: impl Write, bytes: &[u8]) -> io::Result<()> {
    let written = out.write_all(bytes).and_then(|()| out.flush());
    drop(out);
    if written.is_err()
        && let Err(e) = fs::remove_file(target)
    {
        log::warn!("Failed to remove partial upload {}: {e}", target.display());
    }
    written
}

/// Lowercase ASCII slug with runs of other characters collapsed to `-`.
fn slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    let slug = NON_SLUG_CHARS.replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "file".to_string()
    } else {
        slug.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::image::fixtures;
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::net::TcpListener;
    use std::thread;
    use tempfile::TempDir;

    fn uploader(dir: &TempDir, configure: impl FnOnce(&mut UploadSettings)) -> ImageUploader {
        let mut settings = UploadSettings::new(dir.path().join("uploads"), "https://cdn.test/img");
        settings.unique = false;
        configure(&mut settings);
        ImageUploader::new(settings).unwrap()
    }

    #[rstest]
    #[case("My Holiday Photo", "my-holiday-photo")]
    #[case("  --Already-slugged--  ", "already-slugged")]
    #[case("../../etc/passwd", "etc-passwd")]
    #[case("Ünïcode", "n-code")]
    #[case("???", "file")]
    fn test_slug(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(slug(input), expected);
    }

    #[test]
    fn test_new_normalizes_url_and_creates_directory() {
        let dir = TempDir::new().unwrap();
        let up = uploader(&dir, |s| s.url = "https://cdn.test/img///".to_string());

        assert_eq!(up.settings().url, "https://cdn.test/img/");
        assert!(dir.path().join("uploads").is_dir());
    }

    #[test]
    fn test_new_requires_url() {
        let dir = TempDir::new().unwrap();
        let err = ImageUploader::new(UploadSettings::new(dir.path(), " ")).unwrap_err();
        assert!(matches!(err, UploadConfigError::MissingUrl));
    }

    #[test]
    fn test_param_defaults_by_mode() {
        let dir = TempDir::new().unwrap();
        assert_eq!(uploader(&dir, |_| {}).param(), "image");
        assert_eq!(uploader(&dir, |s| s.mode = UploadMode::Url).param(), "url");
        assert_eq!(
            uploader(&dir, |s| s.param = Some("picture".to_string())).param(),
            "picture"
        );
    }

    #[test]
    fn test_store_writes_slugged_file() {
        let dir = TempDir::new().unwrap();
        let up = uploader(&dir, |_| {});

        let response = up.store(Some(UploadedFile::new("Team Photo.PNG", fixtures::png(10, 10))));

        assert_eq!(
            response,
            UploadResponse::stored(StoredFile {
                url: "https://cdn.test/img/team-photo.png".to_string(),
                original_file_name: "Team Photo.PNG".to_string(),
            })
        );
        assert!(dir.path().join("uploads/team-photo.png").is_file());
    }

    #[test]
    fn test_unique_names_get_a_prefix() {
        let dir = TempDir::new().unwrap();
        let up = uploader(&dir, |s| s.unique = true);

        let first = up.store(Some(UploadedFile::new("a.gif", fixtures::gif(1, 1))));
        let second = up.store(Some(UploadedFile::new("a.gif", fixtures::gif(1, 1))));

        let first_url = first.file.unwrap().url;
        let second_url = second.file.unwrap().url;
        assert!(first_url.ends_with("-a.gif"));
        assert_ne!(first_url, second_url);
    }

    #[test]
    fn test_existing_file_is_not_replaced_by_default() {
        let dir = TempDir::new().unwrap();
        let up = uploader(&dir, |_| {});
        up.store(Some(UploadedFile::new("a.png", fixtures::png(1, 1))));

        let response = up.store(Some(UploadedFile::new("a.png", fixtures::png(2, 2))));

        assert_eq!(response, UploadResponse::failed("File already exist"));
    }

    #[test]
    fn test_existing_file_is_replaced_when_allowed() {
        let dir = TempDir::new().unwrap();
        let up = uploader(&dir, |s| s.replace = true);
        up.store(Some(UploadedFile::new("a.png", fixtures::png(1, 1))));

        let response = up.store(Some(UploadedFile::new("a.png", fixtures::png(2, 2))));

        assert!(response.is_success());
        let written = fs::read(dir.path().join("uploads/a.png")).unwrap();
        assert_eq!(written, fixtures::png(2, 2));
    }

    #[test]
    fn test_missing_file_is_an_upload_error() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            uploader(&dir, |_| {}).store(None),
            UploadResponse::failed("File upload error")
        );
    }

    #[rstest]
    #[case::not_image(
        |_: &mut ImageLimits| {},
        UploadedFile::new("notes.txt", b"plain text".to_vec()),
        "The file \"notes.txt\" is not an image."
    )]
    #[case::too_wide(
        |l: &mut ImageLimits| l.max_width = Some(100),
        UploadedFile::new("wide.png", fixtures::png(101, 10)),
        "The image \"wide.png\" is too large. The width cannot be larger than 100 pixels."
    )]
    #[case::too_short(
        |l: &mut ImageLimits| l.min_height = Some(50),
        UploadedFile::new("short.png", fixtures::png(60, 49)),
        "The image \"short.png\" is too small. The height cannot be smaller than 50 pixels."
    )]
    #[case::too_big(
        |l: &mut ImageLimits| l.max_size = Some(10),
        UploadedFile::new("big.png", fixtures::png(1, 1)),
        "The file \"big.png\" is too big. Its size cannot exceed 10 bytes."
    )]
    #[case::extended_webp_too_wide(
        |l: &mut ImageLimits| l.max_width = Some(1000),
        UploadedFile::new("pano.webp", fixtures::webp_vp8x(4000, 500)),
        "The image \"pano.webp\" is too large. The width cannot be larger than 1000 pixels."
    )]
    #[case::top_down_bmp_too_tall(
        |l: &mut ImageLimits| l.max_height = Some(100),
        UploadedFile::new("scan.bmp", fixtures::bmp(50, -300)),
        "The image \"scan.bmp\" is too large. The height cannot be larger than 100 pixels."
    )]
    #[case::wrong_type(
        |l: &mut ImageLimits| l.allowed_types = vec!["image/png".to_string()],
        UploadedFile::new("anim.gif", fixtures::gif(1, 1)),
        "Only files with these MIME types are allowed: image/png."
    )]
    fn test_validation_failures(
        #[case] limits: fn(&mut ImageLimits),
        #[case] file: UploadedFile,
        #[case] message: &str,
    ) {
        let dir = TempDir::new().unwrap();
        let up = uploader(&dir, |s| limits(&mut s.limits));

        assert_eq!(up.store(Some(file)), UploadResponse::failed(message));
    }

    #[test]
    fn test_lossless_webp_is_stored() {
        let dir = TempDir::new().unwrap();
        let up = uploader(&dir, |s| s.limits.max_width = Some(1000));

        let response = up.store(Some(UploadedFile::new("icon.webp", fixtures::webp_vp8l(64, 64))));

        assert!(response.is_success());
        assert!(dir.path().join("uploads/icon.webp").is_file());
    }

    #[test]
    fn test_request_body_url_uses_param() {
        let dir = TempDir::new().unwrap();
        let up = uploader(&dir, |s| s.mode = UploadMode::Url);

        assert_eq!(
            up.request_body_url(r#"{"url":"https://example.com/a.png"}"#).as_deref(),
            Some("https://example.com/a.png")
        );
        assert_eq!(up.request_body_url(r#"{"url":""}"#), None);
        assert_eq!(up.request_body_url("not json"), None);
    }

    #[test]
    fn test_request_body_without_url_is_an_upload_error() {
        let dir = TempDir::new().unwrap();
        let up = uploader(&dir, |s| s.mode = UploadMode::Url);

        assert_eq!(
            up.store_from_request_body("{}"),
            UploadResponse::failed("File upload error")
        );
    }

    #[test]
    fn test_fetch_rejects_non_http_schemes() {
        let dir = TempDir::new().unwrap();
        let err = uploader(&dir, |_| {})
            .fetch_remote("file:///etc/passwd")
            .unwrap_err();

        assert!(matches!(err, UploadError::InvalidUrl { .. }));
    }

    #[test]
    fn test_response_envelope_shape() {
        let ok = UploadResponse::stored(StoredFile {
            url: "https://cdn.test/a.png".to_string(),
            original_file_name: "A.png".to_string(),
        });
        assert_eq!(
            serde_json::to_string(&ok).unwrap(),
            r#"{"success":1,"file":{"url":"https://cdn.test/a.png","originalFileName":"A.png"}}"#
        );
        assert_eq!(
            serde_json::to_string(&UploadResponse::failed("File already exist")).unwrap(),
            r#"{"success":0,"error":"File already exist"}"#
        );
    }

    /// Answers a single GET with `body` and returns the server's base URL.
    fn serve_once(body: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            // the client may hang up once it has read past its limit
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(&body);
        });
        format!("http://{addr}")
    }

    fn png_of_len(len: usize) -> Vec<u8> {
        let mut bytes = fixtures::png(4, 4);
        bytes.resize(len, 0);
        bytes
    }

    #[test]
    fn test_fetch_remote_downloads_whole_body() {
        let dir = TempDir::new().unwrap();
        let body = png_of_len(256);
        let base = serve_once(body.clone());

        let file = uploader(&dir, |_| {})
            .fetch_remote(&format!("{base}/images/photo.png"))
            .unwrap();

        assert_eq!(file.name, "photo.png");
        assert_eq!(file.bytes, body);
    }

    #[test]
    fn test_fetch_remote_rejects_body_over_max_size() {
        let dir = TempDir::new().unwrap();
        let base = serve_once(png_of_len(200));
        let up = uploader(&dir, |s| s.limits.max_size = Some(64));

        let err = up.fetch_remote(&format!("{base}/big.png")).unwrap_err();

        assert!(
            matches!(err, UploadError::Fetch { ref reason, .. } if reason == "response exceeds 64 bytes")
        );
    }

    #[test]
    fn test_oversized_download_is_not_stored_without_max_size() {
        let dir = TempDir::new().unwrap();
        let base = serve_once(png_of_len(DEFAULT_FETCH_LIMIT as usize + 1024));
        let up = uploader(&dir, |s| s.mode = UploadMode::Url);

        let response = up.store_from_request_body(&format!(r#"{{"url":"{base}/huge.png"}}"#));

        assert_eq!(response, UploadResponse::failed("File upload error"));
        assert!(!dir.path().join("uploads/huge.png").exists());
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_write_removes_partial_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("partial.png");
        fs::write(&target, b"half").unwrap();

        let err = write_or_remove(&target, FailingWriter, b"whole file").unwrap_err();

        assert_eq!(err.to_string(), "disk full");
        assert!(!target.exists());
    }

    #[test]
    fn test_successful_write_keeps_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("done.png");
        let out = fs::File::create(&target).unwrap();

        write_or_remove(&target, out, b"whole file").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"whole file");
    }
}
