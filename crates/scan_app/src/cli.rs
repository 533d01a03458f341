use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use scan_core::CandidateFile;
use scan_engine::{ClientSettings, DEFAULT_BASE_URL};

use crate::logging::LogDestination;

const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Scan a resume and list matching jobs.
#[derive(Debug, Parser)]
#[command(name = "resume-scan", version)]
pub struct Args {
    /// Resume document (PDF or DOCX).
    pub file: PathBuf,

    /// Root URL of the resume-matching service.
    #[arg(long, env = "RESUME_SCAN_SERVER", default_value = DEFAULT_BASE_URL)]
    pub server: String,

    /// Declared media type; guessed from the file extension when omitted.
    #[arg(long)]
    pub media_type: Option<String>,

    /// Extra pages of jobs to load after the first.
    #[arg(long, default_value_t = 0)]
    pub pages: usize,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::Terminal)]
    pub log: LogDestination,

    /// Log debug detail.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            request_timeout: Duration::from_secs(self.timeout_secs),
            ..ClientSettings::with_base_url(self.server.clone())
        }
    }
}

/// Reads `path` into a candidate, declaring `media_type` or the type implied
/// by the extension.
pub fn load_candidate(path: &Path, media_type: Option<&str>) -> Result<CandidateFile> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let media_type = media_type
        .map(str::to_owned)
        .or_else(|| mime_guess::from_path(path).first_raw().map(str::to_owned))
        .unwrap_or_else(|| FALLBACK_MEDIA_TYPE.to_string());
    Ok(CandidateFile::new(name, media_type, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scan_core::{DOCX_MEDIA_TYPE, PDF_MEDIA_TYPE};

    #[test]
    fn defaults_match_local_service() {
        let args = Args::try_parse_from(["resume-scan", "cv.pdf"]).unwrap();
        assert_eq!(args.file, PathBuf::from("cv.pdf"));
        assert_eq!(args.pages, 0);
        assert_eq!(args.log, LogDestination::Terminal);
        let settings = args.client_settings();
        assert_eq!(settings.request_timeout, Duration::from_secs(30));
        assert_eq!(settings.upload_field, "resume");
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "resume-scan",
            "--server",
            "https://scan.example.com/",
            "--pages",
            "3",
            "--timeout-secs",
            "5",
            "--media-type",
            PDF_MEDIA_TYPE,
            "--log",
            "both",
            "cv.bin",
        ])
        .unwrap();
        assert_eq!(args.server, "https://scan.example.com/");
        assert_eq!(args.pages, 3);
        assert_eq!(args.media_type.as_deref(), Some(PDF_MEDIA_TYPE));
        assert_eq!(args.log, LogDestination::Both);
        assert_eq!(
            args.client_settings().request_timeout,
            Duration::from_secs(5)
        );
    }

    #[test]
    fn media_type_is_guessed_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let docx = dir.path().join("cv.docx");
        fs::write(&docx, b"PK").unwrap();

        let file = load_candidate(&docx, None).unwrap();
        assert_eq!(file.name, "cv.docx");
        assert_eq!(file.media_type, DOCX_MEDIA_TYPE);
        assert_eq!(file.bytes, b"PK");
    }

    #[test]
    fn explicit_media_type_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume");
        fs::write(&path, b"%PDF").unwrap();

        let file = load_candidate(&path, Some(PDF_MEDIA_TYPE)).unwrap();
        assert_eq!(file.media_type, PDF_MEDIA_TYPE);

        let unknown = load_candidate(&path, None).unwrap();
        assert_eq!(unknown.media_type, "application/octet-stream");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_candidate(&dir.path().join("nope.pdf"), None).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
