use crate::ValidationError;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";
pub const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Largest accepted document, in bytes (5 MiB).
pub const MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;

const ACCEPTED_MEDIA_TYPES: &[&str] = &[PDF_MEDIA_TYPE, DOCX_MEDIA_TYPE];

/// A document the user picked, before validation.
#[derive(Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub name: String,
    /// Declared media type. Never sniffed from `bytes`.
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

// Manual impl keeps multi-megabyte payloads out of debug logs.
impl std::fmt::Debug for CandidateFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CandidateFile")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .field("size", &self.size())
            .finish()
    }
}

/// A file that passed [`validate`]. Only constructible through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidFile(CandidateFile);

impl ValidFile {
    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn media_type(&self) -> &str {
        &self.0.media_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.0.bytes
    }

    pub fn size(&self) -> u64 {
        self.0.size()
    }
}

/// Checks the declared media type, then the size ceiling.
///
/// Content is not inspected: the declared type is the trust boundary.
pub fn validate(file: CandidateFile) -> Result<ValidFile, ValidationError> {
    if !is_accepted_media_type(&file.media_type) {
        return Err(ValidationError::UnsupportedType {
            media_type: file.media_type,
        });
    }
    let size = file.size();
    if size > MAX_FILE_BYTES {
        return Err(ValidationError::TooLarge {
            size,
            max: MAX_FILE_BYTES,
        });
    }
    Ok(ValidFile(file))
}

fn is_accepted_media_type(media_type: &str) -> bool {
    let essence = media_type
        .split(';')
        .next()
        .unwrap_or(media_type)
        .trim();
    ACCEPTED_MEDIA_TYPES
        .iter()
        .any(|accepted| accepted.eq_ignore_ascii_case(essence))
}
