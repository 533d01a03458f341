use scan_core::{
    validate, CandidateFile, ValidationError, DOCX_MEDIA_TYPE, MAX_FILE_BYTES, PDF_MEDIA_TYPE,
    TOO_LARGE_MESSAGE, UNSUPPORTED_TYPE_MESSAGE,
};

fn file_of(media_type: &str, size: usize) -> CandidateFile {
    CandidateFile::new("resume", media_type, vec![0u8; size])
}

#[test]
fn accepts_pdf_and_docx_at_the_limit() {
    let limit = MAX_FILE_BYTES as usize;
    for media_type in [PDF_MEDIA_TYPE, DOCX_MEDIA_TYPE] {
        let valid = validate(file_of(media_type, limit)).expect("accepted");
        assert_eq!(valid.size(), MAX_FILE_BYTES);
        assert_eq!(valid.media_type(), media_type);
    }
}

#[test]
fn accepts_empty_and_small_files() {
    assert!(validate(file_of(PDF_MEDIA_TYPE, 0)).is_ok());
    assert!(validate(file_of(DOCX_MEDIA_TYPE, 1024)).is_ok());
}

#[test]
fn rejects_one_byte_over_the_limit() {
    let err = validate(file_of(PDF_MEDIA_TYPE, MAX_FILE_BYTES as usize + 1)).unwrap_err();
    assert_eq!(
        err,
        ValidationError::TooLarge {
            size: MAX_FILE_BYTES + 1,
            max: MAX_FILE_BYTES,
        }
    );
    assert_eq!(err.user_message(), TOO_LARGE_MESSAGE);
}

#[test]
fn rejects_other_media_types() {
    for media_type in [
        "application/msword",
        "text/plain",
        "image/png",
        "",
        "application/pdfx",
    ] {
        let err = validate(file_of(media_type, 10)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnsupportedType {
                media_type: media_type.to_string()
            }
        );
        assert_eq!(err.user_message(), UNSUPPORTED_TYPE_MESSAGE);
    }
}

#[test]
fn media_type_ignores_case_and_parameters() {
    assert!(validate(file_of("Application/PDF", 10)).is_ok());
    assert!(validate(file_of("application/pdf; charset=binary", 10)).is_ok());
}

#[test]
fn type_is_checked_before_size() {
    let err = validate(file_of("text/plain", MAX_FILE_BYTES as usize + 1)).unwrap_err();
    assert!(matches!(err, ValidationError::UnsupportedType { .. }));
}

#[test]
fn content_is_not_sniffed() {
    let file = CandidateFile::new("notes.pdf", PDF_MEDIA_TYPE, b"plain text, not a pdf".to_vec());
    assert!(validate(file).is_ok());
}
