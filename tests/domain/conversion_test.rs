use portfolio_assistant::domain::{ConversionKind, output_filename};

#[test]
fn given_image_upload_when_naming_output_then_uses_stem_with_pdf_extension() {
    assert_eq!(output_filename("photo.png", ConversionKind::ImageToPdf), "photo.pdf");
}

#[test]
fn given_pdf_upload_when_naming_output_then_uses_docx_extension() {
    assert_eq!(output_filename("cv.pdf", ConversionKind::PdfToWord), "cv.docx");
}

#[test]
fn given_filename_with_several_dots_when_naming_output_then_stem_stops_at_first_dot() {
    assert_eq!(
        output_filename("report.final.v2.pdf", ConversionKind::PdfToWord),
        "report.docx"
    );
}

#[test]
fn given_filename_with_directories_when_naming_output_then_directories_are_dropped() {
    assert_eq!(
        output_filename("../../etc/scan.jpg", ConversionKind::ImageToPdf),
        "scan.pdf"
    );
}

#[test]
fn given_hidden_or_empty_filename_when_naming_output_then_falls_back() {
    assert_eq!(output_filename(".png", ConversionKind::ImageToPdf), "converted.pdf");
    assert_eq!(output_filename("", ConversionKind::PdfToWord), "converted.docx");
}

#[test]
fn given_kinds_when_reading_media_types_then_match_artifacts() {
    assert_eq!(ConversionKind::ImageToPdf.media_type(), "application/pdf");
    assert_eq!(
        ConversionKind::PdfToWord.media_type(),
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    );
}
