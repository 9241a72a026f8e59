mod image_pdf_converter;
mod pdf_docx_converter;

pub use image_pdf_converter::{ImagePdfConverter, encode_rgb_pdf, into_rgb};
pub use pdf_docx_converter::PdfDocxConverter;
