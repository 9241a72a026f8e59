use std::path::{Path, PathBuf};

use async_trait::async_trait;
use image::{DynamicImage, RgbImage};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

use crate::application::ports::{ConversionError, FileConverter};
use crate::domain::ConversionKind;

const IMAGE_RESOURCE_NAME: &str = "Im0";

/// Wraps one raster image in a single-page PDF, one point per pixel.
#[derive(Default)]
pub struct ImagePdfConverter;

impl ImagePdfConverter {
    pub fn new() -> Self {
        Self
    }

    fn render(input: &Path, output: &Path) -> Result<(), ConversionError> {
        let data = std::fs::read(input)?;

        let image = image::load_from_memory(&data).map_err(|e| {
            ConversionError::UnreadableInput(format!("cannot identify image file: {e}"))
        })?;

        let rgb = into_rgb(image);
        let pdf = encode_rgb_pdf(&rgb)?;

        std::fs::write(output, pdf)?;
        Ok(())
    }
}

#[async_trait]
impl FileConverter for ImagePdfConverter {
    fn kind(&self) -> ConversionKind {
        ConversionKind::ImageToPdf
    }

    #[tracing::instrument(skip(self), fields(input = %input.display()))]
    async fn convert(&self, input: &Path, output: &Path) -> Result<(), ConversionError> {
        let input: PathBuf = input.to_path_buf();
        let output: PathBuf = output.to_path_buf();

        tokio::task::spawn_blocking(move || Self::render(&input, &output))
            .await
            .map_err(|e| ConversionError::ConversionFailed(format!("task join error: {e}")))?
    }
}

/// Full-color images pass through untouched; every other color mode is converted.
pub fn into_rgb(image: DynamicImage) -> RgbImage {
    match image {
        DynamicImage::ImageRgb8(rgb) => rgb,
        other => {
            tracing::debug!(color = ?other.color(), "Converting image to RGB");
            other.into_rgb8()
        }
    }
}

pub fn encode_rgb_pdf(rgb: &RgbImage) -> Result<Vec<u8>, ConversionError> {
    let (width, height) = rgb.dimensions();
    let width = i64::from(width);
    let height = i64::from(height);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut image_stream = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => Object::Integer(width),
            "Height" => Object::Integer(height),
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => Object::Integer(8),
        },
        rgb.as_raw().clone(),
    );
    // Uncompressed pixels are still a valid stream.
    let _ = image_stream.compress();
    let image_id = doc.add_object(image_stream);

    let resources_id = doc.add_object(dictionary! {
        "XObject" => dictionary! {
            IMAGE_RESOURCE_NAME => Object::Reference(image_id),
        },
    });

    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    Object::Integer(width),
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(height),
                    Object::Integer(0),
                    Object::Integer(0),
                ],
            ),
            Operation::new(
                "Do",
                vec![Object::Name(IMAGE_RESOURCE_NAME.as_bytes().to_vec())],
            ),
            Operation::new("Q", vec![]),
        ],
    };
    let content_bytes = content
        .encode()
        .map_err(|e| ConversionError::ConversionFailed(format!("page content: {e}")))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, content_bytes));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => Object::Reference(pages_id),
        "Contents" => Object::Reference(content_id),
        "Resources" => Object::Reference(resources_id),
        "MediaBox" => Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(width),
            Object::Integer(height),
        ]),
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => Object::Array(vec![Object::Reference(page_id)]),
            "Count" => Object::Integer(1),
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| ConversionError::ConversionFailed(format!("failed to write PDF: {e}")))?;

    Ok(buffer)
}
