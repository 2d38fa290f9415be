use super::attributes::{series_description, study_description, INHERITED_ATTRIBUTES};
use super::context::BatchContext;
use super::pixels::{encode_pixels, PixelEncoding};
use crate::config::ConverterConfig;
use crate::error::{Result, ScCaptureError};
use crate::identity::{generate_instance_id, IdentifierSet, Uid};
use crate::reference::tags::{get_string_value, SERIES_NUMBER};
use crate::reference::ReferenceMetadata;
use crate::types::{PhotometricInterpretation, RasterFrame};
use dicom_core::{DataElement, PrimitiveValue, Tag, VR};
use dicom_dictionary_std::{tags, uids};
use dicom_object::{DefaultDicomObject, FileMetaTable, FileMetaTableBuilder, InMemDicomObject};
use log::{debug, warn};
use std::borrow::Cow;
use std::path::Path;

/// Secondary Capture Image Storage
pub const SECONDARY_CAPTURE_SOP_CLASS_UID: &str = uids::SECONDARY_CAPTURE_IMAGE_STORAGE;

/// Explicit VR Little Endian
pub const TRANSFER_SYNTAX_UID: &str = uids::EXPLICIT_VR_LITTLE_ENDIAN;

/// Conversion Type: workstation
pub const CONVERSION_TYPE: &str = "WSD";

/// Modality: other
pub const MODALITY: &str = "OT";

/// One synthesized Secondary Capture object: file meta header plus data set
#[derive(Debug, Clone)]
pub struct OutputRecord {
    instance_number: usize,
    object: DefaultDicomObject,
}

impl OutputRecord {
    /// 1-based position of the frame in its batch
    pub fn instance_number(&self) -> usize {
        self.instance_number
    }

    /// File meta information
    pub fn meta(&self) -> &FileMetaTable {
        self.object.meta()
    }

    /// Main data set
    pub fn dataset(&self) -> &InMemDicomObject {
        &self.object
    }

    /// Media Storage SOP Instance UID of the header
    pub fn media_storage_sop_instance_uid(&self) -> Uid {
        Uid::new(self.meta().media_storage_sop_instance_uid.as_str())
    }

    /// SOP Instance UID of the data set
    pub fn sop_instance_uid(&self) -> Option<Uid> {
        self.string_value(tags::SOP_INSTANCE_UID).map(Uid::new)
    }

    /// String value of a data set attribute, trimmed
    pub fn string_value(&self, tag: Tag) -> Option<String> {
        get_string_value(self.dataset(), tag)
    }

    /// Unsigned short value of a data set attribute
    pub fn u16_value(&self, tag: Tag) -> Option<u16> {
        self.dataset()
            .element(tag)
            .ok()
            .and_then(|elem| elem.to_int::<u16>().ok())
    }

    /// Raw Pixel Data bytes
    pub fn pixel_data(&self) -> Option<Cow<'_, [u8]>> {
        self.dataset()
            .element(tags::PIXEL_DATA)
            .ok()
            .and_then(|elem| elem.to_bytes().ok())
    }

    /// Serializes the record as a DICOM file
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        self.object.write_to_file(path)?;
        Ok(())
    }

    /// Consumes the record, returning the file object
    pub fn into_file_object(self) -> DefaultDicomObject {
        self.object
    }
}

/// A record with the file name it is written under
#[derive(Debug, Clone)]
pub struct NamedRecord {
    pub file_name: String,
    pub record: OutputRecord,
}

/// Builds the Secondary Capture record for one frame
///
/// `index` is the 0-based position of the frame among `context.total_frames`
/// frames. Patient and study attributes come from `reference` with their
/// declared defaults, identifiers from `ids` plus a fresh instance UID, and
/// all run dates from the batch timestamp.
///
/// # Errors
///
/// - `FrameTooLarge` when the frame does not fit in Rows/Columns
/// - any pixel encoding error of [`encode_pixels`]
/// - `DicomError` if the file meta table cannot be built
pub fn synthesize(
    frame: &RasterFrame,
    index: usize,
    reference: &ReferenceMetadata,
    ids: &IdentifierSet,
    context: &BatchContext,
    source_base_name: &str,
    config: &ConverterConfig,
) -> Result<OutputRecord> {
    let (rows, columns) = match (u16::try_from(frame.height), u16::try_from(frame.width)) {
        (Ok(rows), Ok(columns)) => (rows, columns),
        _ => {
            return Err(ScCaptureError::FrameTooLarge {
                frame: index,
                width: frame.width,
                height: frame.height,
            })
        }
    };
    let encoding = encode_pixels(frame, index)?;
    let instance_uid = generate_instance_id();
    let instance_number = index + 1;
    let ts = &context.timestamp;

    debug!(
        "Frame {}: {}x{} {} -> {}",
        instance_number, columns, rows, frame.color_model, encoding.photometric
    );

    let mut dcm = InMemDicomObject::new_empty();
    put_str(
        &mut dcm,
        tags::SPECIFIC_CHARACTER_SET,
        VR::CS,
        &config.specific_character_set,
    );

    // Patient, General Study and General Series attributes from the reference
    for attribute in &INHERITED_ATTRIBUTES {
        put_str(
            &mut dcm,
            attribute.tag,
            attribute.vr,
            attribute.resolve(reference, ts),
        );
    }
    if let Some(number) = reference.get(SERIES_NUMBER) {
        if number.parse::<i32>().is_err() {
            warn!("Reference SeriesNumber '{}' is not an integer string", number);
        }
    }

    put_str(&mut dcm, tags::STUDY_INSTANCE_UID, VR::UI, ids.study.as_str());
    put_str(
        &mut dcm,
        tags::STUDY_DESCRIPTION,
        VR::LO,
        &study_description(reference, source_base_name),
    );

    put_str(&mut dcm, tags::SERIES_INSTANCE_UID, VR::UI, ids.series.uid.as_str());
    put_str(&mut dcm, tags::MODALITY, VR::CS, MODALITY);
    put_str(&mut dcm, tags::SERIES_DATE, VR::DA, &ts.date);
    put_str(&mut dcm, tags::SERIES_TIME, VR::TM, &ts.time);
    put_str(
        &mut dcm,
        tags::SERIES_DESCRIPTION,
        VR::LO,
        &series_description(source_base_name, index, context),
    );

    // SOP Common and General Image
    put_str(&mut dcm, tags::SOP_CLASS_UID, VR::UI, SECONDARY_CAPTURE_SOP_CLASS_UID);
    put_str(&mut dcm, tags::SOP_INSTANCE_UID, VR::UI, instance_uid.as_str());
    put_str(
        &mut dcm,
        tags::INSTANCE_NUMBER,
        VR::IS,
        &instance_number.to_string(),
    );
    put_str(&mut dcm, tags::CONTENT_DATE, VR::DA, &ts.date);
    put_str(&mut dcm, tags::CONTENT_TIME, VR::TM, &ts.time);
    put_str(
        &mut dcm,
        tags::ACQUISITION_DATE_TIME,
        VR::DT,
        &ts.acquisition_datetime(),
    );

    put_pixel_module(&mut dcm, rows, columns, encoding);

    // SC Image
    put_str(&mut dcm, tags::CONVERSION_TYPE, VR::CS, CONVERSION_TYPE);
    put_str(&mut dcm, tags::DATE_OF_SECONDARY_CAPTURE, VR::DA, &ts.date);
    put_str(&mut dcm, tags::TIME_OF_SECONDARY_CAPTURE, VR::TM, &ts.time);

    let meta = FileMetaTableBuilder::new()
        .media_storage_sop_class_uid(SECONDARY_CAPTURE_SOP_CLASS_UID)
        .media_storage_sop_instance_uid(instance_uid.as_str())
        .transfer_syntax(TRANSFER_SYNTAX_UID)
        .implementation_class_uid(config.implementation_class_uid.as_str())
        .implementation_version_name(config.implementation_version_name.as_str())
        .build()?;

    Ok(OutputRecord {
        instance_number,
        object: dcm.with_exact_meta(meta),
    })
}

/// Image Pixel attributes, Pixel Data, and the presentation LUT shape
fn put_pixel_module(dcm: &mut InMemDicomObject, rows: u16, columns: u16, encoding: PixelEncoding) {
    put_u16(dcm, tags::SAMPLES_PER_PIXEL, encoding.samples_per_pixel());
    put_str(
        dcm,
        tags::PHOTOMETRIC_INTERPRETATION,
        VR::CS,
        encoding.photometric.as_str(),
    );
    put_u16(dcm, tags::ROWS, rows);
    put_u16(dcm, tags::COLUMNS, columns);
    put_u16(dcm, tags::BITS_ALLOCATED, 8);
    put_u16(dcm, tags::BITS_STORED, 8);
    put_u16(dcm, tags::HIGH_BIT, 7);
    put_u16(dcm, tags::PIXEL_REPRESENTATION, 0);
    if let Some(planar) = encoding.planar_configuration {
        put_u16(dcm, tags::PLANAR_CONFIGURATION, planar);
    }
    if encoding.photometric == PhotometricInterpretation::Monochrome2 {
        put_str(dcm, tags::PRESENTATION_LUT_SHAPE, VR::CS, "IDENTITY");
    }
    dcm.put(DataElement::new(
        tags::PIXEL_DATA,
        VR::OB,
        PrimitiveValue::from(encoding.pixels),
    ));
}

fn put_str(dcm: &mut InMemDicomObject, tag: Tag, vr: VR, value: &str) {
    dcm.put(DataElement::new(tag, vr, PrimitiveValue::from(value)));
}

fn put_u16(dcm: &mut InMemDicomObject, tag: Tag, value: u16) {
    dcm.put(DataElement::new(tag, VR::US, PrimitiveValue::from(value)));
}
