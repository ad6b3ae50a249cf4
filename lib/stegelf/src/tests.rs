use std::io;

use image::RgbImage;

use crate::{Carrier, ElfError, Error, ObjectFile};

#[test]
fn missing_sections_are_reported_separately() {
    assert!(matches!(
        Error::from(ElfError::MissingSection(".strtab")),
        Error::MissingSection(".strtab")
    ));
    assert!(matches!(Error::from(ElfError::BadMagic), Error::Format(ElfError::BadMagic)));
}

#[test]
fn image_buffers_expose_raw_pixel_bytes() {
    let mut image = RgbImage::new(4, 2);
    assert_eq!(image.pixel_bytes().len(), 4 * 2 * 3);

    image.pixel_bytes_mut()[3] = 0xab;
    assert_eq!(image.get_pixel(1, 0).0, [0xab, 0, 0]);
}

#[test]
fn persisting_to_an_unknown_format_fails() {
    let dir = tempfile::tempdir().unwrap();
    let image = RgbImage::new(1, 1);
    let error = image.persist(&dir.path().join("carrier.unknown")).unwrap_err();
    assert_ne!(error.kind(), io::ErrorKind::NotFound);
}

#[test]
fn garbage_is_a_format_error() {
    let result = ObjectFile::from_bytes(b"definitely not an object file".to_vec());
    assert!(matches!(result, Err(Error::Format(ElfError::Truncated { .. }))));

    let result = ObjectFile::from_bytes(vec![0u8; 256]);
    assert!(matches!(result, Err(Error::Format(ElfError::BadMagic))));
}

#[test]
fn missing_files_are_io_errors() {
    let dir = tempfile::tempdir().unwrap();
    let result = ObjectFile::open(dir.path().join("absent.o"));
    assert!(matches!(result, Err(Error::Io(error)) if error.kind() == io::ErrorKind::NotFound));
}

#[test]
fn empty_files_are_format_errors() {
    let file = tempfile::NamedTempFile::new().unwrap();
    assert!(matches!(
        ObjectFile::open(file.path()),
        Err(Error::Format(ElfError::Truncated { .. }))
    ));
}
