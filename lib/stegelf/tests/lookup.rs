#![cfg(target_endian = "little")]

mod common;

use common::{ObjectBuilder, SHF_ALLOC, SHF_EXECINSTR, SHT_PROGBITS};
use stegelf::{ElfError, Error, ObjectFile};

// Eight single-byte `ret`s on x86-64; never executed here.
const CODE: [u8; 8] = [0xc3; 8];

#[test]
fn first_symbol_wins_for_duplicate_names() {
    let object = ObjectBuilder::new()
        .text(&CODE)
        .function("twin", 2, 1)
        .function("other", 3, 1)
        .function("twin", 6, 1)
        .build();
    let object = ObjectFile::from_bytes(object).unwrap();

    let code = object.code().expect("code region").as_ptr();
    let twin = object.lookup_function("twin").expect("twin resolves");
    assert_eq!(twin.offset(), 2);
    assert_eq!(twin.as_ptr(), code.wrapping_add(2));
    assert_eq!(object.lookup_function("other").unwrap().offset(), 3);
}

#[test]
fn repeated_lookups_agree() {
    let object = ObjectBuilder::new().text(&CODE).function("f", 4, 1).build();
    let object = ObjectFile::from_bytes(object).unwrap();

    let first = object.lookup_function("f").unwrap();
    for _ in 0..8 {
        assert_eq!(object.lookup_function("f"), Some(first));
    }
}

#[test]
fn unknown_names_are_absent() {
    let object = ObjectBuilder::new()
        .text(&CODE)
        .data(&[1, 2, 3, 4])
        .function("compute", 0, 8)
        .object("table", 0, 4)
        .build();
    let object = ObjectFile::from_bytes(object).unwrap();

    assert!(object.lookup_function("Compute").is_none());
    assert!(object.lookup_function("comp").is_none());
    assert!(object.lookup_function("compute\0").is_none());
    assert!(object.lookup_function("").is_none());
    // Data symbols never resolve as functions.
    assert!(object.lookup_function("table").is_none());
    assert!(object.lookup_function("compute").is_some());
}

#[test]
fn functions_outside_the_code_are_absent() {
    let object = ObjectBuilder::new()
        .text(&CODE)
        .function("beyond", CODE.len() as u64, 1)
        .build();
    let object = ObjectFile::from_bytes(object).unwrap();
    assert!(object.lookup_function("beyond").is_none());
}

#[test]
fn functions_in_other_code_sections_are_absent() {
    let object = ObjectBuilder::new()
        .text(&CODE)
        .section(".text.g", SHT_PROGBITS, SHF_ALLOC | SHF_EXECINSTR, &CODE)
        .function("f", 1, 1)
        .function_in("g", 2, 0, 1)
        .build();
    let object = ObjectFile::from_bytes(object).unwrap();

    assert_eq!(object.elf().lookup_section_index(".text"), Some(1));
    assert_eq!(object.elf().lookup_section_index(".text.g"), Some(2));
    assert_eq!(object.lookup_function("f").unwrap().offset(), 1);
    assert!(object.lookup_function("g").is_none());
}

#[test]
fn first_match_outside_the_code_hides_later_ones() {
    let object = ObjectBuilder::new()
        .text(&CODE)
        .section(".text.g", SHT_PROGBITS, SHF_ALLOC | SHF_EXECINSTR, &CODE)
        .function_in("twin", 2, 0, 1)
        .function("twin", 4, 1)
        .build();
    let object = ObjectFile::from_bytes(object).unwrap();
    assert!(object.lookup_function("twin").is_none());
}

#[test]
fn objects_without_code_resolve_nothing() {
    let object = ObjectBuilder::new()
        .data(&[0; 16])
        .function("ghost", 0, 1)
        .build();
    let object = ObjectFile::from_bytes(object).unwrap();

    assert!(object.code().is_none());
    assert!(object.data().is_some());
    assert!(object.lookup_function("ghost").is_none());
}

#[test]
fn empty_code_sections_are_not_loaded() {
    let object = ObjectBuilder::new().text(&[]).function("f", 0, 0).build();
    let object = ObjectFile::from_bytes(object).unwrap();
    assert!(object.code().is_none());
    assert!(object.lookup_function("f").is_none());
}

#[test]
fn symbol_and_string_tables_are_required() {
    let object = ObjectBuilder::new().text(&CODE).without_symtab().build();
    assert!(matches!(
        ObjectFile::from_bytes(object),
        Err(Error::MissingSection(".symtab"))
    ));

    let object = ObjectBuilder::new().text(&CODE).without_strtab().build();
    assert!(matches!(
        ObjectFile::from_bytes(object),
        Err(Error::MissingSection(".strtab"))
    ));
}

#[test]
fn truncated_objects_are_format_errors() {
    let object = ObjectBuilder::new().text(&CODE).function("f", 0, 1).build();
    for len in [0, 16, 63, 64, 100, object.len() - 1] {
        let result = ObjectFile::from_bytes(object[..len].to_vec());
        assert!(
            matches!(result, Err(Error::Format(_))),
            "length {} gave {:?}",
            len,
            result.err()
        );
    }
}

#[test]
fn executables_are_rejected() {
    let mut object = ObjectBuilder::new().text(&CODE).build();
    object[16] = 2;
    assert!(matches!(
        ObjectFile::from_bytes(object),
        Err(Error::Format(ElfError::NotRelocatable(_)))
    ));
}

#[test]
fn lists_functions_in_table_order() {
    let object = ObjectBuilder::new()
        .text(&CODE)
        .function("b", 0, 1)
        .object("data", 0, 1)
        .function("a", 1, 1)
        .build();
    let object = ObjectFile::from_bytes(object).unwrap();

    let names: Vec<&[u8]> = object.functions().map(|(name, _)| name).collect();
    assert_eq!(names, [&b"b"[..], &b"a"[..]]);
}
