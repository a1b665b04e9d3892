use super::*;

#[test]
fn tag_values_in_expected_ranges() {
    assert!((Tag::Basic as u8) < 16);

    assert!((16..32).contains(&(Tag::Pointer as u8)));
    assert!((16..32).contains(&(Tag::Chan as u8)));

    assert!((32..48).contains(&(Tag::Array as u8)));
    assert!((32..48).contains(&(Tag::Map as u8)));

    assert!((48..80).contains(&(Tag::Struct as u8)));
    assert!((48..80).contains(&(Tag::Func as u8)));

    assert!((80..96).contains(&(Tag::Named as u8)));
    assert!((96..112).contains(&(Tag::TypeParam as u8)));
}

#[test]
fn uses_extra_is_correct() {
    assert!(!Tag::Basic.uses_extra());
    assert!(!Tag::Pointer.uses_extra());
    assert!(!Tag::Named.uses_extra());

    assert!(Tag::Array.uses_extra());
    assert!(Tag::Map.uses_extra());
    assert!(Tag::Struct.uses_extra());
    assert!(Tag::Func.uses_extra());
}

#[test]
fn only_containers_and_basics_are_interned() {
    assert!(Tag::Basic.is_interned());
    assert!(Tag::Slice.is_interned());
    assert!(Tag::Map.is_interned());
    assert!(!Tag::Struct.is_interned());
    assert!(!Tag::Interface.is_interned());
    assert!(!Tag::Named.is_interned());
}
