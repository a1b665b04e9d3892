use pretty_assertions::assert_eq;
use typegate_ir::StringInterner;

use super::*;
use crate::{FieldDef, PoolError, Visibility};

#[test]
fn basics_at_correct_indices() {
    let pool = Pool::new();

    for kind in BasicKind::ALL {
        assert_eq!(pool.tag(Idx::of_basic(kind)), Tag::Basic);
        assert!(matches!(pool.shape(Idx::of_basic(kind)), Shape::Basic(k) if k == kind));
    }
}

#[test]
fn pool_starts_with_reserved_range() {
    let pool = Pool::new();
    assert_eq!(pool.len(), Idx::FIRST_DYNAMIC as usize);
    assert!(matches!(
        pool.shape(Idx::from_raw(Idx::FIRST_DYNAMIC - 1)),
        Shape::Basic(BasicKind::Invalid)
    ));
}

#[test]
fn unknown_handles_decode_as_invalid() {
    let pool = Pool::new();
    assert!(!pool.contains(Idx::NONE));
    assert!(matches!(pool.shape(Idx::NONE), Shape::Basic(BasicKind::Invalid)));
    assert_eq!(pool.item(Idx::from_raw(5000)), Item::INVALID);
}

#[test]
fn containers_are_hash_consed() {
    let mut pool = Pool::new();

    let a = pool.pointer(Idx::INT);
    let b = pool.pointer(Idx::INT);
    assert_eq!(a, b);
    assert_ne!(pool.slice(Idx::INT), a);

    let m1 = pool.map(Idx::STRING, Idx::BOOL);
    let m2 = pool.map(Idx::STRING, Idx::BOOL);
    assert_eq!(m1, m2);
    assert_ne!(pool.map(Idx::STRING, Idx::INT), m1);

    assert_eq!(pool.array(Idx::UINT8, 16), pool.array(Idx::UINT8, 16));
    assert_ne!(pool.array(Idx::UINT8, 16), pool.array(Idx::UINT8, 32));
}

#[test]
fn records_are_fresh() {
    let mut pool = Pool::new();
    let a = pool.record(&[]);
    let b = pool.record(&[]);
    assert_ne!(a, b);
}

#[test]
fn array_len_survives_high_bits() {
    let mut pool = Pool::new();
    let big = pool.array(Idx::BOOL, (1 << 40) + 7);
    match pool.shape(big) {
        Shape::Array { elem, len } => {
            assert_eq!(elem, Idx::BOOL);
            assert_eq!(len, (1 << 40) + 7);
        }
        other => panic!("expected array, got {other:?}"),
    }
}

#[test]
fn struct_fields_keep_order_and_flags() {
    let names = StringInterner::new();
    let mut pool = Pool::new();
    let spec = names.intern("Spec");
    let secret = names.intern("secret");
    let base = names.intern("Base");

    let record = pool.record(&[
        FieldDef::public(spec, Idx::STRING),
        FieldDef::private(secret, Idx::INT),
        FieldDef::public(base, Idx::BOOL).embedded(),
    ]);

    let fields: Vec<FieldDef> = match pool.shape(record) {
        Shape::Struct(fields) => fields.iter().collect(),
        other => panic!("expected struct, got {other:?}"),
    };
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0].name, spec);
    assert!(fields[0].is_exported());
    assert_eq!(fields[1].visibility, Visibility::Private);
    assert!(!fields[1].is_exported());
    assert!(fields[2].embedded);
    assert_eq!(fields[2].ty, Idx::BOOL);
}

#[test]
fn underlying_strips_one_named_layer() {
    let names = StringInterner::new();
    let mut pool = Pool::new();

    let key = pool.named(names.intern("Key"), Idx::STRING);
    let alias = pool.named(names.intern("Alias"), key);

    assert_eq!(pool.underlying(key), Idx::STRING);
    assert_eq!(pool.underlying(alias), key);
    assert_eq!(pool.underlying(Idx::INT), Idx::INT);

    assert_eq!(pool.resolve(alias), Idx::STRING);
    assert_eq!(pool.resolve(Idx::BOOL), Idx::BOOL);
}

#[test]
fn resolve_terminates_on_definition_cycle() {
    let names = StringInterner::new();
    let mut pool = Pool::new();

    let a = pool.declare_named(names.intern("A"));
    let b = pool.named(names.intern("B"), a);
    assert_eq!(pool.define_named(a, b), Ok(()));

    assert_eq!(pool.resolve(a), Idx::INVALID);
}

#[test]
fn declared_named_starts_invalid() {
    let names = StringInterner::new();
    let mut pool = Pool::new();

    let node = pool.declare_named(names.intern("Node"));
    assert_eq!(pool.underlying(node), Idx::INVALID);
    match pool.shape(node) {
        Shape::Named { name, definition } => {
            assert_eq!(name, names.intern("Node"));
            assert_eq!(definition, Idx::INVALID);
        }
        other => panic!("expected named, got {other:?}"),
    }
}

#[test]
fn define_named_rejects_misuse() {
    let names = StringInterner::new();
    let mut pool = Pool::new();

    let node = pool.declare_named(names.intern("Node"));
    assert_eq!(pool.define_named(Idx::INT, Idx::BOOL), Err(PoolError::NotNamed(Idx::INT)));
    assert_eq!(pool.define_named(node, Idx::BOOL), Ok(()));
    assert_eq!(
        pool.define_named(node, Idx::INT),
        Err(PoolError::AlreadyDefined(node))
    );
    assert_eq!(pool.underlying(node), Idx::BOOL);
}

#[test]
fn format_renders_every_shape() {
    let names = StringInterner::new();
    let mut pool = Pool::new();

    let node = pool.declare_named(names.intern("Node"));
    let ptr = pool.pointer(node);
    let children = pool.slice(ptr);
    let record = pool.record(&[
        FieldDef::public(names.intern("Children"), children),
        FieldDef::private(names.intern("id"), Idx::INT64),
        FieldDef::public(names.intern("Meta"), node).embedded(),
    ]);
    assert_eq!(pool.define_named(node, record), Ok(()));

    assert_eq!(pool.format_type(node, &names), "Node");
    assert_eq!(
        pool.format_type(record, &names),
        "struct{Children []*Node; id int64; Node}"
    );

    let labels = pool.map(Idx::STRING, Idx::STRING);
    assert_eq!(pool.format_type(labels, &names), "map[string]string");

    let digest = pool.array(Idx::UINT8, 32);
    assert_eq!(pool.format_type(digest, &names), "[32]uint8");

    let events = pool.chan(Idx::BOOL);
    assert_eq!(pool.format_type(events, &names), "chan bool");

    let any = pool.interface(&[]);
    assert_eq!(pool.format_type(any, &names), "interface{}");
    let stringer = pool.interface(&[names.intern("String"), names.intern("Len")]);
    assert_eq!(pool.format_type(stringer, &names), "interface{String; Len}");

    let handler = pool.func(&[Idx::STRING, Idx::INT], &[Idx::BOOL]);
    assert_eq!(pool.format_type(handler, &names), "func(string, int) bool");
    let pair = pool.func(&[], &[Idx::INT, Idx::STRING]);
    assert_eq!(pool.format_type(pair, &names), "func() (int, string)");

    let t = pool.type_param(names.intern("T"));
    assert_eq!(pool.format_type(t, &names), "T");
    assert_eq!(pool.format_type(Idx::INVALID, &names), "invalid type");
}
