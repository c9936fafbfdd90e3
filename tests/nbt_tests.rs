//! Tests for the owned NBT tree and its binary form

use std::thread;

use na_via::{
    BigEndian, Error, LittleEndian, MAX_DEPTH, NBT, OwnCompound, OwnList, OwnValue, Tag, Type,
    read_named, read_nameless, write_named, write_nameless,
};

fn sample() -> OwnCompound {
    let mut root = OwnCompound::new();
    root.put_byte("byte", -3);
    root.put_short("short", 300);
    root.put_int("int", -70000);
    root.put_long("long", i64::MAX);
    root.put_float("float", 0.5);
    root.put_double("double", -2.25);
    root.put_string("string", "hello");
    root.put("bytes", vec![1i8, -1, 3]);
    root.put("ints", [1, 2, 3]);
    root.put("longs", vec![7i64, -7]);
    root.put("names", OwnList::from_strings(["a", "b"]));

    let mut child = OwnCompound::new();
    child.put_boolean("flag", true);
    root.put("child", child);
    root
}

#[test]
fn test_typed_accessors() {
    let root = sample();
    assert_eq!(root.get_int("short"), Some(300));
    assert_eq!(root.get_int("byte"), Some(-3));
    assert_eq!(root.get_double("float"), Some(0.5));
    assert_eq!(root.get_float("double"), Some(-2.25));
    assert_eq!(root.get_string("string"), Some("hello"));
    assert_eq!(root.get_string("int"), None);
    assert_eq!(root.get_compound("child").and_then(|c| c.get_boolean("flag")), Some(true));
    assert_eq!(
        root.get_list("names").map(|l| l.strings().collect::<Vec<_>>()),
        Some(vec!["a", "b"])
    );
    assert_eq!(root.get("ints").and_then(OwnValue::as_int_array), Some(&[1, 2, 3][..]));
}

#[test]
fn test_insertion_order_is_kept() {
    let mut root = sample();
    let keys: Vec<_> = root.keys().collect();
    assert_eq!(keys.first(), Some(&"byte"));
    assert_eq!(keys.last(), Some(&"child"));

    // Replacing a key keeps its slot.
    root.put_int("byte", 1);
    assert_eq!(root.keys().next(), Some("byte"));

    assert!(root.remove("short").is_some());
    assert_eq!(root.keys().nth(1), Some("int"));
}

#[test]
fn test_put_returns_previous() {
    let mut root = OwnCompound::new();
    assert_eq!(root.put("a", 1), None);
    assert_eq!(root.put("a", 2), Some(OwnValue::Int(1)));
    assert_eq!(root.len(), 1);
}

#[test]
fn test_list_homogeneity() {
    let mut list = OwnList::default();
    assert_eq!(list.element_tag(), Tag::End);
    list.push(1).unwrap();
    assert_eq!(list.element_tag(), Tag::Int);
    assert!(matches!(
        list.push("x"),
        Err(Error::TagMismatch {
            expected: 3,
            actual: 8
        })
    ));
    assert_eq!(list.len(), 1);

    assert!(OwnList::from_values(vec![OwnValue::Int(1), OwnValue::Short(2)]).is_err());
    let empty = OwnList::from_values(Vec::new()).unwrap();
    assert_eq!(empty.element_tag(), Tag::End);
}

#[test]
fn test_named_round_trip() {
    let root = OwnValue::from(sample());
    let mut buffer = Vec::new();
    write_named::<BigEndian>("root", &root, &mut buffer).unwrap();
    assert_eq!(buffer[0], 10);
    assert_eq!(&buffer[1..7], [0, 4, b'r', b'o', b'o', b't']);

    let (name, value) = read_named::<BigEndian>(&mut &buffer[..]).unwrap();
    assert_eq!(name, "root");
    assert_eq!(value, root);
}

#[test]
fn test_little_endian() {
    let mut root = OwnCompound::new();
    root.put_int("a", 1);
    let value = OwnValue::from(root);

    let mut buffer = Vec::new();
    write_nameless::<LittleEndian>(&value, &mut buffer).unwrap();
    assert_eq!(buffer, [10, 3, 1, 0, b'a', 1, 0, 0, 0, 0]);
    assert_eq!(read_nameless::<LittleEndian>(&mut &buffer[..]).unwrap(), value);
}

#[test]
fn test_write_to_vec() {
    let bytes = sample().write_to_vec::<BigEndian>().unwrap();
    let (name, value) = read_named::<BigEndian>(&mut &bytes[..]).unwrap();
    assert_eq!(name, "");
    assert_eq!(value, OwnValue::from(sample()));
}

#[test]
fn test_modified_utf8_strings() {
    let mut root = OwnCompound::new();
    root.put_string("s", "a\0b");
    let bytes = root.write_to_vec::<BigEndian>().unwrap();
    assert!(bytes.windows(2).any(|pair| pair == [0xC0, 0x80]));

    let (_, value) = read_named::<BigEndian>(&mut &bytes[..]).unwrap();
    assert_eq!(value.get("s").and_then(OwnValue::as_str), Some("a\0b"));
}

#[test]
fn test_index_lookup() {
    let value = OwnValue::from(sample());
    assert_eq!(
        value.get("names").and_then(|names| names.get(1)).and_then(OwnValue::as_str),
        Some("b")
    );
    assert!(value.get("missing").is_none());
    assert!(value.get(0).is_none());
}

/// A named root compound holding `depth` nested empty compounds.
fn nested_compounds(depth: usize) -> Vec<u8> {
    let mut bytes = vec![10, 0, 0];
    for _ in 0..depth {
        bytes.extend_from_slice(&[10, 0, 0]);
    }
    bytes.extend(std::iter::repeat_n(0, depth + 1));
    bytes
}

fn on_small_stack<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    thread::Builder::new()
        .stack_size(2 << 20)
        .spawn(f)
        .unwrap()
        .join()
        .unwrap()
}

#[test]
fn test_depth_limit() {
    let bytes = nested_compounds(600);
    let result = on_small_stack(move || read_named::<BigEndian>(&mut &bytes[..]).map(|_| ()));
    assert!(matches!(result, Err(Error::DepthLimit(128))));
}

#[test]
fn test_depth_at_limit_on_small_stack() {
    let bytes = nested_compounds(MAX_DEPTH);
    let (original, rewritten) = on_small_stack(move || {
        let (name, root) = read_named::<BigEndian>(&mut &bytes[..]).unwrap();
        assert!(NBT.read(&mut &bytes[..]).unwrap().is_some());
        assert!(name.is_empty());
        let rewritten = root.write_to_vec::<BigEndian>().unwrap();
        (bytes, rewritten)
    });
    assert_eq!(original, rewritten);

    let beyond = nested_compounds(MAX_DEPTH + 1);
    let result = on_small_stack(move || {
        (
            read_named::<BigEndian>(&mut &beyond[..]).map(|_| ()),
            NBT.read(&mut &beyond[..]).map(|_| ()),
        )
    });
    assert!(matches!(result.0, Err(Error::DepthLimit(MAX_DEPTH))));
    assert!(matches!(result.1, Err(Error::DepthLimit(MAX_DEPTH))));
}

#[test]
fn test_negative_length() {
    // Root int array of length -1
    let bytes = [11, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF];
    assert!(matches!(
        read_named::<BigEndian>(&mut &bytes[..]),
        Err(Error::ValueOutOfRange { value: -1, .. })
    ));
}

#[test]
fn test_length_beyond_input() {
    let bytes = [7, 0, 0, 0, 0, 0, 10, 1, 2];
    assert!(matches!(
        read_named::<BigEndian>(&mut &bytes[..]),
        Err(Error::TruncatedInput {
            requested: 10,
            available: 2
        })
    ));
}

#[test]
fn test_end_list_with_elements() {
    let bytes = [9, 0, 0, 0, 0, 0, 0, 2, 0, 0];
    assert!(matches!(
        read_named::<BigEndian>(&mut &bytes[..]),
        Err(Error::InvalidTagType(0))
    ));
}

#[test]
fn test_invalid_tag_type() {
    let bytes = [13, 0, 0];
    assert!(matches!(
        read_named::<BigEndian>(&mut &bytes[..]),
        Err(Error::InvalidTagType(13))
    ));
}

#[test]
fn test_end_root() {
    let (name, value) = read_named::<BigEndian>(&mut &[0u8][..]).unwrap();
    assert!(name.is_empty());
    assert_eq!(value, OwnValue::End);

    let mut buffer = Vec::new();
    write_named::<BigEndian>("ignored", &OwnValue::End, &mut buffer).unwrap();
    assert_eq!(buffer, [0]);
}
