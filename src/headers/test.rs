use super::HeaderMap;

#[test]
fn test_append_get() {
    let mut map = HeaderMap::new();
    assert!(map.is_empty());

    map.append("host", b"localhost:42069");
    map.append("accept", b"*/*");

    assert_eq!(map.len(), 2);
    assert_eq!(map.get_str("host"), Some("localhost:42069"));
    assert_eq!(map.get_str("accept"), Some("*/*"));
    assert!(map.get("user-agent").is_none());
}

#[test]
fn test_case_insensitive() {
    let mut map = HeaderMap::new();
    map.append("Host", b"a");

    assert_eq!(map.get_str("host"), Some("a"));
    assert_eq!(map.get_str("HOST"), Some("a"));
    assert!(map.contains_key("hOsT"));

    let (name, _) = map.iter().next().unwrap();
    assert_eq!(name, "host");
}

#[test]
fn test_merge() {
    let mut map = HeaderMap::new();
    map.append("Set-Person", b"lane-loves-go");
    map.append("set-person", b"prime-loves-zig");
    map.append("SET-PERSON", b"tj-loves-ocaml");

    assert_eq!(map.len(), 1);
    assert_eq!(
        map.get_str("set-person"),
        Some("lane-loves-go, prime-loves-zig, tj-loves-ocaml")
    );
}

#[test]
fn test_obs_text_verbatim() {
    let mut map = HeaderMap::new();
    map.append("x", b"caf\xE9");
    map.append("X", b"\xFF");

    let value = map.get("x").unwrap();
    assert_eq!(value.as_bytes(), b"caf\xE9, \xFF");
    assert!(value.to_str().is_err());
    assert_eq!(map.get_str("x"), None);
}

#[test]
fn test_iter() {
    let mut map = HeaderMap::with_capacity(4);
    map.append("a", b"1");
    map.append("b", b"2");
    map.append("A", b"3");

    let mut fields: Vec<_> = map
        .iter()
        .map(|(name, value)| (name, value.to_str().unwrap()))
        .collect();
    fields.sort();
    assert_eq!(fields, [("a", "1, 3"), ("b", "2")]);
    assert_eq!((&map).into_iter().len(), 2);
}
