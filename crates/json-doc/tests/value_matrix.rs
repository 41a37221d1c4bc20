//! Document-model matrix: variant tests, typed reads, indexing with
//! auto-vivification, ownership and equality.

use json_doc::{parse_str, to_string, Kind, Map, TypeError, Value};

// ---------------------------------------------------------------------------
// Construction and variant tests
// ---------------------------------------------------------------------------

#[test]
fn default_is_null() {
    let v = Value::default();
    assert!(v.is_null());
    assert_eq!(v.kind(), Kind::Null);
}

#[test]
fn from_conversions_pick_the_variant() {
    assert_eq!(Value::from(()), Value::Null);
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(7u8), Value::Int(7));
    assert_eq!(Value::from(-7i32), Value::Int(-7));
    assert_eq!(Value::from(7i64), Value::Int(7));
    assert_eq!(Value::from(1.5f64), Value::Double(1.5));
    assert_eq!(Value::from(0.5f32), Value::Double(0.5));
    assert_eq!(Value::from("s"), Value::String("s".to_owned()));
    assert_eq!(Value::from(String::from("s")), Value::from("s"));
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some(3)), Value::Int(3));
}

#[test]
fn collect_into_array_and_object() {
    let arr: Value = vec![1, 2, 3].into_iter().collect();
    assert_eq!(to_string(&arr), "[1,2,3]");
    let obj: Value = [("a", 1), ("b", 2)].into_iter().collect();
    assert_eq!(to_string(&obj), r#"{"a":1,"b":2}"#);
}

#[test]
fn exactly_one_variant_test_holds() {
    let samples = [
        Value::Null,
        Value::Bool(false),
        Value::Int(0),
        Value::Double(0.0),
        Value::from(""),
        Value::Array(vec![]),
        Value::Object(Map::new()),
    ];
    for v in &samples {
        let hits = [
            v.is_null(),
            v.is_bool(),
            v.is_int(),
            v.is_double(),
            v.is_string(),
            v.is_array(),
            v.is_object(),
        ]
        .iter()
        .filter(|&&b| b)
        .count();
        assert_eq!(hits, 1, "{v:?}");
    }
    assert!(Value::Int(1).is_number());
    assert!(Value::Double(1.0).is_number());
    assert!(!Value::from("1").is_number());
}

// ---------------------------------------------------------------------------
// Typed reads
// ---------------------------------------------------------------------------

#[test]
fn get_as_matching_variant() {
    let doc = parse_str(r#"{"b":true,"i":3,"d":2.5,"s":"x","a":[1],"o":{}}"#).unwrap();
    assert_eq!(doc["b"].get_as::<bool>(), Ok(true));
    assert_eq!(doc["i"].get_as::<i64>(), Ok(3));
    assert_eq!(doc["d"].get_as::<f64>(), Ok(2.5));
    assert_eq!(doc["s"].get_as::<&str>(), Ok("x"));
    assert_eq!(doc["a"].get_as::<&[Value]>().map(<[Value]>::len), Ok(1));
    assert!(doc["o"].get_as::<&Map>().is_ok_and(Map::is_empty));
}

#[test]
fn numbers_widen_and_truncate() {
    assert_eq!(Value::Int(4).get_as::<f64>(), Ok(4.0));
    assert_eq!(Value::Double(3.9).get_as::<i64>(), Ok(3));
    assert_eq!(Value::Double(-3.9).get_as::<i64>(), Ok(-3));
    assert!(Value::Int(4).is::<f64>());
    assert!(Value::Double(4.5).is::<i64>());
}

#[test]
fn get_as_mismatch_is_type_error() {
    let err = Value::from("x").get_as::<i64>().unwrap_err();
    assert_eq!(
        err,
        TypeError {
            expected: "number",
            found: Kind::String
        }
    );
    assert_eq!(err.to_string(), "expected number, found string");
    assert!(!Value::Null.is::<bool>());
    assert!(Value::Int(1).get_as::<&str>().is_err());
}

#[test]
fn get_as_or_falls_back() {
    assert_eq!(Value::Null.get_as_or(5i64), 5);
    assert_eq!(Value::Int(2).get_as_or(5i64), 2);
    assert_eq!(Value::Bool(true).get_as_or("none"), "none");
}

// ---------------------------------------------------------------------------
// Shared indexing
// ---------------------------------------------------------------------------

#[test]
fn shared_index_misses_read_as_null() {
    let doc = parse_str(r#"{"a":[1,2]}"#).unwrap();
    assert!(doc["missing"].is_null());
    assert!(doc["a"][5].is_null());
    assert!(doc["a"]["key"].is_null());
    assert!(doc[0].is_null());
    assert!(doc["missing"]["deeper"][3].is_null());
    // Reads never change the document.
    assert_eq!(to_string(&doc), r#"{"a":[1,2]}"#);
}

#[test]
fn get_returns_none_on_miss() {
    let doc = parse_str(r#"{"a":[1,2]}"#).unwrap();
    assert_eq!(doc.get("a").and_then(|a| a.get(1)), Some(&Value::Int(2)));
    assert!(doc.get("b").is_none());
    assert!(doc.get(0).is_none());
    let key = String::from("a");
    assert!(doc.get(&key).is_some());
}

// ---------------------------------------------------------------------------
// Mutable indexing
// ---------------------------------------------------------------------------

#[test]
fn index_mut_builds_structure_from_null() {
    let mut doc = Value::Null;
    doc["users"][0]["name"] = Value::from("ada");
    doc["users"][0]["tags"][1] = Value::from("x");
    assert_eq!(
        to_string(&doc),
        r#"{"users":[{"name":"ada","tags":[null,"x"]}]}"#
    );
}

#[test]
fn index_mut_pads_arrays_with_null() {
    let mut doc = Value::Array(vec![Value::Int(1)]);
    doc[3] = Value::Bool(true);
    assert_eq!(to_string(&doc), "[1,null,null,true]");
    assert_eq!(doc.len(), 4);
}

#[test]
fn index_mut_replaces_wrong_variant() {
    let mut doc = Value::Int(5);
    doc["k"] = Value::Int(1);
    assert_eq!(to_string(&doc), r#"{"k":1}"#);

    doc[0] = Value::Int(2);
    assert_eq!(to_string(&doc), "[2]");
}

#[test]
fn index_mut_on_existing_entry_overwrites() {
    let mut doc = parse_str(r#"{"a":1,"b":2}"#).unwrap();
    doc["a"] = Value::from("one");
    assert_eq!(to_string(&doc), r#"{"a":"one","b":2}"#);
}

#[test]
fn get_mut_never_vivifies() {
    let mut doc = parse_str("[1]").unwrap();
    assert!(doc.get_mut(3).is_none());
    assert!(doc.get_mut("k").is_none());
    assert_eq!(to_string(&doc), "[1]");
    if let Some(first) = doc.get_mut(0) {
        *first = Value::Int(9);
    }
    assert_eq!(doc, Value::Array(vec![Value::Int(9)]));
}

// ---------------------------------------------------------------------------
// Ownership
// ---------------------------------------------------------------------------

#[test]
fn clone_is_deep() {
    let original = parse_str(r#"{"list":[1,{"x":2}]}"#).unwrap();
    let mut copy = original.clone();
    copy["list"][1]["x"] = Value::Int(3);
    copy["list"][5] = Value::Null;
    assert_eq!(original["list"][1]["x"], Value::Int(2));
    assert_eq!(original["list"].len(), 2);
    assert_ne!(original, copy);
}

#[test]
fn take_leaves_null() {
    let mut doc = parse_str(r#"{"a":[1,2]}"#).unwrap();
    let a = doc["a"].take();
    assert_eq!(a.len(), 2);
    assert!(doc["a"].is_null());
    assert!(doc.has_key("a"));
}

#[test]
fn emplace_replaces_content() {
    let mut v = Value::Int(1);
    v.emplace_array().push(Value::Null);
    assert_eq!(to_string(&v), "[null]");
    v.emplace_object().insert("k".into(), Value::Bool(false));
    assert_eq!(to_string(&v), r#"{"k":false}"#);
    v.emplace_string().push_str("done");
    assert_eq!(v.as_str(), Some("done"));
}

#[test]
fn subtree_outlives_its_document() {
    let sub = {
        let mut doc = parse_str(r#"{"inner":{"v":[true]}}"#).unwrap();
        doc["inner"].take()
    };
    assert_eq!(to_string(&sub), r#"{"v":[true]}"#);
}

// ---------------------------------------------------------------------------
// Equality
// ---------------------------------------------------------------------------

#[test]
fn object_equality_ignores_order() {
    let a = parse_str(r#"{"x":1,"y":[2]}"#).unwrap();
    let b = parse_str(r#"{"y":[2],"x":1}"#).unwrap();
    assert_eq!(a, b);
}

#[test]
fn int_and_double_are_distinct() {
    assert_ne!(Value::Int(1), Value::Double(1.0));
}

#[test]
fn size_of_non_containers_is_zero() {
    assert_eq!(Value::from("abc").len(), 0);
    assert!(Value::Null.is_empty());
    assert!(!parse_str("[0]").unwrap().is_empty());
}
