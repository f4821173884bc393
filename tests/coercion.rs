use json_coerce::{decode, CoerceError, NumberLiteral, Value};
use proptest::prelude::*;

fn lit(text: String) -> Value {
    Value::Number(NumberLiteral::new(text))
}

proptest! {
    #[test]
    fn signed_natives_cast_to_i64(a in any::<i8>(), b in any::<i16>(), c in any::<i32>(), d in any::<i64>(), e in any::<isize>()) {
        prop_assert_eq!(Value::from(a).as_i64(), Ok(a as i64));
        prop_assert_eq!(Value::from(b).as_i64(), Ok(b as i64));
        prop_assert_eq!(Value::from(c).as_i64(), Ok(c as i64));
        prop_assert_eq!(Value::from(d).as_i64(), Ok(d));
        prop_assert_eq!(Value::from(e).as_i64(), Ok(e as i64));
    }

    #[test]
    fn unsigned_natives_cast_to_i64(a in any::<u8>(), b in any::<u16>(), c in any::<u32>(), d in any::<u64>(), e in any::<usize>()) {
        prop_assert_eq!(Value::from(a).as_i64(), Ok(a as i64));
        prop_assert_eq!(Value::from(b).as_i64(), Ok(b as i64));
        prop_assert_eq!(Value::from(c).as_i64(), Ok(c as i64));
        prop_assert_eq!(Value::from(d).as_i64(), Ok(d as i64));
        prop_assert_eq!(Value::from(e).as_i64(), Ok(e as i64));
    }

    #[test]
    fn floats_truncate(f in -1.0e15f64..1.0e15f64) {
        prop_assert_eq!(Value::from(f).as_int(), Ok(f.trunc() as isize));
        prop_assert_eq!(Value::from(f).as_i64(), Ok(f.trunc() as i64));
    }

    #[test]
    fn integer_literals_are_exact(n in any::<i64>()) {
        let v = lit(n.to_string());
        prop_assert_eq!(v.as_i64(), Ok(n));
        prop_assert_eq!(v.as_f64(), Ok(n as f64));
        prop_assert_eq!(v.as_u64().is_ok(), n >= 0);
    }

    #[test]
    fn unsigned_literals_are_exact(n in any::<u64>()) {
        prop_assert_eq!(lit(n.to_string()).as_u64(), Ok(n));
    }

    #[test]
    fn string_integers_parse(n in any::<i64>()) {
        prop_assert_eq!(Value::from(n.to_string()).as_i64(), Ok(n));
    }

    #[test]
    fn coercion_is_repeatable(text in "[-0-9.eE]{1,12}") {
        let v = lit(text.clone());
        prop_assert_eq!(v.as_i64(), v.as_i64());
        prop_assert_eq!(v.as_u64(), v.as_u64());
        let s = Value::from(text);
        prop_assert_eq!(s.as_int(), s.as_int());
        // NaN != NaN, so compare bit patterns
        prop_assert_eq!(s.as_f64().map(f64::to_bits), s.as_f64().map(f64::to_bits));
    }
}

#[test]
fn decoded_documents_coerce_leniently() {
    let doc = decode::from_str(
        r#"{"id": 18446744073709551615, "price": "19.99", "qty": 3, "ratio": 0.75, "flag": true, "tags": []}"#,
    )
    .unwrap();
    let Value::Object(fields) = doc else { panic!("expected object") };

    assert_eq!(fields["id"].as_u64(), Ok(u64::MAX));
    assert!(fields["id"].as_i64().is_err());
    assert_eq!(fields["price"].as_f64(), Ok(19.99));
    assert!(fields["price"].as_int().is_err());
    assert_eq!(fields["qty"].as_f64(), Ok(3.0));
    assert_eq!(fields["ratio"].as_f64(), Ok(0.75));
    assert!(fields["ratio"].as_i64().is_err());
    assert_eq!(fields["flag"].as_int(), Err(CoerceError::InvalidType));
    assert_eq!(fields["tags"].as_u64(), Err(CoerceError::InvalidType));
}

#[test]
fn big_literals_keep_precision_until_asked() {
    let doc = decode::from_slice(b"9007199254740993").unwrap();
    assert_eq!(doc.as_i64(), Ok(9_007_199_254_740_993));
    assert_eq!(doc.as_f64(), Ok(9_007_199_254_740_992.0));
}

#[test]
fn values_are_shareable_across_threads() {
    let doc = std::sync::Arc::new(decode::from_str(r#""123""#).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let doc = doc.clone();
            std::thread::spawn(move || doc.as_u64())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), Ok(123));
    }
}
