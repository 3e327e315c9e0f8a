//! Wire-contract tests for `Optional`-typed struct fields: absent fields must
//! read and write as JSON `null` with no serde attributes on the struct.

use fxtend::Optional;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Profile {
    name: String,
    nickname: Optional<String>,
    age: Optional<u32>,
}

#[test]
fn absent_fields_serialize_to_null() {
    let profile = Profile {
        name: "ada".to_string(),
        nickname: Optional::absent(),
        age: Optional::present(36),
    };

    let value = serde_json::to_value(&profile).unwrap();
    assert_eq!(
        value,
        json!({ "name": "ada", "nickname": null, "age": 36 })
    );
}

#[test]
fn null_fields_deserialize_to_absent() {
    let profile: Profile =
        serde_json::from_value(json!({ "name": "ada", "nickname": null, "age": 36 })).unwrap();

    assert_eq!(profile.nickname, Optional::absent());
    assert_eq!(profile.age, Optional::present(36));
}

#[test]
fn round_trip_preserves_both_tags() {
    let original = Profile {
        name: "grace".to_string(),
        nickname: Optional::present("amazing".to_string()),
        age: Optional::absent(),
    };

    let encoded = serde_json::to_string(&original).unwrap();
    let decoded: Profile = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn non_null_payload_deserializes_the_inner_type() {
    let nested: Optional<Vec<i32>> = serde_json::from_str("[1,2,3]").unwrap();
    assert_eq!(nested, Optional::present(vec![1, 2, 3]));

    let number: Result<Optional<u32>, _> = serde_json::from_str("\"not a number\"");
    assert!(number.is_err());
}
