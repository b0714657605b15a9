use proptest::prelude::*;
use remote_data::RemoteData;

use crate::arb::arb_value;

proptest! {
    #[test]
    fn json_round_trip(v in arb_value()) {
        let encoded = serde_json::to_string(&v).unwrap();
        let decoded: RemoteData<String, i64> = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, v);
    }

    #[test]
    fn json_tag_matches_variant(v in arb_value()) {
        let encoded = serde_json::to_value(&v).unwrap();
        let tag = encoded["_tag"].as_str().unwrap().to_string();
        let expected = v.fold(|| "NotAsked", || "Loading", |_| "Failure", |_| "Success");
        prop_assert_eq!(tag, expected);
    }
}
