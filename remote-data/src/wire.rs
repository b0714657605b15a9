//! Serde support, using the tagged object shape of the JavaScript `RemoteData` ports:
//!
//! ```json
//! {"_tag": "NotAsked"}
//! {"_tag": "Loading"}
//! {"_tag": "Failure", "failure": "server returned 403"}
//! {"_tag": "Success", "success": [1, 2, 3]}
//! ```
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::RemoteData;

#[derive(Serialize)]
#[serde(tag = "_tag")]
enum WireRef<'a, E, A> {
    NotAsked,
    Loading,
    Failure { failure: &'a E },
    Success { success: &'a A },
}

#[derive(Deserialize)]
#[serde(tag = "_tag")]
enum Wire<E, A> {
    NotAsked,
    Loading,
    Failure { failure: E },
    Success { success: A },
}

impl<E: Serialize, A: Serialize> Serialize for RemoteData<E, A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match self {
            RemoteData::NotAsked => WireRef::NotAsked,
            RemoteData::Loading => WireRef::Loading,
            RemoteData::Failure(failure) => WireRef::Failure { failure },
            RemoteData::Success(success) => WireRef::Success { success },
        };
        wire.serialize(serializer)
    }
}

impl<'de, E: Deserialize<'de>, A: Deserialize<'de>> Deserialize<'de> for RemoteData<E, A> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Wire::deserialize(deserializer)? {
            Wire::NotAsked => RemoteData::NotAsked,
            Wire::Loading => RemoteData::Loading,
            Wire::Failure { failure } => RemoteData::Failure(failure),
            Wire::Success { success } => RemoteData::Success(success),
        })
    }
}
