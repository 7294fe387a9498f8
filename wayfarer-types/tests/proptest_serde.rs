//! Property-based tests: serde roundtrip for the wire types.

use proptest::prelude::*;
use wayfarer_types::*;

fn arb_role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::User), Just(Role::Assistant), Just(Role::System),]
}

fn arb_message() -> impl Strategy<Value = ChatMessage> {
    (arb_role(), any::<String>()).prop_map(|(role, content)| ChatMessage { role, content })
}

proptest! {
    #[test]
    fn chat_message_serde_roundtrip(msg in arb_message()) {
        let json = serde_json::to_string(&msg).unwrap();
        let back: ChatMessage = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(msg, back);
    }

    #[test]
    fn chat_request_serde_roundtrip(
        messages in proptest::collection::vec(arb_message(), 0..5),
        trip in proptest::option::of("[a-z0-9-]{1,12}"),
    ) {
        let req = ChatRequest {
            messages: messages.clone(),
            trip_id: trip.clone().map(TripId::new),
        };
        let json = serde_json::to_value(&req).unwrap();
        prop_assert_eq!(json["messages"].as_array().map(Vec::len), Some(messages.len()));
        let back: ChatRequest = serde_json::from_value(json).unwrap();
        prop_assert_eq!(back.messages, messages);
        prop_assert_eq!(back.trip_id.map(|t| t.0), trip);
    }
}
