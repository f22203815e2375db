//! Property tests for the conversation list ordering invariant: descending
//! by last-message time, no-history entries at the bottom, at most one
//! summary per peer.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use halaqa_chat::client::ConversationStore;
use halaqa_chat::shared::{ConversationSummary, LastMessage, UserIdentity};

fn summary(peer_id: &str, at: Option<i64>) -> ConversationSummary {
    let peer = UserIdentity::new(peer_id, "Peer", peer_id);
    let mut summary = ConversationSummary::ephemeral(peer);
    if let Some(secs) = at {
        summary.update_last_message(last_message(peer_id, secs));
    }
    summary
}

fn last_message(sender_id: &str, secs: i64) -> LastMessage {
    LastMessage {
        text: format!("at {}", secs),
        created_at: Utc.timestamp_opt(secs, 0).single().unwrap(),
        sender_id: sender_id.to_string(),
    }
}

/// Unique peers, each with an optional last-message time (strictly after the
/// epoch, which is the no-history sentinel).
fn arb_summaries() -> impl Strategy<Value = Vec<ConversationSummary>> {
    proptest::collection::btree_map(
        "p[0-9]{2}",
        proptest::option::of(1i64..2_000_000_000),
        0..12,
    )
    .prop_map(|peers| {
        peers
            .into_iter()
            .map(|(id, at)| summary(&id, at))
            .collect()
    })
}

proptest! {
    #[test]
    fn replace_all_yields_descending_recency(summaries in arb_summaries()) {
        let mut store = ConversationStore::new();
        store.replace_all(summaries);

        for pair in store.summaries().windows(2) {
            prop_assert!(pair[0].sort_key() >= pair[1].sort_key());
        }

        // No-history entries never appear above an entry with history.
        let mut seen_no_history = false;
        for summary in store.summaries() {
            if summary.last_message.is_none() {
                seen_no_history = true;
            } else {
                prop_assert!(!seen_no_history);
            }
        }
    }

    #[test]
    fn upserts_keep_one_summary_per_peer_and_promote_it(
        incoming in proptest::collection::vec(("p[0-9]", 1i64..2_000_000_000), 1..30)
    ) {
        let mut store = ConversationStore::new();
        for (peer_id, secs) in &incoming {
            let peer = UserIdentity::new(peer_id.as_str(), "Peer", peer_id.as_str());
            store.upsert_from_incoming(&peer, last_message(peer_id, *secs), 1);

            // The counterpart of the latest message is always on top.
            prop_assert_eq!(store.summaries()[0].peer.id.as_str(), peer_id.as_str());
        }

        let mut ids: Vec<&str> = store.summaries().iter().map(|s| s.peer.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), store.len());
    }
}
