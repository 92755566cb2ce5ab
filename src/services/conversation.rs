//! Conversation list for a single user: one entry per peer holding the most
//! recent message exchanged with that peer. In-memory form of the windowed
//! query in `MessageService::conversations`; both must agree.

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::message::{Conversation, Message};

/// Ordering key for "most recent". The id breaks timestamp ties so the
/// result is deterministic.
fn recency(message: &Message) -> (chrono::DateTime<chrono::Utc>, Uuid) {
    (message.created_at, message.id)
}

/// The counterparty of `user_id` in `message`, or `None` when the user took
/// no part in it. A self-addressed message has the user as its own peer.
pub fn peer_of(user_id: Uuid, message: &Message) -> Option<Uuid> {
    if message.sender_id == user_id {
        Some(message.receiver_id)
    } else if message.receiver_id == user_id {
        Some(message.sender_id)
    } else {
        None
    }
}

/// Groups `messages` by peer and keeps the latest message of each group.
/// Output is ordered newest first. `unread_count` counts unread messages the
/// peer sent to `user_id`.
pub fn latest_per_peer<I>(user_id: Uuid, messages: I) -> Vec<Conversation>
where
    I: IntoIterator<Item = Message>,
{
    let mut by_peer: HashMap<Uuid, Conversation> = HashMap::new();

    for message in messages {
        let Some(peer_id) = peer_of(user_id, &message) else {
            continue;
        };
        let incoming_unread =
            message.receiver_id == user_id && message.sender_id != user_id && !message.is_read;

        match by_peer.get_mut(&peer_id) {
            Some(conversation) => {
                if incoming_unread {
                    conversation.unread_count += 1;
                }
                if recency(&message) > recency(&conversation.last_message) {
                    conversation.last_message = message;
                }
            }
            None => {
                by_peer.insert(
                    peer_id,
                    Conversation {
                        peer_id,
                        last_message: message,
                        unread_count: i64::from(incoming_unread),
                    },
                );
            }
        }
    }

    let mut conversations: Vec<Conversation> = by_peer.into_values().collect();
    conversations.sort_by(|a, b| recency(&b.last_message).cmp(&recency(&a.last_message)));
    conversations
}
