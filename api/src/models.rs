//! Wire models for backend responses.
//!
//! The backend owns these shapes; the client deserializes what it renders and
//! tolerates anything extra. Fields the backend sometimes omits (enrichment
//! data, optional profile fields) are `Option` or defaulted so a thin
//! response never fails to decode.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A user as the backend returns it. Only identity and display fields are
/// meaningful to the session layer; the rest feed the profile screen.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
    pub cover_photo: Option<String>,
    pub bio: Option<String>,
    pub work: Option<String>,
    pub education: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// Response of the credential-issuing endpoints (login, register, Google
/// callback): `{success, token, user}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    pub token: String,
    pub user: User,
}

/// A profile as seen by the current user: the user plus the relationship
/// between the two accounts.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Profile {
    #[serde(flatten)]
    pub user: User,
    pub connection_status: Option<String>,
}

/// Editable profile fields, sent form-encoded to `PUT /profile`.
/// `None` fields are left out of the request and stay unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub work: Option<String>,
    pub education: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
}

impl ProfileUpdate {
    /// The form pairs to submit, skipping unset fields.
    pub fn form_pairs(&self) -> Vec<(&'static str, String)> {
        let fields = [
            ("name", &self.name),
            ("bio", &self.bio),
            ("work", &self.work),
            ("education", &self.education),
            ("city", &self.city),
            ("phone", &self.phone),
        ];
        fields
            .into_iter()
            .filter_map(|(key, value)| value.clone().map(|v| (key, v)))
            .collect()
    }
}

/// A post enriched for rendering: author, reaction tallies, the current
/// user's own reaction, and the comment count.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FeedPost {
    pub id: String,
    pub user_id: String,
    pub content: String,
    #[serde(default)]
    pub media_urls: Vec<String>,
    #[serde(default)]
    pub post_type: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub created_at: String,
    pub user: Option<User>,
    #[serde(default)]
    pub reaction_counts: HashMap<String, u32>,
    pub user_reaction: Option<String>,
    #[serde(default)]
    pub comment_count: u32,
}

impl FeedPost {
    /// Total reactions across all reaction types.
    pub fn reaction_total(&self) -> u32 {
        self.reaction_counts.values().sum()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub parent_comment_id: Option<String>,
    pub user_id: String,
    pub content: String,
    #[serde(default)]
    pub created_at: String,
    pub user: Option<User>,
}

/// A conversation with its participants resolved and the latest message
/// attached for list previews.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Conversation {
    pub id: String,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub conversation_type: String,
    pub name: Option<String>,
    #[serde(default)]
    pub participant_users: Vec<User>,
    pub last_message: Option<Message>,
}

impl Conversation {
    /// Display name: the explicit name for group chats, otherwise the other
    /// participant's name.
    pub fn title(&self, current_user_id: &str) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        self.participant_users
            .iter()
            .find(|u| u.id != current_user_id)
            .map(|u| u.name.clone())
            .unwrap_or_else(|| "Conversation".to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Message {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub content: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: String,
    pub sender: Option<User>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Story {
    pub id: String,
    pub user_id: String,
    pub media_url: String,
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub expires_at: String,
    #[serde(default)]
    pub created_at: String,
}

/// Active stories grouped per author, as `/stories` returns them.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StoryGroup {
    pub user: Option<User>,
    #[serde(default)]
    pub stories: Vec<Story>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    #[serde(default)]
    pub read: bool,
    pub link: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub group_type: String,
    #[serde(default)]
    pub admin_user_ids: Vec<String>,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MarketplaceItem {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
    pub seller: Option<User>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Event {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub event_date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub attendees: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct JobPost {
    pub id: String,
    pub company_id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub location: String,
    pub salary_range: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_decodes_thin_auth_payload() {
        // Login/register responses carry only identity fields.
        let user: User = serde_json::from_str(
            r#"{"id": "u1", "email": "a@b.com", "name": "Ann", "picture": null}"#,
        )
        .unwrap();
        assert_eq!(user.name, "Ann");
        assert_eq!(user.bio, None);
        assert_eq!(user.created_at, "");
    }

    #[test]
    fn test_profile_flattens_user_fields() {
        let profile: Profile = serde_json::from_str(
            r#"{"id": "u2", "email": "c@d.com", "name": "Bea", "connection_status": "accepted"}"#,
        )
        .unwrap();
        assert_eq!(profile.user.name, "Bea");
        assert_eq!(profile.connection_status.as_deref(), Some("accepted"));
    }

    #[test]
    fn test_feed_post_defaults_enrichment_fields() {
        let post: FeedPost = serde_json::from_str(
            r#"{"id": "p1", "user_id": "u1", "content": "hello"}"#,
        )
        .unwrap();
        assert_eq!(post.reaction_total(), 0);
        assert_eq!(post.comment_count, 0);
        assert!(post.user.is_none());
    }

    #[test]
    fn test_conversation_title_prefers_other_participant() {
        let conv: Conversation = serde_json::from_str(
            r#"{
                "id": "c1",
                "participants": ["me", "them"],
                "conversation_type": "direct",
                "name": null,
                "participant_users": [
                    {"id": "me", "email": "m@e.com", "name": "Me"},
                    {"id": "them", "email": "t@m.com", "name": "Them"}
                ],
                "last_message": null
            }"#,
        )
        .unwrap();
        assert_eq!(conv.title("me"), "Them");
    }

    #[test]
    fn test_profile_update_skips_unset_fields() {
        let update = ProfileUpdate {
            bio: Some("hello".to_string()),
            city: Some("Nairobi".to_string()),
            ..Default::default()
        };
        let pairs = update.form_pairs();
        assert_eq!(pairs.len(), 2);
        assert!(pairs.contains(&("bio", "hello".to_string())));
        assert!(!pairs.iter().any(|(k, _)| *k == "name"));
    }
}
