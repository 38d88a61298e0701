//! The pre-configured HTTP client every screen talks through.
//!
//! [`ApiClient`] owns a [`reqwest::Client`], the resolved [`ApiConfig`], and
//! a [`TokenStore`]. Before every outgoing request it reads the store and, if
//! a token is present, attaches it as the `authorization` query parameter —
//! the shape the backend reads it in alongside its form-encoded POST bodies.
//!
//! Each call is a single attempt. There is no retry, backoff, caching, or
//! timeout; a failure maps onto [`ApiError`] and is reported synchronously to
//! the caller.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use store::TokenStore;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    AuthResponse, Comment, Conversation, Event, FeedPost, Group, JobPost, MarketplaceItem,
    Message, Notification, Profile, ProfileUpdate, StoryGroup, User,
};

/// Authenticated client for the backend REST API.
#[derive(Clone)]
pub struct ApiClient<T: TokenStore> {
    http: reqwest::Client,
    config: ApiConfig,
    tokens: T,
}

/// FastAPI error bodies carry the message under `detail`.
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

impl<T: TokenStore> ApiClient<T> {
    pub fn new(config: ApiConfig, tokens: T) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            tokens,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn tokens(&self) -> &T {
        &self.tokens
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base(), path)
    }

    /// Query parameters for an outgoing request: the caller's own parameters
    /// plus `authorization` when a token is stored.
    fn request_query(&self, extra: &[(&str, String)]) -> Vec<(String, String)> {
        let mut query: Vec<(String, String)> = extra
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect();
        if let Some(token) = self.tokens.get() {
            query.push(("authorization".to_string(), token));
        }
        query
    }

    async fn decode<R: DeserializeOwned>(response: reqwest::Response) -> Result<R, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<R>().await?);
        }
        let detail = match response.json::<ErrorBody>().await {
            Ok(body) => body.detail,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        Err(ApiError::from_status(status.as_u16(), detail))
    }

    async fn get_json<R: DeserializeOwned>(
        &self,
        path: &str,
        extra: &[(&str, String)],
    ) -> Result<R, ApiError> {
        let response = self
            .http
            .get(self.endpoint(path))
            .query(&self.request_query(extra))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn post_form<R: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, String)],
    ) -> Result<R, ApiError> {
        let response = self
            .http
            .post(self.endpoint(path))
            .query(&self.request_query(&[]))
            .form(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn put_form<R: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, String)],
    ) -> Result<R, ApiError> {
        let response = self
            .http
            .put(self.endpoint(path))
            .query(&self.request_query(&[]))
            .form(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let response = self
            .http
            .delete(self.endpoint(path))
            .query(&self.request_query(&[]))
            .send()
            .await?;
        Self::decode(response).await
    }
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

impl<T: TokenStore> ApiClient<T> {
    /// `POST /auth/login` with form-encoded credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.post_form(
            "/auth/login",
            &[("email", email.to_string()), ("password", password.to_string())],
        )
        .await
    }

    /// `POST /auth/register` with form-encoded credentials.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<AuthResponse, ApiError> {
        self.post_form(
            "/auth/register",
            &[
                ("email", email.to_string()),
                ("password", password.to_string()),
                ("name", name.to_string()),
            ],
        )
        .await
    }

    /// `GET /auth/me` — validate the stored token and fetch its user.
    /// Any non-success status means the token is no good.
    pub async fn me(&self) -> Result<User, ApiError> {
        #[derive(Deserialize)]
        struct Me {
            user: User,
        }
        let me: Me = self.get_json("/auth/me", &[]).await?;
        Ok(me.user)
    }

    /// `POST /auth/google/callback` — exchange a federated-login session id
    /// for a token and user.
    pub async fn google_callback(&self, session_id: &str) -> Result<AuthResponse, ApiError> {
        self.post_form(
            "/auth/google/callback",
            &[("session_id", session_id.to_string())],
        )
        .await
    }
}

// ---------------------------------------------------------------------------
// Posts, reactions, comments
// ---------------------------------------------------------------------------

impl<T: TokenStore> ApiClient<T> {
    pub async fn feed(&self, skip: u32, limit: u32) -> Result<Vec<FeedPost>, ApiError> {
        #[derive(Deserialize)]
        struct Feed {
            posts: Vec<FeedPost>,
        }
        let feed: Feed = self
            .get_json(
                "/posts/feed",
                &[("skip", skip.to_string()), ("limit", limit.to_string())],
            )
            .await?;
        Ok(feed.posts)
    }

    pub async fn reels(&self) -> Result<Vec<FeedPost>, ApiError> {
        #[derive(Deserialize)]
        struct Reels {
            reels: Vec<FeedPost>,
        }
        let reels: Reels = self.get_json("/posts/reels", &[]).await?;
        Ok(reels.reels)
    }

    pub async fn create_post(&self, content: &str, post_type: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .post_form(
                "/posts",
                &[
                    ("content", content.to_string()),
                    ("post_type", post_type.to_string()),
                ],
            )
            .await?;
        Ok(())
    }

    /// Set the current user's reaction on a post, replacing any previous one.
    pub async fn react(&self, post_id: &str, reaction_type: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .post_form(
                &format!("/reactions/{post_id}"),
                &[("reaction_type", reaction_type.to_string())],
            )
            .await?;
        Ok(())
    }

    pub async fn unreact(&self, post_id: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self.delete_json(&format!("/reactions/{post_id}")).await?;
        Ok(())
    }

    pub async fn comments(&self, post_id: &str) -> Result<Vec<Comment>, ApiError> {
        #[derive(Deserialize)]
        struct Comments {
            comments: Vec<Comment>,
        }
        let comments: Comments = self.get_json(&format!("/comments/{post_id}"), &[]).await?;
        Ok(comments.comments)
    }

    pub async fn add_comment(&self, post_id: &str, content: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .post_form(
                &format!("/comments/{post_id}"),
                &[("content", content.to_string())],
            )
            .await?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Profiles and connections
// ---------------------------------------------------------------------------

impl<T: TokenStore> ApiClient<T> {
    pub async fn profile(&self, user_id: &str) -> Result<Profile, ApiError> {
        self.get_json(&format!("/profile/{user_id}"), &[]).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        let _: serde_json::Value = self.put_form("/profile", &update.form_pairs()).await?;
        Ok(())
    }

    pub async fn follow(&self, user_id: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .post_form(&format!("/connections/follow/{user_id}"), &[])
            .await?;
        Ok(())
    }

    pub async fn unfollow(&self, user_id: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .delete_json(&format!("/connections/unfollow/{user_id}"))
            .await?;
        Ok(())
    }

    pub async fn search_users(&self, q: &str) -> Result<Vec<User>, ApiError> {
        #[derive(Deserialize)]
        struct Users {
            users: Vec<User>,
        }
        let users: Users = self
            .get_json("/search/users", &[("q", q.to_string())])
            .await?;
        Ok(users.users)
    }
}

// ---------------------------------------------------------------------------
// Conversations and messages
// ---------------------------------------------------------------------------

impl<T: TokenStore> ApiClient<T> {
    pub async fn conversations(&self) -> Result<Vec<Conversation>, ApiError> {
        #[derive(Deserialize)]
        struct Conversations {
            conversations: Vec<Conversation>,
        }
        let convs: Conversations = self.get_json("/conversations", &[]).await?;
        Ok(convs.conversations)
    }

    /// Open (or find) the direct conversation with another user, returning
    /// its id.
    pub async fn open_conversation(&self, participant_id: &str) -> Result<String, ApiError> {
        #[derive(Deserialize)]
        struct Opened {
            conversation_id: String,
        }
        let opened: Opened = self
            .post_form(
                "/conversations",
                &[("participant_ids", participant_id.to_string())],
            )
            .await?;
        Ok(opened.conversation_id)
    }

    pub async fn messages(&self, conversation_id: &str) -> Result<Vec<Message>, ApiError> {
        #[derive(Deserialize)]
        struct Messages {
            messages: Vec<Message>,
        }
        let messages: Messages = self
            .get_json(&format!("/messages/{conversation_id}"), &[])
            .await?;
        Ok(messages.messages)
    }

    pub async fn send_message(&self, conversation_id: &str, content: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .post_form(
                &format!("/messages/{conversation_id}"),
                &[("content", content.to_string())],
            )
            .await?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Stories, notifications, groups, marketplace, events, jobs
// ---------------------------------------------------------------------------

impl<T: TokenStore> ApiClient<T> {
    pub async fn stories(&self) -> Result<Vec<StoryGroup>, ApiError> {
        #[derive(Deserialize)]
        struct Stories {
            user_stories: Vec<StoryGroup>,
        }
        let stories: Stories = self.get_json("/stories", &[]).await?;
        Ok(stories.user_stories)
    }

    pub async fn notifications(&self) -> Result<Vec<Notification>, ApiError> {
        #[derive(Deserialize)]
        struct Notifications {
            notifications: Vec<Notification>,
        }
        let list: Notifications = self.get_json("/notifications", &[]).await?;
        Ok(list.notifications)
    }

    pub async fn mark_notification_read(&self, notification_id: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .put_form(&format!("/notifications/{notification_id}/read"), &[])
            .await?;
        Ok(())
    }

    pub async fn groups(&self) -> Result<Vec<Group>, ApiError> {
        #[derive(Deserialize)]
        struct Groups {
            groups: Vec<Group>,
        }
        let groups: Groups = self.get_json("/groups", &[]).await?;
        Ok(groups.groups)
    }

    pub async fn create_group(
        &self,
        name: &str,
        description: &str,
        group_type: &str,
    ) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .post_form(
                "/groups",
                &[
                    ("name", name.to_string()),
                    ("description", description.to_string()),
                    ("group_type", group_type.to_string()),
                ],
            )
            .await?;
        Ok(())
    }

    pub async fn marketplace(&self) -> Result<Vec<MarketplaceItem>, ApiError> {
        #[derive(Deserialize)]
        struct Items {
            items: Vec<MarketplaceItem>,
        }
        let items: Items = self.get_json("/marketplace", &[]).await?;
        Ok(items.items)
    }

    pub async fn create_listing(
        &self,
        title: &str,
        description: &str,
        price: f64,
    ) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .post_form(
                "/marketplace",
                &[
                    ("title", title.to_string()),
                    ("description", description.to_string()),
                    ("price", price.to_string()),
                ],
            )
            .await?;
        Ok(())
    }

    pub async fn events(&self) -> Result<Vec<Event>, ApiError> {
        #[derive(Deserialize)]
        struct Events {
            events: Vec<Event>,
        }
        let events: Events = self.get_json("/events", &[]).await?;
        Ok(events.events)
    }

    pub async fn create_event(
        &self,
        title: &str,
        description: &str,
        event_date: &str,
        location: &str,
    ) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .post_form(
                "/events",
                &[
                    ("title", title.to_string()),
                    ("description", description.to_string()),
                    ("event_date", event_date.to_string()),
                    ("location", location.to_string()),
                ],
            )
            .await?;
        Ok(())
    }

    pub async fn job_posts(&self) -> Result<Vec<JobPost>, ApiError> {
        #[derive(Deserialize)]
        struct JobPosts {
            job_posts: Vec<JobPost>,
        }
        let posts: JobPosts = self.get_json("/jobs/posts", &[]).await?;
        Ok(posts.job_posts)
    }

    pub async fn create_job_post(
        &self,
        title: &str,
        description: &str,
        requirements: &str,
        location: &str,
        salary_range: Option<&str>,
    ) -> Result<(), ApiError> {
        let mut form = vec![
            ("title", title.to_string()),
            ("description", description.to_string()),
            ("requirements", requirements.to_string()),
            ("location", location.to_string()),
        ];
        if let Some(salary) = salary_range {
            form.push(("salary_range", salary.to_string()));
        }
        let _: serde_json::Value = self.post_form("/jobs/posts", &form).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryTokens;

    fn client(tokens: MemoryTokens) -> ApiClient<MemoryTokens> {
        ApiClient::new(ApiConfig::with_backend("http://localhost:8000"), tokens)
    }

    #[test]
    fn test_query_carries_token_when_stored() {
        let tokens = MemoryTokens::new();
        tokens.set("tok-1");
        let client = client(tokens);

        let query = client.request_query(&[]);
        assert!(query.contains(&("authorization".to_string(), "tok-1".to_string())));
    }

    #[test]
    fn test_query_has_no_auth_param_without_token() {
        let client = client(MemoryTokens::new());
        let query = client.request_query(&[("skip", "0".to_string())]);
        assert_eq!(query, vec![("skip".to_string(), "0".to_string())]);
    }

    #[test]
    fn test_query_keeps_caller_params_alongside_token() {
        let tokens = MemoryTokens::new();
        tokens.set("tok-2");
        let client = client(tokens);

        let query = client.request_query(&[("q", "ann".to_string())]);
        assert_eq!(query.len(), 2);
        assert_eq!(query[0], ("q".to_string(), "ann".to_string()));
        assert_eq!(query[1], ("authorization".to_string(), "tok-2".to_string()));
    }

    #[test]
    fn test_endpoint_joins_api_base() {
        let client = client(MemoryTokens::new());
        assert_eq!(
            client.endpoint("/posts/feed"),
            "http://localhost:8000/api/posts/feed"
        );
    }

    #[test]
    fn test_token_cleared_between_requests_is_dropped() {
        let tokens = MemoryTokens::new();
        tokens.set("tok-3");
        let client = client(tokens.clone());
        assert_eq!(client.request_query(&[]).len(), 1);

        tokens.clear();
        assert!(client.request_query(&[]).is_empty());
    }
}
