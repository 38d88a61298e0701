//! Push-channel event handling.
//!
//! The backend keeps one WebSocket per authenticated user and pushes
//! JSON-tagged envelopes `{"type": ..., "data": ...}` down it. The channel is
//! best-effort and fire-and-forget: no acknowledgment, no ordering, no
//! replay, and no reconnection — a dropped connection stays dropped until the
//! next session bootstrap. Screens re-fetch their own lists for correctness;
//! this module only turns payloads into transient alerts.
//!
//! The connection lifecycle is an explicit state machine
//! (`Closed -> Connecting -> Open -> Closed`) so the UI wiring cannot dial
//! twice or treat a half-open socket as live.

use serde::Deserialize;

/// Lifecycle of the push connection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnState {
    #[default]
    Closed,
    Connecting,
    Open,
}

/// Observed connection events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnEvent {
    /// A dial attempt was started.
    Dial,
    /// The socket reported open.
    Opened,
    /// The socket closed or errored, or the session logged out.
    Closed,
}

impl ConnState {
    /// Advance the state machine. Events that make no sense in the current
    /// state (a stray `Opened` after logout, a second `Dial`) leave it
    /// unchanged.
    pub fn transition(self, event: ConnEvent) -> Self {
        match (self, event) {
            (Self::Closed, ConnEvent::Dial) => Self::Connecting,
            (Self::Connecting, ConnEvent::Opened) => Self::Open,
            (_, ConnEvent::Closed) => Self::Closed,
            (state, _) => state,
        }
    }
}

/// A payload worth surfacing to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PushAlert {
    /// A notification with its content text.
    Notification(String),
    /// A new direct message arrived; the content is not shown, only a nudge.
    NewMessage,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: serde_json::Value,
}

/// Parse one raw frame from the push channel.
///
/// Returns `None` for unrecognized event types, malformed JSON, and
/// notification payloads without content — the channel carries no guarantees,
/// so nothing here is an error.
pub fn parse_alert(raw: &str) -> Option<PushAlert> {
    let envelope: Envelope = serde_json::from_str(raw).ok()?;
    match envelope.kind.as_str() {
        "notification" => {
            let content = envelope.data.get("content")?.as_str()?;
            Some(PushAlert::Notification(content.to_string()))
        }
        "message" => Some(PushAlert::NewMessage),
        other => {
            tracing::debug!("ignoring push event of type {other:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_payload_yields_its_content() {
        let alert = parse_alert(r#"{"type": "notification", "data": {"content": "X"}}"#);
        assert_eq!(alert, Some(PushAlert::Notification("X".to_string())));
    }

    #[test]
    fn test_message_payload_yields_generic_alert() {
        let alert = parse_alert(r#"{"type": "message", "data": {"content": "secret"}}"#);
        assert_eq!(alert, Some(PushAlert::NewMessage));
    }

    #[test]
    fn test_message_payload_without_data_still_alerts() {
        assert_eq!(parse_alert(r#"{"type": "message"}"#), Some(PushAlert::NewMessage));
    }

    #[test]
    fn test_unrecognized_type_is_ignored() {
        assert_eq!(parse_alert(r#"{"type": "presence", "data": {}}"#), None);
    }

    #[test]
    fn test_malformed_json_is_ignored() {
        assert_eq!(parse_alert("not json"), None);
        assert_eq!(parse_alert(""), None);
    }

    #[test]
    fn test_notification_without_content_is_ignored() {
        assert_eq!(parse_alert(r#"{"type": "notification", "data": {}}"#), None);
    }

    #[test]
    fn test_connection_lifecycle() {
        let state = ConnState::default();
        assert_eq!(state, ConnState::Closed);

        let state = state.transition(ConnEvent::Dial);
        assert_eq!(state, ConnState::Connecting);

        let state = state.transition(ConnEvent::Opened);
        assert_eq!(state, ConnState::Open);

        let state = state.transition(ConnEvent::Closed);
        assert_eq!(state, ConnState::Closed);
    }

    #[test]
    fn test_nonsense_events_leave_state_unchanged() {
        // Opened without a dial in flight.
        assert_eq!(
            ConnState::Closed.transition(ConnEvent::Opened),
            ConnState::Closed
        );
        // Dialing an already-open connection.
        assert_eq!(ConnState::Open.transition(ConnEvent::Dial), ConnState::Open);
        // Double dial.
        assert_eq!(
            ConnState::Connecting.transition(ConnEvent::Dial),
            ConnState::Connecting
        );
    }

    #[test]
    fn test_close_is_terminal_from_any_state() {
        assert_eq!(
            ConnState::Connecting.transition(ConnEvent::Closed),
            ConnState::Closed
        );
        assert_eq!(
            ConnState::Closed.transition(ConnEvent::Closed),
            ConnState::Closed
        );
    }
}
