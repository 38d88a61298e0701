//! Shared UI for the workspace: session context, toasts, the realtime
//! notifier, and small common components.

mod client;
pub use client::make_client;

mod session;
pub use session::{use_session, SessionProvider};

mod toast;
pub use toast::{push_toast, use_toasts, Toast, ToastLevel, ToastStack, Toaster};

mod notifier;
pub use notifier::{close_notifier, open_notifier, use_notifier};

mod avatar;
pub use avatar::Avatar;
