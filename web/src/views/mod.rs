mod shell;
pub use shell::Shell;

mod landing;
pub use landing::Landing;

mod auth;
pub use auth::Auth;

mod feed;
pub use feed::Feed;

mod profile;
pub use profile::Profile;

mod messages;
pub use messages::Messages;

mod stories;
pub use stories::Stories;

mod reels;
pub use reels::Reels;

mod groups;
pub use groups::Groups;

mod marketplace;
pub use marketplace::Marketplace;

mod events;
pub use events::Events;

mod jobs;
pub use jobs::Jobs;

mod notifications;
pub use notifications::Notifications;

mod search;
pub use search::Search;
