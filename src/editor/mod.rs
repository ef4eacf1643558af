//! Editor state driven by user gestures
//!
//! Tools, notifications, and the session that ties the grid, history and
//! selection together.

/// Notifications and the sink trait they are delivered through
pub mod notification;
/// The editing session
pub mod session;
/// Pointer tools
pub mod tool;

pub use notification::{LogSink, Notification, NotificationKind, NotificationLog, NotificationSink};
pub use session::EditorSession;
pub use tool::Tool;
