//! Issue notification for expiring licenses.
//!
//! - [`format`] — render the Markdown title and body for one run's findings.
//! - [`github`] — create the issue via the GitHub REST API.

pub mod format;
pub mod github;
