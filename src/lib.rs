//! Moodmix web service library.
//!
//! Moodmix is a small chat-style web application: a user logs in with their
//! Spotify account, tells the app how they feel, and gets a handful of song
//! recommendations back. The library is split into focused modules:
//!
//! - `api` - HTTP handlers for the web endpoints
//! - `config` - Configuration loaded from environment variables
//! - `mood` - Mood keyword to genre seed resolution
//! - `server` - Router construction and the listener loop
//! - `session` - Session cookie signing and the per-session token store
//! - `spotify` - Spotify Web API client (OAuth and catalog calls)
//! - `types` - Data structures and wire type definitions

pub mod api;
pub mod config;
pub mod mood;
pub mod server;
pub mod session;
pub mod spotify;
pub mod types;

/// Prints an informational message with a blue bullet point.
///
/// Accepts the same arguments as `println!`.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Accepts the same arguments as `println!`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the process.
///
/// Reserved for startup failures where continuing makes no sense, e.g.
/// missing credentials or an unusable listen address.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable per-request failures, e.g. a Spotify call that was
/// downgraded to a friendly chat reply.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
