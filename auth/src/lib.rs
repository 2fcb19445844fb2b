//! Authentication utilities library
//!
//! Provides the primitives the authentication service is assembled from:
//! - Password hashing (Argon2id)
//! - Sealed session values (signed, expiring, client-held)
//! - Opaque random tokens and constant-time comparison
//!
//! Nothing here knows about users or HTTP; the service adapts these to its
//! own domain types.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("my_passwore", &hash).unwrap());
//! ```
//!
//! ## Sealed Sessions
//! ```
//! use auth::SessionSealer;
//! use chrono::Duration;
//!
//! let sealer = SessionSealer::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1)).unwrap();
//! let sealed = sealer.seal(&vec!["u@x.com".to_string()]).unwrap();
//! let opened: Vec<String> = sealer.open(&sealed).unwrap();
//! assert_eq!(opened, vec!["u@x.com".to_string()]);
//! ```
//!
//! ## Tokens
//! ```
//! use auth::token::{constant_time_eq, generate_token};
//!
//! let token = generate_token();
//! assert!(constant_time_eq(token.as_bytes(), token.clone().as_bytes()));
//! ```

pub mod password;
pub mod session;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use session::SealError;
pub use session::SessionSealer;
