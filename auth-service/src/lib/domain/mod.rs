pub mod guard;
pub mod session;
pub mod token;
pub mod user;
