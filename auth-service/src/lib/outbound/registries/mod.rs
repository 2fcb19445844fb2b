pub mod token;

pub use token::InMemoryTokenRegistry;
