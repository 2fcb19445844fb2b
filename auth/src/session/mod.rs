pub mod errors;
pub mod sealer;

pub use errors::SealError;
pub use sealer::SessionSealer;
pub use sealer::MIN_SECRET_LEN;
