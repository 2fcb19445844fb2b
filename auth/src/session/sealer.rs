use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;

use super::errors::SealError;

/// Minimum secret length accepted for HS256 sealing.
pub const MIN_SECRET_LEN: usize = 32;

/// Wire shape of a sealed value: timestamps plus the caller's payload.
#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    iat: i64,
    exp: i64,
    data: T,
}

/// Seals values into signed, expiring strings that clients can hold.
///
/// The payload is readable by the holder but any modification breaks the
/// HS256 signature. Generic over the payload so each service keeps its own
/// session shape.
pub struct SessionSealer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl SessionSealer {
    /// Create a sealer from a secret and a time-to-live.
    ///
    /// # Errors
    /// * `WeakSecret` - Secret shorter than `MIN_SECRET_LEN` bytes
    pub fn new(secret: &[u8], ttl: Duration) -> Result<Self, SealError> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(SealError::WeakSecret {
                min: MIN_SECRET_LEN,
                actual: secret.len(),
            });
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
        })
    }

    /// Time-to-live applied to every sealed value.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Seal a payload, stamping issue and expiry times.
    ///
    /// # Errors
    /// * `SealingFailed` - Payload could not be serialized or signed
    pub fn seal<T: Serialize>(&self, payload: &T) -> Result<String, SealError> {
        let now = Utc::now();
        let envelope = Envelope {
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
            data: payload,
        };

        encode(&Header::new(self.algorithm), &envelope, &self.encoding_key)
            .map_err(|e| SealError::SealingFailed(e.to_string()))
    }

    /// Verify the signature and expiry of a sealed value and return its payload.
    ///
    /// # Errors
    /// * `Expired` - Expiry time has passed
    /// * `Invalid` - Signature mismatch, malformed input or foreign payload shape
    pub fn open<T: DeserializeOwned>(&self, sealed: &str) -> Result<T, SealError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        decode::<Envelope<T>>(sealed, &self.decoding_key, &validation)
            .map(|data| data.claims.data)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => SealError::Expired,
                _ => SealError::Invalid(e.to_string()),
            })
    }
}
