//! Contains tools related to Discord's Interactions Endpoint URL feature.
//!
//! "You can optionally configure an interactions endpoint to receive interactions via HTTP POSTs
//! rather than over Gateway with a bot user."
//!
//! <https://discord.com/developers/docs/interactions/overview#configuring-an-interactions-endpoint-url>
//!
//! See [`Verifier`] for example usage.

use crate::internal::prelude::*;
use crate::json;
use crate::model::application::Interaction;

/// The header carrying the hex encoded Ed25519 signature of a request.
pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";
/// The header carrying the timestamp that was signed together with the body.
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// Parses a hex string into an array of `[u8]`
fn parse_hex<const N: usize>(s: &str) -> Option<[u8; N]> {
    if s.len() != N * 2 {
        return None;
    }

    let mut res = [0; N];
    for (i, byte) in res.iter_mut().enumerate() {
        *byte = u8::from_str_radix(s.get(2 * i..2 * (i + 1))?, 16).ok()?;
    }
    Some(res)
}

/// The configured public key couldn't be turned into a valid cryptographic public key.
#[derive(Debug)]
#[non_exhaustive]
pub enum InvalidKey {
    /// The key isn't a 64 digit hex string.
    Hex,
    /// The bytes don't form a valid Ed25519 point.
    Signature(ed25519_dalek::SignatureError),
}

impl std::fmt::Display for InvalidKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hex => f.write_str("invalid bot public key: must be a 64 digit hex string"),
            Self::Signature(inner) => write!(f, "invalid bot public key: {inner}"),
        }
    }
}

impl std::error::Error for InvalidKey {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Hex => None,
            Self::Signature(inner) => Some(inner),
        }
    }
}

/// Used to cryptographically verify incoming interactions HTTP request for authenticity.
///
/// If incoming requests are not verified, Discord will reject the URL for security reasons.
///
/// ```rust
/// use lastpay::interactions_endpoint::Verifier;
///
/// let verifier =
///     Verifier::try_from_hex("67c6bd767ca099e79efac9fcce4d2022a63bf7dea780e7f3d813f694c1597089")
///         .unwrap();
///
/// // When receiving an HTTP request:
/// # let (signature, timestamp, request_body): (Option<&str>, Option<&str>, &[u8]) = (None, None, &[]);
/// if !verifier.verify(request_body, signature, timestamp) {
///     // Send HTTP 401 Unauthorized response
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Verifier {
    public_key: ed25519_dalek::VerifyingKey,
}

impl Verifier {
    /// Creates a new [`Verifier`] from the given public key hex string, as shown in the
    /// application's developer dashboard.
    ///
    /// # Errors
    ///
    /// [`InvalidKey`] if the string isn't 64 hex digits or the key isn't cryptographically valid.
    pub fn try_from_hex(public_key: &str) -> StdResult<Self, InvalidKey> {
        Self::try_new(parse_hex(public_key.trim()).ok_or(InvalidKey::Hex)?)
    }

    /// Creates a new [`Verifier`] from the public key bytes.
    ///
    /// # Errors
    ///
    /// [`InvalidKey`] if the key isn't cryptographically valid.
    pub fn try_new(public_key: [u8; 32]) -> StdResult<Self, InvalidKey> {
        Ok(Self {
            public_key: ed25519_dalek::VerifyingKey::from_bytes(&public_key)
                .map_err(InvalidKey::Signature)?,
        })
    }

    /// Verifies a Discord request for authenticity, given the `X-Signature-Ed25519` and
    /// `X-Signature-Timestamp` HTTP headers and the raw request body.
    ///
    /// A request missing either header never verifies. The body must be the bytes exactly as
    /// received; anything parsed and re-serialized will not match the signature.
    #[must_use]
    pub fn verify(&self, body: &[u8], signature: Option<&str>, timestamp: Option<&str>) -> bool {
        use ed25519_dalek::Verifier as _;

        let (Some(signature), Some(timestamp)) = (signature, timestamp) else {
            return false;
        };

        // Extract and parse signature
        let Some(signature_bytes) = parse_hex(signature) else {
            return false;
        };
        let signature = ed25519_dalek::Signature::from_bytes(&signature_bytes);

        // Verify
        let message_to_verify = [timestamp.as_bytes(), body].concat();
        self.public_key.verify(&message_to_verify, &signature).is_ok()
    }
}

/// The outcome of checking an inbound request.
#[derive(Debug)]
pub enum VerificationResult {
    /// The signature matched and the body is an interaction.
    Valid(Interaction),
    /// The signature was missing or didn't match.
    Invalid,
}

/// Verifies the request and, only once the signature matched, parses the body into an
/// [`Interaction`].
///
/// # Errors
///
/// Returns [`Error::Json`] if the signature matched but the body isn't an interaction payload.
pub fn verify_request(
    verifier: &Verifier,
    body: &[u8],
    signature: Option<&str>,
    timestamp: Option<&str>,
) -> Result<VerificationResult> {
    if !verifier.verify(body, signature, timestamp) {
        return Ok(VerificationResult::Invalid);
    }

    json::from_slice(body).map(VerificationResult::Valid)
}
