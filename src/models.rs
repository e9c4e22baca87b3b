use serde::Deserialize;

use crate::errors::AppError;

// ============ Remote Models ============

/// Embedded error object the Graph returns instead of profile data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphError {
    /// Human-readable failure message. Empty means no error.
    #[serde(default)]
    pub message: String,
    /// Error class, e.g. "OAuthException".
    #[serde(default, rename = "type")]
    pub error_type: String,
    /// Numeric error code.
    #[serde(default)]
    pub code: i64,
}

/// Represents an entry from the Graph.
///
/// This is the loosely-typed wire shape: every field is optional on the
/// remote side, and the id arrives as a string. It is not suitable for
/// storing; it exists only to be validated and converted into a
/// [`UserRecord`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphProfile {
    /// User id in decimal string form.
    #[serde(default)]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// Profile link.
    #[serde(default)]
    pub link: String,
    /// Handle.
    #[serde(default)]
    pub username: String,
    /// Gender.
    #[serde(default)]
    pub gender: String,
    /// Locale.
    #[serde(default)]
    pub locale: String,
    /// Present when the uid was invalid or the request was refused.
    #[serde(default)]
    pub error: Option<GraphError>,
}

impl GraphProfile {
    /// Returns true if the remote signaled this uid was not a valid Graph
    /// user.
    pub fn is_rejected(&self) -> bool {
        self.error
            .as_ref()
            .is_some_and(|e| !e.message.is_empty())
    }

    /// Converts the wire shape into a storable [`UserRecord`].
    ///
    /// Fails with `RemoteRejected` when the payload carries a non-empty
    /// error message, and with `InvalidIdentifier` when the id is not a
    /// canonical unsigned 64-bit decimal (the parsed value must format back
    /// to exactly the original string, so `"007"`, `"+5"` and out-of-range
    /// values are all refused). The remaining fields are copied verbatim.
    pub fn into_record(self) -> Result<UserRecord, AppError> {
        if let Some(err) = &self.error {
            if !err.message.is_empty() {
                return Err(AppError::RemoteRejected {
                    message: err.message.clone(),
                    code: err.code,
                });
            }
        }

        let uid: u64 = self
            .id
            .parse()
            .map_err(|_| AppError::InvalidIdentifier(self.id.clone()))?;
        if uid.to_string() != self.id {
            return Err(AppError::InvalidIdentifier(self.id));
        }

        Ok(UserRecord {
            uid,
            name: self.name,
            first: self.first_name,
            last: self.last_name,
            link: self.link,
            username: self.username,
            gender: self.gender,
            locale: self.locale,
        })
    }
}

// ============ Database Models ============

/// A Graph user in the shape suitable for storing in the database.
///
/// Rows are immutable once written; the system never updates or deletes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Primary key, the validated uid.
    pub uid: u64,
    /// Display name.
    pub name: String,
    /// Given name.
    pub first: String,
    /// Family name.
    pub last: String,
    /// Profile link.
    pub link: String,
    /// Handle.
    pub username: String,
    /// Gender.
    pub gender: String,
    /// Locale.
    pub locale: String,
}
