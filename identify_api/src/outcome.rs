//! The uniform outcome of one API call and the normalizer that produces it.

use std::future::Future;

use serde::de::{self, Deserializer, IntoDeserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::{types::ApiResponse, Error};

/// Outcome of one outbound call.
///
/// Serializes as the flat envelope `{"success": true, "data": .., "status": ..}`
/// or `{"success": false, "error": "..", "status": ..}`, with `status` left out
/// when no response was received.
#[derive(Debug, Clone, PartialEq)]
pub enum CallResult<T> {
    Success { data: T, status: u16 },
    Failure { error: String, status: Option<u16> },
}

impl<T> CallResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Status code of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Success { status, .. } => Some(*status),
            Self::Failure { status, .. } => *status,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error, .. } => Some(error),
        }
    }

    /// Transforms the payload of a successful call.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> CallResult<U> {
        match self {
            Self::Success { data, status } => CallResult::Success {
                data: f(data),
                status,
            },
            Self::Failure { error, status } => CallResult::Failure { error, status },
        }
    }

    /// Drops the status and returns the payload or the error message.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success { data, .. } => Ok(data),
            Self::Failure { error, .. } => Err(error),
        }
    }
}

impl<T> From<Result<ApiResponse<T>, Error>> for CallResult<T> {
    fn from(outcome: Result<ApiResponse<T>, Error>) -> Self {
        match outcome {
            Ok(resp) => Self::Success {
                data: resp.data,
                status: resp.status,
            },
            Err(e) => Self::Failure {
                error: e.message(),
                status: e.status(),
            },
        }
    }
}

/// Runs `call` and folds whatever it produces into a [`CallResult`].
///
/// The call is executed exactly once. Failures never escape: every error is
/// reduced to its best-effort message and the status code, when there is one.
pub async fn normalize<F, Fut, T>(call: F) -> CallResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<ApiResponse<T>, Error>>,
{
    call().await.into()
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
}

#[derive(Deserialize)]
struct Envelope<T> {
    success: bool,
    #[serde(default = "Option::default")]
    data: Option<T>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    status: Option<u16>,
}

impl<T: Serialize> Serialize for CallResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let envelope = match self {
            Self::Success { data, status } => EnvelopeRef {
                success: true,
                data: Some(data),
                error: None,
                status: Some(*status),
            },
            Self::Failure { error, status } => EnvelopeRef {
                success: false,
                data: None,
                error: Some(error.as_str()),
                status: *status,
            },
        };
        envelope.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for CallResult<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let envelope = Envelope::<T>::deserialize(deserializer)?;
        if envelope.success {
            // `"data": null` and a missing `data` look the same here; payloads
            // that accept null (unit, `Value`, `Option`) still decode.
            let data = match envelope.data {
                Some(data) => data,
                None => T::deserialize(().into_deserializer())
                    .map_err(|_: de::value::Error| de::Error::missing_field("data"))?,
            };
            let status = envelope
                .status
                .ok_or_else(|| de::Error::missing_field("status"))?;
            Ok(Self::Success { data, status })
        } else {
            let error = envelope
                .error
                .ok_or_else(|| de::Error::missing_field("error"))?;
            Ok(Self::Failure {
                error,
                status: envelope.status,
            })
        }
    }
}
