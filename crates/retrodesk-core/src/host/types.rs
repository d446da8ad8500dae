use std::fmt;

use serde::{Deserialize, Serialize};

use crate::widgets::WidgetKind;
use crate::window::WindowId;

/// Identifier of one opened window instance.
///
/// Millisecond timestamp plus a random suffix, so rapid successive opens of
/// the same widget still get distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(String);

impl InstanceId {
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        let random = uuid::Uuid::new_v4().simple().to_string();
        Self(format!("{}-{}", millis, &random[..8]))
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An entry in the host's open-window list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenWindow {
    pub kind: WidgetKind,
    pub instance: InstanceId,
    /// Surface id, `{key}-window-{instance}`.
    pub window_id: WindowId,
    /// RFC 3339 open time.
    pub opened_at: String,
}

impl OpenWindow {
    pub fn new(kind: WidgetKind, instance: InstanceId) -> Self {
        let window_id = WindowId::new(format!("{}-window-{}", kind.key(), instance));
        Self {
            kind,
            instance,
            window_id,
            opened_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
