//! Error type for the few browser operations that can fail.

use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, SiteError>;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no global window object")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("mount point #{id} not found in the host document")]
    MountPointMissing { id: String },

    #[error("mount point #{id} is not an HTML element")]
    MountPointNotHtml { id: String },

    #[error("page is already mounted")]
    AlreadyMounted,

    #[error("viewport observer: {0}")]
    Observer(String),
}

impl SiteError {
    /// Wrap a thrown JS value as an observer error.
    pub fn observer(value: &JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        SiteError::Observer(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_mount_point() {
        let err = SiteError::MountPointMissing { id: "root".into() };
        assert_eq!(err.to_string(), "mount point #root not found in the host document");
    }

    #[test]
    fn already_mounted_message() {
        assert_eq!(SiteError::AlreadyMounted.to_string(), "page is already mounted");
    }
}
