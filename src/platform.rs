// Browser/webview bridges for share, clipboard and external links.
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// Error raised when the share bridge cannot report a result.
#[derive(Debug)]
pub struct ShareError(String);

impl ShareError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl std::fmt::Display for ShareError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ShareError {}

/// Shares the page currently shown; the bridge fills in its URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ShareStatus {
    Shared,
    Unavailable,
    Failed {
        #[serde(default)]
        name: String,
        #[serde(default)]
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareFollowUp {
    Done,
    CopyLink,
}

/// Decides whether the clipboard fallback runs after a share attempt.
pub fn share_follow_up(status: &ShareStatus) -> ShareFollowUp {
    match status {
        ShareStatus::Shared => ShareFollowUp::Done,
        ShareStatus::Unavailable => ShareFollowUp::CopyLink,
        // The user closed the share sheet.
        ShareStatus::Failed { name, .. } if name == "AbortError" => ShareFollowUp::Done,
        ShareStatus::Failed { .. } => ShareFollowUp::CopyLink,
    }
}

pub async fn share(request: &ShareRequest) -> Result<ShareStatus, ShareError> {
    let payload = serde_json::to_string(request).map_err(|e| ShareError::new(e.to_string()))?;
    let script = format!(
        r#"return (async function () {{
            const req = {payload};
            if (!navigator.share) {{
                return {{ status: "unavailable" }};
            }}
            try {{
                await navigator.share({{
                    title: req.title,
                    text: req.text,
                    url: window.location.href,
                }});
                return {{ status: "shared" }};
            }} catch (err) {{
                return {{
                    status: "failed",
                    name: (err && err.name) ? String(err.name) : "",
                    message: (err && err.message) ? String(err.message) : String(err),
                }};
            }}
        }})();"#
    );
    document::eval(&script)
        .join::<ShareStatus>()
        .await
        .map_err(|e| ShareError::new(e.to_string()))
}

pub async fn copy_current_url() -> bool {
    let eval = document::eval(
        r#"return (async function () {
            try {
                await navigator.clipboard.writeText(window.location.href);
                return true;
            } catch (err) {
                return false;
            }
        })();"#,
    );
    eval.join::<bool>().await.unwrap_or(false)
}

pub fn open_external(url: &str) {
    let target = serde_json::to_string(url).unwrap_or_else(|_| "\"\"".to_string());
    let _ = document::eval(&format!("window.open({target}, \"_blank\");"));
}
