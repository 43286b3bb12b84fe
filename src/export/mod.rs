//! HTML export of summaries
//!
//! The summary body is model output and is inserted without escaping. The
//! file is meant to be opened locally, not served.

use std::path::{Path, PathBuf};

use crate::{Result, VidsumError};

/// File name used when no export path is given
pub const DEFAULT_EXPORT_FILE: &str = "summary.html";

/// Render a standalone HTML page for a summary.
pub fn render_html(title: &str, body: &str) -> String {
    format!(
        r#"<html>
<head>
    <title>Detailed Summary of {title}</title>
    <style>
        body {{
            font-family: Arial, sans-serif;
            margin: 20px;
        }}
        h1 {{
            color: #333;
        }}
        h2 {{
            color: #555;
        }}
        p {{
            line-height: 1.6;
        }}
        a {{
            color: blue;
            text-decoration: none;
        }}
    </style>
</head>
<body>
    <h1>Detailed Summary of {title}</h1>
    {body}
</body>
</html>
"#
    )
}

/// Write a rendered page to `path`, creating parent directories.
pub fn write_html(path: &Path, html: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            VidsumError::Export(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    std::fs::write(path, html)?;
    tracing::info!(path = %path.display(), "Summary exported");

    Ok(path.to_path_buf())
}
