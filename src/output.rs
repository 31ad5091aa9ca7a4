//! JSON出力
//!
//! 標準出力には常にJSONオブジェクトを1つだけ出す

use crate::error::Result;
use garment_scan_common::ScanResult;
use serde_json::json;
use std::io::Write;
use std::path::Path;

pub fn render(result: &ScanResult, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

pub fn error_json(message: &str) -> String {
    json!({ "error": message }).to_string()
}

/// `path` が無ければ標準出力へ
pub fn write_output(json: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, format!("{}\n", json))?;
            tracing::info!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", json)?;
        }
    }
    Ok(())
}
