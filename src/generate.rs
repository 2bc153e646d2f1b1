//! Output writing.
//!
//! Renders the menu and writes exactly two files into the output directory:
//!
//! ```text
//! output/
//! ├── style.css    # fixed stylesheet, embedded at compile time
//! └── menu.html    # the rendered page, links style.css
//! ```
//!
//! The page is rendered fully in memory before anything touches the disk.
//! The directory is created if missing, and existing files are overwritten,
//! so reruns are safe.

use crate::config::RenderConfig;
use crate::menu::MenuDocument;
use crate::render::render_document;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Stylesheet filename, referenced relatively from the page.
pub const STYLE_FILE: &str = "style.css";
/// Page filename.
pub const DOCUMENT_FILE: &str = "menu.html";

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Footer timestamp format.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("cannot create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Paths of the written artifacts.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSite {
    pub stylesheet: PathBuf,
    pub document: PathBuf,
}

/// The stylesheet exactly as written to disk.
pub fn stylesheet() -> String {
    format!("{}\n", CSS_STATIC.trim())
}

/// Current local time in the footer format.
pub fn timestamp_now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Render `doc` and write the stylesheet and page into `output_dir`.
pub fn generate(
    doc: &MenuDocument,
    config: &RenderConfig,
    output_dir: &Path,
) -> Result<GeneratedSite, GenerateError> {
    generate_at(doc, config, output_dir, &timestamp_now())
}

/// Like [`generate`], with an explicit footer timestamp.
pub fn generate_at(
    doc: &MenuDocument,
    config: &RenderConfig,
    output_dir: &Path,
    generated_at: &str,
) -> Result<GeneratedSite, GenerateError> {
    let html = render_document(doc, config, generated_at).into_string();

    fs::create_dir_all(output_dir).map_err(|source| GenerateError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let site = GeneratedSite {
        stylesheet: output_dir.join(STYLE_FILE),
        document: output_dir.join(DOCUMENT_FILE),
    };
    write_file(&site.stylesheet, &stylesheet())?;
    write_file(&site.document, &html)?;
    Ok(site)
}

fn write_file(path: &Path, content: &str) -> Result<(), GenerateError> {
    fs::write(path, content).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })
}
