//! Input loading and render settings.
//!
//! The envelope is described by a small TOML document:
//!
//! ```toml
//! size = "#10"
//! from = ["Return Name", "Street", "City, ST 00000"]
//! to = ["Destination Name", "Street", "City, ST 00000"]
//! font_face = "serif"  # optional, defaults to "mono"
//! font_size = 12       # optional, points, defaults to 14
//! ```
//!
//! It is read from a file, from standard input (`-`), or falls back to a
//! built-in example when no input is named.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::font::FontFace;
use crate::core::layout::TextStyle;
use crate::error::{EnvelopeError, Result};

pub const DEFAULT_FONT_FACE: &str = "mono";
pub const DEFAULT_FONT_SIZE: f64 = 14.0;

/// Used when the program is run without an input argument.
pub const DEFAULT_DOCUMENT: &str = r##"
size = "#10"  # 9-1/2 x 4-1/8 inches
from = [
  "E. L. Brown",
  "1640 Riverside Drive",
  "Hill Valley, CA 91103",
]
to = [
  "Burton Richter",
  "c/o SLAC National Laboratory",
  "2575 Sand Hill Rd",
  "Menlo Park, CA 94025",
]
"##;

// ───────────────────────────────────────── input source ──────

/// Where the envelope description comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    BuiltIn,
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Interpret the optional positional argument; `-` means stdin.
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            None => Self::BuiltIn,
            Some(p) if p.as_os_str() == "-" => Self::Stdin,
            Some(p) => Self::File(p.to_path_buf()),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::BuiltIn => "built-in example".into(),
            Self::Stdin => "standard input".into(),
            Self::File(p) => p.display().to_string(),
        }
    }

    fn read_to_string(&self) -> Result<String> {
        match self {
            Self::BuiltIn => Ok(DEFAULT_DOCUMENT.to_string()),
            Self::Stdin => read_all(std::io::stdin().lock()),
            Self::File(p) => Ok(std::fs::read_to_string(p)?),
        }
    }
}

// ───────────────────────────────────────── envelope spec ─────

/// A validated envelope description.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvelopeSpec {
    pub size: String,
    pub from: Vec<String>,
    pub to: Vec<String>,
    pub render: RenderConfig,
}

/// Untyped view of the document so type mismatches surface as
/// [`EnvelopeError::InvalidInput`] rather than as TOML syntax errors.
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    size: Option<toml::Value>,
    from: Option<toml::Value>,
    to: Option<toml::Value>,
    font_face: Option<toml::Value>,
    font_size: Option<toml::Value>,
}

impl EnvelopeSpec {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let raw: RawEnvelope = toml::from_str(s)?;

        let size = match raw.size {
            Some(toml::Value::String(s)) => s,
            Some(other) => {
                return Err(EnvelopeError::InvalidInput(format!(
                    "`size` must be a string, got {}",
                    other.type_str()
                )))
            }
            None => return Err(EnvelopeError::InvalidInput("missing `size`".into())),
        };

        Ok(Self {
            size,
            from: address_lines("from", raw.from)?,
            to: address_lines("to", raw.to)?,
            render: render_config(raw.font_face, raw.font_size)?,
        })
    }
}

/// Optional font keys; anything absent keeps the [`RenderConfig`] default.
fn render_config(face: Option<toml::Value>, size: Option<toml::Value>) -> Result<RenderConfig> {
    let mut config = RenderConfig::default();
    match face {
        Some(toml::Value::String(name)) => config.font_face = name,
        Some(other) => {
            return Err(EnvelopeError::InvalidInput(format!(
                "`font_face` must be a string, got {}",
                other.type_str()
            )))
        }
        None => {}
    }
    match size {
        Some(toml::Value::Integer(pt)) => config.font_size = pt as f64,
        Some(toml::Value::Float(pt)) => config.font_size = pt,
        Some(other) => {
            return Err(EnvelopeError::InvalidInput(format!(
                "`font_size` must be a number, got {}",
                other.type_str()
            )))
        }
        None => {}
    }
    config.text_style()?;
    Ok(config)
}

fn address_lines(key: &str, value: Option<toml::Value>) -> Result<Vec<String>> {
    let invalid = |msg: String| EnvelopeError::InvalidInput(msg);

    let items = match value {
        Some(toml::Value::Array(items)) => items,
        Some(other) => {
            return Err(invalid(format!(
                "`{key}` must be an array of strings, got {}",
                other.type_str()
            )))
        }
        None => return Err(invalid(format!("missing `{key}`"))),
    };
    if items.is_empty() {
        return Err(invalid(format!("`{key}` must contain at least one line")));
    }

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            toml::Value::String(line) if line.contains(['\n', '\r']) => Err(invalid(format!(
                "`{key}` line {} contains a line break",
                i + 1
            ))),
            toml::Value::String(line) => Ok(line),
            other => Err(invalid(format!(
                "`{key}` line {} must be a string, got {}",
                i + 1,
                other.type_str()
            ))),
        })
        .collect()
}

fn read_all<R: Read>(mut reader: R) -> Result<String> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    Ok(s)
}

/// Read and validate the envelope description from `source`.
pub fn load_spec(source: &InputSource) -> Result<EnvelopeSpec> {
    let text = source.read_to_string()?;
    EnvelopeSpec::from_toml_str(&text)
}

/// Read and validate the envelope description from an open stream.
pub fn load_spec_from_reader<R: Read>(reader: R) -> Result<EnvelopeSpec> {
    EnvelopeSpec::from_toml_str(&read_all(reader)?)
}

// ───────────────────────────────────────── render config ─────

/// Font selection for the rendered page.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Generic family (`mono`, `serif`, `sans-serif`) or a standard PDF face name.
    pub font_face: String,
    /// Points.
    pub font_size: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_face: DEFAULT_FONT_FACE.into(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl RenderConfig {
    /// Resolve the face name and check the size.
    pub fn text_style(&self) -> Result<TextStyle> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(EnvelopeError::InvalidFontSize(self.font_size));
        }
        Ok(TextStyle {
            face: FontFace::from_name(&self.font_face)?,
            size: self.font_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn invalid(doc: &str) -> String {
        match EnvelopeSpec::from_toml_str(doc) {
            Err(EnvelopeError::InvalidInput(msg)) => msg,
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_default_document_is_valid() {
        let spec = EnvelopeSpec::from_toml_str(DEFAULT_DOCUMENT).unwrap();
        assert_eq!(spec.size, "#10");
        assert_eq!(spec.from.len(), 3);
        assert_eq!(spec.to.len(), 4);
        assert_eq!(spec.to[1], "c/o SLAC National Laboratory");
    }

    #[test]
    fn test_empty_from_is_rejected() {
        let msg = invalid(r##"size = "#10"
from = []
to = ["A"]"##);
        assert!(msg.contains("`from`"), "{msg}");
    }

    #[test]
    fn test_empty_to_is_rejected() {
        let msg = invalid(r##"size = "#10"
from = ["A"]
to = []"##);
        assert!(msg.contains("`to`"), "{msg}");
    }

    #[test]
    fn test_missing_keys_are_rejected() {
        assert!(invalid(r#"from = ["A"]
to = ["B"]"#)
            .contains("size"));
        assert!(invalid(r##"size = "#10"
to = ["B"]"##)
            .contains("from"));
        assert!(invalid(r##"size = "#10"
from = ["A"]"##)
            .contains("to"));
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        let msg = invalid(r#"size = 10
from = ["A"]
to = ["B"]"#);
        assert!(msg.contains("integer"), "{msg}");

        let msg = invalid(r##"size = "#10"
from = "A"
to = ["B"]"##);
        assert!(msg.contains("array"), "{msg}");

        let msg = invalid(r##"size = "#10"
from = ["A", 2]
to = ["B"]"##);
        assert!(msg.contains("line 2"), "{msg}");
    }

    #[test]
    fn test_embedded_line_break_is_rejected() {
        let msg = invalid(r##"size = "#10"
from = ["A\nB"]
to = ["C"]"##);
        assert!(msg.contains("line break"), "{msg}");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let spec = EnvelopeSpec::from_toml_str(r#"size = "9x4"
note = "ignored"
from = ["A"]
to = ["B"]"#)
        .unwrap();
        assert_eq!(spec.size, "9x4");
    }

    #[test]
    fn test_syntax_error_is_a_toml_error() {
        assert!(matches!(
            EnvelopeSpec::from_toml_str("size = "),
            Err(EnvelopeError::Toml(_))
        ));
    }

    #[test]
    fn test_input_source_from_arg() {
        assert_eq!(InputSource::from_arg(None), InputSource::BuiltIn);
        assert_eq!(InputSource::from_arg(Some(Path::new("-"))), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg(Some(Path::new("env.toml"))),
            InputSource::File(PathBuf::from("env.toml"))
        );
    }

    #[test]
    fn test_load_spec_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "size = \"#6.75\"\nfrom = [\"Me\"]\nto = [\"You\", \"There\"]").unwrap();
        let spec = load_spec(&InputSource::File(f.path().to_path_buf())).unwrap();
        assert_eq!(spec.size, "#6.75");
        assert_eq!(spec.to, vec!["You".to_string(), "There".to_string()]);
    }

    #[test]
    fn test_load_spec_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = InputSource::File(dir.path().join("nope.toml"));
        assert!(matches!(load_spec(&missing), Err(EnvelopeError::Io(_))));
    }

    #[test]
    fn test_default_render_config() {
        let style = RenderConfig::default().text_style().unwrap();
        assert_eq!(style.face, FontFace::Courier);
        assert_eq!(style.size, 14.0);
    }

    #[test]
    fn test_document_without_font_keys_uses_defaults() {
        let spec = EnvelopeSpec::from_toml_str(DEFAULT_DOCUMENT).unwrap();
        assert_eq!(spec.render, RenderConfig::default());
    }

    #[test]
    fn test_font_keys_are_read_from_the_document() {
        let spec = EnvelopeSpec::from_toml_str(r##"size = "#10"
from = ["A"]
to = ["B"]
font_face = "sans-serif"
font_size = 12"##)
        .unwrap();
        assert_eq!(spec.render.font_face, "sans-serif");
        assert_eq!(spec.render.font_size, 12.0);
        assert_eq!(spec.render.text_style().unwrap().face, FontFace::Helvetica);

        let spec = EnvelopeSpec::from_toml_str(r##"size = "#10"
from = ["A"]
to = ["B"]
font_size = 10.5"##)
        .unwrap();
        assert_eq!(spec.render.font_size, 10.5);
        assert_eq!(spec.render.font_face, DEFAULT_FONT_FACE);
    }

    #[test]
    fn test_bad_font_keys_are_rejected() {
        assert!(matches!(
            EnvelopeSpec::from_toml_str(r##"size = "#10"
from = ["A"]
to = ["B"]
font_face = "Papyrus""##),
            Err(EnvelopeError::UnknownFont(n)) if n == "Papyrus"
        ));
        assert!(matches!(
            EnvelopeSpec::from_toml_str(r##"size = "#10"
from = ["A"]
to = ["B"]
font_size = -3"##),
            Err(EnvelopeError::InvalidFontSize(_))
        ));
        let msg = invalid(r##"size = "#10"
from = ["A"]
to = ["B"]
font_size = "big""##);
        assert!(msg.contains("font_size"), "{msg}");
    }

    #[test]
    fn test_load_spec_from_stream() {
        let input = std::io::Cursor::new("size = \"9x4\"\nfrom = [\"Me\"]\nto = [\"You\"]\n");
        let spec = load_spec_from_reader(input).unwrap();
        assert_eq!(spec.size, "9x4");
        assert_eq!(spec.from, vec!["Me".to_string()]);
    }

    #[test]
    fn test_bad_font_size() {
        let cfg = RenderConfig {
            font_size: 0.0,
            ..RenderConfig::default()
        };
        assert!(matches!(cfg.text_style(), Err(EnvelopeError::InvalidFontSize(_))));
    }
}
