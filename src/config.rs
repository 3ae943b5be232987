//! Merge configuration.
//!
//! The selection filter, output path and trailer are fixed. Nothing is
//! loaded from disk or the environment; `--print-config` renders the
//! defaults as TOML.

use serde::{Deserialize, Serialize};

/// Name of the merged output file, relative to the working directory.
pub const OUTPUT_FILE: &str = "fullscript.txt";

/// Closing message appended once after every labeled block.
pub const TRAILER: &str = "
            These and multiple .js scripts that i have
            merged for the purposes of giving to you only need to modify the relevant scripts not
            everything. the purpose of the script is to display the model and make it interactable but currently it
            fails to do that for the following reasons:

        ";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Selection filter.
    #[serde(default)]
    pub filter: FilterConfig,
}

/// Where merged content goes and how it ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output file name.
    #[serde(default = "default_output_file")]
    pub file: String,

    /// Trailer written after all blocks.
    #[serde(default = "default_trailer")]
    pub trailer: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: default_output_file(),
            trailer: default_trailer(),
        }
    }
}

fn default_output_file() -> String {
    OUTPUT_FILE.to_string()
}

fn default_trailer() -> String {
    TRAILER.to_string()
}

/// Which directory entries become candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Script suffix, subject to the exclusion token.
    #[serde(default = "default_script_suffix")]
    pub script_suffix: String,

    /// Markup suffix, always included.
    #[serde(default = "default_markup_suffix")]
    pub markup_suffix: String,

    /// Script names containing this substring are skipped.
    #[serde(default = "default_exclude_token")]
    pub exclude_token: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            script_suffix: default_script_suffix(),
            markup_suffix: default_markup_suffix(),
            exclude_token: default_exclude_token(),
        }
    }
}

fn default_script_suffix() -> String {
    ".js".to_string()
}

fn default_markup_suffix() -> String {
    ".html".to_string()
}

fn default_exclude_token() -> String {
    "temp".to_string()
}

impl FilterConfig {
    /// Whether a file name passes the selection filter.
    ///
    /// The exclusion token is a plain, case-sensitive substring check and
    /// only applies to script names.
    pub fn accepts(&self, name: &str) -> bool {
        let script = name.ends_with(&self.script_suffix) && !name.contains(&self.exclude_token);
        let markup = name.ends_with(&self.markup_suffix);
        script || markup
    }
}

impl MergeConfig {
    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MergeConfig::default();
        assert_eq!(config.output.file, "fullscript.txt");
        assert_eq!(config.filter.script_suffix, ".js");
        assert_eq!(config.filter.markup_suffix, ".html");
        assert_eq!(config.filter.exclude_token, "temp");
    }

    #[test]
    fn test_trailer_bytes() {
        let expected = format!(
            "\n{pad}These and multiple .js scripts that i have\n\
             {pad}merged for the purposes of giving to you only need to modify the relevant scripts not\n\
             {pad}everything. the purpose of the script is to display the model and make it interactable but currently it\n\
             {pad}fails to do that for the following reasons:\n\n        ",
            pad = " ".repeat(12)
        );
        assert_eq!(TRAILER, expected);
    }

    #[test]
    fn test_filter_accepts() {
        let filter = FilterConfig::default();
        assert!(filter.accepts("main.js"));
        assert!(filter.accepts("index.html"));
        assert!(filter.accepts("temp.html"));
        assert!(!filter.accepts("temp.js"));
        assert!(!filter.accepts("my_template.js"));
        assert!(!filter.accepts("merge.py"));
        assert!(!filter.accepts("fullscript.txt"));
        assert!(!filter.accepts("main.jsx"));
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let filter = FilterConfig::default();
        assert!(filter.accepts("Temp.js"));
        assert!(!filter.accepts("main.JS"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = MergeConfig::default();
        let rendered = config.to_toml();
        assert!(rendered.contains("[output]"));
        assert!(rendered.contains("[filter]"));

        let parsed: MergeConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
