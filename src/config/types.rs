use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub syntax: SyntaxConfig,
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub flags: Vec<FlagConfig>,
    #[serde(default)]
    pub parsers: Vec<ParserConfig>,
}

/// Indicator prefixes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntaxConfig {
    /// Prefix marking a flag occurrence (default: "--").
    #[serde(default = "default_flag_indicator")]
    pub flag_indicator: String,
    /// Prefix marking a parser opener (default: none).
    #[serde(default)]
    pub parser_indicator: String,
}

/// Shape applied to flags and parsers that leave fields unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Values per flag occurrence (default: 1).
    #[serde(default = "default_arity")]
    pub arity: usize,
    /// Value separator, " " for following tokens (default: "-").
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Whether flags may occur more than once (default: false).
    #[serde(default)]
    pub allow_multiple: bool,
    /// Non-flag tokens closing a parser window (default: 1).
    #[serde(default = "default_arity")]
    pub parser_arity: usize,
    /// Token closing parser windows, overriding arity.
    #[serde(default)]
    pub suffix: Option<String>,
}

/// A declared flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagConfig {
    /// Name without the flag indicator (e.g., "output").
    pub name: String,
    pub arity: Option<usize>,
    pub separator: Option<String>,
    pub allow_multiple: Option<bool>,
}

/// A declared parser. Its window is joined into one token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Name without the parser indicator (e.g., "[").
    pub name: String,
    pub arity: Option<usize>,
    pub suffix: Option<String>,
    /// Text placed between window tokens (default: " ").
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            flag_indicator: default_flag_indicator(),
            parser_indicator: String::new(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            arity: default_arity(),
            separator: default_separator(),
            allow_multiple: false,
            parser_arity: default_arity(),
            suffix: None,
        }
    }
}

fn default_flag_indicator() -> String {
    "--".to_string()
}

fn default_arity() -> usize {
    1
}

fn default_separator() -> String {
    "-".to_string()
}

fn default_delimiter() -> String {
    " ".to_string()
}
