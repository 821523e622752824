use crate::content::SiteOptions;
use crate::i18n::Language;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Content store
    pub content_file: String,

    // Rendering
    pub language: Language,
    pub default_author: String,
    pub include_drafts: bool,

    // Preview
    pub preview_post: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            content_file: std::env::var("CONTENT_FILE")
                .unwrap_or_else(|_| "data/content.json".to_string()),

            language: match std::env::var("SITE_LANGUAGE") {
                Ok(code) => Language::from_code(code.trim())
                    .context("SITE_LANGUAGE is not a supported language")?,
                Err(_) => Language::default_language(),
            },
            default_author: std::env::var("DEFAULT_AUTHOR")
                .unwrap_or_else(|_| "default".to_string()),
            include_drafts: std::env::var("INCLUDE_DRAFTS")
                .ok()
                .and_then(|v| parse_bool(&v))
                .unwrap_or(false),

            preview_post: std::env::var("PREVIEW_POST")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        })
    }

    pub fn site_options(&self) -> SiteOptions {
        SiteOptions {
            default_author: self.default_author.clone(),
            include_drafts: self.include_drafts,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
