//! Page content shown by the portfolio.

use serde::{Deserialize, Serialize};

/// Everything the page displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Name in the hero section and nav bar.
    pub name: String,
    /// Subtitle under the name.
    pub tagline: String,
    /// Host the page is served from; links elsewhere are marked external.
    pub site_host: String,
    /// Paragraphs of the about section.
    pub about: Vec<String>,
    /// Skill cube labels.
    pub skills: Vec<String>,
    /// Memory block labels shown under the skills.
    pub memory_blocks: Vec<String>,
    /// Headline numbers. Values like `40%` and `3+` animate.
    pub stats: Vec<Stat>,
    pub projects: Vec<Project>,
    /// Contact links.
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Stat {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

impl Link {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Sam Carter".to_string(),
            tagline: "Systems programmer. Low-level tinkerer. Coffee-driven.".to_string(),
            site_host: "samcarter.dev".to_string(),
            about: vec![
                "I build fast, predictable software close to the metal.".to_string(),
                "Lately: allocators, schedulers and the occasional emulator.".to_string(),
            ],
            skills: ["Rust", "C", "Linux", "Networking", "Databases"]
                .map(String::from)
                .to_vec(),
            memory_blocks: ["0x00 stack", "0x40 heap", "0x80 mmap", "0xC0 kernel"]
                .map(String::from)
                .to_vec(),
            stats: vec![
                Stat::new("40%", "latency cut in production"),
                Stat::new("3+", "years shipping systems code"),
                Stat::new("24/7", "on-call ready"),
            ],
            projects: vec![
                Project {
                    title: "tinyalloc".to_string(),
                    description: "A slab allocator for embedded targets.".to_string(),
                    tags: vec!["rust".to_string(), "no_std".to_string()],
                },
                Project {
                    title: "pktscope".to_string(),
                    description: "Live packet inspection in the terminal.".to_string(),
                    tags: vec!["networking".to_string(), "tui".to_string()],
                },
            ],
            links: vec![
                Link::new("Email", "mailto:hello@samcarter.dev"),
                Link::new("GitHub", "https://github.com/samcarter"),
                Link::new("Blog", "https://blog.samcarter.dev"),
            ],
        }
    }
}
