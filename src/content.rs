//! Static portfolio content
//!
//! Every document the app can display is hand-authored here and compiled in.
//! Nothing is ever read from disk; the "files" in the explorer are entries in
//! these tables.

/// Stable identifier of a document; doubles as the explorer path segment
pub type DocId = &'static str;

/// The permanent start document, immune to close and drag
pub const HOME_DOC: DocId = "home";

/// Language tag shown in the status bar and used for accent coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Markdown,
    Rust,
    TypeScript,
    Json,
    Text,
}

impl Language {
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Markdown => "Markdown",
            Language::Rust => "Rust",
            Language::TypeScript => "TypeScript",
            Language::Json => "JSON",
            Language::Text => "Plain Text",
        }
    }
}

/// One static document: an entry in the fake workspace
#[derive(Debug)]
pub struct Document {
    pub id: DocId,
    /// File name shown on the tab and in the explorer
    pub title: &'static str,
    pub lang: Language,
    /// Repository link for project documents
    pub repo_url: Option<&'static str>,
    pub body: &'static str,
}

/// Contact email surfaced by the terminal and the palette copy command
pub const CONTACT_EMAIL: &str = "astrid@avklyver.dev";

pub static DOCUMENTS: &[Document] = &[
    Document {
        id: HOME_DOC,
        title: "README.md",
        lang: Language::Markdown,
        repo_url: None,
        body: r#"# Astrid V. Klyver

Systems developer. I build storage engines, network plumbing, and the
occasional thing with a user interface (you are looking at one).

This portfolio behaves like the editors I spend my days in:

  - open files from the explorer on the left
  - drag a tab out of the strip to float it as a window
  - drop a floating window back onto the strip to dock it
  - press ctrl+p for the command palette
  - press ctrl+` for a terminal that mostly humors you

Start with `projects/` in the explorer, or type `help` in the terminal.
"#,
    },
    Document {
        id: "about",
        title: "about.md",
        lang: Language::Markdown,
        repo_url: None,
        body: r#"# About

Ten years of Rust, C, and the parts of distributed systems nobody
photographs for conference slides. Previously: storage team at a CDN you
have used today without noticing; before that, firmware for industrial
sensors that are legally required to never crash.

I care about:

  - boring, observable systems
  - error messages written for the person reading them at 3am
  - interfaces that stay out of the way

Outside work: sea kayaking, film photography, and an ongoing feud with my
sourdough starter.
"#,
    },
    Document {
        id: "contact",
        title: "contact.json",
        lang: Language::Json,
        repo_url: None,
        body: r#"{
  "email": "astrid@avklyver.dev",
  "github": "https://github.com/avklyver",
  "timezone": "Europe/Oslo",
  "open_to": ["contract work", "storage problems", "weird protocols"],
  "response_time": "usually < 48h"
}
"#,
    },
    Document {
        id: "project-atlas",
        title: "atlas.rs",
        lang: Language::Rust,
        repo_url: Some("https://github.com/avklyver/atlas"),
        body: r#"//! atlas — an embedded log-structured key-value store
//!
//! Single-writer, many-reader, crash-safe by construction. Values live in
//! an append-only segment log; keys live in an in-memory radix index that
//! is rebuilt from segment footers on open.
//!
//! Highlights:
//!   - group-committed writes, fsync batching with a 2ms window
//!   - segment compaction that never blocks readers
//!   - 14k lines, zero unsafe outside the mmap wrapper
//!
//! Built because the project that needed it had 40MB of disk budget and
//! RocksDB has opinions about that.
//!
//! Stack: rust, memmap2, crc32fast, criterion for the honesty.
"#,
    },
    Document {
        id: "project-ferrite",
        title: "ferrite.rs",
        lang: Language::Rust,
        repo_url: Some("https://github.com/avklyver/ferrite"),
        body: r#"//! ferrite — a wire-protocol toolkit for binary framing
//!
//! Declarative frame descriptions compile down to zero-copy encoders and
//! decoders. Handles length-prefixed, delimiter-framed, and fixed-layout
//! protocols; the fuzzer has opinions and they have all been addressed.
//!
//! Used in production parsing ~80k frames/sec of factory telemetry on a
//! single core that also has other jobs.
//!
//! Stack: rust, proc-macro2, quote, arbitrary + cargo-fuzz.
"#,
    },
    Document {
        id: "project-driftwood",
        title: "driftwood.ts",
        lang: Language::TypeScript,
        repo_url: Some("https://github.com/avklyver/driftwood"),
        body: r#"// driftwood — latency heatmaps for people who ship
//
// A tiny in-browser viewer for HDR histogram dumps. Drop a file on it,
// get percentile bands over time, no server, no build step, one 60KB
// bundle. The only TypeScript I will admit to in public.
//
// Stack: typescript, d3-scale, a deeply stubborn canvas renderer.
"#,
    },
    Document {
        id: "skills",
        title: "skills.json",
        lang: Language::Json,
        repo_url: None,
        body: r#"{
  "daily": ["rust", "linux", "tokio", "postgres", "grafana"],
  "fluent": ["c", "go", "python", "typescript"],
  "domains": [
    "storage engines",
    "wire protocols",
    "embedded telemetry",
    "performance forensics"
  ],
  "will_learn_for_food": ["formal verification", "FPGA toolchains"]
}
"#,
    },
];

/// Look up a document by id
pub fn document(id: &str) -> Option<&'static Document> {
    DOCUMENTS.iter().find(|d| d.id == id)
}

/// Look up a document by its display title (used by terminal commands,
/// which accept either form)
pub fn document_by_title(title: &str) -> Option<&'static Document> {
    DOCUMENTS.iter().find(|d| d.title.eq_ignore_ascii_case(title))
}

// ============================================================================
// Explorer Tree
// ============================================================================

/// A collapsible section in the explorer sidebar
#[derive(Debug)]
pub struct TreeSection {
    pub label: &'static str,
    pub doc_ids: &'static [DocId],
}

pub static FILE_TREE: &[TreeSection] = &[
    TreeSection {
        label: "portfolio",
        doc_ids: &[HOME_DOC, "about", "contact"],
    },
    TreeSection {
        label: "projects",
        doc_ids: &["project-atlas", "project-ferrite", "project-driftwood"],
    },
    TreeSection {
        label: "meta",
        doc_ids: &["skills"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_document_exists() {
        let home = document(HOME_DOC).expect("home document must exist");
        assert_eq!(home.title, "README.md");
    }

    #[test]
    fn test_tree_references_are_valid() {
        for section in FILE_TREE {
            for id in section.doc_ids {
                assert!(
                    document(id).is_some(),
                    "tree section '{}' references unknown doc '{}'",
                    section.label,
                    id
                );
            }
        }
    }

    #[test]
    fn test_doc_ids_are_unique() {
        for (i, a) in DOCUMENTS.iter().enumerate() {
            for b in &DOCUMENTS[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate doc id");
            }
        }
    }

    #[test]
    fn test_lookup_by_title() {
        assert_eq!(document_by_title("atlas.rs").unwrap().id, "project-atlas");
        assert_eq!(document_by_title("ATLAS.RS").unwrap().id, "project-atlas");
        assert!(document_by_title("nope.txt").is_none());
    }
}
