pub mod core;
pub mod analysis;
pub mod extract;
pub mod report;
pub mod server;

pub use crate::analysis::stopwords::StopWordSet;
pub use crate::core::config::Config;
pub use crate::core::engine::TextEngine;
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::types::{AnalysisResult, WordCount};

/*
┌──────────────────────────────── UZTEXT ARCHITECTURE ────────────────────────────────┐
│                                                                                     │
│   front ends        bin/uztext (stdin / file)        bin/uztext-server (axum)       │
│                           │                                   │                     │
│                           │          extract::ExtractorRegistry                     │
│                           │          (.txt / .docx / .pdf → String)                 │
│                           ▼                                   ▼                     │
│   ┌──────────────────────────── core::engine::TextEngine ─────────────────────────┐ │
│   │  stop_words: Arc<StopWordSet>   (read-only, rebuilt on reload)                │ │
│   │                                                                               │ │
│   │  text ──► UzbekTokenizer ──► Vec<Token>                                       │ │
│   │                 │                 │                                           │ │
│   │                 │                 ├──► StopWordFilter::find   → stop words    │ │
│   │                 │                 └──► FrequencyTable → FrequencyAnalyzer     │ │
│   │                 │                            (most / least frequent)          │ │
│   │                 └──► Analyzer(tokenizer + StopWordFilter) → edited text       │ │
│   │                                                                               │ │
│   │  ──► AnalysisResult                                                           │ │
│   └───────────────────────────────────────────────────────────────────────────────┘ │
│                           │                                                         │
│                           ▼                                                         │
│   report::ReportWriter    output.json (report::json)   output.txt (report::text)    │
│                                                                                     │
└─────────────────────────────────────────────────────────────────────────────────────┘
*/
