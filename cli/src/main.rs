use anyhow::{bail, Context, Result};
use clap::Parser;
use core::{rank, Bm25Params, Hit, Index, ENGLISH_STOPWORDS};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "lexrank")]
#[command(about = "Rank a corpus against queries with BM25", long_about = None)]
struct Cli {
    /// Corpus file: one document per line, or JSONL with a "text" field
    #[arg(long)]
    corpus: PathBuf,
    /// Stop-word file, one word per line (default: built-in English list)
    #[arg(long)]
    stopwords: Option<PathBuf>,
    /// Number of results per query
    #[arg(long, default_value_t = 3)]
    k: usize,
    /// BM25 term-frequency saturation
    #[arg(long, default_value_t = 1.5)]
    k1: f64,
    /// BM25 length-normalization strength
    #[arg(long, default_value_t = 0.75)]
    b: f64,
    /// Print hits as JSON instead of plain text
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Query to run once; omit for an interactive prompt
    query: Option<String>,
}

#[derive(Deserialize)]
struct JsonDoc {
    text: String,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let corpus = load_corpus(&cli.corpus)
        .with_context(|| format!("reading corpus from {}", cli.corpus.display()))?;
    let stopwords = match &cli.stopwords {
        Some(path) => load_stopwords(path)
            .with_context(|| format!("reading stop words from {}", path.display()))?,
        None => ENGLISH_STOPWORDS.clone(),
    };

    let params = Bm25Params { k1: cli.k1, b: cli.b };
    let num_docs = corpus.len();
    let index = Index::build(corpus, &stopwords)?;
    tracing::info!(num_docs, "corpus indexed");

    match &cli.query {
        Some(query) => {
            let hits = rank(&index, query, &stopwords, params, cli.k)?;
            print_hits(&hits, cli.json)?;
        }
        None => query_loop(&index, &stopwords, params, cli.k, cli.json)?,
    }
    Ok(())
}

fn query_loop(
    index: &Index,
    stopwords: &HashSet<String>,
    params: Bm25Params,
    k: usize,
    json: bool,
) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "query> ")?;
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if query == "exit" {
            break;
        }
        let hits = rank(index, query, stopwords, params, k)?;
        print_hits(&hits, json)?;
    }
    Ok(())
}

fn print_hits(hits: &[Hit], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(hits)?);
        return Ok(());
    }
    for hit in hits {
        println!("{:>4}  {:>8.4}  {}", hit.doc_id, hit.score, hit.text);
    }
    Ok(())
}

/// One document per line. Lines that parse as JSON objects contribute their
/// "text" field; anything else is taken verbatim. Blank lines are skipped.
fn load_corpus(path: &Path) -> Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut docs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if line.trim_start().starts_with('{') {
            let doc: JsonDoc = serde_json::from_str(&line)
                .with_context(|| format!("bad JSONL record: {line}"))?;
            docs.push(doc.text);
        } else {
            docs.push(line);
        }
    }
    if docs.is_empty() {
        bail!("corpus file {} contains no documents", path.display());
    }
    Ok(docs)
}

fn load_stopwords(path: &Path) -> Result<HashSet<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut words = HashSet::new();
    for line in reader.lines() {
        let word = line?.trim().to_lowercase();
        if !word.is_empty() {
            words.insert(word);
        }
    }
    Ok(words)
}
