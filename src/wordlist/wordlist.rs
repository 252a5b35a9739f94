use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use serde_json::from_str;
use thiserror::Error;
use tracing::{debug, info};
use typed_builder::TypedBuilder;

use crate::alphabet::normalize;
use crate::wordlist::index::Index;
use crate::wordlist::trie::{Trie, Words};

/// A word collection backed by the trie, populated from tokenized input.
#[derive(Debug)]
pub struct Wordlist {
    trie: Trie,
}

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: missing column {column}")]
    MissingColumn { line: usize, column: usize },
    #[error("line {line}: bad frequency {value:?}")]
    BadFrequency { line: usize, value: String },
}

/// Shape of the input. Plain input (no delimiter) is split into
/// whitespace-delimited tokens; with a delimiter, each line carries one
/// word in `word_column`, optionally filtered by a frequency column.
#[derive(TypedBuilder)]
pub struct FileFormat {
    #[builder(default)]
    delimiter: Option<char>,
    #[builder(default)]
    word_column: Option<usize>,
    #[builder(default)]
    freq_column: Option<usize>,
    #[builder(default)]
    min_freq: Option<isize>,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str, lineno: usize)
                      -> Result<(&'a str, isize), WordlistError> {
        let delimiter = match self.delimiter {
            None => return Ok((line, 1)),
            Some(delimiter) => delimiter,
        };
        let columns = line.split(delimiter).collect::<Vec<_>>();
        let word_idx = self.word_column.unwrap_or(0);
        let word = *columns.get(word_idx)
            .ok_or(WordlistError::MissingColumn { line: lineno, column: word_idx })?;
        let freq = match self.freq_column {
            None => 1,
            Some(freq_idx) => {
                let value = *columns.get(freq_idx)
                    .ok_or(WordlistError::MissingColumn { line: lineno, column: freq_idx })?;
                from_str::<isize>(value.trim())
                    .map_err(|_| WordlistError::BadFrequency {
                        line: lineno,
                        value: value.to_string(),
                    })?
            }
        };
        Ok((word, freq))
    }

    fn accepts(&self, freq: isize) -> bool {
        self.min_freq.map(|min| freq >= min).unwrap_or(true)
    }
}

impl Wordlist {
    pub fn from_file<P: AsRef<Path>>(path: P, format: &FileFormat)
                                     -> Result<Wordlist, WordlistError> {
        let path = path.as_ref();
        debug!("reading words from {}", path.display());
        let file = File::open(path).map_err(|source| WordlistError::Open {
            path: path.display().to_string(),
            source,
        })?;
        Wordlist::from_reader(BufReader::new(file), format)
    }

    pub fn from_reader<R: BufRead>(reader: R, format: &FileFormat)
                                   -> Result<Wordlist, WordlistError> {
        let mut trie = Trie::new();

        let start = Instant::now();
        let stats = read_words(&mut trie, reader, format)?;
        info!(words = stats.words, failures = stats.failures,
              "read input in {:.3}s", start.elapsed().as_secs_f64());

        Ok(Wordlist { trie })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.trie.contains_prefix(prefix)
    }

    pub fn words(&self) -> Words<'_> {
        self.trie.words()
    }

    pub fn words_with_prefix(&self, prefix: &str) -> Words<'_> {
        self.trie.words_with_prefix(prefix)
    }

    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}

#[derive(Default)]
struct ReadStats {
    words: usize,
    failures: usize,
}

/// Feeds every accepted token from `reader` into `index`. Unreadable lines
/// are counted and skipped rather than aborting the load.
fn read_words<X, R>(index: &mut X, reader: R, format: &FileFormat)
                    -> Result<ReadStats, WordlistError>
    where X: Index,
          R: BufRead {
    let mut stats = ReadStats::default();
    for (lineno, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                debug!("line {}: {}", lineno, e);
                stats.failures += 1;
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }
        if format.delimiter.is_none() {
            for token in line.split_whitespace() {
                stats.words += add_token(index, token);
            }
        } else {
            let (word, freq) = format.parse_line(&line, lineno)?;
            if format.accepts(freq) {
                stats.words += add_token(index, word);
            }
        }
    }
    Ok(stats)
}

/// Tokens that normalize to nothing (no a-z characters at all) are skipped,
/// so out-of-alphabet input never reaches the trie.
fn add_token<X: Index>(index: &mut X, token: &str) -> usize {
    let word = normalize(token);
    if word.is_empty() {
        return 0;
    }
    index.add(&word);
    1
}
