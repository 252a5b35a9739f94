use std::io;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use structopt::StructOpt;

use lookup::alphabet::normalize;
use lookup::wordlist::wordlist::{FileFormat, Wordlist};

/// Build a word trie from standard input (or a file), then look up a word
/// or prefix, or dump every word in ascending order.
#[derive(StructOpt)]
#[structopt(name = "lookup")]
struct Cli {
    /// Read words from this file instead of standard input
    #[structopt(short, long, parse(from_os_str))]
    file: Option<PathBuf>,

    /// Column delimiter for files with one word per line
    #[structopt(long)]
    delimiter: Option<char>,

    /// Column holding the word (with --delimiter)
    #[structopt(long)]
    word_column: Option<usize>,

    /// Column holding the word frequency (with --delimiter)
    #[structopt(long)]
    freq_column: Option<usize>,

    /// Skip words whose frequency is below this value
    #[structopt(long)]
    min_freq: Option<isize>,

    #[structopt(subcommand)]
    mode: Option<Mode>,
}

#[derive(StructOpt)]
enum Mode {
    /// Print all words with the given prefix
    P { prefix: String },
    /// Check if the prefix is in the trie
    C { prefix: String },
    /// Check if the word is in the trie
    W { word: String },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let args = Cli::from_args();
    let format = FileFormat::builder()
        .delimiter(args.delimiter)
        .word_column(args.word_column)
        .freq_column(args.freq_column)
        .min_freq(args.min_freq)
        .build();

    let words = match &args.file {
        Some(path) => Wordlist::from_file(path, &format)?,
        None => Wordlist::from_reader(io::stdin().lock(), &format)?,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match args.mode {
        Some(Mode::P { prefix }) => {
            for word in words.words_with_prefix(&normalize(&prefix)) {
                writeln!(out, "{}", word)?;
            }
        }
        Some(Mode::C { prefix }) => {
            let found = words.contains_prefix(&normalize(&prefix));
            writeln!(out, "Prefix {}: {}", prefix, found as i32)?;
        }
        Some(Mode::W { word }) => {
            let found = words.contains(&normalize(&word));
            writeln!(out, "Word {}: {}", word, found as i32)?;
        }
        None => {
            for word in words.words() {
                writeln!(out, "{}", word)?;
            }
        }
    }
    out.flush()?;

    Ok(())
}
