use criterion::{criterion_group, criterion_main, Criterion};
use lookup::wordlist::trie::Trie;

/// Every word of the given length over `letters`, as a deterministic
/// stand-in for a wordlist file.
fn all_words(len: usize, letters: &[char]) -> Vec<String> {
    if len == 0 {
        return vec![String::new()];
    }
    all_words(len - 1, letters)
        .iter()
        .flat_map(|prefix| letters.iter().map(move |&c| {
            let mut word = prefix.clone();
            word.push(c);
            word
        }))
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let letters = "aeinorst".chars().collect::<Vec<_>>();
    let words = all_words(4, &letters);

    c.bench_function("build", |b| b.iter(|| {
        let mut trie = Trie::new();
        trie.add_all(words.iter().map(|x| x.as_str()));
        trie
    }));

    let mut trie = Trie::new();
    trie.add_all(words.iter().map(|x| x.as_str()));

    c.bench_function("contains hit", |b| b.iter(|| trie.contains("rose")));
    c.bench_function("contains miss", |b| b.iter(|| trie.contains("zzzz")));
    c.bench_function("contains_prefix", |b| b.iter(|| trie.contains_prefix("st")));

    {
        let mut group = c.benchmark_group("enumerate");
        group.bench_function("all", |b| b.iter(|| trie.words().count()));
        group.bench_function("prefix", |b| b.iter(|| trie.words_with_prefix("st").count()));
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
