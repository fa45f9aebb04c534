use wordtrie::trie::{Trie, TrieAtom, TrieString, TrieValue};
use wordtrie::words::longest_common_prefix;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use rand::{distributions::Alphanumeric, thread_rng, Rng};

static POPULATION_SIZE: usize = 10000;

fn random_word(size: usize) -> Vec<char> {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(thread_rng().gen_range(1..=size))
        .map(char::from)
        .collect()
}

fn get_words(size: usize) -> Vec<Vec<char>> {
    (0..POPULATION_SIZE).map(|_| random_word(size)).collect()
}

fn make_trie(words: &[Vec<char>]) -> TrieString<usize> {
    let mut trie = Trie::new();
    for w in words {
        let len = w.len();
        trie.put(w.iter().copied(), Some(len)).unwrap();
    }
    trie
}

fn trie_put(c: &mut Criterion) {
    let words = get_words(16);
    c.bench_function("trie put", |b| b.iter(|| make_trie(&words)));
}

fn trie_get(c: &mut Criterion) {
    let words = get_words(16);
    let trie = make_trie(&words);
    c.bench_function("trie get", |b| {
        b.iter(|| {
            words
                .iter()
                .map(|w| trie.get(w.iter().copied()).unwrap())
                .collect::<Vec<Option<&usize>>>()
        })
    });
}

fn trie_put_delete(c: &mut Criterion) {
    let words = get_words(16);
    c.bench_function("trie delete", |b| {
        b.iter_batched(
            || make_trie(&words),
            |mut trie| {
                for w in &words {
                    trie.delete(w.iter().copied()).unwrap();
                }
            },
            BatchSize::SmallInput,
        );
    });
}

fn trie_lcp(c: &mut Criterion) {
    let words: Vec<String> = (0..1000).map(|i| format!("interstellar{}", i)).collect();
    c.bench_function("longest common prefix", |b| {
        b.iter(|| longest_common_prefix::<_, _, _, String>(words.iter().map(|w| w.chars())).unwrap())
    });
}

fn search(c: &mut Criterion) {
    static BASE_SIZE: usize = 16;

    let mut group = c.benchmark_group("search");
    for size in [BASE_SIZE, 4 * BASE_SIZE, 16 * BASE_SIZE, 64 * BASE_SIZE].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let words = get_words(*size);
        let trie = make_trie(&words);
        group.bench_with_input(
            BenchmarkId::new("random longest prefix (char)", size),
            size,
            |b, &size| {
                b.iter_batched(
                    || random_word(size),
                    |input| longest_prefix_trie(&trie, input),
                    BatchSize::SmallInput,
                )
            },
        );
        group.bench_with_input(
            BenchmarkId::new("always find (char)", size),
            size,
            |b, _| {
                b.iter_batched(
                    || words[thread_rng().gen_range(0..POPULATION_SIZE)].clone(),
                    |input| contains_trie(&trie, input),
                    BatchSize::SmallInput,
                )
            },
        );
        group.bench_with_input(
            BenchmarkId::new("keys with prefix (char)", size),
            size,
            |b, _| {
                b.iter_batched(
                    || random_word(2),
                    |input| {
                        trie.keys_with_prefix::<_, String>(input)
                            .map(|keys| keys.len())
                            .unwrap_or(0)
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

fn iterate(c: &mut Criterion) {
    let trie = make_trie(&get_words(64));
    c.bench_function("reference iteration (char)", |b| b.iter(|| iterate_trie_ref(&trie)));
    c.bench_function("consuming iteration (char)", |b| {
        b.iter_batched(|| trie.clone(), iterate_trie, BatchSize::SmallInput)
    });
}

criterion_group!(
    benches,
    trie_put,
    trie_get,
    trie_put_delete,
    trie_lcp,
    search,
    iterate
);
criterion_main!(benches);

fn contains_trie<S: IntoIterator<Item = A>, A: TrieAtom, V: TrieValue>(trie: &Trie<A, V>, input: S) {
    let _ = trie.contains(input);
}

fn longest_prefix_trie<S: IntoIterator<Item = A>, A: TrieAtom, V: TrieValue>(
    trie: &Trie<A, V>,
    input: S,
) {
    let _ = trie.longest_prefix_of::<_, Vec<A>>(input);
}

fn iterate_trie<A: TrieAtom, V: TrieValue>(trie: Trie<A, V>) {
    trie.into_iter().for_each(|_x| ());
}

fn iterate_trie_ref<A: TrieAtom, V: TrieValue>(trie: &Trie<A, V>) {
    trie.iter().for_each(|_x| ());
}
