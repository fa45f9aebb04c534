use log::info;
use wordtrie::error::TrieError;
use wordtrie::trie::TrieString;
use wordtrie::words::longest_common_prefix;

fn main() -> Result<(), TrieError> {
    env_logger::init();

    // Store some words with their position as value
    let mut trie = TrieString::new();
    let words = ["apple", "application", "banana", "cat"];
    for (i, word) in words.iter().enumerate() {
        trie.put(word.chars(), Some(i))?;
    }
    info!("stored {} words", trie.size());

    // Count the words ending with a suffix
    for suffix in ["e", "ion", "a", "at"] {
        println!(
            "words ending with {:?}: {}",
            suffix,
            trie.count_words_with_suffix(suffix.chars())
        );
    }

    // Check for prefixes
    for prefix in ["app", "bat", "ban", "ca"] {
        println!("has prefix {:?}: {}", prefix, trie.has_prefix(prefix.chars())?);
    }

    // Find the longest common prefix of some word lists
    let lists: [&[&str]; 4] = [
        &["flower", "flow", "flight"],
        &["interspecies", "interstellar", "interstate"],
        &["dog", "racecar", "car"],
        &[],
    ];
    for list in lists {
        let prefix: String = longest_common_prefix(list.iter().map(|w| w.chars()))?;
        println!("longest common prefix of {:?}: {:?}", list, prefix);
    }
    Ok(())
}
