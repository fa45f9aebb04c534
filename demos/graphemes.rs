use unicode_segmentation::UnicodeSegmentation;
use wordtrie::error::TrieError;
use wordtrie::trie::Trie;

fn main() -> Result<(), TrieError> {
    env_logger::init();

    // Create our trie
    let mut trie = Trie::new();

    // Store some graphemes
    let s = "a̐éö̲\r\n";
    let input = s.graphemes(true);
    let count = input.clone().count();
    trie.put(input.clone(), Some(count))?;
    assert!(trie.contains(input.clone())?);
    assert_eq!(trie.get(input.clone())?, Some(&count));

    // A query extending the stored key finds it as its longest prefix
    let query = "a̐éö̲\r\nmore";
    let longest: String = trie.longest_prefix_of(query.graphemes(true))?;
    assert_eq!(longest, s);
    println!("longest stored prefix of {:?}: {:?}", query, longest);

    assert!(trie.delete(input)?);
    assert!(trie.is_empty());
    Ok(())
}
