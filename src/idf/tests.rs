use super::*;

fn table() -> IdfTable {
    IdfTable::fit(["The cat sat", "the dog sat.", "The cat sat"]).unwrap()
}

fn content_word(text: &str) -> Token {
    Token {
        is_alpha: true,
        ..Token::new(text)
    }
}

#[test]
fn test_corpus_is_deduplicated() {
    let idf = table();
    assert_eq!(idf.corpus_len(), 2);
    assert_eq!(idf.vocabulary_len(), 4);
}

#[test]
fn test_smoothed_weights() {
    let idf = table();
    assert!((idf.word_idf("the") - 1.0).abs() < 1e-12);
    assert!((idf.word_idf("sat") - 1.0).abs() < 1e-12);
    assert!((idf.word_idf("cat") - ((3.0f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
}

#[test]
fn test_capitalized_lookup_is_unseen() {
    let idf = table();
    let unseen = 3.0f64.ln() + 1.0;

    // "The" was fitted lowercased, so only the lowercase form is known.
    assert!((idf.word_idf("the") - 1.0).abs() < 1e-12);
    assert!((idf.word_idf("The") - unseen).abs() < 1e-12);
    assert!((idf.token_idf(&content_word("Cat")) - unseen).abs() < 1e-12);
}

#[test]
fn test_unseen_and_single_char_words() {
    let idf = table();
    let unseen = 3.0f64.ln() + 1.0;
    assert!((idf.word_idf("zebra") - unseen).abs() < 1e-12);
    // Single characters are never part of the vocabulary.
    let idf = IdfTable::fit(["a b c"]).unwrap();
    assert_eq!(idf.vocabulary_len(), 0);
    assert!((idf.word_idf("a") - (2.0f64.ln() + 1.0)).abs() < 1e-12);
}

#[test]
fn test_token_idf_only_weights_content_words() {
    let idf = table();

    assert_eq!(idf.token_idf(&content_word("cat")), idf.word_idf("cat"));
    assert_eq!(idf.token_idf(&Token::new("cat")), 1.0);
    assert_eq!(
        idf.token_idf(&Token {
            is_stop: true,
            ..content_word("the")
        }),
        1.0
    );
    assert_eq!(
        idf.token_idf(&Token {
            like_num: true,
            ..content_word("ten")
        }),
        1.0
    );
}

#[test]
fn test_empty_corpus() {
    let idf = IdfTable::fit(Vec::<String>::new()).unwrap();
    assert_eq!(idf.corpus_len(), 0);
    assert_eq!(idf.word_idf("anything"), 1.0);
}

#[test]
fn test_from_pairs_uses_both_sides() {
    let pairs = vec![
        SentencePair::new(true, "1", "2", "alpha beta", "gamma"),
        SentencePair::new(false, "3", "4", "gamma", "delta epsilon"),
    ];
    let idf = IdfTable::from_pairs(&pairs).unwrap();
    assert_eq!(idf.corpus_len(), 3);
    assert!((idf.word_idf("gamma") - ((4.0f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
}
