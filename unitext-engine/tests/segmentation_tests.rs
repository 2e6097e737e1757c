//! Boundary engine behaviour over real ICU4X data

use proptest::prelude::*;
use unitext_engine::segment::{
    boundaries, graphemes, line_breaks, lines, sentences, words, words_with,
};
use unitext_engine::*;

#[test]
fn test_flag_is_one_grapheme() {
    assert_eq!(graphemes("🇨🇦", "en").unwrap(), ["🇨🇦"]);
}

#[test]
fn test_combining_sequence_matches_precomposed_count() {
    let decomposed = graphemes("e\u{0301}", "en").unwrap();
    let precomposed = graphemes("\u{00E9}", "en").unwrap();
    assert_eq!(decomposed, ["e\u{0301}"]);
    assert_eq!(decomposed.len(), precomposed.len());
}

#[test]
fn test_zwj_sequence_is_one_grapheme() {
    let family = "👨\u{200D}👩\u{200D}👧";
    assert_eq!(graphemes(family, "en").unwrap(), [family]);
}

#[test]
fn test_astral_boundaries_are_byte_offsets() {
    let text = "a😀b";
    let set = boundaries(BoundaryKind::Grapheme, text, "en").unwrap();
    assert_eq!(set.as_slice(), &[0, 1, 5, 6]);
    assert_eq!(graphemes(text, "en").unwrap(), ["a", "😀", "b"]);
}

#[test]
fn test_words_skip_punctuation_and_whitespace() {
    assert_eq!(words("Hello, world!", "en").unwrap(), ["Hello", "world"]);
}

#[test]
fn test_words_keep_punctuation_when_asked() {
    let filter = TokenFilter {
        skip_whitespace: true,
        skip_punctuation: false,
    };
    assert_eq!(
        words_with("Hello, world!", "en", filter).unwrap(),
        ["Hello", ",", "world", "!"]
    );
}

#[test]
fn test_unfiltered_words_cover_text() {
    let tokens = words_with("Hello, world!", "en", TokenFilter::NONE).unwrap();
    assert_eq!(tokens, ["Hello", ",", " ", "world", "!"]);
}

#[test]
fn test_three_sentences_keep_terminators() {
    let text = "Hello world. How are you? I'm fine!";
    let result = sentences(text, "en-US").unwrap();
    assert_eq!(result, ["Hello world. ", "How are you? ", "I'm fine!"]);
}

#[test]
fn test_line_breaks_are_interior() {
    assert_eq!(line_breaks("Hello world", "en").unwrap(), vec![6]);
    assert_eq!(lines("Hello world", "en").unwrap(), ["Hello ", "world"]);
    assert!(line_breaks("", "en").unwrap().is_empty());
}

#[test]
fn test_word_boundaries() {
    let set = boundaries(BoundaryKind::Word, "Hello world", "en").unwrap();
    assert_eq!(set.as_slice(), &[0, 5, 6, 11]);
}

#[test]
fn test_empty_text() {
    for kind in BoundaryKind::ALL {
        let mut iter = BoundaryIterator::new(kind, "en").unwrap();
        assert_eq!(iter.segments("").count(), 0);
        assert_eq!(iter.boundaries("").unwrap().as_slice(), &[0]);
    }
}

#[test]
fn test_empty_locale_uses_root() {
    let iter = BoundaryIterator::new(BoundaryKind::Sentence, "").unwrap();
    assert!(iter.locale().is_root());
    assert_eq!(sentences("One. Two.", "").unwrap(), ["One. ", "Two."]);
}

#[test]
fn test_invalid_locale_is_configuration_error() {
    let err = BoundaryIterator::new(BoundaryKind::Word, "!!").unwrap_err();
    assert!(matches!(err, EngineError::Configuration(_)));
}

#[test]
fn test_iterator_lifecycle() {
    let mut iter = BoundaryIterator::new(BoundaryKind::Word, "en").unwrap();
    assert_eq!(iter.state(), IteratorState::Uninitialized);

    iter.set_text("one two");
    assert_eq!(iter.state(), IteratorState::TextBound);

    {
        let mut segments = iter.segments("one two");
        assert_eq!(segments.next(), Some("one"));
    }
    assert_eq!(iter.state(), IteratorState::TextBound);

    assert_eq!(iter.segments("three four").count(), 3);
    assert_eq!(iter.state(), IteratorState::Exhausted);

    // rebinding restarts the walk
    assert_eq!(iter.segments("five").collect::<Vec<_>>(), ["five"]);
}

#[test]
fn test_segments_with_offsets() {
    let mut iter = BoundaryIterator::new(BoundaryKind::Word, "en").unwrap();
    let text = "día uno";
    let positioned: Vec<_> = iter.segments_with_offsets(text).collect();
    assert_eq!(
        positioned,
        vec![(0..4, "día"), (4..5, " "), (5..8, "uno")]
    );
    for (range, segment) in positioned {
        assert_eq!(&text[range], segment);
    }
}

#[test]
fn test_segment_walk_matches_boundaries_on_surrogate_pairs() {
    let text = "👍🏽 a\u{1F600}b. 𝒳y é\u{0301}!";
    for kind in BoundaryKind::ALL {
        let mut iter = BoundaryIterator::new(kind, "en").unwrap();
        let expected = iter.boundaries(text).unwrap();

        let mut edges = vec![0usize];
        edges.extend(iter.segments_with_offsets(text).map(|(range, _)| range.end));
        assert_eq!(iter.state(), IteratorState::Exhausted);
        assert_eq!(edges.as_slice(), expected.as_slice(), "kind {kind}");
    }
}

#[test]
fn test_typed_segmenters_reuse_engine() {
    let locale = Locale::new("en").unwrap();
    let mut words = locale
        .get_word_segmenter()
        .skip_whitespace(true)
        .skip_punctuation(true);
    assert_eq!(words.segment_list("Hi, there").unwrap(), ["Hi", "there"]);
    assert_eq!(words.segment_list("a b").unwrap(), ["a", "b"]);
    // filters never change boundaries
    assert_eq!(
        words.boundaries("Hi, there").unwrap().as_slice(),
        &[0, 2, 3, 4, 9]
    );

    let mut sentences = locale.get_sentence_segmenter();
    assert_eq!(sentences.segment_list("A. B.").unwrap().len(), 2);

    let mut graphemes = locale.get_grapheme_segmenter();
    assert_eq!(graphemes.segment("abc").unwrap().count(), 3);

    let mut lines = locale.get_line_segmenter();
    assert_eq!(lines.line_breaks("a b").unwrap(), vec![2]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_segments_reconstruct_text(text in "\\PC{0,30}") {
        for kind in BoundaryKind::ALL {
            let mut iter = BoundaryIterator::new(kind, "en").unwrap();
            let joined: String = iter.segments(&text).collect();
            prop_assert_eq!(&joined, &text);
        }
    }

    #[test]
    fn prop_boundaries_align_with_segments(text in "\\PC{0,30}") {
        for kind in BoundaryKind::ALL {
            let mut iter = BoundaryIterator::new(kind, "en").unwrap();
            let set = iter.boundaries(&text).unwrap();
            prop_assert!(set.contains(0));
            prop_assert!(set.contains(text.len()));
            for offset in set.iter() {
                prop_assert!(text.is_char_boundary(offset));
            }

            let mut edges = vec![0usize];
            for (range, _) in iter.segments_with_offsets(&text) {
                edges.push(range.end);
            }
            if text.is_empty() {
                edges.truncate(1);
            }
            prop_assert_eq!(set.as_slice(), edges.as_slice());
        }
    }
}
