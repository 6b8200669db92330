mod common;

use sitekeyword_analyzer::{AnalysisResult, Analyzer, KeywordWithScore};
use sitekeyword_config::AnalyzerConfig;
use std::collections::HashSet;

fn analyze(html: &str) -> Analyzer {
    common::init_test_tracing();
    Analyzer::from_html("https://example.test/", html, AnalyzerConfig::default())
}

fn score_of(keywords: &[KeywordWithScore], word: &str) -> Option<u64> {
    keywords.iter().find(|k| k.keyword == word).map(|k| k.score)
}

#[test]
fn title_and_meta_keywords_are_scored() {
    let analyzer = analyze(
        r#"<html><head><title>Go Test</title>
        <meta name="keywords" content="go, test, code"></head><body></body></html>"#,
    );
    let identity = |w: &str| w.to_string();
    let top = analyzer
        .top_keywords(3, &HashSet::new(), &identity)
        .expect("keywords");

    assert_eq!(
        top,
        vec![
            KeywordWithScore::new("go", 10),
            KeywordWithScore::new("test", 10),
            KeywordWithScore::new("code", 5),
        ]
    );
}

#[test]
fn japanese_title_and_heading_are_segmented() {
    let analyzer = analyze("<title>日本語 テスト</title><body><h1>日本語 テスト</h1></body>");
    let top = analyzer.top_keywords_auto(5).expect("keywords");

    assert_eq!(
        top,
        vec![
            KeywordWithScore::new("テスト", 8),
            KeywordWithScore::new("日本語", 8),
        ]
    );
}

#[test]
fn empty_page_yields_empty_result_not_error() {
    let result = analyze("<html><head></head><body><p>nothing here</p></body></html>")
        .analysis_result(10)
        .expect("empty analysis is not an error");

    assert_eq!(result, AnalysisResult::default());
    assert!(result.is_empty());
}

#[test]
fn headings_count_every_occurrence() {
    let analyzer = analyze("<h1>rust rust</h1><h2>cargo</h2><h3></h3><h3>clippy</h3>");
    let top = analyzer.top_keywords_auto(0).expect("keywords");

    assert_eq!(score_of(&top, "rust"), Some(6));
    assert_eq!(score_of(&top, "cargo"), Some(3));
    assert_eq!(score_of(&top, "clippy"), Some(3));
}

#[test]
fn longer_open_graph_description_is_preferred() {
    let analyzer = analyze(
        r#"<meta name="description" content="short">
        <meta property="og:description" content="detailed overview">"#,
    );
    let top = analyzer.top_keywords_auto(10).expect("keywords");

    assert_eq!(score_of(&top, "detailed"), Some(3));
    assert_eq!(score_of(&top, "overview"), Some(3));
    assert_eq!(score_of(&top, "short"), None);
}

#[test]
fn plural_folding_keeps_the_longest_spelling() {
    let analyzer = analyze(r#"<title>Tests</title><meta name="keywords" content="test">"#);
    let top = analyzer.top_keywords_auto(1).expect("keywords");

    assert_eq!(top, vec![KeywordWithScore::new("tests", 10)]);
}

#[test]
fn stop_words_and_short_tokens_are_dropped() {
    let analyzer = analyze("<title>The art of a - program</title>");
    let top = analyzer.top_keywords_auto(10).expect("keywords");
    let words: Vec<_> = top.iter().map(|k| k.keyword.as_str()).collect();

    assert_eq!(words, vec!["art", "program"]);
}

#[test]
fn requested_count_limits_output_and_zero_uses_default() {
    let words: Vec<String> = (0..30).map(|i| format!("word{i:02}")).collect();
    let html = format!("<h1>{}</h1>", words.join(" "));
    let analyzer = analyze(&html);

    assert_eq!(analyzer.top_keywords_auto(4).expect("keywords").len(), 4);
    assert_eq!(
        analyzer.top_keywords_auto(0).expect("keywords").len(),
        AnalyzerConfig::default().max_keywords
    );
}

#[test]
fn content_frequencies_count_heading_occurrences() {
    let analyzer = analyze("<title>ignored</title><h1>pages page</h1><h2>rust</h2>");
    let counts = analyzer.content_keyword_frequencies(5).expect("frequencies");

    assert_eq!(
        counts,
        vec![
            KeywordWithScore::new("pages", 6),
            KeywordWithScore::new("rust", 3),
        ]
    );
}

#[test]
fn page_data_collects_all_signals() {
    let data = analyze(r#"<title>Docs</title><meta name="author" content="ferris"><h2>Guide</h2>"#)
        .collect_page_data();

    assert_eq!(data.title, "Docs");
    assert_eq!(data.meta_tags["author"], "ferris");
    assert_eq!(data.main_content, "Guide Guide Guide ");
}

#[test]
fn result_serializes_with_camel_case_keys() {
    let result = analyze(r#"<title>Rust</title><meta name="keywords" content="rust">"#)
        .analysis_result(5)
        .expect("analysis");

    let full = serde_json::to_value(&result).expect("json");
    assert_eq!(full["title"], "Rust");
    assert_eq!(full["metaTags"]["keywords"], "rust");
    assert_eq!(full["keywords"][0]["keyword"], "rust");
    assert_eq!(full["keywords"][0]["score"], 10);

    let only = serde_json::to_value(result.keywords_only()).expect("json");
    assert_eq!(
        only,
        serde_json::json!({ "keywords": [{ "keyword": "rust", "score": 10 }] })
    );
}
