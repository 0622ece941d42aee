use catlink_core::config::MatchingConfig;
use catlink_core::types::{NameParts, SearchResult};
use catlink_match::{
    decide, distance, filter_candidates, is_citation_like, similarity, ExactQuery, NameQuery, SubjectQuery,
    EXACT_TIERS, NAME_TIERS, SUBJECT_TIERS,
};

fn results(items: &[(&str, &str)]) -> Vec<SearchResult> {
    items.iter().map(|(t, s)| SearchResult::new(*t, *s)).collect()
}

fn name(last: &str, first: &str) -> NameQuery {
    NameQuery::new(&NameParts { last_name: last.to_string(), first_and_middle_names: first.to_string() })
}

fn decide_name(q: &NameQuery, candidates: &[SearchResult]) -> Option<(&'static str, String)> {
    decide(&NAME_TIERS, q, candidates, &MatchingConfig::default()).map(|m| (m.tier, m.title))
}

fn decide_subject(term: &str, candidates: &[SearchResult]) -> Option<(&'static str, String)> {
    decide(&SUBJECT_TIERS, &SubjectQuery::new(term), candidates, &MatchingConfig::default()).map(|m| (m.tier, m.title))
}

#[test]
fn distance_is_symmetric_and_zero_on_identity() {
    let samples = ["", "a", "kitten", "sitting", "Curie", "curie", "Skłodowska"];
    for a in samples {
        assert_eq!(distance(a, a), 0);
        assert_eq!(distance("", a), a.chars().count());
        for b in samples {
            assert_eq!(distance(a, b), distance(b, a), "distance({a:?}, {b:?})");
        }
    }
    assert_eq!(distance("kitten", "sitting"), 3);
}

#[test]
fn similarity_bounds_and_monotonicity() {
    assert_eq!(similarity("abcd", "abcd"), 100.0);
    assert_eq!(similarity("abcd", "abcx"), 75.0);
    assert_eq!(similarity("abcd", "abxx"), 50.0);
    assert_eq!(similarity("", ""), 100.0);
    assert!(similarity("Curie", "curie") < 100.0, "comparison is case-sensitive");
    for (a, b) in [("kitten", "sitting"), ("", "x"), ("world war", "World War II")] {
        let s = similarity(a, b);
        assert!((0.0..=100.0).contains(&s), "{a:?}/{b:?} -> {s}");
    }
}

#[test]
fn citation_snippets_are_recognised() {
    assert!(is_citation_like("Smith, J. (2001). Physics. ISBN 978-0-00-000000-0"));
    assert!(is_citation_like("Retrieved 12 March 2019"));
    assert!(is_citation_like("see pp. 12–14"));
    assert!(is_citation_like("{{cite book |title=Curie}}"));
    assert!(is_citation_like(r#"author=<span class="searchmatch">Curie</span>}}"#));
    assert!(is_citation_like("Warsaw: Polish Academy (1967)."));
    assert!(is_citation_like("Annals of Physics, Vol. 12"));
    assert!(is_citation_like("Revised second edition with notes"));
    assert!(is_citation_like("Publisher: Gauthier-Villars"));
    assert!(!is_citation_like("Maria Salomea Skłodowska-Curie was a Polish and naturalised-French physicist"));
    assert!(!is_citation_like("A group. Another sentence."));
}

#[test]
fn filter_drops_citations_but_never_empties() {
    let mixed = results(&[
        ("Radioactivity (book)", "Curie, M. Radioactivity. ISBN 978-2-00-000000-1"),
        ("Marie Curie", "Polish and naturalised-French physicist"),
    ]);
    let kept = filter_candidates(&mixed);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].title, "Marie Curie");

    let all_citations = results(&[("A", "ISBN 1"), ("B", "Retrieved 2020")]);
    assert_eq!(filter_candidates(&all_citations), all_citations);
}

#[test]
fn name_tier_full_name_in_title() {
    let q = name("Curie", "Marie");
    let c = results(&[("Marie Curie", "Maria Salomea Skłodowska-Curie...")]);
    assert_eq!(decide_name(&q, &c), Some(("title_full_name", "Marie Curie".to_string())));
}

#[test]
fn name_tier_initials() {
    let q = name("Tolkien", "J.R.R.");
    let c = results(&[("J. R. R. Tolkien", "English writer and philologist")]);
    assert_eq!(decide_name(&q, &c), Some(("title_initials", "J. R. R. Tolkien".to_string())));
}

#[test]
fn name_tier_initials_needs_enough_title_words() {
    let q = name("Tolkien", "J.R.R.");
    let c = results(&[("J. Tolkien (disambiguation)", "a list of people with this surname")]);
    assert_eq!(decide_name(&q, &c), None);
}

#[test]
fn hyphenated_given_name_matches_snippet_tokens() {
    let q = name("Sartre", "Jean-Paul");
    assert_eq!(q.parts(), ["sartre", "jean", "paul"]);
    let c = results(&[("Existentialism (Sartre)", "Jean-Paul Sartre was a French philosopher")]);
    assert_eq!(decide_name(&q, &c), Some(("snippet_proximity", "Existentialism (Sartre)".to_string())));
}

#[test]
fn hyphenated_given_name_matches_as_substrings() {
    let q = name("Sartre", "Jean-Paul");
    let c = results(&[(
        "Sartre (surname)",
        "Jean-Paul was the given name of many people; among the writers of that generation the best known bore the surname Sartre",
    )]);
    assert_eq!(decide_name(&q, &c), Some(("snippet_contains_parts", "Sartre (surname)".to_string())));
}

#[test]
fn hyphenated_last_name_matches_snippet_tokens() {
    let q = name("Skłodowska-Curie", "Marie");
    assert_eq!(q.parts(), ["skłodowska", "curie", "marie"]);
    let c = results(&[("Curie family", "Marie Skłodowska-Curie was a physicist and chemist")]);
    assert_eq!(decide_name(&q, &c), Some(("snippet_proximity", "Curie family".to_string())));

    let q = name("Lloyd George", "David");
    assert_eq!(q.parts(), ["lloyd", "george", "david"]);
    let c = results(&[("David Lloyd George", "Prime Minister of the United Kingdom")]);
    assert_eq!(decide_name(&q, &c), Some(("title_full_name", "David Lloyd George".to_string())));
    let c = results(&[("Prime Minister (George)", "led by David Lloyd George from 1916")]);
    assert_eq!(decide_name(&q, &c), Some(("snippet_proximity", "Prime Minister (George)".to_string())));
}

#[test]
fn name_tier_snippet_proximity() {
    let q = name("Lovelace", "Ada");
    let c = results(&[(
        "Countess of Lovelace",
        r#"Augusta <span class="searchmatch">Ada</span> King, Countess of <span class="searchmatch">Lovelace</span> was an English mathematician"#,
    )]);
    assert_eq!(decide_name(&q, &c), Some(("snippet_proximity", "Countess of Lovelace".to_string())));
}

#[test]
fn name_tier_fuzzy_proximity_tolerates_misspelling() {
    let q = name("Lovelace", "Ada");
    let c = results(&[("Countess of Lovelace", "Augusta Ada King, Countess of Lovelase, mathematician")]);
    assert_eq!(decide_name(&q, &c), Some(("snippet_fuzzy_proximity", "Countess of Lovelace".to_string())));
}

#[test]
fn name_falls_through_to_substring_when_parts_are_far_apart() {
    let q = name("Lovelace", "Ada");
    let c = results(&[(
        "Countess of Lovelace",
        "Ada was born in London and later studied mathematics with Mary Somerville before becoming Lovelace",
    )]);
    assert_eq!(decide_name(&q, &c), Some(("snippet_contains_parts", "Countess of Lovelace".to_string())));
}

#[test]
fn name_tier_fuzzy_parts_as_last_resort() {
    let q = name("Lovelace", "Ada");
    let c = results(&[(
        "Lovelase (surname)",
        "Ada appears here and then many unrelated words follow until the surname Lovelase",
    )]);
    assert_eq!(decide_name(&q, &c), Some(("snippet_fuzzy_parts", "Lovelase (surname)".to_string())));
}

#[test]
fn name_proximity_requires_a_part_in_the_title() {
    let q = name("Lovelace", "Ada");
    let c = results(&[("Analytical Engine", "designed by Babbage; Ada Lovelace wrote notes")]);
    assert_eq!(decide_name(&q, &c), None);
}

#[test]
fn exact_tier_requires_identical_title() {
    let c = results(&[("1945 in film", "films released"), ("1945", "year")]);
    let m = decide(&EXACT_TIERS, &ExactQuery::new("1945"), &c, &MatchingConfig::default()).expect("match");
    assert_eq!(m.title, "1945");

    let c = results(&[("Emperor of the French (title)", "title held by Napoleon")]);
    assert!(decide(&EXACT_TIERS, &ExactQuery::new("Emperor of the French"), &c, &MatchingConfig::default()).is_none());
}

#[test]
fn subject_tiers_in_order() {
    let c = results(&[("World War II", ""), ("World war", "")]);
    assert_eq!(decide_subject("World War", &c), Some(("title_equals_ignore_case", "World war".to_string())));

    let c = results(&[("Photography", ""), ("Photographer", "")]);
    assert_eq!(decide_subject("Photographers", &c), Some(("title_similar", "Photographer".to_string())));

    let c = results(&[("Jazz music", "")]);
    assert_eq!(decide_subject("Jazz", &c), Some(("title_contains_query", "Jazz music".to_string())));

    let c = results(&[("Bird", "")]);
    assert_eq!(decide_subject("Birds of prey", &c), Some(("query_contains_title", "Bird".to_string())));

    let c = results(&[("Labour union", "")]);
    assert_eq!(decide_subject("Labor unions", &c), Some(("first_title_loosely_similar", "Labour union".to_string())));

    let c = results(&[("Dogs", "")]);
    assert_eq!(decide_subject("Cats", &c), None);
}

#[test]
fn thresholds_are_overridable() {
    let strict = MatchingConfig { subject_fallback_similarity: 95.0, ..MatchingConfig::default() };
    let c = results(&[("Labour union", "")]);
    assert!(decide(&SUBJECT_TIERS, &SubjectQuery::new("Labor unions"), &c, &strict).is_none());
}

#[test]
fn empty_candidate_list_never_matches() {
    assert_eq!(decide_subject("anything", &[]), None);
    assert_eq!(decide_name(&name("Curie", "Marie"), &[]), None);
}
