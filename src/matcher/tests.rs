use super::*;
use crate::annotation::{AnnotatedToken, Annotation, Token};
use crate::ged::compare_graphs;

fn chain(words: &[(&str, Vec<f32>)]) -> DependencyGraph {
    let tokens = words
        .iter()
        .enumerate()
        .map(|(i, (text, vector))| AnnotatedToken {
            token: Token::new(*text).with_vector(vector.clone()),
            head: i.checked_sub(1),
            dep: if i == 0 { "ROOT" } else { "dep" }.to_string(),
        })
        .collect();
    DependencyGraph::from_annotation(&Annotation {
        text: String::new(),
        tokens,
    })
    .unwrap()
}

/// "a b c" against "a b d", where d is 0.866-similar to c.
fn pair() -> (DependencyGraph, DependencyGraph) {
    let left = chain(&[
        ("a", vec![1.0, 0.0, 0.0]),
        ("b", vec![0.0, 1.0, 0.0]),
        ("c", vec![0.0, 0.0, 1.0]),
    ]);
    let right = chain(&[
        ("a", vec![1.0, 0.0, 0.0]),
        ("b", vec![0.0, 1.0, 0.0]),
        ("d", vec![0.0, 0.5, 0.866_025_4]),
    ]);
    (left, right)
}

#[test]
fn test_alignment_similarity_rules() {
    let root = DependencyNode {
        id: 0,
        label: "ROOT".to_string(),
        token: None,
    };
    let bare = |text: &str| DependencyNode {
        id: 1,
        label: text.to_string(),
        token: Some(Token::new(text)),
    };

    assert_eq!(alignment_similarity(&root, &root), 1.0);
    assert_eq!(alignment_similarity(&root, &bare("ROOT")), 0.0);
    assert_eq!(alignment_similarity(&bare("x"), &bare("x")), 1.0);
    assert_eq!(alignment_similarity(&bare("x"), &bare("y")), 0.0);
}

#[test]
fn test_matches_filtered_by_threshold() {
    let (left, right) = pair();
    let mut matcher = HungarianNodeMatcher::new(&left, &right, 0.8).unwrap();

    assert_eq!(matcher.match_count(), 4);
    assert_eq!(matcher.assignment().pairs(), &[(0, 0), (1, 1), (2, 2), (3, 3)]);

    matcher.set_threshold(0.9);
    assert_eq!(matcher.threshold(), 0.9);
    assert_eq!(
        matcher.matches().iter().map(|(&l, &r)| (l, r)).collect::<Vec<_>>(),
        vec![(0, 0), (1, 1), (2, 2)]
    );
}

#[test]
fn test_raising_threshold_never_adds_matches() {
    let (left, right) = pair();
    let mut matcher = HungarianNodeMatcher::new(&left, &right, 0.0).unwrap();
    let assignment = matcher.assignment().clone();

    let mut previous = matcher.match_count();
    for t in [0.5, 0.8, 0.85, 0.9, 0.95, 1.0] {
        matcher.set_threshold(t);
        assert!(matcher.match_count() <= previous);
        previous = matcher.match_count();
    }
    assert_eq!(matcher.match_count(), 0);
    assert_eq!(matcher.assignment(), &assignment);
}

#[test]
fn test_converted_graphs_share_matched_labels() {
    let (left, right) = pair();
    let matcher = HungarianNodeMatcher::new(&left, &right, 0.9).unwrap();
    let (g1, g2) = matcher.get_converted_graphs();

    assert_eq!(g1.len(), 4);
    assert_eq!(g2.len(), 4);
    assert!(g1.id_of(&NodeLabel::Matched { left: 2, right: 2 }).is_some());
    assert!(g2.id_of(&NodeLabel::Matched { left: 2, right: 2 }).is_some());
    assert!(
        g1.id_of(&NodeLabel::Unmatched {
            side: Side::Left,
            id: 3
        })
        .is_some()
    );
    assert!(
        g2.id_of(&NodeLabel::Unmatched {
            side: Side::Left,
            id: 3
        })
        .is_none()
    );

    // Matched nodes substitute for free except for the one differing edge at
    // node 2 (0.25); the unmatched pair relabels with half its edges differing.
    assert!((compare_graphs(&g1, &g2, false).unwrap() - 1.75).abs() < 1e-9);
}

#[test]
fn test_fully_matched_graphs_have_zero_distance() {
    let (left, right) = pair();
    let matcher = HungarianNodeMatcher::new(&left, &right, 0.8).unwrap();
    let (g1, g2) = matcher.get_converted_graphs();
    assert_eq!(compare_graphs(&g1, &g2, true).unwrap(), 0.0);
}

#[test]
fn test_root_only_graph() {
    let (_, right) = pair();
    let empty = DependencyGraph::from_annotation(&Annotation::default()).unwrap();
    let matcher = HungarianNodeMatcher::new(&empty, &right, 0.9).unwrap();

    // Only the two ROOTs can align.
    assert_eq!(matcher.matches().get(&0), Some(&0));
    assert_eq!(matcher.match_count(), 1);

    let (g1, g2) = matcher.get_converted_graphs();
    assert!(g1.is_empty());
    assert_eq!(g2.len(), 4);
}

#[test]
fn test_node_label_display() {
    assert_eq!(
        NodeLabel::Unmatched {
            side: Side::Left,
            id: 3
        }
        .to_string(),
        "G1_3"
    );
    assert_eq!(
        NodeLabel::Unmatched {
            side: Side::Right,
            id: 0
        }
        .to_string(),
        "G2_0"
    );
    assert_eq!(
        NodeLabel::Matched { left: 1, right: 2 }.to_string(),
        "G1_1_G2_2"
    );
}
