use crate::test_utils::{diamond, digraph25, graph, set, v};
use crate::{AncestorSearch, AncestralPath, Error, Vertex, VertexSet};

#[test]
fn length_and_ancestor_of_pairs() {
    let g = digraph25();
    let search = AncestorSearch::new(&g);

    let cases = [
        // (v, w, length, ancestor)
        (13, 16, 4, 3),
        (23, 24, 2, 20),
        (17, 6, 4, 2),
        (1, 2, 2, 0),
        (21, 19, 9, 0),
        (14, 7, 1, 7),
    ];

    for (a, b, length, ancestor) in cases {
        assert_eq!(search.length(v(a), v(b)).unwrap(), length, "length({a}, {b})");
        assert_eq!(
            search.ancestor(v(a), v(b)).unwrap(),
            v(ancestor),
            "ancestor({a}, {b})"
        );
    }
}

#[test]
fn vertex_is_its_own_ancestor() {
    let g = digraph25();
    let search = AncestorSearch::new(&g);

    for vertex in g.vertices() {
        assert_eq!(search.length(vertex, vertex).unwrap(), 0);
        assert_eq!(search.ancestor(vertex, vertex).unwrap(), vertex);
    }
}

#[test]
fn length_is_symmetric() {
    let g = digraph25();
    let search = AncestorSearch::new(&g);

    for a in g.vertices() {
        for b in g.vertices() {
            assert_eq!(search.length(a, b).unwrap(), search.length(b, a).unwrap());
        }
    }
}

#[test]
fn subsets_generalize_pairs() {
    let g = digraph25();
    let search = AncestorSearch::new(&g);

    for a in g.vertices() {
        for b in g.vertices() {
            let single_a = VertexSet::single(a);
            let single_b = VertexSet::single(b);
            assert_eq!(
                search.length_of_subsets(&single_a, &single_b).unwrap(),
                search.length(a, b).unwrap()
            );
            assert_eq!(
                search.ancestor_of_subsets(&single_a, &single_b).unwrap(),
                search.ancestor(a, b).unwrap()
            );
        }
    }
}

#[test]
fn reference_subset_query() {
    let g = digraph25();
    let search = AncestorSearch::new(&g);
    let a = set(&[13, 23, 24]);
    let b = set(&[16, 17, 6]);

    assert_eq!(search.length_of_subsets(&a, &b).unwrap(), 4);
    assert_eq!(search.ancestor_of_subsets(&a, &b).unwrap(), v(3));

    for _ in 0..10 {
        assert_eq!(
            search.common_ancestor(&a, &b).unwrap(),
            AncestralPath {
                ancestor: v(3),
                length: 4
            }
        );
    }
}

#[test]
fn overlapping_subsets_have_zero_length() {
    let g = digraph25();
    let search = AncestorSearch::new(&g);

    let path = search
        .common_ancestor(&set(&[4, 18, 22]), &set(&[9, 18]))
        .unwrap();
    assert_eq!(path, AncestralPath { ancestor: v(18), length: 0 });
}

#[test]
fn ancestor_is_reached_from_both_sides() {
    let g = digraph25();
    let search = AncestorSearch::new(&g);
    let a = set(&[14, 21, 11]);
    let b = set(&[24, 8]);

    let ancestor = search.ancestor_of_subsets(&a, &b).unwrap();
    assert!(search.bfs_distances(&a).unwrap().contains(ancestor));
    assert!(search.bfs_distances(&b).unwrap().contains(ancestor));
}

#[test]
fn tie_breaks_to_lowest_vertex() {
    let g = diamond();
    let search = AncestorSearch::new(&g);

    // 1 and 2 are both two hops away in total; 2 is discovered first.
    assert_eq!(search.length(v(3), v(4)).unwrap(), 2);
    assert_eq!(search.ancestor(v(3), v(4)).unwrap(), v(1));
}

#[test]
fn shortest_path_wins_over_deeper_ancestor() {
    // 4 -> 3 -> 2 -> 1 -> 0 and a shortcut 4 -> 0; 5 -> 0.
    let g = graph(6, &[(1, 0), (2, 1), (3, 2), (4, 3), (4, 0), (5, 0)]);
    let search = AncestorSearch::new(&g);

    assert_eq!(search.length(v(4), v(5)).unwrap(), 2);
    assert_eq!(search.length(v(4), v(1)).unwrap(), 2);
    assert_eq!(search.ancestor(v(4), v(1)).unwrap(), v(0));
}

#[test]
fn out_of_range_vertex_is_invalid_argument() {
    let g = digraph25();
    let search = AncestorSearch::new(&g);

    let err = search.length(v(0), v(25)).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    insta::assert_snapshot!(err, @"invalid argument: vertex 25 out of range (graph has 25 vertices)");

    let err = search
        .ancestor_of_subsets(&set(&[1, 2, 40]), &set(&[3]))
        .unwrap_err();
    insta::assert_snapshot!(err, @"invalid argument: vertex 40 out of range (graph has 25 vertices)");
}

#[test]
fn empty_subset_is_rejected_before_search() {
    assert_eq!(VertexSet::new(Vec::<Vertex>::new()).unwrap_err(), Error::EmptyVertexSet);
}
