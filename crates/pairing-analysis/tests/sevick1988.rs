//! Regression test for the 5-site system described in the appendix of
//! Sevick, Monson, Ottino (1988), doi 10.1063/1.454720.

use nalgebra::DMatrix;
use pairing_analysis::{AdjacencyBuilder, ClosureEngine, ClusterReducer};
use pairing_core::{AdjacencyMatrix, Label};

fn direct() -> DMatrix<Label> {
    DMatrix::from_row_slice(
        5,
        5,
        &[
            1, 0, 0, 0, 1, //
            0, 1, 1, 0, 0, //
            0, 1, 1, 0, 1, //
            0, 0, 0, 1, 0, //
            1, 0, 1, 0, 1,
        ],
    )
}

fn indirect() -> DMatrix<Label> {
    DMatrix::from_row_slice(
        5,
        5,
        &[
            1, 1, 1, 0, 1, //
            1, 1, 1, 0, 1, //
            1, 1, 1, 0, 1, //
            0, 0, 0, 1, 0, //
            1, 1, 1, 0, 1,
        ],
    )
}

#[test]
fn closure_matches_published_appendix() {
    let adjacency = AdjacencyMatrix::from_labels(direct()).expect("valid adjacency");
    let closure = ClosureEngine::new().close(&adjacency).expect("close");
    assert_eq!(closure.as_labels(), &indirect());
}

#[test]
fn reduction_yields_two_clusters_with_expected_statistics() {
    let adjacency = AdjacencyMatrix::from_labels(direct()).expect("valid adjacency");
    let closure = ClosureEngine::new().close(&adjacency).expect("close");
    let set = ClusterReducer::new().reduce(&closure);

    assert_eq!(set.len(), 2);
    assert_eq!(set.clusters[0].members, vec![0, 1, 2, 4]);
    assert_eq!(set.clusters[1].members, vec![3]);

    assert!((set.statistics.mean - 2.5).abs() < 1e-12);
    assert!((set.statistics.stdev - 1.5).abs() < 1e-12);
}

#[test]
fn the_same_adjacency_arises_from_distances_at_cutoff_0_8() {
    // distances engineered so build() reproduces the appendix adjacency:
    // paired sites at 0.5, everything else at 1.0
    let target = direct();
    let mut distances = DMatrix::from_element(5, 5, 1.0);
    for i in 0..5 {
        distances[(i, i)] = 0.0;
        for j in 0..5 {
            if i != j && target[(i, j)] == 1 {
                distances[(i, j)] = 0.5;
            }
        }
    }

    let builder = AdjacencyBuilder::new(0.8).expect("builder");
    let adjacency = builder.build(&distances).expect("build");
    assert_eq!(adjacency.as_labels(), &target);
}
