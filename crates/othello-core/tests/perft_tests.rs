use othello_core::perft::perft_root;

#[test]
fn test_perft() {
    let nodes = perft_root(7);
    assert_eq!(nodes, 55_092);
}
