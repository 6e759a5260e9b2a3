//! Check pairs of N-Quads files,
//! stored in `tests/fixtures/{isomorphic,non_isomorphic}/<name>/<name>-{1,2}.nq`.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rdfiso_isomorphism::{bijection, check_bijection, isomorphic};
use rdfiso_term::Quad;
use test_case::test_case;

fn load(kind: &str, name: &str, i: usize) -> Vec<Quad> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(kind)
        .join(name)
        .join(format!("{name}-{i}.nq"));
    let file = File::open(&path).unwrap_or_else(|err| panic!("can not open {}: {err}", path.display()));
    rdfiso_rio::parse_nquads(BufReader::new(file)).unwrap()
}

#[test_case("chain")]
#[test_case("clique")]
#[test_case("cycle")]
#[test_case("duplicates")]
#[test_case("literals")]
#[test_case("named_graphs")]
#[test_case("people")]
fn isomorphic_fixture(name: &str) {
    let g1 = load("isomorphic", name, 1);
    let g2 = load("isomorphic", name, 2);
    assert!(isomorphic(&g1, &g2));
    assert!(isomorphic(&g2, &g1));
    let found = bijection(&g1, &g2).unwrap();
    assert!(check_bijection(&g1, &g2, &found));
}

#[test_case("direction")]
#[test_case("graph_name")]
#[test_case("merged_bnodes")]
#[test_case("people")]
#[test_case("split_cycle")]
fn non_isomorphic_fixture(name: &str) {
    let g1 = load("non_isomorphic", name, 1);
    let g2 = load("non_isomorphic", name, 2);
    assert!(!isomorphic(&g1, &g2));
    assert!(!isomorphic(&g2, &g1));
    assert_eq!(bijection(&g1, &g2), None);
}
