use mxcif::Aabb;
use mxcif::Entry;
use mxcif::QuadTree;
use mxcif::QuadTreeError;
use mxcif::Spatial;

fn rect(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Aabb {
    Aabb::new(x_min, y_min, x_max, y_max)
}

fn tree() -> QuadTree<Entry<&'static str>> {
    QuadTree::new(rect(0., 0., 100., 100.), 4)
}

#[test]
fn enclosed_query() -> anyhow::Result<()> {
    let mut qt = tree();

    let a = qt.insert(Entry::new(rect(10., 10., 20., 20.), "a"))?;

    assert_eq!(qt.get_enclosed(&rect(0., 0., 50., 50.)), vec![a]);
    assert!(qt.get_enclosed(&rect(60., 60., 100., 100.)).is_empty());

    Ok(())
}

#[test]
fn straddling_object_is_pinned_to_root() -> anyhow::Result<()> {
    let mut qt = tree();

    let a = qt.insert(Entry::new(rect(10., 10., 20., 20.), "a"))?;
    let b = qt.insert(Entry::new(rect(45., 45., 55., 55.), "b"))?;

    let root = qt.root();
    assert_eq!(qt.get(b).map(Spatial::owner), Some(Some(root)));
    assert_ne!(qt.get(a).map(Spatial::owner), Some(Some(root)));

    let found = qt.get_overlapping(&rect(0., 0., 10., 10.));
    assert!(!found.contains(&b));
    assert_eq!(found, vec![a]);

    Ok(())
}

#[test]
fn moved_object_is_found_at_new_position() -> anyhow::Result<()> {
    let mut qt = tree();

    let a = qt.insert(Entry::new(rect(10., 10., 20., 20.), "a"))?;

    qt.relocate(a, |e| e.set_bounds(rect(70., 70., 80., 80.)))?;

    assert!(qt.get_enclosed(&rect(0., 0., 50., 50.)).is_empty());
    assert_eq!(qt.get_enclosed(&rect(60., 60., 100., 100.)), vec![a]);

    Ok(())
}

#[test]
fn move_through_get_mut() -> anyhow::Result<()> {
    let mut qt = tree();

    let a = qt.insert(Entry::new(rect(10., 10., 20., 20.), "a"))?;

    if let Some(e) = qt.get_mut(a) {
        e.translate(0., 60.);
    }
    let node = qt.reinsert(a)?;

    assert_eq!(qt.get(a).and_then(Spatial::owner), Some(node));
    assert_eq!(qt.get_overlapping(&rect(0., 50., 50., 100.)), vec![a]);

    Ok(())
}

#[test]
fn leaving_the_tree_is_reported() -> anyhow::Result<()> {
    let mut qt = tree();

    let a = qt.insert(Entry::new(rect(10., 10., 20., 20.), "a"))?;

    let res = qt.relocate(a, |e| e.set_bounds(rect(120., 10., 130., 20.)));
    assert_eq!(res, Err(QuadTreeError::LeftBounds { id: a }));

    // still reachable
    assert_eq!(qt.get_overlapping(&rect(115., 0., 140., 30.)), vec![a]);
    assert_eq!(qt.remove(a).map(|e| e.payload), Some("a"));

    Ok(())
}

#[test]
fn removal() -> anyhow::Result<()> {
    let mut qt = tree();

    let a = qt.insert(Entry::new(rect(10., 10., 20., 20.), "a"))?;
    let b = qt.insert(Entry::new(rect(12., 12., 18., 18.), "b"))?;

    assert_eq!(qt.remove(a).map(|e| e.payload), Some("a"));
    assert!(qt.remove(a).is_none());

    assert_eq!(qt.get_children(), vec![b]);
    assert_eq!(qt.len(), 1);
    assert_eq!(qt.iter().map(|(id, _)| id).collect::<Vec<_>>(), vec![b]);

    // removed handles stay dead
    let c = qt.insert(Entry::new(rect(1., 1., 2., 2.), "c"))?;
    assert_ne!(c, a);
    assert!(qt.get(a).is_none());

    Ok(())
}

#[test]
fn quadrants_partition_their_parent() {
    let mut qt = tree();

    for i in 0..10 {
        let f = i as f32 * 9.;
        qt.insert(Entry::new(rect(f, f, f + 1., f + 1.), "x")).unwrap();
    }

    for node in qt.nodes() {
        let Some(quadrants) = node.quadrants() else {
            continue;
        };

        let parts: Vec<Aabb> = quadrants
            .iter()
            .map(|&q| *qt.nodes()[q].bounds())
            .collect();

        assert_eq!(parts, node.bounds().split().to_vec());

        for q in quadrants {
            assert_eq!(qt.nodes()[q].max_depth() + 1, node.max_depth());
        }
    }
}
