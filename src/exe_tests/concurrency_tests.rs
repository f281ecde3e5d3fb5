#![cfg(test)]

use std::sync::atomic::{AtomicUsize, Ordering};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use octo::math::{Sphere, AABB};
use octo::{Octree, QueryScratch, TreeConfig};
use crate::common::*;

const ROOT: AABB = AABB::new(Vec3::splat(-64.0), Vec3::splat(64.0));
const SPAWN: AABB = AABB::new(Vec3::splat(-56.0), Vec3::splat(56.0));

#[test]
fn concurrent_readers_agree()
{
    let mut rng = StdRng::seed_from_u64(8);
    let tree = Octree::with_config(ROOT, TreeConfig::new(4, 8)).unwrap();
    for i in 0..500
    {
        tree.insert(random_aabb(&mut rng, SPAWN, 4.0), i).unwrap();
    }

    let queries: Vec<_> = (0..64).map(|_| Sphere::new(random_point(&mut rng, SPAWN), 12.0)).collect();
    let expected: Vec<_> = queries.iter().map(|q| sorted(tree.query_sphere(*q))).collect();

    let checked = AtomicUsize::new(0);
    crossbeam::thread::scope(|scope|
    {
        for t in 0..4
        {
            let (tree, queries, expected, checked) = (&tree, &queries, &expected, &checked);
            scope.spawn(move |_|
            {
                let mut scratch = QueryScratch::new();
                for i in (t..queries.len()).step_by(4)
                {
                    let mut results = Vec::new();
                    tree.query_with(&queries[i].into(), &mut scratch, &mut results);
                    assert_eq!(expected[i], sorted(results));
                    checked.fetch_add(1, Ordering::Relaxed);
                }
            });
        }
    }).unwrap();

    assert_eq!(queries.len(), checked.load(Ordering::Relaxed));
}

#[test]
fn writers_and_readers_interleave()
{
    let tree = Octree::with_config(ROOT, TreeConfig::new(2, 8)).unwrap();
    crossbeam::thread::scope(|scope|
    {
        for t in 0..2u64
        {
            let tree = &tree;
            scope.spawn(move |_|
            {
                let mut rng = StdRng::seed_from_u64(100 + t);
                for i in 0..200
                {
                    let bound = random_aabb(&mut rng, SPAWN, 2.0);
                    let id = tree.insert(bound, i).unwrap();
                    assert!(tree.query_aabb(bound).contains(&id));
                    if i % 2 == 0
                    {
                        assert!(tree.erase(id));
                    }
                }
            });
        }

        let tree = &tree;
        scope.spawn(move |_|
        {
            for _ in 0..200
            {
                let all = tree.query_aabb(ROOT);
                assert_unique(&all);
            }
        });
    }).unwrap();

    assert_eq!(200, tree.len());
    assert_eq!(200, tree.query_aabb(ROOT).len());
}
