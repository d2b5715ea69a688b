//! BFS shortest paths over the house graph.

use std::collections::{HashSet, VecDeque};

use crate::house::{HouseGraph, RoomId};

/// Shortest room sequence from `start` to `end`, both inclusive.
///
/// Neighbors are explored in declared order, so ties between equal-length
/// paths resolve the same way every time. Returns `[start]` when
/// `start == end`, and also when `end` is unreachable, which a validated
/// graph rules out.
///
/// O(V+E); callers invoke this once per room-change decision, not per frame.
pub fn shortest_path(graph: &HouseGraph, start: RoomId, end: RoomId) -> Vec<RoomId> {
    let mut visited = HashSet::new();
    let mut queue: VecDeque<(RoomId, Vec<RoomId>)> = VecDeque::new();
    visited.insert(start);
    queue.push_back((start, vec![start]));

    while let Some((current, path)) = queue.pop_front() {
        if current == end {
            return path;
        }
        for &next in graph.neighbors(current).unwrap_or_default() {
            if visited.insert(next) {
                let mut new_path = path.clone();
                new_path.push(next);
                queue.push_back((next, new_path));
            }
        }
    }

    vec![start]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::house::RoomDef;

    fn def(name: &str, connections: &[&str]) -> RoomDef {
        RoomDef {
            name: name.to_string(),
            connections: connections.iter().map(|c| c.to_string()).collect(),
            ambient: String::new(),
        }
    }

    /// bedroom - hallway - kitchen - pantry, with bathroom off the hallway.
    fn house() -> HouseGraph {
        HouseGraph::build(&[
            def("bedroom", &["hallway"]),
            def("hallway", &["bedroom", "kitchen", "bathroom"]),
            def("kitchen", &["hallway", "pantry"]),
            def("bathroom", &["hallway"]),
            def("pantry", &["kitchen"]),
        ])
        .unwrap()
    }

    fn ids(graph: &HouseGraph, names: &[&str]) -> Vec<RoomId> {
        names.iter().map(|n| graph.id_of(n).unwrap()).collect()
    }

    #[test]
    fn test_same_room() {
        let graph = house();
        let bedroom = graph.id_of("bedroom").unwrap();
        assert_eq!(shortest_path(&graph, bedroom, bedroom), vec![bedroom]);
    }

    #[test]
    fn test_adjacent_rooms() {
        let graph = house();
        let path = shortest_path(
            &graph,
            graph.id_of("bedroom").unwrap(),
            graph.id_of("hallway").unwrap(),
        );
        assert_eq!(path, ids(&graph, &["bedroom", "hallway"]));
    }

    #[test]
    fn test_multi_hop() {
        let graph = house();
        let path = shortest_path(
            &graph,
            graph.id_of("bedroom").unwrap(),
            graph.id_of("pantry").unwrap(),
        );
        assert_eq!(path, ids(&graph, &["bedroom", "hallway", "kitchen", "pantry"]));
    }

    #[test]
    fn test_branch_to_branch() {
        let graph = house();
        let path = shortest_path(
            &graph,
            graph.id_of("bathroom").unwrap(),
            graph.id_of("kitchen").unwrap(),
        );
        assert_eq!(path, ids(&graph, &["bathroom", "hallway", "kitchen"]));
    }

    #[test]
    fn test_path_properties_all_pairs() {
        let graph = house();
        for a in graph.room_ids() {
            for b in graph.room_ids() {
                let path = shortest_path(&graph, a, b);
                assert_eq!(path[0], a);
                assert_eq!(*path.last().unwrap(), b);
                assert!(path.len() <= graph.room_count());
                for pair in path.windows(2) {
                    assert!(graph.neighbors(pair[0]).unwrap().contains(&pair[1]));
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let graph = house();
        let a = graph.id_of("pantry").unwrap();
        let b = graph.id_of("bathroom").unwrap();
        let first = shortest_path(&graph, a, b);
        for _ in 0..10 {
            assert_eq!(shortest_path(&graph, a, b), first);
        }
    }
}
