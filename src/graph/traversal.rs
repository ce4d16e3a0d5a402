//! Graph traversal algorithms (DFS, BFS, shortest path).

use std::collections::{HashMap, HashSet, VecDeque};

use indexmap::IndexSet;

use crate::types::{GraphResult, Vertex, VertexId, DEFAULT_TRAVERSAL_MAX_RESULTS};

use super::Graph;

/// Parameters for a bounded breadth-first traversal.
#[derive(Debug, Clone, Copy)]
pub struct TraversalParams {
    /// Starting vertex.
    pub start: VertexId,
    /// Maximum depth (number of hops) to expand.
    pub max_depth: usize,
    /// Maximum number of vertices to return.
    pub max_results: usize,
}

impl TraversalParams {
    /// Unbounded depth, default result cap.
    pub fn new(start: VertexId) -> Self {
        Self {
            start,
            max_depth: usize::MAX,
            max_results: DEFAULT_TRAVERSAL_MAX_RESULTS,
        }
    }
}

/// Result of a bounded traversal.
#[derive(Debug, Clone, Default)]
pub struct TraversalResult {
    /// Visited vertex ids (BFS order).
    pub visited: Vec<VertexId>,
    /// Depth at which each vertex was found.
    pub depths: HashMap<VertexId, usize>,
}

/// Member neighbors of `vertex`. Adjacency entries that are not in the
/// graph are skipped.
fn member_neighbors<'g, T>(
    graph: &'g Graph<T>,
    vertex: &'g Vertex<T>,
) -> impl Iterator<Item = &'g Vertex<T>> + 'g {
    vertex.adjacent().filter_map(move |id| {
        let neighbor = graph.vertex(id);
        if neighbor.is_none() {
            log::warn!("vertex {} lists {} which is not in the graph", vertex.id(), id);
        }
        neighbor
    })
}

/// Depth-first traversal; values are returned in pop order.
///
/// Neighbors are marked seen when pushed, so each vertex is pushed once.
pub fn depth_first<T>(graph: &Graph<T>, start: VertexId) -> GraphResult<Vec<&T>> {
    let mut to_visit = vec![graph.require(start)?];
    let mut seen: HashSet<VertexId> = HashSet::from([start]);
    let mut values = Vec::new();

    while let Some(current) = to_visit.pop() {
        values.push(&current.value);
        for neighbor in member_neighbors(graph, current) {
            if seen.insert(neighbor.id()) {
                to_visit.push(neighbor);
            }
        }
    }

    log::trace!("dfs from {} visited {} vertices", start, values.len());
    Ok(values)
}

/// Breadth-first traversal; values are returned in the order vertices
/// were first seen, which for a FIFO queue is also visit order.
pub fn breadth_first<T>(graph: &Graph<T>, start: VertexId) -> GraphResult<Vec<&T>> {
    let mut to_visit = VecDeque::from([graph.require(start)?]);
    let mut seen: IndexSet<VertexId> = IndexSet::from([start]);

    while let Some(current) = to_visit.pop_front() {
        for neighbor in member_neighbors(graph, current) {
            if seen.insert(neighbor.id()) {
                to_visit.push_back(neighbor);
            }
        }
    }

    log::trace!("bfs from {} saw {} vertices", start, seen.len());
    Ok(seen.iter().filter_map(|&id| graph.value(id)).collect())
}

/// Number of edges on a shortest path from `start` to `end`.
///
/// Returns `Ok(None)` when `end` cannot be reached. The search stops as
/// soon as `end` is dequeued.
pub fn shortest_distance<T>(
    graph: &Graph<T>,
    start: VertexId,
    end: VertexId,
) -> GraphResult<Option<usize>> {
    graph.require(end)?;
    let mut to_visit = VecDeque::from([(graph.require(start)?, 0usize)]);
    let mut seen: HashSet<VertexId> = HashSet::from([start]);

    while let Some((current, depth)) = to_visit.pop_front() {
        if current.id() == end {
            return Ok(Some(depth));
        }
        for neighbor in member_neighbors(graph, current) {
            if seen.insert(neighbor.id()) {
                to_visit.push_back((neighbor, depth + 1));
            }
        }
    }

    Ok(None)
}

/// Vertex ids along one shortest path, `start` and `end` included.
///
/// Among equally short paths, the one BFS discovers first wins.
pub fn shortest_path<T>(
    graph: &Graph<T>,
    start: VertexId,
    end: VertexId,
) -> GraphResult<Option<Vec<VertexId>>> {
    graph.require(end)?;
    let mut to_visit = VecDeque::from([graph.require(start)?]);
    let mut parents: HashMap<VertexId, VertexId> = HashMap::new();
    let mut seen: HashSet<VertexId> = HashSet::from([start]);

    while let Some(current) = to_visit.pop_front() {
        if current.id() == end {
            let mut path = vec![end];
            let mut cursor = end;
            while let Some(&parent) = parents.get(&cursor) {
                path.push(parent);
                cursor = parent;
            }
            path.reverse();
            return Ok(Some(path));
        }
        for neighbor in member_neighbors(graph, current) {
            if seen.insert(neighbor.id()) {
                parents.insert(neighbor.id(), current.id());
                to_visit.push_back(neighbor);
            }
        }
    }

    Ok(None)
}

/// BFS from `params.start`, bounded by depth and result count.
pub fn bfs_traverse<T>(graph: &Graph<T>, params: TraversalParams) -> GraphResult<TraversalResult> {
    let start = graph.require(params.start)?;

    let mut result = TraversalResult::default();
    let mut queue: VecDeque<(&Vertex<T>, usize)> = VecDeque::new();

    if params.max_results == 0 {
        return Ok(result);
    }

    result.visited.push(params.start);
    result.depths.insert(params.start, 0);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= params.max_depth {
            continue;
        }
        for neighbor in member_neighbors(graph, current) {
            if result.visited.len() >= params.max_results {
                return Ok(result);
            }
            if result.depths.contains_key(&neighbor.id()) {
                continue;
            }
            result.visited.push(neighbor.id());
            result.depths.insert(neighbor.id(), depth + 1);
            queue.push_back((neighbor, depth + 1));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star() -> (Graph<char>, Vec<VertexId>) {
        let mut graph = Graph::new();
        let vertices: Vec<Vertex<char>> = "abcd".chars().map(Vertex::new).collect();
        let ids: Vec<VertexId> = vertices.iter().map(Vertex::id).collect();
        graph.add_vertices(vertices);
        for &leaf in &ids[1..] {
            graph.add_edge(ids[0], leaf).unwrap();
        }
        (graph, ids)
    }

    #[test]
    fn dfs_pops_last_pushed_neighbor_first() {
        let (graph, ids) = star();
        let values = depth_first(&graph, ids[0]).unwrap();
        assert_eq!(values, vec![&'a', &'d', &'c', &'b']);
    }

    #[test]
    fn bfs_returns_seen_order() {
        let (graph, ids) = star();
        let values = breadth_first(&graph, ids[0]).unwrap();
        assert_eq!(values, vec![&'a', &'b', &'c', &'d']);
    }

    #[test]
    fn dangling_adjacency_is_skipped() {
        let ghost = Vertex::new('x');
        let mut graph = Graph::new();
        let a = Vertex::with_adjacent('a', [ghost.id()]);
        let a_id = a.id();
        graph.add_vertex(a);

        assert_eq!(depth_first(&graph, a_id).unwrap(), vec![&'a']);
        assert_eq!(breadth_first(&graph, a_id).unwrap(), vec![&'a']);
    }

    #[test]
    fn bounded_traversal_respects_depth() {
        let (graph, ids) = star();
        let result = bfs_traverse(
            &graph,
            TraversalParams {
                start: ids[1],
                max_depth: 1,
                max_results: 10,
            },
        )
        .unwrap();
        assert_eq!(result.visited, vec![ids[1], ids[0]]);
        assert_eq!(result.depths[&ids[0]], 1);
    }

    #[test]
    fn bounded_traversal_respects_result_cap() {
        let (graph, ids) = star();
        let result = bfs_traverse(
            &graph,
            TraversalParams {
                start: ids[0],
                max_depth: 5,
                max_results: 2,
            },
        )
        .unwrap();
        assert_eq!(result.visited, vec![ids[0], ids[1]]);

        let empty = bfs_traverse(
            &graph,
            TraversalParams {
                start: ids[0],
                max_depth: 5,
                max_results: 0,
            },
        )
        .unwrap();
        assert!(empty.visited.is_empty());
    }
}
