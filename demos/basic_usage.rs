//! Basic build -> traverse -> mutate flow.

use hopgraph::*;

fn main() -> GraphResult<()> {
    // Build a small network of stations
    let mut builder = GraphBuilder::new();
    let harbor = builder.add_vertex("Harbor");
    let market = builder.add_vertex("Market");
    let mill = builder.add_vertex("Mill");
    let tower = builder.add_vertex("Tower");

    builder
        .link(harbor, market)
        .link(market, mill)
        .link(mill, tower)
        .link(harbor, mill);

    let mut graph = builder.build()?;
    println!(
        "Graph created with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    println!("DFS from Harbor: {:?}", graph.depth_first_search(harbor)?);
    println!("BFS from Harbor: {:?}", graph.breadth_first_search(harbor)?);

    match graph.distance_of_shortest_path(harbor, tower)? {
        Some(hops) => println!("Harbor -> Tower: {} hop(s)", hops),
        None => println!("Harbor -> Tower: unreachable"),
    }

    // Cut the mill out and ask again
    graph.remove_vertex(mill)?;
    match graph.distance_of_shortest_path(harbor, tower)? {
        Some(hops) => println!("Without Mill, Harbor -> Tower: {} hop(s)", hops),
        None => println!("Without Mill, Harbor -> Tower: unreachable"),
    }

    Ok(())
}
