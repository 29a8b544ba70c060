mod graph_files;
mod shortest_paths;
mod spanning_trees;
