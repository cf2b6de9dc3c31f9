pub mod edge_filter;

pub use edge_filter::edge_filter_middleware;
