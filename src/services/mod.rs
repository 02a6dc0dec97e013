pub mod tavily_client;

pub use tavily_client::*;
