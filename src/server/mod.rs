pub mod middleware;
pub mod server;
