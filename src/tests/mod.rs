pub mod common;

mod middleware_flow;
