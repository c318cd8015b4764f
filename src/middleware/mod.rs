pub mod cors;
pub mod request_log;
pub mod token_gate;

pub use cors::cors_middleware;
pub use request_log::RequestLog;
pub use token_gate::TokenGate;
