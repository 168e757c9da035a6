//! Port contracts for the board bounded context.

pub mod gateway;

pub use gateway::{TaskGateway, TaskGatewayError, TaskGatewayResult};
