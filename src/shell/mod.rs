// Composition root for the sensor data API.
//
// Responsibilities
// - Read config from environment.
// - Open the readings store and wire it into the use case handler.
// - Expose the HTTP router.

pub mod config;
pub mod http;
pub mod state;
