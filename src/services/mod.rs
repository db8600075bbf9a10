// Core services: persistence, palettes, secret resolution, session gating

pub mod palette;
pub mod secret;
pub mod session;
pub mod store;
