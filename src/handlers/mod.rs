// handlers/mod.rs - Two-tier handler architecture
//
// Public (no auth) → Protected (JWT auth)

pub mod public;    // Tier 1: No authentication required (/api/auth/*)
pub mod protected; // Tier 2: JWT authentication required (/api/*)
