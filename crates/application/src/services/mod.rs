mod mutation_gate;
mod zone_guard;

pub use mutation_gate::ZoneMutationGate;
pub use zone_guard::require_zone;
