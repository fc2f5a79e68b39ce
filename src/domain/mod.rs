// Domain layer: book records, loan records and the ports the catalog depends on.

pub mod model;
pub mod ports;
