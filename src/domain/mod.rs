// Domain layer - Resolution of extraction parameters

pub mod errors;
pub mod model;
pub mod rules;
