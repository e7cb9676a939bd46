// Module exports for models

pub mod birthday;
