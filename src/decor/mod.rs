pub mod couch;
pub mod mantle;
pub mod string_lights;
pub mod train;
pub mod tree;
pub mod tv;
pub mod vases;
