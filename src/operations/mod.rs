pub mod generator;

pub use generator::TrianglesGenerator;
