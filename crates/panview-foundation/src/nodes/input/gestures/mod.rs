pub mod pan;

pub use pan::PanRecognizer;
