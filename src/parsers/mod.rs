pub mod html;
pub mod product;


pub use product::ProductExtractor;
