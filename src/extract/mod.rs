pub mod descriptor;
pub mod extractor;
