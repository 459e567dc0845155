pub mod gemini;
pub mod google_maps;
