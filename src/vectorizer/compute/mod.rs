/// Vector comparison (dot / cosine)
pub mod compare;
