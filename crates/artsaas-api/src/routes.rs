pub mod artists;
pub mod artworks;
pub mod assessments;
pub mod donations;
pub mod health;
pub mod instruments;
pub mod mentorship;
