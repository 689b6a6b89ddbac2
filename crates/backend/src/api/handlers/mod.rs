pub mod d001_overview;
pub mod health;
