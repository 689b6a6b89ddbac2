pub mod d001_overview;
