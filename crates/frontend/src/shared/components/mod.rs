pub mod card_animated;
pub mod kpi_card;
pub mod sparkline;
