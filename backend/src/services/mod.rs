pub mod price_export;
