pub mod d400_sales_by_date;
pub mod d401_product_sales;
pub mod d402_ingredient_usage;
pub mod d403_finance;
