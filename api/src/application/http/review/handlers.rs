pub mod generate_reviews;
