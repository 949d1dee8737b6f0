pub mod yelp_repo;
