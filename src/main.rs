use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use rand::thread_rng;
use tracing::{debug, info};

use crate::config::Config;
use crate::helpers::decision::choose_restaurant;
use crate::helpers::geo::{self, Coordinate};
use crate::repositories::yelp_repo::YelpFusionRepo;

pub mod config;
pub mod error;
pub mod helpers;
pub mod models;
pub mod repositories;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();

    let center = Coordinate {
        latitude: config.latitude,
        longitude: config.longitude,
    };

    let radius_meters = geo::miles_to_meters(config.radius_miles)
        .context("Error converting the search radius to meters")?;
    let window = geo::bounding_box(center, config.radius_miles)
        .context("Error deriving the search window")?;
    debug!("Searching for restaurants inside the window: {:?}", window);

    let yelp_repo = YelpFusionRepo::new(config.yelp_api_key)
        .context("Error preparing the Yelp client")?;
    let restaurants = yelp_repo
        .search_restaurants(center, radius_meters, config.limit)
        .await
        .context("Error searching for open restaurants nearby")?;
    info!("Yelp returned {} open restaurants", restaurants.len());

    let final_decision = choose_restaurant(&mut thread_rng(), &restaurants)
        .context("Error picking tonight's restaurant")?;

    println!("Tonight you should go: {}", final_decision.name);
    println!("The rating for this restaurant is: {}", final_decision.rating);
    println!("The address is: {}", final_decision.address);
    println!(
        "The phone number is: {} if you want to order through phone",
        final_decision.phone
    );

    Ok(())
}
