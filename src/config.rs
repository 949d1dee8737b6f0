use clap::Parser;

#[derive(Parser, Clone)]
pub struct Config {
    /// Latitude of the spot to search around, in decimal degrees
    #[clap(env, long, allow_negative_numbers = true)]
    pub latitude: f64,

    /// Longitude of the spot to search around, in decimal degrees
    #[clap(env, long, allow_negative_numbers = true)]
    pub longitude: f64,

    /// How far out to search, in miles
    #[clap(env, long, default_value_t = 20.0)]
    pub radius_miles: f64,

    /// Most candidates to ask the provider for (Yelp caps this at 50)
    #[clap(env, long, default_value_t = 30)]
    pub limit: u32,

    /// Yelp Fusion API key, sent as a bearer token
    #[clap(env, long, hide_env_values = true)]
    pub yelp_api_key: String,
}
