use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Restaurant {
    pub name: String,
    pub rating: f64,
    pub address: String,
    pub phone: String,
}
