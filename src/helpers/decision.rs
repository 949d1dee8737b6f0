use rand::Rng;

use crate::error::SuggestionError;
use crate::models::restaurant::Restaurant;

/// Picks tonight's restaurant uniformly at random from the candidate pool.
///
/// The RNG is injected so callers can seed the draw; the binary passes
/// `rand::thread_rng()`.
pub fn choose_restaurant<'a, R: Rng + ?Sized>(
    rng: &mut R,
    restaurants: &'a [Restaurant],
) -> Result<&'a Restaurant, SuggestionError> {
    if restaurants.is_empty() {
        return Err(SuggestionError::EmptyResult);
    }

    let winner = rng.gen_range(0..restaurants.len());
    Ok(&restaurants[winner])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn pool(names: &[&str]) -> Vec<Restaurant> {
        names
            .iter()
            .map(|name| Restaurant {
                name: name.to_string(),
                rating: 4.0,
                address: "118 W 3rd St, Dayton, OH 45402".to_string(),
                phone: "+19372228883".to_string(),
            })
            .collect()
    }

    #[test]
    fn the_pick_always_comes_from_the_pool() {
        let restaurants = pool(&["Thai Table", "El Meson", "Corner Kitchen"]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let pick = choose_restaurant(&mut rng, &restaurants).unwrap();
            assert!(restaurants.iter().any(|r| r.name == pick.name));
        }
    }

    #[test]
    fn the_same_seed_picks_the_same_restaurant() {
        let restaurants = pool(&["Thai Table", "El Meson", "Corner Kitchen"]);

        let first = choose_restaurant(&mut StdRng::seed_from_u64(42), &restaurants)
            .unwrap()
            .name
            .clone();
        let second = choose_restaurant(&mut StdRng::seed_from_u64(42), &restaurants)
            .unwrap()
            .name
            .clone();

        assert_eq!(first, second);
    }

    #[test]
    fn every_candidate_is_reachable_over_repeated_draws() {
        let names = ["Thai Table", "El Meson", "Corner Kitchen", "Pho 88"];
        let restaurants = pool(&names);
        let mut rng = StdRng::seed_from_u64(1);

        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.insert(choose_restaurant(&mut rng, &restaurants).unwrap().name.clone());
        }

        assert_eq!(seen.len(), names.len());
    }

    #[test]
    fn an_empty_pool_fails_with_the_named_error() {
        let err = choose_restaurant(&mut StdRng::seed_from_u64(3), &[]).unwrap_err();
        assert!(matches!(err, SuggestionError::EmptyResult));
    }
}
