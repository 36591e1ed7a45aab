use crate::genre::GenreSelection;

/// Sampling temperature for every discovery request.
pub const TEMPERATURE: f64 = 0.7;
/// Output token budget for every discovery request.
pub const MAX_TOKENS: u32 = 800;
/// Number of artists the model is asked for.
pub const ARTIST_COUNT: usize = 5;

const AS_OF_YEAR: u16 = 2025;

/// Instruction sent as the single user message. The genre shows up twice:
/// in the request itself and inside the embedded JSON example.
pub fn build_prompt(genre: &GenreSelection) -> String {
    format!(
        "Suggest {count} emerging or up-and-coming artists in the {genre} genre who have gained attention in the last 5 years (as of {year}).
Avoid well-known mainstream artists.
For each artist, provide in JSON format: a list of objects with keys 'Artist Name', 'Brief Description' (1-2 sentences), 'Recommended New Song' (recent track), and 'Why Discover Them' (appeal to fans).
Example: [{{ \"Artist Name\": \"Example Artist\", \"Brief Description\": \"A rising star with soulful vibes.\", \"Recommended New Song\": \"New Hit\", \"Why Discover Them\": \"Perfect for fans of modern {genre}.\" }}]",
        count = ARTIST_COUNT,
        year = AS_OF_YEAR,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genre::GenreChoice;

    #[test]
    fn every_listed_genre_lands_in_request_and_example() {
        for choice in GenreChoice::ALL
            .into_iter()
            .filter(|c| *c != GenreChoice::Other)
        {
            let genre = GenreSelection::resolve(choice, None).unwrap();
            let prompt = build_prompt(&genre);
            assert!(prompt.contains(&format!("in the {} genre", choice.label())));

            let example = prompt.split("Example: ").nth(1).unwrap();
            assert!(example.contains(&format!("Perfect for fans of modern {}.", choice.label())));
        }
    }

    #[test]
    fn embedded_example_is_valid_json() {
        let genre = GenreSelection::new("Synthwave").unwrap();
        let prompt = build_prompt(&genre);
        let example = prompt.split("Example: ").nth(1).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(example).unwrap();
        assert_eq!(parsed[0]["Artist Name"], "Example Artist");
        assert_eq!(parsed[0]["Why Discover Them"], "Perfect for fans of modern Synthwave.");
    }

    #[test]
    fn prompt_names_all_four_keys() {
        let prompt = build_prompt(&GenreSelection::new("Jazz").unwrap());
        for key in [
            "'Artist Name'",
            "'Brief Description'",
            "'Recommended New Song'",
            "'Why Discover Them'",
        ] {
            assert!(prompt.contains(key), "missing {key}");
        }
        assert!(prompt.starts_with("Suggest 5 emerging"));
    }
}
