#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breed {
    pub name: &'static str,
    pub image_ref: &'static str,
    pub description: &'static str,
    /// Display only.
    pub rating: f32,
}

pub const HERO_IMAGE: &str =
    "https://upload.wikimedia.org/wikipedia/commons/thumb/3/3a/Cat03.jpg/1200px-Cat03.jpg";

pub const NAV_LINKS: &[&str] = &["Home", "About", "Contact"];

pub const BREEDS: &[Breed] = &[
    Breed {
        name: "Siamese",
        image_ref: "https://upload.wikimedia.org/wikipedia/commons/thumb/2/25/Siam_lilacpoint.jpg/1200px-Siam_lilacpoint.jpg",
        description: "Vocal, social and famous for their striking blue almond eyes.",
        rating: 4.5,
    },
    Breed {
        name: "Persian",
        image_ref: "https://upload.wikimedia.org/wikipedia/commons/thumb/1/15/White_Persian_Cat.jpg/1200px-White_Persian_Cat.jpg",
        description: "Calm lap cats with long luxurious coats and sweet faces.",
        rating: 4.3,
    },
    Breed {
        name: "Maine Coon",
        image_ref: "https://upload.wikimedia.org/wikipedia/commons/thumb/5/5f/Maine_Coon_cat_by_Tomitheos.JPG/1200px-Maine_Coon_cat_by_Tomitheos.JPG",
        description: "Gentle giants with tufted ears and a playful, dog-like nature.",
        rating: 4.8,
    },
    Breed {
        name: "Bengal",
        image_ref: "https://upload.wikimedia.org/wikipedia/commons/thumb/b/ba/Paintedcats_Red_Star_standing.jpg/1200px-Paintedcats_Red_Star_standing.jpg",
        description: "Athletic and curious, wearing a wild leopard-like coat.",
        rating: 4.6,
    },
    Breed {
        name: "British Shorthair",
        image_ref: "https://upload.wikimedia.org/wikipedia/commons/thumb/9/9d/Britishblue.jpg/1200px-Britishblue.jpg",
        description: "Easygoing teddy bears with dense plush coats.",
        rating: 4.4,
    },
];

pub const FACTS: &[&str] = &[
    "Cats sleep for around 13 to 16 hours a day.",
    "A group of cats is called a clowder.",
    "Cats have 32 muscles in each ear.",
    "A cat's nose print is as unique as a human fingerprint.",
    "Cats can rotate their ears 180 degrees.",
];

pub const CHARACTERISTICS: &[&str] = &[
    "Independent nature",
    "Excellent hunters with sharp claws and teeth",
    "Flexible bodies and quick reflexes",
    "Keen senses, especially hearing and night vision",
    "Communicate through vocalizations, body language, and scent",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_are_populated() {
        assert_eq!(FACTS.len(), 5);
        assert_eq!(BREEDS.len(), 5);
        assert!(!CHARACTERISTICS.is_empty());
    }

    #[test]
    fn breed_ratings_fit_five_star_scale() {
        for breed in BREEDS {
            assert!(
                (0.0..=5.0).contains(&breed.rating),
                "{} rated {}",
                breed.name,
                breed.rating
            );
        }
    }
}
