use rand::prelude::*;

/// Letters a round can start with
pub const LETTERS: [char; 17] = [
    'A', 'B', 'D', 'F', 'G', 'H', 'K', 'L', 'W', 'V', 'T', 'S', 'R', 'P', 'O', 'N', 'M',
];

/// The built-in categories
pub const CATEGORIES: [&str; 9] = [
    "Een kledingstuk",
    "Een jongensnaam",
    "Een meisjesnaam",
    "Iets dat geluid maakt",
    "Iets zoets",
    "Iets zuurs",
    "Iets rond",
    "Iets warm",
    "Iets koud",
];

/// One letter/category pair and the question posed for it
///
/// A round never changes after creation, playing again replaces it.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Round {
    letter: char,
    category: String,
    question: String,
}

impl Round {
    pub fn new(letter: char, category: impl Into<String>) -> Self {
        let category = category.into();
        let question = format!("{} dat begint met de letter {}", category, letter);

        Round {
            letter,
            category,
            question,
        }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn question(&self) -> &str {
        &self.question
    }
}

/// Draws rounds uniformly from a letter set and a category set
#[derive(Clone, Debug)]
pub struct RoundGenerator {
    letters: Vec<char>,
    categories: Vec<String>,
}

impl RoundGenerator {
    pub fn new() -> Self {
        RoundGenerator {
            letters: LETTERS.to_vec(),
            categories: CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Use a different category set, falls back to the built-in one if empty
    pub fn with_categories(categories: Vec<String>) -> Self {
        if categories.is_empty() {
            return Self::new();
        }

        RoundGenerator {
            letters: LETTERS.to_vec(),
            categories,
        }
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Pick letter and category independently
    ///
    /// Nothing guarantees the pair has an answer, "Iets zoets" with "W" is
    /// as likely as any other combination.
    pub fn new_round<R: Rng + ?Sized>(&self, rng: &mut R) -> Round {
        // Both sets are non-empty by construction
        let letter = *self.letters.choose(rng).unwrap_or(&LETTERS[0]);
        let category = self
            .categories
            .choose(rng)
            .map(String::as_str)
            .unwrap_or(CATEGORIES[0]);

        Round::new(letter, category)
    }
}

impl Default for RoundGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    #[test]
    fn question_is_template_substitution() {
        let round = Round::new('B', "Een jongensnaam");

        assert_eq!(round.letter(), 'B');
        assert_eq!(round.category(), "Een jongensnaam");
        assert_eq!(round.question(), "Een jongensnaam dat begint met de letter B");
    }

    #[test]
    fn rounds_stay_within_the_fixed_sets() {
        let generator = RoundGenerator::new();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..2000 {
            let round = generator.new_round(&mut rng);

            assert!(LETTERS.contains(&round.letter()));
            assert!(CATEGORIES.contains(&round.category()));
            assert_eq!(
                round.question(),
                format!("{} dat begint met de letter {}", round.category(), round.letter())
            );
        }
    }

    #[test]
    fn every_letter_and_category_shows_up() {
        let generator = RoundGenerator::new();
        let mut rng = StdRng::seed_from_u64(42);

        let mut letters = std::collections::HashSet::new();
        let mut categories = std::collections::HashSet::new();
        for _ in 0..5000 {
            let round = generator.new_round(&mut rng);
            letters.insert(round.letter());
            categories.insert(round.category().to_string());
        }

        assert_eq!(letters.len(), LETTERS.len());
        assert_eq!(categories.len(), CATEGORIES.len());
    }

    #[test]
    fn same_seed_same_rounds() {
        let generator = RoundGenerator::new();
        let mut first = StdRng::seed_from_u64(1234);
        let mut second = StdRng::seed_from_u64(1234);

        for _ in 0..50 {
            assert_eq!(generator.new_round(&mut first), generator.new_round(&mut second));
        }
    }

    #[test]
    fn custom_categories_are_used() {
        let generator = RoundGenerator::with_categories(vec!["Een dier".to_string()]);
        let mut rng = StdRng::seed_from_u64(3);

        let round = generator.new_round(&mut rng);
        assert_eq!(round.category(), "Een dier");
        assert_eq!(generator.letters().len(), 17);
    }

    #[test]
    fn empty_categories_fall_back_to_builtin() {
        let generator = RoundGenerator::with_categories(vec![]);
        assert_eq!(generator.categories().len(), CATEGORIES.len());
    }
}
