use serde::{Deserialize, Serialize};

use crate::api::types::EngineError;
use crate::core::catalog::Category;

/// Cards are always 5x5.
pub const GRID_SIZE: usize = 5;
/// The free space sits at the fixed center cell.
pub const FREE_ROW: usize = 2;
pub const FREE_COL: usize = 2;
/// Words drawn per card (every cell except the free space).
pub const CARD_WORDS: usize = GRID_SIZE * GRID_SIZE - 1;

/// Seedable pseudo-random number generator (xorshift64).
/// Deterministic, fast, no-std compatible.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random number in [0, upper_bound).
    pub fn next_int(&mut self, upper_bound: u32) -> u32 {
        (self.next_u64() % upper_bound as u64) as u32
    }

    /// Uniform in-place Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_int(i as u32 + 1) as usize;
            items.swap(i, j);
        }
    }
}

/// One cell of the card.
/// Invariants: `is_auto_filled` implies `is_filled`; `filled_at` is set
/// iff `is_filled`, except the free space which is filled from creation
/// and keeps `filled_at = None` (it was never filled by an event).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BingoSquare {
    pub word: String,
    pub is_free_space: bool,
    pub is_filled: bool,
    pub is_auto_filled: bool,
    pub filled_at: Option<i64>,
}

impl BingoSquare {
    fn with_word(word: String) -> Self {
        Self {
            word,
            is_free_space: false,
            is_filled: false,
            is_auto_filled: false,
            filled_at: None,
        }
    }

    fn free_space() -> Self {
        Self {
            word: "FREE".to_string(),
            is_free_space: true,
            is_filled: true,
            is_auto_filled: false,
            filled_at: None,
        }
    }
}

/// A generated card: the 24 drawn words plus the 5x5 square grid.
/// Owned exclusively by one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BingoCard {
    /// The non-free canonical words drawn for this game, in placement order.
    pub words: Vec<String>,
    /// Row-major 5x5 grid.
    pub squares: Vec<Vec<BingoSquare>>,
}

impl BingoCard {
    pub fn square(&self, row: usize, col: usize) -> Option<&BingoSquare> {
        self.squares.get(row).and_then(|r| r.get(col))
    }

    pub fn square_mut(&mut self, row: usize, col: usize) -> Option<&mut BingoSquare> {
        self.squares.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Iterate all squares with their grid position.
    pub fn iter_squares(&self) -> impl Iterator<Item = (usize, usize, &BingoSquare)> {
        self.squares
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, sq)| (r, c, sq)))
    }
}

/// Build a fresh card from a category: shuffle the word list, take 24,
/// lay them out row-major around the pre-filled center free space.
pub fn generate_card(category: &Category, rng: &mut Rng) -> Result<BingoCard, EngineError> {
    if category.words.len() < CARD_WORDS {
        return Err(EngineError::InsufficientWords {
            category: category.id.clone(),
            have: category.words.len(),
        });
    }

    let mut pool = category.words.clone();
    rng.shuffle(&mut pool);
    pool.truncate(CARD_WORDS);

    let mut squares = Vec::with_capacity(GRID_SIZE);
    let mut next = 0usize;
    for row in 0..GRID_SIZE {
        let mut cells = Vec::with_capacity(GRID_SIZE);
        for col in 0..GRID_SIZE {
            if row == FREE_ROW && col == FREE_COL {
                cells.push(BingoSquare::free_space());
            } else {
                cells.push(BingoSquare::with_word(pool[next].clone()));
                next += 1;
            }
        }
        squares.push(cells);
    }

    Ok(BingoCard { words: pool, squares })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{CategoryCatalog, CategoryId};

    fn corporate() -> Category {
        CategoryCatalog::builtin()
            .get(&CategoryId::from("corporate"))
            .unwrap()
            .clone()
    }

    #[test]
    fn rng_deterministic() {
        let mut a = Rng::new(42);
        let mut b = Rng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_int(1000), b.next_int(1000));
        }
    }

    #[test]
    fn rng_zero_seed_handled() {
        let mut rng = Rng::new(0);
        let _ = rng.next_int(100);
    }

    #[test]
    fn shuffle_keeps_all_elements() {
        let mut rng = Rng::new(7);
        let mut items: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<u32>>());
    }

    #[test]
    fn generate_draws_24_distinct_category_words() {
        let category = corporate();
        let mut rng = Rng::new(42);
        let card = generate_card(&category, &mut rng).unwrap();

        assert_eq!(card.words.len(), CARD_WORDS);
        let mut seen = std::collections::HashSet::new();
        for word in &card.words {
            assert!(seen.insert(word.clone()), "duplicate on card: {}", word);
            assert!(category.words.contains(word));
        }
    }

    #[test]
    fn free_space_is_center_and_prefilled() {
        let mut rng = Rng::new(42);
        let card = generate_card(&corporate(), &mut rng).unwrap();

        for (row, col, sq) in card.iter_squares() {
            let center = row == FREE_ROW && col == FREE_COL;
            assert_eq!(sq.is_free_space, center);
            assert_eq!(sq.is_filled, center);
            assert!(sq.filled_at.is_none());
            assert!(!sq.is_auto_filled);
        }
    }

    #[test]
    fn same_seed_same_card() {
        let category = corporate();
        let a = generate_card(&category, &mut Rng::new(9)).unwrap();
        let b = generate_card(&category, &mut Rng::new(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn too_few_words_is_an_error() {
        let mut category = corporate();
        category.words.truncate(10);
        let err = generate_card(&category, &mut Rng::new(1)).unwrap_err();
        assert_eq!(
            err,
            EngineError::InsufficientWords {
                category: CategoryId::from("corporate"),
                have: 10,
            }
        );
    }

    #[test]
    fn square_serde_uses_camel_case() {
        let sq = BingoSquare::free_space();
        let json = serde_json::to_string(&sq).unwrap();
        assert!(json.contains("isFreeSpace"));
        assert!(json.contains("filledAt"));
        let back: BingoSquare = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sq);
    }
}
