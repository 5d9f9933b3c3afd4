//! Clause families for the Einstein/Zebra "five houses" logic puzzle.
//!
//! Five categories (nationality, house color, beverage, cigarette brand,
//! pet) are each assigned bijectively to five houses. A propositional
//! variable `var(category, house, value)` is true iff `value` is the one
//! assigned to `house` within `category`.

const CATEGORIES: usize = 5;
const HOUSES: usize = 5;
const VALUES: usize = 5;

pub const NUM_VARS: usize = CATEGORIES * HOUSES * VALUES;

fn var(category: usize, house: usize, value: usize) -> i64 {
    ((category * HOUSES + house) * VALUES + value + 1) as i64
}

/// Every clause from every constraint family, in DIMACS literal form.
pub fn build_clauses() -> Vec<Vec<i64>> {
    let mut clauses = Vec::new();
    clauses.extend(assignment_clauses());
    clauses.extend(bijection_clauses());
    for pairs in clues() {
        clauses.extend(implication_clauses(&pairs));
    }
    clauses.extend(facts());
    clauses
}

/// Every house has at least one value per category, and at most one.
fn assignment_clauses() -> Vec<Vec<i64>> {
    let mut clauses = Vec::new();
    for category in 0..CATEGORIES {
        for house in 0..HOUSES {
            clauses.push((0..VALUES).map(|value| var(category, house, value)).collect());
            for v1 in 0..VALUES {
                for v2 in (v1 + 1)..VALUES {
                    clauses.push(vec![-var(category, house, v1), -var(category, house, v2)]);
                }
            }
        }
    }
    clauses
}

/// Each value within a category is taken by at most one house, making the
/// category-to-house mapping a bijection rather than merely a function.
fn bijection_clauses() -> Vec<Vec<i64>> {
    let mut clauses = Vec::new();
    for category in 0..CATEGORIES {
        for value in 0..VALUES {
            for h1 in 0..HOUSES {
                for h2 in (h1 + 1)..HOUSES {
                    clauses.push(vec![-var(category, h1, value), -var(category, h2, value)]);
                }
            }
        }
    }
    clauses
}

/// Clauses asserted as bare unit facts ("the middle house drinks milk",
/// "the Norwegian lives in the first house").
fn facts() -> Vec<Vec<i64>> {
    vec![vec![var(2, 2, 2)], vec![var(0, 0, 3)]]
}

/// Expands a DNF given as one `(literal_a, literal_b)` choice per house (or
/// per adjacency pair) into the CNF product a DIMACS writer needs, mirroring
/// the `itertools.product` sweep the puzzle was originally encoded with.
/// Literals and whole clauses are deduplicated, since adjacency pairs can
/// repeat a house on both sides of the choice.
fn implication_clauses(pairs: &[(i64, i64)]) -> Vec<Vec<i64>> {
    let mut clauses: Vec<Vec<i64>> = vec![Vec::new()];
    for &(a, b) in pairs {
        clauses = clauses
            .into_iter()
            .flat_map(|prefix| {
                [a, b].iter().map(move |&lit| {
                    let mut next = prefix.clone();
                    next.push(lit);
                    next
                })
            })
            .collect();
    }
    for clause in clauses.iter_mut() {
        clause.sort_unstable();
        clause.dedup();
    }
    clauses.sort();
    clauses.dedup();
    clauses
}

/// Biconditional and adjacency clues from the classic puzzle statement,
/// each given as the list of `(literal_a, literal_b)` choices that the
/// per-house (or per-adjacency) DNF term expands into.
fn clues() -> Vec<Vec<(i64, i64)>> {
    let nat = 0;
    let color = 1;
    let bev = 2;
    let cig = 3;
    let pet = 4;

    let brit = 0;
    let swede = 1;
    let dane = 2;
    let norwegian = 3;
    let german = 4;

    let red = 0;
    let green = 1;
    let white = 2;
    let yellow = 3;
    let blue = 4;

    let coffee = 0;
    let tea = 1;
    let milk = 2;
    let beer = 3;
    let water = 4;

    let pallmall = 0;
    let dunhill = 1;
    let blends = 2;
    let bluemasters = 3;
    let prince = 4;

    let dog = 0;
    let birds = 1;
    let cats = 2;
    let horse = 3;

    let by_house = |cat_a: usize, val_a: usize, cat_b: usize, val_b: usize| -> Vec<(i64, i64)> {
        (0..HOUSES).map(|h| (var(cat_a, h, val_a), var(cat_b, h, val_b))).collect()
    };

    let left_of = |cat_a: usize, val_a: usize, cat_b: usize, val_b: usize| -> Vec<(i64, i64)> {
        (0..HOUSES - 1).map(|h| (var(cat_a, h, val_a), var(cat_b, h + 1, val_b))).collect()
    };

    let next_to = |cat_a: usize, val_a: usize, cat_b: usize, val_b: usize| -> Vec<(i64, i64)> {
        let mut out = Vec::new();
        for h in 0..HOUSES {
            if h > 0 {
                out.push((var(cat_a, h, val_a), var(cat_b, h - 1, val_b)));
            }
            if h < HOUSES - 1 {
                out.push((var(cat_a, h, val_a), var(cat_b, h + 1, val_b)));
            }
        }
        out
    };

    vec![
        by_house(nat, brit, color, red),
        by_house(nat, swede, pet, dog),
        left_of(color, green, color, white),
        by_house(nat, dane, bev, tea),
        by_house(color, green, bev, coffee),
        by_house(cig, pallmall, pet, birds),
        by_house(color, yellow, cig, dunhill),
        next_to(cig, blends, pet, cats),
        next_to(pet, horse, cig, dunhill),
        by_house(cig, bluemasters, bev, beer),
        by_house(nat, german, cig, prince),
        next_to(nat, norwegian, color, blue),
        next_to(cig, blends, bev, water),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variable_is_within_range() {
        for clause in build_clauses() {
            for lit in clause {
                assert!(lit != 0 && (lit.abs() as usize) <= NUM_VARS);
            }
        }
    }

    #[test]
    fn each_house_has_an_at_least_one_nationality_clause() {
        let clauses = assignment_clauses();
        assert!(clauses.iter().any(|c| c.len() == VALUES && c.iter().all(|&l| l > 0)));
    }

    #[test]
    fn facts_are_unit_clauses() {
        for clause in facts() {
            assert_eq!(clause.len(), 1);
        }
    }

    #[test]
    fn implication_clauses_dedupe_literals_within_a_clause() {
        let pairs = vec![(1, 2), (2, 3)];
        let clauses = implication_clauses(&pairs);
        for clause in &clauses {
            let mut sorted = clause.clone();
            sorted.sort_unstable();
            let before = sorted.len();
            sorted.dedup();
            assert_eq!(sorted.len(), before);
        }
    }
}
